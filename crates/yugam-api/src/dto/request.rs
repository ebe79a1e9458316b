//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use yugam_client::auth::LoginRequest;
use yugam_core::AppResult;
use yugam_entity::event::CreateEventRequest;
use yugam_entity::workshop::CreateWorkshopRequest;
use yugam_entity::{ApprovalDecision, ApprovalStatus};

/// `POST /login` body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    /// Email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl From<LoginForm> for LoginRequest {
    fn from(form: LoginForm) -> Self {
        Self {
            email: form.email,
            password: form.password,
        }
    }
}

/// Event and workshop create forms share one shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProgramForm {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,
    #[validate(range(min = 1, message = "Expected participants must be at least 1"))]
    pub expected_participants: Option<u32>,
    pub venue: Option<String>,
    /// Local date-time as entered, e.g. `2024-12-25T10:00`.
    pub date_time: Option<String>,
    #[validate(email(message = "Coordinator email must be a valid email"))]
    pub coordinator_email: Option<String>,
}

pub type CreateEventForm = ProgramForm;
pub type CreateWorkshopForm = ProgramForm;

/// Blank optional inputs are sent as absent.
fn present(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl From<ProgramForm> for CreateEventRequest {
    fn from(form: ProgramForm) -> Self {
        Self {
            title: form.title.trim().to_string(),
            description: present(form.description),
            expected_participants: form.expected_participants,
            venue: present(form.venue),
            date_time: present(form.date_time),
            coordinator_email: present(form.coordinator_email),
        }
    }
}

impl From<ProgramForm> for CreateWorkshopRequest {
    fn from(form: ProgramForm) -> Self {
        Self {
            title: form.title.trim().to_string(),
            description: present(form.description),
            expected_participants: form.expected_participants,
            venue: present(form.venue),
            date_time: present(form.date_time),
            coordinator_email: present(form.coordinator_email),
        }
    }
}

/// Approve/reject body for events, workshops and budgets.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApprovalForm {
    /// `APPROVED` or `REJECTED`.
    pub status: ApprovalStatus,
    /// Reviewer remarks.
    #[serde(default)]
    #[validate(length(max = 1000, message = "Remarks must be at most 1000 characters"))]
    pub remarks: Option<String>,
}

impl ApprovalForm {
    pub fn into_decision(self) -> AppResult<ApprovalDecision> {
        ApprovalDecision::new(self.status, self.remarks.unwrap_or_default())
    }
}
