//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The seven fixed portal roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Full administrator; listed in every restricted route set.
    Admin,
    /// Reviews budgets and expenses.
    FinanceTeam,
    /// Creates and runs events.
    EventTeamLead,
    /// Creates and runs workshops.
    WorkshopTeamLead,
    /// Venues, products and facility expenses.
    FacilitiesTeam,
    /// Coordinates events assigned to them.
    EventCoordinator,
    /// Coordinates workshops assigned to them.
    WorkshopCoordinator,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Role; 7] = [
        Role::Admin,
        Role::FinanceTeam,
        Role::EventTeamLead,
        Role::WorkshopTeamLead,
        Role::FacilitiesTeam,
        Role::EventCoordinator,
        Role::WorkshopCoordinator,
    ];

    /// Wire representation, e.g. `EVENT_TEAM_LEAD`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::FinanceTeam => "FINANCE_TEAM",
            Self::EventTeamLead => "EVENT_TEAM_LEAD",
            Self::WorkshopTeamLead => "WORKSHOP_TEAM_LEAD",
            Self::FacilitiesTeam => "FACILITIES_TEAM",
            Self::EventCoordinator => "EVENT_COORDINATOR",
            Self::WorkshopCoordinator => "WORKSHOP_COORDINATOR",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::FinanceTeam => "Finance Team",
            Self::EventTeamLead => "Event Team Lead",
            Self::WorkshopTeamLead => "Workshop Team Lead",
            Self::FacilitiesTeam => "Facilities Team",
            Self::EventCoordinator => "Event Coordinator",
            Self::WorkshopCoordinator => "Workshop Coordinator",
        }
    }

    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = yugam_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| yugam_core::AppError::validation(format!("Invalid role: '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(
            "workshop_team_lead".parse::<Role>().unwrap(),
            Role::WorkshopTeamLead
        );
        assert!("SUPERUSER".parse::<Role>().is_err());
    }

    #[test]
    fn test_serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&Role::EventCoordinator).unwrap();
        assert_eq!(json, "\"EVENT_COORDINATOR\"");
        let role: Role = serde_json::from_str("\"FACILITIES_TEAM\"").unwrap();
        assert_eq!(role, Role::FacilitiesTeam);
    }

    #[test]
    fn test_as_str_round_trips_for_all_roles() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }
}
