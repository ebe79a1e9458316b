//! Toast notifications attached to page view models.

use serde::Serialize;

use yugam_core::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Error,
}

/// One toast shown by the browser shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

/// Collects toasts while a page's fetches are settled.
#[derive(Debug, Clone, Default)]
pub struct Toasts(Vec<Toast>);

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unwrap a list fetch. On failure the list is empty and `message` is
    /// queued as an error toast.
    pub fn settle<T>(&mut self, result: AppResult<Vec<T>>, message: &str) -> Vec<T> {
        self.settle_one(result, message).unwrap_or_default()
    }

    /// Unwrap a single-record fetch.
    pub fn settle_one<T>(&mut self, result: AppResult<T>, message: &str) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(error = %e, "{message}");
                self.0.push(Toast::error(message));
                None
            }
        }
    }

    pub fn into_vec(self) -> Vec<Toast> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yugam_core::AppError;

    #[test]
    fn test_failed_fetch_leaves_list_empty_and_queues_toast() {
        let mut toasts = Toasts::new();
        let ok: Vec<u32> = toasts.settle(Ok(vec![1, 2]), "Failed to fetch events");
        let failed: Vec<u32> = toasts.settle(
            Err(AppError::service_unavailable("down")),
            "Failed to fetch workshops",
        );

        assert_eq!(ok, vec![1, 2]);
        assert!(failed.is_empty());
        assert_eq!(
            toasts.into_vec(),
            vec![Toast::error("Failed to fetch workshops")]
        );
    }

    #[test]
    fn test_toast_serializes_lowercase_kind() {
        let json = serde_json::to_value(Toast::error("boom")).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "error", "message": "boom" }));
    }
}
