use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{ApiError, Status, Task};

/// Partial update payload. Only fields that are present are serialized, so
/// the backend sees exactly what changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl TaskPatch {
    pub fn status(status: Status) -> Self {
        Self {
            status: Some(status),
        }
    }
}

/// Remote task store the board synchronizes against.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Fetches the full task collection.
    async fn list(&self) -> Result<Vec<Task>, ApiError>;

    /// Applies a partial update and returns the updated task. The returned
    /// task may be an idempotent echo of what was sent.
    async fn update(&self, id: &str, patch: &TaskPatch) -> Result<Task, ApiError>;
}
