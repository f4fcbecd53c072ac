/// Failures returned by Task API adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend refused the request (validation failure, stale id,
    /// any non-success response).
    #[error("update rejected: {0}")]
    Rejected(String),

    /// The backend could not be reached (connect failure, timeout, dropped
    /// connection).
    #[error("backend unreachable: {0}")]
    Unreachable(String),
}

/// Failures surfaced by the board synchronizer after a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    #[error("unknown task: {0}")]
    UnknownTask(String),

    #[error("update rejected for task {task_id}: {reason}")]
    UpdateRejected { task_id: String, reason: String },

    #[error("backend unreachable for task {task_id}: {reason}")]
    UpdateUnreachable { task_id: String, reason: String },
}

impl SyncError {
    pub fn from_api(task_id: &str, err: ApiError) -> Self {
        match err {
            ApiError::Rejected(reason) => SyncError::UpdateRejected {
                task_id: task_id.to_string(),
                reason,
            },
            ApiError::Unreachable(reason) => SyncError::UpdateUnreachable {
                task_id: task_id.to_string(),
                reason,
            },
        }
    }
}
