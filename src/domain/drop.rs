use super::Status;

/// Where a drag gesture ended: a column and a position within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    pub status: Status,
    pub index: usize,
}

/// A completed drag gesture as reported by the UI shell. `destination` is
/// `None` when the gesture was cancelled (dropped outside any column).
#[derive(Debug, Clone)]
pub struct DropEvent {
    pub task_id: String,
    pub source_status: Status,
    pub source_index: usize,
    pub destination: Option<DropTarget>,
}

impl DropEvent {
    pub fn new(
        task_id: impl Into<String>,
        source_status: Status,
        source_index: usize,
        destination: Option<DropTarget>,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            source_status,
            source_index,
            destination,
        }
    }
}
