pub mod board;
pub mod drop;
pub mod error;
pub mod status;
pub mod task;

pub use board::BoardColumns;
pub use drop::{DropEvent, DropTarget};
pub use error::{ApiError, SyncError};
pub use status::Status;
pub use task::{Priority, Task};
