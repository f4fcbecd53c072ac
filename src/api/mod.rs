pub mod http;
pub mod memory;
pub mod task_api;

pub use http::HttpTaskApi;
pub use memory::{FailureMode, InMemoryTaskApi};
pub use task_api::{TaskApi, TaskPatch};
