use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{ApiError, Task};

use super::{TaskApi, TaskPatch};

/// How a scripted failure should present itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    Reject,
    Unreachable,
}

#[derive(Debug, Default)]
struct MemoryState {
    tasks: Vec<Task>,
    failures: HashMap<String, FailureMode>,
    list_failure: Option<FailureMode>,
    update_calls: Vec<(String, TaskPatch)>,
}

/// In-memory task store for tests and local development. Records every
/// update call and can be scripted to fail updates for specific task ids.
#[derive(Debug, Default)]
pub struct InMemoryTaskApi {
    state: Mutex<MemoryState>,
}

impl InMemoryTaskApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(tasks: Vec<Task>) -> Self {
        Self {
            state: Mutex::new(MemoryState {
                tasks,
                ..MemoryState::default()
            }),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryState>, ApiError> {
        self.state
            .lock()
            .map_err(|_| ApiError::Unreachable("in-memory state lock poisoned".into()))
    }

    pub fn insert(&self, task: Task) {
        if let Ok(mut state) = self.state.lock() {
            state.tasks.push(task);
        }
    }

    /// Fails every subsequent update for `id` until cleared.
    pub fn fail_update(&self, id: &str, mode: FailureMode) {
        if let Ok(mut state) = self.state.lock() {
            state.failures.insert(id.to_string(), mode);
        }
    }

    pub fn clear_failure(&self, id: &str) {
        if let Ok(mut state) = self.state.lock() {
            state.failures.remove(id);
        }
    }

    /// Fails every subsequent list call until cleared.
    pub fn fail_list(&self, mode: FailureMode) {
        if let Ok(mut state) = self.state.lock() {
            state.list_failure = Some(mode);
        }
    }

    pub fn clear_list_failure(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.list_failure = None;
        }
    }

    /// Every update call received so far, in arrival order, including ones
    /// that were scripted to fail.
    pub fn update_calls(&self) -> Vec<(String, TaskPatch)> {
        self.state
            .lock()
            .map(|state| state.update_calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TaskApi for InMemoryTaskApi {
    async fn list(&self) -> Result<Vec<Task>, ApiError> {
        let state = self.lock()?;

        if let Some(mode) = state.list_failure {
            return Err(match mode {
                FailureMode::Reject => ApiError::Rejected("scripted rejection".into()),
                FailureMode::Unreachable => ApiError::Unreachable("scripted outage".into()),
            });
        }

        Ok(state.tasks.clone())
    }

    async fn update(&self, id: &str, patch: &TaskPatch) -> Result<Task, ApiError> {
        let mut state = self.lock()?;
        state.update_calls.push((id.to_string(), patch.clone()));

        if let Some(mode) = state.failures.get(id) {
            return Err(match mode {
                FailureMode::Reject => ApiError::Rejected("scripted rejection".into()),
                FailureMode::Unreachable => ApiError::Unreachable("scripted outage".into()),
            });
        }

        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ApiError::Rejected(format!("task not found: {}", id)))?;

        if let Some(status) = patch.status {
            task.status = status;
        }
        task.updated_date = Some(Utc::now().to_rfc3339());

        Ok(task.clone())
    }
}
