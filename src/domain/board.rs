use serde::Serialize;

use super::{Status, Task};

/// The four board columns, derived purely from each task's `status`. Rebuilt
/// from scratch on every state change; holds no index of its own.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BoardColumns {
    pub todo: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub review: Vec<Task>,
    pub completed: Vec<Task>,
}

impl BoardColumns {
    /// Stable partition: every task lands in exactly one column and each
    /// column preserves the relative order of the input collection.
    pub fn partition(tasks: &[Task]) -> Self {
        let mut board = Self::default();
        for task in tasks {
            match task.status {
                Status::Todo => board.todo.push(task.clone()),
                Status::InProgress => board.in_progress.push(task.clone()),
                Status::Review => board.review.push(task.clone()),
                Status::Completed => board.completed.push(task.clone()),
            }
        }
        board
    }

    pub fn column(&self, status: Status) -> &[Task] {
        match status {
            Status::Todo => &self.todo,
            Status::InProgress => &self.in_progress,
            Status::Review => &self.review,
            Status::Completed => &self.completed,
        }
    }

    pub fn total(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.review.len() + self.completed.len()
    }
}
