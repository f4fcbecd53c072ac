use std::sync::Arc;

use taskboard_sync::api::InMemoryTaskApi;
use taskboard_sync::domain::{DropEvent, DropTarget, Priority, Status, Task};
use taskboard_sync::services::{BoardNotifier, StatusSyncController};

pub fn task(id: &str, title: &str, status: Status) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        status,
        priority: Priority::default(),
        project_id: None,
        assigned_to: None,
        due_date: None,
        created_date: None,
        updated_date: None,
    }
}

pub async fn board_with(tasks: Vec<Task>) -> (StatusSyncController, Arc<InMemoryTaskApi>) {
    let api = Arc::new(InMemoryTaskApi::seeded(tasks));
    let mut controller = StatusSyncController::new(api.clone(), BoardNotifier::new(16));
    controller
        .load()
        .await
        .expect("seeded in-memory list cannot fail");
    (controller, api)
}

pub fn drop_to(
    task_id: &str,
    from: Status,
    from_index: usize,
    to: Status,
    to_index: usize,
) -> DropEvent {
    DropEvent::new(
        task_id,
        from,
        from_index,
        Some(DropTarget {
            status: to,
            index: to_index,
        }),
    )
}

pub fn cancelled_drop(task_id: &str, from: Status, from_index: usize) -> DropEvent {
    DropEvent::new(task_id, from, from_index, None)
}
