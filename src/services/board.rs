use std::collections::HashMap;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::api::{TaskApi, TaskPatch};
use crate::domain::{ApiError, BoardColumns, DropEvent, Status, SyncError, Task};

use super::notifier::BoardNotifier;

/// Result of the synchronous drop-handling phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Cancelled gesture, same slot, or a position-only move within a
    /// column. Nothing changed, nothing to persist.
    NoOp,
    /// The event referenced a task not on the board. Logged, not surfaced.
    UnknownTask,
    /// The optimistic mutation was applied; the ticket describes the write
    /// that must now be issued.
    Update(UpdateTicket),
}

/// A status write the board has applied locally but not yet confirmed.
/// `prior` is retained so a failed write can restore the exact pre-move
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTicket {
    pub task_id: String,
    pub target: Status,
    pub prior: Status,
}

/// A completed backend write, paired with the ticket that issued it.
#[derive(Debug)]
pub struct UpdateResolution {
    pub ticket: UpdateTicket,
    pub result: Result<Task, ApiError>,
}

#[derive(Debug)]
pub enum ReconcileOutcome {
    /// The backend confirmed the newest write for this task.
    Confirmed,
    /// The resolution belongs to a write that a later move superseded.
    /// Discarded so it cannot clobber newer optimistic state.
    Stale,
    /// The write failed while still current; the optimistic change was
    /// reverted and a notice emitted.
    Reverted(SyncError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    NoOp,
    /// Unknown task id; nothing was mutated or sent.
    Ignored,
    Synced,
}

/// Owns the in-memory task collection behind the board and keeps its column
/// partition consistent with backend truth.
///
/// All mutation funnels through [`handle_drop`](Self::handle_drop) /
/// [`reconcile`](Self::reconcile); the collection is never shared. Drop
/// events and write resolutions are expected on one execution context, so
/// the optimistic mutation always completes before any await point and a
/// render observes either pre-move or fully-moved state.
pub struct StatusSyncController {
    api: Arc<dyn TaskApi>,
    notifier: BoardNotifier,
    tasks: Vec<Task>,
    /// Newest issued target status per task, kept until that write resolves.
    /// This is the staleness guard for rapid re-moves of one task.
    pending: HashMap<String, Status>,
}

impl StatusSyncController {
    pub fn new(api: Arc<dyn TaskApi>, notifier: BoardNotifier) -> Self {
        Self {
            api,
            notifier,
            tasks: Vec::new(),
            pending: HashMap::new(),
        }
    }

    /// Bulk fetch at view mount (and on full reload). Replaces the
    /// collection wholesale and forgets any pending targets.
    pub async fn load(&mut self) -> Result<usize, ApiError> {
        let tasks = self.api.list().await?;
        tracing::debug!(count = tasks.len(), "task collection loaded");
        self.pending.clear();
        self.tasks = tasks;
        Ok(self.tasks.len())
    }

    /// Synchronous phase of a move: validates the gesture, applies the
    /// optimistic status change, and hands back the ticket for the durable
    /// write. Issues no network traffic itself.
    pub fn handle_drop(&mut self, event: &DropEvent) -> DropOutcome {
        let Some(target) = event.destination else {
            return DropOutcome::NoOp;
        };

        if target.status == event.source_status && target.index == event.source_index {
            return DropOutcome::NoOp;
        }

        let Some(task) = self.tasks.iter_mut().find(|t| t.id == event.task_id) else {
            tracing::warn!(
                task_id = event.task_id,
                "drop references a task not on the board"
            );
            return DropOutcome::UnknownTask;
        };

        // Intra-column reordering is not persisted state.
        if task.status == target.status {
            return DropOutcome::NoOp;
        }

        let prior = task.status;
        task.status = target.status;
        self.pending.insert(event.task_id.clone(), target.status);

        tracing::debug!(
            task_id = event.task_id,
            from = prior.as_str(),
            to = target.status.as_str(),
            "optimistic status applied"
        );

        DropOutcome::Update(UpdateTicket {
            task_id: event.task_id.clone(),
            target: target.status,
            prior,
        })
    }

    /// Issues the durable write for a ticket. The returned future does not
    /// borrow the controller, so further drops can be handled while writes
    /// are in flight; a write is never cancelled once issued.
    pub fn begin_update(&self, ticket: UpdateTicket) -> BoxFuture<'static, UpdateResolution> {
        let api = Arc::clone(&self.api);
        Box::pin(async move {
            let patch = TaskPatch::status(ticket.target);
            let result = api.update(&ticket.task_id, &patch).await;
            UpdateResolution { ticket, result }
        })
    }

    /// Applies a write resolution to local state.
    ///
    /// A failure reverts only while the task's current status still equals
    /// the status this write was trying to persist; anything else is stale
    /// and discarded, so an old resolution can never clobber a newer
    /// optimistic state.
    pub fn reconcile(&mut self, resolution: UpdateResolution) -> ReconcileOutcome {
        let UpdateResolution { ticket, result } = resolution;
        let newest = self.pending.get(&ticket.task_id).copied();

        match result {
            Ok(_echo) => {
                if newest == Some(ticket.target) {
                    self.pending.remove(&ticket.task_id);
                    tracing::debug!(
                        task_id = ticket.task_id,
                        status = ticket.target.as_str(),
                        "status confirmed by backend"
                    );
                    ReconcileOutcome::Confirmed
                } else {
                    tracing::debug!(
                        task_id = ticket.task_id,
                        "stale confirmation discarded"
                    );
                    ReconcileOutcome::Stale
                }
            }
            Err(err) => {
                let current = self
                    .tasks
                    .iter()
                    .find(|t| t.id == ticket.task_id)
                    .map(|t| t.status);

                if current != Some(ticket.target) || newest != Some(ticket.target) {
                    tracing::debug!(
                        task_id = ticket.task_id,
                        "stale failure discarded; a newer move superseded this write"
                    );
                    return ReconcileOutcome::Stale;
                }

                if let Some(task) = self.tasks.iter_mut().find(|t| t.id == ticket.task_id) {
                    task.status = ticket.prior;
                }
                self.pending.remove(&ticket.task_id);

                let err = SyncError::from_api(&ticket.task_id, err);
                tracing::warn!(
                    task_id = ticket.task_id,
                    error = %err,
                    "status update failed; optimistic change reverted"
                );
                self.notifier.notify_failure(&ticket.task_id, &err);

                ReconcileOutcome::Reverted(err)
            }
        }
    }

    /// Serial convenience path: handle the drop, await its write, reconcile.
    /// Overlapping moves should use [`handle_drop`](Self::handle_drop) and
    /// [`begin_update`](Self::begin_update) directly.
    pub async fn move_task(&mut self, event: &DropEvent) -> Result<MoveOutcome, SyncError> {
        let ticket = match self.handle_drop(event) {
            DropOutcome::NoOp => return Ok(MoveOutcome::NoOp),
            DropOutcome::UnknownTask => return Ok(MoveOutcome::Ignored),
            DropOutcome::Update(ticket) => ticket,
        };

        let resolution = self.begin_update(ticket).await;
        match self.reconcile(resolution) {
            ReconcileOutcome::Reverted(err) => Err(err),
            ReconcileOutcome::Confirmed | ReconcileOutcome::Stale => Ok(MoveOutcome::Synced),
        }
    }

    /// Current column partition, recomputed from scratch.
    pub fn columns_view(&self) -> BoardColumns {
        BoardColumns::partition(&self.tasks)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task_status(&self, id: &str) -> Option<Status> {
        self.tasks.iter().find(|t| t.id == id).map(|t| t.status)
    }

    /// True while a write for this task is awaiting confirmation.
    pub fn has_pending_update(&self, id: &str) -> bool {
        self.pending.contains_key(id)
    }

    pub fn notifier(&self) -> &BoardNotifier {
        &self.notifier
    }
}
