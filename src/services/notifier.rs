use serde::Serialize;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;

use crate::domain::SyncError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    UpdateRejected,
    UpdateUnreachable,
}

/// One notice per failed write that actually reverted the board. The UI
/// shell drives a toast from these.
#[derive(Debug, Clone, Serialize)]
pub struct BoardNotice {
    pub task_id: String,
    pub kind: NoticeKind,
    pub message: String,
}

/// Broadcast fan-out for sync failures. Cloning shares the channel.
#[derive(Debug, Clone)]
pub struct BoardNotifier {
    tx: broadcast::Sender<BoardNotice>,
}

impl BoardNotifier {
    pub fn new(buffer: usize) -> Self {
        let (tx, _rx) = broadcast::channel(buffer);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BoardNotice> {
        self.tx.subscribe()
    }

    pub fn stream(&self) -> BroadcastStream<BoardNotice> {
        BroadcastStream::new(self.tx.subscribe())
    }

    pub fn notify_failure(&self, task_id: &str, error: &SyncError) {
        let kind = match error {
            SyncError::UpdateRejected { .. } => NoticeKind::UpdateRejected,
            SyncError::UpdateUnreachable { .. } => NoticeKind::UpdateUnreachable,
            // Unknown tasks are logged at the call site, never toasted.
            SyncError::UnknownTask(_) => return,
        };

        let notice = BoardNotice {
            task_id: task_id.to_string(),
            kind,
            message: error.to_string(),
        };

        // No subscribers is fine (headless usage); delivery is best effort.
        let _ = self.tx.send(notice);
    }
}

impl Default for BoardNotifier {
    fn default() -> Self {
        Self::new(100)
    }
}
