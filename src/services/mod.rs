pub mod board;
pub mod notifier;

pub use board::{
    DropOutcome, MoveOutcome, ReconcileOutcome, StatusSyncController, UpdateResolution,
    UpdateTicket,
};
pub use notifier::{BoardNotice, BoardNotifier, NoticeKind};
