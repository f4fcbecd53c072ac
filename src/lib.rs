//! Board-state synchronizer for a team-collaboration task board.
//!
//! Owns the in-memory task collection behind a kanban view, applies
//! drag-and-drop status changes optimistically, persists each change to the
//! hosted task backend, and reconciles local state when writes confirm or
//! fail. Rendering, routing, and auth belong to the UI shell consuming this
//! crate.

pub mod api;
pub mod config;
pub mod domain;
pub mod services;
