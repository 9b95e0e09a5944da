//! Stateless four-stage conversation router.
//!
//! Every request carries its whole context, so a turn is a pure function of
//! the request and the trained, read-only classifier and catalog:
//!
//! ```text
//! start ─▶ set_language ─▶ set_user_type ─▶ choose_issue
//! ```
//!
//! Nothing ties one turn to the previous one; the stages are implied by the
//! `action` field alone.

pub mod action;
pub mod controller;
pub mod error;
pub mod language;
pub mod options;
pub mod payload;
pub mod role;

pub use action::Action;
pub use controller::DialogueController;
pub use error::DialogueError;
pub use language::Language;
pub use payload::{DialogueRequest, TurnResult};
pub use role::Role;
