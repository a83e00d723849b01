//! Model layer - draft data and presentation state
//!
//! - `draft` - snake order generation and the draft state machine
//! - `player` - the selectable player pool
//! - `modal` - app-level overlay stack
//! - `toast` - transient notifications
//! - `ui` - presentation-only state

pub mod draft;
pub mod modal;
pub mod player;
pub mod toast;
pub mod ui;
