//! Component trait - Interface for UI components
//!
//! Each component owns its state, turns key events into Actions, applies
//! Actions in `update`, and renders itself in `draw`.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

pub trait Component {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Map a key event to an Action without changing state
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Apply an Action, optionally returning a follow-up Action
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Render into `area`. No state changes besides scroll bookkeeping.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
