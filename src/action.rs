//! Action enum - All possible application actions
//!
//! Components turn key events into Actions; `update` applies them and may
//! return a follow-up Action.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Player Table Navigation
    // ─────────────────────────────────────────────────────────────────────────
    NextItem,
    PrevItem,
    FirstItem,
    LastItem,
    PageUp,
    PageDown,
    /// Next position filter tab
    NextTab,
    /// Previous position filter tab
    PrevTab,

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    EnterSearchMode,
    ExitSearchMode,
    SearchInput(char),
    SearchBackspace,

    // ─────────────────────────────────────────────────────────────────────────
    // Draft
    // ─────────────────────────────────────────────────────────────────────────
    StartDraft,
    /// Draft the player highlighted in the player table
    DraftSelectedPlayer,
    /// Open the reset confirmation
    OpenResetDialog,
    /// Close the reset confirmation; `true` resets the draft
    CloseResetDialog(bool),

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    /// Open the league settings overview
    OpenSettings,
    CloseModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Notifications
    // ─────────────────────────────────────────────────────────────────────────
    /// Show a success toast
    Notify(String),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::NextTab => write!(f, "NextTab"),
            Action::PrevTab => write!(f, "PrevTab"),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::StartDraft => write!(f, "StartDraft"),
            Action::DraftSelectedPlayer => write!(f, "DraftSelectedPlayer"),
            Action::OpenResetDialog => write!(f, "OpenResetDialog"),
            Action::CloseResetDialog(confirmed) => write!(f, "CloseResetDialog({})", confirmed),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenSettings => write!(f, "OpenSettings"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::Notify(message) => write!(f, "Notify({})", message),
        }
    }
}
