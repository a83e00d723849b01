//! Root application component
//!
//! The App coordinates the draft page, the app-level modal overlays and the
//! toast channel. Draft logic lives in the draft page and the model.

use crate::action::Action;
use crate::component::Component;
use crate::components::{DraftPage, QuitDialog, SettingsDialog};
use crate::config::Settings;
use crate::model::draft::DraftPhase;
use crate::model::modal::{Modal, ModalStack};
use crate::model::player::Player;
use crate::model::toast::Toasts;
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::path::PathBuf;

pub struct App {
    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Notification channel shown in the status line
    pub toasts: Toasts,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub draft_page: DraftPage,
    pub quit_dialog: QuitDialog,
    pub settings_dialog: SettingsDialog,
}

impl App {
    pub fn new(settings: Settings, settings_path: Option<PathBuf>, players: Vec<Player>) -> App {
        let mut settings_dialog = SettingsDialog::new(settings_path);
        settings_dialog.set_settings(&settings);

        App {
            should_quit: false,
            modals: ModalStack::new(),
            toasts: Toasts::new(),
            draft_page: DraftPage::new(settings, players),
            quit_dialog: QuitDialog::default(),
            settings_dialog,
        }
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Settings => self.settings_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area),
            Modal::Settings => {
                self.settings_dialog.set_settings(self.draft_page.settings());
                self.settings_dialog.draw(frame, area)
            }
        }
    }
}

impl Component for App {
    fn init(&mut self) -> Result<()> {
        let pool = self.draft_page.pool().len();
        let picks = self.draft_page.state().picks().len();
        self.toasts
            .info(format!("{} players available, {} picks to make", pool, picks));
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().cloned() {
            self.handle_modal_key_event(&modal, key)
        } else {
            self.draft_page.handle_key_event(key)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => {
                self.toasts.expire(Local::now());
            }
            Action::Resize(w, h) => {
                tracing::debug!("terminal resized to {}x{}", w, h);
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::OpenQuitDialog => {
                self.quit_dialog.draft_in_progress =
                    self.draft_page.state().phase() == DraftPhase::InProgress
                        && !self.draft_page.drafted_players().is_empty();
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenSettings => {
                self.modals.push(Modal::Settings);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::Notify(message) => {
                self.toasts.success(message);
            }
            other => return self.draft_page.update(other),
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.draft_page.set_toast(self.toasts.current().cloned());
        self.draft_page.draw(frame, area)?;

        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}
