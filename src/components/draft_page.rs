//! Draft page - the draft flow screen
//!
//! Owns the draft state and the player pool, and composes the pick list, the
//! player table, the drafted-players panel and the reset dialog.

use crate::action::Action;
use crate::component::Component;
use crate::components::data_table::{Align, Cell, DataTable, Heading, Row, TableScroll};
use crate::components::draft_list::{DraftList, DraftListContext};
use crate::components::layout::calculate_draft_layout;
use crate::components::players_table::{PlayersTable, PlayersTableContext};
use crate::components::reset_dialog::ResetDialog;
use crate::config::Settings;
use crate::model::draft::{round_of, DraftPhase, DraftState, DraftedPlayers};
use crate::model::player::Player;
use crate::model::toast::{Toast, ToastKind};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const RESET_MESSAGE: &str = "Draft reset";
pub const COMPLETE_MESSAGE: &str = "Draft complete";

pub struct DraftPage {
    settings: Settings,
    state: DraftState,
    /// Sorted by points, best first
    pool: Vec<Player>,
    drafted: DraftedPlayers,
    toast: Option<Toast>,

    pub players_table: PlayersTable,
    draft_list: DraftList,
    reset_dialog: ResetDialog,
    drafted_scroll: TableScroll,
}

impl DraftPage {
    pub fn new(settings: Settings, mut players: Vec<Player>) -> Self {
        players.sort_by(|a, b| {
            b.points()
                .cmp(&a.points())
                .then_with(|| a.name.cmp(&b.name))
        });

        Self {
            state: DraftState::new(&settings),
            settings,
            pool: players,
            drafted: DraftedPlayers::default(),
            toast: None,
            players_table: PlayersTable::new(),
            draft_list: DraftList::new(),
            reset_dialog: ResetDialog,
            drafted_scroll: TableScroll::default(),
        }
    }

    pub fn state(&self) -> &DraftState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn pool(&self) -> &[Player] {
        &self.pool
    }

    pub fn drafted_players(&mut self) -> &[Player] {
        self.drafted.get(self.state.picks())
    }

    pub fn set_toast(&mut self, toast: Option<Toast>) {
        self.toast = toast;
    }

    fn available_len(&mut self) -> usize {
        let drafted = self.drafted.get(self.state.picks());
        self.players_table.available(&self.pool, drafted).len()
    }

    fn draft_selected_player(&mut self) -> Option<Action> {
        if !self.state.can_draft_players() {
            return None;
        }

        let drafted = self.drafted.get(self.state.picks());
        let player = self
            .players_table
            .selected_player(&self.pool, drafted)
            .cloned()?;

        if !self.state.draft_player(player) {
            return None;
        }

        let len = self.available_len();
        self.players_table.clamp(len);

        if self.state.phase() == DraftPhase::Complete {
            Some(Action::Notify(COMPLETE_MESSAGE.to_string()))
        } else {
            None
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    fn header_lines(&self) -> Vec<Line<'static>> {
        let phase = self.state.phase();
        let badge_color = match phase {
            DraftPhase::NotStarted => Color::Yellow,
            DraftPhase::InProgress => Color::Green,
            DraftPhase::Complete => Color::Cyan,
        };

        let mut spans = vec![
            Span::styled(
                " Draft ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                format!(" {} ", phase.label()),
                Style::default()
                    .fg(Color::Black)
                    .bg(badge_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];

        let total = self.state.picks().len();
        let detail = match (phase, self.state.current_pick()) {
            (DraftPhase::NotStarted, _) if total == 0 => {
                "No picks to make: add teams and roster slots".to_string()
            }
            (DraftPhase::NotStarted, _) => format!(
                "{} teams, {} rounds, {} picks. Press s to start the draft.",
                self.settings.teams.len(),
                self.settings.roster.rounds(),
                total
            ),
            (DraftPhase::InProgress, Some(pick)) => format!(
                "Pick {} of {}  ·  Round {}  ·  {} on the clock",
                pick.pick_number,
                total,
                round_of(pick.pick_number, self.settings.teams.len()),
                pick.team.name
            ),
            _ => format!("All {} picks made", total),
        };
        spans.push(Span::styled(detail, Style::default().fg(Color::White)));

        vec![Line::from(spans)]
    }

    fn help_spans(&self) -> Vec<Span<'static>> {
        let key = |k: &str, color: Color| {
            Span::styled(
                format!(" {} ", k),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        };

        if self.players_table.search_mode {
            return vec![
                key("Esc/Enter", Color::Yellow),
                Span::raw("Done  "),
                key("Backspace", Color::Cyan),
                Span::raw("Delete"),
            ];
        }

        let mut spans = Vec::new();
        match self.state.phase() {
            DraftPhase::NotStarted => {
                spans.extend([key("s", Color::Green), Span::raw("Start the draft  ")]);
                spans.extend([key("c", Color::Cyan), Span::raw("Customize  ")]);
            }
            DraftPhase::InProgress => {
                spans.extend([key("Enter", Color::Green), Span::raw("Draft player  ")]);
                spans.extend([key("r", Color::Red), Span::raw("Reset  ")]);
            }
            DraftPhase::Complete => {
                spans.extend([key("r", Color::Red), Span::raw("Reset  ")]);
            }
        }
        spans.extend([key("j/k", Color::Cyan), Span::raw("Move  ")]);
        spans.extend([key("Tab", Color::Cyan), Span::raw("Position  ")]);
        spans.extend([key("/", Color::Cyan), Span::raw("Search  ")]);
        spans.extend([key("q", Color::Yellow), Span::raw("Quit")]);
        spans
    }

    fn status_line(&self) -> Line<'static> {
        match &self.toast {
            Some(toast) => {
                let (icon, color) = match toast.kind {
                    ToastKind::Success => ("✓", Color::Green),
                    ToastKind::Info => ("•", Color::Cyan),
                };
                Line::from(Span::styled(
                    format!(" {} {}", icon, toast.message),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
            }
            None => Line::from(""),
        }
    }

    fn drafted_table(players: &[Player]) -> DataTable {
        let rows = players
            .iter()
            .enumerate()
            .map(|(i, player)| {
                Row::new(vec![
                    Cell::new((i + 1).to_string()).align(Align::Right).collapsing(),
                    Cell::new(player.name.clone()),
                    Cell::new(player.position.abbreviation())
                        .align(Align::Center)
                        .collapsing(),
                ])
            })
            .collect();

        DataTable::new(vec![
            Heading::new("#").align(Align::Right),
            Heading::new("Player"),
            Heading::new("Pos").align(Align::Center),
        ])
        .title(format!("Drafted ({})", players.len()))
        .rows(rows)
        .empty_message("Nobody drafted yet")
    }
}

impl Component for DraftPage {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.state.reset_pending() {
            return self.reset_dialog.handle_key_event(key);
        }
        if self.players_table.search_mode {
            return self.players_table.handle_key_event(key);
        }

        let started = self.state.draft_started();
        let action = match key.code {
            KeyCode::Char('s') if !started => Some(Action::StartDraft),
            KeyCode::Char('r') if started => Some(Action::OpenResetDialog),
            KeyCode::Char('c') if !started => Some(Action::OpenSettings),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            _ => return self.players_table.handle_key_event(key),
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::StartDraft => {
                self.state.start();
                self.players_table.first();
            }
            Action::DraftSelectedPlayer => return Ok(self.draft_selected_player()),
            Action::OpenResetDialog => {
                self.state.request_reset();
            }
            Action::CloseResetDialog(confirmed) => {
                if self.state.resolve_reset(confirmed, &self.settings) {
                    self.players_table.first();
                    return Ok(Some(Action::Notify(RESET_MESSAGE.to_string())));
                }
            }

            Action::NextItem => {
                let len = self.available_len();
                self.players_table.next(len);
            }
            Action::PrevItem => {
                let len = self.available_len();
                self.players_table.previous(len);
            }
            Action::FirstItem => self.players_table.first(),
            Action::LastItem => {
                let len = self.available_len();
                self.players_table.last(len);
            }
            Action::PageDown => {
                let len = self.available_len();
                self.players_table.page_down(len);
            }
            Action::PageUp => self.players_table.page_up(),
            Action::NextTab => self.players_table.next_tab(),
            Action::PrevTab => self.players_table.previous_tab(),

            Action::EnterSearchMode => self.players_table.enter_search_mode(),
            Action::ExitSearchMode => self.players_table.exit_search_mode(),
            Action::SearchInput(c) => self.players_table.search_input(c),
            Action::SearchBackspace => self.players_table.search_backspace(),

            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_draft_layout(area);

        let header = Paragraph::new(self.header_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(header, layout.header);

        self.draft_list.draw_with(
            frame,
            layout.picks,
            &DraftListContext {
                picks: self.state.picks(),
                current_pick_number: self.state.current_pick_number(),
                draft_started: self.state.draft_started(),
                team_count: self.settings.teams.len(),
            },
        );

        let drafted = self.drafted.get(self.state.picks());
        let on_the_clock = self.state.on_the_clock().map(|t| t.name.as_str());
        self.players_table.draw_with(
            frame,
            layout.players,
            &PlayersTableContext {
                pool: &self.pool,
                drafted,
                can_draft: self.state.can_draft_players(),
                phase: self.state.phase(),
                on_the_clock,
            },
        )?;

        // Always follow the latest pick
        self.drafted_scroll.offset = usize::MAX;
        Self::drafted_table(drafted).render(
            frame,
            layout.drafted,
            &mut self.drafted_scroll,
            Color::DarkGray,
        );

        frame.render_widget(Paragraph::new(self.status_line()), layout.status);

        let help = Paragraph::new(Line::from(self.help_spans()))
            .alignment(Alignment::Left)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, layout.help);

        if self.state.reset_pending() {
            self.reset_dialog.draw(frame, area)?;
        }

        Ok(())
    }
}
