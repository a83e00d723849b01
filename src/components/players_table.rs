//! Player selection table
//!
//! Lists the players still available, filtered by position tab and name
//! search. Already-drafted players never appear, which is what keeps a player
//! from being picked twice.

use crate::action::Action;
use crate::components::data_table::{Align, Cell, DataTable, Heading, Row, TableScroll};
use crate::model::draft::DraftPhase;
use crate::model::player::Player;
use crate::model::ui::PositionTab;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use std::collections::HashSet;

const PAGE_SIZE: usize = 10;

/// Data the player table needs from the draft page at draw time
pub struct PlayersTableContext<'a> {
    /// Pool sorted by points, best first
    pub pool: &'a [Player],
    pub drafted: &'a [Player],
    pub can_draft: bool,
    pub phase: DraftPhase,
    pub on_the_clock: Option<&'a str>,
}

#[derive(Debug, Default)]
pub struct PlayersTable {
    pub tab: PositionTab,
    pub search_query: String,
    pub search_mode: bool,
    /// Index into the filtered list
    pub selected: usize,
    scroll: TableScroll,
}

impl PlayersTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Players still selectable, with their overall rank in the pool
    pub fn available<'a>(&self, pool: &'a [Player], drafted: &[Player]) -> Vec<(usize, &'a Player)> {
        let drafted_ids: HashSet<u32> = drafted.iter().map(|p| p.id).collect();
        let query = self.search_query.to_lowercase();

        pool.iter()
            .enumerate()
            .filter(|(_, p)| !drafted_ids.contains(&p.id))
            .filter(|(_, p)| self.tab.matches(p))
            .filter(|(_, p)| query.is_empty() || p.name.to_lowercase().contains(&query))
            .map(|(i, p)| (i + 1, p))
            .collect()
    }

    pub fn selected_player<'a>(&self, pool: &'a [Player], drafted: &[Player]) -> Option<&'a Player> {
        self.available(pool, drafted)
            .get(self.selected)
            .map(|(_, p)| *p)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn previous(&mut self, len: usize) {
        if len > 0 {
            self.selected = if self.selected == 0 {
                len - 1
            } else {
                self.selected - 1
            };
        }
    }

    pub fn first(&mut self) {
        self.selected = 0;
    }

    pub fn last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    pub fn page_down(&mut self, len: usize) {
        self.selected = (self.selected + PAGE_SIZE).min(len.saturating_sub(1));
    }

    pub fn page_up(&mut self) {
        self.selected = self.selected.saturating_sub(PAGE_SIZE);
    }

    /// Keep the selection inside a list that may have shrunk
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
        self.first();
    }

    pub fn previous_tab(&mut self) {
        self.tab = self.tab.previous();
        self.first();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    pub fn search_input(&mut self, c: char) {
        self.search_query.push(c);
        self.first();
    }

    pub fn search_backspace(&mut self) {
        self.search_query.pop();
        self.first();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    fn build_table(&self, available: &[(usize, &Player)]) -> DataTable {
        let rows = available
            .iter()
            .enumerate()
            .map(|(i, (rank, player))| {
                Row::new(vec![
                    Cell::new(rank.to_string()).align(Align::Right).collapsing(),
                    Cell::new(player.name.clone()).style(Style::default().fg(Color::White)),
                    Cell::new(player.position.abbreviation())
                        .align(Align::Center)
                        .collapsing()
                        .style(Style::default().fg(Color::Yellow)),
                    Cell::new(player.team.clone()).collapsing(),
                    Cell::new(player.games_played.to_string()).align(Align::Right).collapsing(),
                    Cell::new(player.goals.to_string()).align(Align::Right).collapsing(),
                    Cell::new(player.assists.to_string()).align(Align::Right).collapsing(),
                    Cell::new(player.points().to_string())
                        .align(Align::Right)
                        .collapsing()
                        .style(Style::default().add_modifier(Modifier::BOLD)),
                ])
                .highlighted(i == self.selected)
            })
            .collect();

        DataTable::new(vec![
            Heading::new("Rk").align(Align::Right),
            Heading::new("Player"),
            Heading::new("Pos").align(Align::Center),
            Heading::new("Team"),
            Heading::new("GP").align(Align::Right),
            Heading::new("G").align(Align::Right),
            Heading::new("A").align(Align::Right),
            Heading::new("P").align(Align::Right),
        ])
        .title(format!("Players ({} available)", available.len()))
        .rows(rows)
        .empty_message("No players match")
    }

    fn hint_line(&self, ctx: &PlayersTableContext, selected: Option<&Player>) -> Line<'static> {
        if self.search_mode {
            return Line::from(vec![
                Span::styled(" / ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("{}_", self.search_query),
                    Style::default().fg(Color::Cyan),
                ),
            ]);
        }

        let mut spans = Vec::new();
        if !self.search_query.is_empty() {
            spans.push(Span::styled(
                format!(" filter: {} ", self.search_query),
                Style::default().fg(Color::Cyan),
            ));
        }

        let message = match ctx.phase {
            DraftPhase::NotStarted => " Start the draft to select players".to_string(),
            DraftPhase::Complete => " The draft is complete".to_string(),
            DraftPhase::InProgress => match (selected, ctx.on_the_clock) {
                (Some(player), Some(team)) if ctx.can_draft => {
                    format!(" Enter drafts {} for {}", player.name, team)
                }
                _ => String::new(),
            },
        };
        spans.push(Span::styled(message, Style::default().fg(Color::DarkGray)));
        Line::from(spans)
    }

    pub fn draw_with(&mut self, frame: &mut Frame, area: Rect, ctx: &PlayersTableContext) -> Result<()> {
        let available = self.available(ctx.pool, ctx.drafted);
        self.clamp(available.len());
        let selected = available.get(self.selected).map(|(_, p)| *p);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let all_tabs = PositionTab::all();
        let titles: Vec<&str> = all_tabs.iter().map(|t| t.name()).collect();
        let selected_tab = all_tabs.iter().position(|t| *t == self.tab).unwrap_or(0);
        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM))
            .select(selected_tab)
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, chunks[0]);

        frame.render_widget(Paragraph::new(self.hint_line(ctx, selected)), chunks[1]);

        let border = if ctx.can_draft {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        self.build_table(&available)
            .render(frame, chunks[2], &mut self.scroll, border);

        Ok(())
    }
}

impl PlayersTable {
    /// Map a key to a table action; search mode takes every character
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.search_mode {
            let action = match key.code {
                KeyCode::Esc | KeyCode::Enter => Some(Action::ExitSearchMode),
                KeyCode::Backspace => Some(Action::SearchBackspace),
                KeyCode::Char(c) => Some(Action::SearchInput(c)),
                _ => None,
            };
            return Ok(action);
        }

        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstItem),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastItem),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            KeyCode::Enter => Some(Action::DraftSelectedPlayer),
            _ => None,
        };
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::player::Position;
    use crossterm::event::KeyModifiers;

    fn player(id: u32, name: &str, position: Position) -> Player {
        Player {
            id,
            name: name.to_string(),
            team: "TST".to_string(),
            position,
            games_played: 80,
            goals: 20,
            assists: 20,
        }
    }

    fn pool() -> Vec<Player> {
        vec![
            player(1, "Connor McDavid", Position::Center),
            player(2, "Cale Makar", Position::Defense),
            player(3, "Igor Shesterkin", Position::Goalie),
            player(4, "Quinn Hughes", Position::Defense),
        ]
    }

    fn ids(available: &[(usize, &Player)]) -> Vec<u32> {
        available.iter().map(|(_, p)| p.id).collect()
    }

    #[test]
    fn test_drafted_players_are_excluded() {
        let pool = pool();
        let table = PlayersTable::new();
        let drafted = vec![pool[1].clone()];
        let available = table.available(&pool, &drafted);
        assert_eq!(ids(&available), vec![1, 3, 4]);
        // Rank stays the overall rank
        assert_eq!(available[1].0, 3);
    }

    #[test]
    fn test_position_tab_filters() {
        let pool = pool();
        let mut table = PlayersTable::new();
        table.tab = PositionTab::Only(Position::Defense);
        assert_eq!(ids(&table.available(&pool, &[])), vec![2, 4]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let pool = pool();
        let mut table = PlayersTable::new();
        for c in "HUG".chars() {
            table.search_input(c);
        }
        assert_eq!(ids(&table.available(&pool, &[])), vec![4]);
        table.search_backspace();
        table.search_backspace();
        table.search_backspace();
        assert_eq!(table.available(&pool, &[]).len(), 4);
    }

    #[test]
    fn test_navigation_wraps_and_clamps() {
        let mut table = PlayersTable::new();
        table.previous(4);
        assert_eq!(table.selected, 3);
        table.next(4);
        assert_eq!(table.selected, 0);
        table.last(4);
        table.clamp(2);
        assert_eq!(table.selected, 1);
        table.page_down(30);
        assert_eq!(table.selected, 11);
        table.page_up();
        assert_eq!(table.selected, 1);
    }

    #[test]
    fn test_selected_player() {
        let pool = pool();
        let mut table = PlayersTable::new();
        table.next(4);
        assert_eq!(table.selected_player(&pool, &[]).map(|p| p.id), Some(2));
        let drafted = vec![pool[0].clone()];
        assert_eq!(table.selected_player(&pool, &drafted).map(|p| p.id), Some(3));
    }

    #[test]
    fn test_search_mode_captures_keys() {
        let mut table = PlayersTable::new();
        let slash = KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE);
        assert_eq!(table.handle_key_event(slash).unwrap(), Some(Action::EnterSearchMode));

        table.enter_search_mode();
        let j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(table.handle_key_event(j).unwrap(), Some(Action::SearchInput('j')));
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(table.handle_key_event(enter).unwrap(), Some(Action::ExitSearchMode));
    }
}
