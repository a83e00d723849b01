//! League settings overlay
//!
//! Read-only view of the teams and roster that drive the draft order, plus
//! the settings file to edit when customizing.

use crate::action::Action;
use crate::component::Component;
use crate::components::data_table::{Align, Cell, DataTable, Heading, Row, TableScroll};
use crate::config::Settings;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct SettingsDialog {
    settings: Settings,
    settings_path: Option<PathBuf>,
    teams_scroll: TableScroll,
}

impl SettingsDialog {
    pub fn new(settings_path: Option<PathBuf>) -> Self {
        Self {
            settings_path,
            ..Default::default()
        }
    }

    pub fn set_settings(&mut self, settings: &Settings) {
        if &self.settings != settings {
            self.settings = settings.clone();
            self.teams_scroll = TableScroll::default();
        }
    }

    fn teams_table(&self) -> DataTable {
        let rows = self
            .settings
            .teams_by_draft_position()
            .into_iter()
            .map(|team| {
                Row::new(vec![
                    Cell::new(team.draft_position.to_string())
                        .align(Align::Right)
                        .collapsing(),
                    Cell::new(team.name),
                    Cell::new(team.id.to_string()).align(Align::Right).collapsing(),
                ])
            })
            .collect();

        DataTable::new(vec![
            Heading::new("Pos").align(Align::Right),
            Heading::new("Team"),
            Heading::new("Id").align(Align::Right),
        ])
        .title(format!("Teams ({})", self.settings.teams.len()))
        .rows(rows)
        .empty_message("No teams configured")
    }

    fn summary_lines(&self) -> Vec<Line<'static>> {
        let label = Style::default().fg(Color::DarkGray);
        let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

        let mut lines = vec![Line::from(Span::styled(
            "Roster slots",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))];
        for (name, count) in self.settings.roster.slots() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<12}", name), label),
                Span::styled(count.to_string(), value),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", "Rounds"), label),
            Span::styled(self.settings.roster.rounds().to_string(), value),
        ]));
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", "Total picks"), label),
            Span::styled(self.settings.total_picks().to_string(), value),
        ]));

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "To customize, edit:",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        let path = self
            .settings_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(no settings file)".to_string());
        lines.push(Line::from(Span::styled(
            format!("  {}", path),
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from(Span::styled(
            "  and restart to apply.",
            label,
        )));

        let pool = self
            .settings
            .players_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "bundled".to_string());
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", "Players"), label),
            Span::styled(pool, value),
        ]));

        lines
    }
}

impl Component for SettingsDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('c') | KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);
        let background = Block::default().style(Style::default().bg(Color::Reset));
        frame.render_widget(background, area);

        let margin = 2;
        let overlay_area = Rect::new(
            area.x + margin,
            area.y + margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(overlay_area);

        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[0]);

        self.teams_table()
            .render(frame, body_chunks[0], &mut self.teams_scroll, Color::Cyan);

        let summary = Paragraph::new(self.summary_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" League Settings ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(summary, body_chunks[1]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(
                " c/Esc ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Close"),
        ]))
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL));

        frame.render_widget(help, main_chunks[1]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_teams_listed_by_draft_position() {
        let mut settings = Settings::default();
        settings.teams.reverse();
        let mut dialog = SettingsDialog::new(None);
        dialog.set_settings(&settings);

        let table = dialog.teams_table();
        assert_eq!(table.rows.len(), 10);
        assert_eq!(table.rows[0].cells[1].content, "Team 1");
    }

    #[test]
    fn test_summary_mentions_settings_path_and_totals() {
        let mut dialog = SettingsDialog::new(Some(PathBuf::from("/tmp/settings.json")));
        dialog.set_settings(&Settings::default());

        let text: Vec<String> = dialog.summary_lines().iter().map(line_text).collect();
        assert!(text.iter().any(|l| l.contains("/tmp/settings.json")));
        assert!(text.iter().any(|l| l.contains("Total picks") && l.contains("160")));
    }
}
