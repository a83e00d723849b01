//! Pick list - every pick in draft order, grouped by round

use crate::components::data_table::{Align, Cell, DataTable, Heading, Row, TableScroll};
use crate::model::draft::{round_of, DraftPick};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    Frame,
};

/// What the pick list needs to know about the draft
pub struct DraftListContext<'a> {
    pub picks: &'a [DraftPick],
    pub current_pick_number: usize,
    pub draft_started: bool,
    pub team_count: usize,
}

#[derive(Debug, Default)]
pub struct DraftList {
    scroll: TableScroll,
}

impl DraftList {
    pub fn new() -> Self {
        Self::default()
    }

    /// One header row per round followed by that round's picks
    pub fn build_rows(ctx: &DraftListContext) -> Vec<Row> {
        let mut rows = Vec::with_capacity(ctx.picks.len() + ctx.picks.len() / ctx.team_count.max(1));
        let mut last_round = 0;

        for pick in ctx.picks {
            let round = round_of(pick.pick_number, ctx.team_count);
            if round != last_round {
                rows.push(Row::new(vec![Cell::new(format!("── Round {}", round))
                    .col_span(3)
                    .flush()
                    .style(
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    )]));
                last_round = round;
            }

            let is_current = ctx.draft_started && pick.pick_number == ctx.current_pick_number;
            let player_cell = match &pick.player_selected {
                Some(player) => Cell::new(format!("{} {}", player.name, player.position)),
                None if is_current => {
                    Cell::new("on the clock").style(Style::default().fg(Color::Green))
                }
                None => Cell::new("—").style(Style::default().fg(Color::DarkGray)),
            };

            rows.push(
                Row::new(vec![
                    Cell::new(pick.pick_number.to_string())
                        .align(Align::Right)
                        .collapsing(),
                    Cell::new(pick.team.name.clone()).collapsing(),
                    player_cell,
                ])
                .highlighted(is_current),
            );
        }

        rows
    }

    pub fn draw_with(&mut self, frame: &mut Frame, area: Rect, ctx: &DraftListContext) {
        if !ctx.draft_started {
            self.scroll = TableScroll::default();
        }

        let title = if ctx.picks.is_empty() {
            "Draft Order".to_string()
        } else {
            format!("Draft Order ({} picks)", ctx.picks.len())
        };

        DataTable::new(vec![
            Heading::new("#").align(Align::Right),
            Heading::new("Team"),
            Heading::new("Player"),
        ])
        .title(title)
        .rows(Self::build_rows(ctx))
        .empty_message("No picks: add teams and roster slots")
        .render(frame, area, &mut self.scroll, Color::DarkGray);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RosterSettings, Settings, Team};
    use crate::model::draft::create_draft_order;

    fn settings() -> Settings {
        Settings {
            teams: vec![
                Team {
                    id: 1,
                    name: "A".to_string(),
                    draft_position: 1,
                },
                Team {
                    id: 2,
                    name: "B".to_string(),
                    draft_position: 2,
                },
            ],
            roster: RosterSettings {
                bench: 0,
                center: 1,
                defense: 0,
                goalie: 1,
                left_wing: 0,
                right_wing: 0,
            },
            players_file: None,
        }
    }

    fn text(row: &Row) -> Vec<String> {
        row.cells.iter().map(|c| c.content.clone()).collect()
    }

    #[test]
    fn test_round_headers_precede_each_round() {
        let picks = create_draft_order(&settings());
        let rows = DraftList::build_rows(&DraftListContext {
            picks: &picks,
            current_pick_number: 1,
            draft_started: false,
            team_count: 2,
        });

        assert_eq!(rows.len(), 6);
        assert_eq!(text(&rows[0]), vec!["── Round 1"]);
        assert_eq!(rows[0].cells[0].col_span, 3);
        assert_eq!(text(&rows[1]), vec!["1", "A", "—"]);
        assert_eq!(text(&rows[3]), vec!["── Round 2"]);
        assert_eq!(text(&rows[4]), vec!["3", "B", "—"]);
        assert!(rows.iter().all(|r| !r.highlighted));
    }

    #[test]
    fn test_current_pick_is_highlighted_once_started() {
        let picks = create_draft_order(&settings());
        let rows = DraftList::build_rows(&DraftListContext {
            picks: &picks,
            current_pick_number: 2,
            draft_started: true,
            team_count: 2,
        });

        let highlighted: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.highlighted)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(highlighted, vec![2]);
        assert_eq!(rows[2].cells[2].content, "on the clock");
    }

    #[test]
    fn test_no_picks_no_rows() {
        let rows = DraftList::build_rows(&DraftListContext {
            picks: &[],
            current_pick_number: 1,
            draft_started: false,
            team_count: 0,
        });
        assert!(rows.is_empty());
    }
}
