//! Layout calculations for the draft screen

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Draft screen areas
pub struct DraftLayout {
    pub header: Rect,
    pub picks: Rect,
    pub players: Rect,
    pub drafted: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Header, three content columns (picks 20%, players 55%, drafted 25%),
/// status line and help bar
pub fn calculate_draft_layout(area: Rect) -> DraftLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(55),
            Constraint::Percentage(25),
        ])
        .split(main_chunks[1]);

    DraftLayout {
        header: main_chunks[0],
        picks: columns[0],
        players: columns[1],
        drafted: columns[2],
        status: main_chunks[2],
        help: main_chunks[3],
    }
}
