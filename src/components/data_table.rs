//! Data table renderer
//!
//! Declarative table shell: headings with alignment, rows that share a
//! highlight style, and cells that can align, span columns, collapse to their
//! content width, or drop their padding. The table holds no state; scrolling
//! lives in a `TableScroll` owned by whoever draws the table.

use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Horizontal padding on each side of a non-flush cell
const CELL_PADDING: usize = 1;

/// Background of the highlighted row
pub const ROW_HIGHLIGHT: Style = Style::new().bg(Color::DarkGray);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub title: String,
    pub align: Align,
}

impl Heading {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            align: Align::Left,
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub content: String,
    pub align: Option<Align>,
    pub col_span: usize,
    /// Shrink the column to its content
    pub collapsing: bool,
    /// No horizontal padding
    pub flush: bool,
    pub style: Style,
}

impl Cell {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            align: None,
            col_span: 1,
            collapsing: false,
            flush: false,
            style: Style::default(),
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn col_span(mut self, span: usize) -> Self {
        self.col_span = span.max(1);
        self
    }

    pub fn collapsing(mut self) -> Self {
        self.collapsing = true;
        self
    }

    pub fn flush(mut self) -> Self {
        self.flush = true;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    fn padding(&self) -> usize {
        if self.flush {
            0
        } else {
            CELL_PADDING * 2
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
    pub highlighted: bool,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            highlighted: false,
        }
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }
}

/// Scroll offset of a rendered table body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableScroll {
    pub offset: usize,
}

impl TableScroll {
    /// Move the offset just enough to show `row` in a window of `visible` rows
    pub fn keep_visible(&mut self, row: usize, visible: usize, total: usize) {
        if visible == 0 {
            return;
        }
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + visible {
            self.offset = row + 1 - visible;
        }
        self.offset = self.offset.min(total.saturating_sub(visible));
    }
}

#[derive(Debug, Clone, Default)]
pub struct DataTable {
    pub title: String,
    pub headings: Vec<Heading>,
    pub rows: Vec<Row>,
    pub empty_message: Option<String>,
}

impl DataTable {
    pub fn new(headings: Vec<Heading>) -> Self {
        Self {
            headings,
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = Some(message.into());
        self
    }

    fn column_count(&self) -> usize {
        let widest_row = self
            .rows
            .iter()
            .map(|row| row.cells.iter().map(|c| c.col_span).sum::<usize>())
            .max()
            .unwrap_or(0);
        self.headings.len().max(widest_row)
    }

    /// Resolve column widths for an area `available` cells wide.
    ///
    /// Collapsing columns keep their natural width. The other columns share
    /// the leftover space, or give it back (down to their heading width) when
    /// the table is too wide.
    pub fn column_widths(&self, available: usize) -> Vec<usize> {
        let columns = self.column_count();
        let mut minimum: Vec<usize> = (0..columns)
            .map(|i| {
                self.headings
                    .get(i)
                    .map(|h| h.title.width() + CELL_PADDING * 2)
                    .unwrap_or(0)
            })
            .collect();
        let mut widths = minimum.clone();
        let mut collapsing = vec![false; columns];

        for row in &self.rows {
            let mut col = 0;
            for cell in &row.cells {
                if col >= columns {
                    break;
                }
                if cell.col_span == 1 {
                    widths[col] = widths[col].max(cell.content.width() + cell.padding());
                    collapsing[col] |= cell.collapsing;
                }
                col += cell.col_span;
            }
        }

        for (i, min) in minimum.iter_mut().enumerate() {
            if collapsing[i] {
                *min = widths[i];
            }
        }

        let flexible: Vec<usize> = (0..columns).filter(|&i| !collapsing[i]).collect();
        let total: usize = widths.iter().sum();

        if total < available && !flexible.is_empty() {
            let extra = available - total;
            let share = extra / flexible.len();
            let remainder = extra % flexible.len();
            for (n, &i) in flexible.iter().enumerate() {
                widths[i] += share + usize::from(n < remainder);
            }
        } else if total > available {
            let mut deficit = total - available;
            while deficit > 0 {
                let widest = flexible
                    .iter()
                    .copied()
                    .filter(|&i| widths[i] > minimum[i])
                    .max_by_key(|&i| widths[i] - minimum[i]);
                match widest {
                    Some(i) => {
                        widths[i] -= 1;
                        deficit -= 1;
                    }
                    None => break,
                }
            }
        }

        widths
    }

    /// Heading line plus the rule under it
    pub fn header_lines(&self, widths: &[usize]) -> Vec<Line<'static>> {
        let style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let spans: Vec<Span<'static>> = widths
            .iter()
            .enumerate()
            .map(|(i, &width)| {
                let (title, align) = self
                    .headings
                    .get(i)
                    .map(|h| (h.title.as_str(), h.align))
                    .unwrap_or(("", Align::Left));
                Span::styled(pad_cell(title, width, align, CELL_PADDING), style)
            })
            .collect();

        let rule_width: usize = widths.iter().sum();
        vec![
            Line::from(spans),
            Line::from(Span::styled(
                "─".repeat(rule_width),
                Style::default().fg(Color::DarkGray),
            )),
        ]
    }

    pub fn row_line(&self, row: &Row, widths: &[usize]) -> Line<'static> {
        let base = if row.highlighted {
            ROW_HIGHLIGHT
        } else {
            Style::default()
        };

        let mut spans = Vec::with_capacity(widths.len());
        let mut col = 0;
        for cell in &row.cells {
            if col >= widths.len() {
                break;
            }
            let end = (col + cell.col_span).min(widths.len());
            let width: usize = widths[col..end].iter().sum();
            let padding = if cell.flush { 0 } else { CELL_PADDING };
            spans.push(Span::styled(
                pad_cell(&cell.content, width, cell.align.unwrap_or_default(), padding),
                base.patch(cell.style),
            ));
            col = end;
        }

        if col < widths.len() {
            let rest: usize = widths[col..].iter().sum();
            spans.push(Span::styled(" ".repeat(rest), base));
        }

        Line::from(spans)
    }

    /// Body lines, one per row (or the empty message)
    pub fn body_lines(&self, widths: &[usize]) -> Vec<Line<'static>> {
        if self.rows.is_empty() {
            return self
                .empty_message
                .iter()
                .map(|m| {
                    Line::from(Span::styled(
                        format!(" {}", m),
                        Style::default().fg(Color::DarkGray),
                    ))
                })
                .collect();
        }
        self.rows.iter().map(|row| self.row_line(row, widths)).collect()
    }

    /// Render inside a bordered block, keeping the highlighted row in view
    pub fn render(&self, frame: &mut Frame, area: Rect, scroll: &mut TableScroll, border: Color) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.title))
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let widths = self.column_widths(inner.width as usize);
        let header = self.header_lines(&widths);
        let header_height = (header.len() as u16).min(inner.height);
        let header_area = Rect::new(inner.x, inner.y, inner.width, header_height);
        frame.render_widget(Paragraph::new(header), header_area);

        let body_area = Rect::new(
            inner.x,
            inner.y + header_height,
            inner.width,
            inner.height - header_height,
        );
        let visible = body_area.height as usize;
        let total = self.rows.len();

        if let Some(focus) = self.rows.iter().position(|r| r.highlighted) {
            scroll.keep_visible(focus, visible, total);
        }
        scroll.offset = scroll.offset.min(total.saturating_sub(visible));

        let body = Paragraph::new(self.body_lines(&widths)).scroll((scroll.offset as u16, 0));
        frame.render_widget(body, body_area);

        if total > visible {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible)).position(scroll.offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }
    }
}

/// Fit `text` into `width` display cells: pad by `padding` on both sides,
/// align within the rest, and truncate with an ellipsis when too long.
pub fn pad_cell(text: &str, width: usize, align: Align, padding: usize) -> String {
    if width <= padding * 2 {
        return " ".repeat(width);
    }
    let inner = width - padding * 2;
    let fitted = truncate(text, inner);
    let gap = inner.saturating_sub(fitted.width());
    let (left, right) = match align {
        Align::Left => (0, gap),
        Align::Right => (gap, 0),
        Align::Center => (gap / 2, gap - gap / 2),
    };
    format!(
        "{}{}{}",
        " ".repeat(padding + left),
        fitted,
        " ".repeat(right + padding)
    )
}

/// Cut `text` to at most `width` display cells, ending in `…` when cut
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    // Measure the whole prefix: combining sequences can widen the char before them
    let mut out = String::new();
    for c in text.chars() {
        out.push(c);
        if out.width() + 1 > width {
            out.pop();
            break;
        }
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn sample() -> DataTable {
        DataTable::new(vec![
            Heading::new("#").align(Align::Right),
            Heading::new("Player"),
            Heading::new("Pts").align(Align::Right),
        ])
        .rows(vec![
            Row::new(vec![
                Cell::new("1").align(Align::Right).collapsing(),
                Cell::new("Connor McDavid"),
                Cell::new("132").align(Align::Right).collapsing(),
            ]),
            Row::new(vec![
                Cell::new("2").align(Align::Right).collapsing(),
                Cell::new("Cale Makar"),
                Cell::new("90").align(Align::Right).collapsing(),
            ]),
        ])
    }

    #[test]
    fn test_alignment_defaults_to_left() {
        assert_eq!(Heading::new("x").align, Align::Left);
        assert_eq!(Cell::new("x").align.unwrap_or_default(), Align::Left);
    }

    #[test]
    fn test_pad_cell_alignment() {
        assert_eq!(pad_cell("ab", 8, Align::Left, 1), " ab     ");
        assert_eq!(pad_cell("ab", 8, Align::Right, 1), "     ab ");
        assert_eq!(pad_cell("ab", 8, Align::Center, 1), "   ab   ");
        assert_eq!(pad_cell("ab", 4, Align::Left, 0), "ab  ");
    }

    #[test]
    fn test_truncate_uses_display_width() {
        assert_eq!(truncate("McDavid", 10), "McDavid");
        assert_eq!(truncate("McDavid", 5), "McDa…");
        assert_eq!(truncate("Stützle", 4), "Stü…");
        assert_eq!(truncate("日本語", 4), "日…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_emoji_presentation_sequences_fit_their_cell() {
        let name = "a❤\u{FE0F}bcd";
        let cut = truncate(name, 3);
        assert!(cut.width() <= 3, "{:?} is {} wide", cut, cut.width());
        assert!(cut.ends_with('…'));

        let padded = pad_cell(name, 5, Align::Left, 1);
        assert_eq!(padded.width(), 5);
    }

    #[test]
    fn test_render_narrow_table_with_emoji() {
        use ratatui::{backend::TestBackend, Terminal};

        let table = DataTable::new(vec![Heading::new("Team")])
            .rows(vec![Row::new(vec![Cell::new("I ❤\u{FE0F} Hockey Club")])]);
        let mut terminal = Terminal::new(TestBackend::new(7, 6)).unwrap();
        let mut scroll = TableScroll::default();
        terminal
            .draw(|frame| {
                let area = frame.area();
                table.render(frame, area, &mut scroll, Color::DarkGray);
            })
            .unwrap();
    }

    #[test]
    fn test_collapsing_columns_keep_natural_width() {
        let widths = sample().column_widths(40);
        // "#" heading vs "1": natural 3; "Pts"/"132": natural 5
        assert_eq!(widths[0], 3);
        assert_eq!(widths[2], 5);
        assert_eq!(widths.iter().sum::<usize>(), 40);
    }

    #[test]
    fn test_flexible_columns_shrink_to_heading_width() {
        let widths = sample().column_widths(10);
        assert_eq!(widths, vec![3, 8, 5]);
    }

    #[test]
    fn test_col_span_merges_widths() {
        let table = sample().rows(vec![
            Row::new(vec![Cell::new("Round 1").col_span(3)]),
            Row::new(vec![
                Cell::new("1").collapsing(),
                Cell::new("A"),
                Cell::new("9").collapsing(),
            ]),
        ]);
        let widths = table.column_widths(20);
        let line = table.row_line(&table.rows[0], &widths);
        let text = line_text(&line);
        assert_eq!(text.width(), 20);
        assert!(text.starts_with(" Round 1"));
    }

    #[test]
    fn test_flush_cell_has_no_padding() {
        let table = DataTable::new(vec![Heading::new("A")])
            .rows(vec![Row::new(vec![Cell::new("x").flush()])]);
        let widths = table.column_widths(3);
        assert_eq!(line_text(&table.row_line(&table.rows[0], &widths)), "x  ");
    }

    #[test]
    fn test_short_rows_are_filled() {
        let table = sample();
        let widths = table.column_widths(30);
        let row = Row::new(vec![Cell::new("1")]);
        assert_eq!(line_text(&table.row_line(&row, &widths)).width(), 30);
    }

    #[test]
    fn test_highlighted_row_uses_highlight_style() {
        let table = sample();
        let widths = table.column_widths(30);
        let row = table.rows[0].clone().highlighted(true);
        let line = table.row_line(&row, &widths);
        assert!(line.spans.iter().all(|s| s.style.bg == Some(Color::DarkGray)));
    }

    #[test]
    fn test_header_lines() {
        let table = sample();
        let widths = table.column_widths(30);
        let header = table.header_lines(&widths);
        assert_eq!(header.len(), 2);
        assert!(line_text(&header[0]).contains("Player"));
        assert_eq!(line_text(&header[1]).chars().count(), 30);
    }

    #[test]
    fn test_empty_message() {
        let table = DataTable::new(vec![Heading::new("Player")]).empty_message("Nobody here");
        let lines = table.body_lines(&table.column_widths(20));
        assert_eq!(lines.len(), 1);
        assert!(line_text(&lines[0]).contains("Nobody here"));
    }

    #[test]
    fn test_keep_visible() {
        let mut scroll = TableScroll::default();
        scroll.keep_visible(15, 10, 40);
        assert_eq!(scroll.offset, 6);
        scroll.keep_visible(3, 10, 40);
        assert_eq!(scroll.offset, 3);
        scroll.keep_visible(39, 10, 40);
        assert_eq!(scroll.offset, 30);
    }
}
