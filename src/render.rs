//! Drawing the grid screen.
//!
//! The screen is laid out top to bottom as:
//!
//! 1. a header line with column letters;
//! 2. each visible row as `cell_height` lines (rule line, text line, padding);
//! 3. a closing rule line;
//! 4. the status line;
//! 5. the help line.
//!
//! Everything but the rows counts towards the layout's `chrome_rows`.

use crate::editor;
use crate::grid::{column_label, CellView, Model};
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthChar;

/// Outcome of the last action, shown after the position in the status line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Status {
    /// Nothing to report.
    #[default]
    Empty,
    /// Normal feedback such as a successful save.
    Info(String),
    /// Something failed; the grid is unchanged.
    Error(String),
}

impl Status {
    /// The message text, empty for [`Status::Empty`].
    pub fn text(&self) -> &str {
        match self {
            Status::Empty => "",
            Status::Info(s) | Status::Error(s) => s,
        }
    }

    /// Whether this reports a failure.
    pub fn is_error(&self) -> bool {
        matches!(self, Status::Error(_))
    }
}

/// Styles used by [`view`].
#[derive(Debug, Clone)]
pub struct Styles {
    /// Column letters.
    pub header: Style,
    /// Borders and rules.
    pub border: Style,
    /// Text of the selected cell.
    pub selected: Style,
    /// Position part of the status line.
    pub status: Style,
    /// Informational status message.
    pub info: Style,
    /// Error status message.
    pub error: Style,
    /// Help line.
    pub help: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            header: Style::new().bold(true),
            border: Style::new().foreground(Color::from("240")),
            selected: Style::new().reverse(true),
            status: Style::new(),
            info: Style::new().foreground(Color::from("42")),
            error: Style::new().foreground(Color::from("196")).bold(true),
            help: Style::new().faint(true),
        }
    }
}

/// What one frame shows besides the grid itself.
pub struct Frame<'a> {
    /// Open cell editor, drawn in place of the selected cell's text.
    pub editor: Option<&'a editor::Model>,
    /// Last status.
    pub status: &'a Status,
    /// Pre-rendered help text.
    pub help: &'a str,
}

/// Renders the full screen for `model`.
pub fn view(model: &Model, frame: &Frame<'_>, styles: &Styles) -> String {
    let layout = model.layout();
    let window = model.visible_window();
    let cols = window.col_range();
    let width = usize::from(model.terminal_size().width);
    let cells: Vec<CellView<'_>> = window.collect();

    let mut lines = Vec::new();
    lines.push(header_line(cols.clone(), layout.cell_width, layout.separator, styles));

    if !cols.is_empty() {
        for row in cells.chunks(cols.len()) {
            if layout.cell_height > 1 {
                lines.push(rule_line(row.len(), layout.cell_width, layout.separator, styles));
            }
            lines.push(text_line(row, layout.cell_width, layout.separator, frame, styles));
            for _ in 2..layout.cell_height {
                lines.push(blank_line(row.len(), layout.cell_width, layout.separator, styles));
            }
        }
        lines.push(rule_line(cols.len(), layout.cell_width, layout.separator, styles));
    }

    lines.push(status_line(model, frame.status, width, styles));
    lines.push(styles.help.render(&fit(frame.help, width, false)));
    lines.join("\n")
}

/// `Current Position: [r,c] View: [a-b,c-d]`, 1-based.
pub fn position_text(model: &Model) -> String {
    let cursor = model.cursor();
    let vp = model.viewport();
    format!(
        "Current Position: [{},{}] View: [{}-{},{}-{}]",
        cursor.row + 1,
        cursor.col + 1,
        vp.start_row() + 1,
        vp.start_row() + vp.visible_rows(),
        vp.start_col() + 1,
        vp.start_col() + vp.visible_cols(),
    )
}

fn status_line(model: &Model, status: &Status, width: usize, styles: &Styles) -> String {
    let position = format!("{}  {}", position_text(model), model.cursor());
    let mut line = styles.status.render(&position);
    let message = status.text();
    if !message.is_empty() {
        let room = width.saturating_sub(display_width(&position) + 2);
        let message = fit(message, room, false);
        let style = if status.is_error() {
            &styles.error
        } else {
            &styles.info
        };
        line.push_str("  ");
        line.push_str(&style.render(&message));
    }
    line
}

fn header_line(
    cols: std::ops::Range<usize>,
    cell_width: usize,
    separator: usize,
    styles: &Styles,
) -> String {
    let mut line = " ".repeat(separator);
    for col in cols {
        line.push_str(&styles.header.render(&center(&column_label(col), cell_width)));
        line.push_str(&" ".repeat(separator));
    }
    line
}

fn rule_line(count: usize, cell_width: usize, separator: usize, styles: &Styles) -> String {
    let junction = "┼".repeat(separator);
    let mut line = junction.clone();
    for _ in 0..count {
        line.push_str(&"─".repeat(cell_width));
        line.push_str(&junction);
    }
    styles.border.render(&line)
}

fn blank_line(count: usize, cell_width: usize, separator: usize, styles: &Styles) -> String {
    let bar = styles.border.render(&"│".repeat(separator));
    let mut line = bar.clone();
    for _ in 0..count {
        line.push_str(&" ".repeat(cell_width));
        line.push_str(&bar);
    }
    line
}

fn text_line(
    row: &[CellView<'_>],
    cell_width: usize,
    separator: usize,
    frame: &Frame<'_>,
    styles: &Styles,
) -> String {
    let bar = styles.border.render(&"│".repeat(separator));
    let mut line = bar.clone();
    for view in row {
        let text = match (view.is_selected, frame.editor) {
            (true, Some(editor)) => editor.view(),
            (true, None) => styles.selected.render(&fit(view.cell.text(), cell_width, true)),
            (false, _) => fit(view.cell.text(), cell_width, true),
        };
        line.push_str(&text);
        line.push_str(&bar);
    }
    line
}

fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Cuts `text` to at most `width` columns, optionally padding to exactly
/// `width`. Line breaks are shown as spaces.
pub fn fit(text: &str, width: usize, pad: bool) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch = if ch.is_control() { ' ' } else { ch };
        let w = char_width(ch);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    if pad {
        out.push_str(&" ".repeat(width - used));
    }
    out
}

fn center(text: &str, width: usize) -> String {
    let text = fit(text, width, false);
    let left = (width - display_width(&text)) / 2;
    let right = width - display_width(&text) - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
