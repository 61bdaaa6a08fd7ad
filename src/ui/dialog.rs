use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::modal::{ClickTarget, Modal};
use crate::report_answer::ANSWER_ID_FIELD;
use crate::state::{AppState, Dialog};

const INDENT: &str = "   ";
const SUBMIT_LABEL: &str = "[Enter] Submit";
const CANCEL_LABEL: &str = "[Esc] Cancel";
const CLOSE_LABEL: &str = "[Esc] Close";
const BUTTON_GAP: &str = "    ";
const ANSWER_WIDTH: u16 = 56;
const DETAIL_MIN_WIDTH: u16 = 40;
const REASON_ROWS: usize = 5;
/// Lines of the detail dialog besides its entries: blank, heading, blank,
/// blank, buttons.
const DETAIL_FIXED_ROWS: u16 = 5;

/// Result of hit-testing a click against the open dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogHit {
    Click(ClickTarget),
    Submit,
}

struct DialogView {
    title: &'static str,
    color: Color,
    width: u16,
    lines: Vec<Line<'static>>,
    /// Columns of each button, relative to the inner area. Buttons sit on
    /// the last line.
    submit_cols: Option<(u16, u16)>,
    close_cols: Option<(u16, u16)>,
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn dialog_rect(view: &DialogView, area: Rect) -> Rect {
    centered_rect(view.width, to_u16(view.lines.len()).saturating_add(2), area)
}

pub fn draw_dialog(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(view) = build_view(state, area) else {
        return;
    };

    let rect = dialog_rect(&view, area);
    f.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(view.title)
        .border_style(Style::default().fg(view.color));
    let widget = Paragraph::new(view.lines).block(block);
    f.render_widget(widget, rect);
}

/// Maps a click at (`x`, `y`) to the open dialog: outside its rectangle is
/// the backdrop. Returns `None` when no dialog is open.
pub fn hit_test(area: Rect, state: &AppState, x: u16, y: u16) -> Option<DialogHit> {
    let view = build_view(state, area)?;
    let rect = dialog_rect(&view, area);

    let inside = x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height);
    if !inside {
        return Some(DialogHit::Click(ClickTarget::Backdrop));
    }

    // The button line only counts when it is actually drawn: a clipped
    // dialog loses its bottom lines first.
    let inner_bottom = rect.y.saturating_add(rect.height).saturating_sub(1);
    let button_row = rect
        .y
        .saturating_add(1)
        .saturating_add(to_u16(view.lines.len().saturating_sub(1)));
    if y == button_row && button_row < inner_bottom && x > rect.x {
        let col = x - rect.x - 1;
        if let Some((start, end)) = view.close_cols {
            if (start..end).contains(&col) {
                return Some(DialogHit::Click(ClickTarget::CloseControl));
            }
        }
        if let Some((start, end)) = view.submit_cols {
            if (start..end).contains(&col) {
                return Some(DialogHit::Submit);
            }
        }
    }
    Some(DialogHit::Click(ClickTarget::Content))
}

fn build_view(state: &AppState, area: Rect) -> Option<DialogView> {
    match state.top_dialog()? {
        Dialog::ReportAnswer => Some(answer_view(state)),
        Dialog::ReportDetail => Some(detail_view(state, area)),
        Dialog::Help => Some(help_view()),
    }
}

fn heading(text: &str, color: Color) -> Line<'static> {
    Line::from(Span::styled(
        format!("{}{}", INDENT, text),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

fn close_row(show: bool) -> (Line<'static>, Option<(u16, u16)>) {
    if !show {
        return (Line::from(""), None);
    }
    let start = to_u16(INDENT.len());
    let line = Line::from(vec![
        Span::raw(INDENT),
        Span::styled(CLOSE_LABEL, Style::default().fg(Color::DarkGray)),
    ]);
    (line, Some((start, start + to_u16(CLOSE_LABEL.len()))))
}

fn answer_view(state: &AppState) -> DialogView {
    let (answer_id, action, reason, closable) = match state.answer_modal.as_ref() {
        Some(m) => (
            m.form().value(ANSWER_ID_FIELD).unwrap_or("").to_string(),
            m.form().action().to_string(),
            m.reason().to_string(),
            m.root().has_close_control(),
        ),
        None => Default::default(),
    };

    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(""),
        heading("Report this answer?", Color::Yellow),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{}Answer:  ", INDENT), label),
            Span::raw(answer_id),
        ]),
        Line::from(vec![
            Span::styled(format!("{}Send to: ", INDENT), label),
            Span::raw(action),
        ]),
        Line::from(""),
        Line::from(Span::styled(format!("{}Reason:", INDENT), label)),
    ];

    // Show the tail of the reason so the cursor stays in view.
    let wrap = (ANSWER_WIDTH as usize).saturating_sub(2 + INDENT.len() + 3);
    let mut rows = wrap_chars(&format!("{}_", reason), wrap);
    if rows.len() > REASON_ROWS {
        rows.drain(..rows.len() - REASON_ROWS);
    }
    for row in rows {
        lines.push(Line::from(vec![
            Span::styled(format!("{}> ", INDENT), Style::default().fg(Color::Cyan)),
            Span::raw(row),
        ]));
    }

    lines.push(Line::from(""));
    let submit_start = to_u16(INDENT.len());
    let submit_end = submit_start + to_u16(SUBMIT_LABEL.len());
    let mut buttons = vec![
        Span::raw(INDENT),
        Span::styled(SUBMIT_LABEL, Style::default().fg(Color::Green)),
    ];
    let close_cols = closable.then(|| {
        let cancel_start = submit_end + to_u16(BUTTON_GAP.len());
        buttons.push(Span::raw(BUTTON_GAP));
        buttons.push(Span::styled(CANCEL_LABEL, Style::default().fg(Color::DarkGray)));
        (cancel_start, cancel_start + to_u16(CANCEL_LABEL.len()))
    });
    lines.push(Line::from(buttons));

    DialogView {
        title: " Report ",
        color: Color::Yellow,
        width: ANSWER_WIDTH,
        lines,
        submit_cols: Some((submit_start, submit_end)),
        close_cols,
    }
}

/// Window of the report list that fits in `rows` lines starting near
/// `scroll`. The last line is kept for an overflow note when entries are
/// hidden.
pub fn detail_window(total: usize, scroll: usize, rows: usize) -> (usize, usize) {
    if total <= rows {
        return (0, total);
    }
    let shown = rows.saturating_sub(1);
    let start = scroll.min(total - shown);
    (start, start + shown)
}

/// Entry rows available to the detail dialog inside `area`.
pub fn detail_rows(area: Rect) -> usize {
    area.height.saturating_sub(2 + DETAIL_FIXED_ROWS) as usize
}

fn detail_view(state: &AppState, area: Rect) -> DialogView {
    let (entries, closable): (&[String], bool) = match state.detail_modal.as_ref() {
        Some(m) => (m.lines(), m.root().has_close_control()),
        None => (&[], false),
    };

    let max_width = area.width.saturating_sub(4).max(20);
    let min_width = DETAIL_MIN_WIDTH.min(max_width);
    let longest = entries
        .iter()
        .map(|l| l.chars().count() + INDENT.len() + 2)
        .max()
        .unwrap_or(0);
    let width = to_u16(longest).saturating_add(4).clamp(min_width, max_width);
    let text_max = (width as usize).saturating_sub(2 + INDENT.len() + 2);

    let mut lines = vec![
        Line::from(""),
        heading("Report reasons", Color::Red),
        Line::from(""),
    ];
    let (start, end) = detail_window(entries.len(), state.detail_scroll, detail_rows(area));
    for entry in &entries[start..end] {
        let text: String = entry.chars().take(text_max).collect();
        lines.push(Line::from(vec![
            Span::styled(format!("{}• ", INDENT), Style::default().fg(Color::Red)),
            Span::raw(text),
        ]));
    }
    let hidden = entries.len() - (end - start);
    if hidden > 0 {
        lines.push(Line::from(Span::styled(
            format!("{}… {} more (↑/↓ to scroll)", INDENT, hidden),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));
    let (row, close_cols) = close_row(closable);
    lines.push(row);

    DialogView {
        title: " Reports ",
        color: Color::Red,
        width,
        lines,
        submit_cols: None,
        close_cols,
    }
}

fn help_view() -> DialogView {
    let mut lines = vec![
        Line::from(""),
        heading("Key Bindings", Color::Cyan),
        Line::from(""),
        Line::from("   ↑/↓ k/j    Select element"),
        Line::from("   Enter      Open report dialog"),
        Line::from("   Space      Open report dialog"),
        Line::from("   click      Select and open"),
        Line::from("   Esc        Close dialog"),
        Line::from("   ?          This help"),
        Line::from("   q/Ctrl+Q   Quit"),
        Line::from(""),
    ];
    // Help is not a page modal; it can always be closed.
    let (row, close_cols) = close_row(true);
    lines.push(row);

    DialogView {
        title: " Help ",
        color: Color::Cyan,
        width: 44,
        lines,
        submit_cols: None,
        close_cols,
    }
}

fn wrap_chars(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let chars: Vec<char> = text.chars().collect();
    chars.chunks(width).map(|c| c.iter().collect()).collect()
}
