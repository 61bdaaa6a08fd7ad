use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::{AppState, ItemKind};

/// First item shown so that the cursor row stays visible.
pub fn scroll_offset(cursor: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return cursor;
    }
    (cursor + 1).saturating_sub(visible_rows)
}

/// Item index under screen row `y`, if any.
pub fn item_at(area: Rect, state: &AppState, y: u16) -> Option<usize> {
    let top = area.y + 1;
    let visible = area.height.saturating_sub(2) as usize;
    if y < top || y >= top + visible as u16 {
        return None;
    }
    let idx = scroll_offset(state.cursor, visible) + (y - top) as usize;
    (idx < state.items.len()).then_some(idx)
}

pub fn draw_item_list(f: &mut Frame, area: Rect, state: &AppState) {
    let visible = area.height.saturating_sub(2) as usize;
    let offset = scroll_offset(state.cursor, visible);
    let label_max_len = area.width.saturating_sub(8) as usize; // border + cursor + icon

    let mut lines: Vec<Line> = Vec::new();
    for (i, item) in state.items.iter().enumerate().skip(offset).take(visible) {
        let (icon, color) = match item.kind {
            ItemKind::ReportAnswer(_) => ("⚐", Color::Yellow),
            ItemKind::ReportDetail(_) => ("⚑", Color::Red),
            ItemKind::Plain => ("·", Color::DarkGray),
        };

        let is_current = i == state.cursor;
        let style = if is_current {
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let label: String = item.label.chars().take(label_max_len).collect();
        let label = if item.label.chars().count() > label_max_len && label_max_len > 0 {
            let mut cut: String = label.chars().take(label_max_len - 1).collect();
            cut.push('…');
            cut
        } else {
            label
        };

        lines.push(Line::from(vec![
            Span::styled(if is_current { " ▸ " } else { "   " }, style),
            Span::styled(format!("{} ", icon), style.fg(color)),
            Span::styled(label, style),
        ]));
    }

    if state.items.is_empty() {
        lines.push(Line::from(Span::styled(
            "   Nothing to moderate on this page.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
