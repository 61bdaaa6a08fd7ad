use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, ItemKind};

pub fn draw_statusbar(f: &mut Frame, area: Rect, state: &AppState) {
    let reportable = state
        .items
        .iter()
        .filter(|i| matches!(i.kind, ItemKind::ReportAnswer(_)))
        .count();
    let flagged = state
        .items
        .iter()
        .filter(|i| matches!(i.kind, ItemKind::ReportDetail(_)))
        .count();

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            format!("⚐ {} reportable", reportable),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("   "),
        Span::styled(
            format!("⚑ {} flagged", flagged),
            Style::default().fg(Color::Red),
        ),
        Span::raw("   "),
    ];
    if let Some(ref status) = state.status {
        spans.push(Span::styled(status.clone(), Style::default().fg(Color::Green)));
        spans.push(Span::raw("   "));
    }
    spans.push(Span::styled("[?] help", Style::default().fg(Color::DarkGray)));

    let widget = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Rgb(30, 30, 30)));
    f.render_widget(widget, area);
}
