use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_titlebar(f: &mut Frame, area: Rect, state: &AppState) {
    let title_text = format!("[ {} ]", state.title);
    let title_span = Span::styled(
        title_text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let widget = Paragraph::new(Line::from(title_span))
        .style(Style::default().bg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}
