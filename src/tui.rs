use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::Rect;
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::error::Result;
use crate::state::{AppState, Dialog};
use crate::ui::dialog::{self, DialogHit};
use crate::ui::{item_list, layout};

pub fn run_tui(mut state: AppState) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        disable_raw_mode().ok();
        return Err(e.into());
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(t) => t,
        Err(e) => {
            restore_terminal();
            return Err(e.into());
        }
    };

    info!(items = state.items.len(), "entering terminal UI");
    let result = main_loop(&mut terminal, &mut state);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture).ok();
    terminal.show_cursor().ok();

    result
}

fn restore_terminal() {
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).ok();
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| crate::ui::draw(f, state))?;

        if state.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key(key, state);
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    handle_mouse(mouse, state, area);
                }
                _ => {}
            }
        }
    }

    info!("leaving terminal UI");
    Ok(())
}

pub fn handle_key(key: KeyEvent, state: &mut AppState) {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_quit = true;
        return;
    }

    match state.top_dialog() {
        Some(Dialog::ReportAnswer) => handle_answer_key(key, state),
        Some(Dialog::ReportDetail) => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => state.close_top_dialog(),
            KeyCode::Up | KeyCode::Char('k') => state.scroll_detail_up(),
            KeyCode::Down | KeyCode::Char('j') => state.scroll_detail_down(),
            _ => {}
        },
        Some(Dialog::Help) => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => state.close_top_dialog(),
            _ => {}
        },
        None => handle_list_key(key, state),
    }
}

fn handle_list_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => state.select_next(),
        KeyCode::Home => state.select(0),
        KeyCode::End => state.select(state.items.len().saturating_sub(1)),
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.status = None;
            state.activate_current();
        }
        KeyCode::Char('?') => state.show_help = true,
        KeyCode::Char('q') => state.should_quit = true,
        _ => {}
    }
}

fn handle_answer_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Esc => state.close_top_dialog(),
        KeyCode::Enter => {
            state.submit_report();
        }
        KeyCode::Backspace => {
            if let Some(m) = state.answer_modal.as_mut() {
                m.pop_reason_char();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(m) = state.answer_modal.as_mut() {
                m.push_reason_char(c);
            }
        }
        _ => {}
    }
}

pub fn handle_mouse(mouse: MouseEvent, state: &mut AppState, area: Rect) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let (x, y) = (mouse.column, mouse.row);

    if let Some(hit) = dialog::hit_test(area, state, x, y) {
        debug!(?hit, x, y, "dialog click");
        match hit {
            DialogHit::Click(target) => state.click_dialog(target),
            DialogHit::Submit => {
                state.submit_report();
            }
        }
        return;
    }

    let list = layout::compute_layout(area).list;
    if x < list.x || x >= list.x + list.width {
        return;
    }
    if let Some(idx) = item_list::item_at(list, state, y) {
        state.select(idx);
        state.status = None;
        state.activate_current();
    }
}
