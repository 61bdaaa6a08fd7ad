pub mod dialog;
pub mod item_list;
pub mod keybar;
pub mod layout;
pub mod statusbar;
pub mod titlebar;

use ratatui::Frame;

use crate::state::AppState;

pub fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();
    let layout = layout::compute_layout(area);

    titlebar::draw_titlebar(f, layout.titlebar, state);
    item_list::draw_item_list(f, layout.list, state);
    statusbar::draw_statusbar(f, layout.statusbar, state);
    keybar::draw_keybar(f, layout.keybar, state);

    // Draw dialog overlay if any
    if state.has_dialog() {
        dialog::draw_dialog(f, area, state);
    }
}
