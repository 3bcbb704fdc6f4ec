mod components;
mod layout;
pub mod widgets;

use crate::app::App;
use ratatui::Frame;
use ratatui::layout::Rect;

pub fn render_ui(app: &App, frame: &mut Frame, area: Rect) {
    let layout = layout::main_layout(area);

    match &app.screen.current {
        crate::screen::Screen::Search(search) => {
            components::form::render_form(search, frame, layout.form);
            components::results::render_results(search, app.spinner_idx, frame, layout.results);
            components::footer::render_footer(search, frame, layout.footer);
        }
    }
}
