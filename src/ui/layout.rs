use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct MainLayout {
    pub form: Rect,
    pub results: Rect,
    pub footer: Rect,
}

pub fn main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // form row
            Constraint::Min(0),    // results
            Constraint::Length(1), // footer
        ])
        .split(area);

    MainLayout {
        form: chunks[0],
        results: chunks[1],
        footer: chunks[2],
    }
}
