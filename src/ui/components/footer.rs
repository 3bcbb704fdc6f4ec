use crate::screen::search::SearchScreen;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub fn render_footer(search: &SearchScreen, frame: &mut Frame, area: ratatui::layout::Rect) {
    // the search hint dims while the query gate is closed
    let search_style = if search.search_enabled() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled(" Tab - Field ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw("|"),
        Span::styled(" Enter - Search ", search_style),
        Span::raw("|"),
        Span::styled(" ^R - Random ", Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
        Span::raw("|"),
        Span::styled(" ↑/↓ - Scroll ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::raw("|"),
        Span::styled(" ^Q - Quit ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    ]);

    let widget = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
