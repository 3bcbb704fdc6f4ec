//! Search form row: query input, language/model selects, limit input

use crate::screen::search::{SearchScreen, SearchSection};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

fn field_block(title: &str, active: bool) -> Block<'_> {
    let border = if active { Color::Cyan } else { Color::Gray };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border))
}

pub fn render_form(search: &SearchScreen, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),    // query
            Constraint::Length(14), // language
            Constraint::Length(14), // model
            Constraint::Length(9),  // limit
        ])
        .split(area);

    let query_active = search.section == SearchSection::Query;
    let cursor = Span::styled(
        "█",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::SLOW_BLINK),
    );
    let query_line = if query_active {
        Line::from(vec![Span::raw(search.query.clone()), cursor])
    } else {
        Line::from(search.query.clone())
    };
    let query = Paragraph::new(query_line)
        .block(field_block("Query", query_active))
        .alignment(Alignment::Left);
    frame.render_widget(query, chunks[0]);

    let language = Paragraph::new(format!("< {} >", search.language())).block(field_block(
        "Language",
        search.section == SearchSection::Language,
    ));
    frame.render_widget(language, chunks[1]);

    let model = Paragraph::new(format!("< {} >", search.model())).block(field_block(
        "Model",
        search.section == SearchSection::Model,
    ));
    frame.render_widget(model, chunks[2]);

    let limit = Paragraph::new(search.limit.clone()).block(field_block(
        "Limit",
        search.section == SearchSection::Limit,
    ));
    frame.render_widget(limit, chunks[3]);
}
