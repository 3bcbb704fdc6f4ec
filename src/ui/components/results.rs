//! Results pane: the sole writer of search output
//!
//! Rendering is a pure function from a completed outcome to pane content;
//! the pane itself just draws whatever the latest call produced, so the
//! newest completed request always fully replaces what came before.

use crate::core::client::SearchOutcome;
use crate::screen::search::{ResultsView, SearchScreen};
use crate::ui::widgets::bouncing_ball;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

fn heading(text: &'static str) -> Line<'static> {
    Line::styled(
        text,
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )
}

fn error_line(text: String) -> Line<'static> {
    Line::styled(text, Style::default().fg(Color::Red))
}

/// Push one paragraph block: a separating blank line, then the text with
/// embedded newlines expanded to visual lines.
fn push_paragraph(lines: &mut Vec<Line<'static>>, text: &str) {
    lines.push(Line::raw(""));
    for part in text.split('\n') {
        lines.push(Line::raw(part.to_string()));
    }
}

/// Build the full replacement content for one completed request.
pub fn outcome_text(outcome: &SearchOutcome) -> Text<'static> {
    let mut lines = Vec::new();
    match outcome {
        SearchOutcome::Rejected { message } => {
            lines.push(error_line(format!("Error: {message}")));
        }
        SearchOutcome::Unreachable { message } => {
            lines.push(error_line(format!("Could not reach server: {message}")));
        }
        SearchOutcome::Found {
            movies,
            recommendations,
        } => {
            lines.push(heading("Movies found:"));
            if movies.is_empty() {
                push_paragraph(&mut lines, "No movies found.");
            } else {
                for movie in movies {
                    push_paragraph(&mut lines, movie);
                }
            }
            if let Some(recommendations) = recommendations {
                lines.push(Line::raw(""));
                lines.push(heading("Model recommendations:"));
                push_paragraph(&mut lines, recommendations);
            }
        }
    }
    Text::from(lines)
}

pub fn render_results(search: &SearchScreen, spinner_idx: usize, frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Results");
    let content = match &search.results {
        ResultsView::Idle => Text::styled(
            "Type a query and press Enter, or Ctrl-R for a random movie.",
            Style::default().fg(Color::DarkGray),
        ),
        ResultsView::Searching { label } => Text::from(vec![
            Line::raw(*label),
            Line::styled(
                bouncing_ball(spinner_idx, 12),
                Style::default().fg(Color::Green),
            ),
        ]),
        ResultsView::Outcome(outcome) => outcome_text(outcome),
    };
    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((search.results_scroll, 0));
    frame.render_widget(paragraph, area);
}
