use crate::app::App;
use crate::core::client::SearchKind;
use crate::screen::search::SearchSection;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_event(app: &mut App, event: KeyEvent) {
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        handle_control_keys(app, event);
    } else {
        handle_key(app, event);
    }
}

fn handle_control_keys(app: &mut App, event: KeyEvent) {
    match event.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('r') => app.start_search(SearchKind::Random),
        _ => {}
    }
}

fn handle_key(app: &mut App, event: KeyEvent) {
    // log panel scroll works from any field
    match event.code {
        KeyCode::PageUp => {
            app.log_scroll = app.log_scroll.saturating_add(1);
            return;
        }
        KeyCode::PageDown => {
            app.log_scroll = app.log_scroll.saturating_sub(1);
            return;
        }
        _ => {}
    }

    let Some(search) = app.screen.as_search_mut() else {
        return;
    };
    let mut triggered = None;
    match event.code {
        KeyCode::Tab => search.next_section(),
        KeyCode::BackTab => search.prev_section(),
        // the gate: Enter only fires while the trimmed query is non-empty
        KeyCode::Enter => {
            if search.search_enabled() {
                triggered = Some(SearchKind::Keyword {
                    query: search.query.clone(),
                    limit: search.limit_value(),
                });
            }
        }
        KeyCode::Up => {
            if search.section.is_select() {
                search.cycle_option(-1);
            } else {
                search.results_scroll = search.results_scroll.saturating_sub(1);
            }
        }
        KeyCode::Down => {
            if search.section.is_select() {
                search.cycle_option(1);
            } else {
                search.results_scroll = search.results_scroll.saturating_add(1);
            }
        }
        KeyCode::Char(c) => match search.section {
            SearchSection::Query => search.query.push(c),
            SearchSection::Limit if c.is_ascii_digit() => search.limit.push(c),
            _ => {}
        },
        KeyCode::Backspace => match search.section {
            SearchSection::Query => {
                search.query.pop();
            }
            SearchSection::Limit => {
                search.limit.pop();
            }
            _ => {}
        },
        _ => {}
    }
    if let Some(kind) = triggered {
        app.start_search(kind);
    }
}
