use crate::config::Config;
use crate::core::client::{SearchClient, SearchKind, SearchOutcome};
use crate::event::handle_key_event;
use crate::log_buffer::LOG_BUFFER;
use crate::screen::ScreenState;
use crate::screen::search::ResultsView;
use crossterm::event::{self, Event as CEvent, KeyEventKind};
use log::{info, warn};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::{DefaultTerminal, Frame};
use std::io;
use std::time::Duration;
use tokio::task::JoinHandle;

pub struct App {
    pub running: bool,
    pub screen: ScreenState,
    /// Requests still waiting on the backend. Finished handles are applied
    /// to the results view in completion order, so the last response to
    /// resolve wins the pane regardless of issue order.
    pub(crate) in_flight: Vec<JoinHandle<SearchOutcome>>,
    /// Spinner animation index, advanced while anything is in flight
    pub spinner_idx: usize,
    /// Log panel scroll offset (0 = bottom/latest)
    pub log_scroll: usize,
    client: SearchClient,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            running: true,
            screen: ScreenState::default(),
            in_flight: Vec::new(),
            spinner_idx: 0,
            log_scroll: 0,
            client: SearchClient::new(&config.server_url),
        }
    }

    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        while self.running {
            self.drain_finished().await;
            if !self.in_flight.is_empty() {
                self.spinner_idx = self.spinner_idx.wrapping_add(1);
            }
            terminal.draw(|f| self.draw(f))?;
            if event::poll(Duration::from_millis(100))? {
                if let CEvent::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        handle_key_event(self, key);
                    }
                }
            }
        }
        Ok(())
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Kick off one search: install the placeholder synchronously, then hand
    /// the request to a task. No timeout and no cancellation; a superseded
    /// request keeps running and may still overwrite the pane when it lands.
    pub fn start_search(&mut self, kind: SearchKind) {
        let Some(search) = self.screen.as_search_mut() else {
            return;
        };
        search.show(ResultsView::Searching {
            label: kind.placeholder(),
        });
        let filters = search.filters();
        let client = self.client.clone();
        let handle = tokio::spawn(async move { client.search(&kind, &filters).await });
        self.in_flight.push(handle);
        self.spinner_idx = 0;
    }

    /// Apply every finished request to the results view, leaving the rest
    /// in flight.
    pub(crate) async fn drain_finished(&mut self) {
        let mut i = 0;
        while i < self.in_flight.len() {
            if !self.in_flight[i].is_finished() {
                i += 1;
                continue;
            }
            let handle = self.in_flight.remove(i);
            match handle.await {
                Ok(outcome) => {
                    match &outcome {
                        SearchOutcome::Found { movies, .. } => {
                            info!("{} movie(s) returned", movies.len());
                        }
                        SearchOutcome::Rejected { message } => warn!("server error: {message}"),
                        SearchOutcome::Unreachable { message } => {
                            warn!("request failed: {message}");
                        }
                    }
                    if let Some(search) = self.screen.as_search_mut() {
                        search.show(ResultsView::Outcome(outcome));
                    }
                }
                Err(err) => warn!("search task died: {err}"),
            }
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        // top log panel (border + 2 lines + border), content below
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(frame.area());
        self.render_log_box(frame, chunks[0]);
        crate::ui::render_ui(self, frame, chunks[1]);
    }

    /// Render the most recent log lines, honoring the scroll offset.
    fn render_log_box(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Logs");
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let Ok(logs) = LOG_BUFFER.lock() else {
            return;
        };
        let total = logs.len();
        let height = inner.height as usize;
        let scroll = self.log_scroll.min(total.saturating_sub(1));
        let end = total.saturating_sub(scroll);
        let start = end.saturating_sub(height);
        let slice = logs.get(start..end).unwrap_or(&[]);
        let lines: Vec<Line> = slice.iter().map(|l| Line::from(l.as_str())).collect();
        let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        // port 1 is never listening; requests fail fast with a connect error
        App::new(&Config {
            server_url: "http://127.0.0.1:1".to_string(),
        })
    }

    #[tokio::test]
    async fn placeholder_is_installed_synchronously_at_dispatch() {
        let mut app = test_app();
        app.start_search(SearchKind::Random);
        let search = app.screen.as_search().unwrap();
        assert_eq!(
            search.results,
            ResultsView::Searching {
                label: "Searching random movie…"
            }
        );
        assert_eq!(app.in_flight.len(), 1);
    }

    #[tokio::test]
    async fn last_resolved_response_wins_the_pane() {
        let mut app = test_app();
        let slow = SearchOutcome::Rejected {
            message: "slow".to_string(),
        };
        let fast = SearchOutcome::Rejected {
            message: "fast".to_string(),
        };

        // issue order: slow first, fast second; resolve order is reversed
        let outcome = slow.clone();
        app.in_flight.push(tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(80)).await;
            outcome
        }));
        let outcome = fast.clone();
        app.in_flight.push(tokio::spawn(async move { outcome }));

        while !app.in_flight.is_empty() {
            app.drain_finished().await;
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        let search = app.screen.as_search().unwrap();
        assert_eq!(search.results, ResultsView::Outcome(slow));
    }

    #[tokio::test]
    async fn unreachable_backend_surfaces_as_transport_failure() {
        let mut app = test_app();
        app.start_search(SearchKind::Keyword {
            query: "matrix".to_string(),
            limit: 5,
        });
        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        loop {
            app.drain_finished().await;
            if let Some(search) = app.screen.as_search() {
                if let ResultsView::Outcome(outcome) = &search.results {
                    assert!(matches!(outcome, SearchOutcome::Unreachable { .. }));
                    return;
                }
            }
            assert!(
                tokio::time::Instant::now() < deadline,
                "request never completed"
            );
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }
}
