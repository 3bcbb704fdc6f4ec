use crate::core::client::{SearchFilters, SearchOutcome};

/// Languages offered by the language select.
pub const LANGUAGES: &[&str] = &["es", "en", "fr"];

/// Models offered by the model select.
pub const MODELS: &[&str] = &["llama3", "mistral", "gemma"];

const DEFAULT_LIMIT_TEXT: &str = "5";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSection {
    Query,
    Language,
    Model,
    Limit,
}

impl SearchSection {
    pub fn all() -> Vec<Self> {
        vec![Self::Query, Self::Language, Self::Model, Self::Limit]
    }

    pub fn next(&self) -> Self {
        let idx = (self.to_index() + 1) % Self::all().len();
        Self::from_index(idx)
    }

    pub fn prev(&self) -> Self {
        let all = Self::all();
        let idx = (self.to_index() + all.len() - 1) % all.len();
        Self::from_index(idx)
    }

    pub fn to_index(&self) -> usize {
        Self::all().iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn from_index(i: usize) -> Self {
        Self::all().get(i).copied().unwrap_or(Self::Query)
    }

    /// True for the two selects whose options cycle with Up/Down.
    pub fn is_select(&self) -> bool {
        matches!(self, Self::Language | Self::Model)
    }
}

/// Current content of the results pane. Replaced wholesale on every
/// transition; the previous content is never appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    Idle,
    Searching { label: &'static str },
    Outcome(SearchOutcome),
}

/// Form and results state for the one search screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchScreen {
    pub section: SearchSection,
    pub query: String,
    pub language_idx: usize,
    pub model_idx: usize,
    /// Digits-only edit buffer for the result limit
    pub limit: String,
    pub results: ResultsView,
    pub results_scroll: u16,
}

impl Default for SearchScreen {
    fn default() -> Self {
        Self {
            section: SearchSection::Query,
            query: String::new(),
            language_idx: 0,
            model_idx: 0,
            limit: DEFAULT_LIMIT_TEXT.to_string(),
            results: ResultsView::Idle,
            results_scroll: 0,
        }
    }
}

impl SearchScreen {
    pub fn next_section(&mut self) {
        self.section = self.section.next();
    }

    pub fn prev_section(&mut self) {
        self.section = self.section.prev();
    }

    /// The keyword-search gate, recomputed from the buffer on every read.
    pub fn search_enabled(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn language(&self) -> &'static str {
        LANGUAGES[self.language_idx % LANGUAGES.len()]
    }

    pub fn model(&self) -> &'static str {
        MODELS[self.model_idx % MODELS.len()]
    }

    /// Parsed result limit; a cleared or overlong buffer falls back to 0,
    /// which the backend reads as "no limit".
    pub fn limit_value(&self) -> u32 {
        self.limit.parse().unwrap_or(0)
    }

    pub fn filters(&self) -> SearchFilters {
        SearchFilters {
            language: self.language().to_string(),
            model: self.model().to_string(),
        }
    }

    pub fn cycle_option(&mut self, step: isize) {
        let cycle = |idx: usize, len: usize| {
            (idx as isize + step).rem_euclid(len as isize) as usize
        };
        match self.section {
            SearchSection::Language => self.language_idx = cycle(self.language_idx, LANGUAGES.len()),
            SearchSection::Model => self.model_idx = cycle(self.model_idx, MODELS.len()),
            _ => {}
        }
    }

    /// Install new pane content; the overwrite model means scroll position
    /// from the previous content is meaningless.
    pub fn show(&mut self, view: ResultsView) {
        self.results = view;
        self.results_scroll = 0;
    }
}
