pub mod search;

use search::SearchScreen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Search(SearchScreen),
}

#[derive(Debug)]
pub struct ScreenState {
    pub current: Screen,
}

impl ScreenState {
    pub fn as_search_mut(&mut self) -> Option<&mut SearchScreen> {
        let Screen::Search(search) = &mut self.current;
        Some(search)
    }

    pub fn as_search(&self) -> Option<&SearchScreen> {
        let Screen::Search(search) = &self.current;
        Some(search)
    }
}

impl Default for ScreenState {
    fn default() -> Self {
        Self {
            current: Screen::Search(SearchScreen::default()),
        }
    }
}
