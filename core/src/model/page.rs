use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::input::expand_key;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    MachineLearning,
    Presentation,
    Authors,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Home,
        Page::MachineLearning,
        Page::Presentation,
        Page::Authors,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Energy Project",
            Page::MachineLearning => "Machine Learning",
            Page::Presentation => "Presentation",
            Page::Authors => "Authors",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::MachineLearning => "machine-learning",
            Page::Presentation => "presentation",
            Page::Authors => "authors",
        }
    }

    /// Accepts a title, a slug, or an unambiguous prefix of either.
    pub fn from_name(name: &str) -> Option<Page> {
        let slugs: Vec<&str> = Page::ALL.iter().map(|p| p.slug()).collect();
        let titles: Vec<&str> = Page::ALL.iter().map(|p| p.title()).collect();

        let matched = expand_key(name, &slugs).or_else(|_| expand_key(name, &titles)).ok()?;
        Page::ALL
            .into_iter()
            .find(|p| p.slug() == matched || p.title() == matched)
    }

    pub fn index(&self) -> usize {
        Page::ALL.iter().position(|p| p == self).unwrap_or(0)
    }
}

/// Which page the dashboard shows. Owned by the presentation layer; the
/// prediction table and navigator never read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageState {
    pub current: Page,
}

impl PageState {
    /// Pure transition: unknown names keep the current page.
    pub fn set_page(self, name: &str) -> PageState {
        match Page::from_name(name) {
            Some(page) => PageState { current: page },
            None => {
                debug!(name, "unknown page requested");
                self
            }
        }
    }

    pub fn next(self) -> PageState {
        let index = (self.current.index() + 1) % Page::ALL.len();
        PageState { current: Page::ALL[index] }
    }

    pub fn previous(self) -> PageState {
        let len = Page::ALL.len();
        let index = (self.current.index() + len - 1) % len;
        PageState { current: Page::ALL[index] }
    }
}
