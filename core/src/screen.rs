//! The display handle and the state it guards.
//!
//! A `Screen` is everything the page shows: the root region, the theme, and
//! the search input. `DisplayHandle` shares one screen between the controller
//! and the host; render functions receive `&mut Screen` from it and never
//! reach for ambient state.

use std::sync::{Arc, Mutex, PoisonError};

use crate::view::{ItemsSlot, Root};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// The controller's display mode, derived from the root region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Loading,
    EntityDisplayed,
    Error,
}

#[derive(Debug, Clone, Default)]
pub struct Screen {
    root: Root,
    theme: Theme,
    search: String,
    generation: u64,
}

impl Screen {
    pub fn root(&self) -> &Root {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut Root {
        &mut self.root
    }

    pub(crate) fn set_root(&mut self, root: Root) {
        self.root = root;
    }

    pub fn state(&self) -> UiState {
        match self.root {
            Root::Idle => UiState::Idle,
            Root::Loading => UiState::Loading,
            Root::Card(_) => UiState::EntityDisplayed,
            Root::Error(_) => UiState::Error,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme. The root region is untouched.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub(crate) fn clear_search(&mut self) {
        self.search.clear();
    }

    /// Tag of the most recent accepted submission.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// False while a lookup still has something left to render.
    pub fn is_settled(&self) -> bool {
        match &self.root {
            Root::Loading => false,
            Root::Card(card) => card.items != ItemsSlot::Pending,
            Root::Idle | Root::Error(_) => true,
        }
    }
}

/// Shared handle to the one `Screen`.
#[derive(Debug, Clone, Default)]
pub struct DisplayHandle(Arc<Mutex<Screen>>);

impl DisplayHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with exclusive access to the screen. Never hold this across
    /// an await point.
    pub fn with<R>(&self, f: impl FnOnce(&mut Screen) -> R) -> R {
        let mut screen = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut screen)
    }

    pub fn snapshot(&self) -> Screen {
        self.with(|screen| screen.clone())
    }
}
