//! Interaction controller: search submissions and the theme toggle.
//!
//! # Design
//! A submission is split in two. `begin` runs synchronously: it reads the
//! search input, clears it, renders Loading and tags the submission with a
//! fresh generation number. `complete` performs the two sequential fetches
//! and, after each one resumes, applies its render only if the submission's
//! generation is still the screen's latest. The compare and the render happen
//! under one lock, so a superseded lookup can never overwrite a newer one.
//! In-flight requests are not cancelled; their results are simply dropped.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::LookupError;
use crate::http::Transport;
use crate::render;
use crate::screen::{DisplayHandle, Screen, Theme, UiState};
use crate::service::LookupService;
use crate::types::Identifier;

pub const NOT_FOUND_MESSAGE: &str = "No profile with this username";
pub const TRANSIENT_MESSAGE: &str = "Something went wrong. Please try again later";
pub const ITEMS_UNAVAILABLE_MESSAGE: &str = "Problem fetching repos";

/// An accepted search, tagged with the generation it rendered Loading under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    generation: u64,
    identifier: Identifier,
}

impl Submission {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }
}

/// How a `complete` call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Every render of this submission reached the screen.
    Applied,
    /// A newer submission took over and the rest of this one was dropped.
    Superseded,
}

pub struct Controller<T> {
    service: Arc<LookupService<T>>,
    display: DisplayHandle,
}

impl<T> Clone for Controller<T> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            display: self.display.clone(),
        }
    }
}

impl<T: Transport> Controller<T> {
    pub fn new(service: LookupService<T>, display: DisplayHandle) -> Self {
        Self {
            service: Arc::new(service),
            display,
        }
    }

    pub fn display(&self) -> &DisplayHandle {
        &self.display
    }

    pub fn state(&self) -> UiState {
        self.display.with(|screen| screen.state())
    }

    /// Replace the search input's text.
    pub fn set_search(&self, text: impl Into<String>) {
        let text = text.into();
        self.display.with(|screen| screen.set_search(text));
    }

    /// Flip the theme. Never touches the rendered card.
    pub fn toggle_theme(&self) -> Theme {
        let theme = self.display.with(Screen::toggle_theme);
        debug!(?theme, "theme toggled");
        theme
    }

    /// Accept the current search input.
    ///
    /// Returns `None`, with nothing changed, when the input is empty.
    /// Otherwise clears the input, renders Loading and returns the tagged
    /// submission to pass to `complete`.
    pub fn begin(&self) -> Option<Submission> {
        self.display.with(begin_on)
    }

    /// Type `text` into the search input and submit it, under one lock.
    pub fn enter(&self, text: impl Into<String>) -> Option<Submission> {
        let text = text.into();
        self.display.with(|screen| {
            screen.set_search(text);
            begin_on(screen)
        })
    }

    /// Run both fetches for `submission` and render their outcomes.
    pub async fn complete(&self, submission: Submission) -> Completion {
        let Submission {
            generation,
            identifier,
        } = submission;

        let entity = match self.service.fetch_entity(&identifier).await {
            Ok(entity) => entity,
            Err(err) => {
                warn!(%identifier, error = %err, "profile lookup failed");
                let message = match err {
                    LookupError::NotFound => NOT_FOUND_MESSAGE,
                    _ => TRANSIENT_MESSAGE,
                };
                return self.apply(generation, |screen| render::render_error(screen, message));
            }
        };

        let card = self.apply(generation, |screen| {
            render::render_entity_card(screen, &entity)
        });
        if card == Completion::Superseded {
            return card;
        }

        match self.service.fetch_associated_items(&identifier).await {
            Ok(items) => {
                debug!(%identifier, count = items.len(), "associated items fetched");
                self.apply(generation, |screen| {
                    render::append_associated_items(screen, &items);
                })
            }
            Err(err) => {
                warn!(%identifier, error = %err, "associated items lookup failed");
                self.apply(generation, |screen| {
                    render::render_items_error(screen, ITEMS_UNAVAILABLE_MESSAGE);
                })
            }
        }
    }

    /// `begin` then `complete`, for callers that can wait in place.
    pub async fn submit(&self) -> Option<Completion> {
        let submission = self.begin()?;
        Some(self.complete(submission).await)
    }

    fn apply(&self, generation: u64, render: impl FnOnce(&mut Screen)) -> Completion {
        self.display.with(|screen| {
            if screen.generation() == generation {
                render(screen);
                Completion::Applied
            } else {
                debug!(
                    generation,
                    latest = screen.generation(),
                    "dropping render from superseded lookup"
                );
                Completion::Superseded
            }
        })
    }
}

fn begin_on(screen: &mut Screen) -> Option<Submission> {
    let identifier = Identifier::parse(screen.search())?;
    screen.clear_search();
    let generation = screen.next_generation();
    render::render_loading(screen);
    info!(%identifier, generation, "lookup started");
    Some(Submission {
        generation,
        identifier,
    })
}
