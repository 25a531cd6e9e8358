//! Local host for the profile finder page.
//!
//! Serves the single page and feeds form posts into the controller. A search
//! post renders Loading and redirects straight back; the lookup finishes in a
//! spawned task while the page refreshes itself until the screen settles.

pub mod config;
pub mod transport;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use profile_core::markup::{self, SEARCH_PATH, THEME_PATH};
use profile_core::{Controller, Transport};
use serde::Deserialize;
use tracing::error;

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub username: String,
}

pub fn app<T: Transport + 'static>(controller: Controller<T>) -> Router {
    Router::new()
        .route("/", get(page::<T>))
        .route(SEARCH_PATH, post(search::<T>))
        .route(THEME_PATH, post(toggle_theme::<T>))
        .with_state(controller)
}

async fn page<T: Transport + 'static>(State(controller): State<Controller<T>>) -> Response {
    let screen = controller.display().snapshot();
    match markup::render_page(&screen) {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!(error = %err, "failed to render page");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn search<T: Transport + 'static>(
    State(controller): State<Controller<T>>,
    Form(form): Form<SearchForm>,
) -> Redirect {
    if let Some(submission) = controller.enter(form.username) {
        let controller = controller.clone();
        tokio::spawn(async move {
            controller.complete(submission).await;
        });
    }
    Redirect::to("/")
}

async fn toggle_theme<T: Transport + 'static>(
    State(controller): State<Controller<T>>,
) -> Redirect {
    controller.toggle_theme();
    Redirect::to("/")
}
