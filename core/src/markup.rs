//! HTML serialization of a `Screen`.
//!
//! Templates live in `core/templates/`. All text taken from the remote API
//! passes through askama's HTML escaping.

use askama::Template;

use crate::screen::Screen;
use crate::view::{ItemsSlot, Root};

/// Form target for search submissions.
pub const SEARCH_PATH: &str = "/search";
/// Form target for the theme toggle.
pub const THEME_PATH: &str = "/theme";

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    root: &'a Root,
    search: &'a str,
    dark: bool,
    refresh: bool,
    search_path: &'a str,
    theme_path: &'a str,
}

#[derive(Template)]
#[template(path = "root.html")]
struct RootTemplate<'a> {
    root: &'a Root,
}

/// The whole page: theme toggle, search form and root region. Pages with a
/// lookup still outstanding ask the browser to refresh.
pub fn render_page(screen: &Screen) -> Result<String, askama::Error> {
    PageTemplate {
        root: screen.root(),
        search: screen.search(),
        dark: screen.theme().is_dark(),
        refresh: !screen.is_settled(),
        search_path: SEARCH_PATH,
        theme_path: THEME_PATH,
    }
    .render()
}

/// Just the root region's markup.
pub fn render_root(root: &Root) -> Result<String, askama::Error> {
    RootTemplate { root }.render()
}
