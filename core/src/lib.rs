//! Front-end core for looking up a public profile and its recent repositories.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern); a host-supplied `Transport`
//! performs the round-trips. On top of that sit a render layer producing a
//! structured view model, HTML serialization of that model, and a controller
//! that drives search submissions and the theme toggle.
//!
//! # Design
//! - `LookupClient` is stateless: it holds only the API base and headers.
//! - `LookupService` runs the two sequential calls and normalizes failures
//!   into `LookupError`.
//! - Render functions take an explicit `&mut Screen`; the controller owns the
//!   `DisplayHandle` that guards it.
//! - Each submission carries a generation tag so stale results never render.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod markup;
pub mod render;
pub mod screen;
pub mod service;
pub mod types;
pub mod view;

pub use client::LookupClient;
pub use controller::{Completion, Controller, Submission};
pub use error::{ClientError, LookupError, TransportError};
pub use http::{HttpRequest, HttpResponse, Transport};
pub use screen::{DisplayHandle, Screen, Theme, UiState};
pub use service::LookupService;
pub use types::{AssociatedItem, Entity, Identifier};
pub use view::{ItemLink, ItemsSlot, ProfileCard, Root};
