//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The manual page never changes after startup, so it is rendered once here
//! and every request hands out a reference-counted view of the same bytes.

use axum::body::Bytes;

use crate::chrome::Chrome;
use crate::page;

#[derive(Clone)]
pub struct AppState {
    /// Fully rendered manual page, chrome included.
    pub page: Bytes,
}

impl AppState {
    #[must_use]
    pub fn new(chrome: &Chrome) -> Self {
        Self { page: Bytes::from(page::render(chrome)) }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
