//! Application state shared across handlers
//!
//! A small composition root: the repository and mapper are constructed once
//! at startup and handed to the HTTP layer here. Handlers depend only on the
//! trait objects, so tests swap in doubles.

use std::sync::Arc;

use crate::mapper::Mapper;
use crate::repository::Repository;

/// Per-process collaborators, cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    /// Storage operations over the Person collection
    pub repository: Arc<dyn Repository>,
    /// Wire/storage mapping
    pub mapper: Arc<dyn Mapper>,
}

impl AppState {
    /// Wire up the application state from its collaborators.
    pub fn new(repository: Arc<dyn Repository>, mapper: Arc<dyn Mapper>) -> Self {
        Self { repository, mapper }
    }
}
