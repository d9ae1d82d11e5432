//! Application state shared across handlers

use crate::catalog::Catalog;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
}
