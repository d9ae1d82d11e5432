//! Browse session with last-parameters-wins result application
//!
//! When query parameters change in quick succession, several fetches may be
//! in flight at once and nothing guarantees they resolve in issue order. The
//! session hands out a monotonically increasing token per parameter change
//! and compares it again when results arrive: a result carrying a superseded
//! token is discarded instead of applied.

use crate::disclosure::DisclosureWindow;
use crate::models::Listing;
use crate::query::ListingQuery;

/// Token identifying the parameter snapshot that triggered a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryToken(u64);

/// Client-side state for one browse view: the current query parameters, the
/// last applied result snapshot and its disclosure window.
#[derive(Debug, Default)]
pub struct BrowseSession {
    query: ListingQuery,
    generation: u64,
    results: Vec<Listing>,
    window: DisclosureWindow,
}

impl BrowseSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a parameter change and obtain the token for the fetch it
    /// triggers. Every call supersedes all earlier tokens.
    pub fn begin(&mut self, query: ListingQuery) -> QueryToken {
        self.generation += 1;
        self.query = query;
        QueryToken(self.generation)
    }

    /// Parameters of the most recent `begin`
    pub fn query(&self) -> &ListingQuery {
        &self.query
    }

    /// Apply fetched results if their token is still current. Returns false
    /// and leaves the session untouched when the token was superseded. On a
    /// successful apply the disclosure window restarts over the new list.
    pub fn commit(&mut self, token: QueryToken, results: Vec<Listing>) -> bool {
        if token.0 != self.generation {
            return false;
        }

        self.window.reset(results.len());
        self.results = results;
        true
    }

    /// Full result snapshot currently applied
    pub fn results(&self) -> &[Listing] {
        &self.results
    }

    /// Currently disclosed prefix of the results
    pub fn visible(&self) -> &[Listing] {
        &self.results[..self.window.visible()]
    }

    /// Disclose one more window step
    pub fn reveal_more(&mut self) {
        self.window.reveal_more();
    }
}
