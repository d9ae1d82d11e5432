//! Catalog facade
//!
//! Orchestrates store calls per use case and applies the query pipeline to
//! the fetched snapshot. The store is injected at construction.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Category, Listing, NewListing, User};
use crate::query::ListingQuery;
use crate::store::ListingStore;
use crate::validation::validate_new_listing;

/// Per-category snapshots for the landing view
#[derive(Debug, Clone, Serialize)]
pub struct LandingPage {
    pub accommodation: Vec<Listing>,
    pub food: Vec<Listing>,
    pub laundry: Vec<Listing>,
    pub transport: Vec<Listing>,
}

impl LandingPage {
    pub fn category(&self, category: Category) -> &[Listing] {
        match category {
            Category::Accommodation => &self.accommodation,
            Category::Food => &self.food,
            Category::Laundry => &self.laundry,
            Category::Transport => &self.transport,
        }
    }
}

/// Catalog facade over an injected listing store
#[derive(Clone)]
pub struct Catalog {
    store: Arc<dyn ListingStore>,
}

impl Catalog {
    /// Create a new catalog over the given store
    pub fn new(store: Arc<dyn ListingStore>) -> Self {
        Self { store }
    }

    /// All active listings, refined by the query pipeline
    pub async fn browse_all(&self, query: &ListingQuery) -> Vec<Listing> {
        let snapshot = self.store.fetch_all().await;
        query.apply(&snapshot)
    }

    /// Category browsing. The category is pushed to the store; the pipeline
    /// applies only the local search/price/sort refinements.
    pub async fn browse_category(&self, category: Category, query: &ListingQuery) -> Vec<Listing> {
        let snapshot = self.store.fetch_by_category(category).await;
        query.apply(&snapshot)
    }

    /// Free-text search, delegated to the store's server-side matching.
    /// Blank text yields no results rather than everything.
    pub async fn search(&self, text: &str) -> Vec<Listing> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }
        self.store.search(text).await
    }

    /// Landing view: one snapshot per category, fetched concurrently
    pub async fn landing(&self) -> LandingPage {
        let (accommodation, food, laundry, transport) = tokio::join!(
            self.store.fetch_by_category(Category::Accommodation),
            self.store.fetch_by_category(Category::Food),
            self.store.fetch_by_category(Category::Laundry),
            self.store.fetch_by_category(Category::Transport),
        );

        LandingPage {
            accommodation,
            food,
            laundry,
            transport,
        }
    }

    /// A single active listing; absence is a valid outcome, not an error
    pub async fn listing_detail(&self, id: Uuid) -> Option<Listing> {
        self.store.fetch_by_id(id).await
    }

    /// Profile of a listing owner
    pub async fn owner_profile(&self, id: Uuid) -> Option<User> {
        self.store.fetch_user(id).await
    }

    /// Persist a new listing for the authenticated principal.
    ///
    /// Rejected with `AccessDenied` when no principal is supplied and with
    /// `Validation` when required fields are missing or malformed; in both
    /// cases the store is never written.
    pub async fn create_listing(
        &self,
        draft: NewListing,
        principal: Option<Uuid>,
    ) -> CatalogResult<Uuid> {
        let owner_id = principal.ok_or(CatalogError::AccessDenied)?;

        validate_new_listing(&draft).map_err(CatalogError::Validation)?;

        let id = self.store.create(&draft, owner_id).await?;
        info!("Created listing {} for owner {}", id, owner_id);

        Ok(id)
    }
}
