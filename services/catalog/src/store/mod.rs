//! Listing store gateway
//!
//! The store is the abstraction boundary to the persistent record store. The
//! catalog facade receives a store instance at construction, so the Postgres
//! implementation can be swapped for the in-memory one in tests.

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Category, Listing, NewListing, User};

mod memory;
mod postgres;

pub use memory::MemoryListingStore;
pub use postgres::PgListingStore;

/// Gateway to the persistent listing store.
///
/// Read operations absorb transient I/O failures and degrade to empty
/// results so the catalog stays renderable when storage is unreachable.
/// Only `create` surfaces storage errors, because the caller must learn
/// that the listing was not saved. Every read path returns active listings
/// only, ordered newest-first.
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// All active listings, newest first.
    async fn fetch_all(&self) -> Vec<Listing>;

    /// A single active listing; `None` when not found or not active.
    async fn fetch_by_id(&self, id: Uuid) -> Option<Listing>;

    /// Active listings in one category, newest first.
    async fn fetch_by_category(&self, category: Category) -> Vec<Listing>;

    /// Server-side case-insensitive substring match over title, description
    /// and location. Tags are not matched here; the client-side query
    /// pipeline matches them instead.
    async fn search(&self, text: &str) -> Vec<Listing>;

    /// Profile of an owning principal; `None` when unknown.
    async fn fetch_user(&self, id: Uuid) -> Option<User>;

    /// Persist a new listing attributed to `owner_id`, returning its id.
    async fn create(&self, draft: &NewListing, owner_id: Uuid) -> Result<Uuid>;
}
