//! In-memory listing store
//!
//! Fixture implementation of [`ListingStore`] used by tests and local
//! development. It reproduces the visibility and ordering contract of the
//! Postgres store: active listings only, newest first, and search over
//! title/description/location without tags.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::listing::display_images;
use crate::models::{Category, Listing, ListingStatus, NewListing, User};

use super::ListingStore;

/// Listing store held entirely in memory
#[derive(Default)]
pub struct MemoryListingStore {
    listings: RwLock<Vec<Listing>>,
    users: RwLock<Vec<User>>,
    create_calls: AtomicUsize,
}

impl MemoryListingStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with listings
    pub fn with_listings(listings: Vec<Listing>) -> Self {
        Self {
            listings: RwLock::new(listings),
            ..Self::default()
        }
    }

    /// Seed a user profile
    pub async fn insert_user(&self, user: User) {
        self.users.write().await.push(user);
    }

    /// Number of times `create` reached the store. Lets tests assert that
    /// rejected drafts never produce a write.
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    fn newest_first(mut listings: Vec<Listing>) -> Vec<Listing> {
        listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        listings
    }
}

#[async_trait]
impl ListingStore for MemoryListingStore {
    async fn fetch_all(&self) -> Vec<Listing> {
        let listings = self.listings.read().await;
        Self::newest_first(
            listings
                .iter()
                .filter(|l| l.status == ListingStatus::Active)
                .cloned()
                .collect(),
        )
    }

    async fn fetch_by_id(&self, id: Uuid) -> Option<Listing> {
        let listings = self.listings.read().await;
        listings
            .iter()
            .find(|l| l.id == id && l.status == ListingStatus::Active)
            .cloned()
    }

    async fn fetch_by_category(&self, category: Category) -> Vec<Listing> {
        let listings = self.listings.read().await;
        Self::newest_first(
            listings
                .iter()
                .filter(|l| l.category == category && l.status == ListingStatus::Active)
                .cloned()
                .collect(),
        )
    }

    async fn search(&self, text: &str) -> Vec<Listing> {
        let needle = text.to_lowercase();
        let listings = self.listings.read().await;
        Self::newest_first(
            listings
                .iter()
                .filter(|l| l.status == ListingStatus::Active)
                .filter(|l| {
                    l.title.to_lowercase().contains(&needle)
                        || l.description.to_lowercase().contains(&needle)
                        || l.location.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect(),
        )
    }

    async fn fetch_user(&self, id: Uuid) -> Option<User> {
        let users = self.users.read().await;
        users.iter().find(|u| u.id == id).cloned()
    }

    async fn create(&self, draft: &NewListing, owner_id: Uuid) -> Result<Uuid> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);

        let listing = Listing {
            id: Uuid::new_v4(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            price: draft.price,
            price_unit: draft.price_unit,
            category: draft.category,
            location: draft.location.clone(),
            images: display_images(draft.images.clone()),
            owner_id,
            contact_phone: draft.contact_phone.clone(),
            contact_email: draft.contact_email.clone(),
            created_at: Utc::now(),
            available_from: draft.available_from,
            available_to: draft.available_to,
            tags: draft.tags.clone(),
            amenities: draft.amenities.clone(),
            features: draft.features.clone(),
            status: ListingStatus::Active,
        };

        let id = listing.id;
        self.listings.write().await.push(listing);
        Ok(id)
    }
}
