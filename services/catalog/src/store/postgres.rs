//! PostgreSQL listing store

use anyhow::Result;
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::warn;
use uuid::Uuid;

use crate::models::listing::display_images;
use crate::models::{Category, Listing, NewListing, User};

use super::ListingStore;

const LISTING_COLUMNS: &str = "id, title, description, price, price_unit, category, location, \
     images, owner_id, contact_phone, contact_email, created_at, \
     available_from, available_to, tags, amenities, features, status";

/// Listing store backed by PostgreSQL
#[derive(Clone)]
pub struct PgListingStore {
    pool: PgPool,
}

impl PgListingStore {
    /// Create a new Postgres listing store
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn try_fetch_all(&self) -> Result<Vec<Listing>> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {LISTING_COLUMNS}
            FROM listings
            WHERE status = 'active'
            ORDER BY created_at DESC
            "#,
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(listing_from_row).collect()
    }

    async fn try_fetch_by_id(&self, id: Uuid) -> Result<Option<Listing>> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {LISTING_COLUMNS}
            FROM listings
            WHERE id = $1 AND status = 'active'
            "#,
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(listing_from_row).transpose()
    }

    async fn try_fetch_by_category(&self, category: Category) -> Result<Vec<Listing>> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {LISTING_COLUMNS}
            FROM listings
            WHERE category = $1 AND status = 'active'
            ORDER BY created_at DESC
            "#,
        ))
        .bind(category.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(listing_from_row).collect()
    }

    async fn try_search(&self, text: &str) -> Result<Vec<Listing>> {
        let pattern = format!("%{}%", text);

        let rows = sqlx::query(&format!(
            r#"
            SELECT {LISTING_COLUMNS}
            FROM listings
            WHERE status = 'active'
              AND (title ILIKE $1 OR description ILIKE $1 OR location ILIKE $1)
            ORDER BY created_at DESC
            "#,
        ))
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(listing_from_row).collect()
    }

    async fn try_fetch_user(&self, id: Uuid) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, phone, is_owner, avatar
            FROM user_profiles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| User {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
            phone: row.get("phone"),
            is_owner: row.get("is_owner"),
            avatar: row.get("avatar"),
        }))
    }
}

fn listing_from_row(row: &PgRow) -> Result<Listing> {
    let category: String = row.get("category");
    let price_unit: String = row.get("price_unit");
    let status: String = row.get("status");
    let features: Option<serde_json::Value> = row.get("features");

    Ok(Listing {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        price: row.get("price"),
        price_unit: price_unit.parse()?,
        category: category.parse()?,
        location: row.get("location"),
        images: display_images(row.get("images")),
        owner_id: row.get("owner_id"),
        contact_phone: row.get("contact_phone"),
        contact_email: row.get("contact_email"),
        created_at: row.get("created_at"),
        available_from: row.get("available_from"),
        available_to: row.get("available_to"),
        tags: row.get("tags"),
        amenities: row.get("amenities"),
        features: features.map(serde_json::from_value).transpose()?,
        status: status.parse()?,
    })
}

#[async_trait]
impl ListingStore for PgListingStore {
    async fn fetch_all(&self) -> Vec<Listing> {
        match self.try_fetch_all().await {
            Ok(listings) => listings,
            Err(e) => {
                warn!("Failed to fetch listings: {}", e);
                Vec::new()
            }
        }
    }

    async fn fetch_by_id(&self, id: Uuid) -> Option<Listing> {
        match self.try_fetch_by_id(id).await {
            Ok(listing) => listing,
            Err(e) => {
                warn!("Failed to fetch listing {}: {}", id, e);
                None
            }
        }
    }

    async fn fetch_by_category(&self, category: Category) -> Vec<Listing> {
        match self.try_fetch_by_category(category).await {
            Ok(listings) => listings,
            Err(e) => {
                warn!("Failed to fetch {} listings: {}", category, e);
                Vec::new()
            }
        }
    }

    async fn search(&self, text: &str) -> Vec<Listing> {
        match self.try_search(text).await {
            Ok(listings) => listings,
            Err(e) => {
                warn!("Failed to search listings: {}", e);
                Vec::new()
            }
        }
    }

    async fn fetch_user(&self, id: Uuid) -> Option<User> {
        match self.try_fetch_user(id).await {
            Ok(user) => user,
            Err(e) => {
                warn!("Failed to fetch user {}: {}", id, e);
                None
            }
        }
    }

    async fn create(&self, draft: &NewListing, owner_id: Uuid) -> Result<Uuid> {
        let features = draft
            .features
            .as_ref()
            .map(serde_json::to_value)
            .transpose()?;

        let row = sqlx::query(
            r#"
            INSERT INTO listings (
                title, description, price, price_unit, category, location,
                images, owner_id, contact_phone, contact_email,
                available_from, available_to, tags, amenities, features, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, 'active')
            RETURNING id
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.price)
        .bind(draft.price_unit.as_str())
        .bind(draft.category.as_str())
        .bind(&draft.location)
        .bind(&draft.images)
        .bind(owner_id)
        .bind(&draft.contact_phone)
        .bind(&draft.contact_email)
        .bind(draft.available_from)
        .bind(draft.available_to)
        .bind(&draft.tags)
        .bind(&draft.amenities)
        .bind(features)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.get("id"))
    }
}
