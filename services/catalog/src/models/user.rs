//! User profile model
//!
//! Users are read-only from the catalog's perspective; the engine only ever
//! resolves the owner attributed on a listing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An owning or browsing principal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub is_owner: bool,
    pub avatar: Option<String>,
}
