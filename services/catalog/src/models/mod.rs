//! Data models for the catalog service

pub mod listing;
pub mod user;

pub use listing::{
    Category, Listing, ListingFeatures, ListingStatus, NewListing, PriceUnit, PLACEHOLDER_IMAGE,
};
pub use user::User;

use thiserror::Error;

/// Parse failure for one of the closed enumerations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}
