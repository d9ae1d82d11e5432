//! Listing model and related enumerations
//!
//! A listing is a single marketplace offering. The `category`, `status` and
//! `price_unit` enumerations are closed sets: unknown values coming off the
//! wire are rejected, never mapped to a fallback.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::UnknownVariant;

/// Placeholder image substituted when a listing is stored without images.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Marketplace category of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Accommodation,
    Food,
    Laundry,
    Transport,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::Accommodation,
        Category::Food,
        Category::Laundry,
        Category::Transport,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Accommodation => "accommodation",
            Category::Food => "food",
            Category::Laundry => "laundry",
            Category::Transport => "transport",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accommodation" => Ok(Category::Accommodation),
            "food" => Ok(Category::Food),
            "laundry" => Ok(Category::Laundry),
            "transport" => Ok(Category::Transport),
            other => Err(UnknownVariant {
                kind: "category",
                value: other.to_string(),
            }),
        }
    }
}

/// Billing period a listing's price refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceUnit {
    Hour,
    Day,
    Week,
    Month,
}

impl PriceUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceUnit::Hour => "hour",
            PriceUnit::Day => "day",
            PriceUnit::Week => "week",
            PriceUnit::Month => "month",
        }
    }
}

impl FromStr for PriceUnit {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hour" => Ok(PriceUnit::Hour),
            "day" => Ok(PriceUnit::Day),
            "week" => Ok(PriceUnit::Week),
            "month" => Ok(PriceUnit::Month),
            other => Err(UnknownVariant {
                kind: "price_unit",
                value: other.to_string(),
            }),
        }
    }
}

/// Lifecycle status of a listing. Only `Active` listings are visible through
/// any read path; there is no hard delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Active,
    Inactive,
    Rented,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Active => "active",
            ListingStatus::Inactive => "inactive",
            ListingStatus::Rented => "rented",
        }
    }
}

impl FromStr for ListingStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ListingStatus::Active),
            "inactive" => Ok(ListingStatus::Inactive),
            "rented" => Ok(ListingStatus::Rented),
            other => Err(UnknownVariant {
                kind: "status",
                value: other.to_string(),
            }),
        }
    }
}

/// Category-specific extension data, one variant per category that carries
/// any. Stored as JSONB, tagged by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ListingFeatures {
    Food {
        meals: Vec<String>,
        delivery_times: Vec<String>,
    },
    Laundry {
        pickup_days: Vec<String>,
        delivery_days: Vec<String>,
    },
    Transport {
        brand: String,
        condition: String,
        accessories: Vec<String>,
    },
}

impl ListingFeatures {
    /// Label/value pairs for rendering, lists joined with commas.
    pub fn display_entries(&self) -> Vec<(&'static str, String)> {
        match self {
            ListingFeatures::Food {
                meals,
                delivery_times,
            } => vec![
                ("Meals", meals.join(", ")),
                ("Delivery times", delivery_times.join(", ")),
            ],
            ListingFeatures::Laundry {
                pickup_days,
                delivery_days,
            } => vec![
                ("Pickup days", pickup_days.join(", ")),
                ("Delivery days", delivery_days.join(", ")),
            ],
            ListingFeatures::Transport {
                brand,
                condition,
                accessories,
            } => vec![
                ("Brand", brand.clone()),
                ("Condition", condition.clone()),
                ("Accessories", accessories.join(", ")),
            ],
        }
    }
}

/// A marketplace offering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub price_unit: PriceUnit,
    pub category: Category,
    pub location: String,
    pub images: Vec<String>,
    pub owner_id: Uuid,
    pub contact_phone: String,
    pub contact_email: String,
    pub created_at: DateTime<Utc>,
    pub available_from: Option<DateTime<Utc>>,
    pub available_to: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
    pub amenities: Vec<String>,
    pub features: Option<ListingFeatures>,
    pub status: ListingStatus,
}

/// Substitute the placeholder when a stored image set is empty. A listing is
/// tolerated with no images on read, but never exposed that way.
pub fn display_images(images: Vec<String>) -> Vec<String> {
    if images.is_empty() {
        vec![PLACEHOLDER_IMAGE.to_string()]
    } else {
        images
    }
}

/// Draft of a new listing. Id, owner, creation timestamp and status are
/// assigned by the store; a new listing always starts `active`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub price: i64,
    pub price_unit: PriceUnit,
    pub category: Category,
    pub location: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub contact_phone: String,
    pub contact_email: String,
    pub available_from: Option<DateTime<Utc>>,
    pub available_to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub features: Option<ListingFeatures>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = "parking".parse::<Category>().unwrap_err();
        assert_eq!(err.kind, "category");
        assert_eq!(err.value, "parking");
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("deleted".parse::<ListingStatus>().is_err());
    }

    #[test]
    fn price_unit_round_trips_through_str() {
        for unit in [
            PriceUnit::Hour,
            PriceUnit::Day,
            PriceUnit::Week,
            PriceUnit::Month,
        ] {
            assert_eq!(unit.as_str().parse::<PriceUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn empty_images_fall_back_to_placeholder() {
        assert_eq!(display_images(vec![]), vec![PLACEHOLDER_IMAGE.to_string()]);
    }

    #[test]
    fn non_empty_images_are_untouched() {
        let images = vec!["/a.jpg".to_string(), "/b.jpg".to_string()];
        assert_eq!(display_images(images.clone()), images);
    }

    #[test]
    fn features_serialize_with_category_tag() {
        let features = ListingFeatures::Transport {
            brand: "Trek".to_string(),
            condition: "Good".to_string(),
            accessories: vec!["Helmet".to_string(), "Lock".to_string()],
        };
        let json = serde_json::to_value(&features).unwrap();
        assert_eq!(json["category"], "transport");
        assert_eq!(json["brand"], "Trek");

        let back: ListingFeatures = serde_json::from_value(json).unwrap();
        assert_eq!(back, features);
    }

    #[test]
    fn food_features_display_entries() {
        let features = ListingFeatures::Food {
            meals: vec!["Breakfast".to_string(), "Dinner".to_string()],
            delivery_times: vec!["8:00 AM".to_string(), "7:00 PM".to_string()],
        };
        let entries = features.display_entries();
        assert_eq!(entries[0], ("Meals", "Breakfast, Dinner".to_string()));
        assert_eq!(
            entries[1],
            ("Delivery times", "8:00 AM, 7:00 PM".to_string())
        );
    }
}
