//! Query pipeline
//!
//! Pure filter + sort transformation applied to a snapshot of listings that
//! has already been fetched. Unlike the store's server-side search, the text
//! filter here also matches tags; both behaviors are intentional.

use serde::{Deserialize, Serialize};

use crate::models::Listing;

/// Total order applied to a result set. All four sorts are stable: ties keep
/// their prior relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    PriceLow,
    PriceHigh,
}

/// User-supplied refinement parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListingQuery {
    pub search: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    #[serde(default)]
    pub sort: SortOrder,
}

impl ListingQuery {
    /// Filter and sort a snapshot. The input is never mutated; a new ordered
    /// sequence is returned.
    pub fn apply(&self, listings: &[Listing]) -> Vec<Listing> {
        let mut filtered: Vec<Listing> = listings
            .iter()
            .filter(|l| self.matches_search(l) && self.matches_price(l))
            .cloned()
            .collect();

        match self.sort {
            SortOrder::Newest => filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::Oldest => filtered.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortOrder::PriceLow => filtered.sort_by(|a, b| a.price.cmp(&b.price)),
            SortOrder::PriceHigh => filtered.sort_by(|a, b| b.price.cmp(&a.price)),
        }

        filtered
    }

    fn matches_search(&self, listing: &Listing) -> bool {
        let Some(search) = self.search.as_deref() else {
            return true;
        };
        if search.is_empty() {
            return true;
        }

        let needle = search.to_lowercase();
        listing.title.to_lowercase().contains(&needle)
            || listing.description.to_lowercase().contains(&needle)
            || listing.location.to_lowercase().contains(&needle)
            || listing
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }

    fn matches_price(&self, listing: &Listing) -> bool {
        // Bounds are inclusive; an absent bound is unbounded on that side.
        self.min_price.map_or(true, |min| listing.price >= min)
            && self.max_price.map_or(true, |max| listing.price <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ListingStatus, PriceUnit};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn listing(title: &str, price: i64, day: u32, tags: &[&str]) -> Listing {
        Listing {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: format!("{} description", title),
            price,
            price_unit: PriceUnit::Month,
            category: Category::Accommodation,
            location: "Gandhi Nagar, Delhi".to_string(),
            images: vec!["/placeholder.svg".to_string()],
            owner_id: Uuid::new_v4(),
            contact_phone: "9876543210".to_string(),
            contact_email: "owner@example.com".to_string(),
            created_at: Utc.with_ymd_and_hms(2023, 4, day, 0, 0, 0).unwrap(),
            available_from: None,
            available_to: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            amenities: vec![],
            features: None,
            status: ListingStatus::Active,
        }
    }

    #[test]
    fn empty_query_returns_newest_order_with_content_unchanged() {
        let input = vec![
            listing("Old", 100, 1, &[]),
            listing("New", 200, 20, &[]),
            listing("Middle", 300, 10, &[]),
        ];

        let result = ListingQuery::default().apply(&input);

        assert_eq!(result.len(), 3);
        let titles: Vec<&str> = result.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["New", "Middle", "Old"]);
        // Input untouched.
        assert_eq!(input[0].title, "Old");
    }

    #[test]
    fn text_filter_matches_title_description_location_and_tags() {
        let input = vec![
            listing("Cozy Single Room", 5000, 1, &[]),
            listing("Apartment", 8000, 2, &["wifi", "near university"]),
            listing("Scooter", 2000, 3, &[]),
        ];

        let query = ListingQuery {
            search: Some("ROOM".to_string()),
            ..Default::default()
        };
        let result = query.apply(&input);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Cozy Single Room");

        let query = ListingQuery {
            search: Some("university".to_string()),
            ..Default::default()
        };
        let result = query.apply(&input);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Apartment");
    }

    #[test]
    fn empty_search_text_keeps_everything() {
        let input = vec![listing("A", 100, 1, &[]), listing("B", 200, 2, &[])];
        let query = ListingQuery {
            search: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(query.apply(&input).len(), 2);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let input = vec![listing("A", 5000, 1, &[]), listing("B", 8000, 2, &[])];

        let query = ListingQuery {
            min_price: Some(5000),
            max_price: Some(9000),
            ..Default::default()
        };
        assert_eq!(query.apply(&input).len(), 2);

        let outside = vec![listing("C", 4000, 1, &[]), listing("D", 10000, 2, &[])];
        assert_eq!(query.apply(&outside).len(), 0);
    }

    #[test]
    fn absent_price_bounds_are_a_no_op() {
        let input = vec![listing("A", 0, 1, &[]), listing("B", 1_000_000, 2, &[])];
        let query = ListingQuery::default();
        assert_eq!(query.apply(&input).len(), 2);
    }

    #[test]
    fn price_sorts_reverse_each_other_for_distinct_prices() {
        let input = vec![
            listing("A", 300, 1, &[]),
            listing("B", 100, 2, &[]),
            listing("C", 200, 3, &[]),
        ];

        let low = ListingQuery {
            sort: SortOrder::PriceLow,
            ..Default::default()
        }
        .apply(&input);
        let high = ListingQuery {
            sort: SortOrder::PriceHigh,
            ..Default::default()
        }
        .apply(&input);

        let low_titles: Vec<&str> = low.iter().map(|l| l.title.as_str()).collect();
        let mut high_titles: Vec<&str> = high.iter().map(|l| l.title.as_str()).collect();
        high_titles.reverse();
        assert_eq!(low_titles, vec!["B", "C", "A"]);
        assert_eq!(low_titles, high_titles);
    }

    #[test]
    fn equal_price_sort_is_stable() {
        let input = vec![
            listing("First", 500, 1, &[]),
            listing("Second", 500, 2, &[]),
            listing("Third", 500, 3, &[]),
        ];

        let result = ListingQuery {
            sort: SortOrder::PriceLow,
            ..Default::default()
        }
        .apply(&input);

        let titles: Vec<&str> = result.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn oldest_sort_ascends_by_creation_time() {
        let input = vec![listing("New", 1, 20, &[]), listing("Old", 2, 1, &[])];
        let result = ListingQuery {
            sort: SortOrder::Oldest,
            ..Default::default()
        }
        .apply(&input);
        assert_eq!(result[0].title, "Old");
    }

    #[test]
    fn sort_order_deserializes_from_wire_names() {
        for (name, expected) in [
            ("newest", SortOrder::Newest),
            ("oldest", SortOrder::Oldest),
            ("price_low", SortOrder::PriceLow),
            ("price_high", SortOrder::PriceHigh),
        ] {
            let parsed: SortOrder = serde_json::from_str(&format!("\"{}\"", name)).unwrap();
            assert_eq!(parsed, expected);
        }
    }
}
