//! Input validation utilities
//!
//! Drafts are checked before any store write is attempted, so an invalid
//! record is never partially persisted. Contact fields are only checked for
//! presence; the engine imposes no format rules on them.

use crate::models::NewListing;

/// Validate a required text field
pub fn validate_required_text(field: &'static str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} is required", field));
    }

    Ok(())
}

/// Validate a listing price
pub fn validate_price(price: i64) -> Result<(), String> {
    if price < 0 {
        return Err("Price must be a non-negative number".to_string());
    }

    Ok(())
}

/// Validate a new listing draft, collecting every failure
pub fn validate_new_listing(draft: &NewListing) -> Result<(), String> {
    let mut errors = Vec::new();

    for check in [
        validate_required_text("Title", &draft.title),
        validate_required_text("Description", &draft.description),
        validate_required_text("Location", &draft.location),
        validate_price(draft.price),
    ] {
        if let Err(message) = check {
            errors.push(message);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join("; "))
    }
}
