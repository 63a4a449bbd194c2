//! # Freezer Item Data Model
//!
//! This module defines the structured record produced by parsing a free-text
//! freezer item description.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use frostie::category::Category;
//! use frostie::item_model::ParsedItemDetails;
//!
//! let expires = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
//! let item = ParsedItemDetails::new("Salmon Fillets", Category::Seafood, expires)
//!     .with_quantity(2)
//!     .with_size("8oz")
//!     .with_tags(vec!["dinner".to_string()]);
//!
//! assert_eq!(item.to_string(), "2 x Salmon Fillets (8oz), expires 2025-01-31");
//! ```

use crate::category::Category;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured details extracted from one item description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedItemDetails {
    /// Cleaned, capitalized, possibly pluralized item name
    pub name: String,

    /// Number of items, at least 1
    pub quantity: u32,

    /// Inventory category
    pub category: Category,

    /// Unit-annotated size token (e.g. "500g"), or empty
    pub size: String,

    /// Estimated or explicit expiration date
    pub expiration_date: NaiveDate,

    /// Explicit `#tags` (original case) or derived lowercase tags
    pub tags: Vec<String>,
}

impl ParsedItemDetails {
    /// Create a single-item record with no size and no tags
    pub fn new(name: &str, category: Category, expiration_date: NaiveDate) -> Self {
        Self {
            name: name.to_string(),
            quantity: 1,
            category,
            size: String::new(),
            expiration_date,
            tags: Vec::new(),
        }
    }

    /// Set the quantity, clamped to at least 1
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.max(1);
        self
    }

    /// Set the size token
    pub fn with_size(mut self, size: &str) -> Self {
        self.size = size.to_string();
        self
    }

    /// Set the tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Days from `today` until expiration; negative once expired
    pub fn days_until_expiration(&self, today: NaiveDate) -> i64 {
        (self.expiration_date - today).num_days()
    }

    /// Whether the item expires within `days` of `today` (expired items included)
    pub fn is_expiring_within(&self, today: NaiveDate, days: i64) -> bool {
        self.days_until_expiration(today) <= days
    }
}

impl fmt::Display for ParsedItemDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quantity > 1 {
            write!(f, "{} x ", self.quantity)?;
        }
        write!(f, "{}", self.name)?;

        if !self.size.is_empty() {
            write!(f, " ({})", self.size)?;
        }

        write!(f, ", expires {}", self.expiration_date)
    }
}
