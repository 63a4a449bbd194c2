//! # Extraction Types Module
//!
//! This module defines the per-stage results threaded through the item-text
//! pipeline. Each extractor returns what it found plus the text left over
//! once its matches were removed.

use chrono::NaiveDate;

/// Explicit `#tag` tokens pulled from the text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagExtraction {
    /// Tags without the leading `#`, original case, in order of appearance
    pub tags: Vec<String>,
    /// Text with every tag token removed
    pub remaining_text: String,
}

/// Quantity and size pulled from the text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityExtraction {
    /// Item count, at least 1
    pub quantity: u32,
    /// Unit-annotated size token (e.g. "500g"), or empty
    pub size: String,
    /// Text with quantity, size and "of" phrasing removed
    pub remaining_text: String,
}

/// Expiration phrase pulled from the text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpirationExtraction {
    /// Concrete date derived from the phrase, if an acceptable one was found
    pub date: Option<NaiveDate>,
    /// Whether `date` came from an explicit phrase in the text
    pub explicit: bool,
    /// Text with the matched phrase removed
    pub remaining_text: String,
}

impl ExpirationExtraction {
    pub(crate) fn none(remaining_text: String) -> Self {
        Self {
            date: None,
            explicit: false,
            remaining_text,
        }
    }
}
