//! # Quantity and Size Extractor
//!
//! Recognises item counts ("2 salmon fillets", "3 of those bags") and
//! unit-annotated size tokens ("500g", "8 oz") in item text.
//!
//! Stages run in a fixed order and each removes its match before the next:
//!
//! 1. skip the leading count when "N of " appears anywhere
//! 2. leading count (`^N `), unless the leading number is part of a size token
//! 3. first size token anywhere
//! 4. "N of " at the start of the size-stripped text
//! 5. an orphaned "of " prefix
//!
//! A number that starts a size token is never read as the count:
//! "2 lbs ground beef" gives quantity 1 and size "2 lbs", not quantity 2
//! and the name "Lbs Ground Beef".

use crate::extraction_types::QuantityExtraction;
use crate::item_patterns::{
    squash_whitespace, LEADING_OF_REGEX, LEADING_QUANTITY_OF_REGEX, LEADING_QUANTITY_REGEX,
    QUANTITY_OF_REGEX, SIZE_REGEX,
};
use regex::Regex;
use std::ops::Range;
use tracing::{debug, trace};

/// Parse a count, treating overflow and zero as a single item
fn parse_count(digits: &str) -> u32 {
    digits
        .parse::<u32>()
        .ok()
        .filter(|&n| n >= 1)
        .unwrap_or(1)
}

/// Remove a byte range from the text and tidy the whitespace
fn remove_range(text: &str, range: Range<usize>) -> String {
    squash_whitespace(&format!("{} {}", &text[..range.start], &text[range.end..]))
}

/// Strip an anchored `^(\d+)...` match, returning the parsed count
fn take_leading_count(regex: &Regex, text: &str) -> Option<(u32, String)> {
    let caps = regex.captures(text)?;
    let whole = caps.get(0)?;
    Some((parse_count(&caps[1]), remove_range(text, whole.range())))
}

/// Extract the item count and size token from the text
///
/// # Examples
///
/// ```rust
/// use frostie::quantity_extractor::extract_quantity_and_size;
///
/// let extracted = extract_quantity_and_size("2 8oz salmon fillets");
/// assert_eq!(extracted.quantity, 2);
/// assert_eq!(extracted.size, "8oz");
/// assert_eq!(extracted.remaining_text, "salmon fillets");
/// ```
pub fn extract_quantity_and_size(text: &str) -> QuantityExtraction {
    let mut working = squash_whitespace(text);
    let mut quantity = 1;

    let has_quantity_of = QUANTITY_OF_REGEX.is_match(&working);
    let leading_is_size = SIZE_REGEX
        .find(&working)
        .is_some_and(|m| m.start() == 0);

    if !has_quantity_of && !leading_is_size {
        if let Some((count, rest)) = take_leading_count(&LEADING_QUANTITY_REGEX, &working) {
            trace!(from = %working, to = %rest, "Stripped leading quantity");
            quantity = count;
            working = rest;
        }
    }

    let mut size = String::new();
    if let Some(m) = SIZE_REGEX.find(&working) {
        size = m.as_str().trim().to_string();
        let rest = remove_range(&working, m.range());
        trace!(from = %working, to = %rest, "Stripped size token");
        working = rest;
    }

    if let Some((count, rest)) = take_leading_count(&LEADING_QUANTITY_OF_REGEX, &working) {
        trace!(from = %working, to = %rest, "Stripped 'N of' phrase");
        quantity = count;
        working = rest;
    }

    if LEADING_OF_REGEX.is_match(&working) {
        working = squash_whitespace(&LEADING_OF_REGEX.replace(&working, ""));
    }

    debug!(quantity, size = %size, remaining = %working, "Extracted quantity and size");

    QuantityExtraction {
        quantity,
        size,
        remaining_text: working,
    }
}
