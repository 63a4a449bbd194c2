//! # Tag Extractor
//!
//! Pulls explicit `#tag` tokens out of item text and, when the user typed
//! none, derives a few suggested tags from the category and name keywords.

use crate::category::Category;
use crate::extraction_types::TagExtraction;
use crate::item_patterns::{squash_whitespace, TAG_REGEX};
use tracing::debug;

/// Most tags ever suggested for one item
pub const MAX_SUGGESTED_TAGS: usize = 3;

/// Keyword rules for suggested tags, evaluated in order
const TAG_RULES: &[(&str, &[&str])] = &[
    (
        "protein",
        &[
            "chicken", "beef", "pork", "turkey", "lamb", "steak", "salmon", "tuna", "fish",
            "shrimp", "tofu",
        ],
    ),
    (
        "breakfast",
        &["waffle", "pancake", "bacon", "sausage", "bagel", "muffin", "egg"],
    ),
    (
        "dinner",
        &["lasagna", "casserole", "soup", "stew", "chili", "curry", "meal"],
    ),
    (
        "dessert",
        &["ice cream", "cake", "pie", "cookie", "popsicle", "sorbet"],
    ),
    (
        "healthy",
        &["broccoli", "spinach", "kale", "berr", "vegetable", "veggie"],
    ),
    (
        "quick",
        &["pizza", "nugget", "burrito", "fries", "leftover", "fish stick"],
    ),
];

/// Remove every `#tag` token from the text and collect the tags
///
/// # Examples
///
/// ```rust
/// use frostie::tag_extractor::extract_explicit_tags;
///
/// let extracted = extract_explicit_tags("Salmon #dinner #Fish");
/// assert_eq!(extracted.tags, vec!["dinner", "Fish"]);
/// assert_eq!(extracted.remaining_text, "Salmon");
/// ```
pub fn extract_explicit_tags(text: &str) -> TagExtraction {
    let tags: Vec<String> = TAG_REGEX
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect();

    let remaining_text = squash_whitespace(&TAG_REGEX.replace_all(text, " "));

    if !tags.is_empty() {
        debug!(tags = ?tags, "Extracted explicit tags");
    }

    TagExtraction {
        tags,
        remaining_text,
    }
}

/// Lowercase the category label and keep only its alphanumeric characters
fn category_tag(category: Category) -> String {
    category
        .label()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Suggest up to three tags from the category and the item name
pub fn suggest_basic_tags(name: &str, category: Category) -> Vec<String> {
    let lower = name.to_lowercase();
    let mut tags: Vec<String> = Vec::new();

    if category != Category::Other {
        tags.push(category_tag(category));
    }

    for &(tag, keywords) in TAG_RULES {
        if tags.len() >= MAX_SUGGESTED_TAGS {
            break;
        }
        if keywords.iter().any(|keyword| lower.contains(keyword)) && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }

    debug!(name = %name, tags = ?tags, "Suggested tags");
    tags
}
