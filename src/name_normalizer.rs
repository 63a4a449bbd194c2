//! # Name Normalizer
//!
//! Title-cases a cleaned item name and pluralizes its last word when more
//! than one item is logged.

/// Uppercase the first character and lowercase the rest
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Simple English plural: "y" -> "ies", sibilant endings untouched, else "+s"
fn pluralize(word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.ends_with('s') {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix(['y', 'Y']) {
        return format!("{stem}ies");
    }
    if ["sh", "ch", "x", "z"].iter().any(|ending| lower.ends_with(ending)) {
        return word.to_string();
    }
    format!("{word}s")
}

/// Capitalize every word and pluralize the last one when `quantity > 1`
///
/// # Examples
///
/// ```rust
/// use frostie::name_normalizer::normalize_name;
///
/// assert_eq!(normalize_name("salmon fillet", 2), "Salmon Fillets");
/// assert_eq!(normalize_name("BLUEBERRY", 3), "Blueberries");
/// assert_eq!(normalize_name("ground beef", 1), "Ground Beef");
/// ```
pub fn normalize_name(name: &str, quantity: u32) -> String {
    let mut words: Vec<String> = name.split_whitespace().map(capitalize).collect();

    if quantity > 1 {
        if let Some(last) = words.last_mut() {
            *last = pluralize(last);
        }
    }

    words.join(" ")
}
