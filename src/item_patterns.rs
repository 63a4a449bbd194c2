//! # Item Patterns Module
//!
//! This module contains the regex patterns shared by the item-text extractors.

use lazy_static::lazy_static;
use regex::Regex;

/// Weight and volume units recognised in size tokens. Longer spellings come
/// first so alternation prefers "grams" over "g" and "fl oz" over "oz".
pub const SIZE_UNITS: &str =
    r"fl\.?\s?oz|kilograms?|kg|milliliters?|ml|grams?|g|pounds?|lbs?|ounces?|oz";

/// Spelled-out numbers accepted in relative expiration phrases
pub const NUMBER_WORDS: [(&str, u32); 10] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
];

const PERIOD_AMOUNT: &str = r"(\d+|one|two|three|four|five|six|seven|eight|nine|ten)";
const PERIOD_UNIT: &str = r"(day|week|month)s?";

fn relative_period(lead: &str) -> Regex {
    let pattern = format!(r"(?i)\b{lead}\s+{PERIOD_AMOUNT}\s+{PERIOD_UNIT}\b");
    Regex::new(&pattern).expect("Relative period pattern should be valid")
}

lazy_static! {
    /// Explicit `#tag` tokens
    pub static ref TAG_REGEX: Regex =
        Regex::new(r"#([A-Za-z0-9_]+)").expect("Tag pattern should be valid");

    /// "N of " anywhere in the text
    pub static ref QUANTITY_OF_REGEX: Regex =
        Regex::new(r"(?i)\d+\s+of\s+").expect("Quantity-of pattern should be valid");

    /// "N of " at the start of the text, capturing N
    pub static ref LEADING_QUANTITY_OF_REGEX: Regex =
        Regex::new(r"(?i)^(\d+)\s+of\s+").expect("Leading quantity-of pattern should be valid");

    /// Leading integer quantity followed by whitespace
    pub static ref LEADING_QUANTITY_REGEX: Regex =
        Regex::new(r"^(\d+)\s+").expect("Leading quantity pattern should be valid");

    /// Orphaned "of " prefix
    pub static ref LEADING_OF_REGEX: Regex =
        Regex::new(r"(?i)^of\s+").expect("Leading 'of' pattern should be valid");

    /// Unit-annotated size token, e.g. "500g", "8 oz", "1.5 lbs", "12 fl oz"
    pub static ref SIZE_REGEX: Regex =
        Regex::new(&format!(r"(?i)\b\d+(?:\.\d+)?\s*(?:{SIZE_UNITS})\b"))
            .expect("Size pattern should be valid");

    /// Absolute expiration date, capturing month, day and year
    pub static ref ABSOLUTE_DATE_REGEX: Regex = Regex::new(
        r"(?i)\b(?:expires?|exp\.?|best\s+by|use\s+by):?\s*(?:on\s+)?(\d{1,2})[-/](\d{1,2})[-/](\d{2,4})\b"
    )
    .expect("Absolute date pattern should be valid");

    /// Relative expiration periods, in the order they are tried
    pub static ref RELATIVE_PERIOD_REGEXES: [Regex; 4] = [
        relative_period(r"expires?\s+in"),
        relative_period(r"good\s+for"),
        relative_period("for"),
        relative_period("in"),
    ];

    /// Runs of whitespace
    pub static ref WHITESPACE_REGEX: Regex =
        Regex::new(r"\s+").expect("Whitespace pattern should be valid");
}

/// Collapse whitespace runs to single spaces and trim the ends
pub fn squash_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text, " ").trim().to_string()
}

/// Convert a period amount ("3", "three") to an integer
pub fn parse_period_amount(amount: &str) -> Option<u32> {
    let lower = amount.to_lowercase();
    NUMBER_WORDS
        .iter()
        .find(|(word, _)| *word == lower)
        .map(|&(_, value)| value)
        .or_else(|| lower.parse::<u32>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_regex_prefers_long_units() {
        let m = SIZE_REGEX.find("bag of 500 grams peas").unwrap();
        assert_eq!(m.as_str(), "500 grams");
        let m = SIZE_REGEX.find("12 fl oz juice").unwrap();
        assert_eq!(m.as_str(), "12 fl oz");
        let m = SIZE_REGEX.find("2 lbs ground beef").unwrap();
        assert_eq!(m.as_str(), "2 lbs");
    }

    #[test]
    fn test_size_regex_ignores_words_starting_with_units() {
        assert!(!SIZE_REGEX.is_match("2 grapes"));
        assert!(!SIZE_REGEX.is_match("3 green peppers"));
        assert!(!SIZE_REGEX.is_match("2 of those"));
    }

    #[test]
    fn test_relative_period_order() {
        let text = "beef good for 2 weeks";
        assert!(!RELATIVE_PERIOD_REGEXES[0].is_match(text));
        let m = RELATIVE_PERIOD_REGEXES[1].find(text).unwrap();
        assert_eq!(m.as_str(), "good for 2 weeks");
    }

    #[test]
    fn test_relative_period_requires_word_boundary() {
        // "within" must not be read as "in"
        assert!(!RELATIVE_PERIOD_REGEXES[3].is_match("eat within 3 days"));
        assert!(RELATIVE_PERIOD_REGEXES[3].is_match("eat in 3 days"));
    }

    #[test]
    fn test_parse_period_amount() {
        assert_eq!(parse_period_amount("3"), Some(3));
        assert_eq!(parse_period_amount("Three"), Some(3));
        assert_eq!(parse_period_amount("ten"), Some(10));
        assert_eq!(parse_period_amount("99999999999"), None);
    }

    #[test]
    fn test_squash_whitespace() {
        assert_eq!(squash_whitespace("  salmon   fillets \t"), "salmon fillets");
        assert_eq!(squash_whitespace(""), "");
    }
}
