//! # Item Parser
//!
//! This module turns a free-text freezer item description into a structured
//! [`ParsedItemDetails`] record.
//!
//! ## Pipeline
//!
//! The deterministic parser threads a working copy of the text through each
//! extractor in a fixed order, every stage removing what it matched:
//!
//! 1. explicit `#tags`
//! 2. expiration phrase (absolute date or relative period)
//! 3. quantity, size and "N of" phrasing
//! 4. category from the cleaned name
//! 5. expiration date: explicit phrase, else FoodKeeper, else the default horizon
//! 6. name normalization using the final quantity
//! 7. suggested tags when none were explicit
//!
//! An AI-backed parser can be tried first; any failure drops through to the
//! deterministic pipeline, so parsing always yields a record.
//!
//! ## Usage
//!
//! ```rust
//! use frostie::item_parser::regex_parse_item_text;
//!
//! let item = regex_parse_item_text("2 8oz salmon fillets #dinner", 30);
//! assert_eq!(item.name, "Salmon Fillets");
//! assert_eq!(item.quantity, 2);
//! assert_eq!(item.size, "8oz");
//! assert_eq!(item.tags, vec!["dinner"]);
//! ```

use crate::ai_parser::RemoteItemParser;
use crate::category::guess_category;
use crate::expiration_phrase::extract_expiration_phrase;
use crate::foodkeeper::calculate_expiration_date_on;
use crate::item_model::ParsedItemDetails;
use crate::name_normalizer::normalize_name;
use crate::parse_errors::ParseError;
use crate::parser_config::ParserConfig;
use crate::quantity_extractor::extract_quantity_and_size;
use crate::tag_extractor::{extract_explicit_tags, suggest_basic_tags};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

/// Name used when nothing is left of the text after extraction
pub const FALLBACK_ITEM_NAME: &str = "Unnamed Item";

/// Parser built from the process environment, shared by [`parse_item_text`]
static DEFAULT_PARSER: LazyLock<ItemTextParser> =
    LazyLock::new(|| ItemTextParser::from_config(&ParserConfig::from_env()));

/// Parse item text deterministically, counting dates from `today`
pub fn regex_parse_item_text_on(
    input: &str,
    default_expiration_days: u32,
    today: NaiveDate,
) -> ParsedItemDetails {
    let tagged = extract_explicit_tags(input);
    let expiration = extract_expiration_phrase(&tagged.remaining_text, today);
    let measured = extract_quantity_and_size(&expiration.remaining_text);

    let cleaned = if measured.remaining_text.is_empty() {
        FALLBACK_ITEM_NAME
    } else {
        measured.remaining_text.as_str()
    };

    let category = guess_category(cleaned);

    let expiration_date = match expiration.date {
        Some(date) if expiration.explicit => date,
        _ => calculate_expiration_date_on(cleaned, Some(category), default_expiration_days, today),
    };

    let name = normalize_name(cleaned, measured.quantity);

    let tags = if tagged.tags.is_empty() {
        suggest_basic_tags(&name, category)
    } else {
        tagged.tags
    };

    debug!(
        input = %input,
        name = %name,
        quantity = measured.quantity,
        category = %category,
        %expiration_date,
        explicit_date = expiration.explicit,
        "Parsed item text"
    );

    ParsedItemDetails {
        name,
        quantity: measured.quantity,
        category,
        size: measured.size,
        expiration_date,
        tags,
    }
}

/// Parse item text deterministically, counting dates from local midnight today
pub fn regex_parse_item_text(input: &str, default_expiration_days: u32) -> ParsedItemDetails {
    regex_parse_item_text_on(input, default_expiration_days, crate::today())
}

/// Parse every non-blank line of a multi-item description
pub fn regex_parse_item_list_on(
    text: &str,
    default_expiration_days: u32,
    today: NaiveDate,
) -> Vec<ParsedItemDetails> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| regex_parse_item_text_on(line, default_expiration_days, today))
        .collect()
}

/// Parse every non-blank line, counting dates from local midnight today
pub fn regex_parse_item_list(text: &str, default_expiration_days: u32) -> Vec<ParsedItemDetails> {
    regex_parse_item_list_on(text, default_expiration_days, crate::today())
}

/// Something that can turn item text into a structured record
#[async_trait]
pub trait TextParser: Send + Sync {
    /// Parse one item description
    async fn parse(
        &self,
        text: &str,
        default_expiration_days: u32,
    ) -> Result<ParsedItemDetails, ParseError>;

    /// Short label used in logs
    fn name(&self) -> &'static str;
}

/// The deterministic regex pipeline as a [`TextParser`]; never fails
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexItemParser;

#[async_trait]
impl TextParser for RegexItemParser {
    async fn parse(
        &self,
        text: &str,
        default_expiration_days: u32,
    ) -> Result<ParsedItemDetails, ParseError> {
        Ok(regex_parse_item_text(text, default_expiration_days))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

/// Try `primary`, and on any error use `fallback`
#[derive(Debug)]
pub struct FallbackParser<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackParser<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl<P: TextParser, F: TextParser> TextParser for FallbackParser<P, F> {
    async fn parse(
        &self,
        text: &str,
        default_expiration_days: u32,
    ) -> Result<ParsedItemDetails, ParseError> {
        match self.primary.parse(text, default_expiration_days).await {
            Ok(details) => {
                debug!(parser = self.primary.name(), "Primary parser succeeded");
                Ok(details)
            }
            Err(e) => {
                warn!(
                    parser = self.primary.name(),
                    fallback = self.fallback.name(),
                    error = %e,
                    "Primary parser failed, falling back"
                );
                self.fallback.parse(text, default_expiration_days).await
            }
        }
    }

    fn name(&self) -> &'static str {
        self.primary.name()
    }
}

/// Entry point for item-creation flows
///
/// Wraps whichever [`TextParser`] the configuration calls for and guarantees
/// a record for every input.
pub struct ItemTextParser {
    parser: Box<dyn TextParser>,
}

impl ItemTextParser {
    /// Wrap an arbitrary parser
    pub fn new(parser: Box<dyn TextParser>) -> Self {
        Self { parser }
    }

    /// Deterministic parsing only
    pub fn deterministic() -> Self {
        Self::new(Box::new(RegexItemParser))
    }

    /// AI parsing with deterministic fallback when a service is configured,
    /// deterministic parsing otherwise
    pub fn from_config(config: &ParserConfig) -> Self {
        let Some(ai) = &config.ai else {
            info!("No AI parsing service configured, using deterministic parser");
            return Self::deterministic();
        };

        match RemoteItemParser::new(ai.clone(), config.recovery.clone()) {
            Ok(remote) => {
                info!(endpoint = %ai.endpoint, "Using AI parsing service with deterministic fallback");
                Self::new(Box::new(FallbackParser::new(remote, RegexItemParser)))
            }
            Err(e) => {
                warn!(error = %e, "Could not set up AI parsing service, using deterministic parser");
                Self::deterministic()
            }
        }
    }

    /// Parse one item description; never fails
    pub async fn parse_item_text(&self, text: &str, default_expiration_days: u32) -> ParsedItemDetails {
        match self.parser.parse(text, default_expiration_days).await {
            Ok(details) => details,
            Err(e) => {
                warn!(parser = self.parser.name(), error = %e, "Item parsing failed, using deterministic parser");
                regex_parse_item_text(text, default_expiration_days)
            }
        }
    }
}

/// Parse one item description with the environment-configured parser
pub async fn parse_item_text(text: &str, default_expiration_days: u32) -> ParsedItemDetails {
    DEFAULT_PARSER.parse_item_text(text, default_expiration_days).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use chrono::Duration;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    struct FailingParser;

    #[async_trait]
    impl TextParser for FailingParser {
        async fn parse(&self, _: &str, _: u32) -> Result<ParsedItemDetails, ParseError> {
            Err(ParseError::Unavailable("offline".to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    struct FixedParser(ParsedItemDetails);

    #[async_trait]
    impl TextParser for FixedParser {
        async fn parse(&self, _: &str, _: u32) -> Result<ParsedItemDetails, ParseError> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    #[test]
    fn test_full_pipeline() {
        let today = day(2024, 5, 1);
        let item = regex_parse_item_text_on("2 8oz salmon fillets good for 3 weeks #dinner", 30, today);
        assert_eq!(item.name, "Salmon Fillets");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.size, "8oz");
        assert_eq!(item.category, Category::Seafood);
        assert_eq!(item.expiration_date, day(2024, 5, 22));
        assert_eq!(item.tags, vec!["dinner"]);
    }

    #[test]
    fn test_knowledge_base_then_default() {
        let today = day(2024, 5, 1);
        let item = regex_parse_item_text_on("salmon", 30, today);
        assert_eq!(item.expiration_date, today + Duration::days(76));

        let item = regex_parse_item_text_on("xyzzycustomitem", 30, today);
        assert_eq!(item.expiration_date, today + Duration::days(30));
        assert_eq!(item.category, Category::Other);
        assert!(item.tags.is_empty());
    }

    #[test]
    fn test_empty_input_still_yields_a_record() {
        let today = day(2024, 5, 1);
        for input in ["", "   ", "#dinner", "2 lbs"] {
            let item = regex_parse_item_text_on(input, 30, today);
            assert_eq!(item.name, FALLBACK_ITEM_NAME, "input: {input:?}");
            assert!(item.quantity >= 1);
            assert!(item.expiration_date > today);
        }
    }

    #[test]
    fn test_item_list() {
        let today = day(2024, 5, 1);
        let items = regex_parse_item_list_on("2 bagels\n\n  1 lb ground beef  \nice cream #treat", 30, today);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].name, "Bagels");
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[1].name, "Ground Beef");
        assert_eq!(items[1].size, "1 lb");
        assert_eq!(items[2].tags, vec!["treat"]);
    }

    #[tokio::test]
    async fn test_fallback_parser_uses_fallback_on_error() {
        let parser = FallbackParser::new(FailingParser, RegexItemParser);
        let item = parser.parse("3 waffles", 30).await.unwrap();
        assert_eq!(item.name, "Waffles");
        assert_eq!(item.quantity, 3);
    }

    #[tokio::test]
    async fn test_fallback_parser_prefers_primary() {
        let fixed = ParsedItemDetails::new("Fixed", Category::Other, day(2099, 1, 1));
        let parser = FallbackParser::new(FixedParser(fixed.clone()), RegexItemParser);
        assert_eq!(parser.parse("3 waffles", 30).await.unwrap(), fixed);
        assert_eq!(parser.name(), "fixed");
    }

    #[tokio::test]
    async fn test_item_text_parser_is_total() {
        let parser = ItemTextParser::new(Box::new(FailingParser));
        let item = parser.parse_item_text("chicken breast", 30).await;
        assert_eq!(item.name, "Chicken Breast");
        assert_eq!(item.category, Category::MeatPoultry);
    }

    #[tokio::test]
    async fn test_from_config_without_ai_is_deterministic() {
        let parser = ItemTextParser::from_config(&ParserConfig::default());
        let item = parser.parse_item_text("2 bagels", 30).await;
        assert_eq!(item.name, "Bagels");
    }
}
