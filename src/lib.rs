//! # Frostie Item Parser
//!
//! Turns free-text freezer item descriptions such as
//! `"2 8oz salmon fillets expires in 3 weeks #dinner"` into structured
//! records with a name, quantity, size, category, expiration date and tags.
//!
//! Parsing is deterministic by default. An AI parsing service can be
//! configured as the primary parser, with the deterministic pipeline as the
//! fallback whenever the service fails.

pub mod ai_parser;
pub mod category;
pub mod circuit_breaker;
pub mod expiration_phrase;
pub mod extraction_types;
pub mod foodkeeper;
pub mod item_model;
pub mod item_parser;
pub mod item_patterns;
pub mod name_normalizer;
pub mod parse_errors;
pub mod parser_config;
pub mod quantity_extractor;
pub mod tag_extractor;

use chrono::NaiveDate;

/// Local calendar date that relative expiration periods count from
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
