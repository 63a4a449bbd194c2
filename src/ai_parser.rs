//! # AI Parsing Delegate
//!
//! Sends item text to a remote AI parsing service and reconciles whatever it
//! returns into a well-formed [`ParsedItemDetails`]. The service is guarded
//! by a [`CircuitBreaker`] so a failing endpoint is skipped quickly.
//!
//! Request body:
//!
//! ```json
//! { "text": "2 bags of peas", "defaultExpirationDays": 30 }
//! ```
//!
//! Expected response body:
//!
//! ```json
//! {
//!   "parsedDetails": {
//!     "name": "Peas", "quantity": 2, "category": "Fruits & Vegetables",
//!     "size": "", "expirationDate": "2025-09-01", "tags": ["healthy"]
//!   },
//!   "source": "ai"
//! }
//! ```

use crate::category::Category;
use crate::circuit_breaker::CircuitBreaker;
use crate::foodkeeper::calculate_expiration_date_on;
use crate::item_model::ParsedItemDetails;
use crate::item_parser::TextParser;
use crate::parse_errors::ParseError;
use crate::parser_config::{AiServiceConfig, RecoveryConfig};
use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AiParseRequest<'a> {
    text: &'a str,
    default_expiration_days: u32,
}

/// Item fields as returned by the AI service; everything may be missing
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiParsedDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Top-level AI service response
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiParseResponse {
    pub parsed_details: AiParsedDetails,
    #[serde(default)]
    pub source: Option<String>,
}

/// Accepts RFC 3339 timestamps, naive timestamps and plain `YYYY-MM-DD` dates
fn parse_ai_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Local).date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}

/// Turn raw AI output into a complete record
///
/// Missing or unusable fields are filled in: quantity defaults to 1, unknown
/// categories become [`Category::Other`], size and tags default to empty, and
/// a missing, unparseable or non-future date is replaced by the FoodKeeper
/// estimate. A missing name cannot be recovered and is an error.
pub fn reconcile_ai_details(
    details: &AiParsedDetails,
    default_expiration_days: u32,
    today: NaiveDate,
) -> Result<ParsedItemDetails, ParseError> {
    let name = details
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ParseError::InvalidResponse("AI response has no item name".to_string()))?;

    let category = details
        .category
        .as_deref()
        .map(Category::from_label)
        .unwrap_or(Category::Other);

    let quantity = details
        .quantity
        .filter(|q| q.is_finite() && *q >= 1.0)
        .map(|q| q.round() as u32)
        .unwrap_or(1);

    let returned_date = details.expiration_date.as_deref().and_then(parse_ai_date);
    let expiration_date = match returned_date {
        Some(date) if date > today => date,
        _ => {
            let estimate =
                calculate_expiration_date_on(name, Some(category), default_expiration_days, today);
            warn!(
                returned = ?details.expiration_date,
                %estimate,
                "AI expiration date unusable, using estimate"
            );
            estimate
        }
    };

    Ok(ParsedItemDetails {
        name: name.to_string(),
        quantity,
        category,
        size: details.size.as_deref().map(str::trim).unwrap_or_default().to_string(),
        expiration_date,
        tags: details.tags.clone().unwrap_or_default(),
    })
}

/// [`TextParser`] backed by the remote AI parsing service
#[derive(Debug)]
pub struct RemoteItemParser {
    client: reqwest::Client,
    config: AiServiceConfig,
    breaker: CircuitBreaker,
}

impl RemoteItemParser {
    pub fn new(config: AiServiceConfig, recovery: RecoveryConfig) -> Result<Self, ParseError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ParseError::Unavailable(format!("HTTP client setup failed: {e}")))?;

        Ok(Self {
            client,
            config,
            breaker: CircuitBreaker::new(recovery),
        })
    }

    pub fn breaker(&self) -> &CircuitBreaker {
        &self.breaker
    }

    async fn request(
        &self,
        text: &str,
        default_expiration_days: u32,
    ) -> Result<AiParseResponse, ParseError> {
        let mut request = self.client.post(&self.config.endpoint).json(&AiParseRequest {
            text,
            default_expiration_days,
        });
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ParseError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl TextParser for RemoteItemParser {
    async fn parse(
        &self,
        text: &str,
        default_expiration_days: u32,
    ) -> Result<ParsedItemDetails, ParseError> {
        if self.breaker.is_open() {
            return Err(ParseError::Unavailable(
                "AI parsing service circuit breaker is open".to_string(),
            ));
        }

        let result = match self.request(text, default_expiration_days).await {
            Ok(response) => {
                debug!(source = ?response.source, "AI parsing service responded");
                reconcile_ai_details(&response.parsed_details, default_expiration_days, crate::today())
            }
            Err(e) => Err(e),
        };

        match &result {
            Ok(_) => self.breaker.record_success(),
            Err(e) => {
                self.breaker.record_failure();
                warn!(
                    error = %e,
                    failures = self.breaker.failure_count(),
                    "AI parsing request failed"
                );
            }
        }

        result
    }

    fn name(&self) -> &'static str {
        "ai"
    }
}
