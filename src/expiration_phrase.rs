//! # Expiration Phrase Extractor
//!
//! Finds an explicit expiration in item text and turns it into a concrete
//! date. Absolute dates ("expires: 10/15/2025", "best by 3-1-26") are tried
//! first, then relative periods in a fixed order: "expires in N unit",
//! "good for N unit", "for N unit", "in N unit".
//!
//! Matched phrases are always removed from the text, even when the date they
//! carry is rejected, so they never leak into the item name.

use crate::extraction_types::ExpirationExtraction;
use crate::item_patterns::{
    parse_period_amount, squash_whitespace, ABSOLUTE_DATE_REGEX, RELATIVE_PERIOD_REGEXES,
};
use chrono::{Duration, Months, NaiveDate};
use std::ops::Range;
use tracing::{debug, warn};

fn is_lone_s(word: &str) -> bool {
    word.eq_ignore_ascii_case("s")
}

/// Remove a matched phrase plus a standalone "s" on either side of it
fn strip_phrase(text: &str, range: Range<usize>) -> String {
    let mut before: Vec<&str> = text[..range.start].split_whitespace().collect();
    let mut after: Vec<&str> = text[range.end..].split_whitespace().collect();

    if before.last().is_some_and(|word| is_lone_s(word)) {
        before.pop();
    }
    if after.first().is_some_and(|word| is_lone_s(word)) {
        after.remove(0);
    }

    before.into_iter().chain(after).collect::<Vec<_>>().join(" ")
}

/// Build a calendar date from MM, DD and YY/YYYY parts
fn parse_calendar_date(month: &str, day: &str, year: &str) -> Option<NaiveDate> {
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    let mut year: i32 = year.parse().ok()?;
    if year < 100 {
        year += 2000;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Advance `today` by `amount` days, weeks or calendar months
fn advance_by_period(today: NaiveDate, amount: u32, unit: &str) -> Option<NaiveDate> {
    match unit {
        "day" => today.checked_add_signed(Duration::days(i64::from(amount))),
        "week" => today.checked_add_signed(Duration::days(i64::from(amount) * 7)),
        "month" => today.checked_add_months(Months::new(amount)),
        _ => None,
    }
}

/// Extract an explicit expiration phrase relative to `today`
///
/// Absolute dates must fall strictly after `today`; past or impossible dates
/// are dropped and the relative patterns are tried on what is left. A zero
/// period is likewise dropped.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use frostie::expiration_phrase::extract_expiration_phrase;
///
/// let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let extracted = extract_expiration_phrase("Beef good for 2 weeks", today);
/// assert_eq!(extracted.date, NaiveDate::from_ymd_opt(2024, 5, 15));
/// assert!(extracted.explicit);
/// assert_eq!(extracted.remaining_text, "Beef");
/// ```
pub fn extract_expiration_phrase(text: &str, today: NaiveDate) -> ExpirationExtraction {
    let mut working = squash_whitespace(text);

    let absolute = ABSOLUTE_DATE_REGEX.captures(&working).map(|caps| {
        let date = parse_calendar_date(&caps[1], &caps[2], &caps[3]);
        let range = caps.get(0).map_or(0..0, |whole| whole.range());
        (date, caps[0].to_string(), range)
    });

    if let Some((date, phrase, range)) = absolute {
        let remaining_text = strip_phrase(&working, range);

        match date {
            Some(date) if date > today => {
                debug!(phrase = %phrase, %date, "Found absolute expiration date");
                return ExpirationExtraction {
                    date: Some(date),
                    explicit: true,
                    remaining_text,
                };
            }
            Some(date) => {
                warn!(phrase = %phrase, %date, %today, "Discarding expiration date that is not in the future");
            }
            None => {
                warn!(phrase = %phrase, "Discarding unparseable expiration date");
            }
        }
        working = remaining_text;
    }

    for regex in RELATIVE_PERIOD_REGEXES.iter() {
        let Some(caps) = regex.captures(&working) else {
            continue;
        };
        let Some(whole) = caps.get(0) else {
            continue;
        };

        let phrase = whole.as_str().to_string();
        let unit = caps[2].to_lowercase();
        let date = parse_period_amount(&caps[1])
            .filter(|&amount| amount > 0)
            .and_then(|amount| advance_by_period(today, amount, &unit));
        let remaining_text = strip_phrase(&working, whole.range());

        return match date {
            Some(date) => {
                debug!(phrase = %phrase, %date, "Found relative expiration period");
                ExpirationExtraction {
                    date: Some(date),
                    explicit: true,
                    remaining_text,
                }
            }
            None => {
                warn!(phrase = %phrase, "Discarding unusable expiration period");
                ExpirationExtraction::none(remaining_text)
            }
        };
    }

    ExpirationExtraction::none(working)
}
