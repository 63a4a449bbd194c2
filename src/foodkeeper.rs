//! # FoodKeeper Expiration Knowledge Base
//!
//! Static freezer shelf-life table keyed by canonical lowercase food names,
//! adapted from the USDA FoodKeeper freezer guidance. Used to estimate an
//! expiration date when the user text carries none.
//!
//! ## Matching
//!
//! Lookups resolve a noisy item name to a table key in three tiers, first
//! tier wins:
//!
//! 1. exact (case-insensitive) key equality
//! 2. a key contained in the item name (table order)
//! 3. the item name contained in a key (table order)
//!
//! More specific keys are listed before generic ones so that tier 2 prefers
//! "chicken breast" over "chicken" for "ground chicken breast".

use crate::category::Category;
use chrono::{Duration, NaiveDate};
use lazy_static::lazy_static;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Average days per month used to turn month ranges into day counts
pub const DAYS_PER_MONTH: f64 = 30.44;

/// Freezer shelf-life range for one canonical food
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodExpirationInfo {
    /// Shortest recommended freezer storage, in months
    pub min_months: f64,
    /// Longest recommended freezer storage, in months
    pub max_months: f64,
    /// Category hint; not consulted by date resolution
    pub category: Category,
}

impl FoodExpirationInfo {
    const fn new(min_months: f64, max_months: f64, category: Category) -> Self {
        Self {
            min_months,
            max_months,
            category,
        }
    }

    /// Days of shelf life at the midpoint of the range
    pub fn midpoint_days(&self) -> i64 {
        (((self.min_months + self.max_months) / 2.0) * DAYS_PER_MONTH).round() as i64
    }
}

use Category::*;

/// Canonical food name -> freezer shelf life. Order matters for tiers 2 and 3.
pub const FOODKEEPER_DATA: &[(&str, FoodExpirationInfo)] = &[
    // Poultry
    ("chicken breast", FoodExpirationInfo::new(9.0, 12.0, MeatPoultry)),
    ("chicken thighs", FoodExpirationInfo::new(9.0, 12.0, MeatPoultry)),
    ("chicken wings", FoodExpirationInfo::new(9.0, 12.0, MeatPoultry)),
    ("whole chicken", FoodExpirationInfo::new(12.0, 12.0, MeatPoultry)),
    ("ground chicken", FoodExpirationInfo::new(3.0, 4.0, MeatPoultry)),
    ("cooked chicken", FoodExpirationInfo::new(2.0, 6.0, MeatPoultry)),
    ("chicken nuggets", FoodExpirationInfo::new(1.0, 3.0, ReadyToEat)),
    ("chicken", FoodExpirationInfo::new(9.0, 12.0, MeatPoultry)),
    ("ground turkey", FoodExpirationInfo::new(3.0, 4.0, MeatPoultry)),
    ("turkey", FoodExpirationInfo::new(12.0, 12.0, MeatPoultry)),
    ("duck", FoodExpirationInfo::new(6.0, 6.0, MeatPoultry)),
    // Red meat
    ("ground beef", FoodExpirationInfo::new(3.0, 4.0, MeatPoultry)),
    ("hamburger", FoodExpirationInfo::new(3.0, 4.0, MeatPoultry)),
    ("beef roast", FoodExpirationInfo::new(4.0, 12.0, MeatPoultry)),
    ("steak", FoodExpirationInfo::new(4.0, 12.0, MeatPoultry)),
    ("beef", FoodExpirationInfo::new(4.0, 12.0, MeatPoultry)),
    ("ground pork", FoodExpirationInfo::new(3.0, 4.0, MeatPoultry)),
    ("pork chops", FoodExpirationInfo::new(4.0, 6.0, MeatPoultry)),
    ("pork roast", FoodExpirationInfo::new(4.0, 12.0, MeatPoultry)),
    ("pork", FoodExpirationInfo::new(4.0, 6.0, MeatPoultry)),
    ("lamb", FoodExpirationInfo::new(6.0, 9.0, MeatPoultry)),
    ("veal", FoodExpirationInfo::new(4.0, 6.0, MeatPoultry)),
    ("venison", FoodExpirationInfo::new(8.0, 12.0, MeatPoultry)),
    ("bacon", FoodExpirationInfo::new(1.0, 1.0, MeatPoultry)),
    ("sausage", FoodExpirationInfo::new(1.0, 2.0, MeatPoultry)),
    ("hot dogs", FoodExpirationInfo::new(1.0, 2.0, ReadyToEat)),
    ("ham", FoodExpirationInfo::new(1.0, 2.0, MeatPoultry)),
    ("meatballs", FoodExpirationInfo::new(1.0, 3.0, MeatPoultry)),
    // Seafood
    ("salmon", FoodExpirationInfo::new(2.0, 3.0, Seafood)),
    ("tuna", FoodExpirationInfo::new(2.0, 3.0, Seafood)),
    ("cod", FoodExpirationInfo::new(6.0, 8.0, Seafood)),
    ("tilapia", FoodExpirationInfo::new(6.0, 8.0, Seafood)),
    ("halibut", FoodExpirationInfo::new(6.0, 8.0, Seafood)),
    ("shrimp", FoodExpirationInfo::new(3.0, 6.0, Seafood)),
    ("scallops", FoodExpirationInfo::new(3.0, 6.0, Seafood)),
    ("crab", FoodExpirationInfo::new(2.0, 4.0, Seafood)),
    ("lobster", FoodExpirationInfo::new(2.0, 4.0, Seafood)),
    ("fish sticks", FoodExpirationInfo::new(1.0, 3.0, ReadyToEat)),
    ("fish", FoodExpirationInfo::new(6.0, 8.0, Seafood)),
    // Fruits & vegetables
    ("mixed vegetables", FoodExpirationInfo::new(8.0, 12.0, FruitsVegetables)),
    ("green beans", FoodExpirationInfo::new(8.0, 12.0, FruitsVegetables)),
    ("broccoli", FoodExpirationInfo::new(8.0, 12.0, FruitsVegetables)),
    ("spinach", FoodExpirationInfo::new(8.0, 12.0, FruitsVegetables)),
    ("peas", FoodExpirationInfo::new(8.0, 12.0, FruitsVegetables)),
    ("corn", FoodExpirationInfo::new(8.0, 12.0, FruitsVegetables)),
    ("carrots", FoodExpirationInfo::new(8.0, 12.0, FruitsVegetables)),
    ("vegetables", FoodExpirationInfo::new(8.0, 12.0, FruitsVegetables)),
    ("strawberries", FoodExpirationInfo::new(8.0, 12.0, FruitsVegetables)),
    ("blueberries", FoodExpirationInfo::new(8.0, 12.0, FruitsVegetables)),
    ("raspberries", FoodExpirationInfo::new(8.0, 12.0, FruitsVegetables)),
    ("berries", FoodExpirationInfo::new(8.0, 12.0, FruitsVegetables)),
    ("bananas", FoodExpirationInfo::new(2.0, 3.0, FruitsVegetables)),
    ("mango", FoodExpirationInfo::new(8.0, 12.0, FruitsVegetables)),
    ("peaches", FoodExpirationInfo::new(8.0, 12.0, FruitsVegetables)),
    ("fruit", FoodExpirationInfo::new(8.0, 12.0, FruitsVegetables)),
    // Bakery
    ("bread", FoodExpirationInfo::new(2.0, 3.0, BakeryBread)),
    ("bagels", FoodExpirationInfo::new(2.0, 3.0, BakeryBread)),
    ("muffins", FoodExpirationInfo::new(2.0, 3.0, BakeryBread)),
    ("tortillas", FoodExpirationInfo::new(6.0, 8.0, BakeryBread)),
    ("waffles", FoodExpirationInfo::new(1.0, 2.0, BakeryBread)),
    ("pancakes", FoodExpirationInfo::new(1.0, 2.0, BakeryBread)),
    ("pizza dough", FoodExpirationInfo::new(1.0, 2.0, BakeryBread)),
    ("cookie dough", FoodExpirationInfo::new(2.0, 2.0, BakeryBread)),
    ("pie", FoodExpirationInfo::new(1.0, 2.0, BakeryBread)),
    // Prepared and ready-to-eat
    ("pizza", FoodExpirationInfo::new(1.0, 2.0, ReadyToEat)),
    ("lasagna", FoodExpirationInfo::new(2.0, 3.0, PreparedMeals)),
    ("casserole", FoodExpirationInfo::new(2.0, 3.0, PreparedMeals)),
    ("leftovers", FoodExpirationInfo::new(2.0, 3.0, PreparedMeals)),
    ("cooked rice", FoodExpirationInfo::new(6.0, 6.0, PreparedMeals)),
    ("burritos", FoodExpirationInfo::new(2.0, 3.0, PreparedMeals)),
    // Soups
    ("soup", FoodExpirationInfo::new(2.0, 3.0, SoupsBroths)),
    ("stew", FoodExpirationInfo::new(2.0, 3.0, SoupsBroths)),
    ("chili", FoodExpirationInfo::new(4.0, 6.0, SoupsBroths)),
    ("broth", FoodExpirationInfo::new(2.0, 3.0, SoupsBroths)),
    ("stock", FoodExpirationInfo::new(2.0, 3.0, SoupsBroths)),
    // Dairy
    ("ice cream", FoodExpirationInfo::new(2.0, 4.0, DairyAlternatives)),
    ("butter", FoodExpirationInfo::new(6.0, 9.0, DairyAlternatives)),
    ("cheese", FoodExpirationInfo::new(6.0, 6.0, DairyAlternatives)),
    ("milk", FoodExpirationInfo::new(3.0, 3.0, DairyAlternatives)),
    ("yogurt", FoodExpirationInfo::new(1.0, 2.0, DairyAlternatives)),
    ("eggs", FoodExpirationInfo::new(12.0, 12.0, DairyAlternatives)),
    // Herbs & seasonings
    ("pesto", FoodExpirationInfo::new(1.0, 2.0, HerbsSeasonings)),
    ("herbs", FoodExpirationInfo::new(3.0, 4.0, HerbsSeasonings)),
    ("basil", FoodExpirationInfo::new(3.0, 4.0, HerbsSeasonings)),
    ("ginger", FoodExpirationInfo::new(6.0, 6.0, HerbsSeasonings)),
    ("garlic", FoodExpirationInfo::new(10.0, 12.0, HerbsSeasonings)),
];

lazy_static! {
    /// Exact-match index over `FOODKEEPER_DATA`
    static ref FOODKEEPER_INDEX: HashMap<&'static str, FoodExpirationInfo> =
        FOODKEEPER_DATA.iter().copied().collect();
}

/// Find the canonical table key that best matches a free-text item name
///
/// # Examples
///
/// ```rust
/// use frostie::foodkeeper::find_best_food_match;
///
/// assert_eq!(find_best_food_match("Ground Chicken"), Some("ground chicken"));
/// assert_eq!(find_best_food_match("smoked salmon fillets"), Some("salmon"));
/// assert_eq!(find_best_food_match("xyzzycustomitem"), None);
/// ```
pub fn find_best_food_match(item_name: &str) -> Option<&'static str> {
    let lower = item_name.trim().to_lowercase();
    if lower.is_empty() {
        return None;
    }

    if let Some((&key, _)) = FOODKEEPER_INDEX.get_key_value(lower.as_str()) {
        debug!(item = %item_name, key, "FoodKeeper exact match");
        return Some(key);
    }

    if let Some(&(key, _)) = FOODKEEPER_DATA.iter().find(|(key, _)| lower.contains(key)) {
        debug!(item = %item_name, key, "FoodKeeper key found inside item name");
        return Some(key);
    }

    if let Some(&(key, _)) = FOODKEEPER_DATA
        .iter()
        .find(|(key, _)| key.contains(lower.as_str()))
    {
        debug!(item = %item_name, key, "FoodKeeper item name found inside key");
        return Some(key);
    }

    None
}

/// Shelf-life range for the best-matching food, if any
pub fn get_expiration_info(item_name: &str) -> Option<FoodExpirationInfo> {
    find_best_food_match(item_name).and_then(|key| FOODKEEPER_INDEX.get(key).copied())
}

/// Knowledge-base expiration date for `item_name` counted from `today`, if the
/// name matches a table entry
pub fn knowledge_base_date_on(item_name: &str, today: NaiveDate) -> Option<NaiveDate> {
    get_expiration_info(item_name).map(|info| days_after(today, info.midpoint_days()))
}

/// `today` plus `days`, saturating at the last representable date
fn days_after(today: NaiveDate, days: i64) -> NaiveDate {
    today
        .checked_add_signed(Duration::days(days))
        .unwrap_or_else(|| {
            warn!(%today, days, "Expiration date out of range, using the latest representable date");
            NaiveDate::MAX
        })
}

/// Estimate an expiration date counted from `today`
///
/// Uses the midpoint of the matched shelf-life range, or `default_days` when
/// the name matches nothing. A zero `default_days` counts as one day so the
/// result is always after `today`. The category is accepted for parity with
/// the AI reconciliation path but does not influence the lookup.
pub fn calculate_expiration_date_on(
    item_name: &str,
    _category: Option<Category>,
    default_days: u32,
    today: NaiveDate,
) -> NaiveDate {
    knowledge_base_date_on(item_name, today)
        .unwrap_or_else(|| days_after(today, i64::from(default_days.max(1))))
}

/// Estimate an expiration date counted from local midnight today
pub fn calculate_expiration_date(
    item_name: &str,
    category: Option<Category>,
    default_days: u32,
) -> NaiveDate {
    calculate_expiration_date_on(item_name, category, default_days, crate::today())
}
