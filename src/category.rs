//! # Category Classifier
//!
//! Maps free-text item names onto the fixed set of freezer inventory
//! categories using an ordered keyword table. The first keyword found in the
//! lowercased name wins, so earlier rows shadow later ones.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Inventory category labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Meat & Poultry")]
    MeatPoultry,
    #[serde(rename = "Seafood")]
    Seafood,
    #[serde(rename = "Fruits & Vegetables")]
    FruitsVegetables,
    #[serde(rename = "Prepared Meals")]
    PreparedMeals,
    #[serde(rename = "Ready-to-Eat")]
    ReadyToEat,
    #[serde(rename = "Bakery & Bread")]
    BakeryBread,
    #[serde(rename = "Dairy & Alternatives")]
    DairyAlternatives,
    #[serde(rename = "Soups & Broths")]
    SoupsBroths,
    #[serde(rename = "Herbs & Seasonings")]
    HerbsSeasonings,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 10] = [
        Category::MeatPoultry,
        Category::Seafood,
        Category::FruitsVegetables,
        Category::PreparedMeals,
        Category::ReadyToEat,
        Category::BakeryBread,
        Category::DairyAlternatives,
        Category::SoupsBroths,
        Category::HerbsSeasonings,
        Category::Other,
    ];

    /// The user-facing label (e.g. "Meat & Poultry")
    pub fn label(&self) -> &'static str {
        match self {
            Category::MeatPoultry => "Meat & Poultry",
            Category::Seafood => "Seafood",
            Category::FruitsVegetables => "Fruits & Vegetables",
            Category::PreparedMeals => "Prepared Meals",
            Category::ReadyToEat => "Ready-to-Eat",
            Category::BakeryBread => "Bakery & Bread",
            Category::DairyAlternatives => "Dairy & Alternatives",
            Category::SoupsBroths => "Soups & Broths",
            Category::HerbsSeasonings => "Herbs & Seasonings",
            Category::Other => "Other",
        }
    }

    /// Resolve a label case-insensitively, falling back to `Other`
    pub fn from_label(label: &str) -> Category {
        let wanted = label.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .unwrap_or(Category::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered `(keyword, category)` pairs. Order is load-bearing: composite
/// dishes and processed products come before their raw ingredients.
const CATEGORY_KEYWORDS: &[(&str, Category)] = &[
    // Soups & broths
    ("soup", Category::SoupsBroths),
    ("broth", Category::SoupsBroths),
    ("stock", Category::SoupsBroths),
    ("stew", Category::SoupsBroths),
    ("chowder", Category::SoupsBroths),
    ("bisque", Category::SoupsBroths),
    ("chili", Category::SoupsBroths),
    // Prepared meals
    ("lasagna", Category::PreparedMeals),
    ("casserole", Category::PreparedMeals),
    ("leftover", Category::PreparedMeals),
    ("meal", Category::PreparedMeals),
    ("enchilada", Category::PreparedMeals),
    ("curry", Category::PreparedMeals),
    ("pot pie", Category::PreparedMeals),
    ("meatloaf", Category::PreparedMeals),
    ("dumpling", Category::PreparedMeals),
    ("pierogi", Category::PreparedMeals),
    ("ravioli", Category::PreparedMeals),
    ("burrito", Category::PreparedMeals),
    // Ready-to-eat
    ("pizza", Category::ReadyToEat),
    ("nugget", Category::ReadyToEat),
    ("fish stick", Category::ReadyToEat),
    ("tater tot", Category::ReadyToEat),
    ("fries", Category::ReadyToEat),
    ("egg roll", Category::ReadyToEat),
    ("hot dog", Category::ReadyToEat),
    ("popsicle", Category::ReadyToEat),
    ("frozen dinner", Category::ReadyToEat),
    // Meat & poultry
    ("chicken", Category::MeatPoultry),
    ("beef", Category::MeatPoultry),
    ("pork", Category::MeatPoultry),
    ("turkey", Category::MeatPoultry),
    ("lamb", Category::MeatPoultry),
    ("steak", Category::MeatPoultry),
    ("sausage", Category::MeatPoultry),
    ("bacon", Category::MeatPoultry),
    ("hamburger", Category::MeatPoultry),
    ("graham", Category::BakeryBread),
    ("ham", Category::MeatPoultry),
    ("veal", Category::MeatPoultry),
    ("duck", Category::MeatPoultry),
    ("venison", Category::MeatPoultry),
    ("meatball", Category::MeatPoultry),
    ("meat", Category::MeatPoultry),
    // Seafood
    ("salmon", Category::Seafood),
    ("tuna", Category::Seafood),
    ("cod", Category::Seafood),
    ("tilapia", Category::Seafood),
    ("halibut", Category::Seafood),
    ("shrimp", Category::Seafood),
    ("prawn", Category::Seafood),
    ("scallop", Category::Seafood),
    ("crab", Category::Seafood),
    ("lobster", Category::Seafood),
    ("mussel", Category::Seafood),
    ("clam", Category::Seafood),
    ("fish", Category::Seafood),
    // Bakery & bread
    ("bread", Category::BakeryBread),
    ("bagel", Category::BakeryBread),
    ("muffin", Category::BakeryBread),
    ("croissant", Category::BakeryBread),
    ("tortilla", Category::BakeryBread),
    ("waffle", Category::BakeryBread),
    ("pancake", Category::BakeryBread),
    ("dough", Category::BakeryBread),
    ("bun", Category::BakeryBread),
    ("roll", Category::BakeryBread),
    ("cake", Category::BakeryBread),
    ("cookie", Category::BakeryBread),
    ("pie", Category::BakeryBread),
    // Dairy & alternatives
    ("ice cream", Category::DairyAlternatives),
    ("butter", Category::DairyAlternatives),
    ("cheese", Category::DairyAlternatives),
    ("milk", Category::DairyAlternatives),
    ("yogurt", Category::DairyAlternatives),
    ("cream", Category::DairyAlternatives),
    ("eggplant", Category::FruitsVegetables),
    ("egg", Category::DairyAlternatives),
    // Herbs & seasonings
    ("pesto", Category::HerbsSeasonings),
    ("basil", Category::HerbsSeasonings),
    ("parsley", Category::HerbsSeasonings),
    ("cilantro", Category::HerbsSeasonings),
    ("dill", Category::HerbsSeasonings),
    ("herb", Category::HerbsSeasonings),
    ("ginger", Category::HerbsSeasonings),
    ("garlic", Category::HerbsSeasonings),
    // Fruits & vegetables
    ("berr", Category::FruitsVegetables),
    ("banana", Category::FruitsVegetables),
    ("mango", Category::FruitsVegetables),
    ("peach", Category::FruitsVegetables),
    ("cherr", Category::FruitsVegetables),
    ("pineapple", Category::FruitsVegetables),
    ("apple", Category::FruitsVegetables),
    ("fruit", Category::FruitsVegetables),
    ("broccoli", Category::FruitsVegetables),
    ("spinach", Category::FruitsVegetables),
    ("kale", Category::FruitsVegetables),
    ("pea", Category::FruitsVegetables),
    ("corn", Category::FruitsVegetables),
    ("bean", Category::FruitsVegetables),
    ("carrot", Category::FruitsVegetables),
    ("cauliflower", Category::FruitsVegetables),
    ("pepper", Category::FruitsVegetables),
    ("onion", Category::FruitsVegetables),
    ("potato", Category::FruitsVegetables),
    ("vegetable", Category::FruitsVegetables),
    ("veggie", Category::FruitsVegetables),
];

/// Guess the category of an item from its name
///
/// Matching is case-insensitive substring containment against
/// `CATEGORY_KEYWORDS`; unmatched names are `Other`.
///
/// # Examples
///
/// ```rust
/// use frostie::category::{guess_category, Category};
///
/// assert_eq!(guess_category("Chicken Breast"), Category::MeatPoultry);
/// assert_eq!(guess_category("mystery box"), Category::Other);
/// ```
pub fn guess_category(name: &str) -> Category {
    let lower = name.to_lowercase();

    for &(keyword, category) in CATEGORY_KEYWORDS {
        if lower.contains(keyword) {
            trace!(name = %name, keyword, category = %category, "Category keyword matched");
            return category;
        }
    }

    Category::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_categories() {
        assert_eq!(guess_category("Chicken Breast"), Category::MeatPoultry);
        assert_eq!(guess_category("salmon fillets"), Category::Seafood);
        assert_eq!(guess_category("Frozen Blueberries"), Category::FruitsVegetables);
        assert_eq!(guess_category("sourdough bread"), Category::BakeryBread);
        assert_eq!(guess_category("vanilla ice cream"), Category::DairyAlternatives);
        assert_eq!(guess_category("basil pesto"), Category::HerbsSeasonings);
        assert_eq!(guess_category("beef lasagna"), Category::PreparedMeals);
        assert_eq!(guess_category("pepperoni pizza"), Category::ReadyToEat);
    }

    #[test]
    fn test_earlier_keyword_shadows_later() {
        // "soup" is listed before "chicken"
        assert_eq!(guess_category("chicken noodle soup"), Category::SoupsBroths);
        // "nugget" is listed before "chicken"
        assert_eq!(guess_category("chicken nuggets"), Category::ReadyToEat);
        // "hamburger" is listed before "bun"
        assert_eq!(guess_category("hamburger buns"), Category::MeatPoultry);
    }

    #[test]
    fn test_longer_words_containing_short_keywords() {
        assert_eq!(guess_category("eggplant parmesan"), Category::FruitsVegetables);
        assert_eq!(guess_category("graham crackers"), Category::BakeryBread);
        assert_eq!(guess_category("scrambled eggs"), Category::DairyAlternatives);
        assert_eq!(guess_category("honey ham"), Category::MeatPoultry);
    }

    #[test]
    fn test_case_insensitive_and_repeatable() {
        for _ in 0..3 {
            assert_eq!(guess_category("CHICKEN BREAST"), Category::MeatPoultry);
            assert_eq!(guess_category("chicken breast"), Category::MeatPoultry);
        }
    }

    #[test]
    fn test_unknown_is_other() {
        assert_eq!(guess_category("xyzzycustomitem"), Category::Other);
        assert_eq!(guess_category(""), Category::Other);
    }

    #[test]
    fn test_label_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), category);
        }
        assert_eq!(Category::from_label("seafood"), Category::Seafood);
        assert_eq!(Category::from_label("  Meat & Poultry "), Category::MeatPoultry);
        assert_eq!(Category::from_label("Frozen Stuff"), Category::Other);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Category::SoupsBroths).unwrap();
        assert_eq!(json, "\"Soups & Broths\"");
        let parsed: Category = serde_json::from_str("\"Ready-to-Eat\"").unwrap();
        assert_eq!(parsed, Category::ReadyToEat);
    }
}
