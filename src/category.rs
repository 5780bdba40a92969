//! Ingredient Categories
//!
//! Closed set of shopping-aisle buckets an ingredient can be filed under.

use serde::{Deserialize, Serialize};

/// Ingredient category (serialized as its Dutch wire slug)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "aardappelen-groente-fruit")]
    Produce,
    #[serde(rename = "vlees-vis")]
    MeatFish,
    #[serde(rename = "zuivel")]
    Dairy,
    #[serde(rename = "bakkerij")]
    Bakery,
    #[serde(rename = "diepvries")]
    Frozen,
    #[serde(rename = "conserven")]
    Canned,
    #[serde(rename = "droge-waren")]
    DryGoods,
    #[serde(rename = "dranken")]
    Beverages,
    #[serde(rename = "snacks")]
    Snacks,
    #[serde(rename = "ontbijt")]
    Breakfast,
    #[serde(rename = "beleg")]
    Spreads,
    #[serde(rename = "baby")]
    Baby,
    #[serde(rename = "kruiden-specerijen")]
    HerbsSpices,
    #[serde(rename = "non-food")]
    NonFood,
    #[serde(rename = "overig")]
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 15] = [
        Category::Produce,
        Category::MeatFish,
        Category::Dairy,
        Category::Bakery,
        Category::Frozen,
        Category::Canned,
        Category::DryGoods,
        Category::Beverages,
        Category::Snacks,
        Category::Breakfast,
        Category::Spreads,
        Category::Baby,
        Category::HerbsSpices,
        Category::NonFood,
        Category::Other,
    ];

    /// Slug sent to and received from the backend
    pub fn wire(self) -> &'static str {
        match self {
            Category::Produce => "aardappelen-groente-fruit",
            Category::MeatFish => "vlees-vis",
            Category::Dairy => "zuivel",
            Category::Bakery => "bakkerij",
            Category::Frozen => "diepvries",
            Category::Canned => "conserven",
            Category::DryGoods => "droge-waren",
            Category::Beverages => "dranken",
            Category::Snacks => "snacks",
            Category::Breakfast => "ontbijt",
            Category::Spreads => "beleg",
            Category::Baby => "baby",
            Category::HerbsSpices => "kruiden-specerijen",
            Category::NonFood => "non-food",
            Category::Other => "overig",
        }
    }

    /// English name, accepted as an alias when parsing
    pub fn english(self) -> &'static str {
        match self {
            Category::Produce => "unspecified-produce",
            Category::MeatFish => "meat-fish",
            Category::Dairy => "dairy",
            Category::Bakery => "bakery",
            Category::Frozen => "frozen",
            Category::Canned => "canned",
            Category::DryGoods => "dry-goods",
            Category::Beverages => "beverages",
            Category::Snacks => "snacks",
            Category::Breakfast => "breakfast",
            Category::Spreads => "spreads",
            Category::Baby => "baby",
            Category::HerbsSpices => "herbs-spices",
            Category::NonFood => "non-food",
            Category::Other => "other",
        }
    }

    /// Label shown in the category dropdown
    pub fn label(self) -> &'static str {
        match self {
            Category::Produce => "Aardappelen, groente & fruit",
            Category::MeatFish => "Vlees & vis",
            Category::Dairy => "Zuivel",
            Category::Bakery => "Bakkerij",
            Category::Frozen => "Diepvries",
            Category::Canned => "Conserven",
            Category::DryGoods => "Droge waren",
            Category::Beverages => "Dranken",
            Category::Snacks => "Snacks",
            Category::Breakfast => "Ontbijt",
            Category::Spreads => "Beleg",
            Category::Baby => "Baby",
            Category::HerbsSpices => "Kruiden & specerijen",
            Category::NonFood => "Non-food",
            Category::Other => "Overig",
        }
    }

    /// Parse a wire slug or English name (case-insensitive)
    pub fn parse(value: &str) -> Option<Category> {
        let value = value.trim();
        Self::ALL.into_iter().find(|c| {
            c.wire().eq_ignore_ascii_case(value) || c.english().eq_ignore_ascii_case(value)
        })
    }

    /// Parse, falling back to the catch-all for anything unknown or missing
    pub fn coerce(value: Option<&str>) -> Category {
        value.and_then(Self::parse).unwrap_or(Category::Other)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_wire_and_english() {
        assert_eq!(Category::parse("zuivel"), Some(Category::Dairy));
        assert_eq!(Category::parse("dairy"), Some(Category::Dairy));
        assert_eq!(Category::parse("  Vlees-Vis "), Some(Category::MeatFish));
        assert_eq!(Category::parse("unspecified-produce"), Some(Category::Produce));
        assert_eq!(Category::parse("groente"), None);
    }

    #[test]
    fn test_coerce_unknown_to_other() {
        assert_eq!(Category::coerce(Some("spaceship parts")), Category::Other);
        assert_eq!(Category::coerce(Some("")), Category::Other);
        assert_eq!(Category::coerce(None), Category::Other);
        assert_eq!(Category::coerce(Some("diepvries")), Category::Frozen);
    }

    #[test]
    fn test_wire_slugs_match_serde() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.wire()));
            assert_eq!(Category::parse(category.wire()), Some(category));
        }
    }
}
