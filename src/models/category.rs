// src/models/category.rs
// DOCUMENTATION: Category selector and its provider category codes
// PURPOSE: Parse the user-facing filter and resolve it to Kakao category group codes

use crate::errors::LunchError;
use std::fmt;
use std::str::FromStr;

/// Kakao category group code for restaurants
pub const RESTAURANT_CODE: &str = "FD6";
/// Kakao category group code for cafes
pub const CAFE_CODE: &str = "CE7";

/// User-facing place filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySelector {
    #[default]
    All,
    Restaurant,
    Cafe,
}

impl CategorySelector {
    /// Every selector, in the order the UI shows them
    pub const ALL_OPTIONS: [CategorySelector; 3] = [
        CategorySelector::All,
        CategorySelector::Restaurant,
        CategorySelector::Cafe,
    ];

    /// Provider category codes to query, in concatenation order
    pub fn category_codes(&self) -> &'static [&'static str] {
        match self {
            CategorySelector::All => &[RESTAURANT_CODE, CAFE_CODE],
            CategorySelector::Restaurant => &[RESTAURANT_CODE],
            CategorySelector::Cafe => &[CAFE_CODE],
        }
    }

    /// Korean label used on the page and in query strings
    pub fn label(&self) -> &'static str {
        match self {
            CategorySelector::All => "전체",
            CategorySelector::Restaurant => "식당",
            CategorySelector::Cafe => "카페",
        }
    }

    /// Parse an optional query value; absent or blank means `All`
    pub fn from_query(value: Option<&str>) -> Result<Self, LunchError> {
        match value.map(str::trim) {
            None | Some("") => Ok(CategorySelector::All),
            Some(raw) => raw.parse(),
        }
    }
}

impl FromStr for CategorySelector {
    type Err = LunchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "전체" => Ok(CategorySelector::All),
            "식당" => Ok(CategorySelector::Restaurant),
            "카페" => Ok(CategorySelector::Cafe),
            other => match other.to_ascii_lowercase().as_str() {
                "all" => Ok(CategorySelector::All),
                "restaurant" => Ok(CategorySelector::Restaurant),
                "cafe" => Ok(CategorySelector::Cafe),
                _ => Err(LunchError::InvalidInput(format!(
                    "Unknown category '{}': expected one of 전체, 식당, 카페",
                    other
                ))),
            },
        }
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
