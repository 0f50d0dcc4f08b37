//! Store-wide URL suffixes
//!
//! Magento-style storefronts append a configurable suffix (usually `.html`)
//! to category and product slugs. Content pages never get one.

use serde::{Deserialize, Serialize};

/// Suffixes appended to slugs when deriving node URLs.
///
/// Absent values are empty strings, so a default instance derives bare
/// `/slug` URLs for every kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UrlSuffixes {
    #[serde(default)]
    pub category_suffix: String,

    #[serde(default)]
    pub product_suffix: String,
}

impl UrlSuffixes {
    pub fn new(category_suffix: impl Into<String>, product_suffix: impl Into<String>) -> Self {
        Self {
            category_suffix: category_suffix.into(),
            product_suffix: product_suffix.into(),
        }
    }

    /// Build from optional values, treating `None` as "no suffix".
    pub fn from_options(category: Option<&str>, product: Option<&str>) -> Self {
        Self::new(category.unwrap_or_default(), product.unwrap_or_default())
    }
}
