//! Node kind value object - decides how a node's URL is derived

use serde::{Deserialize, Deserializer, Serialize};

/// Kind of menu entry.
///
/// Unknown or missing kinds collapse to `Other`, which never gets a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Category,
    Product,
    /// CMS content page (`cms_page` on the backend)
    Page,
    #[default]
    Other,
}

impl NodeKind {
    /// Parse a backend type name. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "category" => NodeKind::Category,
            "product" => NodeKind::Product,
            "page" | "cms_page" | "cms-page" => NodeKind::Page,
            _ => NodeKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Category => "category",
            NodeKind::Product => "product",
            NodeKind::Page => "page",
            NodeKind::Other => "other",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NodeKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().map(NodeKind::parse).unwrap_or_default())
    }
}
