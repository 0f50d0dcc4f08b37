//! Navigation URL derivation
//!
//! | kind       | url                          |
//! |------------|------------------------------|
//! | `category` | `/{slug}{category_suffix}`   |
//! | `product`  | `/{slug}{product_suffix}`    |
//! | `page`     | `/{slug}`                    |
//! | `other`    | none                         |
//!
//! A missing slug yields no URL for any kind. An empty slug is still a slug.

use crate::domain::value_objects::{NodeKind, UrlSuffixes};

/// Derive the navigation URL for a node.
pub fn node_url(kind: NodeKind, slug: Option<&str>, suffixes: &UrlSuffixes) -> Option<String> {
    let slug = slug?;
    let suffix = match kind {
        NodeKind::Category => suffixes.category_suffix.as_str(),
        NodeKind::Product => suffixes.product_suffix.as_str(),
        NodeKind::Page => "",
        NodeKind::Other => return None,
    };
    Some(format!("/{}{}", slug, suffix))
}
