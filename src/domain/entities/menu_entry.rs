//! Flat menu entry as received from the backend.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::value_objects::{NodeId, NodeKind};

/// One record per navigation node, parent-referencing.
///
/// Field names follow the storefront API (`node_id`, `parent_id`, `level`,
/// `type`, `url_key`) on input and camelCase on output. Every field except
/// `id` falls back to a default when missing or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    #[serde(alias = "node_id")]
    pub id: NodeId,

    #[serde(
        default,
        alias = "parent_id",
        deserialize_with = "deserialize_parent_id"
    )]
    pub parent_id: Option<NodeId>,

    /// `0` marks a top-level entry
    #[serde(default, alias = "level", deserialize_with = "null_as_default")]
    pub depth: u32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, alias = "type")]
    pub kind: NodeKind,

    /// Path segment used for the URL; `None` means "no URL"
    #[serde(default, alias = "url_key")]
    pub slug: Option<String>,
}

impl MenuEntry {
    /// A top-level entry with no parent.
    pub fn new(id: impl Into<NodeId>, title: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            depth: 0,
            title: title.into(),
            kind,
            slug: None,
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<NodeId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn is_top_level(&self) -> bool {
        self.depth == 0
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// An empty parent reference means "no parent", same as null.
fn deserialize_parent_id<'de, D>(deserializer: D) -> Result<Option<NodeId>, D::Error>
where
    D: Deserializer<'de>,
{
    let parent = Option::<NodeId>::deserialize(deserializer)?;
    Ok(parent.filter(|id| !id.as_str().is_empty()))
}
