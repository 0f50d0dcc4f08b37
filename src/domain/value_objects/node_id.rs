//! Menu node identifier
//!
//! Backends hand out node ids as integers (`"node_id": 12`) or as strings.
//! Both forms normalise to the same string-backed identifier so that
//! `parent_id` references match regardless of how each side was encoded.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a single menu node, unique within one fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNodeId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawNodeId::deserialize(deserializer)? {
            RawNodeId::Text(s) => Self(s),
            RawNodeId::Unsigned(n) => Self(n.to_string()),
            RawNodeId::Signed(n) => Self(n.to_string()),
        })
    }
}
