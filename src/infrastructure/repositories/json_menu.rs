//! JSON Menu Repository
//!
//! Reads menu snapshots captured from the storefront API. Accepted shapes:
//!
//! ```json
//! [ { "node_id": 1, "parent_id": null, "level": 0, "type": "category", "url_key": "women" } ]
//! ```
//!
//! ```json
//! { "data": { "snowdogMenus": { "items": [
//!     { "menu_id": 3, "identifier": "main", "nodes": { "items": [
//!         { "node_id": 1, "type": "category", "url_key": "women", "children": [ ... ] }
//!     ] } }
//! ] } } }
//! ```
//!
//! The `data` envelope is optional, `menus` is accepted in place of
//! `snowdogMenus`, and every list may be bare or wrapped in `items`.
//! Nested `children` are flattened in pre-order; a nested node takes its
//! parent and depth from where it sits. Entries that cannot be read (no id,
//! wrong field types) are skipped together with their nested children.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::entities::MenuEntry;
use crate::domain::ports::MenuSource;
use crate::domain::value_objects::NodeId;
use crate::error::{MenuError, MenuResult};

/// One menu from a payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuDocument {
    pub menu_id: Option<NodeId>,
    pub identifier: String,
    pub entries: Vec<MenuEntry>,
    /// Records dropped because they could not be read
    pub skipped: usize,
}

/// Parsed payload holding one or more menus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuPayload {
    menus: Vec<MenuDocument>,
}

impl MenuPayload {
    pub fn from_json(content: &str) -> MenuResult<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> MenuResult<Self> {
        let mut root = match value {
            Value::Array(records) => {
                return Ok(Self {
                    menus: vec![document(None, String::new(), records)],
                })
            }
            Value::Object(root) => root,
            _ => {
                return Err(invalid(
                    "expected an array of entries or an object with a menu list",
                ))
            }
        };

        if let Some(data) = root.remove("data") {
            return Self::from_value(data);
        }

        let list = root
            .remove("snowdogMenus")
            .or_else(|| root.remove("menus"))
            .ok_or_else(|| invalid("expected a 'snowdogMenus' or 'menus' list"))?;
        let menus = items(list)
            .ok_or_else(|| invalid("menu list must be an array or contain an 'items' array"))?
            .into_iter()
            .map(parse_menu)
            .collect::<MenuResult<Vec<_>>>()?;

        Ok(Self { menus })
    }

    pub fn menus(&self) -> &[MenuDocument] {
        &self.menus
    }

    /// Pick a menu by identifier, or the first menu when `identifier` is `None`.
    pub fn select(&self, identifier: Option<&str>) -> MenuResult<&MenuDocument> {
        let found = match identifier {
            Some(wanted) => self.menus.iter().find(|m| m.identifier == wanted),
            None => self.menus.first(),
        };
        found.ok_or_else(|| MenuError::MenuNotFound {
            identifier: identifier.unwrap_or("<default>").to_string(),
            available: self.menus.iter().map(|m| m.identifier.clone()).collect(),
        })
    }
}

fn invalid(message: &str) -> MenuError {
    MenuError::InvalidPayload {
        message: message.to_string(),
    }
}

/// Lists come bare or wrapped as `{ "items": [...] }`; `null` is empty.
fn items(value: Value) -> Option<Vec<Value>> {
    match value {
        Value::Array(list) => Some(list),
        Value::Null => Some(Vec::new()),
        Value::Object(mut wrapper) => match wrapper.remove("items") {
            Some(Value::Array(list)) => Some(list),
            Some(Value::Null) => Some(Vec::new()),
            _ => None,
        },
        _ => None,
    }
}

fn parse_menu(value: Value) -> MenuResult<MenuDocument> {
    let Value::Object(mut menu) = value else {
        return Err(invalid("menu must be an object"));
    };

    let menu_id = menu
        .remove("menu_id")
        .and_then(|id| serde_json::from_value::<NodeId>(id).ok());
    let identifier = match menu.remove("identifier") {
        Some(Value::String(s)) => s,
        _ => String::new(),
    };
    let records = match menu.remove("nodes") {
        Some(nodes) => items(nodes).ok_or_else(|| {
            invalid("menu 'nodes' must be an array or contain an 'items' array")
        })?,
        None => Vec::new(),
    };

    Ok(document(menu_id, identifier, records))
}

fn document(menu_id: Option<NodeId>, identifier: String, records: Vec<Value>) -> MenuDocument {
    let mut entries = Vec::with_capacity(records.len());
    let mut skipped = 0;

    // (record, enclosing parent id and depth); popped in pre-order
    let mut pending: Vec<(Value, Option<(NodeId, u32)>)> =
        records.into_iter().rev().map(|record| (record, None)).collect();
    let mut position = 0usize;

    while let Some((mut record, enclosing)) = pending.pop() {
        let children = match &mut record {
            Value::Object(fields) => fields
                .remove("children")
                .and_then(items)
                .unwrap_or_default(),
            _ => Vec::new(),
        };

        let mut entry: MenuEntry = match serde_json::from_value(record) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(
                    menu = %identifier,
                    position,
                    dropped_children = children.len(),
                    error = %e,
                    "skipping unreadable menu entry"
                );
                skipped += 1;
                position += 1;
                continue;
            }
        };
        position += 1;

        if let Some((parent_id, parent_depth)) = enclosing {
            entry.parent_id = Some(parent_id);
            entry.depth = parent_depth.saturating_add(1);
        }

        let link = (entry.id.clone(), entry.depth);
        pending.extend(
            children
                .into_iter()
                .rev()
                .map(|child| (child, Some(link.clone()))),
        );
        entries.push(entry);
    }

    debug!(menu = %identifier, entries = entries.len(), skipped, "loaded menu");

    MenuDocument {
        menu_id,
        identifier,
        entries,
        skipped,
    }
}

/// File-backed menu source
#[derive(Debug, Clone)]
pub struct JsonFileMenuSource {
    path: PathBuf,
}

impl JsonFileMenuSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_payload(&self) -> MenuResult<MenuPayload> {
        let content = fs::read_to_string(&self.path)?;
        MenuPayload::from_json(&content)
    }
}

impl MenuSource for JsonFileMenuSource {
    fn load_entries(&self, identifier: Option<&str>) -> MenuResult<Vec<MenuEntry>> {
        let payload = self.load_payload()?;
        Ok(payload.select(identifier)?.entries.clone())
    }
}
