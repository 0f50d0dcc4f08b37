//! Tree construction from flat menu entries.
//!
//! Two passes over the input, O(n):
//!
//! 1. Copy every entry into an arena slot and index slots by id.
//! 2. Link every entry whose `parent_id` resolves into its parent's child list.
//!
//! Roots are the `depth == 0` slots, read after wiring. Links are one level
//! deep; cycles in the input survive as cycles in the arena.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::entities::{BuildDiagnostic, MenuEntry, MenuForest, Slot};
use crate::domain::value_objects::NodeId;

/// Builds a [`MenuForest`] from parent-referencing records.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder;

impl TreeBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, entries: &[MenuEntry]) -> MenuForest {
        let mut slots = Vec::with_capacity(entries.len());
        let mut lookup: HashMap<&NodeId, usize> = HashMap::with_capacity(entries.len());
        let mut diagnostics = Vec::new();

        for (index, entry) in entries.iter().enumerate() {
            slots.push(Slot {
                entry: entry.clone(),
                children: Vec::new(),
            });
            if lookup.insert(&entry.id, index).is_some() {
                warn!(node = %entry.id, "duplicate menu node id; last occurrence wins");
                diagnostics.push(BuildDiagnostic::DuplicateId {
                    id: entry.id.clone(),
                });
            }
        }

        for (index, entry) in entries.iter().enumerate() {
            let Some(parent_id) = &entry.parent_id else {
                continue;
            };
            match lookup.get(parent_id) {
                Some(&parent) => slots[parent].children.push(index),
                None => {
                    warn!(node = %entry.id, parent = %parent_id, "menu node references missing parent; not linked");
                    diagnostics.push(BuildDiagnostic::DanglingParent {
                        id: entry.id.clone(),
                        parent_id: parent_id.clone(),
                    });
                }
            }
        }

        let roots: Vec<usize> = slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.entry.is_top_level())
            .map(|(index, _)| index)
            .collect();

        debug!(
            entries = entries.len(),
            roots = roots.len(),
            diagnostics = diagnostics.len(),
            "built menu forest"
        );

        MenuForest {
            slots,
            roots,
            diagnostics,
        }
    }
}

/// Build a forest with the default builder.
pub fn build(entries: &[MenuEntry]) -> MenuForest {
    TreeBuilder::new().build(entries)
}
