//! Arena-backed menu forest
//!
//! Produced by [`TreeBuilder`](crate::domain::services::TreeBuilder). Every
//! entry lives in one slot; parent/child links are slot indices, so the
//! structure can hold cyclic input without aliasing. Walking it safely is
//! the consumer's job (the annotator guards against cycles).

use std::collections::HashSet;
use std::fmt;

use crate::domain::entities::MenuEntry;
use crate::domain::value_objects::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Slot {
    pub(crate) entry: MenuEntry,
    pub(crate) children: Vec<usize>,
}

/// Non-fatal problem found while wiring the forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildDiagnostic {
    /// `parent_id` does not match any entry; the child was not linked
    DanglingParent { id: NodeId, parent_id: NodeId },
    /// Same id seen more than once; the last occurrence owns the id
    DuplicateId { id: NodeId },
}

impl fmt::Display for BuildDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildDiagnostic::DanglingParent { id, parent_id } => {
                write!(f, "node '{}' references missing parent '{}'", id, parent_id)
            }
            BuildDiagnostic::DuplicateId { id } => write!(f, "duplicate node id '{}'", id),
        }
    }
}

/// Flat entries wired into parent/child lists, rooted at `depth == 0` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuForest {
    pub(crate) slots: Vec<Slot>,
    pub(crate) roots: Vec<usize>,
    pub(crate) diagnostics: Vec<BuildDiagnostic>,
}

impl MenuForest {
    /// Number of entries held, linked or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Top-level nodes in flat-list order.
    pub fn roots(&self) -> impl Iterator<Item = ForestNode<'_>> + '_ {
        self.roots.iter().map(move |&index| ForestNode {
            forest: self,
            index,
        })
    }

    pub fn diagnostics(&self) -> &[BuildDiagnostic] {
        &self.diagnostics
    }

    /// Count of distinct entries reachable from a root through child links.
    pub fn reachable_count(&self) -> usize {
        let mut seen = HashSet::new();
        let mut stack: Vec<usize> = self.roots.clone();
        while let Some(index) = stack.pop() {
            if seen.insert(index) {
                stack.extend(self.slots[index].children.iter().copied());
            }
        }
        seen.len()
    }
}

/// Borrowed view of one forest node.
#[derive(Debug, Clone, Copy)]
pub struct ForestNode<'a> {
    forest: &'a MenuForest,
    index: usize,
}

impl<'a> ForestNode<'a> {
    pub fn entry(&self) -> &'a MenuEntry {
        &self.forest.slots[self.index].entry
    }

    pub fn id(&self) -> &'a NodeId {
        &self.entry().id
    }

    pub fn children(&self) -> impl Iterator<Item = ForestNode<'a>> + 'a {
        let forest = self.forest;
        forest.slots[self.index]
            .children
            .iter()
            .map(move |&index| ForestNode { forest, index })
    }

    pub fn child_count(&self) -> usize {
        self.forest.slots[self.index].children.len()
    }
}
