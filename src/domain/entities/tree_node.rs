//! Annotated menu tree handed to the rendering layer.

use serde::Serialize;

use crate::domain::value_objects::{NodeId, NodeKind};

/// A menu entry with children, navigation URL, ancestor path and active flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub id: NodeId,
    pub parent_id: Option<NodeId>,
    pub depth: u32,
    pub title: String,
    pub kind: NodeKind,
    pub slug: Option<String>,
    /// Ids from the top-level ancestor down to and including this node
    pub path: Vec<NodeId>,
    pub url: Option<String>,
    pub is_active: bool,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Id of the top-level ancestor (the node itself for top-level nodes).
    pub fn top_level_id(&self) -> Option<&NodeId> {
        self.path.first()
    }

    /// Pre-order iterator over this node and its descendants.
    pub fn iter(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }
}

/// Depth-first, left-to-right traversal.
pub struct Preorder<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Result of annotating a forest for one location.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedMenu {
    pub nodes: Vec<TreeNode>,
    /// Top-level ancestor of the first active node, if any
    pub active_top_level_id: Option<NodeId>,
}

impl AnnotatedMenu {
    /// Pre-order iterator over every node of every tree.
    pub fn iter(&self) -> impl Iterator<Item = &TreeNode> + '_ {
        self.nodes.iter().flat_map(|node| node.iter())
    }

    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// First active node in depth-first, left-to-right order.
    pub fn active_node(&self) -> Option<&TreeNode> {
        self.iter().find(|node| node.is_active)
    }

    /// Whether `id` is the top-level item that should be highlighted.
    pub fn is_active_branch(&self, id: &NodeId) -> bool {
        self.active_top_level_id.as_ref() == Some(id)
    }

    pub fn find(&self, id: &NodeId) -> Option<&TreeNode> {
        self.iter().find(|node| &node.id == id)
    }
}
