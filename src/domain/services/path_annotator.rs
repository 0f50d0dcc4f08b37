//! Path annotation and active-node resolution.
//!
//! Walks a [`MenuForest`] depth-first and produces owned [`TreeNode`]s with:
//!
//! - `url` derived from kind and slug (see [`node_url`])
//! - `path` from the top-level ancestor down to and including the node
//! - `is_active` when `url` equals the current location exactly
//!
//! The top-level id of the first active node (pre-order, left to right)
//! becomes [`AnnotatedMenu::active_top_level_id`].
//!
//! The walk keeps its own stack instead of recursing. A node whose id is
//! already on the current branch is emitted as a leaf, so cyclic input
//! always terminates. Branches deeper than [`MAX_DEPTH`] levels are cut
//! with a warning.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::entities::{AnnotatedMenu, ForestNode, MenuForest, TreeNode};
use crate::domain::value_objects::{NodeId, UrlSuffixes};

use super::url_resolver::node_url;

/// Hard limit on emitted levels, applied on top of any configured cap.
pub const MAX_DEPTH: usize = 64;

/// Annotates a forest for one location and one suffix configuration.
#[derive(Debug, Clone)]
pub struct PathAnnotator<'a> {
    location: &'a str,
    suffixes: &'a UrlSuffixes,
    max_levels: Option<usize>,
}

#[derive(Default)]
struct WalkState {
    on_branch: HashSet<NodeId>,
    active_top_level: Option<NodeId>,
    cycles_cut: usize,
    depth_cut: usize,
}

/// A node whose children are still being assembled.
struct Frame<'f> {
    node: TreeNode,
    /// Children left to visit, last one first
    pending: Vec<ForestNode<'f>>,
    on_branch: bool,
}

impl<'a> PathAnnotator<'a> {
    pub fn new(location: &'a str, suffixes: &'a UrlSuffixes) -> Self {
        Self {
            location,
            suffixes,
            max_levels: None,
        }
    }

    /// Cap the number of emitted levels. Nodes at the cap become leaves and
    /// anything deeper is left out. `Some(0)` behaves like `Some(1)`.
    pub fn with_max_levels(mut self, max_levels: Option<usize>) -> Self {
        self.max_levels = max_levels;
        self
    }

    pub fn annotate(&self, forest: &MenuForest) -> AnnotatedMenu {
        let mut state = WalkState::default();
        let mut nodes = Vec::new();
        for root in forest.roots() {
            self.walk(root, &mut state, &mut nodes);
        }

        if state.cycles_cut > 0 {
            warn!(
                cut = state.cycles_cut,
                "menu contains parent cycles; cyclic nodes rendered as leaves"
            );
        }
        if state.depth_cut > 0 {
            warn!(
                cut = state.depth_cut,
                max_depth = MAX_DEPTH,
                "menu nesting too deep; branches truncated"
            );
        }
        debug!(
            location = self.location,
            active_top_level = ?state.active_top_level,
            "annotated menu forest"
        );

        AnnotatedMenu {
            nodes,
            active_top_level_id: state.active_top_level,
        }
    }

    /// Annotate one tree, appending it to `out`. Children are attached to
    /// their parent when the child's own subtree is complete.
    fn walk<'f>(&self, root: ForestNode<'f>, state: &mut WalkState, out: &mut Vec<TreeNode>) {
        let mut stack = vec![self.enter(root, &[], state)];

        while let Some(mut frame) = stack.pop() {
            if let Some(child) = frame.pending.pop() {
                let next = self.enter(child, &frame.node.path, state);
                stack.push(frame);
                stack.push(next);
                continue;
            }

            if frame.on_branch {
                state.on_branch.remove(&frame.node.id);
            }
            match stack.last_mut() {
                Some(parent) => parent.node.children.push(frame.node),
                None => out.push(frame.node),
            }
        }
    }

    fn enter<'f>(
        &self,
        node: ForestNode<'f>,
        parent_path: &[NodeId],
        state: &mut WalkState,
    ) -> Frame<'f> {
        let entry = node.entry();
        let url = node_url(entry.kind, entry.slug.as_deref(), self.suffixes);

        let mut path = Vec::with_capacity(parent_path.len() + 1);
        path.extend_from_slice(parent_path);
        path.push(entry.id.clone());

        let is_active = url.as_deref() == Some(self.location);
        if is_active && state.active_top_level.is_none() {
            state.active_top_level = path.first().cloned();
        }

        let at_cap = self
            .max_levels
            .is_some_and(|max| path.len() >= max.max(1));

        let descend = if at_cap || node.child_count() == 0 {
            false
        } else if path.len() >= MAX_DEPTH {
            state.depth_cut += 1;
            false
        } else if !state.on_branch.insert(entry.id.clone()) {
            debug!(node = %entry.id, "cycle detected; not descending");
            state.cycles_cut += 1;
            false
        } else {
            true
        };

        let pending = if descend {
            let mut children: Vec<_> = node.children().collect();
            children.reverse();
            children
        } else {
            Vec::new()
        };

        Frame {
            node: TreeNode {
                id: entry.id.clone(),
                parent_id: entry.parent_id.clone(),
                depth: entry.depth,
                title: entry.title.clone(),
                kind: entry.kind,
                slug: entry.slug.clone(),
                path,
                url,
                is_active,
                children: Vec::new(),
            },
            pending,
            on_branch: descend,
        }
    }
}

/// Annotate with no configured level cap.
pub fn annotate(forest: &MenuForest, location: &str, suffixes: &UrlSuffixes) -> AnnotatedMenu {
    PathAnnotator::new(location, suffixes).annotate(forest)
}
