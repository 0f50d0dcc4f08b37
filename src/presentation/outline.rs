//! Text outline of an annotated menu
//!
//! ```text
//! > Women (/women.html)
//!   - Shoes (/shoes.html) *
//!     - Boots (/boots.html)
//! - About us (/about-us)
//! ```
//!
//! `>` marks the top-level item of the active branch, `*` the active node.

use std::fmt::Write;

use crate::domain::entities::{AnnotatedMenu, TreeNode};

/// Render the menu as an indented outline, one node per line.
pub fn render_outline(menu: &AnnotatedMenu) -> String {
    let mut out = String::new();
    for node in &menu.nodes {
        let marker = if menu.is_active_branch(&node.id) {
            '>'
        } else {
            '-'
        };
        render_node(&mut out, node, 0, marker);
    }
    out
}

fn render_node(out: &mut String, node: &TreeNode, level: usize, marker: char) {
    let label = if node.title.is_empty() {
        format!("[#{}]", node.id)
    } else {
        node.title.clone()
    };

    let _ = write!(out, "{:indent$}{} {}", "", marker, label, indent = level * 2);
    if let Some(url) = &node.url {
        let _ = write!(out, " ({})", url);
    }
    if node.is_active {
        out.push_str(" *");
    }
    out.push('\n');

    for child in &node.children {
        render_node(out, child, level + 1, '-');
    }
}
