//! Shared generators for property tests.

use proptest::prelude::*;

use menutree::{MenuEntry, NodeId, NodeKind};

pub fn kind() -> impl Strategy<Value = NodeKind> {
    prop_oneof![
        Just(NodeKind::Category),
        Just(NodeKind::Product),
        Just(NodeKind::Page),
        Just(NodeKind::Other),
    ]
}

/// Flat menus with unique ids `0..n`. Parent references point anywhere in
/// `0..n + 4`, so some dangle and some form cycles.
pub fn flat_menu(max_len: usize) -> impl Strategy<Value = Vec<MenuEntry>> {
    (0..=max_len).prop_flat_map(|len| {
        proptest::collection::vec(
            (
                0u32..3,
                proptest::option::of(0..len + 4),
                kind(),
                proptest::option::of("[a-c]{0,2}"),
            ),
            len,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (depth, parent, kind, slug))| MenuEntry {
                    id: NodeId::from(i.to_string()),
                    parent_id: parent.map(|p| NodeId::from(p.to_string())),
                    depth,
                    title: format!("node {}", i),
                    kind,
                    slug,
                })
                .collect()
        })
    })
}
