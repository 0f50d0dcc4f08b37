//! Property tests for tree construction.

use std::collections::{HashMap, HashSet, VecDeque};

use proptest::prelude::*;

use menutree::{build, MenuEntry};

use super::strategies::flat_menu;

/// Distinct ids reachable from depth-0 entries through valid parent links.
fn expected_reachable(entries: &[MenuEntry]) -> usize {
    let known: HashSet<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
    for entry in entries {
        if let Some(parent) = &entry.parent_id {
            if known.contains(parent.as_str()) {
                children
                    .entry(parent.as_str())
                    .or_default()
                    .push(entry.id.as_str());
            }
        }
    }

    let mut seen = HashSet::new();
    let mut queue: VecDeque<&str> = entries
        .iter()
        .filter(|e| e.depth == 0)
        .map(|e| e.id.as_str())
        .collect();
    while let Some(id) = queue.pop_front() {
        if seen.insert(id) {
            if let Some(kids) = children.get(id) {
                queue.extend(kids.iter().copied());
            }
        }
    }
    seen.len()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The forest holds exactly the entries reachable from a root.
    #[test]
    fn property_reachable_count_matches(entries in flat_menu(24)) {
        let forest = build(&entries);
        prop_assert_eq!(forest.len(), entries.len());
        prop_assert_eq!(forest.reachable_count(), expected_reachable(&entries));
    }

    /// PROPERTY: Roots are exactly the depth-0 entries, in input order.
    #[test]
    fn property_roots_are_depth_zero_in_order(entries in flat_menu(24)) {
        let forest = build(&entries);
        let roots: Vec<&str> = forest.roots().map(|r| r.id().as_str()).collect();
        let expected: Vec<&str> = entries
            .iter()
            .filter(|e| e.depth == 0)
            .map(|e| e.id.as_str())
            .collect();
        prop_assert_eq!(roots, expected);
    }

    /// PROPERTY: Children appear in the same relative order as in the input.
    #[test]
    fn property_sibling_order_follows_input(entries in flat_menu(24)) {
        let position: HashMap<&str, usize> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.as_str(), i))
            .collect();

        let forest = build(&entries);
        let mut stack: Vec<_> = forest.roots().collect();
        let mut visited = HashSet::new();
        while let Some(node) = stack.pop() {
            if !visited.insert(node.id().as_str()) {
                continue;
            }
            let order: Vec<usize> = node.children().map(|c| position[c.id().as_str()]).collect();
            prop_assert!(order.windows(2).all(|w| w[0] < w[1]), "children out of order: {:?}", order);
            stack.extend(node.children());
        }
    }

    /// PROPERTY: Every linked child names its parent; dangling entries are never linked.
    #[test]
    fn property_children_reference_their_parent(entries in flat_menu(24)) {
        let forest = build(&entries);
        let mut stack: Vec<_> = forest.roots().collect();
        let mut visited = HashSet::new();
        while let Some(node) = stack.pop() {
            if !visited.insert(node.id().as_str()) {
                continue;
            }
            for child in node.children() {
                prop_assert_eq!(child.entry().parent_id.as_ref(), Some(node.id()));
            }
            stack.extend(node.children());
        }
    }

    /// PROPERTY: Building never mutates the input.
    #[test]
    fn property_build_leaves_input_untouched(entries in flat_menu(16)) {
        let before = entries.clone();
        let _ = build(&entries);
        prop_assert_eq!(entries, before);
    }
}
