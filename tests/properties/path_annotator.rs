//! Property tests for path annotation and active-node resolution.

use proptest::prelude::*;

use menutree::{annotate, build, node_url, PathAnnotator, TreeNode, UrlSuffixes};

use super::strategies::flat_menu;

fn suffixes() -> UrlSuffixes {
    UrlSuffixes::new(".html", ".php")
}

fn check_paths(node: &TreeNode, parent_path: &[menutree::NodeId]) -> Result<(), TestCaseError> {
    prop_assert_eq!(node.path.len(), parent_path.len() + 1);
    prop_assert_eq!(&node.path[..parent_path.len()], parent_path);
    prop_assert_eq!(node.path.last(), Some(&node.id));
    for child in &node.children {
        check_paths(child, &node.path)?;
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Annotation terminates on any input and is idempotent.
    #[test]
    fn property_annotate_is_idempotent(entries in flat_menu(24), pick in any::<prop::sample::Index>()) {
        let forest = build(&entries);
        let location = entries
            .get(pick.index(entries.len().max(1)))
            .and_then(|e| node_url(e.kind, e.slug.as_deref(), &suffixes()))
            .unwrap_or_else(|| "/".to_string());

        let first = annotate(&forest, &location, &suffixes());
        let second = annotate(&build(&entries), &location, &suffixes());
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: Paths run from the top-level ancestor down to the node itself.
    #[test]
    fn property_paths_are_ancestor_chains(entries in flat_menu(24)) {
        let menu = annotate(&build(&entries), "/", &suffixes());
        for root in &menu.nodes {
            check_paths(root, &[])?;
        }
    }

    /// PROPERTY: A node is active iff its derived URL equals the location.
    #[test]
    fn property_active_iff_url_matches(entries in flat_menu(24), location in "/[a-c]{0,2}(\\.html|\\.php)?") {
        let menu = annotate(&build(&entries), &location, &suffixes());
        for node in menu.iter() {
            let url = node_url(node.kind, node.slug.as_deref(), &suffixes());
            prop_assert_eq!(&node.url, &url);
            prop_assert_eq!(node.is_active, url.as_deref() == Some(location.as_str()));
        }
    }

    /// PROPERTY: The active top-level id is path[0] of the first active node.
    #[test]
    fn property_active_top_level_is_first_match(entries in flat_menu(24), location in "/[a-c]{0,2}(\\.html|\\.php)?") {
        let menu = annotate(&build(&entries), &location, &suffixes());
        let expected = menu.iter().find(|n| n.is_active).map(|n| n.path[0].clone());
        prop_assert_eq!(menu.active_top_level_id, expected);
    }

    /// PROPERTY: No emitted node is deeper than the level cap.
    #[test]
    fn property_max_levels_caps_depth(entries in flat_menu(24), cap in 1usize..4) {
        let forest = build(&entries);
        let suffixes = suffixes();
        let menu = PathAnnotator::new("/", &suffixes)
            .with_max_levels(Some(cap))
            .annotate(&forest);
        prop_assert!(menu.iter().all(|n| n.path.len() <= cap));
    }
}
