//! Test fixtures - reusable menu payloads for tests.

/// A two-menu payload in the storefront API shape (`nodes.items`).
///
/// main:
/// - Women (10, category `women`)
///   - Shoes (11, category `women/shoes`)
///     - Runner (12, product `runner`)
///   - About us (13, cms_page `about-us`)
/// - Sale (20, custom url, no link)
/// - Orphan (30, depth 1, parent 999 - dangling)
pub const STOREFRONT_PAYLOAD: &str = r#"{
    "menus": [
        {
            "menu_id": 1,
            "identifier": "main",
            "nodes": { "items": [
                { "node_id": 10, "parent_id": null, "level": 0, "title": "Women", "type": "category", "url_key": "women" },
                { "node_id": 11, "parent_id": 10, "level": 1, "title": "Shoes", "type": "category", "url_key": "women/shoes" },
                { "node_id": 12, "parent_id": 11, "level": 2, "title": "Runner", "type": "product", "url_key": "runner" },
                { "node_id": 13, "parent_id": 10, "level": 1, "title": "About us", "type": "cms_page", "url_key": "about-us" },
                { "node_id": 20, "parent_id": null, "level": 0, "title": "Sale", "type": "custom_url", "url_key": null },
                { "node_id": 30, "parent_id": 999, "level": 1, "title": "Orphan", "type": "category", "url_key": "orphan" }
            ] }
        },
        {
            "menu_id": 2,
            "identifier": "footer",
            "nodes": [
                { "node_id": 40, "level": 0, "title": "Contact", "type": "cms_page", "url_key": "contact" }
            ]
        }
    ]
}"#;

/// A bare entry array with no inconsistencies.
pub const CLEAN_PAYLOAD: &str = r#"[
    { "node_id": 1, "level": 0, "title": "Home", "type": "cms_page", "url_key": "home" },
    { "node_id": 2, "parent_id": 1, "level": 1, "title": "Gear", "type": "category", "url_key": "gear" }
]"#;

/// Two entries that are each other's parent.
pub const CYCLIC_PAYLOAD: &str = r#"[
    { "node_id": "a", "parent_id": "b", "level": 0, "title": "A", "type": "cms_page", "url_key": "a" },
    { "node_id": "b", "parent_id": "a", "level": 1, "title": "B", "type": "cms_page", "url_key": "b" }
]"#;

/// The storefront GraphQL response: `data.snowdogMenus.items`, with nodes
/// nested through `children` instead of `parent_id` / `level`.
pub const GRAPHQL_PAYLOAD: &str = r#"{
    "data": {
        "snowdogMenus": {
            "items": [
                {
                    "menu_id": 5,
                    "identifier": "siqueira-menu",
                    "nodes": { "items": [
                        { "node_id": 1, "title": "Women", "type": "category", "url_key": "women", "children": [
                            { "node_id": 2, "title": "Shoes", "type": "category", "url_key": "shoes", "children": [
                                { "node_id": 3, "title": "Runner", "type": "product", "url_key": "runner" }
                            ] }
                        ] },
                        { "node_id": 4, "title": "About us", "type": "cms_page", "url_key": "about-us", "children": [] }
                    ] }
                }
            ]
        }
    }
}"#;

/// A single parent chain `0 -> 1 -> ... -> len - 1`, all pages.
pub fn deep_chain_payload(len: usize) -> String {
    let entries: Vec<String> = (0..len)
        .map(|i| {
            let parent = if i == 0 {
                "null".to_string()
            } else {
                (i - 1).to_string()
            };
            format!(
                r#"{{"node_id": {i}, "parent_id": {parent}, "level": {i}, "title": "n{i}", "type": "cms_page", "url_key": "n{i}"}}"#
            )
        })
        .collect();
    format!("[{}]", entries.join(","))
}
