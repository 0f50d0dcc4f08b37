#![no_main]

use libfuzzer_sys::fuzz_target;
use menutree::{annotate, build, MenuPayload, UrlSuffixes};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(payload) = MenuPayload::from_json(content) else {
        return;
    };

    // Self-references, cycles and dangling ids must build and annotate
    // without panicking or looping
    let suffixes = UrlSuffixes::new(".html", ".html");
    for menu in payload.menus() {
        let forest = build(&menu.entries);
        let annotated = annotate(&forest, "/", &suffixes);
        assert!(annotated.node_count() >= annotated.nodes.len());
    }
});
