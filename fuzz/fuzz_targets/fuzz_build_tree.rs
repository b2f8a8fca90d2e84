#![no_main]

use jsonbrowser::{build_tree, parse_document, MenuLabels, Menu, ROOT_PATH};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parsing, tree building and menu rendering should never panic
    let Ok(value) = parse_document(data) else {
        return;
    };
    let root = build_tree(&value, ROOT_PATH);
    let labels = MenuLabels::default();
    let mut pending = vec![&root];
    while let Some(node) = pending.pop() {
        let menu = Menu::for_node(node, &labels);
        let _ = menu.action(menu.back_index());
        pending.extend(node.children.iter());
    }
});
