//! End-to-end flow: edit → persist → read back → render → animate.

use mcfmt::{
    ChatColor, GLYPHS, StoreError, StyleFlags, TextStore, WidthClass, load_text, mount, parse,
    present, purify, save_text,
};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Default)]
struct MemoryStore {
    fields: RefCell<HashMap<String, String>>,
}

impl TextStore for MemoryStore {
    fn load(&self, path: &str) -> Result<String, StoreError> {
        self.fields
            .borrow()
            .get(path)
            .cloned()
            .ok_or(StoreError::Status(404))
    }

    fn save(&self, path: &str, body: &str) -> Result<(), StoreError> {
        self.fields
            .borrow_mut()
            .insert(path.to_string(), body.to_string());
        Ok(())
    }
}

#[test]
fn motd_edit_cycle() {
    let store = MemoryStore::default();
    let typed = "§6Welcome§r to §kthe§r server§";

    // Edit boundary: sanitize, enforce the two-line policy, persist.
    let saved = save_text(&store, "/api/info/motd", typed, Some(2)).unwrap();
    assert_eq!(saved, "§6Welcome§r to §kthe§r server");

    // Read back for display.
    let fetched = load_text(&store, "/api/info/motd").unwrap();
    assert_eq!(fetched, saved);

    let runs = parse(&fetched);
    let texts: Vec<&str> = runs.iter().map(|r| r.as_str()).collect();
    assert_eq!(texts, vec!["Welcome", " to ", "the", " server"]);
    assert_eq!(runs[0].style.color, Some(ChatColor::Gold));
    assert!(runs[2].style.flags.contains(StyleFlags::OBFUSCATED));

    // Mount and animate: only the obfuscated run repaints.
    let mut units = mount(runs);
    let frame = units[2].display_text();
    assert_eq!(frame.chars().count(), 3);
    for ch in frame.chars() {
        assert!(GLYPHS.pool(WidthClass::Normal).contains(&ch));
    }
    assert_eq!(units[0].display_text(), "Welcome");

    // Text changed in the editor: tear down before the next parse cycle.
    let handle_ticks = units[2].handle().map(|h| h.ticks()).unwrap();
    assert!(handle_ticks >= 1);
    for unit in units {
        unit.unmount();
    }
}

#[test]
fn preview_clips_but_storage_keeps_all_lines() {
    let store = MemoryStore::default();
    let raw = "line1\nline2\nline3";

    // No caller limit: the sanitizer never truncates.
    save_text(&store, "/api/info/motd", raw, None).unwrap();
    assert_eq!(
        load_text(&store, "/api/info/motd").unwrap().split('\n').count(),
        3
    );

    // The renderer's own limit clips the preview only.
    let mut units = present(raw, 2);
    assert_eq!(units[0].display_text(), "line1\nline2");
}

#[test]
fn hostile_input_is_renderable_and_persistable() {
    let store = MemoryStore::default();
    let hostile = "§z§§§q§ §knope§r§";

    let saved = save_text(&store, "/api/info/motd", hostile, None).unwrap();
    assert_eq!(saved, purify(hostile));

    let fetched = load_text(&store, "/api/info/motd").unwrap();
    let units = present(&fetched, 2);
    // Parsing never fails; whatever survived sanitation renders.
    for unit in &units {
        assert!(!unit.run().text.is_empty());
    }
}
