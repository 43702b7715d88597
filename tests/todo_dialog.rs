use smart_mirror::gui::{parse_items, TodoDialog};
use smart_mirror::settings::{ConfigStore, Settings};
use tempfile::tempdir;

#[test]
fn save_drops_blank_lines_and_persists() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cfg.json");
    let mut store = ConfigStore::open(&path).unwrap();
    let mut dlg = TodoDialog::default();

    dlg.open(&store.settings().todo_items);
    *dlg.buffer_mut().unwrap() = "a\n\nb \n".into();
    let saved = dlg.save(&mut store).unwrap();

    assert_eq!(saved, Some(vec!["a".to_string(), "b".to_string()]));
    assert!(!dlg.is_open());
    assert_eq!(store.settings().todo_items, vec!["a", "b"]);
    assert_eq!(Settings::load(&path).unwrap().todo_items, vec!["a", "b"]);
}

#[test]
fn open_snapshots_items_one_per_line() {
    let mut dlg = TodoDialog::default();
    dlg.open(&["first".to_string(), "second".to_string()]);
    assert_eq!(dlg.buffer(), Some("first\nsecond"));
}

#[test]
fn cancel_leaves_settings_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cfg.json");
    let mut store = ConfigStore::open(&path).unwrap();
    let before = std::fs::read(&path).unwrap();
    let mut dlg = TodoDialog::default();

    dlg.open(&store.settings().todo_items);
    dlg.buffer_mut().unwrap().push_str("\nnew task");
    dlg.cancel();

    assert_eq!(dlg.save(&mut store).unwrap(), None);
    assert_eq!(store.settings(), &Settings::default());
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn clearing_buffer_empties_list() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cfg.json");
    let mut store = ConfigStore::open(&path).unwrap();
    let mut dlg = TodoDialog::default();

    dlg.open(&store.settings().todo_items);
    dlg.buffer_mut().unwrap().clear();
    dlg.save(&mut store).unwrap();

    assert!(Settings::load(&path).unwrap().todo_items.is_empty());
}

#[test]
fn failed_save_keeps_editor_open() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("gone");
    std::fs::create_dir(&sub).unwrap();
    let mut store = ConfigStore::open(sub.join("cfg.json")).unwrap();
    std::fs::remove_dir_all(&sub).unwrap();
    let mut dlg = TodoDialog::default();

    dlg.open(&[]);
    *dlg.buffer_mut().unwrap() = "keep me".into();

    assert!(dlg.save(&mut store).is_err());
    assert!(dlg.is_open());
    assert_eq!(dlg.buffer(), Some("keep me"));
}

#[test]
fn reopening_keeps_unsaved_edits() {
    let mut dlg = TodoDialog::default();
    dlg.open(&["a".to_string()]);
    dlg.buffer_mut().unwrap().push_str("\nunsaved typing");

    dlg.open(&["a".to_string()]);
    assert_eq!(dlg.buffer(), Some("a\nunsaved typing"));
}

#[test]
fn parse_items_trims_each_line() {
    assert_eq!(parse_items("  one  \ntwo\n\n   \nthree"), vec!["one", "two", "three"]);
}
