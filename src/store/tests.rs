use super::*;
use std::path::PathBuf;

fn alias(name: &str, target: &str) -> Alias {
    let target = PathBuf::from(target);
    let working_directory = target.parent().map(Path::to_path_buf);
    Alias::new(name, target, working_directory).unwrap()
}

fn temp_store() -> (tempfile::TempDir, AliasStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = AliasStore::open(dir.path().join("urun_data").join("config")).unwrap();
    (dir, store)
}

#[test]
fn test_missing_file_is_empty_store() {
    let (_dir, store) = temp_store();
    assert!(store.is_empty());
    assert!(!store.path().exists());
}

#[test]
fn test_add_then_get() {
    let (_dir, mut store) = temp_store();
    store.add(alias("vlc", "/apps/vlc")).unwrap();
    let got = store.get("vlc").unwrap();
    assert_eq!(got.name, "vlc");
    assert_eq!(got.target, PathBuf::from("/apps/vlc"));
}

#[test]
fn test_add_creates_store_file() {
    let (_dir, mut store) = temp_store();
    store.add(alias("vlc", "/apps/vlc")).unwrap();
    assert!(store.path().exists());
    let reloaded = AliasStore::open(store.path()).unwrap();
    assert_eq!(reloaded.get("vlc").unwrap(), store.get("vlc").unwrap());
}

#[test]
fn test_names_are_case_sensitive() {
    let (_dir, mut store) = temp_store();
    store.add(alias("vlc", "/apps/vlc")).unwrap();
    store.add(alias("VLC", "/apps/VLC")).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.get("VLC").unwrap().target, PathBuf::from("/apps/VLC"));
}

#[test]
fn test_duplicate_add_is_rejected_and_keeps_first() {
    let (_dir, mut store) = temp_store();
    store.add(alias("vlc", "/apps/vlc")).unwrap();
    let err = store.add(alias("vlc", "/other/vlc")).unwrap_err();
    assert!(matches!(err, Error::AliasExists(ref n) if n == "vlc"));

    let listed: Vec<_> = store.list().collect();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].1.target, PathBuf::from("/apps/vlc"));

    let reloaded = AliasStore::open(store.path()).unwrap();
    assert_eq!(reloaded.get("vlc").unwrap().target, PathBuf::from("/apps/vlc"));
}

#[test]
fn test_remove_missing_leaves_store_unchanged() {
    let (_dir, mut store) = temp_store();
    store.add(alias("vlc", "/apps/vlc")).unwrap();
    let before = std::fs::read(store.path()).unwrap();

    let err = store.remove("mpv").unwrap_err();
    assert!(matches!(err, Error::AliasNotFound(ref n) if n == "mpv"));
    assert_eq!(store.len(), 1);
    assert_eq!(std::fs::read(store.path()).unwrap(), before);
}

#[test]
fn test_get_missing() {
    let (_dir, store) = temp_store();
    assert!(matches!(store.get("nope"), Err(Error::AliasNotFound(_))));
}

#[test]
fn test_list_preserves_insertion_order() {
    let (_dir, mut store) = temp_store();
    let names = ["zeta", "alpha", "mid", "beta"];
    for n in names {
        store.add(alias(n, &format!("/apps/{n}"))).unwrap();
    }
    let listed: Vec<&str> = store.list().map(|(n, _)| n).collect();
    assert_eq!(listed, names);

    // Restartable, and the order survives a reload.
    assert_eq!(store.list().count(), names.len());
    let reloaded = AliasStore::open(store.path()).unwrap();
    let listed: Vec<&str> = reloaded.list().map(|(n, _)| n).collect();
    assert_eq!(listed, names);
}

#[test]
fn test_add_list_remove_scenario() {
    let (_dir, mut store) = temp_store();
    store.add(alias("vlc", "/apps/vlc")).unwrap();

    let listed: Vec<_> = store.list().map(|(n, a)| (n.to_string(), a.clone())).collect();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].0, "vlc");
    assert_eq!(listed[0].1.target, PathBuf::from("/apps/vlc"));
    assert_eq!(listed[0].1.working_directory, Some(PathBuf::from("/apps")));

    let removed = store.remove("vlc").unwrap();
    assert_eq!(removed.name, "vlc");
    assert_eq!(store.list().count(), 0);
    assert!(AliasStore::open(store.path()).unwrap().is_empty());
}

#[test]
fn test_load_save_round_trip_is_byte_identical() {
    let (_dir, mut store) = temp_store();
    store.add(alias("vlc", "/apps/vlc")).unwrap();
    store
        .add(Alias::new("docs", PathBuf::from("/home/me/docs"), None).unwrap())
        .unwrap();
    let before = std::fs::read(store.path()).unwrap();

    let loaded = AliasStore::load(store.path()).unwrap();
    AliasStore::save(store.path(), &loaded).unwrap();
    assert_eq!(std::fs::read(store.path()).unwrap(), before);
}

#[test]
fn test_persisted_layout() {
    let (_dir, mut store) = temp_store();
    store.add(alias("vlc", "/apps/vlc")).unwrap();
    let content = std::fs::read_to_string(store.path()).unwrap();
    insta::assert_snapshot!(content, @r#"
    [[alias]]
    name = "vlc"
    target = "/apps/vlc"
    working_directory = "/apps"
    "#);
}

#[test]
fn test_no_temp_file_left_behind() {
    let (dir, mut store) = temp_store();
    store.add(alias("vlc", "/apps/vlc")).unwrap();
    let entries: Vec<_> = std::fs::read_dir(dir.path().join("urun_data"))
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("config")]);
}

#[test]
fn test_corrupt_file_is_refused_and_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config");
    let garbage = "[[alias]\nname = \"vlc\"\n";
    std::fs::write(&path, garbage).unwrap();

    let err = AliasStore::open(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigCorrupt { .. }));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), garbage);
}

#[test]
fn test_unknown_fields_are_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config");
    std::fs::write(&path, "[[alias]]\nname = \"vlc\"\ntraget = \"/apps/vlc\"\n").unwrap();
    assert!(matches!(AliasStore::open(&path), Err(Error::ConfigCorrupt { .. })));
}

#[test]
fn test_duplicate_names_in_file_are_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config");
    std::fs::write(
        &path,
        "[[alias]]\nname = \"a\"\ntarget = \"/x\"\n\n[[alias]]\nname = \"a\"\ntarget = \"/y\"\n",
    )
    .unwrap();
    let err = AliasStore::open(&path).unwrap_err();
    assert!(err.to_string().contains("defined twice"), "{err}");
}

#[test]
fn test_empty_target_in_file_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config");
    std::fs::write(&path, "[[alias]]\nname = \"a\"\ntarget = \"\"\n").unwrap();
    assert!(matches!(AliasStore::open(&path), Err(Error::ConfigCorrupt { .. })));
}

#[test]
fn test_missing_working_directory_uses_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config");
    std::fs::write(&path, "[[alias]]\nname = \"vlc\"\ntarget = \"/apps/vlc\"\n").unwrap();
    let store = AliasStore::open(&path).unwrap();
    let vlc = store.get("vlc").unwrap();
    assert_eq!(vlc.working_directory, None);
    assert_eq!(vlc.effective_working_directory(), PathBuf::from("/apps"));
}

#[test]
fn test_write_failure_rolls_back_memory() {
    let dir = tempfile::tempdir().unwrap();
    // The store's parent "directory" is a regular file, so it cannot be created.
    let blocker = dir.path().join("urun_data");
    std::fs::write(&blocker, b"").unwrap();
    let mut store = AliasStore::open(blocker.join("config")).unwrap();

    let err = store.add(alias("vlc", "/apps/vlc")).unwrap_err();
    assert!(matches!(err, Error::ConfigWriteError { .. }));
    assert!(store.is_empty());
}

#[test]
fn test_rename_keeps_position() {
    let (_dir, mut store) = temp_store();
    store.add(alias("a", "/apps/a")).unwrap();
    store.add(alias("b", "/apps/b")).unwrap();
    store.add(alias("c", "/apps/c")).unwrap();

    store.rename("b", "bee").unwrap();
    let listed: Vec<&str> = store.list().map(|(n, _)| n).collect();
    assert_eq!(listed, ["a", "bee", "c"]);
    assert_eq!(store.get("bee").unwrap().target, PathBuf::from("/apps/b"));
}

#[test]
fn test_rename_conflicts() {
    let (_dir, mut store) = temp_store();
    store.add(alias("a", "/apps/a")).unwrap();
    store.add(alias("b", "/apps/b")).unwrap();
    assert!(matches!(store.rename("a", "b"), Err(Error::AliasExists(_))));
    assert!(matches!(store.rename("zz", "y"), Err(Error::AliasNotFound(_))));
    assert!(matches!(store.rename("a", "list"), Err(Error::InvalidAlias { .. })));
}

#[test]
fn test_replace_swaps_target_in_place() {
    let (_dir, mut store) = temp_store();
    store.add(alias("a", "/apps/a")).unwrap();
    store.add(alias("b", "/apps/b")).unwrap();

    let previous = store.replace(alias("a", "/opt/a2")).unwrap();
    assert_eq!(previous.target, PathBuf::from("/apps/a"));
    let listed: Vec<_> = store.list().map(|(n, a)| (n, a.target.clone())).collect();
    assert_eq!(listed[0], ("a", PathBuf::from("/opt/a2")));
    assert!(matches!(store.replace(alias("zz", "/x")), Err(Error::AliasNotFound(_))));
}

#[test]
fn test_find_exact_partial_and_ambiguous() {
    let (_dir, mut store) = temp_store();
    store.add(alias("vlc", "/apps/vlc")).unwrap();
    store.add(alias("vim", "/apps/vim")).unwrap();
    store.add(alias("v", "/apps/v")).unwrap();

    assert_eq!(store.find("v").unwrap().name, "v");
    assert_eq!(store.find("lc").unwrap().name, "vlc");
    assert_eq!(store.find("vi").unwrap().name, "vim");
    assert!(matches!(store.find("nothing"), Err(Error::AliasNotFound(_))));

    store.add(alias("vinyl", "/apps/vinyl")).unwrap();
    match store.find("vi") {
        Err(Error::AmbiguousAlias { matches, .. }) => assert_eq!(matches, ["vim", "vinyl"]),
        other => panic!("expected ambiguity, got {other:?}"),
    }
}

#[test]
fn test_empty_target_is_never_persisted() {
    let (_dir, mut store) = temp_store();
    let blank = Alias { name: "x".to_string(), target: PathBuf::new(), working_directory: None };

    assert!(matches!(store.add(blank.clone()), Err(Error::TargetNotFound(_))));
    assert!(store.is_empty());
    assert!(!store.path().exists());

    store.add(alias("x", "/apps/x")).unwrap();
    assert!(matches!(store.replace(blank), Err(Error::TargetNotFound(_))));
    assert_eq!(store.get("x").unwrap().target, PathBuf::from("/apps/x"));

    let reloaded = AliasStore::open(store.path()).unwrap();
    assert_eq!(reloaded.get("x").unwrap().target, PathBuf::from("/apps/x"));
}

#[test]
fn test_directory_at_store_path_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AliasStore::open(dir.path()).unwrap_err();
    assert!(matches!(err, Error::ConfigRead { .. }), "got {err:?}");
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config");
    std::os::unix::fs::symlink(dir.path().join("gone"), &path).unwrap();

    let err = AliasStore::open(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigRead { .. }), "got {err:?}");
    assert!(std::fs::symlink_metadata(&path).unwrap().file_type().is_symlink());
}
