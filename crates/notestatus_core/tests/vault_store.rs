use chrono::NaiveDate;
use notestatus_core::{
    open_vault, DocumentStore, FixedClock, FrontMatterApi, StatusService, StoreError,
};
use std::fs;
use std::path::{Path, PathBuf};

#[test]
fn status_flow_round_trips_through_files_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("task.md"), "# Errand\n\nbuy stamps\n").unwrap();

    let mut store = open_vault(dir.path()).unwrap();
    store.set_active(Some(PathBuf::from("task.md")));
    let meta = FrontMatterApi::new(&store);
    let service = StatusService::new(&store, meta, fixed_clock());

    service.set_status_waiting().unwrap();

    let written = fs::read_to_string(dir.path().join("task.md")).unwrap();
    assert_eq!(
        written,
        "---\nstatus: waiting\nwaiting-since: 2024-06-15\n---\n# Errand\n\nbuy stamps\n"
    );
}

#[test]
fn vault_reads_and_writes_nested_documents() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("projects")).unwrap();
    fs::write(dir.path().join("projects/launch.md"), "status: todo\n\nnotes").unwrap();

    let store = open_vault(dir.path()).unwrap();
    let content = store.read(Path::new("projects/launch.md")).unwrap();
    assert_eq!(content, "status: todo\n\nnotes");

    store
        .modify(Path::new("projects/launch.md"), "status: someday\n\nnotes")
        .unwrap();
    assert_eq!(
        fs::read_to_string(dir.path().join("projects/launch.md")).unwrap(),
        "status: someday\n\nnotes"
    );
}

#[test]
fn vault_rejects_paths_that_escape_the_root() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_vault(dir.path()).unwrap();

    let err = store.read(Path::new("../outside.md")).unwrap_err();
    assert!(matches!(err, StoreError::OutsideVaultRoot(_)));

    let err = store.modify(Path::new("/etc/outside.md"), "x").unwrap_err();
    assert!(matches!(err, StoreError::OutsideVaultRoot(_)));
}

#[cfg(unix)]
#[test]
fn vault_rejects_symlinks_that_leave_the_root() {
    use std::os::unix::fs::symlink;

    let vault = tempfile::tempdir().unwrap();
    let outside = tempfile::tempdir().unwrap();
    fs::write(outside.path().join("secret.md"), "status: todo\n").unwrap();
    symlink(
        outside.path().join("secret.md"),
        vault.path().join("leak.md"),
    )
    .unwrap();

    let store = open_vault(vault.path()).unwrap();

    let err = store.read(Path::new("leak.md")).unwrap_err();
    assert!(matches!(err, StoreError::OutsideVaultRoot(_)));

    let err = store
        .modify(Path::new("leak.md"), "status: someday\n")
        .unwrap_err();
    assert!(matches!(err, StoreError::OutsideVaultRoot(_)));
    assert_eq!(
        fs::read_to_string(outside.path().join("secret.md")).unwrap(),
        "status: todo\n"
    );
}

#[test]
fn open_vault_canonicalizes_the_root() {
    let dir = tempfile::tempdir().unwrap();

    let store = open_vault(dir.path()).unwrap();

    assert_eq!(store.root(), dir.path().canonicalize().unwrap());
}

#[test]
fn open_vault_fails_on_missing_root() {
    let dir = tempfile::tempdir().unwrap();

    let err = open_vault(dir.path().join("missing")).unwrap_err();
    assert!(matches!(err, StoreError::VaultRootInvalid(_)));
}

#[test]
fn reading_a_missing_note_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_vault(dir.path()).unwrap();

    let err = store.read(Path::new("missing.md")).unwrap_err();
    assert!(matches!(err, StoreError::DocumentNotFound(_)));
}

fn fixed_clock() -> FixedClock {
    FixedClock::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
}
