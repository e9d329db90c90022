//! Tests for the sync use case

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::NaiveDate;
use tempfile::tempdir;

use super::{FailureStage, SyncOptions, SyncUseCase};
use crate::domain::ports::{FileListing, FileSystem, FsError, FsResult};
use crate::infrastructure::fs::LocalFs;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, 2).unwrap()
}

/// In-memory file system whose reads fail for chosen paths
#[derive(Default)]
struct MockFileSystem {
    files: Mutex<BTreeMap<PathBuf, String>>,
    dirs: Mutex<BTreeSet<PathBuf>>,
    unreadable: BTreeSet<PathBuf>,
    unwritable: BTreeSet<PathBuf>,
    unlistable: BTreeSet<PathBuf>,
}

impl MockFileSystem {
    fn with_file(self, path: &str, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), content.to_string());
        self
    }

    fn with_dir(self, path: &str) -> Self {
        self.dirs.lock().unwrap().insert(PathBuf::from(path));
        self
    }

    fn unreadable(mut self, path: &str) -> Self {
        self.unreadable.insert(PathBuf::from(path));
        self
    }

    fn unwritable(mut self, path: &str) -> Self {
        self.unwritable.insert(PathBuf::from(path));
        self
    }

    fn unlistable(mut self, path: &str) -> Self {
        self.unlistable.insert(PathBuf::from(path));
        self
    }

    fn content(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }
}

impl FileSystem for &MockFileSystem {
    fn read(&self, path: &Path) -> FsResult<String> {
        if self.unreadable.contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        if self.unwritable.contains(path) {
            return Err(FsError::Other("disk full".to_string()));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path) || self.files.lock().unwrap().contains_key(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        self.dirs.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }

    fn list_files(&self, root: &Path) -> FsResult<FileListing> {
        let files = self
            .files
            .lock()
            .unwrap()
            .keys()
            .filter(|p| p.starts_with(root))
            .filter(|p| !self.unlistable.iter().any(|dir| p.starts_with(dir)))
            .cloned()
            .collect();
        let unreadable = self
            .unlistable
            .iter()
            .filter(|dir| dir.starts_with(root))
            .map(|dir| (dir.clone(), format!("{}: Permission denied", dir.display())))
            .collect();
        Ok(FileListing { files, unreadable })
    }
}

#[test]
fn per_file_failure_does_not_stop_the_run() {
    let mock = MockFileSystem::default()
        .with_dir("/vault/publish")
        .with_file("/vault/publish/a.md", "# A\n\nfirst")
        .with_file("/vault/publish/b.md", "# B\n\nsecond")
        .with_file("/vault/publish/c.md", "# C\n\nthird")
        .unreadable("/vault/publish/b.md");

    let report = SyncUseCase::new(&mock, SyncOptions::new("/vault", "/site/content"))
        .with_date(day())
        .run()
        .unwrap();

    assert_eq!(report.synced_count(), 2);
    assert_eq!(report.failed_count(), 1);
    assert_eq!(report.failures[0].file, "b.md");
    assert_eq!(report.failures[0].stage, FailureStage::Read);
    assert!(report.failures[0].message.contains("Permission denied"));

    assert!(mock.content("/site/content/a.md").is_some());
    assert!(mock.content("/site/content/b.md").is_none());
    assert!(mock.content("/site/content/c.md").is_some());
}

#[test]
fn write_failure_is_recorded() {
    let mock = MockFileSystem::default()
        .with_dir("/vault/publish")
        .with_file("/vault/publish/a.md", "body")
        .with_file("/vault/publish/b.md", "body")
        .unwritable("/site/content/a.md");

    let report = SyncUseCase::new(&mock, SyncOptions::new("/vault", "/site/content"))
        .with_date(day())
        .run()
        .unwrap();

    assert_eq!(report.synced_count(), 1);
    assert_eq!(report.failures[0].file, "a.md");
    assert_eq!(report.failures[0].stage, FailureStage::Write);
    assert_eq!(report.failures[0].message, "disk full");
}

#[test]
fn converted_page_written_under_same_name() {
    let mock = MockFileSystem::default()
        .with_dir("/vault/publish")
        .with_file("/vault/publish/evening-rain_draft.md", "No heading here");

    let report = SyncUseCase::new(&mock, SyncOptions::new("/vault", "/site/content"))
        .with_date(day())
        .run()
        .unwrap();

    assert_eq!(
        report.synced[0].target,
        PathBuf::from("/site/content/evening-rain_draft.md")
    );
    assert_eq!(report.synced[0].name(), "evening-rain_draft.md");
    assert_eq!(
        mock.content("/site/content/evening-rain_draft.md").unwrap(),
        "+++\ntitle = \"Evening Rain Draft\"\ndate = 2024-11-02\n+++\n\nNo heading here"
    );
}

#[test]
fn non_markdown_files_are_ignored() {
    let mock = MockFileSystem::default()
        .with_dir("/vault/publish")
        .with_file("/vault/publish/poem.md", "x")
        .with_file("/vault/publish/cover.png", "binary")
        .with_file("/vault/publish/notes.txt", "y");

    let report = SyncUseCase::new(&mock, SyncOptions::new("/vault", "/site/content"))
        .with_date(day())
        .run()
        .unwrap();

    assert_eq!(report.synced_count(), 1);
    assert!(mock.content("/site/content/cover.png").is_none());
}

#[test]
fn missing_publish_folder_is_created_and_nothing_synced() {
    let dir = tempdir().unwrap();
    let vault = dir.path().join("vault");
    fs::create_dir_all(&vault).unwrap();
    let content = dir.path().join("content");

    let report = SyncUseCase::new(LocalFs::new(), SyncOptions::new(&vault, &content))
        .run()
        .unwrap();

    assert!(report.created_publish_folder);
    assert_eq!(report.synced_count(), 0);
    assert!(report.is_success());
    assert!(vault.join("publish").is_dir());
    assert!(content.is_dir());
}

#[test]
fn nested_notes_are_flattened_and_collisions_overwrite_in_path_order() {
    let dir = tempdir().unwrap();
    let publish = dir.path().join("vault/publish");
    fs::create_dir_all(publish.join("a")).unwrap();
    fs::create_dir_all(publish.join("b")).unwrap();
    fs::write(publish.join("a/poem.md"), "# From A").unwrap();
    fs::write(publish.join("b/poem.md"), "# From B").unwrap();
    fs::write(publish.join("solo.md"), "# Solo").unwrap();
    let content = dir.path().join("content");

    let report = SyncUseCase::new(
        LocalFs::new(),
        SyncOptions::new(dir.path().join("vault"), &content),
    )
    .with_date(day())
    .run()
    .unwrap();

    assert_eq!(report.synced_count(), 3);
    let written = fs::read_to_string(content.join("poem.md")).unwrap();
    assert!(written.contains("title = \"From B\""));
    assert!(content.join("solo.md").exists());
    assert!(!content.join("a").exists());
}

#[test]
fn invalid_utf8_note_fails_alone_on_disk() {
    let dir = tempdir().unwrap();
    let publish = dir.path().join("vault/publish");
    fs::create_dir_all(&publish).unwrap();
    fs::write(publish.join("1-first.md"), "# First").unwrap();
    fs::write(publish.join("2-broken.md"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();
    fs::write(publish.join("3-third.md"), "# Third").unwrap();
    let content = dir.path().join("content");

    let report = SyncUseCase::new(
        LocalFs::new(),
        SyncOptions::new(dir.path().join("vault"), &content),
    )
    .run()
    .unwrap();

    assert_eq!(report.synced_count(), 2);
    assert_eq!(report.failed_count(), 1);
    assert_eq!(report.failures[0].file, "2-broken.md");
    assert!(content.join("1-first.md").exists());
    assert!(!content.join("2-broken.md").exists());
    assert!(content.join("3-third.md").exists());
}

#[test]
fn already_converted_pages_pass_through() {
    let dir = tempdir().unwrap();
    let publish = dir.path().join("vault/publish");
    fs::create_dir_all(&publish).unwrap();
    let page = "+++\ntitle = \"Kept\"\ndate = 2001-01-01\n+++\n\nBody\n";
    fs::write(publish.join("kept.md"), page).unwrap();
    let content = dir.path().join("content");

    SyncUseCase::new(
        LocalFs::new(),
        SyncOptions::new(dir.path().join("vault"), &content),
    )
    .run()
    .unwrap();

    assert_eq!(fs::read_to_string(content.join("kept.md")).unwrap(), page);
}

#[test]
fn stale_pages_are_not_deleted() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("vault/publish")).unwrap();
    let content = dir.path().join("content");
    fs::create_dir_all(&content).unwrap();
    fs::write(content.join("old.md"), "stale").unwrap();

    SyncUseCase::new(
        LocalFs::new(),
        SyncOptions::new(dir.path().join("vault"), &content),
    )
    .run()
    .unwrap();

    assert_eq!(fs::read_to_string(content.join("old.md")).unwrap(), "stale");
}

#[test]
fn custom_publish_folder_and_extensions() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("vault/out");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("a.markdown"), "# A").unwrap();
    fs::write(out.join("b.md"), "# B").unwrap();
    let content = dir.path().join("content");

    let options = SyncOptions::new(dir.path().join("vault"), &content)
        .with_publish_folder("out")
        .with_extensions(crate::domain::value_objects::MarkdownExtensions::new(["markdown"]));
    let report = SyncUseCase::new(LocalFs::new(), options).run().unwrap();

    assert_eq!(report.synced_count(), 1);
    assert!(content.join("a.markdown").exists());
    assert!(!content.join("b.md").exists());
}

#[test]
fn report_serializes_to_json() {
    let mock = MockFileSystem::default()
        .with_dir("/vault/publish")
        .with_file("/vault/publish/a.md", "x")
        .with_file("/vault/publish/b.md", "y")
        .unreadable("/vault/publish/b.md");

    let report = SyncUseCase::new(&mock, SyncOptions::new("/vault", "/site/content"))
        .with_date(day())
        .run()
        .unwrap();
    let json = report.to_json();

    assert!(json.contains("\"created_publish_folder\":false"));
    assert!(json.contains("\"stage\":\"read\""));
    assert!(json.contains("\"file\":\"b.md\""));
}

#[test]
fn unreadable_subfolder_is_reported_as_failure() {
    let mock = MockFileSystem::default()
        .with_dir("/vault/publish")
        .with_file("/vault/publish/open.md", "# Open")
        .with_file("/vault/publish/locked/hidden.md", "# Hidden")
        .unlistable("/vault/publish/locked");

    let report = SyncUseCase::new(&mock, SyncOptions::new("/vault", "/site/content"))
        .with_date(day())
        .run()
        .unwrap();

    assert_eq!(report.synced_count(), 1);
    assert_eq!(report.failed_count(), 1);
    assert_eq!(report.failures[0].file, "locked");
    assert_eq!(report.failures[0].stage, FailureStage::List);
    assert!(report.failures[0].message.contains("Permission denied"));
    assert!(!report.is_success());
    assert!(mock.content("/site/content/hidden.md").is_none());
}

#[cfg(unix)]
#[test]
fn symlinked_notes_are_synced() {
    let dir = tempdir().unwrap();
    let vault = dir.path().join("vault");
    let publish = vault.join("publish");
    let drafts = vault.join("drafts");
    fs::create_dir_all(&publish).unwrap();
    fs::create_dir_all(&drafts).unwrap();
    fs::write(publish.join("plain.md"), "# Plain").unwrap();
    fs::write(drafts.join("linked.md"), "# Linked\n\nfrom drafts").unwrap();
    std::os::unix::fs::symlink(drafts.join("linked.md"), publish.join("linked.md")).unwrap();
    let content = dir.path().join("content");

    let report = SyncUseCase::new(LocalFs::new(), SyncOptions::new(&vault, &content))
        .with_date(day())
        .run()
        .unwrap();

    assert_eq!(report.synced_count(), 2);
    assert_eq!(report.failed_count(), 0);
    let page = fs::read_to_string(content.join("linked.md")).unwrap();
    assert!(page.contains("title = \"Linked\""));
    assert!(page.ends_with("from drafts"));
}
