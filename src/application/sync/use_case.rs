//! Sync Use Case implementation

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::domain::ports::FileSystem;
use crate::domain::services::{convert, fallback_title};
use crate::error::VaultPressResult;

use super::options::SyncOptions;
use super::result::{file_name, FailureStage, SyncFailure, SyncReport, SyncedFile};

/// Sync Use Case
///
/// Every run rewrites all matching pages; nothing is cached between runs and
/// pages whose notes were deleted are left in place.
pub struct SyncUseCase<FS: FileSystem> {
    fs: FS,
    options: SyncOptions,
    date: Option<NaiveDate>,
}

impl<FS: FileSystem> SyncUseCase<FS> {
    pub fn new(fs: FS, options: SyncOptions) -> Self {
        Self {
            fs,
            options,
            date: None,
        }
    }

    /// Stamp pages with a fixed date instead of today's.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    /// Run one full sync.
    ///
    /// Errors only when the content directory or publish folder cannot be
    /// created or listed. Per-note failures and unreadable subfolders land in
    /// the report.
    pub fn run(&self) -> VaultPressResult<SyncReport> {
        let publish_dir = self.options.publish_dir();
        let content_dir = &self.options.content;
        let mut report = SyncReport::new(&publish_dir, content_dir);

        self.fs.create_dir_all(content_dir)?;

        if self.ensure_publish_folder()? {
            report.created_publish_folder = true;
            return Ok(report);
        }

        let date = self
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let listing = self.fs.list_files(&publish_dir)?;
        let sources: Vec<PathBuf> = listing
            .files
            .into_iter()
            .filter(|p| self.options.extensions.matches(p))
            .collect();

        tracing::debug!(count = sources.len(), "notes found");

        // Notes below an unreadable folder cannot be named, so the folder is reported
        for (path, message) in listing.unreadable {
            report.failures.push(SyncFailure {
                file: file_name(&path),
                path,
                stage: FailureStage::List,
                message,
            });
        }

        for source in sources {
            match self.sync_file(&source, content_dir, date) {
                Ok(target) => {
                    tracing::debug!(source = %source.display(), target = %target.display(), "synced");
                    report.synced.push(SyncedFile { source, target });
                }
                Err((stage, message)) => {
                    tracing::warn!(source = %source.display(), ?stage, %message, "sync failed");
                    report.failures.push(SyncFailure {
                        file: file_name(&source),
                        path: source,
                        stage,
                        message,
                    });
                }
            }
        }

        Ok(report)
    }

    /// Create the publish folder if it is missing. Returns `true` if it was created.
    pub fn ensure_publish_folder(&self) -> VaultPressResult<bool> {
        let publish_dir = self.options.publish_dir();
        if self.fs.exists(&publish_dir) {
            return Ok(false);
        }
        tracing::info!(publish = %publish_dir.display(), "creating publish folder");
        self.fs.create_dir_all(&publish_dir)?;
        Ok(true)
    }

    fn sync_file(
        &self,
        source: &Path,
        content_dir: &Path,
        date: NaiveDate,
    ) -> Result<PathBuf, (FailureStage, String)> {
        let content = self
            .fs
            .read(source)
            .map_err(|e| (FailureStage::Read, e.to_string()))?;

        let page = convert(&content, &fallback_title(source), date);

        // Flat layout: same-named notes from different subfolders overwrite each other
        let target = match source.file_name() {
            Some(name) => content_dir.join(name),
            None => {
                return Err((
                    FailureStage::Write,
                    format!("{} has no file name", source.display()),
                ))
            }
        };

        self.fs
            .write(&target, &page)
            .map_err(|e| (FailureStage::Write, e.to_string()))?;

        Ok(target)
    }
}
