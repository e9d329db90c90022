//! Watch Use Case implementation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::Instant;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::sync::SyncUseCase;
use crate::domain::ports::FileSystem;
use crate::error::{VaultPressError, VaultPressResult};

use super::debounce::Debouncer;
use super::event::{ChangeSignal, WatchEvent, WatchOptions};

/// Watch Use Case
///
/// Owns its debounce state, so independent loops never share a timestamp.
pub struct WatchUseCase<FS: FileSystem> {
    sync: SyncUseCase<FS>,
    options: WatchOptions,
}

impl<FS: FileSystem> WatchUseCase<FS> {
    pub fn new(sync: SyncUseCase<FS>, options: WatchOptions) -> Self {
        Self { sync, options }
    }

    /// Start watching (blocking)
    ///
    /// Blocks until the running flag is cleared. Fails only if the publish
    /// folder cannot be created or observed.
    pub fn start<F>(&self, running: Arc<AtomicBool>, on_event: F) -> VaultPressResult<()>
    where
        F: Fn(WatchEvent),
    {
        let publish_dir = self.sync.options().publish_dir();
        self.sync.ensure_publish_folder()?;

        let watch_error = |e: notify::Error| VaultPressError::WatchSetup {
            path: publish_dir.clone(),
            message: e.to_string(),
        };

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| match res {
                Ok(event) => {
                    if let Some(signal) = ChangeSignal::from_event(&event, Instant::now()) {
                        let _ = tx.send(signal);
                    }
                }
                Err(e) => tracing::warn!(error = %e, "file watcher error"),
            },
            Config::default(),
        )
        .map_err(watch_error)?;

        watcher
            .watch(&publish_dir, RecursiveMode::Recursive)
            .map_err(watch_error)?;

        on_event(WatchEvent::WatchStarted {
            source: publish_dir.display().to_string(),
        });

        let syncs = self.run_loop(&rx, &running, &on_event);
        tracing::debug!(syncs, "watch loop finished");

        drop(watcher);
        on_event(WatchEvent::Shutdown);
        Ok(())
    }

    /// Drain change signals until cancelled or the sender hangs up.
    ///
    /// Returns how many syncs were run.
    pub fn run_loop<F>(&self, rx: &Receiver<ChangeSignal>, running: &AtomicBool, on_event: &F) -> usize
    where
        F: Fn(WatchEvent),
    {
        let mut debouncer = Debouncer::new(self.options.interval);
        let mut syncs = 0;

        while running.load(Ordering::SeqCst) {
            match rx.recv_timeout(self.options.poll) {
                Ok(signal) => {
                    if self.handle_signal(&signal, &mut debouncer, on_event) {
                        syncs += 1;
                    }
                }
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        syncs
    }

    fn handle_signal<F>(&self, signal: &ChangeSignal, debouncer: &mut Debouncer, on_event: &F) -> bool
    where
        F: Fn(WatchEvent),
    {
        let extensions = &self.sync.options().extensions;
        // A folder named like a note is not a note
        let Some(path) = signal
            .paths
            .iter()
            .find(|p| extensions.matches(p) && !p.is_dir())
        else {
            return false;
        };

        if !debouncer.should_sync(signal.at) {
            tracing::trace!(path = %path.display(), kind = ?signal.kind, "change debounced");
            return false;
        }

        on_event(WatchEvent::FileChanged {
            path: path.display().to_string(),
        });
        on_event(WatchEvent::SyncStarted);

        match self.sync.run() {
            Ok(report) => {
                for failure in &report.failures {
                    on_event(WatchEvent::FileFailed {
                        file: failure.file.clone(),
                        message: failure.message.clone(),
                    });
                }
                on_event(WatchEvent::SyncComplete {
                    synced: report.synced_count(),
                    failed: report.failed_count(),
                });
            }
            Err(e) => on_event(WatchEvent::Error {
                message: e.to_string(),
            }),
        }

        debouncer.record_sync(signal.at);
        true
    }
}
