use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;
use vaultpress::{LocalFs, SyncOptions, SyncUseCase, VaultLocator, WatchOptions, WatchUseCase};

pub struct SyncArgs<'a> {
    pub vault: Option<&'a Path>,
    pub content: Option<&'a Path>,
    pub watch: bool,
    pub interval: Option<u64>,
}

pub fn cmd_sync(
    args: SyncArgs<'_>,
    json: bool,
    color: Option<ColorWhen>,
) -> Result<()> {
    let cwd = std::env::current_dir().context("cannot determine the current directory")?;
    let config = super::load_config(&cwd)?;
    let ui = UiContext::new(json, color, &config);

    // CLI flag > VAULTPRESS_VAULT / config > discovery
    let explicit = args
        .vault
        .map(Path::to_path_buf)
        .or_else(|| config.vault.path.clone());
    let vault = VaultLocator::new()
        .with_marker(config.vault.marker.as_str())
        .locate(explicit.as_deref())?;

    let content: PathBuf = args
        .content
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.sync.content.clone());

    let options = SyncOptions::from_config(&vault, &content, &config);
    let sync = SyncUseCase::new(LocalFs::new(), options);

    if !json {
        print!(
            "{}",
            crate::ui::views::sync::render_sync_header(&vault, &content, ui.color, ui.unicode)
        );
    }

    let report = sync.run()?;
    if json {
        crate::ui::json::emit(&report.to_json())?;
    } else {
        print!(
            "{}",
            crate::ui::views::sync::render_sync_report(&report, ui.color, ui.unicode)
        );
    }

    if args.watch {
        let interval = args
            .interval
            .map(Duration::from_secs)
            .unwrap_or_else(|| config.watch_interval());
        run_watch(sync, interval, &content, &ui)?;
    }

    Ok(())
}

fn run_watch(
    sync: SyncUseCase<LocalFs>,
    interval: Duration,
    content: &Path,
    ui: &UiContext,
) -> Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    if !ui.json {
        let source = sync.options().publish_dir().display().to_string();
        print!(
            "{}",
            crate::ui::views::watch::render_watch_header(
                &source,
                &content.display().to_string(),
                interval.as_secs(),
                ui.color,
                ui.unicode
            )
        );
    }

    let watch = WatchUseCase::new(sync, WatchOptions::default().with_interval(interval));
    let (json, color, unicode) = (ui.json, ui.color, ui.unicode);

    watch.start(running, |event| {
        if json {
            let _ = crate::ui::json::emit(&event.to_json());
        } else {
            let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
            print!(
                "{}",
                crate::ui::views::watch::render_watch_event(&timestamp, &event, color, unicode)
            );
        }
    })?;

    Ok(())
}

