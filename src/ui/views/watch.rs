use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use vaultpress::WatchEvent;

pub fn render_watch_header(
    source: &str,
    target: &str,
    interval_secs: u64,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "VaultPress Watch");
    header.add("Source", source);
    header.add("Target", target);
    header.add("Interval", format!("{}s", interval_secs));
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = format!("[{}]", timestamp);
    let icon = |icon: Icon| icon.colored(supports_color, supports_unicode);

    match event {
        WatchEvent::WatchStarted { source } => {
            format!("{} {} Watching: {}\n", prefix, icon(Icon::Watch), source)
        }
        WatchEvent::FileChanged { path } => {
            format!("{} {} Changed: {}\n", prefix, icon(Icon::Arrow), path)
        }
        WatchEvent::SyncStarted => format!("{} {} Syncing...\n", prefix, icon(Icon::Progress)),
        WatchEvent::FileFailed { file, message } => format!(
            "{} {} Error syncing {}: {}\n",
            prefix,
            icon(Icon::Error),
            file,
            message
        ),
        WatchEvent::SyncComplete { synced, failed } if *failed > 0 => format!(
            "{} {} Synced {} files, {} failed.\n",
            prefix,
            icon(Icon::Warning),
            synced,
            failed
        ),
        WatchEvent::SyncComplete { synced, .. } => format!(
            "{} {} Synced {} files.\n",
            prefix,
            icon(Icon::Success),
            synced
        ),
        WatchEvent::Error { message } => {
            format!("{} {} Error: {}\n", prefix, icon(Icon::Error), message)
        }
        WatchEvent::Shutdown => format!("\n{} {} Watch stopped.\n", prefix, icon(Icon::Watch)),
    }
}
