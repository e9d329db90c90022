use std::path::Path;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use vaultpress::SyncReport;

pub fn render_sync_header(
    vault: &Path,
    content: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Sync, "VaultPress Sync");
    header.add("Found Obsidian vault at", vault.display().to_string());
    header.add("Content", content.display().to_string());
    header.render(supports_color, supports_unicode)
}

pub fn render_sync_report(
    report: &SyncReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if report.created_publish_folder {
        return format!(
            "{} Creating publish folder at {}\n  Add notes to it and run sync again.\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            report.publish_dir.display()
        );
    }

    let mut out = String::new();

    for file in &report.synced {
        out.push_str(&format!(
            "{} Synced: {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            file.name()
        ));
    }

    for failure in &report.failures {
        out.push_str(&format!(
            "{} Error syncing {}: {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            failure.file,
            failure.message
        ));
    }

    let summary = if report.is_success() {
        ColoredText::success(format!("Synced {} files.", report.synced_count()))
    } else {
        ColoredText::warning(format!(
            "Synced {} files, {} failed.",
            report.synced_count(),
            report.failed_count()
        ))
    };
    out.push_str(&summary.bold().render(supports_color));
    out.push('\n');
    out
}
