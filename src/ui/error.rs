use vaultpress::VaultPressError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::context::UiContext;

pub fn format_error(err: &anyhow::Error, ui: &UiContext) -> String {
    format_error_with(err, ui.color, ui.unicode)
}

fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let block = ErrorBlock::new(format!("{:#}", err));
    let block = match err.downcast_ref::<VaultPressError>().and_then(fix_hint) {
        Some(fix) => block.with_fix(fix),
        None => block,
    };
    block.render(supports_color, supports_unicode)
}

fn fix_hint(err: &VaultPressError) -> Option<&'static str> {
    match err {
        VaultPressError::VaultNotFound { .. } => {
            Some("Check the --vault path or the VAULTPRESS_VAULT variable.")
        }
        VaultPressError::VaultNotDiscovered { .. } => Some(
            "Pass --vault <path>, set VAULTPRESS_VAULT, or add [vault] path to vaultpress.toml.",
        ),
        VaultPressError::InvalidConfig { .. } => Some("Fix the TOML syntax and try again."),
        VaultPressError::CommandSpawn { .. } => {
            Some("Make sure the program is installed and on PATH.")
        }
        _ => None,
    }
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        let _ = crate::ui::json::emit_value(output);
        return;
    }

    eprint!("{}", format_error(err, ui));
}
