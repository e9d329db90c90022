use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;
use vaultpress::domain::ports::CommandSpec;
use vaultpress::{BuildOptions, BuildUseCase, SystemCommandRunner};

pub fn cmd_build(
    vault: Option<&Path>,
    serve: bool,
    watch_sync: bool,
    json: bool,
    color: Option<ColorWhen>,
) -> Result<()> {
    let cwd = std::env::current_dir().context("cannot determine the current directory")?;
    let config = super::load_config(&cwd)?;
    let ui = UiContext::new(json, color, &config);

    let exe = std::env::current_exe().context("cannot locate the vaultpress executable")?;
    let exe = exe.display().to_string();

    // The sync step's output is captured, so keep it free of escape codes.
    let mut sync_command = CommandSpec::new(exe.as_str()).args(["--color", "never", "sync"]);
    let mut watch_command = CommandSpec::new(exe.as_str()).args(["sync", "--watch"]);
    if let Some(vault) = vault {
        let vault = vault.display().to_string();
        sync_command = sync_command.args(["--vault", vault.as_str()]);
        watch_command = watch_command.args(["--vault", vault.as_str()]);
    }

    let build_command = config
        .build_command()
        .context("[build] command must name a program")?;

    let output_dir = if config.build.output_dir.is_absolute() {
        config.build.output_dir.clone()
    } else {
        cwd.join(&config.build.output_dir)
    };

    let mut options = BuildOptions::new(sync_command, build_command).with_output_dir(output_dir);
    if serve {
        let serve_command = config
            .serve_command()
            .context("[build] serve_command must name a program")?;
        options = options.with_serve(serve_command);
    }
    if watch_sync {
        options = options.with_watch(watch_command);
    }

    if serve || watch_sync {
        // Children receive Ctrl+C themselves; the pipeline moves on to the next step.
        ctrlc::set_handler(|| {}).context("failed to install Ctrl+C handler")?;
    }

    if !json {
        print!(
            "{}",
            crate::ui::views::build::render_build_header(&options, ui.color, ui.unicode)
        );
    }

    let outcome = BuildUseCase::new(SystemCommandRunner::new(), options).run(|event| {
        if json {
            let _ = crate::ui::json::emit(&event.to_json());
        } else {
            print!(
                "{}",
                crate::ui::views::build::render_build_event(&event, ui.color, ui.unicode)
            );
        }
    });

    if !outcome.is_success() {
        tracing::debug!(?outcome, "build pipeline failed");
        std::process::exit(outcome.exit_code());
    }

    Ok(())
}
