use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use vaultpress::{BuildEvent, BuildOptions};

pub fn render_build_header(
    options: &BuildOptions,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Build, "VaultPress Build");
    header.add("Build", options.build_command.to_string());
    header.add("Output", options.output_dir.display().to_string());
    if let Some(serve) = &options.serve_command {
        header.add("Serve", serve.to_string());
    }
    if options.watch_command.is_some() {
        header.add("Watch", "enabled");
    }
    header.render(supports_color, supports_unicode)
}

pub fn render_build_event(
    event: &BuildEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    match event {
        BuildEvent::StepStarted { step, command } => format!(
            "{} {}... {}\n",
            Icon::Progress.colored(supports_color, supports_unicode),
            step,
            ColoredText::dim(format!("({})", command)).render(supports_color)
        ),
        BuildEvent::StepSucceeded { step, stdout } => {
            let mut out = format!(
                "{} {} completed\n",
                Icon::Success.colored(supports_color, supports_unicode),
                step
            );
            out.push_str(&indent(stdout));
            out
        }
        BuildEvent::StepFailed {
            step,
            message,
            stderr,
        } => {
            let mut out = format!(
                "{} Error during {}: {}\n",
                Icon::Error.colored(supports_color, supports_unicode),
                step,
                message
            );
            out.push_str(&indent(stderr));
            out
        }
        BuildEvent::SiteBuilt { output_dir } => format!(
            "{} {}\n  Site built in: {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success("Build completed successfully")
                .bold()
                .render(supports_color),
            output_dir.display()
        ),
        BuildEvent::StepStopped { step } => format!(
            "{} {} stopped.\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            step
        ),
    }
}

/// Child output, indented under the step line
fn indent(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| format!("  {}\n", line))
        .collect()
}
