use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// A fatal error with an optional hint on how to fix it
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    message: String,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fix: None,
        }
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{} {} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error("Error:").bold().render(supports_color),
            self.message
        );

        if let Some(fix) = &self.fix {
            out.push_str(&format!(
                "  {} {}\n",
                ColoredText::info("FIX:").render(supports_color),
                fix
            ));
        }

        out
    }
}
