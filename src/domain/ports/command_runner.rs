//! CommandRunner port - abstraction over external processes
//!
//! The build pipeline shells out to the sync step, the site generator and its
//! dev server. Going through this trait keeps the step sequencing testable
//! with a scripted runner.

use std::fmt;

use crate::error::VaultPressResult;

/// An external command: program plus arguments, no shell involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Build from an argv-style list (`["zola", "build"]`). Returns `None` when empty.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, rest) = argv.split_first()?;
        Some(Self::new(program.clone()).args(rest.iter().cloned()))
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(' ') {
                write!(f, " '{}'", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Captured result of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Runs external commands
pub trait CommandRunner {
    /// Run to completion with stdout/stderr captured.
    fn run_captured(&self, spec: &CommandSpec) -> VaultPressResult<CommandOutput>;

    /// Run to completion with stdio inherited from this process.
    /// Returns the exit code, `None` if the process was killed by a signal.
    fn run_attached(&self, spec: &CommandSpec) -> VaultPressResult<Option<i32>>;
}
