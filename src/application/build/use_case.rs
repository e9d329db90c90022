//! Build Use Case implementation

use crate::domain::ports::{CommandRunner, CommandSpec};

use super::options::{BuildEvent, BuildOptions, BuildOutcome, BuildStep};

/// Build Use Case
///
/// Never runs two external processes at once.
pub struct BuildUseCase<R: CommandRunner> {
    runner: R,
    options: BuildOptions,
}

impl<R: CommandRunner> BuildUseCase<R> {
    pub fn new(runner: R, options: BuildOptions) -> Self {
        Self { runner, options }
    }

    /// Run the pipeline, reporting progress through `on_event`.
    pub fn run<F>(&self, on_event: F) -> BuildOutcome
    where
        F: Fn(BuildEvent),
    {
        let captured_steps = [
            (BuildStep::Sync, &self.options.sync_command),
            (BuildStep::Build, &self.options.build_command),
        ];

        for (step, spec) in captured_steps {
            if !self.run_captured_step(step, spec, &on_event) {
                return BuildOutcome::Failed { step };
            }
        }

        on_event(BuildEvent::SiteBuilt {
            output_dir: self.options.output_dir.clone(),
        });

        if let Some(spec) = &self.options.serve_command {
            self.run_attached_step(BuildStep::Serve, spec, &on_event);
        }

        if let Some(spec) = &self.options.watch_command {
            self.run_attached_step(BuildStep::WatchSync, spec, &on_event);
        }

        BuildOutcome::Success
    }

    fn run_captured_step<F>(&self, step: BuildStep, spec: &CommandSpec, on_event: &F) -> bool
    where
        F: Fn(BuildEvent),
    {
        on_event(BuildEvent::StepStarted {
            step,
            command: spec.to_string(),
        });

        match self.runner.run_captured(spec) {
            Ok(output) if output.success => {
                on_event(BuildEvent::StepSucceeded {
                    step,
                    stdout: output.stdout,
                });
                true
            }
            Ok(output) => {
                let status = match output.code {
                    Some(code) => format!("exit code {}", code),
                    None => "a signal".to_string(),
                };
                on_event(BuildEvent::StepFailed {
                    step,
                    message: format!("'{}' terminated with {}", spec, status),
                    stderr: output.stderr,
                });
                false
            }
            Err(e) => {
                on_event(BuildEvent::StepFailed {
                    step,
                    message: e.to_string(),
                    stderr: String::new(),
                });
                false
            }
        }
    }

    /// Blocking steps do not affect the outcome; an interrupt is the normal way out.
    fn run_attached_step<F>(&self, step: BuildStep, spec: &CommandSpec, on_event: &F)
    where
        F: Fn(BuildEvent),
    {
        on_event(BuildEvent::StepStarted {
            step,
            command: spec.to_string(),
        });

        match self.runner.run_attached(spec) {
            Ok(code) => {
                tracing::debug!(%step, ?code, "blocking step returned");
                on_event(BuildEvent::StepStopped { step });
            }
            Err(e) => on_event(BuildEvent::StepFailed {
                step,
                message: e.to_string(),
                stderr: String::new(),
            }),
        }
    }
}
