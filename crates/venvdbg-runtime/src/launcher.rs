//! Command-based inspection launcher.
//!
//! Runs a configured command line inside the resolved environment and
//! waits for it. Interrupts received while the tool runs belong to the tool,
//! so the parent swallows them instead of exiting.

use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;
use tracing::{debug, info, warn};
use venvdbg_core::{InspectionLauncher, LaunchError, LaunchOutcome, LaunchRequest};

/// Placeholder replaced by the environment identifier.
pub const ENV_PLACEHOLDER: &str = "{env}";
/// Placeholder replaced by the virtual-environment root.
pub const ROOT_PLACEHOLDER: &str = "{root}";

/// Variable carrying the identifier into the launched tool.
pub const ENV_ID_VAR: &str = "VENVDBG_ENV";
/// Variable carrying the root into the launched tool.
pub const ENV_ROOT_VAR: &str = "VENVDBG_ROOT";

/// Launches a program (plus arguments) for each request.
#[derive(Debug, Clone)]
pub struct CommandLauncher {
    program: String,
    args: Vec<String>,
}

impl CommandLauncher {
    /// Build from a program and its argument template.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Result<Self, LaunchError> {
        let program = program.into();
        if program.trim().is_empty() {
            return Err(LaunchError::EmptyCommand);
        }
        Ok(Self { program, args })
    }

    /// Parse a whitespace-separated command line.
    ///
    /// No shell quoting is interpreted; wrap complex commands in a script.
    pub fn from_command_line(line: &str) -> Result<Self, LaunchError> {
        let mut words = line.split_whitespace().map(str::to_string);
        let program = words.next().ok_or(LaunchError::EmptyCommand)?;
        Self::new(program, words.collect())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments with placeholders substituted for `request`.
    pub fn render_args(&self, request: &LaunchRequest) -> Vec<String> {
        let root = request.environment_root.to_string_lossy();
        self.args
            .iter()
            .map(|arg| {
                arg.replace(ENV_PLACEHOLDER, &request.identifier)
                    .replace(ROOT_PLACEHOLDER, &root)
            })
            .collect()
    }

    fn build(&self, request: &LaunchRequest) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.render_args(request))
            .env(ENV_ID_VAR, &request.identifier)
            .env(ENV_ROOT_VAR, &request.environment_root)
            .kill_on_drop(true);

        for key in &request.remove_env {
            cmd.env_remove(key);
        }
        for (key, value) in &request.env {
            cmd.env(key, value);
        }

        let env_dir = Path::new(&request.identifier);
        if env_dir.is_dir() {
            cmd.current_dir(env_dir);
        } else {
            debug!(
                "Identifier {} is not a directory; keeping current working directory",
                request.identifier
            );
        }
        cmd
    }
}

#[async_trait]
impl InspectionLauncher for CommandLauncher {
    async fn launch(&self, request: &LaunchRequest) -> Result<LaunchOutcome, LaunchError> {
        let mut child = self.build(request).spawn().map_err(|e| LaunchError::Spawn {
            program: self.program.clone(),
            reason: e.to_string(),
        })?;
        info!(
            pid = ?child.id(),
            "Launched {} for {}", self.program, request.identifier
        );

        let mut watch_interrupts = true;
        let status = loop {
            tokio::select! {
                status = child.wait() => break status,
                signal = tokio::signal::ctrl_c(), if watch_interrupts => match signal {
                    Ok(()) => debug!("Interrupt received; leaving it to {}", self.program),
                    Err(e) => {
                        warn!("Cannot listen for interrupts: {e}");
                        watch_interrupts = false;
                    }
                },
            }
        }
        .map_err(|e| LaunchError::Wait {
            program: self.program.clone(),
            reason: e.to_string(),
        })?;

        if status.code().is_none() {
            warn!("{} terminated by a signal", self.program);
        }
        Ok(LaunchOutcome {
            exit_code: status.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_command_line_is_rejected() {
        assert!(matches!(
            CommandLauncher::from_command_line("   "),
            Err(LaunchError::EmptyCommand)
        ));
    }

    #[test]
    fn placeholders_are_substituted() {
        let launcher =
            CommandLauncher::from_command_line("debugger --venv {env} --root={root} -x").unwrap();
        assert_eq!(launcher.program(), "debugger");

        let request = LaunchRequest::new("/tmp/envA", "/tmp");
        assert_eq!(
            launcher.render_args(&request),
            ["--venv", "/tmp/envA", "--root=/tmp", "-x"]
        );
    }
}
