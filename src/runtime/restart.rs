//! Full process restart
//!
//! Reload from the recovery screen discards all in-memory state by replacing
//! the running process with a fresh copy of itself. The new process gets the
//! arguments and the environment this one was started with, captured before
//! any `.env` file was loaded, so it reads its env file from scratch.

use crate::domain::{AppError, Result};
use std::convert::Infallible;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

/// Everything needed to start this program again
#[derive(Debug, Clone)]
pub struct ProcessRestarter {
    program: PathBuf,
    args: Vec<OsString>,
    env: Vec<(OsString, OsString)>,
}

impl ProcessRestarter {
    /// Captures the current executable, arguments and environment
    ///
    /// Call this before loading any `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the path of the running executable is unavailable
    pub fn capture() -> Result<Self> {
        let program = std::env::current_exe()
            .map_err(|e| AppError::Restart(format!("Cannot locate current executable: {e}")))?;

        Ok(Self {
            program,
            args: std::env::args_os().skip(1).collect(),
            env: std::env::vars_os().collect(),
        })
    }

    /// The command that starts the replacement process
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .env_clear()
            .envs(self.env.iter().map(|(k, v)| (k, v)));
        command
    }

    /// Replaces the current process; only returns on failure
    ///
    /// # Errors
    ///
    /// Returns an error if the new process image cannot be started
    #[cfg(unix)]
    pub fn restart(&self) -> Result<Infallible> {
        use std::os::unix::process::CommandExt;

        tracing::info!(program = %self.program.display(), "Restarting process");
        let err = self.command().exec();
        Err(AppError::Restart(format!(
            "Failed to restart {}: {err}",
            self.program.display()
        )))
    }

    /// Runs a fresh copy of the program, then exits with its status
    ///
    /// # Errors
    ///
    /// Returns an error if the new process cannot be started
    #[cfg(not(unix))]
    pub fn restart(&self) -> Result<Infallible> {
        tracing::info!(program = %self.program.display(), "Restarting process");
        let status = self.command().status().map_err(|e| {
            AppError::Restart(format!("Failed to restart {}: {e}", self.program.display()))
        })?;
        std::process::exit(status.code().unwrap_or(5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_uses_current_executable() {
        let restarter = ProcessRestarter::capture().unwrap();
        let command = restarter.command();
        assert_eq!(
            command.get_program(),
            std::env::current_exe().unwrap().as_os_str()
        );
    }

    #[test]
    fn test_command_replays_captured_environment() {
        let restarter = ProcessRestarter {
            program: PathBuf::from("/usr/bin/tally"),
            args: vec![OsString::from("start")],
            env: vec![(OsString::from("TALLY_ENV"), OsString::from("production"))],
        };

        let command = restarter.command();
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, vec!["start"]);

        let envs: Vec<_> = command.get_envs().collect();
        assert_eq!(envs.len(), 1);
        assert_eq!(envs[0].0, "TALLY_ENV");
        assert_eq!(envs[0].1.unwrap(), "production");
    }
}
