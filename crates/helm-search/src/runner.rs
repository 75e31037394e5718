//! External process invocation
//!
//! Commands are spawned synchronously with captured output; the caller waits
//! for completion. Pluggable so tests can substitute deterministic output
//! without spawning anything.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::SearchError;
use crate::Result;

/// Captured result of a finished external command.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub success: bool,
    pub stdout: Vec<u8>,
}

pub trait CommandRunner: Send + Sync {
    /// Run `program` to completion, capturing stdout.
    fn run(&self, program: &str, args: &[&str]) -> Result<RunOutput>;

    /// Run `program` with `input` fed to its stdin. The child keeps the
    /// terminal for interaction (fuzzy pickers draw on the tty), only stdout
    /// is captured.
    fn run_with_input(&self, program: &str, args: &[&str], input: &[u8]) -> Result<RunOutput>;
}

/// [`CommandRunner`] backed by real child processes.
pub struct SystemRunner;

impl SystemRunner {
    fn map_spawn_error(program: &str, err: std::io::Error) -> SearchError {
        if err.kind() == std::io::ErrorKind::NotFound {
            SearchError::ToolUnavailable(program.to_string())
        } else {
            SearchError::Spawn(program.to_string(), err)
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<RunOutput> {
        let output = Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .output()
            .map_err(|e| Self::map_spawn_error(program, e))?;

        Ok(RunOutput {
            success: output.status.success(),
            stdout: output.stdout,
        })
    }

    fn run_with_input(&self, program: &str, args: &[&str], input: &[u8]) -> Result<RunOutput> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| Self::map_spawn_error(program, e))?;

        if let Some(stdin) = child.stdin.take() {
            let mut stdin = stdin;
            stdin
                .write_all(input)
                .map_err(|e| SearchError::Spawn(program.to_string(), e))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| SearchError::Spawn(program.to_string(), e))?;

        Ok(RunOutput {
            success: output.status.success(),
            stdout: output.stdout,
        })
    }
}
