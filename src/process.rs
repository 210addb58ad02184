//! [`CommandRunner`] implementation backed by real child processes.
//!
//! The child's stderr is inherited so xrandr and hook diagnostics reach the
//! terminal unchanged; stdout is captured and returned.

use crate::command::Invocation;
use crate::traits::CommandRunner;
use log::info;
use std::io::Write;
use std::process::{Command, Stdio};

/// Spawns each [`Invocation`] with [`std::process::Command`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

/// Errors produced while running a child process.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write stdin of {program}: {source}")]
    Stdin {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to wait for {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{command}` exited with {status}")]
    Status {
        command: String,
        status: std::process::ExitStatus,
    },
    #[error("{program} wrote non-utf-8 output")]
    Utf8 { program: String },
}

impl CommandRunner for SystemRunner {
    type Error = RunError;

    fn run(&self, invocation: &Invocation) -> Result<String, RunError> {
        info!("{}", invocation);

        let program = &invocation.program;
        let stdin = if invocation.stdin.is_empty() {
            Stdio::null()
        } else {
            Stdio::piped()
        };

        let mut child = Command::new(program)
            .args(&invocation.args)
            .stdin(stdin)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| RunError::Spawn {
                program: program.clone(),
                source,
            })?;

        // Dropping the handle closes the pipe so the child sees EOF.
        if let Some(mut pipe) = child.stdin.take() {
            let mut payload = String::new();
            for line in &invocation.stdin {
                payload.push_str(line);
                payload.push('\n');
            }
            if let Err(source) = pipe.write_all(payload.as_bytes()) {
                drop(pipe);
                // Reap the child; its exit status is irrelevant here.
                let _ = child.wait();
                return Err(RunError::Stdin {
                    program: program.clone(),
                    source,
                });
            }
        }

        let output = child.wait_with_output().map_err(|source| RunError::Wait {
            program: program.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(RunError::Status {
                command: invocation.to_string(),
                status: output.status,
            });
        }

        String::from_utf8(output.stdout).map_err(|_| RunError::Utf8 {
            program: program.clone(),
        })
    }
}

//  Tests
