//! Core trait that decouples the switcher from the operating system's
//! process API.
//!
//! Discovery, reconfiguration, hooks and the picker all go through
//! [`CommandRunner`], so the whole planning pipeline can be driven by a
//! recording fake in tests.

use crate::command::Invocation;

/// Runs an external program to completion.
///
/// An implementation might spawn a real child process, or it might be a
/// stub that records the call and returns canned output.
///
/// # Contract
///
/// * [`run`](CommandRunner::run) **blocks** until the program exits.  There
///   is no timeout.
/// * If [`Invocation::stdin`] is non-empty, each line is written to the
///   child's stdin followed by `\n`, then stdin is closed.
/// * A non-zero exit status is an error.
pub trait CommandRunner {
    /// The error type produced by this runner.
    type Error: std::error::Error + Send + 'static;

    /// Run `invocation` and return everything it wrote to stdout.
    fn run(&self, invocation: &Invocation) -> Result<String, Self::Error>;
}

/// Test doubles shared by the unit tests of several modules.
#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};

    /// A runner that records every invocation and answers from a table.
    ///
    /// Programs without a canned answer succeed with empty stdout.  A
    /// failure can be registered either for a whole program or for one
    /// exact command line (as rendered by `Invocation`'s `Display`).
    #[derive(Debug, Default)]
    pub struct FakeRunner {
        pub calls: RefCell<Vec<Invocation>>,
        outputs: HashMap<String, String>,
        failing: HashSet<String>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("fake failure: {0}")]
    pub struct FakeError(pub String);

    impl FakeRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_output(mut self, program: &str, stdout: &str) -> Self {
            self.outputs.insert(program.into(), stdout.into());
            self
        }

        pub fn failing(mut self, program_or_line: &str) -> Self {
            self.failing.insert(program_or_line.into());
            self
        }

        /// Every recorded call rendered as a command line.
        pub fn lines(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|c| c.to_string()).collect()
        }
    }

    impl CommandRunner for FakeRunner {
        type Error = FakeError;

        fn run(&self, invocation: &Invocation) -> Result<String, FakeError> {
            self.calls.borrow_mut().push(invocation.clone());
            let line = invocation.to_string();
            if self.failing.contains(&line) || self.failing.contains(&invocation.program) {
                return Err(FakeError(line));
            }
            Ok(self
                .outputs
                .get(&invocation.program)
                .cloned()
                .unwrap_or_default())
        }
    }

    /// `xrandr` query output reporting the given outputs as connected.
    pub fn xrandr_query(outputs: &[&str]) -> String {
        let mut out = String::from(
            "Screen 0: minimum 320 x 200, current 3840 x 1080, maximum 16384 x 16384\n",
        );
        for name in outputs {
            out.push_str(&format!(
                "{} connected 1920x1080+0+0 (normal left inverted right x axis y axis) 344mm x 193mm\n",
                name
            ));
            out.push_str("   1920x1080     60.01*+  59.97    59.96    59.93  \n");
        }
        out
    }
}
