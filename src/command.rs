//! External command invocations.
//!
//! Every interaction with the outside world (xrandr, the picker, user
//! hooks) is described by an [`Invocation`] and handed to a
//! [`CommandRunner`](crate::traits::CommandRunner).  Keeping the invocation
//! as plain data lets tests assert on exactly what would have been run.

use std::fmt;

/// A single external program call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Executable name or path.
    pub program: String,
    /// Arguments, passed verbatim (no shell interpretation).
    pub args: Vec<String>,
    /// Lines written to the child's stdin, each terminated by `\n`.
    ///
    /// Empty means stdin is not piped at all.
    pub stdin: Vec<String>,
}

impl Invocation {
    /// Create an invocation with no arguments and no stdin.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            stdin: Vec::new(),
        }
    }

    /// Append arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the lines fed to stdin.
    pub fn stdin_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stdin = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Parse a hook line into an invocation.
    ///
    /// The line is split on whitespace: the first token is the program, the
    /// rest are arguments.  There is no quoting, so an argument can never
    /// contain a space.  Returns `None` for a blank line.
    pub fn from_hook_line(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let program = tokens.next()?;
        Some(Self::new(program).args(tokens))
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

//  Tests
