//! User hook execution.
//!
//! Hooks are plain command lines from the config file.  They run one after
//! another in declaration order; a failing hook is logged and recorded but
//! never stops the hooks after it.

use crate::command::Invocation;
use crate::traits::CommandRunner;
use log::{debug, warn};

/// A hook that could not be run or exited unsuccessfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookFailure {
    pub command: String,
    pub message: String,
}

/// Outcome of running one hook list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookReport {
    /// Number of hooks actually started.
    pub attempted: usize,
    pub failures: Vec<HookFailure>,
}

impl HookReport {
    pub fn succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: HookReport) {
        self.attempted += other.attempted;
        self.failures.extend(other.failures);
    }
}

/// Run every command in `commands`, in order, waiting for each.
pub fn run_hooks<R, S>(runner: &R, commands: &[S]) -> HookReport
where
    R: CommandRunner,
    S: AsRef<str>,
{
    let mut report = HookReport::default();
    for line in commands {
        let line = line.as_ref();
        let Some(invocation) = Invocation::from_hook_line(line) else {
            debug!("skipping blank hook");
            continue;
        };
        report.attempted += 1;
        if let Err(e) = runner.run(&invocation) {
            warn!("hook `{}` failed: {}", line.trim(), e);
            report.failures.push(HookFailure {
                command: line.trim().to_string(),
                message: e.to_string(),
            });
        }
    }
    report
}

//  Tests
