//! Interactive workspace picker.
//!
//! The picker program (rofi by default) is started in indexed dmenu mode:
//! workspace names go in on stdin, one per line, and the zero-based index
//! of the chosen line comes back on stdout.  Cancelling, a missing
//! program, or garbage output all mean "nothing picked".

use crate::command::Invocation;
use crate::config::PickerConfig;
use crate::traits::CommandRunner;
use log::{debug, info};

/// Build the picker invocation for `names`.
pub fn picker_invocation(picker: &PickerConfig, names: &[&str]) -> Invocation {
    Invocation::new(&picker.program)
        .args(["-p", picker.prompt.as_str(), "-format", "i", "-dmenu"])
        .stdin_lines(names.iter().copied())
}

/// Let the user choose one of `names`.
///
/// Returns `None` when nothing usable was selected.
pub fn pick<'a, R: CommandRunner>(
    runner: &R,
    picker: &PickerConfig,
    names: &[&'a str],
) -> Option<&'a str> {
    if names.is_empty() {
        info!("no workspaces to pick from");
        return None;
    }

    let stdout = match runner.run(&picker_invocation(picker, names)) {
        Ok(out) => out,
        Err(e) => {
            info!("no workspace selected: {}", e);
            return None;
        }
    };

    let selection = stdout.trim();
    let Ok(index) = selection.parse::<usize>() else {
        debug!("picker returned non-index output {:?}", selection);
        return None;
    };

    let picked = names.get(index).copied();
    if picked.is_none() {
        debug!("picker index {} out of range ({} entries)", index, names.len());
    }
    picked
}

//  Tests
