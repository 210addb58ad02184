//! Whole-workspace reconfiguration command.
//!
//! The planner diffs the workspace against the live output list: every
//! display in the workspace gets a block, every other discovered output is
//! switched off.  After applying the result, the set of enabled outputs is
//! exactly the workspace's displays.

use super::block::build_block;
use super::outputs::{list_connected_outputs, DiscoveryError};
use crate::alias::Aliases;
use crate::command::Invocation;
use crate::config::{Workspace, XrandrConfig};
use crate::traits::CommandRunner;
use log::{debug, warn};
use std::collections::HashSet;

/// Discover outputs and build the complete xrandr argument list for
/// `workspace`.
pub fn build_switch_command<R: CommandRunner>(
    runner: &R,
    xrandr: &XrandrConfig,
    aliases: &Aliases,
    workspace: &Workspace,
) -> Result<Vec<String>, DiscoveryError> {
    let connected = list_connected_outputs(runner, xrandr)?;
    Ok(plan_flags(&connected, xrandr, aliases, workspace))
}

/// Same as [`build_switch_command`], wrapped as a ready-to-run invocation.
pub fn build_switch_invocation<R: CommandRunner>(
    runner: &R,
    xrandr: &XrandrConfig,
    aliases: &Aliases,
    workspace: &Workspace,
) -> Result<Invocation, DiscoveryError> {
    let flags = build_switch_command(runner, xrandr, aliases, workspace)?;
    Ok(Invocation::new(&xrandr.program).args(flags))
}

/// Build the argument list against an already discovered output list.
///
/// Display blocks come first in logical-name order, then one
/// `--output <name> --off` per unused output in `connected` order, then
/// `--verbose`.  A display whose output is not in `connected` still gets
/// its block.
pub fn plan_flags(
    connected: &[String],
    xrandr: &XrandrConfig,
    aliases: &Aliases,
    workspace: &Workspace,
) -> Vec<String> {
    let primaries = workspace.primary_displays();
    if primaries.len() > 1 {
        warn!("several displays marked primary: {}", primaries.join(", "));
    }

    let mut flags = Vec::new();
    let mut used: HashSet<&str> = HashSet::new();

    for (logical_name, display) in &workspace.displays {
        let physical = aliases.resolve(logical_name);
        if !connected.iter().any(|c| c == physical) {
            debug!("{} ({}) is not currently reported by xrandr", logical_name, physical);
        }
        used.insert(physical);
        flags.extend(build_block(logical_name, display, aliases, xrandr));
    }

    for output in connected {
        if !used.contains(output.as_str()) {
            flags.extend(["--output".to_string(), output.clone(), "--off".to_string()]);
        }
    }

    flags.push("--verbose".into());
    flags
}

//  Tests
