//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Workspace Switcher
///
/// Apply multi-monitor layouts defined in a config file.
#[derive(Debug, Parser)]
#[command(name = "workspace-switcher")]
pub struct Cli {
    /// Path to configuration file
    /// [default: $XDG_CONFIG_HOME/workspace-switcher/config.yaml]
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prints version
    #[command(visible_alias = "v")]
    Version,

    /// List workspaces
    #[command(visible_alias = "l")]
    List,

    /// List aliases
    Aliases,

    /// Apply workspace
    Apply {
        /// Workspace name
        name: String,

        /// Print the xrandr command instead of running it (hooks are skipped)
        #[arg(long)]
        dry_run: bool,
    },

    /// Pick a workspace interactively, then apply it
    #[command(visible_alias = "rofi")]
    Pick,

    /// Print the last applied workspace
    Current,
}
