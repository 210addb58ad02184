//! Entry point for the **workspace-switcher** command.
//!
//! Loads the configuration (fatal on failure), then dispatches the
//! requested subcommand.  Every failure ends up in a single `error!` line
//! and a non-zero exit status.  Failed hooks are reported with `error!` too,
//! but do not change the exit status.

use clap::Parser;
use log::{error, info};
use workspace_switcher::cli::{Cli, Command};
use workspace_switcher::config::{default_config_path, Config};
use workspace_switcher::picker::pick;
use workspace_switcher::process::SystemRunner;
use workspace_switcher::state::{StateError, StateStore};
use workspace_switcher::switcher::{SwitchError, Switcher};

/// Failure of a subcommand.
#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Switch(#[from] SwitchError),
    #[error(transparent)]
    State(#[from] StateError),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli.command, &config) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(command: Command, config: &Config) -> Result<(), AppError> {
    match command {
        Command::Version => {
            println!("Workspace Switcher\nVersion: {}", env!("CARGO_PKG_VERSION"));
        }
        Command::List => {
            if config.workspaces.is_empty() {
                info!("no workspaces found");
            }
            for name in config.workspace_names() {
                println!("{}", name);
            }
        }
        Command::Aliases => {
            if config.aliases.is_empty() {
                info!("no aliases found");
            }
            for name in config.aliases.names() {
                println!("{}", name);
            }
        }
        Command::Apply { name, dry_run } => {
            if dry_run {
                let plan = Switcher::new(SystemRunner::new(), config).plan(&name)?;
                println!("{}", plan);
            } else {
                apply(config, &name)?;
            }
        }
        Command::Pick => {
            let names = config.workspace_names();
            match pick(&SystemRunner::new(), &config.picker, &names) {
                Some(name) => apply(config, name)?,
                None => info!("nothing picked, leaving displays as they are"),
            }
        }
        Command::Current => match current(StateStore::default_location().as_ref())? {
            Some(name) => println!("{}", name),
            None => info!("no workspace applied yet"),
        },
    }
    Ok(())
}

fn apply(config: &Config, name: &str) -> Result<(), SwitchError> {
    let mut switcher = Switcher::new(SystemRunner::new(), config);
    if let Some(store) = StateStore::default_location() {
        switcher = switcher.with_state(store);
    }
    let report = switcher.apply(name)?;
    for failure in report.hook_failures() {
        error!("hook `{}` failed: {}", failure.command, failure.message);
    }
    Ok(())
}

/// The last applied workspace; an unreadable state file is an error.
fn current(store: Option<&StateStore>) -> Result<Option<String>, StateError> {
    match store {
        Some(store) => store.last_workspace(),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_reads_recorded_workspace() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("state.json"));
        assert_eq!(current(Some(&store)).unwrap(), None);
        store.set_last_workspace("docked").unwrap();
        assert_eq!(current(Some(&store)).unwrap().as_deref(), Some("docked"));
        assert_eq!(current(None).unwrap(), None);
    }

    #[test]
    fn current_fails_on_unreadable_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{ truncated").unwrap();
        let err = AppError::from(current(Some(&StateStore::new(&path))).unwrap_err());
        assert!(matches!(err, AppError::State(StateError::Json { .. })));
        assert!(err.to_string().contains("state.json"));
    }
}
