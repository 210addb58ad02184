//! Remembers the last workspace that was applied.
//!
//! The switcher needs the previous workspace to run its `deactivate` hooks.
//! The state is a tiny JSON document:
//!
//! ```json
//! { "last_workspace": "home" }
//! ```

use crate::config::APP_DIR;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct State {
    #[serde(default)]
    last_workspace: Option<String>,
}

/// File-backed store for the last applied workspace.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

/// Errors reading or writing the state file.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("state file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("state file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StateStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store at `$XDG_STATE_HOME/workspace-switcher/state.json`, falling
    /// back to the cache directory.
    pub fn default_location() -> Option<Self> {
        let base = dirs::state_dir().or_else(dirs::cache_dir)?;
        Some(Self::new(base.join(APP_DIR).join("state.json")))
    }

    /// The last applied workspace, or `None` if nothing was recorded yet.
    pub fn last_workspace(&self) -> Result<Option<String>, StateError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StateError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let state: State = serde_json::from_str(&contents).map_err(|source| StateError::Json {
            path: self.path.clone(),
            source,
        })?;
        Ok(state.last_workspace)
    }

    /// Record `name` as the last applied workspace.
    pub fn set_last_workspace(&self, name: &str) -> Result<(), StateError> {
        let io_err = |source| StateError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let state = State {
            last_workspace: Some(name.to_string()),
        };
        let body = serde_json::to_string_pretty(&state).map_err(|source| StateError::Json {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, body).map_err(io_err)
    }
}
