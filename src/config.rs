//! Application configuration.
//!
//! The configuration is loaded once at startup from
//! `$XDG_CONFIG_HOME/workspace-switcher/config.yaml` (or the path passed
//! with `--config`) and then passed by reference to every component.  A
//! path ending in `.json` is parsed as JSON; anything else as YAML.
//!
//! # Example
//!
//! ```yaml
//! hooks:
//!   activate: ["notify-send workspace-switched"]
//! aliases:
//!   laptop: eDP-1
//!   desk: DP-1
//! workspaces:
//!   home:
//!     hooks:
//!       activate: ["nitrogen --restore"]
//!     displays:
//!       laptop:
//!         primary: true
//!       desk:
//!         rotate: left
//!         order:
//!           - display: laptop
//!             position: right-of
//! ```

use crate::alias::Aliases;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Name of the per-user directory holding the config file.
pub const APP_DIR: &str = "workspace-switcher";

/// Top-level configuration.
///
/// Every field is optional: an empty document is valid and simply has no
/// workspaces.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Hooks run on every switch, before the workspace's own hooks.
    #[serde(default)]
    pub hooks: Hooks,

    #[serde(default)]
    pub aliases: Aliases,

    #[serde(default)]
    pub workspaces: BTreeMap<String, Workspace>,

    /// Display tool settings.
    #[serde(default)]
    pub xrandr: XrandrConfig,

    /// Interactive picker settings.
    #[serde(default)]
    pub picker: PickerConfig,
}

/// Ordered shell commands for the two lifecycle events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hooks {
    pub activate: Vec<String>,
    pub deactivate: Vec<String>,
}

/// A named multi-display layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Workspace {
    pub hooks: Hooks,
    /// Displays keyed by logical name (an alias or a physical output name).
    pub displays: BTreeMap<String, Display>,
}

/// Desired state of one output within a workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Display {
    /// Mode such as `1920x1080`.  Empty means auto-detect.
    pub resolution: String,
    pub primary: bool,
    /// xrandr rotation (`normal`, `left`, `right`, `inverted`).  Empty
    /// means no rotation flag.
    pub rotate: String,
    /// Placement relative to other displays, applied in order.
    pub order: Vec<Placement>,
    /// Absolute position, used only when enabled.
    pub position: AbsolutePosition,
}

/// One relative placement directive, e.g. `right-of laptop`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placement {
    /// The other display (logical name).
    pub display: String,
    /// xrandr position flag without the leading dashes (`left-of`,
    /// `right-of`, `above`, `below`, `same-as`).  Passed through unchecked.
    pub position: String,
}

/// Absolute pixel position of an output's top-left corner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbsolutePosition {
    pub enable: bool,
    pub x: i32,
    pub y: i32,
}

/// Display tool settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XrandrConfig {
    /// Executable used both to query outputs and to apply a layout.
    pub program: String,
    /// Emit `--mode <resolution>` for displays with an explicit
    /// resolution.  Off by default, in which case such displays get no
    /// mode flag at all.
    pub apply_resolution: bool,
}

impl Default for XrandrConfig {
    fn default() -> Self {
        Self {
            program: "xrandr".into(),
            apply_resolution: false,
        }
    }
}

/// Interactive picker settings.
///
/// The program must understand rofi's `-p`, `-format i` and `-dmenu`
/// flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub program: String,
    pub prompt: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            program: "rofi".into(),
            prompt: "Activate Workspace: ".into(),
        }
    }
}

impl Config {
    /// Load configuration from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json(&contents)
        } else {
            Self::from_yaml(&contents)
        };
        config.map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e.0)))
    }

    /// Parse a YAML document.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        // An empty file is a YAML null, not an empty mapping.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents).map_err(|e| ConfigError(e.to_string()))
    }

    /// Parse a JSON document.
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(contents).map_err(|e| ConfigError(e.to_string()))
    }

    /// Workspace names in lexicographic order.
    pub fn workspace_names(&self) -> Vec<&str> {
        self.workspaces.keys().map(String::as_str).collect()
    }

    pub fn workspace(&self, name: &str) -> Option<&Workspace> {
        self.workspaces.get(name)
    }
}

impl Workspace {
    /// Logical names of all displays marked primary.
    pub fn primary_displays(&self) -> Vec<&str> {
        self.displays
            .iter()
            .filter(|(_, d)| d.primary)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Default config file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join(APP_DIR)
        .join("config.yaml")
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
