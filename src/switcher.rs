//! The main orchestrator that ties configuration, xrandr and hooks
//! together.
//!
//! [`Switcher`] applies one workspace per call, walking through
//! [`SwitchStage`]s:
//!
//! ```text
//! Idle -> DeactivatingHooks -> Reconfiguring -> ActivatingGlobalHooks
//!      -> ActivatingWorkspaceHooks -> Done
//! ```
//!
//! A discovery or reconfiguration fault moves it to `Failed` and nothing
//! after that point runs.  Hooks that already ran are not undone.
//!
//! Outputs are never blanket-disabled before reconfiguring: the planner
//! emits `--off` for every output the target workspace does not use.

use crate::command::Invocation;
use crate::config::{Config, Workspace};
use crate::hooks::{run_hooks, HookFailure, HookReport};
use crate::state::StateStore;
use crate::traits::CommandRunner;
use crate::xrandr::outputs::DiscoveryError;
use crate::xrandr::plan::build_switch_invocation;
use log::{debug, info, warn};

/// Possible errors from a switch.
#[derive(Debug, thiserror::Error)]
pub enum SwitchError {
    #[error("unknown workspace: {0}")]
    UnknownWorkspace(String),
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
    /// xrandr rejected the built command.
    #[error("failed to apply workspace {workspace}: {message}")]
    Reconfigure { workspace: String, message: String },
}

/// Progress of the current (or last) switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchStage {
    Idle,
    DeactivatingHooks,
    Reconfiguring,
    ActivatingGlobalHooks,
    ActivatingWorkspaceHooks,
    Done,
    Failed,
}

/// Summary of a successful switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchReport {
    pub workspace: String,
    /// The xrandr command that was applied.
    pub invocation: Invocation,
    pub deactivate: HookReport,
    pub activate: HookReport,
}

impl SwitchReport {
    /// Every hook that failed, deactivate hooks first.
    pub fn hook_failures(&self) -> impl Iterator<Item = &HookFailure> {
        self.deactivate
            .failures
            .iter()
            .chain(self.activate.failures.iter())
    }

    pub fn hooks_succeeded(&self) -> bool {
        self.deactivate.succeeded() && self.activate.succeeded()
    }
}

/// Applies workspaces from a [`Config`] through a [`CommandRunner`].
///
/// # Typical usage
///
/// ```ignore
/// let config = Config::load(&path)?;
/// let mut switcher = Switcher::new(SystemRunner::new(), &config);
/// switcher.apply("home")?;
/// ```
pub struct Switcher<'a, R: CommandRunner> {
    runner: R,
    config: &'a Config,
    state: Option<StateStore>,
    stage: SwitchStage,
}

impl<'a, R: CommandRunner> Switcher<'a, R> {
    /// Create a switcher with no state store.
    pub fn new(runner: R, config: &'a Config) -> Self {
        Self {
            runner,
            config,
            state: None,
            stage: SwitchStage::Idle,
        }
    }

    /// Remember applied workspaces in `store`, and use it to find the
    /// workspace whose `deactivate` hooks run on the next switch.
    pub fn with_state(mut self, store: StateStore) -> Self {
        self.state = Some(store);
        self
    }

    pub fn stage(&self) -> SwitchStage {
        self.stage
    }

    /// Build the xrandr command for `name` without running anything but
    /// the output query.
    pub fn plan(&self, name: &str) -> Result<Invocation, SwitchError> {
        let workspace = self.workspace(name)?;
        let invocation = build_switch_invocation(
            &self.runner,
            &self.config.xrandr,
            &self.config.aliases,
            workspace,
        )?;
        Ok(invocation)
    }

    /// Switch to workspace `name`.
    pub fn apply(&mut self, name: &str) -> Result<SwitchReport, SwitchError> {
        let config = self.config;
        let workspace = self.workspace(name)?;
        self.stage = SwitchStage::Idle;
        info!("switching to workspace {}", name);

        self.enter(SwitchStage::DeactivatingHooks);
        let mut deactivate = run_hooks(&self.runner, &config.hooks.deactivate);
        if let Some(previous) = self.previous_workspace() {
            debug!("running deactivate hooks of {}", previous);
            if let Some(ws) = config.workspace(&previous) {
                deactivate.merge(run_hooks(&self.runner, &ws.hooks.deactivate));
            }
        }

        self.enter(SwitchStage::Reconfiguring);
        let invocation = match build_switch_invocation(
            &self.runner,
            &config.xrandr,
            &config.aliases,
            workspace,
        ) {
            Ok(inv) => inv,
            Err(e) => {
                self.enter(SwitchStage::Failed);
                return Err(e.into());
            }
        };
        if let Err(e) = self.runner.run(&invocation) {
            self.enter(SwitchStage::Failed);
            return Err(SwitchError::Reconfigure {
                workspace: name.to_string(),
                message: e.to_string(),
            });
        }

        self.enter(SwitchStage::ActivatingGlobalHooks);
        let mut activate = run_hooks(&self.runner, &config.hooks.activate);

        self.enter(SwitchStage::ActivatingWorkspaceHooks);
        activate.merge(run_hooks(&self.runner, &workspace.hooks.activate));

        self.enter(SwitchStage::Done);
        self.record(name);

        let report = SwitchReport {
            workspace: name.to_string(),
            invocation,
            deactivate,
            activate,
        };
        if report.hooks_succeeded() {
            info!("workspace {} applied", name);
        } else {
            warn!(
                "workspace {} applied, {} hook(s) failed",
                name,
                report.hook_failures().count()
            );
        }
        Ok(report)
    }

    fn workspace(&self, name: &str) -> Result<&'a Workspace, SwitchError> {
        self.config
            .workspace(name)
            .ok_or_else(|| SwitchError::UnknownWorkspace(name.to_string()))
    }

    fn enter(&mut self, stage: SwitchStage) {
        debug!("{:?} -> {:?}", self.stage, stage);
        self.stage = stage;
    }

    fn previous_workspace(&self) -> Option<String> {
        let store = self.state.as_ref()?;
        match store.last_workspace() {
            Ok(previous) => previous,
            Err(e) => {
                warn!("ignoring unreadable state: {}", e);
                None
            }
        }
    }

    fn record(&self, name: &str) {
        if let Some(store) = &self.state {
            if let Err(e) = store.set_last_workspace(name) {
                warn!("could not record last workspace: {}", e);
            }
        }
    }
}

//  Tests
