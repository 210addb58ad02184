//! **workspace-switcher**: named multi-monitor layouts for X11.
//!
//! A *workspace* is a set of displays with their rotation, placement and
//! primary flag.  Applying one reconfigures every output with a single
//! `xrandr` call: displays in the workspace are enabled and placed, every
//! other output xrandr reports is switched off.  User hooks run before and
//! after the switch.
//!
//! # Architecture
//!
//! The crate is organised around one core trait:
//!
//! * [`traits::CommandRunner`]: runs an external program and returns its
//!   stdout.  Output discovery, reconfiguration, hooks and the picker all go
//!   through it, so the planning logic never touches the process API.
//!
//! The configuration is loaded once ([`config::Config`]) and passed by
//! reference.  [`xrandr`] builds the command, [`hooks`] runs hook lists,
//! and [`switcher::Switcher`] sequences a full switch.  The real runner
//! lives in [`process`].

pub mod alias;
pub mod cli;
pub mod command;
pub mod config;
pub mod hooks;
pub mod picker;
pub mod process;
pub mod state;
pub mod switcher;
pub mod traits;
pub mod xrandr;
