//! xrandr-specific logic.
//!
//! [`outputs`] discovers the connected outputs, [`block`] turns one
//! display's configuration into flags, and [`plan`] assembles the complete
//! reconfiguration command for a workspace.
//!
//! Nothing outside this module should know xrandr's flag syntax.

pub mod block;
pub mod outputs;
pub mod plan;
