//! TapHoldUp demo shell
//!
//! Hosts a gesture button on a simulated clock: scripted pointer input goes
//! in, the listener keeps a status label the way a host screen would.

mod app;
mod script;

pub use app::{App, AppConfig, ReplayReport, StatusLabel};
pub use script::{GestureScript, ScriptAction, ScriptError, ScriptStep};
