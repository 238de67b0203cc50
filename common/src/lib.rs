//! Shared model for `crtgen`: the session hierarchy, the per-run defaults and
//! the logging helpers used across the workspace.

pub mod config;
pub mod log;
pub mod session;
