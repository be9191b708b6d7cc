//! CLI library components for the ESEF compliance checker.

pub mod input;
pub mod logging;
