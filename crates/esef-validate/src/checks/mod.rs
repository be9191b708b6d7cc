//! Validation check modules.
//!
//! Each module performs one category of rule checks and returns issues;
//! none of them reads another's output.

pub mod dimensional;
pub mod embedded;
pub mod filename;
pub mod mandatory;
pub mod namespace;
