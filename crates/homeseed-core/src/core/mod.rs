//! Workspace seeding, host adapters, and the glue the CLI drives.

pub(crate) mod activate;
pub(crate) mod config;
pub(crate) mod diagnostics;
pub(crate) mod error;
pub(crate) mod fs;
pub(crate) mod hooks;
pub(crate) mod outcome;
pub(crate) mod seed;
