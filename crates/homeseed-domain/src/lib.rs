#![deny(clippy::all, warnings)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

pub mod layout;
pub mod report;

pub use layout::{
    EntryKind, SeedLayout, DATA_DIR_NAME, DEFAULT_LINK_NAME, DEFAULT_SOURCE_ROOT, SUBTREE_NAME,
};
pub use report::SeedReport;
