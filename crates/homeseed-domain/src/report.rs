use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Counters collected while seeding one destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedReport {
    pub source_root: PathBuf,
    pub subtree_root: PathBuf,
    pub removed_dest_symlink: bool,
    pub directories_created: usize,
    pub files_copied: usize,
    pub files_up_to_date: usize,
    pub links_created: usize,
    pub links_kept: usize,
}

impl SeedReport {
    pub fn new(source_root: impl Into<PathBuf>, subtree_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            subtree_root: subtree_root.into(),
            ..Self::default()
        }
    }

    /// True when the run changed nothing under the destination subtree.
    pub fn is_noop(&self) -> bool {
        !self.removed_dest_symlink
            && self.directories_created == 0
            && self.files_copied == 0
            && self.links_created == 0
    }

    pub fn summary(&self) -> String {
        format!(
            "{} copied, {} up to date, {} linked",
            self.files_copied,
            self.files_up_to_date,
            self.links_created + self.links_kept
        )
    }
}
