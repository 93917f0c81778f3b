//! Fixed filesystem convention for a seeded home directory.
//!
//! The shared dataset lives at [`DEFAULT_SOURCE_ROOT`]. Each user gets
//! `<home>/data/example`, whatever dataset root the host mounted.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Shared, read-only dataset mounted by the host.
pub const DEFAULT_SOURCE_ROOT: &str = "/data/example";

/// Top-level directory created inside the user's home.
pub const DATA_DIR_NAME: &str = "data";

/// Child of the source root that is linked rather than copied.
pub const DEFAULT_LINK_NAME: &str = "input";

/// Directory under `data/` that mirrors the source children.
pub const SUBTREE_NAME: &str = "example";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedLayout {
    source_root: PathBuf,
    dest_root: PathBuf,
    link_name: String,
}

impl SeedLayout {
    /// Layout for a user whose home (or activation directory) is `home`.
    pub fn for_home(home: impl AsRef<Path>) -> Self {
        Self {
            source_root: PathBuf::from(DEFAULT_SOURCE_ROOT),
            dest_root: home.as_ref().join(DATA_DIR_NAME),
            link_name: DEFAULT_LINK_NAME.to_string(),
        }
    }

    /// Point the layout at a different dataset root. Only the host
    /// integration layer and tests use this.
    #[must_use]
    pub fn with_source_root(mut self, source_root: impl Into<PathBuf>) -> Self {
        self.source_root = source_root.into();
        self
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn dest_root(&self) -> &Path {
        &self.dest_root
    }

    pub fn link_name(&self) -> &str {
        &self.link_name
    }

    pub fn subtree_root(&self) -> PathBuf {
        self.dest_root.join(SUBTREE_NAME)
    }

    /// Destination path for an immediate child of the source root.
    pub fn child_dest(&self, name: &std::ffi::OsStr) -> PathBuf {
        self.subtree_root().join(name)
    }

    /// Decide how a source child is materialized. `is_dir` must reflect the
    /// child after following symlinks.
    pub fn classify(&self, name: &std::ffi::OsStr, is_dir: bool) -> EntryKind {
        if !is_dir {
            return EntryKind::File;
        }
        if name.to_str() == Some(self.link_name.as_str()) {
            EntryKind::LinkedDirectory
        } else {
            EntryKind::MirroredDirectory
        }
    }
}

/// How one immediate child of the source root is represented in the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Symlinked to the source, never copied.
    LinkedDirectory,
    /// Deep-copied subtree.
    MirroredDirectory,
    File,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::LinkedDirectory => "linked_directory",
            EntryKind::MirroredDirectory => "mirrored_directory",
            EntryKind::File => "file",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn home_layout_uses_fixed_convention() {
        let layout = SeedLayout::for_home("/home/jovyan");
        assert_eq!(layout.source_root(), Path::new("/data/example"));
        assert_eq!(layout.dest_root(), Path::new("/home/jovyan/data"));
        assert_eq!(layout.subtree_root(), Path::new("/home/jovyan/data/example"));
        assert_eq!(layout.link_name(), "input");
        assert_eq!(
            layout.child_dest(OsStr::new("readme.txt")),
            Path::new("/home/jovyan/data/example/readme.txt")
        );
    }

    #[test]
    fn subtree_name_is_fixed_for_any_source_root() {
        let layout = SeedLayout::for_home("/tmp/u").with_source_root("/mnt/shared/reference");
        assert_eq!(layout.source_root(), Path::new("/mnt/shared/reference"));
        assert_eq!(layout.subtree_root(), Path::new("/tmp/u/data/example"));

        let root = SeedLayout::for_home("/tmp/u").with_source_root("/");
        assert_eq!(root.subtree_root(), Path::new("/tmp/u/data/example"));
    }

    #[test]
    fn only_directories_named_like_the_link_are_linked() {
        let layout = SeedLayout::for_home("/h");
        assert_eq!(
            layout.classify(OsStr::new("input"), true),
            EntryKind::LinkedDirectory
        );
        assert_eq!(layout.classify(OsStr::new("input"), false), EntryKind::File);
        assert_eq!(
            layout.classify(OsStr::new("inputs"), true),
            EntryKind::MirroredDirectory
        );
        assert_eq!(
            layout.classify(OsStr::new("Input"), true),
            EntryKind::MirroredDirectory
        );
    }
}
