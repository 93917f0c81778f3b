use std::io;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum SeedError {
    #[error("source directory '{}' does not exist", path.display())]
    SourceMissing { path: PathBuf },
    #[error("failed to {action} {}", path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SeedError {
    pub(crate) fn fs(action: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Filesystem {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::SourceMissing { path } | Self::Filesystem { path, .. } => path,
        }
    }

    #[must_use]
    pub fn is_source_missing(&self) -> bool {
        matches!(self, Self::SourceMissing { .. })
    }
}

pub(crate) trait IoResultExt<T> {
    fn fs_context(self, action: &'static str, path: &Path) -> Result<T, SeedError>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn fs_context(self, action: &'static str, path: &Path) -> Result<T, SeedError> {
        self.map_err(|err| SeedError::fs(action, path, err))
    }
}
