use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use filetime::FileTime;
use walkdir::WalkDir;

use super::error::{IoResultExt, SeedError};

/// Outcome of applying the freshness rule to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CopyDecision {
    Copied,
    UpToDate,
}

/// Tallies from mirroring one subtree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MirrorStats {
    pub(crate) directories_created: usize,
    pub(crate) files_copied: usize,
    pub(crate) files_up_to_date: usize,
    pub(crate) skipped_special: usize,
}

/// Remove `path` if it is a symbolic link. The link target is never touched.
pub(crate) fn remove_symlink(path: &Path) -> Result<bool, SeedError> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(SeedError::fs("stat", path, err)),
    };
    if !meta.file_type().is_symlink() {
        return Ok(false);
    }
    // Windows directory links must be removed with `remove_dir`.
    fs::remove_file(path)
        .or_else(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                return Ok(());
            }
            fs::remove_dir(path)
        })
        .fs_context("remove symlink", path)?;
    Ok(true)
}

/// Create `path` (and parents) unless it is already a directory.
/// Returns whether anything was created.
pub(crate) fn ensure_dir(path: &Path) -> Result<bool, SeedError> {
    if path.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(path).fs_context("create directory", path)?;
    Ok(true)
}

/// True when anything, including a dangling symlink, occupies `path`.
pub(crate) fn path_occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Copy `src` over `dst` when `dst` is missing or strictly older than `src`.
///
/// A copy carries contents, permission bits, and access/modification times.
pub(crate) fn copy_if_newer(src: &Path, dst: &Path) -> Result<CopyDecision, SeedError> {
    let src_meta = fs::metadata(src).fs_context("stat", src)?;
    let dst_meta = match fs::metadata(dst) {
        Ok(meta) => Some(meta),
        Err(err) if err.kind() == io::ErrorKind::NotFound => None,
        Err(err) => return Err(SeedError::fs("stat", dst, err)),
    };

    if let Some(dst_meta) = &dst_meta {
        let src_mtime = src_meta.modified().fs_context("read mtime of", src)?;
        let dst_mtime = dst_meta.modified().fs_context("read mtime of", dst)?;
        if src_mtime <= dst_mtime {
            return Ok(CopyDecision::UpToDate);
        }
        if dst_meta.permissions().readonly() {
            make_writable(dst, dst_meta.permissions())?;
        }
    }

    fs::copy(src, dst).fs_context("copy", dst)?;
    filetime::set_file_times(
        dst,
        FileTime::from_last_access_time(&src_meta),
        FileTime::from_last_modification_time(&src_meta),
    )
    .fs_context("set times on", dst)?;
    Ok(CopyDecision::Copied)
}

#[cfg(unix)]
fn make_writable(path: &Path, perms: fs::Permissions) -> Result<(), SeedError> {
    use std::os::unix::fs::PermissionsExt;
    let mode = perms.mode() | 0o200;
    tracing::trace!(path = %path.display(), mode, "restoring owner write bit");
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).fs_context("chmod", path)
}

#[cfg(not(unix))]
fn make_writable(path: &Path, mut perms: fs::Permissions) -> Result<(), SeedError> {
    tracing::trace!(path = %path.display(), "clearing read-only flag");
    perms.set_readonly(false);
    fs::set_permissions(path, perms).fs_context("chmod", path)
}

/// Deep-copy the tree at `src` into `dst`, applying [`copy_if_newer`] to every file.
///
/// Existing destination directories are reused. Symlinks inside the source are
/// followed, so a dangling one fails the walk. Directory modification times are
/// carried over once their contents are in place; directory permissions are not,
/// so a read-only dataset never yields a destination that cannot be refreshed.
pub(crate) fn mirror_tree<F>(
    src: &Path,
    dst: &Path,
    mut on_file: F,
) -> Result<MirrorStats, SeedError>
where
    F: FnMut(&Path, &Path, CopyDecision),
{
    let mut stats = MirrorStats::default();
    let mut dir_times: Vec<(PathBuf, FileTime)> = Vec::new();

    for entry in WalkDir::new(src).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(src).to_path_buf();
            SeedError::fs("walk", &path, io::Error::from(err))
        })?;
        let path = entry.path();
        let rel = path.strip_prefix(src).unwrap_or(path);
        let target = if rel.as_os_str().is_empty() {
            dst.to_path_buf()
        } else {
            dst.join(rel)
        };
        let file_type = entry.file_type();

        if file_type.is_dir() {
            if ensure_dir(&target)? {
                stats.directories_created += 1;
            }
            let meta = entry
                .metadata()
                .map_err(|err| SeedError::fs("stat", path, io::Error::from(err)))?;
            dir_times.push((target, FileTime::from_last_modification_time(&meta)));
        } else if file_type.is_file() {
            let decision = copy_if_newer(path, &target)?;
            match decision {
                CopyDecision::Copied => stats.files_copied += 1,
                CopyDecision::UpToDate => stats.files_up_to_date += 1,
            }
            on_file(path, &target, decision);
        } else {
            tracing::debug!(path = %path.display(), "skipping special file during mirror");
            stats.skipped_special += 1;
        }
    }

    // Children first so setting a parent's mtime is not undone by later writes.
    for (dir, mtime) in dir_times.into_iter().rev() {
        filetime::set_file_mtime(&dir, mtime).fs_context("set times on", &dir)?;
    }
    Ok(stats)
}

/// Create a directory link at `link` pointing at `target`.
pub(crate) fn link_dir(target: &Path, link: &Path) -> Result<(), SeedError> {
    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(target, link).fs_context("create symlink", link)
    }

    #[cfg(windows)]
    {
        std::os::windows::fs::symlink_dir(target, link).fs_context("create symlink", link)
    }

    #[cfg(not(any(unix, windows)))]
    {
        let _ = target;
        Err(SeedError::fs(
            "create symlink",
            link,
            io::Error::new(
                io::ErrorKind::Unsupported,
                "directory links are not supported on this platform",
            ),
        ))
    }
}
