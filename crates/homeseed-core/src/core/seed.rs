//! Materialize a user's `data` directory from the shared dataset.

use std::fs;
use std::path::Path;

use homeseed_domain::{EntryKind, SeedLayout, SeedReport};

use super::diagnostics::{DiagnosticsSink, Level};
use super::error::{IoResultExt, SeedError};
use super::fs::{
    copy_if_newer, ensure_dir, link_dir, mirror_tree, path_occupied, remove_symlink, CopyDecision,
};

/// Seed `layout.dest_root()` from `layout.source_root()`.
///
/// Safe to run on every activation: existing files are only rewritten when the
/// source copy is strictly newer, and the linked child is created once and then
/// left alone. A failure stops the run where it happened; anything already
/// copied stays in place and is picked up again next time.
///
/// # Errors
/// [`SeedError::SourceMissing`] when the dataset is absent (the destination
/// root has been normalized by then), [`SeedError::Filesystem`] for any I/O
/// failure.
pub fn seed(layout: &SeedLayout, sink: &dyn DiagnosticsSink) -> Result<SeedReport, SeedError> {
    let mut report = SeedReport::new(layout.source_root(), layout.subtree_root());

    normalize_dest_root(layout.dest_root(), &mut report, sink)
        .inspect_err(|err| log_failure(sink, err))?;

    let source_root = layout.source_root();
    if !source_root.exists() {
        let err = SeedError::SourceMissing {
            path: source_root.to_path_buf(),
        };
        log_failure(sink, &err);
        return Err(err);
    }

    mirror_children(layout, &mut report, sink).inspect_err(|err| log_failure(sink, err))?;

    sink.log(
        Level::Info,
        &format!("Seeded '{}': {}", report.subtree_root.display(), report.summary()),
    );
    Ok(report)
}

fn normalize_dest_root(
    dest_root: &Path,
    report: &mut SeedReport,
    sink: &dyn DiagnosticsSink,
) -> Result<(), SeedError> {
    if remove_symlink(dest_root)? {
        report.removed_dest_symlink = true;
        sink.log(
            Level::Info,
            &format!("Symlink '{}' has been removed.", dest_root.display()),
        );
    } else {
        sink.log(
            Level::Info,
            &format!("'{}' is not a symlink.", dest_root.display()),
        );
    }

    if ensure_dir(dest_root)? {
        report.directories_created += 1;
        sink.log(
            Level::Info,
            &format!("Directory '{}' has been created.", dest_root.display()),
        );
    } else {
        sink.log(
            Level::Debug,
            &format!("Directory '{}' already exists.", dest_root.display()),
        );
    }
    Ok(())
}

fn mirror_children(
    layout: &SeedLayout,
    report: &mut SeedReport,
    sink: &dyn DiagnosticsSink,
) -> Result<(), SeedError> {
    let source_root = layout.source_root();
    let subtree_root = layout.subtree_root();
    if ensure_dir(&subtree_root)? {
        report.directories_created += 1;
        sink.log(
            Level::Info,
            &format!("Directory '{}' has been created.", subtree_root.display()),
        );
    }

    let mut children = fs::read_dir(source_root)
        .fs_context("read directory", source_root)?
        .map(|entry| entry.map(|entry| entry.file_name()))
        .collect::<Result<Vec<_>, _>>()
        .fs_context("read directory", source_root)?;
    children.sort();

    for name in children {
        let child_src = source_root.join(&name);
        let child_dest = layout.child_dest(&name);
        let kind = layout.classify(&name, child_src.is_dir());
        sink.log(
            Level::Info,
            &format!(
                "Processing: {} to {} ({})",
                child_src.display(),
                child_dest.display(),
                kind.as_str()
            ),
        );

        match kind {
            EntryKind::LinkedDirectory => {
                link_child(&child_src, &child_dest, report, sink)?;
            }
            EntryKind::MirroredDirectory => {
                let stats = mirror_tree(&child_src, &child_dest, |_, to, decision| {
                    log_file_decision(sink, to, decision);
                })?;
                report.directories_created += stats.directories_created;
                report.files_copied += stats.files_copied;
                report.files_up_to_date += stats.files_up_to_date;
                if stats.skipped_special > 0 {
                    sink.log(
                        Level::Warn,
                        &format!(
                            "Skipped {} special file(s) under '{}'.",
                            stats.skipped_special,
                            child_src.display()
                        ),
                    );
                }
            }
            EntryKind::File => {
                let decision = copy_if_newer(&child_src, &child_dest)?;
                match decision {
                    CopyDecision::Copied => report.files_copied += 1,
                    CopyDecision::UpToDate => report.files_up_to_date += 1,
                }
                log_file_decision(sink, &child_dest, decision);
            }
        }
    }
    Ok(())
}

fn link_child(
    child_src: &Path,
    child_dest: &Path,
    report: &mut SeedReport,
    sink: &dyn DiagnosticsSink,
) -> Result<(), SeedError> {
    if path_occupied(child_dest) {
        report.links_kept += 1;
        sink.log(
            Level::Debug,
            &format!("'{}' already exists; leaving it in place.", child_dest.display()),
        );
        return Ok(());
    }
    let target = std::path::absolute(child_src).fs_context("resolve", child_src)?;
    link_dir(&target, child_dest)?;
    report.links_created += 1;
    sink.log(
        Level::Info,
        &format!(
            "Linked '{}' -> '{}'.",
            child_dest.display(),
            target.display()
        ),
    );
    Ok(())
}

fn log_file_decision(sink: &dyn DiagnosticsSink, dest: &Path, decision: CopyDecision) {
    let message = match decision {
        CopyDecision::Copied => format!("Copied '{}'.", dest.display()),
        CopyDecision::UpToDate => format!("'{}' is up to date.", dest.display()),
    };
    sink.log(Level::Debug, &message);
}

fn log_failure(sink: &dyn DiagnosticsSink, err: &SeedError) {
    let message = match err {
        SeedError::SourceMissing { path } => {
            format!("Source directory '{}' does not exist.", path.display())
        }
        SeedError::Filesystem { source, .. } => format!("{err}: {source}"),
    };
    sink.log(Level::Error, &message);
}
