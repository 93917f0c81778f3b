#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::assert::Assert;
use filetime::{set_file_mtime, FileTime};
use serde_json::Value;
use tempfile::TempDir;

pub const README_MTIME: i64 = 1_700_000_000;

/// Shared dataset plus an empty home, laid out the way the host mounts them.
pub struct SeedFixture {
    pub temp: TempDir,
    pub source: PathBuf,
    pub home: PathBuf,
}

impl SeedFixture {
    pub fn data(&self) -> PathBuf {
        self.home.join("data")
    }

    pub fn subtree(&self) -> PathBuf {
        self.data().join("example")
    }
}

pub fn prepare_fixture(prefix: &str) -> SeedFixture {
    let temp = tempfile::Builder::new()
        .prefix(prefix)
        .tempdir()
        .expect("tempdir");
    let source = temp.path().join("dataset").join("example");
    write(&source.join("input").join("huge.parquet"), "pretend this is 500MB");
    write(&source.join("notebooks").join("a.ipynb"), "{\"cells\": []}");
    write(&source.join("readme.txt"), "read me");
    set_file_mtime(
        source.join("readme.txt"),
        FileTime::from_unix_time(README_MTIME, 0),
    )
    .expect("readme mtime");
    let home = temp.path().join("home");
    fs::create_dir_all(&home).expect("home");
    SeedFixture { temp, source, home }
}

pub fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("parent dir");
    }
    fs::write(path, contents).expect("write file");
}

pub fn mtime(path: &Path) -> FileTime {
    FileTime::from_last_modification_time(&fs::metadata(path).expect("metadata"))
}

pub fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false)
}

pub fn parse_json(assert: &Assert) -> Value {
    serde_json::from_slice(&assert.get_output().stdout).expect("valid json")
}
