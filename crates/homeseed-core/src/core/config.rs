use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "HOMESEED_HOME";
pub const SOURCE_ROOT_ENV: &str = "HOMESEED_SOURCE_ROOT";

#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub quiet: bool,
    pub json: bool,
    pub no_color: bool,
}

#[derive(Debug, Clone)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    #[must_use]
    pub fn capture() -> Self {
        Self {
            vars: env::vars().collect(),
        }
    }

    #[must_use]
    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    #[must_use]
    pub fn testing(pairs: &[(&str, &str)]) -> Self {
        let vars = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Self { vars }
    }
}

/// Where activation runs and which dataset it reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) home: PathBuf,
    pub(crate) source_root_override: Option<PathBuf>,
}

impl Config {
    /// `cwd` stands in for the home directory when `HOMESEED_HOME` is unset;
    /// hosts start activation from the user's home.
    #[must_use]
    pub fn from_snapshot(snapshot: &EnvSnapshot, cwd: &Path) -> Self {
        let home = snapshot
            .var(HOME_ENV)
            .map_or_else(|| cwd.to_path_buf(), |value| absolutize(cwd, value));
        let source_root_override = snapshot
            .var(SOURCE_ROOT_ENV)
            .map(|value| absolutize(cwd, value));
        Self {
            home,
            source_root_override,
        }
    }

    #[must_use]
    pub fn with_home(mut self, home: Option<&Path>, cwd: &Path) -> Self {
        if let Some(home) = home {
            self.home = cwd.join(home);
        }
        self
    }

    #[must_use]
    pub fn home(&self) -> &Path {
        &self.home
    }

    #[must_use]
    pub fn source_root_override(&self) -> Option<&Path> {
        self.source_root_override.as_deref()
    }
}

fn absolutize(cwd: &Path, value: &str) -> PathBuf {
    let path = Path::new(value);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_defaults_to_working_directory() {
        let config = Config::from_snapshot(&EnvSnapshot::testing(&[]), Path::new("/home/u"));
        assert_eq!(config.home(), Path::new("/home/u"));
        assert_eq!(config.source_root_override(), None);
    }

    #[test]
    fn env_overrides_are_resolved_against_cwd() {
        let snapshot = EnvSnapshot::testing(&[
            (HOME_ENV, "users/alex"),
            (SOURCE_ROOT_ENV, "/mnt/reference/example"),
        ]);
        let config = Config::from_snapshot(&snapshot, Path::new("/srv"));
        assert_eq!(config.home(), Path::new("/srv/users/alex"));
        assert_eq!(
            config.source_root_override(),
            Some(Path::new("/mnt/reference/example"))
        );
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let snapshot = EnvSnapshot::testing(&[(HOME_ENV, ""), (SOURCE_ROOT_ENV, "")]);
        let config = Config::from_snapshot(&snapshot, Path::new("/home/u"));
        assert_eq!(config.home(), Path::new("/home/u"));
        assert_eq!(config.source_root_override(), None);
    }

    #[test]
    fn explicit_home_wins() {
        let snapshot = EnvSnapshot::testing(&[(HOME_ENV, "/home/env")]);
        let config = Config::from_snapshot(&snapshot, Path::new("/cwd"))
            .with_home(Some(Path::new("/home/flag")), Path::new("/cwd"));
        assert_eq!(config.home(), Path::new("/home/flag"));
    }
}
