//! Entry points the host plugin loader discovers by group and name.
//!
//! Both adapters run the same [`seed`]; they differ only in where diagnostics
//! go. `activate_hook` is handed the host's logger, `plugin_activate` prints.

use std::path::PathBuf;

use homeseed_domain::{SeedLayout, SeedReport};

use super::diagnostics::{ConsoleSink, DiagnosticsSink, Level, TracingSink};
use super::error::SeedError;
use super::seed::seed;

pub const ACTIVATE_HOOK_GROUP: &str = "server_extension.activate_hook";
pub const PLUGIN_ACTIVATE_GROUP: &str = "server_extension.plugin_activate";
pub const DEFAULT_ENTRY_POINT: &str = "copy_to_home";

/// What the host knows at activation time.
pub struct ActivationContext<'a> {
    pub home: PathBuf,
    pub source_root_override: Option<PathBuf>,
    pub sink: Option<&'a dyn DiagnosticsSink>,
}

impl<'a> ActivationContext<'a> {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            source_root_override: None,
            sink: None,
        }
    }

    #[must_use]
    pub fn with_sink(mut self, sink: &'a dyn DiagnosticsSink) -> Self {
        self.sink = Some(sink);
        self
    }

    #[must_use]
    pub fn with_source_root(mut self, source_root: Option<PathBuf>) -> Self {
        self.source_root_override = source_root;
        self
    }

    #[must_use]
    pub fn layout(&self) -> SeedLayout {
        let layout = SeedLayout::for_home(&self.home);
        match &self.source_root_override {
            Some(root) => layout.with_source_root(root),
            None => layout,
        }
    }
}

pub type HookFn = for<'a> fn(&ActivationContext<'a>) -> Result<SeedReport, SeedError>;

#[derive(Clone, Copy)]
pub struct EntryPoint {
    pub group: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub hook: HookFn,
}

impl std::fmt::Debug for EntryPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryPoint")
            .field("group", &self.group)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

static ENTRY_POINTS: [EntryPoint; 2] = [
    EntryPoint {
        group: ACTIVATE_HOOK_GROUP,
        name: DEFAULT_ENTRY_POINT,
        description: "seed the user's data directory, logging through the host",
        hook: activate_hook,
    },
    EntryPoint {
        group: PLUGIN_ACTIVATE_GROUP,
        name: "home_seed_plugin",
        description: "seed the user's data directory, printing to the console",
        hook: plugin_activate,
    },
];

#[must_use]
pub fn entry_points() -> &'static [EntryPoint] {
    &ENTRY_POINTS
}

#[must_use]
pub fn find_entry_point(name: &str) -> Option<&'static EntryPoint> {
    ENTRY_POINTS.iter().find(|entry| entry.name == name)
}

/// Host-logger-aware activation. Falls back to `tracing` when the host did not
/// pass a sink.
///
/// # Errors
/// Whatever [`seed`] reports.
pub fn activate_hook(ctx: &ActivationContext<'_>) -> Result<SeedReport, SeedError> {
    let sink: &dyn DiagnosticsSink = match ctx.sink {
        Some(sink) => sink,
        None => &TracingSink,
    };
    sink.log(
        Level::Info,
        &format!("Plugin has been activated! home {}", ctx.home.display()),
    );
    seed(&ctx.layout(), sink)
}

/// Console activation; ignores any host sink.
///
/// # Errors
/// Whatever [`seed`] reports.
pub fn plugin_activate(ctx: &ActivationContext<'_>) -> Result<SeedReport, SeedError> {
    let sink = ConsoleSink;
    sink.log(Level::Info, "Plugin has been activated!");
    seed(&ctx.layout(), &sink)
}
