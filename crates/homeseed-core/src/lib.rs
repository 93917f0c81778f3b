#![deny(clippy::all, warnings)]

mod core;

pub use homeseed_domain::{EntryKind, SeedLayout, SeedReport};

pub use crate::core::activate::{activate, list_entry_points, ActivateRequest};
pub use crate::core::config::{Config, EnvSnapshot, GlobalOptions, HOME_ENV, SOURCE_ROOT_ENV};
pub use crate::core::diagnostics::{ConsoleSink, DiagnosticsSink, Level, NullSink, TracingSink};
pub use crate::core::error::SeedError;
pub use crate::core::hooks::{
    activate_hook, entry_points, find_entry_point, plugin_activate, ActivationContext,
    EntryPoint, HookFn, ACTIVATE_HOOK_GROUP, DEFAULT_ENTRY_POINT, PLUGIN_ACTIVATE_GROUP,
};
pub use crate::core::outcome::{to_json_response, CommandStatus, ExecutionOutcome};
pub use crate::core::seed::seed;
