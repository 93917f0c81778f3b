use std::path::PathBuf;

use serde_json::{json, Value};

use super::config::Config;
use super::diagnostics::DiagnosticsSink;
use super::error::SeedError;
use super::hooks::{entry_points, find_entry_point, ActivationContext, DEFAULT_ENTRY_POINT};
use super::outcome::ExecutionOutcome;

#[derive(Debug, Clone, Default)]
pub struct ActivateRequest {
    pub entry_point: Option<String>,
}

/// Run a registered entry point against `config` and fold the result into an
/// outcome the CLI can render.
pub fn activate(
    config: &Config,
    request: &ActivateRequest,
    sink: Option<&dyn DiagnosticsSink>,
) -> ExecutionOutcome {
    let name = request
        .entry_point
        .as_deref()
        .unwrap_or(DEFAULT_ENTRY_POINT);
    let Some(entry) = find_entry_point(name) else {
        let known: Vec<_> = entry_points().iter().map(|entry| entry.name).collect();
        return ExecutionOutcome::user_error(
            format!("unknown entry point '{name}'"),
            json!({
                "entry_point": name,
                "known": known,
                "hint": format!("choose one of: {}", known.join(", ")),
            }),
        );
    };

    let mut ctx = ActivationContext::new(config.home())
        .with_source_root(config.source_root_override().map(PathBuf::from));
    if let Some(sink) = sink {
        ctx = ctx.with_sink(sink);
    }

    match (entry.hook)(&ctx) {
        Ok(report) => {
            let message = if report.is_noop() {
                format!("{} already up to date", report.subtree_root.display())
            } else {
                format!("seeded {} ({})", report.subtree_root.display(), report.summary())
            };
            let mut details = serde_json::to_value(&report).unwrap_or(Value::Null);
            if let Value::Object(map) = &mut details {
                map.insert("entry_point".into(), Value::String(entry.name.to_string()));
            }
            ExecutionOutcome::success(message, details)
        }
        Err(err) => error_outcome(entry.name, &err),
    }
}

fn error_outcome(entry_point: &str, err: &SeedError) -> ExecutionOutcome {
    match err {
        SeedError::SourceMissing { path } => ExecutionOutcome::user_error(
            err.to_string(),
            json!({
                "entry_point": entry_point,
                "reason": "source_missing",
                "source_root": path,
                "hint": "mount the shared dataset (or set HOMESEED_SOURCE_ROOT) and activate again",
            }),
        ),
        SeedError::Filesystem {
            action,
            path,
            source,
        } => ExecutionOutcome::failure(
            err.to_string(),
            json!({
                "entry_point": entry_point,
                "reason": "filesystem",
                "action": action,
                "path": path,
                "error": source.to_string(),
            }),
        ),
    }
}

/// Describe every registered entry point.
#[must_use]
pub fn list_entry_points() -> ExecutionOutcome {
    let entries: Vec<_> = entry_points()
        .iter()
        .map(|entry| {
            json!({
                "group": entry.group,
                "name": entry.name,
                "description": entry.description,
                "default": entry.name == DEFAULT_ENTRY_POINT,
            })
        })
        .collect();
    let message = entry_points()
        .iter()
        .map(|entry| format!("{}  {} = {}", entry.group, entry.name, entry.description))
        .collect::<Vec<_>>()
        .join("\n");
    ExecutionOutcome::success(message, json!({ "entry_points": entries }))
}
