//! Where seeding progress messages go.
//!
//! The seeder never prints directly; it reports through a [`DiagnosticsSink`]
//! handed in by whichever host adapter invoked it.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        };
        f.write_str(label)
    }
}

pub trait DiagnosticsSink {
    fn log(&self, level: Level, message: &str);
}

impl<F> DiagnosticsSink for F
where
    F: Fn(Level, &str),
{
    fn log(&self, level: Level, message: &str) {
        self(level, message);
    }
}

/// Forwards to `tracing`; used when the host has installed a subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn log(&self, level: Level, message: &str) {
        match level {
            Level::Debug => tracing::debug!("{message}"),
            Level::Info => tracing::info!("{message}"),
            Level::Warn => tracing::warn!("{message}"),
            Level::Error => tracing::error!("{message}"),
        }
    }
}

/// Plain console output. Debug messages are dropped; errors go to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl DiagnosticsSink for ConsoleSink {
    fn log(&self, level: Level, message: &str) {
        match level {
            Level::Debug => {}
            Level::Info | Level::Warn => println!("{message}"),
            Level::Error => eprintln!("{message}"),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn log(&self, _level: Level, _message: &str) {}
}
