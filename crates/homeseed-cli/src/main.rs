use atty::Stream;
use clap::Parser;
use color_eyre::{eyre::WrapErr, Result};
use homeseed_core::{
    ActivateRequest, CommandStatus, Config, DiagnosticsSink, EnvSnapshot, ExecutionOutcome,
    GlobalOptions, TracingSink,
};
use serde_json::Value;

mod cli;
mod style;

use cli::{CommandCli, HomeseedCli};
use style::Style;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = HomeseedCli::parse();
    init_tracing(cli.trace, cli.verbose);

    let global = GlobalOptions {
        quiet: cli.quiet,
        json: cli.json,
        no_color: cli.no_color,
    };

    let outcome = match &cli.command {
        CommandCli::Activate(args) => {
            let cwd =
                std::env::current_dir().wrap_err("failed to resolve the current directory")?;
            let config = Config::from_snapshot(&EnvSnapshot::capture(), &cwd)
                .with_home(args.home.as_deref(), &cwd);
            tracing::debug!(home = %config.home().display(), "resolved activation home");
            let request = ActivateRequest {
                entry_point: args.entry_point.clone(),
            };
            let sink: &dyn DiagnosticsSink = &TracingSink;
            homeseed_core::activate(&config, &request, Some(sink))
        }
        CommandCli::Hooks => homeseed_core::list_entry_points(),
    };

    let code = emit_output(&global, &outcome)?;
    if code == 0 {
        Ok(())
    } else {
        std::process::exit(code);
    }
}

fn init_tracing(trace: bool, verbose: u8) {
    let level = if trace {
        "trace"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = format!("homeseed={level},homeseed_core={level}");
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn emit_output(global: &GlobalOptions, outcome: &ExecutionOutcome) -> Result<i32> {
    let code = outcome.exit_code();
    let style = Style::new(global.no_color, atty::is(Stream::Stdout));

    if global.json {
        let payload = homeseed_core::to_json_response(outcome);
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else if !global.quiet {
        println!("{}", style.status(&outcome.status, &outcome.message));
        if let Some(hint) = hint_from_details(&outcome.details) {
            println!("{}", style.info(&format!("Hint: {hint}")));
        }
    } else if outcome.status != CommandStatus::Ok {
        eprintln!("{}", outcome.message);
    }

    Ok(code)
}

fn hint_from_details(details: &Value) -> Option<&str> {
    details
        .as_object()
        .and_then(|map| map.get("hint"))
        .and_then(Value::as_str)
}
