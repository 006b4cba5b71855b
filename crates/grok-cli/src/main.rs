//! Indexer administration CLI
//!
//! Adds or removes indexed projects and refreshes the persisted
//! configuration file from a running web service, under a per-host
//! instance lock.

mod cli;
mod commands;
mod error;

use std::time::Duration;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Args, Operation};
use commands::OpContext;
use error::{CliError, Result};
use grok_fs::InstanceLock;
use grok_web::ServiceClient;

/// Program name; also names the instance lock file.
const PROGRAM: &str = "grokadm";

/// Bare name of the merge tool looked up on PATH when -c is not given.
const MERGE_TOOL: &str = "config-merge";

/// Bounded per-request timeout for service calls.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();
    init_tracing(args.debug);

    if let Err(e) = run(args).await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

async fn run(args: Args) -> Result<()> {
    if args.base.is_dir() {
        tracing::debug!("Using {} as instance base", args.base.display());
    } else {
        return Err(CliError::user(format!(
            "Not a directory: {}\nSet the base directory with the --base option.",
            args.base.display()
        )));
    }

    if let Some(roconfig) = &args.roconfig {
        if roconfig.is_file() {
            tracing::debug!("Using {} as read-only config", roconfig.display());
        } else {
            return Err(CliError::user(format!(
                "File {} does not exist",
                roconfig.display()
            )));
        }
    }

    if args.uri.trim().is_empty() {
        return Err(CliError::user("URI of the webapp not specified"));
    }

    let merge_spec = args.configmerge.as_deref().unwrap_or(MERGE_TOOL);
    let merge_tool = grok_tools::resolve(merge_spec).map_err(|_| {
        CliError::user(format!(
            "Merge tool {merge_spec} not found; use the --configmerge option to point at it"
        ))
    })?;

    let Some(operation) = args.operation() else {
        Args::command().print_help()?;
        return Err(CliError::user("no operation selected"));
    };

    let _lock = match InstanceLock::acquire(PROGRAM) {
        Ok(lock) => lock,
        Err(grok_fs::Error::AlreadyLocked { .. }) => {
            tracing::warn!("Already running, exiting.");
            return Err(CliError::user("another instance holds the lock"));
        }
        Err(e) => return Err(e.into()),
    };

    let client = ServiceClient::new(&args.uri, HTTP_TIMEOUT)?;
    let ctx = OpContext {
        client,
        base: args.base,
        roconfig: args.roconfig,
        merge_tool,
        doit: args.doit,
    };

    match operation {
        Operation::Add(projects) => {
            for project in &projects {
                commands::add_project(&ctx, project).await?;
            }
            commands::refresh_configuration(&ctx).await?;
        }
        Operation::Delete(projects) => {
            for project in &projects {
                commands::delete_project(&ctx, project).await?;
            }
            commands::refresh_configuration(&ctx).await?;
        }
        Operation::Refresh => {
            commands::refresh_configuration(&ctx).await?;
        }
    }

    if args.upload {
        commands::upload_configuration(&ctx).await?;
    }

    Ok(())
}
