mod args;
mod output;

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fleetdeck_common::FleetSnapshot;
use fleetdeck_dash::page::{architecture_page, overview_page, security_page};
use fleetdeck_dash::shell::{Shell, ViewId};
use fleetdeck_data::{sample_snapshot, SnapshotProvider, StaticProvider};

use crate::args::Args;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let provider = if args.strict {
        StaticProvider::strict(sample_snapshot())
    } else {
        StaticProvider::sample()
    };

    let mut shell = Shell::new();
    match ViewId::parse(&args.view) {
        Some(view) => shell.select(view),
        None => bail!(
            "unknown view '{}', available: {}",
            args.view,
            available_views()
        ),
    }

    let snapshot = provider
        .snapshot()
        .context("failed to load fleet snapshot")?;
    render(&snapshot, shell.selected(), args.json)?;

    if args.interactive {
        run_interactive(&provider, &mut shell, args.json)?;
    }

    Ok(())
}

fn render(snapshot: &FleetSnapshot, view: ViewId, json: bool) -> Result<()> {
    match view {
        ViewId::Overview => {
            let page = overview_page(snapshot);
            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                output::print_overview(&page);
            }
        }
        ViewId::Security => {
            let page = security_page(snapshot);
            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                output::print_security(&page);
            }
        }
        ViewId::ArchitectureManagement => {
            let page = architecture_page(snapshot);
            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                output::print_architecture(&page);
            }
        }
    }
    Ok(())
}

/// Read view ids from stdin, one per line, re-rendering after every
/// switch. Unknown ids keep the current selection.
fn run_interactive(provider: &StaticProvider, shell: &mut Shell, json: bool) -> Result<()> {
    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let input = line.trim();

        if input.is_empty() {
            prompt()?;
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }

        match ViewId::parse(input) {
            Some(view) => {
                shell.select(view);
                let snapshot = provider.snapshot()?;
                render(&snapshot, shell.selected(), json)?;
            }
            None => {
                println!(
                    "unknown view '{}', available: {}, quit",
                    input,
                    available_views()
                );
            }
        }
        prompt()?;
    }
    Ok(())
}

fn available_views() -> String {
    ViewId::ALL
        .iter()
        .map(|v| v.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn prompt() -> Result<()> {
    print!("fleetdeck> ");
    io::stdout().flush().context("failed to flush stdout")?;
    Ok(())
}
