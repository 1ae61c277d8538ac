// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! psr: run PowerShell scripts with bounded output and a metadata footer

mod color;
mod commands;
mod exit_error;
mod logging;
mod workdir;

use clap::{Parser, Subcommand};

use crate::commands::{footer, pattern, prune, run, which};
use crate::exit_error::ExitError;

#[derive(Parser)]
#[command(
    name = "psr",
    version,
    about = "Run PowerShell scripts with bounded output and a metadata footer",
    styles = color::styles()
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a script and print its output followed by the metadata footer
    Run(run::RunArgs),
    /// Extract the metadata footer from a previous result
    Footer(footer::FooterArgs),
    /// Show which PowerShell executable would be used
    Which,
    /// Remove expired overflow files now
    Prune,
    /// Print the "always allow" pattern for a script
    Pattern(pattern::PatternArgs),
}

#[tokio::main]
async fn main() {
    logging::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run(args) => run::handle(args).await,
        Commands::Footer(args) => footer::handle(args),
        Commands::Which => which::handle(),
        Commands::Prune => prune::handle(),
        Commands::Pattern(args) => pattern::handle(args),
    };

    if let Err(e) = result {
        if let Some(exit) = e.downcast_ref::<ExitError>() {
            if !exit.message.is_empty() {
                eprintln!("{}", exit.message);
            }
            std::process::exit(exit.code);
        }
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
