//! `spdx-header-rewrite` — replace SPDX copyright headers with the UNIMOODLE GPL header.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]) and set up logging.
//! 2. Resolve the scan root: the directory holding this executable ([`config::scan_root`]).
//! 3. Walk the tree and keep `.php`, `.ts` and `.svelte` files ([`walker`], [`detector`]).
//! 4. Rewrite each file's header in place ([`transform`], [`shape`], [`license`]).
//! 5. Exit `0`, or `1` with the error chain if any file could not be read or written.

mod cli;
mod config;
mod detector;
mod license;
mod models;
mod shape;
mod transform;
mod walker;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use log::debug;

use cli::Cli;
use config::{scan_root, RewriteConfig};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red().bold());
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_filter())).init();

    let root = scan_root()?;
    debug!("Scanning {}", root.display());

    walker::rewrite_tree(&root, &RewriteConfig::default())?;
    Ok(())
}
