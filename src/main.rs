// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use sheet_scan::{app, cli::Args, logging};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose)?;
    app::run(args)
}
