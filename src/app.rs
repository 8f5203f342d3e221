// src/app.rs
use std::io::{self, Write};

use anyhow::{Context, Result};
use sheet_scan_domain::KeywordQuery;
use sheet_scan_infra::{FsDirectoryWalker, InMemoryRootStore};
use sheet_scan_ports::root::RootStore;
use sheet_scan_usecase::ScanOrchestrator;
use tracing::debug;

use crate::{
    cli::{Args, Command},
    config::Settings,
    presentation::{self, OutputFormat},
};

/// Resolve settings, run the requested command and render its result to stdout.
///
/// Scan failures are part of the rendered envelope; only settings and output
/// errors come back as `Err`.
pub fn run(args: Args) -> Result<()> {
    let settings = Settings::load(args.config.as_deref(), args.root.clone()).context("invalid settings")?;
    let store = InMemoryRootStore::new(settings.project_root());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&args, &store, &mut out)?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

pub fn execute(args: &Args, store: &dyn RootStore, out: &mut impl Write) -> Result<()> {
    let format = OutputFormat::from(args.format);
    let root = store.get();
    debug!(root = %root.display(), "resolved project root");

    let walker = FsDirectoryWalker::new();
    let usecase = ScanOrchestrator::new(&walker);

    match &args.command {
        Command::Scan(scan) => {
            let outcome = usecase.scan_path(&scan.to_options(root));
            if scan.show_skipped {
                presentation::write_skipped(&mut io::stderr().lock(), &outcome.skipped)?;
            }
            presentation::write_scan(out, &outcome, format)?;
        }
        Command::Keywords { keywords } => {
            let outcome = usecase.scan_keywords(&KeywordQuery::from_csv(root, keywords));
            presentation::write_scan(out, &outcome, format)?;
        }
        Command::Count => presentation::write_count(out, &usecase.count_files(&root), format)?,
        Command::RootAccessible => presentation::write_accessible(out, usecase.root_accessible(&root), format)?,
        Command::Root => presentation::write_root(out, &root, format)?,
    }
    Ok(())
}
