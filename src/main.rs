use anyhow::Result;
use clap::Parser;
use cmapss_prep::{config::DEFAULT_DATA_DIR, logging::init_logging, Config, DatasetPreparer};
use std::path::PathBuf;
use tracing::info;

/// Extract the C-MAPSS archive and write `RUL_FD001.csv`.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Directory holding `CMAPSSData.zip`; extracted files and the CSV land here too
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    init_logging();
    let args = Args::parse();
    info!(data_dir = %args.data_dir.display(), "startup");

    // ─── 2) run the guarded pipeline ─────────────────────────────────
    let preparer = DatasetPreparer::new(Config::new(args.data_dir));
    let outcome = preparer.prepare()?;

    // ─── 3) report ───────────────────────────────────────────────────
    println!("{}", outcome);
    Ok(())
}
