// src/prepare.rs

use anyhow::{bail, Context, Result};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
    time::Instant,
};
use tracing::{info, warn};

use crate::{
    config::{Config, ARCHIVE_NAME, RAW_TABLE_NAME, SOURCE_URL},
    extract::extract_archive,
    process::{load_rul_table, write_rul_csv, ValueKind},
};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepareReport {
    /// Every archive member, as extracted under the data directory.
    pub extracted: Vec<PathBuf>,
    pub output: PathBuf,
    pub rows: usize,
    pub value_kind: ValueKind,
}

/// How `prepare` ended. Only malformed input or I/O failures are errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    MissingArchive { archive: PathBuf },
    AlreadyProcessed { output: PathBuf },
    Prepared(PrepareReport),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::MissingArchive { archive } => {
                let dir = archive.parent().unwrap_or_else(|| Path::new("."));
                writeln!(
                    f,
                    "Error: `{}` not found in the `{}` directory.",
                    ARCHIVE_NAME,
                    dir.display()
                )?;
                writeln!(f, "Please download the file from the NASA website:")?;
                writeln!(f, "{}", SOURCE_URL)?;
                write!(
                    f,
                    "And place it at '{}' before running this tool again.",
                    archive.display()
                )
            }
            Outcome::AlreadyProcessed { output } => write!(
                f,
                "Processed data already exists at {}. Skipping preparation.",
                output.display()
            ),
            Outcome::Prepared(report) => write!(
                f,
                "Processed data successfully saved to {} ({} rows)",
                report.output.display(),
                report.rows
            ),
        }
    }
}

/// Turns the hand-downloaded C-MAPSS archive into `RUL_FD001.csv`, once.
#[derive(Debug, Clone, Default)]
pub struct DatasetPreparer {
    config: Config,
}

impl DatasetPreparer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the guarded pipeline: archive present, output absent, then
    /// extract, load and write. Guards return early without touching disk.
    pub fn prepare(&self) -> Result<Outcome> {
        let data_dir = self.config.data_dir();
        if !data_dir.exists() {
            fs::create_dir_all(data_dir)
                .with_context(|| format!("creating data directory {}", data_dir.display()))?;
            info!(dir = %data_dir.display(), "created data directory");
        }

        let archive = self.config.archive_path();
        if !archive.exists() {
            warn!(archive = %archive.display(), "archive not found; nothing to do");
            return Ok(Outcome::MissingArchive { archive });
        }

        let output = self.config.output_path();
        if output.exists() {
            info!(output = %output.display(), "processed data already exists; skipping");
            return Ok(Outcome::AlreadyProcessed { output });
        }

        let start = Instant::now();
        info!(archive = %archive.display(), "unzipping and processing");
        let extracted = extract_archive(&archive, data_dir)?;

        let raw = self.config.raw_table_path();
        if !raw.is_file() {
            bail!(
                "{} did not contain {} (expected at {})",
                archive.display(),
                RAW_TABLE_NAME,
                raw.display()
            );
        }

        let table = load_rul_table(&raw)?;
        write_rul_csv(&table, &output)?;

        info!(
            output = %output.display(),
            rows = table.len(),
            elapsed = ?start.elapsed(),
            "processed data saved"
        );
        Ok(Outcome::Prepared(PrepareReport {
            extracted,
            output,
            rows: table.len(),
            value_kind: table.value_kind(),
        }))
    }
}
