use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

use super::{RulTable, RUL_COLUMN};

/// Write `table` as a one-column CSV with a `RUL` header and no index.
///
/// Goes through a hidden `.tmp` sibling and a rename, so `path` only ever
/// appears complete. Returns the number of bytes written.
pub fn write_rul_csv<P: AsRef<Path>>(table: &RulTable, path: P) -> Result<u64> {
    let path = path.as_ref();
    let tmp_path = tmp_sibling(path);

    if let Err(e) = write_table(table, &tmp_path) {
        if let Err(rm) = fs::remove_file(&tmp_path) {
            warn!(path = %tmp_path.display(), error = %rm, "failed to remove temporary CSV");
        }
        return Err(e);
    }

    let size = fs::metadata(&tmp_path)
        .with_context(|| format!("reading metadata of {}", tmp_path.display()))?
        .len();
    fs::rename(&tmp_path, path).with_context(|| {
        format!("renaming {} -> {}", tmp_path.display(), path.display())
    })?;

    debug!(rows = table.len(), bytes = size, path = %path.display(), "CSV written");
    Ok(size)
}

fn write_table(table: &RulTable, tmp_path: &Path) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_path(tmp_path)
        .with_context(|| format!("creating {}", tmp_path.display()))?;

    wtr.write_record([RUL_COLUMN])
        .context("writing CSV header")?;
    for value in table.iter() {
        wtr.write_record([value])
            .with_context(|| format!("writing row to {}", tmp_path.display()))?;
    }
    wtr.flush()
        .with_context(|| format!("flushing {}", tmp_path.display()))?;
    Ok(())
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output.csv".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}
