// src/config.rs

use std::path::{Path, PathBuf};

/// Archive expected in the data directory. Downloaded by hand, never fetched.
pub const ARCHIVE_NAME: &str = "CMAPSSData.zip";
/// Raw RUL table shipped inside the archive.
pub const RAW_TABLE_NAME: &str = "RUL_FD001.txt";
/// Processed single-column CSV.
pub const OUTPUT_NAME: &str = "RUL_FD001.csv";

pub const DEFAULT_DATA_DIR: &str = "data";

pub const SOURCE_URL: &str =
    "https://data.nasa.gov/Aerospace/Turbofan-Engine-Degradation-Simulation-Data-Set/vrks-gjie";

/// Where the preparer looks for its inputs and writes its output.
///
/// Only the directory moves; the file names inside it are fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Config {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn archive_path(&self) -> PathBuf {
        self.data_dir.join(ARCHIVE_NAME)
    }

    pub fn raw_table_path(&self) -> PathBuf {
        self.data_dir.join(RAW_TABLE_NAME)
    }

    pub fn output_path(&self) -> PathBuf {
        self.data_dir.join(OUTPUT_NAME)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_live_under_data() {
        let cfg = Config::default();
        assert_eq!(cfg.archive_path(), Path::new("data/CMAPSSData.zip"));
        assert_eq!(cfg.raw_table_path(), Path::new("data/RUL_FD001.txt"));
        assert_eq!(cfg.output_path(), Path::new("data/RUL_FD001.csv"));
    }

    #[test]
    fn custom_dir_keeps_file_names() {
        let cfg = Config::new("/tmp/scratch");
        assert_eq!(cfg.data_dir(), Path::new("/tmp/scratch"));
        assert_eq!(
            cfg.output_path(),
            Path::new("/tmp/scratch").join(OUTPUT_NAME)
        );
    }
}
