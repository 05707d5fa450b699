// src/extract.rs

use anyhow::{bail, Context, Result};
use std::{
    fs::{self, File},
    io,
    path::{Path, PathBuf},
};
use tracing::{debug, info};
use zip::ZipArchive;

/// Extract every member of `zip_path` into `out_dir`, overwriting files that
/// are already there. Returns the extracted paths in archive order.
///
/// The archive handle lives only inside this call, so it is closed on every
/// exit path, including a failure halfway through.
#[tracing::instrument(level = "info", skip(zip_path, out_dir), fields(zip = %zip_path.as_ref().display()))]
pub fn extract_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    zip_path: P,
    out_dir: Q,
) -> Result<Vec<PathBuf>> {
    let zip_path = zip_path.as_ref();
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let file = File::open(zip_path)
        .with_context(|| format!("Failed to open ZIP file: {}", zip_path.display()))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("Failed to read ZIP archive: {}", zip_path.display()))?;

    let mut extracted = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).with_context(|| {
            format!("Failed to access ZIP entry #{} in {}", i, zip_path.display())
        })?;

        // reject absolute paths and `..` components
        let Some(relative) = entry.enclosed_name() else {
            bail!(
                "ZIP entry {:?} in {} escapes the output directory",
                entry.name(),
                zip_path.display()
            );
        };
        let dest = out_dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&dest)
                .with_context(|| format!("creating directory {}", dest.display()))?;
        } else {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating directory {}", parent.display()))?;
            }
            let mut out = File::create(&dest)
                .with_context(|| format!("creating {}", dest.display()))?;
            let bytes = io::copy(&mut entry, &mut out)
                .with_context(|| format!("extracting {} to {}", entry.name(), dest.display()))?;
            debug!(member = entry.name(), bytes, "extracted");
        }
        extracted.push(dest);
    }

    info!(members = extracted.len(), out_dir = %out_dir.display(), "archive extracted");
    Ok(extracted)
}

/// Build a ZIP at `path` from `(name, contents)` pairs. Names ending in `/`
/// become directory entries.
#[cfg(test)]
pub(crate) fn write_test_zip(path: &Path, members: &[(&str, &[u8])]) -> Result<()> {
    use std::io::Write;
    use zip::{write::SimpleFileOptions, CompressionMethod};

    let file = File::create(path)?;
    let mut zip = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, contents) in members {
        if name.ends_with('/') {
            zip.add_directory(*name, options)?;
        } else {
            zip.start_file(*name, options)?;
            zip.write_all(contents)?;
        }
    }
    zip.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::init_test_logging;
    use tempfile::TempDir;

    #[test]
    fn extracts_every_member() -> Result<()> {
        init_test_logging();
        let tmp = TempDir::new()?;
        let zip_path = tmp.path().join("bundle.zip");
        write_test_zip(
            &zip_path,
            &[
                ("RUL_FD001.txt", b"112 \n98 \n"),
                ("train_FD001.txt", b"1 1 -0.0007\n"),
                ("docs/", b""),
                ("docs/readme.txt", b"turbofan"),
            ],
        )?;

        let out = tmp.path().join("out");
        let extracted = extract_archive(&zip_path, &out)?;

        assert_eq!(extracted.len(), 4);
        for path in &extracted {
            assert!(path.exists(), "{} missing", path.display());
        }
        assert!(out.join("docs").is_dir());
        assert_eq!(fs::read(out.join("docs/readme.txt"))?, b"turbofan");
        assert_eq!(fs::read(out.join("RUL_FD001.txt"))?, b"112 \n98 \n");
        Ok(())
    }

    #[test]
    fn overwrites_previously_extracted_files() -> Result<()> {
        init_test_logging();
        let tmp = TempDir::new()?;
        let zip_path = tmp.path().join("bundle.zip");
        write_test_zip(&zip_path, &[("RUL_FD001.txt", b"7 \n")])?;
        fs::write(tmp.path().join("RUL_FD001.txt"), b"stale contents\n")?;

        extract_archive(&zip_path, tmp.path())?;

        assert_eq!(fs::read(tmp.path().join("RUL_FD001.txt"))?, b"7 \n");
        Ok(())
    }

    #[test]
    fn rejects_members_outside_out_dir() -> Result<()> {
        init_test_logging();
        let tmp = TempDir::new()?;
        let zip_path = tmp.path().join("evil.zip");
        write_test_zip(&zip_path, &[("../escaped.txt", b"nope")])?;

        let out = tmp.path().join("out");
        let err = extract_archive(&zip_path, &out).unwrap_err();

        assert!(err.to_string().contains("escapes the output directory"));
        assert!(!tmp.path().join("escaped.txt").exists());
        Ok(())
    }

    #[test]
    fn not_a_zip_is_an_error() -> Result<()> {
        init_test_logging();
        let tmp = TempDir::new()?;
        let zip_path = tmp.path().join("broken.zip");
        fs::write(&zip_path, b"definitely not a zip")?;

        let err = extract_archive(&zip_path, tmp.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to read ZIP archive"));
        Ok(())
    }
}
