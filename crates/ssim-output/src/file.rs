//! Writing datasets to disk.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::assembler::SsimDataset;
use crate::error::{OutputError, Result};

/// Writes a dataset to `path`.
///
/// The content goes to a temp file beside the target which is then renamed
/// over it, so a failed write never leaves a partial dataset behind.
pub fn write_dataset(dataset: &SsimDataset, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let temp_path = temp_path_for(path);
    if let Err(err) = write_temp(&temp_path, dataset.content().as_bytes()) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }
    if let Err(source) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(OutputError::AtomicWriteFailed {
            temp_path,
            target_path: path.to_path_buf(),
            source,
        });
    }

    info!(
        path = %path.display(),
        lines = dataset.summary.total_lines,
        "SSIM file written"
    );
    Ok(())
}

/// Writes a dataset into `dir` under its default file name.
pub fn write_dataset_to_dir(dataset: &SsimDataset, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(dataset.default_file_name());
    write_dataset(dataset, &path)?;
    Ok(path)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_temp(temp_path: &Path, bytes: &[u8]) -> Result<()> {
    let io_error = |operation: &'static str| {
        move |source: std::io::Error| OutputError::Io {
            operation,
            path: temp_path.to_path_buf(),
            source,
        }
    };
    let mut file = File::create(temp_path).map_err(io_error("create"))?;
    file.write_all(bytes).map_err(io_error("write"))?;
    file.sync_all().map_err(io_error("sync"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_file_sits_beside_target() {
        let path = Path::new("/data/out/KL_20251201_AMS.ssim");
        assert_eq!(
            temp_path_for(path),
            Path::new("/data/out/KL_20251201_AMS.ssim.tmp")
        );
    }
}
