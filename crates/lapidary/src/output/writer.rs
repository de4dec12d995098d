//! JSON writer for the record dataset and summary.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{LapidaryError, Result};
use crate::record::SpecimenRecord;
use crate::summary::Summary;

/// File name of the per-record dataset.
pub const DATA_FILE: &str = "data.json";
/// File name of the aggregate summary.
pub const SUMMARY_FILE: &str = "summary.json";

/// Mode of newly created outputs (rw-r--r--).
#[cfg(unix)]
const DEFAULT_MODE: u32 = 0o644;

/// Locations of the written artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub data: PathBuf,
    pub summary: PathBuf,
}

/// Write `data.json` and `summary.json` into `dir`, replacing existing files.
///
/// Both documents are serialized to temporary files in `dir` first and
/// only moved into place once both succeeded, so a failed run leaves the
/// previous outputs untouched.
pub fn write_outputs(
    dir: impl AsRef<Path>,
    records: &[SpecimenRecord],
    summary: &Summary,
) -> Result<OutputPaths> {
    let dir = dir.as_ref();

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| LapidaryError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }

    let data_tmp = write_temp(dir, records)?;
    let summary_tmp = write_temp(dir, summary)?;

    let paths = OutputPaths {
        data: dir.join(DATA_FILE),
        summary: dir.join(SUMMARY_FILE),
    };
    persist(data_tmp, &paths.data)?;
    persist(summary_tmp, &paths.summary)?;

    info!(
        data = %paths.data.display(),
        summary = %paths.summary.display(),
        records = records.len(),
        "wrote outputs"
    );
    Ok(paths)
}

fn write_temp<T: Serialize + ?Sized>(dir: &Path, value: &T) -> Result<NamedTempFile> {
    let io_err = |e| LapidaryError::Io {
        path: dir.to_path_buf(),
        source: e,
    };

    let mut file = NamedTempFile::new_in(dir).map_err(io_err)?;
    {
        let mut writer = BufWriter::new(file.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.write_all(b"\n").map_err(io_err)?;
        writer.flush().map_err(io_err)?;
    }
    Ok(file)
}

fn persist(file: NamedTempFile, path: &Path) -> Result<()> {
    // Temp files are created owner-only; match the file being replaced
    let permissions = match fs::metadata(path) {
        Ok(existing) => Some(existing.permissions()),
        Err(_) => default_permissions(),
    };
    if let Some(permissions) = permissions {
        file.as_file()
            .set_permissions(permissions)
            .map_err(|e| LapidaryError::Io {
                path: file.path().to_path_buf(),
                source: e,
            })?;
    }

    file.persist(path).map_err(|e| LapidaryError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;

    Some(fs::Permissions::from_mode(DEFAULT_MODE))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}
