// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use bbcheck_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Write `data` to `path`, replacing any existing file atomically.
    ///
    /// # Errors
    /// Returns [`InfrastructureError::FileWrite`] carrying the path.
    pub fn write(path: &Path, data: &[u8]) -> InfraResult<()> {
        Self::atomic_write(path, data).map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })
    }

    /// Write via a temp file in the same directory and rename over `path`.
    fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
        let parent = path.parent().ok_or_else(|| std::io::Error::other("path has no parent"))?;

        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let result = Self::write_then_rename(&tmp, path, data);
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result
    }

    fn write_then_rename(tmp: &Path, path: &Path, data: &[u8]) -> std::io::Result<()> {
        let mut w = BufWriter::new(File::create(tmp)?);
        w.write_all(data)?;
        w.flush()?;
        let _ = w.get_ref().sync_all();
        drop(w);
        fs::rename(tmp, path)
    }
}
