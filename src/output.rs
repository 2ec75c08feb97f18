//! Output directory handling.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

/// Errors that can occur while preparing the output directory
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// Creation denied, or the parent directory is missing
    #[error("I/O error creating {path}: {source}")]
    IoError {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Path exists but is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// What [`ensure_dir`] found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    /// The directory was missing and has been created
    Created,
    /// The directory was already there; nothing changed
    Existing,
}

/// Create `path` if it does not exist.
///
/// Creation is not recursive: the parent must already exist. Calling this
/// again on the same path is a no-op returning [`DirStatus::Existing`].
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<DirStatus, OutputError> {
    let path = path.as_ref();

    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => {
            debug!("Output directory {} already exists", path.display());
            return Ok(DirStatus::Existing);
        }
        Ok(_) => return Err(OutputError::NotADirectory(path.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(OutputError::IoError {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    fs::create_dir(path).map_err(|source| OutputError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Created output directory {}", path.display());
    Ok(DirStatus::Created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("export");

        assert_eq!(ensure_dir(&target).unwrap(), DirStatus::Created);
        assert!(target.is_dir());
    }

    #[test]
    fn test_idempotent() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("pic");

        assert_eq!(ensure_dir(&target).unwrap(), DirStatus::Created);
        let marker = target.join("example.png");
        fs::write(&marker, b"png").unwrap();

        assert_eq!(ensure_dir(&target).unwrap(), DirStatus::Existing);
        assert!(target.is_dir());
        assert_eq!(fs::read(&marker).unwrap(), b"png");
        assert_eq!(fs::read_dir(&target).unwrap().count(), 1);
    }

    #[test]
    fn test_not_recursive() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("missing").join("export");

        let err = ensure_dir(&target).unwrap_err();
        assert!(matches!(err, OutputError::IoError { .. }));
        assert!(!dir.path().join("missing").exists());
    }

    #[test]
    fn test_file_in_the_way() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("export");
        fs::write(&target, b"not a dir").unwrap();

        let err = ensure_dir(&target).unwrap_err();
        assert!(matches!(err, OutputError::NotADirectory(_)));
        assert_eq!(fs::read(&target).unwrap(), b"not a dir");
    }
}
