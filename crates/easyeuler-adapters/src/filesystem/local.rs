//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use easyeuler_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{EulerError, EulerResult},
};
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> EulerResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> EulerResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> EulerResult<()> {
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| map_io_error(from, e, "copy file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_files(&self, path: &Path) -> EulerResult<Vec<String>> {
        let entries = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory"))?;
            if entry.path().is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    fn walk_files(&self, root: &Path) -> EulerResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: e.path().unwrap_or(root).to_path_buf(),
                reason: format!("Failed to walk directory: {e}"),
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> EulerError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn walk_is_recursive_and_sorted() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        fs.create_dir_all(&dir.path().join("b")).unwrap();
        fs.write_file(&dir.path().join("c.py"), "").unwrap();
        fs.write_file(&dir.path().join("a.py"), "").unwrap();
        fs.write_file(&dir.path().join("b/euler_002.py"), "").unwrap();

        let files = fs.walk_files(dir.path()).unwrap();
        let relative: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            relative,
            vec![
                PathBuf::from("a.py"),
                PathBuf::from("b/euler_002.py"),
                PathBuf::from("c.py"),
            ]
        );
    }

    #[test]
    fn list_files_skips_directories() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        fs.create_dir_all(&dir.path().join("sub")).unwrap();
        fs.write_file(&dir.path().join("names.txt"), "x").unwrap();
        fs.write_file(&dir.path().join("keys.txt"), "y").unwrap();

        assert_eq!(
            fs.list_files(dir.path()).unwrap(),
            vec!["keys.txt".to_string(), "names.txt".to_string()]
        );
    }

    #[test]
    fn copy_reports_missing_source() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let err = fs
            .copy_file(&dir.path().join("missing"), &dir.path().join("out"))
            .unwrap_err();
        assert!(err.to_string().contains("copy file"));
    }
}
