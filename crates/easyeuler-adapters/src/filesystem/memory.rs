//! A fake filesystem for service tests.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use easyeuler_core::{
    application::{ApplicationError, ports::Filesystem},
    error::EulerResult,
};

/// Files and directories kept in maps. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<Tree>>,
}

#[derive(Debug, Default)]
struct Tree {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.tree().ok()?.files.get(path).cloned()
    }

    /// Every file path, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.tree()
            .map(|tree| tree.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn tree(&self) -> EulerResult<RwLockReadGuard<'_, Tree>> {
        Ok(self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?)
    }

    fn tree_mut(&self) -> EulerResult<RwLockWriteGuard<'_, Tree>> {
        Ok(self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?)
    }

    /// Seed a file, creating its parent directories.
    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) -> EulerResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }
        self.write_file(path, content)
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> EulerResult<()> {
        let mut tree = self.tree_mut()?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            tree.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> EulerResult<()> {
        let mut tree = self.tree_mut()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !tree.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        tree.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> EulerResult<()> {
        let content = self
            .read_file(from)
            .ok_or_else(|| ApplicationError::FilesystemError {
                path: from.to_path_buf(),
                reason: "No such file".into(),
            })?;
        self.write_file(to, &content)
    }

    fn exists(&self, path: &Path) -> bool {
        self.tree()
            .is_ok_and(|tree| tree.files.contains_key(path) || tree.directories.contains(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.tree().is_ok_and(|tree| tree.directories.contains(path))
    }

    fn list_files(&self, path: &Path) -> EulerResult<Vec<String>> {
        let tree = self.tree()?;

        if !tree.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Not a directory".into(),
            }
            .into());
        }

        Ok(tree
            .files
            .keys()
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }

    fn walk_files(&self, root: &Path) -> EulerResult<Vec<PathBuf>> {
        let tree = self.tree()?;

        Ok(tree
            .files
            .keys()
            .filter(|p| p.starts_with(root))
            .cloned()
            .collect())
    }
}
