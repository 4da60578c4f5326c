//! Resource Service - copy the data files problems refer to.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DomainError, Problem},
    error::EulerResult,
};

/// What happened to one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceOutcome {
    Created { name: String, path: PathBuf },
    /// Target existed and overwriting was declined.
    Skipped { name: String, path: PathBuf },
}

/// Copies resource files out of the resources directory, falling back to
/// bundled contents for names the directory does not have.
pub struct ResourceService {
    filesystem: Box<dyn Filesystem>,
    resources_dir: PathBuf,
    bundled: BTreeMap<String, String>,
}

impl ResourceService {
    pub fn new(filesystem: Box<dyn Filesystem>, resources_dir: impl Into<PathBuf>) -> Self {
        Self {
            filesystem,
            resources_dir: resources_dir.into(),
            bundled: BTreeMap::new(),
        }
    }

    /// Add `(name, contents)` pairs used when the resources directory has
    /// no file of that name.
    pub fn with_bundled<'a>(
        mut self,
        resources: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        self.bundled.extend(
            resources
                .into_iter()
                .map(|(name, content)| (name.to_string(), content.to_string())),
        );
        self
    }

    /// Resource names for `problem`, or every available resource when `None`.
    pub fn resources_for(&self, problem: Option<&Problem>) -> EulerResult<Vec<String>> {
        match problem {
            Some(p) if !p.has_resources() => Err(DomainError::NoResources { id: p.id }.into()),
            Some(p) => Ok(p.resources.clone()),
            None => {
                let mut names: BTreeSet<String> = self.bundled.keys().cloned().collect();
                if self.filesystem.is_dir(&self.resources_dir) {
                    names.extend(self.filesystem.list_files(&self.resources_dir)?);
                }
                Ok(names.into_iter().collect())
            }
        }
    }

    /// Copy `resources` to `destination`.
    ///
    /// Several resources (or a directory destination) go to
    /// `destination/<name>`; a single resource with a non-directory
    /// destination is copied to `destination` itself. `overwrite` is asked
    /// about every target that already exists.
    #[instrument(skip_all, fields(count = resources.len(), destination = %destination.display()))]
    pub fn generate(
        &self,
        resources: &[String],
        destination: &Path,
        overwrite: &mut dyn FnMut(&Path) -> bool,
    ) -> EulerResult<Vec<ResourceOutcome>> {
        let multiple = resources.len() > 1;

        if multiple && !self.filesystem.is_dir(destination) {
            if self.filesystem.exists(destination) {
                return Err(ApplicationError::NotADirectory {
                    path: destination.to_path_buf(),
                }
                .into());
            }
            debug!("Creating destination directory");
            self.filesystem.create_dir_all(destination)?;
        }

        let into_dir = multiple || self.filesystem.is_dir(destination);
        let mut outcomes = Vec::with_capacity(resources.len());

        for name in resources {
            let target = if into_dir {
                destination.join(name)
            } else {
                destination.to_path_buf()
            };

            if self.filesystem.exists(&target) && !overwrite(&target) {
                outcomes.push(ResourceOutcome::Skipped {
                    name: name.clone(),
                    path: target,
                });
                continue;
            }

            let source = self.resources_dir.join(name);
            match self.bundled.get(name) {
                Some(content) if !self.filesystem.exists(&source) => {
                    debug!(resource = %name, "Using bundled resource");
                    self.filesystem.write_file(&target, content)?;
                }
                _ => self.filesystem.copy_file(&source, &target)?,
            }
            info!(resource = %name, target = %target.display(), "Resource copied");
            outcomes.push(ResourceOutcome::Created {
                name: name.clone(),
                path: target,
            });
        }

        Ok(outcomes)
    }
}
