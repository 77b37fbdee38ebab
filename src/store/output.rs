use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ConvertError;
use crate::model::Resource;

/// Delete every file below `dir`, keeping the directories themselves.
/// A directory that does not exist yet counts as clean.
pub fn clean(dir: &Path) -> Result<usize, ConvertError> {
    if !dir.exists() {
        return Ok(0);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1) {
        let entry = entry.map_err(|source| ConvertError::DirWalk {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_dir() {
            files.push(entry.into_path());
        }
    }

    for path in &files {
        tracing::debug!(path = %path.display(), "Removing file");
        fs::remove_file(path).map_err(|source| ConvertError::FileRemove {
            path: path.clone(),
            source,
        })?;
    }
    Ok(files.len())
}

/// Writes resources into the template and CRD directories, remembering which
/// document last landed on each path.
pub struct OutputWriter {
    templates_dir: PathBuf,
    crds_dir: PathBuf,
    written: BTreeMap<PathBuf, usize>,
    collisions: usize,
}

impl OutputWriter {
    pub fn new(templates_dir: &Path, crds_dir: &Path) -> Self {
        Self {
            templates_dir: templates_dir.to_path_buf(),
            crds_dir: crds_dir.to_path_buf(),
            written: BTreeMap::new(),
            collisions: 0,
        }
    }

    pub fn write(&mut self, resource: &Resource) -> Result<PathBuf, ConvertError> {
        let path = resource.destination(&self.templates_dir, &self.crds_dir)?;

        if let Some(previous) = self.written.insert(path.clone(), resource.index()) {
            tracing::warn!(
                path = %path.display(),
                previous,
                current = resource.index(),
                "Two documents map to the same file; the later one wins"
            );
            self.collisions += 1;
        }

        tracing::info!(
            path = %path.display(),
            kind = resource.kind(),
            output = %resource.output_kind(),
            "Writing file"
        );

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ConvertError::DirCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = resource.to_yaml()?;
        fs::write(&path, content).map_err(|source| ConvertError::FileWrite {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Distinct files written so far.
    pub fn files(&self) -> usize {
        self.written.len()
    }

    pub fn collisions(&self) -> usize {
        self.collisions
    }
}
