//! Directory-convention schema lookup.
//!
//! Projects following the convention keep their SQL sources under
//! `<root>/<schema-dir>/<schema>/...`, with a marker file in the root
//! directory. The schema a snippet belongs to is read straight off its
//! path, so no configuration needs to travel with the file.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{RedropError, Result};

/// Default marker file identifying the project root.
pub const DEFAULT_MARKER: &str = ".sqlproject";

/// Default name of the folder whose child directories are schemas.
pub const DEFAULT_SCHEMA_DIR: &str = "schemas";

/// A source of schema names for search-path resolution.
///
/// The generator only consults the lookup when no explicit search path was
/// supplied and none was discovered in the file.
pub trait SchemaLookup {
    /// Resolves the schema the snippet should run under.
    ///
    /// # Errors
    ///
    /// Returns an error when no schema can be determined.
    fn schema(&self) -> Result<String>;
}

/// Finds the project root by walking from `dir` toward the filesystem root
/// until a directory containing `marker` is found.
///
/// # Errors
///
/// Returns [`RedropError::ProjectRootNotFound`] when the filesystem root is
/// reached without a hit.
pub fn find_project_root(dir: &Path, marker: &str) -> Result<PathBuf> {
    for candidate in dir.ancestors() {
        if candidate.join(marker).is_file() {
            debug!("project root: {}", candidate.display());
            return Ok(candidate.to_path_buf());
        }
    }
    Err(RedropError::ProjectRootNotFound(dir.to_path_buf()))
}

/// Derives a schema name from `dir`'s path relative to the project root:
/// the segment immediately following the first `schema_dir` folder.
///
/// # Errors
///
/// Returns [`RedropError::SchemaNotDerivable`] when `dir` is outside the
/// root or contains no such segment.
pub fn schema_from_path(root: &Path, dir: &Path, schema_dir: &str) -> Result<String> {
    let relative = dir
        .strip_prefix(root)
        .map_err(|_| RedropError::SchemaNotDerivable(dir.to_path_buf()))?;

    let mut components = relative.components();
    while let Some(component) = components.next() {
        if component.as_os_str() == schema_dir {
            if let Some(Component::Normal(name)) = components.next() {
                if let Some(schema) = name.to_str() {
                    return Ok(schema.to_string());
                }
            }
        }
    }

    Err(RedropError::SchemaNotDerivable(dir.to_path_buf()))
}

/// Schema lookup backed by the directory convention.
#[derive(Debug, Clone)]
pub struct ConventionLookup {
    dir: PathBuf,
    marker: String,
    schema_dir: String,
}

impl ConventionLookup {
    /// Creates a lookup rooted at the source file's directory.
    #[must_use]
    pub fn new(dir: PathBuf, marker: &str, schema_dir: &str) -> Self {
        Self {
            dir,
            marker: marker.to_string(),
            schema_dir: schema_dir.to_string(),
        }
    }
}

impl SchemaLookup for ConventionLookup {
    fn schema(&self) -> Result<String> {
        let root = find_project_root(&self.dir, &self.marker)?;
        schema_from_path(&root, &self.dir, &self.schema_dir)
    }
}
