//! Data sources: where the raw drop table text comes from

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Supplies the raw text of a named resource
///
/// Any failure is reported as [`Error::TransportFailure`]; callers do not
/// retry.
pub trait DataSource {
    fn fetch(&self, resource: &str) -> Result<String>;
}

/// A single file, returned whatever resource name is asked for
#[derive(Debug, Clone)]
pub struct FileSource {
    pub path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for FileSource {
    fn fetch(&self, _resource: &str) -> Result<String> {
        read_resource(&self.path)
    }
}

/// Looks a resource up by file name under one or more data roots
#[derive(Debug, Clone)]
pub struct DirectorySource {
    /// Roots are searched in order; the first match wins
    pub roots: Vec<PathBuf>,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(roots: &[P]) -> Self {
        Self {
            roots: roots.iter().map(|r| r.as_ref().to_path_buf()).collect(),
        }
    }

    /// Find the first file named `resource` under the roots
    pub fn locate(&self, resource: &str) -> Option<PathBuf> {
        for root in &self.roots {
            let found = WalkDir::new(root)
                .follow_links(true)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| match e {
                    Ok(entry) => Some(entry),
                    Err(err) => {
                        log::warn!("skipping unreadable entry under {}: {}", root.display(), err);
                        None
                    }
                })
                .find(|entry| entry.file_type().is_file() && entry.file_name() == resource);

            if let Some(entry) = found {
                return Some(entry.into_path());
            }
        }
        None
    }
}

impl DataSource for DirectorySource {
    fn fetch(&self, resource: &str) -> Result<String> {
        let path = self.locate(resource).ok_or_else(|| {
            Error::transport(
                resource,
                format!("not found under {} root(s)", self.roots.len()),
            )
        })?;
        log::debug!("resolved '{}' to {}", resource, path.display());
        read_resource(&path)
    }
}

fn read_resource(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::transport(path.display().to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_source_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drops.csv");
        fs::write(&path, "hello").unwrap();

        let source = FileSource::new(&path);
        assert_eq!(source.fetch("ignored").unwrap(), "hello");
    }

    #[test]
    fn test_file_source_missing_is_transport_failure() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("missing.csv"));

        assert!(matches!(
            source.fetch("data.csv"),
            Err(Error::TransportFailure { .. })
        ));
    }

    #[test]
    fn test_directory_source_finds_nested_resource() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("assets").join("tables");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("data.csv"), "nested").unwrap();
        fs::write(dir.path().join("other.csv"), "other").unwrap();

        let source = DirectorySource::new(&[dir.path()]);
        assert_eq!(source.fetch("data.csv").unwrap(), "nested");
    }

    #[test]
    fn test_directory_source_root_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(first.path().join("data.csv"), "first").unwrap();
        fs::write(second.path().join("data.csv"), "second").unwrap();

        let source = DirectorySource::new(&[second.path(), first.path()]);
        assert_eq!(source.fetch("data.csv").unwrap(), "second");
    }

    #[test]
    fn test_directory_source_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectorySource::new(&[dir.path()]);

        match source.fetch("data.csv") {
            Err(Error::TransportFailure { resource, .. }) => assert_eq!(resource, "data.csv"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
