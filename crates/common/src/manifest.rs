//! Manifest storage
//!
//! The manifest is the list of items from the last full remote enumeration,
//! kept as a pretty-printed JSON array at `<root>/content_all.json`. Pull
//! replaces it wholesale before transferring any bytes; push reads it once and
//! never writes it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::content::{ContentItem, ContentPaths};

/// Name of the manifest file inside the content root
pub const MANIFEST_FILE_NAME: &str = "content_all.json";

/// Reads and writes the manifest for one content root
#[derive(Debug, Clone)]
pub struct ManifestStore {
    paths: ContentPaths,
}

impl ManifestStore {
    pub fn new(paths: ContentPaths) -> Self {
        Self { paths }
    }

    pub fn path(&self) -> PathBuf {
        self.paths.manifest_path()
    }

    /// Replace the manifest with `items`.
    ///
    /// Creates the content root if needed. The document is written to a
    /// temporary sibling and renamed into place, so readers see either the
    /// previous manifest or the new one.
    pub fn save(&self, items: &[ContentItem]) -> Result<(), ManifestError> {
        let root = self.paths.root();
        fs::create_dir_all(root).map_err(|source| ManifestError::Io {
            path: root.to_path_buf(),
            source,
        })?;

        let json = serde_json::to_string_pretty(items).map_err(ManifestError::Encode)?;

        let path = self.path();
        let temp_path = self.paths.manifest_temp_path();
        atomic_write(&path, &temp_path, json.as_bytes()).map_err(|source| ManifestError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), items = items.len(), "manifest saved");
        Ok(())
    }

    /// Read the whole manifest.
    pub fn load(&self) -> Result<Vec<ContentItem>, ManifestError> {
        let path = self.path();
        let data = fs::read_to_string(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ManifestError::NotFound(path.clone())
            } else {
                ManifestError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        let items: Vec<ContentItem> =
            serde_json::from_str(&data).map_err(|source| ManifestError::Decode {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(path = %path.display(), items = items.len(), "manifest loaded");
        Ok(items)
    }
}

fn atomic_write(path: &Path, temp_path: &Path, data: &[u8]) -> io::Result<()> {
    fs::write(temp_path, data)?;

    if let Err(e) = fs::rename(temp_path, path) {
        let _ = fs::remove_file(temp_path);
        return Err(e);
    }

    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("manifest not found at {0} (run 'pull' first)")]
    NotFound(PathBuf),
    #[error("failed to decode manifest {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode manifest: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("manifest I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> ManifestStore {
        ManifestStore::new(ContentPaths::new(temp.path().join("data")))
    }

    #[test]
    fn test_save_creates_root_and_load_reads_back() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let items = vec![
            ContentItem::new("header/logo", "image/png", 10),
            ContentItem::new("config", "application/json", 0),
        ];

        assert!(!store.path().is_file());
        store.save(&items).unwrap();
        assert!(store.path().is_file());
        assert_eq!(store.load().unwrap(), items);
    }

    #[test]
    fn test_save_writes_pretty_json_with_remote_field_names() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store
            .save(&[ContentItem::new("a", "text/plain", 5)])
            .unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains('\n'));
        assert!(raw.contains("\"type\": \"text/plain\""));
        assert!(!temp.path().join("data/content_all.json.tmp").exists());
    }

    #[test]
    fn test_save_replaces_previous_manifest() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store
            .save(&[
                ContentItem::new("old", "text/plain", 1),
                ContentItem::new("older", "text/plain", 1),
            ])
            .unwrap();
        store.save(&[ContentItem::new("new", "text/css", 3)]).unwrap();

        let items = store.load().unwrap();
        assert_eq!(items, vec![ContentItem::new("new", "text/css", 3)]);
    }

    #[test]
    fn test_save_empty_list() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.save(&[]).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_manifest() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        match store.load() {
            Err(ManifestError::NotFound(path)) => assert_eq!(path, store.path()),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_manifest() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::create_dir_all(temp.path().join("data")).unwrap();
        fs::write(store.path(), "{ not json").unwrap();

        assert!(matches!(store.load(), Err(ManifestError::Decode { .. })));
    }

    #[test]
    fn test_save_fails_when_root_is_a_file() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("data");
        fs::write(&root, "not a directory").unwrap();
        let store = ManifestStore::new(ContentPaths::new(root));

        assert!(matches!(
            store.save(&[ContentItem::new("a", "text/plain", 1)]),
            Err(ManifestError::Io { .. })
        ));
    }
}
