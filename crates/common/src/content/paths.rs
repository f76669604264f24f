use std::path::{Path, PathBuf};

use super::kind::ContentKind;
use crate::manifest::MANIFEST_FILE_NAME;

/// Default content root, relative to the working directory
pub const DEFAULT_CONTENT_ROOT: &str = "data";

/// Maps content items onto files under a single local content root.
///
/// The mapping is pure: the same id and type always land on the same path,
/// whatever ran before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPaths {
    root: PathBuf,
}

impl Default for ContentPaths {
    fn default() -> Self {
        Self::new(DEFAULT_CONTENT_ROOT)
    }
}

impl ContentPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the manifest file inside the content root
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE_NAME)
    }

    /// Temporary sibling the manifest is written to before being renamed
    pub fn manifest_temp_path(&self) -> PathBuf {
        self.manifest_path().with_extension("json.tmp")
    }

    /// Whether `path` belongs to the manifest store and must never hold item bytes
    pub fn is_reserved(&self, path: &Path) -> bool {
        path == self.manifest_path() || path == self.manifest_temp_path()
    }

    /// Local file for an item with the given content type.
    ///
    /// Parameters are ignored, so `text/plain; charset=utf-8` maps like `text/plain`.
    pub fn resolve(&self, id: &str, content_type: &str) -> PathBuf {
        self.resolve_kind(id, ContentKind::classify(content_type))
    }

    /// Local file for an already classified item.
    ///
    /// `/` in the id becomes nested directories under the root. A leading
    /// `/` is dropped so the result never escapes to the filesystem root.
    pub fn resolve_kind(&self, id: &str, kind: ContentKind) -> PathBuf {
        let id = id.trim_start_matches('/');
        match kind.extension() {
            Some(ext) => self.root.join(format!("{}{}", id, ext)),
            None => self.root.join(id),
        }
    }

    /// Whether an id can be written under the root without leaving it.
    ///
    /// Rejects empty ids and ids with empty, `.` or `..` segments.
    pub fn is_safe_id(id: &str) -> bool {
        !id.is_empty()
            && id
                .split(|c: char| c == '/' || c == '\\')
                .all(|segment| !segment.is_empty() && segment != "." && segment != "..")
    }
}
