/**
 * Content items as the remote store reports them,
 *  the single content-kind classification and the
 *  mapping from an item to its file under the
 *  local content root.
 */
pub mod content;
/**
 * The local list of known items. Written on every
 *  pull, read as the source of truth on push.
 */
pub mod manifest;

pub mod prelude {
    pub use crate::content::{ContentItem, ContentKind, ContentPaths};
    pub use crate::manifest::{ManifestError, ManifestStore, MANIFEST_FILE_NAME};
}
