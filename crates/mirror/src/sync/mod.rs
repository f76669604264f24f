//! Pull and push pipelines
//!
//! ```text
//! pull:  list ──> save manifest ──> for each item: fetch ──> write file
//! push:  load manifest ──> for each item: open file ──> put
//! ```
//!
//! Items are handled one at a time, in listing (pull) or manifest (push)
//! order. Items with `length <= 0` are never transferred in either
//! direction.
//!
//! ## Failure policy
//!
//! - A failed listing, manifest write or manifest read aborts the run before
//!   any item is touched.
//! - During pull, a failed fetch is logged and the item is skipped; the
//!   manifest still lists it. A failed local write aborts the run.
//! - During push, any failure aborts the run unless
//!   [`SyncOptions::continue_on_error`] is set, in which case the item is
//!   logged, recorded in the [`SyncReport`] and skipped.
//!
//! Nothing is rolled back and nothing is retried.

mod pull;
mod push;
mod report;
mod transport;

#[cfg(test)]
mod testkit;

pub use report::{Direction, ItemFailure, SyncReport};
pub use transport::ContentTransport;

use std::io;
use std::path::PathBuf;

use common::prelude::{ContentPaths, ManifestError, ManifestStore};

use crate::api::client::ApiError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Skip items that fail to push instead of aborting the run
    pub continue_on_error: bool,
}

/// Drives pulls and pushes between one remote and one content root.
///
/// The engine assumes it is the only writer of the content root. Running a
/// pull and a push (or two pulls) against the same directory at the same
/// time is unsupported: manifest and file writes are not locked.
pub struct SyncEngine<T> {
    transport: T,
    paths: ContentPaths,
    manifest: ManifestStore,
    options: SyncOptions,
}

impl<T: ContentTransport> SyncEngine<T> {
    pub fn new(transport: T, paths: ContentPaths, options: SyncOptions) -> Self {
        let manifest = ManifestStore::new(paths.clone());
        Self {
            transport,
            paths,
            manifest,
            options,
        }
    }

    pub fn paths(&self) -> &ContentPaths {
        &self.paths
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("failed to list remote content: {0}")]
    List(#[source] ApiError),
    #[error("{id}: failed to push: {source}")]
    Push {
        id: String,
        #[source]
        source: ApiError,
    },
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error("{id}: local I/O error at {}: {source}", .path.display())]
    LocalIo {
        id: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{0}: id would leave the content root")]
    UnsafeId(String),
    #[error("{id}: would overwrite the manifest at {}", .path.display())]
    ReservedPath { id: String, path: PathBuf },
}
