use common::prelude::{ContentItem, ContentPaths};

use super::{ContentTransport, Direction, SyncEngine, SyncError, SyncReport};

impl<T: ContentTransport> SyncEngine<T> {
    /// Restore the remote store from the content root.
    ///
    /// The manifest is the only source of what to push; files in the root
    /// that it does not list are ignored.
    pub async fn push(&self) -> Result<SyncReport, SyncError> {
        let items = self.manifest.load()?;
        tracing::info!(
            items = items.len(),
            root = %self.paths.root().display(),
            continue_on_error = self.options.continue_on_error,
            "pushing content"
        );

        let mut report = SyncReport::new(
            Direction::Push,
            self.paths.root().to_path_buf(),
            items.len(),
        );
        for item in &items {
            if let Err(err) = self.push_item(item, &mut report).await {
                if !self.options.continue_on_error {
                    return Err(err);
                }
                tracing::warn!(id = %item.id, error = %err, "push failed, continuing");
                report.record_failure(&item.id, &err);
            }
        }

        tracing::info!(
            transferred = report.transferred,
            skipped_empty = report.skipped_empty,
            failed = report.failed.len(),
            "push finished"
        );
        Ok(report)
    }

    async fn push_item(&self, item: &ContentItem, report: &mut SyncReport) -> Result<(), SyncError> {
        // the remote rejects empty bodies
        if !item.is_transferable() {
            tracing::debug!(id = %item.id, length = item.length, "skipping empty item");
            report.skipped_empty += 1;
            return Ok(());
        }

        if !ContentPaths::is_safe_id(&item.id) {
            return Err(SyncError::UnsafeId(item.id.clone()));
        }

        let path = self.paths.resolve_kind(&item.id, item.kind());
        if self.paths.is_reserved(&path) {
            return Err(SyncError::ReservedPath {
                id: item.id.clone(),
                path,
            });
        }
        let file = tokio::fs::File::open(&path)
            .await
            .map_err(|source| SyncError::LocalIo {
                id: item.id.clone(),
                path: path.clone(),
                source,
            })?;

        self.transport
            .push_bytes(&item.id, &item.content_type, file)
            .await
            .map_err(|source| SyncError::Push {
                id: item.id.clone(),
                source,
            })?;

        tracing::debug!(
            id = %item.id,
            content_type = %item.content_type,
            path = %path.display(),
            "pushed item"
        );
        report.transferred += 1;
        Ok(())
    }
}
