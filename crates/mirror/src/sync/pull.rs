use common::prelude::{ContentItem, ContentPaths};

use super::{ContentTransport, Direction, SyncEngine, SyncError, SyncReport};

impl<T: ContentTransport> SyncEngine<T> {
    /// Mirror the remote store into the content root.
    ///
    /// The manifest is replaced as soon as the listing succeeds, before any
    /// bytes move. Fetch failures are tolerated per item; everything else
    /// aborts.
    pub async fn pull(&self) -> Result<SyncReport, SyncError> {
        let items = self.transport.list_items().await.map_err(SyncError::List)?;
        tracing::info!(
            items = items.len(),
            root = %self.paths.root().display(),
            "pulling content"
        );

        self.manifest.save(&items)?;

        let mut report = SyncReport::new(
            Direction::Pull,
            self.paths.root().to_path_buf(),
            items.len(),
        );
        for item in &items {
            self.pull_item(item, &mut report).await?;
        }

        tracing::info!(
            transferred = report.transferred,
            skipped_empty = report.skipped_empty,
            failed = report.failed.len(),
            "pull finished"
        );
        Ok(report)
    }

    async fn pull_item(&self, item: &ContentItem, report: &mut SyncReport) -> Result<(), SyncError> {
        if !item.is_transferable() {
            tracing::debug!(id = %item.id, length = item.length, "skipping empty item");
            report.skipped_empty += 1;
            return Ok(());
        }

        if !ContentPaths::is_safe_id(&item.id) {
            let err = SyncError::UnsafeId(item.id.clone());
            tracing::warn!(id = %item.id, "{}", err);
            report.record_failure(&item.id, &err);
            return Ok(());
        }

        let kind = item.kind();
        let path = self.paths.resolve_kind(&item.id, kind);
        if self.paths.is_reserved(&path) {
            let err = SyncError::ReservedPath {
                id: item.id.clone(),
                path,
            };
            tracing::warn!(id = %item.id, "{}", err);
            report.record_failure(&item.id, &err);
            return Ok(());
        }

        let bytes = match self.transport.fetch_bytes(&item.id, kind).await {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(id = %item.id, error = %err, "unable to get content from API, skipping");
                report.record_failure(&item.id, &err);
                return Ok(());
            }
        };

        let local_io = |source| SyncError::LocalIo {
            id: item.id.clone(),
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(local_io)?;
        }
        tokio::fs::write(&path, &bytes).await.map_err(local_io)?;

        tracing::debug!(
            id = %item.id,
            kind = %kind,
            bytes = bytes.len(),
            path = %path.display(),
            "pulled item"
        );
        report.transferred += 1;
        Ok(())
    }
}
