use clap::Args;

use content_mirror::{SyncError, SyncReport};

use crate::cli::op::{Op, OpContext, SetupError};

/// Download every item and the manifest into the content directory
#[derive(Args, Debug, Clone)]
pub struct Pull;

#[derive(Debug, thiserror::Error)]
pub enum PullError {
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error("pull failed: {0}")]
    Sync(#[from] SyncError),
}

#[async_trait::async_trait]
impl Op for Pull {
    type Error = PullError;
    type Output = SyncReport;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        let engine = ctx.engine()?;
        Ok(engine.pull().await?)
    }
}
