use clap::Args;

use content_mirror::{SyncError, SyncReport};

use crate::cli::op::{Op, OpContext, SetupError};

/// Upload every item listed in the manifest from the content directory
#[derive(Args, Debug, Clone)]
pub struct Push;

#[derive(Debug, thiserror::Error)]
pub enum PushError {
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error("push failed: {0}")]
    Sync(#[from] SyncError),
}

#[async_trait::async_trait]
impl Op for Push {
    type Error = PushError;
    type Output = SyncReport;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        let engine = ctx.engine()?;
        Ok(engine.push().await?)
    }
}
