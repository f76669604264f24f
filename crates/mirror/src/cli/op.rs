use std::error::Error;

use content_mirror::config::{ConfigError, ConfigOverrides, MirrorConfig};
use content_mirror::{ApiClient, ApiError, SyncEngine};

/// Everything an op may need, built once from the parsed arguments.
///
/// Configuration is resolved lazily so commands that never talk to the
/// remote (like `version`) run without credentials.
#[derive(Debug, Clone)]
pub struct OpContext {
    pub overrides: ConfigOverrides,
}

impl OpContext {
    pub fn new(overrides: ConfigOverrides) -> Self {
        Self { overrides }
    }

    /// Resolve the configuration and build an engine over the API client
    pub fn engine(&self) -> Result<SyncEngine<ApiClient>, SetupError> {
        let config = MirrorConfig::resolve(self.overrides.clone())?;
        let client = ApiClient::new(&config.base_url, &config.credentials)?;
        tracing::debug!(remote = %config.base_url, "api client ready");
        Ok(SyncEngine::new(client, config.paths, config.options))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to create API client: {0}")]
    Client(#[from] ApiError),
}

#[async_trait::async_trait]
pub trait Op: Send + Sync {
    type Error: Error + Send + Sync + 'static;
    type Output;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error>;
}

#[macro_export]
macro_rules! command_enum {
    ($(($variant:ident, $type:ty)),* $(,)?) => {
        #[derive(Subcommand, Debug, Clone)]
        pub enum Command {
            $($variant($type),)*
        }

        #[derive(Debug)]
        pub enum OpOutput {
            $($variant(<$type as $crate::cli::op::Op>::Output),)*
        }

        #[derive(Debug, thiserror::Error)]
        pub enum OpError {
            $(
                #[error(transparent)]
                $variant(<$type as $crate::cli::op::Op>::Error),
            )*
        }

        #[async_trait::async_trait]
        impl $crate::cli::op::Op for Command {
            type Output = OpOutput;
            type Error = OpError;

            async fn execute(&self, ctx: &$crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
                match self {
                    $(
                        Command::$variant(op) => {
                            op.execute(ctx).await
                                .map(OpOutput::$variant)
                                .map_err(OpError::$variant)
                        },
                    )*
                }
            }
        }

        impl std::fmt::Display for OpOutput {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        OpOutput::$variant(output) => write!(f, "{}", output),
                    )*
                }
            }
        }
    };
}
