// Remote side: authenticated client for the content API
pub mod api;

// Run configuration (config file + flags)
pub mod config;

// Logging setup for the binary
pub mod process;

// Pull and push pipelines
pub mod sync;

pub mod version;

// Re-exports for consumers
pub use api::client::{ApiClient, ApiCredentials, ApiError};
pub use config::{ConfigError, ConfigFile, ConfigOverrides, MirrorConfig};
pub use sync::{ContentTransport, SyncEngine, SyncError, SyncOptions, SyncReport};
