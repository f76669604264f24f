pub use clap::Parser;

use std::path::PathBuf;

use content_mirror::config::ConfigOverrides;
use content_mirror::process::LogConfig;

#[derive(Parser, Debug)]
#[command(name = "mirror")]
#[command(about = "Back up and restore Magda content to and from a local directory")]
#[command(version)]
pub struct Args {
    /// Load configuration options from a JSON config file
    #[arg(short = 'f', long = "config", global = true)]
    pub config_path: Option<PathBuf>,

    /// Base URL of the Magda API
    #[arg(long = "url", global = true)]
    pub base_url: Option<String>,

    /// API key id for the Magda API
    #[arg(long, global = true)]
    pub api_key_id: Option<String>,

    /// API key for the Magda API
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Continue on error
    #[arg(short = 'c', long = "continue", global = true)]
    pub continue_on_error: bool,

    /// Local content directory (defaults to ./data)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: tracing::Level,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: crate::Command,
}

impl Args {
    pub fn config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_path: self.config_path.clone(),
            base_url: self.base_url.clone(),
            api_key_id: self.api_key_id.clone(),
            api_key: self.api_key.clone(),
            continue_on_error: self.continue_on_error,
            data_dir: self.data_dir.clone(),
        }
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            log_level: self.log_level,
            log_dir: self.log_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Command;

    #[test]
    fn test_parse_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "mirror",
            "pull",
            "--url",
            "https://magda.example.com",
            "--api-key-id",
            "id",
            "--api-key",
            "key",
            "-c",
        ])
        .unwrap();

        assert!(matches!(args.command, Command::Pull(_)));
        let overrides = args.config_overrides();
        assert_eq!(overrides.base_url.as_deref(), Some("https://magda.example.com"));
        assert_eq!(overrides.api_key_id.as_deref(), Some("id"));
        assert_eq!(overrides.api_key.as_deref(), Some("key"));
        assert!(overrides.continue_on_error);
        assert_eq!(args.log_level, tracing::Level::INFO);
    }

    #[test]
    fn test_parse_config_shorthand() {
        let args = Args::try_parse_from(["mirror", "push", "-f", "magda.json"]).unwrap();
        assert!(matches!(args.command, Command::Push(_)));
        assert_eq!(args.config_path, Some(PathBuf::from("magda.json")));
        assert!(!args.continue_on_error);
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Args::try_parse_from(["mirror", "sync"]).is_err());
        assert!(Args::try_parse_from(["mirror"]).is_err());
    }
}
