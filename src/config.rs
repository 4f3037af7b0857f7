/// Configuration module.
///
/// Loads the YAML settings file that tells the server where the docs live,
/// which tokens to index and how to describe the lookup tool.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Environment variable holding the config file path.
pub const CONFIG_ENV: &str = "TF_CONFIG";

// ── Default value functions ──────────────────────────────────────────

fn default_tool_description() -> String {
    "Look up Terraform/OpenTofu provider documentation for a fully qualified resource or data source name.".to_string()
}

// ── Config struct ────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the documentation tree.
    pub docs_path: PathBuf,

    /// Regular expression whose matches become index tokens.
    pub match_pattern: String,

    /// Description surfaced to MCP clients for `lookupProviderDocs`.
    #[serde(default = "default_tool_description")]
    pub tool_description: String,
}

// ── Config implementation ────────────────────────────────────────────

impl Config {
    /// Load configuration from a YAML file. A missing or unparseable file is an error.
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let path = config_path.as_ref();
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;

        let cfg = Self::from_yaml(&data)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;

        info!("Loaded configuration from {}", path.display());
        Ok(cfg)
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(data: &str) -> Result<Self> {
        serde_yaml::from_str(data).context("invalid YAML")
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            !self.docs_path.as_os_str().is_empty(),
            "docs_path must not be empty"
        );
        anyhow::ensure!(
            !self.match_pattern.is_empty(),
            "match_pattern must not be empty"
        );
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
docs_path: ./docs
match_pattern: '\b(?:google|aws)_[a-z0-9_]+\b'
tool_description: Look up provider docs
"#;

    #[test]
    fn test_load_from_yaml() {
        let config = Config::from_yaml(SAMPLE).unwrap();
        assert_eq!(config.docs_path, PathBuf::from("./docs"));
        assert_eq!(config.match_pattern, r"\b(?:google|aws)_[a-z0-9_]+\b");
        assert_eq!(config.tool_description, "Look up provider docs");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_tool_description() {
        let config = Config::from_yaml("docs_path: docs\nmatch_pattern: aws_s3_bucket\n").unwrap();
        assert_eq!(config.tool_description, default_tool_description());
    }

    #[test]
    fn test_missing_field() {
        assert!(Config::from_yaml("docs_path: docs\n").is_err());
    }

    #[test]
    fn test_validate_empty_pattern() {
        let config = Config::from_yaml("docs_path: docs\nmatch_pattern: ''\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_docs_path() {
        let config = Config::from_yaml("docs_path: ''\nmatch_pattern: x\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_file() {
        let mut temp = tempfile::NamedTempFile::new().unwrap();
        write!(temp, "{SAMPLE}").unwrap();

        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config.tool_description, "Look up provider docs");
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(Config::load(temp_dir.path().join("absent.yaml")).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = Config::from_yaml(SAMPLE).unwrap();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
    }
}
