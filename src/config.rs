use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration file structure for mlboard.
///
/// Allows users to save gateway settings and reuse them across runs.
/// Configuration files are loaded from the current directory or specified
/// path; environment variables override whatever the file provides.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Platform gateway settings
    #[serde(default)]
    pub gateway: GatewayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GatewayConfig {
    /// Base URL of the platform API gateway
    #[serde(default = "default_api_gateway")]
    pub api_gateway: String,

    /// HTTP request timeout in milliseconds
    #[serde(default = "default_build_timeout_ms")]
    pub build_timeout_ms: u64,

    /// Interval between log polls in milliseconds
    #[serde(default = "default_poll_timeout_ms")]
    pub poll_timeout_ms: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_gateway: default_api_gateway(),
            build_timeout_ms: default_build_timeout_ms(),
            poll_timeout_ms: default_poll_timeout_ms(),
        }
    }
}

fn default_api_gateway() -> String {
    "http://localhost".to_string()
}

fn default_build_timeout_ms() -> u64 {
    18000
}

fn default_poll_timeout_ms() -> u64 {
    10000
}

impl Config {
    /// Load configuration, apply environment overrides, and return the result.
    ///
    /// Searches for configuration files in this order:
    /// 1. Specified path
    /// 2. ./mlboard.toml
    /// 3. ./mlboard.json
    /// 4. ./mlboard.yaml
    /// 5. ./mlboard.yml
    ///
    /// Returns default configuration if no file is found. `MLBOARD_API_GATEWAY`,
    /// `MLBOARD_BUILD_TIMEOUT` and `MLBOARD_POLL_TIMEOUT` override the file
    /// values when set.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = if let Some(path) = path {
            Self::load_from_path(path)?
        } else {
            Self::load_from_candidates()?
        };

        config.apply_env_overrides()
    }

    fn load_from_candidates() -> Result<Self> {
        let candidates = ["mlboard.toml", "mlboard.json", "mlboard.yaml", "mlboard.yml"];

        for candidate in &candidates {
            let path = Path::new(candidate);
            if path.exists() {
                return Self::load_from_path(path);
            }
        }

        // No config file found, return defaults
        Ok(Self::default())
    }

    /// Load configuration from a specific file path.
    fn load_from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        match extension {
            "toml" => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display())),
            "json" => serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display())),
            "yaml" | "yml" => serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display())),
            _ => {
                // Try TOML first, then JSON, then YAML
                toml::from_str(&contents)
                    .or_else(|_| serde_json::from_str(&contents))
                    .or_else(|_| serde_yaml::from_str(&contents))
                    .with_context(|| format!("Failed to parse config file: {}", path.display()))
            }
        }
    }

    fn apply_env_overrides(mut self) -> Result<Self> {
        if let Ok(gateway) = std::env::var("MLBOARD_API_GATEWAY") {
            self.gateway.api_gateway = gateway;
        }

        if let Ok(raw) = std::env::var("MLBOARD_BUILD_TIMEOUT") {
            self.gateway.build_timeout_ms = raw
                .parse()
                .with_context(|| format!("Invalid MLBOARD_BUILD_TIMEOUT value: {raw}"))?;
        }

        if let Ok(raw) = std::env::var("MLBOARD_POLL_TIMEOUT") {
            self.gateway.poll_timeout_ms = raw
                .parse()
                .with_context(|| format!("Invalid MLBOARD_POLL_TIMEOUT value: {raw}"))?;
        }

        Ok(self)
    }
}
