//! Top-level shadowguard configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ExclusionConfig, OutputConfig, PolicyConfig, ReportConfig, ScanConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SHADOWGUARD_*`)
/// 3. Project config (`shadowguard.toml` in the project directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShadowguardConfig {
    pub scan: ScanConfig,
    pub policy: PolicyConfig,
    pub exclusions: ExclusionConfig,
    pub output: OutputConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub main_root: Option<PathBuf>,
    pub clean_root: Option<PathBuf>,
    pub extension: Option<String>,
    pub mode: Option<String>,
    pub output: Option<PathBuf>,
    pub report_max_entries: Option<usize>,
}

impl ShadowguardConfig {
    /// Load configuration with 4-layer resolution rooted at `project_dir`.
    pub fn load(
        project_dir: &Path,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = project_dir.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            ::tracing::debug!(path = %project_config_path.display(), "loaded project config");
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ShadowguardConfig) -> Result<(), ConfigError> {
        if let Some(ref ext) = config.scan.extension {
            if ext.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.extension".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
            if ext.starts_with('.') {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.extension".to_string(),
                    message: "must not start with '.'".to_string(),
                });
            }
        }
        if config.report.max_entries == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "report.max_entries".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ShadowguardConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ShadowguardConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut ShadowguardConfig, other: &ShadowguardConfig) {
        if other.scan.main_root.is_some() {
            base.scan.main_root = other.scan.main_root.clone();
        }
        if other.scan.clean_root.is_some() {
            base.scan.clean_root = other.scan.clean_root.clone();
        }
        if other.scan.extension.is_some() {
            base.scan.extension = other.scan.extension.clone();
        }
        if other.policy.mode.is_some() {
            base.policy.mode = other.policy.mode.clone();
        }
        if other.exclusions.manual.is_some() {
            base.exclusions.manual = other.exclusions.manual.clone();
        }
        if other.output.path.is_some() {
            base.output.path = other.output.path.clone();
        }
        if other.report.max_entries.is_some() {
            base.report.max_entries = other.report.max_entries;
        }
    }

    /// Apply environment variable overrides.
    /// Empty values are treated as unset.
    fn apply_env_overrides(config: &mut ShadowguardConfig) {
        if let Some(val) = env_value("SHADOWGUARD_MAIN_ROOT") {
            config.scan.main_root = Some(PathBuf::from(val));
        }
        if let Some(val) = env_value("SHADOWGUARD_CLEAN_ROOT") {
            config.scan.clean_root = Some(PathBuf::from(val));
        }
        if let Some(val) = env_value("SHADOWGUARD_EXTENSION") {
            config.scan.extension = Some(val);
        }
        if let Some(val) = env_value("SHADOWGUARD_MODE") {
            config.policy.mode = Some(val);
        }
        if let Some(val) = env_value("SHADOWGUARD_OUTPUT") {
            config.output.path = Some(PathBuf::from(val));
        }
        if let Some(val) = env_value("SHADOWGUARD_REPORT_MAX") {
            match val.parse::<usize>() {
                Ok(v) => config.report.max_entries = Some(v),
                Err(_) => {
                    ::tracing::warn!(value = %val, "ignoring non-numeric SHADOWGUARD_REPORT_MAX");
                }
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ShadowguardConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.main_root {
            config.scan.main_root = Some(v.clone());
        }
        if let Some(ref v) = cli.clean_root {
            config.scan.clean_root = Some(v.clone());
        }
        if let Some(ref v) = cli.extension {
            config.scan.extension = Some(v.clone());
        }
        if let Some(ref v) = cli.mode {
            config.policy.mode = Some(v.clone());
        }
        if let Some(ref v) = cli.output {
            config.output.path = Some(v.clone());
        }
        if let Some(v) = cli.report_max_entries {
            config.report.max_entries = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
