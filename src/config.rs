use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};
use thiserror::Error;

use crate::call::FunctionReference;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Names of the remote protocol conventions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// The remote mapping that holds named values.
    #[serde(default = "default_variables_name")]
    pub variables_name: String,

    /// Key that always receives the most recently evaluated expression.
    #[serde(default = "default_last_result_name")]
    pub last_result_name: String,

    #[serde(default = "FunctionReference::builtin_dispatcher")]
    pub builtin_dispatcher: FunctionReference,

    /// Emit a debug event for every statement sent.
    #[serde(default = "default_true")]
    pub log_statements: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            variables_name: default_variables_name(),
            last_result_name: default_last_result_name(),
            builtin_dispatcher: FunctionReference::builtin_dispatcher(),
            log_statements: default_true(),
        }
    }
}

impl BridgeConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// `Variables['name']`
    pub fn variable_expression(&self, name: &str) -> String {
        format!("{}['{}']", self.variables_name, name)
    }
}

fn default_variables_name() -> String {
    "Variables".to_string()
}

fn default_last_result_name() -> String {
    "LastResult".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_serde() {
        let config = BridgeConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        tracing::debug!("{}", json);
        let deserialized = BridgeConfig::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = BridgeConfig::from_str("{}").unwrap();
        assert_eq!(config.variables_name, "Variables");
        assert_eq!(config.last_result_name, "LastResult");
        assert_eq!(config.builtin_dispatcher.to_string(), "xbmc.executebuiltin");
        assert!(config.log_statements);
    }

    #[test]
    fn test_partial_override() {
        let config =
            BridgeConfig::from_str(r#"{"last_result_name": "Out", "log_statements": false}"#)
                .unwrap();
        assert_eq!(config.last_result_name, "Out");
        assert!(!config.log_statements);
        assert_eq!(config.variable_expression("x"), "Variables['x']");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"variables_name": "Vars"}}"#).unwrap();
        let config = BridgeConfig::from_file(file.path()).unwrap();
        assert_eq!(config.variable_expression("a"), "Vars['a']");
    }

    #[test]
    fn test_from_file_missing() {
        let err = BridgeConfig::from_file("/nonexistent/bridge.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
