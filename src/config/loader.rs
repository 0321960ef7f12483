// file: src/config/loader.rs
// version: 1.0.0
// guid: 51e7b3a9-2c64-4f08-8d1e-a9c4f2b60d75

//! Parameter file loading and environment variable substitution

use super::{parse_flag, TcpipConfig};
use crate::error::{AgentError, Result};
use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Set by the automation framework when it only wants a dry run
pub const CHECK_MODE_KEY: &str = "_ansible_check_mode";

/// mktcpip always mutates the host, so check mode is refused up front
pub const CHECK_MODE_MESSAGE: &str = "remote module (mktcpip) does not support check mode";

/// Parameter loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Load and validate module parameters from a JSON or YAML file
    pub fn load_params<P: AsRef<Path>>(&self, path: P) -> Result<TcpipConfig> {
        self.resolve_params(Some(path.as_ref()), Mapping::new())
    }

    /// Merge an optional parameter file with explicit overrides, then
    /// deserialize and validate the result.
    ///
    /// Keys in `overrides` replace the same keys from the file.
    pub fn resolve_params(&self, path: Option<&Path>, overrides: Mapping) -> Result<TcpipConfig> {
        let mut params = match path {
            Some(path) => self.read_mapping(path)?,
            None => Mapping::new(),
        };

        for (key, value) in overrides {
            params.insert(key, value);
        }

        let config: TcpipConfig = serde_yaml::from_value(Value::Mapping(params))?;
        config.validate()?;

        Ok(config)
    }

    /// Read a parameter file into a mapping.
    ///
    /// Files ending in `.json` go through serde_json, anything else through
    /// serde_yaml. Keys starting with `_` are internal to the automation
    /// framework and are dropped, after a check-mode request has been turned
    /// into [`AgentError::Skipped`].
    fn read_mapping(&self, path: &Path) -> Result<Mapping> {
        let content = fs::read_to_string(path).map_err(|e| {
            AgentError::config(format!(
                "Failed to read parameter file {}: {}",
                path.display(),
                e
            ))
        })?;

        let expanded = self.expand_env_vars(&content)?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let value: Value = if is_json {
            serde_json::from_str(&expanded)?
        } else {
            serde_yaml::from_str(&expanded)?
        };

        let mapping = match value {
            Value::Mapping(mapping) => mapping,
            Value::Null => Mapping::new(),
            _ => {
                return Err(AgentError::config(format!(
                    "Parameter file {} must contain a mapping",
                    path.display()
                )))
            }
        };

        if check_mode_requested(&mapping) {
            info!("Check mode requested, skipping {}", path.display());
            return Err(AgentError::skipped(CHECK_MODE_MESSAGE));
        }

        Ok(mapping
            .into_iter()
            .filter(|(key, _)| match key.as_str() {
                Some(name) if name.starts_with('_') => {
                    debug!("Ignoring internal parameter {}", name);
                    false
                }
                _ => true,
            })
            .collect())
    }

    /// Expand environment variables in parameter file content
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| AgentError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut result = content.to_string();
        let mut missing_vars = Vec::new();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];

            if let Some(value) = self.env_vars.get(var_name) {
                result = result.replace(placeholder, value);
            } else if !missing_vars.iter().any(|v| v == var_name) {
                missing_vars.push(var_name.to_string());
            }
        }

        if !missing_vars.is_empty() {
            return Err(AgentError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(result)
    }

    /// Set environment variable for substitution
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }
}

fn check_mode_requested(mapping: &Mapping) -> bool {
    match mapping.get(CHECK_MODE_KEY) {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => parse_flag(text).unwrap_or(false),
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        _ => false,
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
