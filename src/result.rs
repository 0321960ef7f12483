// file: src/result.rs
// version: 1.0.0
// guid: 0b6e9d27-f35a-4c81-9a4e-2d7c8b1f5e60

//! Result record reported back to the automation framework

use crate::error::AgentError;
use serde::{Deserialize, Serialize};

/// Outcome of a module run, serialized as JSON on stdout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleResult {
    pub changed: bool,
    pub msg: String,
    pub failed: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub skipped: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rc: Option<i32>,
}

impl ModuleResult {
    /// Successful run: the host configuration was changed
    pub fn changed(msg: impl Into<String>) -> Self {
        Self {
            changed: true,
            msg: msg.into(),
            failed: false,
            skipped: false,
            rc: Some(0),
        }
    }

    /// Failed run; nothing is reported as changed
    pub fn failure(msg: impl Into<String>, rc: Option<i32>) -> Self {
        Self {
            changed: false,
            msg: msg.into(),
            failed: true,
            skipped: false,
            rc,
        }
    }

    /// Nothing was run and nothing changed
    pub fn skipped(msg: impl Into<String>) -> Self {
        Self {
            changed: false,
            msg: msg.into(),
            failed: false,
            skipped: true,
            rc: None,
        }
    }

    pub fn is_success(&self) -> bool {
        !self.failed
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<&AgentError> for ModuleResult {
    fn from(err: &AgentError) -> Self {
        match err {
            AgentError::Skipped(_) => Self::skipped(err.report_message()),
            _ => Self::failure(err.report_message(), err.exit_code()),
        }
    }
}

impl From<AgentError> for ModuleResult {
    fn from(err: AgentError) -> Self {
        Self::from(&err)
    }
}
