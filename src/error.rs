// file: src/error.rs
// version: 1.0.0
// guid: 3f9a1c52-8e47-4d0b-a6c1-7b2e5d9f0a13

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AgentError>;

/// Error types for the mktcpip agent
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Command not found: {0}")]
    CommandNotFound(String),

    #[error("Command execution error: {0}")]
    Execution(String),

    /// The program ran but did not exit zero. `stderr` is kept verbatim.
    #[error("Command '{command}' failed with exit code {exit_code:?}: {stderr}")]
    CommandFailed {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    /// The run was refused before anything executed, e.g. in check mode
    #[error("Skipped: {0}")]
    Skipped(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl AgentError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new command-not-found error
    pub fn command_not_found(msg: impl Into<String>) -> Self {
        Self::CommandNotFound(msg.into())
    }

    /// Create a new execution error
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }

    /// Create a new skipped error
    pub fn skipped(msg: impl Into<String>) -> Self {
        Self::Skipped(msg.into())
    }

    /// Message reported back to the automation framework.
    ///
    /// A failed run of the wrapped program reports its stderr unmodified;
    /// everything else reports the error's display text.
    pub fn report_message(&self) -> String {
        match self {
            Self::CommandFailed { stderr, .. } => stderr.clone(),
            Self::Skipped(msg) => msg.clone(),
            other => other.to_string(),
        }
    }

    /// Exit code of the wrapped program, if it ran and exited normally
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::CommandFailed { exit_code, .. } => *exit_code,
            _ => None,
        }
    }
}
