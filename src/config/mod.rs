// file: src/config/mod.rs
// version: 1.0.0
// guid: 8c2d6e01-4b7f-4a93-9e15-d0a3c6f7b248

//! Configuration module for the mktcpip agent
//!
//! Holds the typed module parameters and the loader that reads them from
//! the parameter file handed over by the automation framework.

pub mod loader;

use crate::error::{AgentError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Parameters for a single mktcpip run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TcpipConfig {
    /// Name of the host
    #[serde(deserialize_with = "deserialize_string")]
    pub hostname: String,
    /// Internet address of the host
    #[serde(deserialize_with = "deserialize_string")]
    pub address: String,
    /// Network interface (e.g., en0)
    #[serde(deserialize_with = "deserialize_string")]
    pub interface: String,
    /// Subnet mask used for routing
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub netmask: Option<String>,
    /// Default gateway added to the routing table
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub gateway: Option<String>,
    /// Name server used for name resolution
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub nameserver: Option<String>,
    /// Domain of the name server; only valid together with `nameserver`
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub domain: Option<String>,
    /// Start the TCP/IP daemons after configuring
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub start_daemons: bool,
}

impl TcpipConfig {
    /// Create a config holding only the required parameters
    pub fn new(
        hostname: impl Into<String>,
        address: impl Into<String>,
        interface: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            address: address.into(),
            interface: interface.into(),
            ..Default::default()
        }
    }

    pub fn netmask(&self) -> Option<&str> {
        present(&self.netmask)
    }

    pub fn gateway(&self) -> Option<&str> {
        present(&self.gateway)
    }

    pub fn nameserver(&self) -> Option<&str> {
        present(&self.nameserver)
    }

    pub fn domain(&self) -> Option<&str> {
        present(&self.domain)
    }

    /// Validate the parameters before anything is executed.
    ///
    /// Only presence is checked here. Address syntax and friends are left to
    /// mktcpip itself.
    pub fn validate(&self) -> Result<()> {
        debug!("Validating TCP/IP parameters for host {}", self.hostname);

        for (name, value) in [
            ("hostname", &self.hostname),
            ("address", &self.address),
            ("interface", &self.interface),
        ] {
            if is_blank(value) {
                return Err(AgentError::validation(format!(
                    "Parameter '{}' is required and cannot be empty",
                    name
                )));
            }
        }

        if self.domain().is_some() && self.nameserver().is_none() {
            return Err(AgentError::validation(
                "Parameter 'domain' requires 'nameserver' to be set",
            ));
        }

        Ok(())
    }
}

/// A value counts as given only if it holds more than whitespace. The same
/// rule rejects blank required fields in `validate()`.
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !is_blank(v))
}

/// String parameter as written in YAML/JSON; numbers are taken as text
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Text(s) => s,
            Scalar::Int(n) => n.to_string(),
            Scalar::UInt(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
        }
    }
}

fn deserialize_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(String::from)
}

/// Blank strings are treated the same as a missing value
fn deserialize_optional_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(String::from).filter(|v| !is_blank(v)))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
    Text(String),
}

/// Accepts real booleans plus the spellings automation tools emit
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Flag>::deserialize(deserializer)? {
        None => Ok(false),
        Some(Flag::Bool(b)) => Ok(b),
        Some(Flag::Int(0)) => Ok(false),
        Some(Flag::Int(1)) => Ok(true),
        Some(Flag::Int(n)) => Err(serde::de::Error::custom(format!(
            "invalid boolean value: {}",
            n
        ))),
        Some(Flag::Text(s)) => parse_flag(&s).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid boolean value: {}", s))
        }),
    }
}

/// Parse a textual boolean such as `yes`, `off` or `1`
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "on" | "true" | "1" => Some(true),
        "no" | "n" | "off" | "false" | "0" => Some(false),
        _ => None,
    }
}
