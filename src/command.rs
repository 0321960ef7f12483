// file: src/command.rs
// version: 1.0.0
// guid: c4a80f6d-19e3-4b52-b7d0-6e2f9a1c3b84

//! Argument vector construction for mktcpip

use crate::config::TcpipConfig;
use std::fmt;

/// Program invoked when no override is given
pub const DEFAULT_PROGRAM: &str = "mktcpip";

/// Build the mktcpip argument vector for `config`.
///
/// The first element is `program`. Flags are always emitted in the order
/// `-h -a -i [-m] [-g] [-n [-d]] [-s]`. `-d` is only ever emitted after
/// `-n`, so a domain without a name server is dropped here.
pub fn build_args(program: &str, config: &TcpipConfig) -> Vec<String> {
    let mut args = vec![
        program.to_string(),
        "-h".to_string(),
        config.hostname.clone(),
        "-a".to_string(),
        config.address.clone(),
        "-i".to_string(),
        config.interface.clone(),
    ];

    if let Some(netmask) = config.netmask() {
        args.extend(["-m".to_string(), netmask.to_string()]);
    }

    if let Some(gateway) = config.gateway() {
        args.extend(["-g".to_string(), gateway.to_string()]);
    }

    if let Some(nameserver) = config.nameserver() {
        args.extend(["-n".to_string(), nameserver.to_string()]);
        if let Some(domain) = config.domain() {
            args.extend(["-d".to_string(), domain.to_string()]);
        }
    }

    if config.start_daemons {
        args.push("-s".to_string());
    }

    args
}

/// A fully assembled mktcpip invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MktcpipCommand {
    args: Vec<String>,
}

impl MktcpipCommand {
    pub fn new(program: &str, config: &TcpipConfig) -> Self {
        Self {
            args: build_args(program, config),
        }
    }

    /// Program name (first element of the argument vector)
    pub fn program(&self) -> &str {
        &self.args[0]
    }

    /// Full argument vector, program included
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn into_args(self) -> Vec<String> {
        self.args
    }
}

// For log output only; never handed to a shell.
impl fmt::Display for MktcpipCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.args.join(" "))
    }
}
