// file: src/lib.rs
// version: 1.0.0
// guid: 4b0e7a92-d6c3-4f18-85a2-c9f1e3d07b64

//! # mktcpip agent
//!
//! Automation module that sets the minimal TCP/IP values of a host (hostname,
//! address, interface and optionally netmask, gateway, name server, domain
//! and daemon startup) by running `mktcpip` once and reporting the outcome as
//! a JSON result.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod result;

pub use command::{build_args, MktcpipCommand, DEFAULT_PROGRAM};
pub use config::TcpipConfig;
pub use error::{AgentError, Result};
pub use executor::{CommandOutput, CommandRunner, Executor, SystemRunner};
pub use result::ModuleResult;

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
