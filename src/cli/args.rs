// file: src/cli/args.rs
// version: 1.0.0
// guid: a5c1e9d3-0b74-4f2a-96d8-3e7b1f4c0a96

//! Command line argument definitions

use crate::command::DEFAULT_PROGRAM;
use crate::config::parse_flag;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mktcpip-agent")]
#[command(about = "Set the minimal TCP/IP values for a host through mktcpip")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Program to invoke instead of mktcpip
    #[arg(long, global = true, env = "MKTCPIP_PROGRAM", default_value = DEFAULT_PROGRAM)]
    pub program: String,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run mktcpip and print the result as JSON
    Apply(ParamArgs),

    /// Print the argument vector apply would run, without running it
    Render(ParamArgs),
}

/// Module parameters, from a parameter file and/or individual flags
#[derive(Args, Debug, Clone, Default)]
pub struct ParamArgs {
    #[arg(short, long, help = "JSON or YAML parameter file")]
    pub params: Option<PathBuf>,

    #[arg(long, help = "Name of the host")]
    pub hostname: Option<String>,

    #[arg(short, long, help = "Internet address of the host")]
    pub address: Option<String>,

    #[arg(short, long, help = "Network interface (e.g. en0)")]
    pub interface: Option<String>,

    #[arg(short = 'm', long, help = "Subnet mask")]
    pub netmask: Option<String>,

    #[arg(short, long, help = "Default gateway address")]
    pub gateway: Option<String>,

    #[arg(long, help = "Name server address")]
    pub nameserver: Option<String>,

    #[arg(short, long, help = "Domain of the name server")]
    pub domain: Option<String>,

    /// Start the TCP/IP daemons; a bare flag means yes, `=no` overrides the file
    #[arg(
        short,
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = parse_start_daemons
    )]
    pub start_daemons: Option<bool>,
}

fn parse_start_daemons(value: &str) -> Result<bool, String> {
    parse_flag(value).ok_or_else(|| format!("invalid boolean value: {}", value))
}
