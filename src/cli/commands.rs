// file: src/cli/commands.rs
// version: 1.0.0
// guid: f0d2a6b8-3c91-4e57-a1f6-7b4e9c5d2083

//! Command implementations for the CLI

use crate::{
    cli::args::ParamArgs,
    config::{loader::ConfigLoader, TcpipConfig},
    executor::{Executor, SystemRunner},
    logging::logger::with_operation_span,
    result::ModuleResult,
    Result,
};
use serde_yaml::{Mapping, Value};
use tracing::info;

/// Flags given on the command line, keyed like the parameter file
pub fn overrides(args: &ParamArgs) -> Mapping {
    let mut mapping = Mapping::new();

    let fields = [
        ("hostname", &args.hostname),
        ("address", &args.address),
        ("interface", &args.interface),
        ("netmask", &args.netmask),
        ("gateway", &args.gateway),
        ("nameserver", &args.nameserver),
        ("domain", &args.domain),
    ];
    for (key, value) in fields {
        if let Some(value) = value {
            mapping.insert(Value::from(key), Value::from(value.as_str()));
        }
    }

    // An absent flag leaves the file value alone
    if let Some(start_daemons) = args.start_daemons {
        mapping.insert(Value::from("start_daemons"), Value::Bool(start_daemons));
    }

    mapping
}

/// Build validated parameters from the parameter file and flags
pub fn resolve_config(args: &ParamArgs) -> Result<TcpipConfig> {
    let loader = ConfigLoader::new();
    loader.resolve_params(args.params.as_deref(), overrides(args))
}

/// Run mktcpip once. Every failure is folded into the returned result.
pub fn apply_command(program: &str, args: &ParamArgs) -> ModuleResult {
    with_operation_span("apply", || {
        let config = match resolve_config(args) {
            Ok(config) => config,
            Err(err) => return ModuleResult::from(err),
        };

        info!(
            "Setting TCP/IP values for {} ({} on {})",
            config.hostname, config.address, config.interface
        );

        Executor::with_runner(program, SystemRunner).run(&config)
    })
}

/// Argument vector that `apply` would execute
pub fn render_command(program: &str, args: &ParamArgs) -> Result<Vec<String>> {
    let config = resolve_config(args)?;
    let command = Executor::with_runner(program, SystemRunner).prepare(&config)?;
    Ok(command.into_args())
}
