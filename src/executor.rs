// file: src/executor.rs
// version: 1.0.0
// guid: e71d4a08-6b2c-4f95-8c3a-b5f0d2e9a417

//! Runs mktcpip once and maps the process outcome to a module result

use crate::command::{MktcpipCommand, DEFAULT_PROGRAM};
use crate::config::TcpipConfig;
use crate::error::{AgentError, Result};
use crate::result::ModuleResult;
use std::process::{Command, Stdio};
use tracing::{debug, error, info};

/// Captured output of a single process run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Trait for running an argument vector as a process
pub trait CommandRunner {
    /// Run `argv[0]` with `argv[1..]` and wait for it to exit
    fn run(&self, argv: &[String]) -> Result<CommandOutput>;
}

/// Runs commands on the local host without a shell
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[String]) -> Result<CommandOutput> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| AgentError::execution("No command provided"))?;

        let resolved = which::which(program)
            .map_err(|e| AgentError::command_not_found(format!("{}: {}", program, e)))?;
        debug!("Resolved {} to {}", program, resolved.display());

        let output = Command::new(&resolved)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                AgentError::execution(format!("Failed to execute {}: {}", program, e))
            })?;

        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Executes mktcpip for a set of parameters
pub struct Executor<R: CommandRunner = SystemRunner> {
    program: String,
    runner: R,
}

impl Executor<SystemRunner> {
    /// Executor for the default `mktcpip` program on the local host
    pub fn new() -> Self {
        Self::with_runner(DEFAULT_PROGRAM, SystemRunner)
    }
}

impl Default for Executor<SystemRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> Executor<R> {
    pub fn with_runner(program: impl Into<String>, runner: R) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Build the invocation for `config` after validating it
    pub fn prepare(&self, config: &TcpipConfig) -> Result<MktcpipCommand> {
        config.validate()?;
        Ok(MktcpipCommand::new(&self.program, config))
    }

    /// Validate, run mktcpip exactly once and report the outcome.
    ///
    /// A non-zero exit is returned as [`AgentError::CommandFailed`] carrying
    /// the captured stderr.
    pub fn execute(&self, config: &TcpipConfig) -> Result<ModuleResult> {
        let command = self.prepare(config)?;
        info!("Executing: {}", command);

        let output = self.runner.run(command.args())?;

        if !output.success() {
            error!(
                "Command '{}' failed with exit code {:?}",
                command.program(),
                output.exit_code
            );
            if !output.stderr.trim().is_empty() {
                error!("STDERR: {}", output.stderr);
            }

            return Err(AgentError::CommandFailed {
                command: command.to_string(),
                exit_code: output.exit_code,
                stderr: output.stderr,
            });
        }

        info!("TCP/IP configuration applied on {}", config.interface);
        debug!("STDOUT: {}", output.stdout);

        Ok(ModuleResult::changed(output.stdout))
    }

    /// Like [`Executor::execute`], with every error folded into a failed result
    pub fn run(&self, config: &TcpipConfig) -> ModuleResult {
        match self.execute(config) {
            Ok(result) => result,
            Err(err) => {
                error!("{}", err);
                ModuleResult::from(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every argv it is handed and replies with a canned output
    struct RecordingRunner {
        calls: RefCell<Vec<Vec<String>>>,
        reply: std::result::Result<CommandOutput, String>,
    }

    impl RecordingRunner {
        fn replying(exit_code: i32, stdout: &str, stderr: &str) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                reply: Ok(CommandOutput {
                    exit_code: Some(exit_code),
                    stdout: stdout.to_string(),
                    stderr: stderr.to_string(),
                }),
            }
        }

        fn missing_program() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                reply: Err("mktcpip".to_string()),
            }
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, argv: &[String]) -> Result<CommandOutput> {
            self.calls.borrow_mut().push(argv.to_vec());
            match &self.reply {
                Ok(output) => Ok(output.clone()),
                Err(program) => Err(AgentError::command_not_found(program.clone())),
            }
        }
    }

    fn config() -> TcpipConfig {
        TcpipConfig::new("fred.austin.century.com", "192.9.200.4", "en0")
    }

    #[test]
    fn test_success_reports_stdout() {
        let executor = Executor::with_runner("mktcpip", RecordingRunner::replying(0, "ok", ""));

        let result = executor.execute(&config()).unwrap();

        assert!(result.changed);
        assert!(!result.failed);
        assert_eq!(result.msg, "ok");
        assert_eq!(executor.runner.calls.borrow().len(), 1);
    }

    #[test]
    fn test_nonzero_exit_reports_stderr() {
        let executor = Executor::with_runner(
            "mktcpip",
            RecordingRunner::replying(1, "partial", "invalid address"),
        );

        let err = executor.execute(&config()).unwrap_err();
        match &err {
            AgentError::CommandFailed {
                exit_code, stderr, ..
            } => {
                assert_eq!(*exit_code, Some(1));
                assert_eq!(stderr, "invalid address");
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let result = executor.run(&config());
        assert!(result.failed);
        assert!(!result.changed);
        assert_eq!(result.msg, "invalid address");
    }

    #[test]
    fn test_signal_termination_is_failure() {
        let runner = RecordingRunner {
            calls: RefCell::new(Vec::new()),
            reply: Ok(CommandOutput {
                exit_code: None,
                stdout: String::new(),
                stderr: "killed".to_string(),
            }),
        };
        let executor = Executor::with_runner("mktcpip", runner);

        let result = executor.run(&config());

        assert!(result.failed);
        assert_eq!(result.rc, None);
    }

    #[test]
    fn test_validation_failure_spawns_nothing() {
        let executor = Executor::with_runner("mktcpip", RecordingRunner::replying(0, "ok", ""));
        let mut config = config();
        config.domain = Some("austin.century.com".to_string());

        let err = executor.execute(&config).unwrap_err();

        assert!(matches!(err, AgentError::Validation(_)));
        assert!(executor.runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_missing_program_is_not_a_command_failure() {
        let executor = Executor::with_runner("mktcpip", RecordingRunner::missing_program());

        let err = executor.execute(&config()).unwrap_err();

        assert!(matches!(err, AgentError::CommandNotFound(_)));
    }

    #[test]
    fn test_runner_receives_built_argv() {
        let executor = Executor::with_runner("mktcpip", RecordingRunner::replying(0, "", ""));
        let mut config = config();
        config.nameserver = Some("192.9.200.1".to_string());
        config.domain = Some("austin.century.com".to_string());
        config.start_daemons = true;

        executor.execute(&config).unwrap();

        let calls = executor.runner.calls.borrow();
        assert_eq!(
            calls[0],
            vec![
                "mktcpip",
                "-h",
                "fred.austin.century.com",
                "-a",
                "192.9.200.4",
                "-i",
                "en0",
                "-n",
                "192.9.200.1",
                "-d",
                "austin.century.com",
                "-s",
            ]
        );
    }

    #[test]
    fn test_system_runner_empty_argv() {
        let result = SystemRunner.run(&[]);
        assert!(matches!(result, Err(AgentError::Execution(_))));
    }

    #[test]
    fn test_system_runner_unknown_program() {
        let argv = vec!["mktcpip-agent-no-such-program".to_string()];
        let result = SystemRunner.run(&argv);
        assert!(matches!(result, Err(AgentError::CommandNotFound(_))));
    }
}
