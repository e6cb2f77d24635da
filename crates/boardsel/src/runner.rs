use crate::error::{BoardselError, Result};
use std::process::{Command, Stdio};

/// Runs an external program and hands back everything it printed.
///
/// Discovery goes through this trait so that callers (and tests) can swap the
/// real subprocess for canned output.
pub trait CommandRunner {
    /// Runs `program` with `args`, returning stdout followed by stderr as text.
    ///
    /// Fails with [`BoardselError::ExternalTool`] when the program cannot be
    /// started or exits with a non-zero status.
    fn run(&self, program: &str, args: &[String]) -> Result<String>;
}

/// Runs commands as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        log::info!("Executing {}: {:?}", program, cmd);

        let output = cmd.output().map_err(|e| BoardselError::ExternalTool {
            tool: program.to_string(),
            message: format!("Failed to execute {}: {}", program, e),
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let mut combined_output = stdout.into_owned();
        if !stderr.is_empty() {
            if !combined_output.is_empty() && !combined_output.ends_with('\n') {
                combined_output.push('\n');
            }
            combined_output.push_str(&stderr);
        }

        if !output.status.success() {
            let exit_code = output.status.code().unwrap_or(-1);
            log::error!("{} failed with exit code {}: {}", program, exit_code, stderr.trim());
            return Err(BoardselError::ExternalTool {
                tool: program.to_string(),
                message: format!(
                    "exited with code {}: {}",
                    exit_code,
                    combined_output.trim()
                ),
            });
        }

        Ok(combined_output)
    }
}

/// Splits a full command line with POSIX shell rules and runs it.
pub fn run_command_line<R: CommandRunner + ?Sized>(runner: &R, command_line: &str) -> Result<String> {
    let (program, args) = split_command_line(command_line)?;
    runner.run(&program, &args)
}

/// Tokenizes a command line into the program and its argument vector.
pub fn split_command_line(command_line: &str) -> Result<(String, Vec<String>)> {
    let mut words = shlex::split(command_line).ok_or_else(|| {
        BoardselError::Config(format!("Cannot parse command line: {}", command_line))
    })?;

    if words.is_empty() {
        return Err(BoardselError::Config("Command line is empty".to_string()));
    }

    let program = words.remove(0);
    Ok((program, words))
}

/// Subcommand that makes the listing tool print its version.
pub const VERSION_SUBCOMMAND: &str = "version";

/// Asks the program named in `command_line` for its version.
///
/// Only the program is kept from the command line; its arguments are
/// replaced by [`VERSION_SUBCOMMAND`].
pub fn tool_version<R: CommandRunner + ?Sized>(runner: &R, command_line: &str) -> Result<String> {
    let (program, _) = split_command_line(command_line)?;
    let output = runner.run(&program, &[VERSION_SUBCOMMAND.to_string()])?;
    Ok(output.trim().to_string())
}
