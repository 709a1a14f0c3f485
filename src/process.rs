use std::process::{Command, ExitStatus};

use log::debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Could not run `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("`{command}` failed with {status}: {stderr}")]
    Failed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Runs `command` to completion and returns its stdout split into lines.
///
/// `display` names the command in logs and errors. A non-zero exit is an error
/// carrying the trimmed stderr.
pub(crate) fn output_lines(
    command: &mut Command,
    display: &str,
) -> Result<Vec<String>, CommandError> {
    let output = command.output().map_err(|source| CommandError::Spawn {
        command: display.to_owned(),
        source,
    })?;

    if !output.status.success() {
        return Err(CommandError::Failed {
            command: display.to_owned(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        });
    }

    let lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect();
    debug!("`{}` printed {} lines", display, lines.len());
    Ok(lines)
}
