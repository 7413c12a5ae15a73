//! Run a child process with its stderr captured and filtered
//!
//! The child's stdin and stdout stay attached to ours. Its stderr is read into
//! an in-memory buffer, the exit status is recorded as a value, and only then
//! is the buffer filtered and re-emitted. The final exit code always comes
//! from the child, never from the filtering step.

use crate::filter::StderrFilter;
use std::ffi::OsStr;
use std::io::{self, Read, Write};
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;
use tracing::debug;

/// Program wrapped by the `mdbook-katex-quiet` binary
pub const KATEX_PROGRAM: &str = "mdbook-katex";

/// Exit code used by shells when a command cannot be found
pub const EXIT_NOT_FOUND: i32 = 127;

/// Exit code used by shells when a command is found but cannot be executed
pub const EXIT_NOT_EXECUTABLE: i32 = 126;

/// Errors raised while running the wrapped command
#[derive(Error, Debug)]
pub enum WrapperError {
    #[error("{program}: failed to start: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program}: failed to capture stderr: {source}")]
    Capture {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl WrapperError {
    /// Exit code the wrapper should terminate with for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Spawn { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => EXIT_NOT_FOUND,
                io::ErrorKind::PermissionDenied => EXIT_NOT_EXECUTABLE,
                _ => 1,
            },
            Self::Capture { .. } => 1,
        }
    }
}

/// Result type for wrapper operations
pub type Result<T> = std::result::Result<T, WrapperError>;

/// Run `program` with `args`, re-emitting its filtered stderr to `stderr`
///
/// Returns the child's exit code. Failure to write the filtered output is
/// logged and otherwise ignored, since it must not mask the child's status.
pub fn run_filtered<I, S, W>(
    program: &str,
    args: I,
    filter: &StderrFilter,
    stderr: &mut W,
) -> Result<i32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
    W: Write,
{
    let (status, captured) = capture_stderr(program, args)?;
    let code = exit_code(status);
    debug!(program, code, captured_bytes = captured.len(), "wrapped command finished");

    if !captured.is_empty() {
        let filtered = filter.filter_bytes(&captured);
        if !filtered.is_empty() {
            if let Err(e) = stderr.write_all(&filtered).and_then(|()| stderr.flush()) {
                debug!(error = %e, "failed to re-emit filtered stderr");
            }
        }
    }

    Ok(code)
}

/// Spawn the command and read its whole stderr stream before waiting on it
fn capture_stderr<I, S>(program: &str, args: I) -> Result<(ExitStatus, Vec<u8>)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| WrapperError::Spawn {
            program: program.to_string(),
            source,
        })?;
    debug!(program, pid = child.id(), "spawned wrapped command");

    let mut captured = Vec::new();
    let read_result = match child.stderr.take() {
        Some(mut pipe) => pipe.read_to_end(&mut captured).map(|_| ()),
        None => Ok(()),
    };

    // Always reap the child, even when reading its stderr failed
    let status = child.wait().map_err(|source| WrapperError::Capture {
        program: program.to_string(),
        source,
    })?;
    read_result.map_err(|source| WrapperError::Capture {
        program: program.to_string(),
        source,
    })?;

    Ok((status, captured))
}

/// Convert an exit status into the code a shell would report
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return 128 + sig;
        }
    }

    1
}
