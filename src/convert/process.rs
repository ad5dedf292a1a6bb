//! External converter process invocation.

use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

/// Run an external tool and wait for it to finish.
///
/// Blocks until the process exits; there is no timeout. A spawn failure
/// (tool not installed) and a nonzero exit are both reported as
/// [`Error::ConverterFailed`] with the tool name and the reason.
pub(crate) fn run_tool(tool: &str, args: &[OsString], cwd: &Path) -> Result<()> {
    log::debug!("running {} {:?}", tool, args);
    let output = Command::new(tool)
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(|e| Error::ConverterFailed {
            tool: tool.to_string(),
            reason: format!("failed to start: {}", e),
        })?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    let reason = if stderr.is_empty() {
        format!("exited with {}", output.status)
    } else {
        format!("exited with {}: {}", output.status, stderr)
    };
    Err(Error::ConverterFailed {
        tool: tool.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_tool() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run_tool("true", &[], dir.path()).is_ok());
    }

    #[test]
    fn test_nonzero_exit_names_the_tool() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_tool("false", &[], dir.path()).unwrap_err();
        match err {
            Error::ConverterFailed { tool, reason } => {
                assert_eq!(tool, "false");
                assert!(reason.contains("exited with"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_tool_is_a_spawn_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_tool("docsmith-no-such-tool", &[], dir.path()).unwrap_err();
        match err {
            Error::ConverterFailed { reason, .. } => {
                assert!(reason.contains("failed to start"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
