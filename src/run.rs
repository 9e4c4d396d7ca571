use std::path::Path;
use std::process::{Command, ExitStatus};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to launch {python}")]
    Spawn {
        python: String,
        #[source]
        source: std::io::Error,
    },
}

/// Run `python script` as a child process: direct spawn with no shell, console
/// and environment inherited from the launcher, one blocking wait. Returns the
/// child's exit status once it has been reaped.
///
/// The interpreter path has already been probed by resolution, so a spawn
/// failure here is a real fault (permissions, a race with the filesystem, an
/// OS-level refusal) and is reported as such rather than crashing opaquely.
pub fn run_script(python: &Path, script: &Path) -> Result<ExitStatus, RunError> {
    Command::new(python)
        .arg(script)
        .status()
        .map_err(|source| RunError::Spawn {
            python: python.display().to_string(),
            source,
        })
}

/// Launcher exit code for a finished child: the child's own code, or 1 when
/// the platform reports none (signal-terminated on Unix).
pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_failure_is_a_typed_error_naming_the_interpreter() {
        let python = Path::new("/nonexistent/venv/bin/python");
        let err = run_script(python, Path::new("./src/beast.py")).unwrap_err();
        let RunError::Spawn { python, .. } = err;
        assert!(python.contains("nonexistent"));
    }

    #[cfg(unix)]
    #[test]
    fn child_exit_code_is_visible_after_wait() {
        use tempfile::tempdir;

        let dir = tempdir().unwrap();
        let script = dir.path().join("exit7.sh");
        std::fs::write(&script, "exit 7\n").unwrap();

        let status = run_script(Path::new("/bin/sh"), &script).unwrap();
        assert_eq!(status.code(), Some(7));
        assert_eq!(exit_code(status), 7);
    }

    #[cfg(unix)]
    #[test]
    fn successful_child_maps_to_exit_code_zero() {
        use tempfile::tempdir;

        let dir = tempdir().unwrap();
        let script = dir.path().join("ok.sh");
        std::fs::write(&script, "exit 0\n").unwrap();

        let status = run_script(Path::new("/bin/sh"), &script).unwrap();
        assert!(status.success());
        assert_eq!(exit_code(status), 0);
    }
}
