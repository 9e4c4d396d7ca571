use std::path::{Path, PathBuf};

use crate::config::LauncherConfig;

/// One entry of the ordered interpreter probe list.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Venv directory that must exist for the candidate to count. `None` for
    /// the explicit override, which names an executable directly.
    venv_dir: Option<PathBuf>,
    /// Interpreter executable expected on disk.
    python: PathBuf,
}

impl Candidate {
    /// Candidate rooted in a virtual-environment directory; the interpreter
    /// lives at the platform subpath inside it.
    pub fn venv(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let python = interpreter_path(&dir);
        Candidate {
            venv_dir: Some(dir),
            python,
        }
    }

    /// Candidate naming an interpreter executable directly (`BEAST_PYTHON`).
    pub fn explicit(python: impl Into<PathBuf>) -> Self {
        Candidate {
            venv_dir: None,
            python: python.into(),
        }
    }

    pub fn python(&self) -> &Path {
        &self.python
    }

    /// A venv candidate is usable only if its directory exists and the
    /// interpreter file exists inside it; an explicit one needs the file only.
    fn is_usable(&self) -> bool {
        let python_ok = self.python.is_file();
        match &self.venv_dir {
            Some(dir) => dir.is_dir() && python_ok,
            None => python_ok,
        }
    }
}

/// Interpreter location inside a venv for the current platform.
fn interpreter_path(venv_dir: &Path) -> PathBuf {
    if cfg!(windows) {
        venv_dir.join("Scripts").join("python.exe")
    } else {
        venv_dir.join("bin").join("python")
    }
}

/// Ordered probe list for a configuration: the explicit override first (when
/// set), then one candidate per configured venv directory.
pub fn candidates(config: &LauncherConfig) -> Vec<Candidate> {
    let mut list = Vec::with_capacity(config.venv_dirs.len() + 1);
    if let Some(python) = &config.python_override {
        list.push(Candidate::explicit(python));
    }
    list.extend(config.venv_dirs.iter().map(Candidate::venv));
    list
}

/// Interpreter path of the first usable candidate, in list order.
///
/// Probing never falls through past a usable higher-priority candidate, and an
/// unusable one is skipped without any side effect.
pub fn resolve_interpreter(candidates: &[Candidate]) -> Option<PathBuf> {
    candidates
        .iter()
        .find(|c| c.is_usable())
        .map(|c| c.python().to_path_buf())
}
