use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::prompt::PausePolicy;

/// Optional project file probed in the working directory.
const CONFIG_FILE: &str = "beast.toml";

/// Candidate venv directories, highest priority first. `.venv` is the
/// installed environment, `.venv_dev` the development fallback.
const DEFAULT_VENV_DIRS: &[&str] = &[".venv", ".venv_dev"];

/// Engine entry point handed to the interpreter.
const DEFAULT_SCRIPT: &str = "./src/beast.py";

#[derive(Debug)]
pub struct LauncherConfig {
    pub venv_dirs: Vec<PathBuf>, // ordered probe list, first match wins
    pub script: PathBuf,         // ./src/beast.py unless beast.toml says otherwise
    pub python_override: Option<PathBuf>, // BEAST_PYTHON, probed before any venv
    pub pause: PausePolicy,      // acknowledgment behavior on the not-found branch
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed {path}")]
    Malformed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("{path}: `venvs` must list at least one directory")]
    EmptyCandidates { path: String },
}

/// On-disk shape of `beast.toml`. Every key is optional; unknown keys are
/// rejected so typos fail loudly instead of silently launching the wrong
/// environment.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    venvs: Option<Vec<PathBuf>>,
    script: Option<PathBuf>,
    pause: Option<PausePolicy>,
}

pub fn launcher_config() -> Result<LauncherConfig, ConfigError> {
    launcher_config_from_dir(Path::new("."))
}

/// Effective configuration for a working directory: compiled defaults,
/// overlaid with `beast.toml` when present, then environment variables.
pub fn launcher_config_from_dir(dir: &Path) -> Result<LauncherConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    let file = load_config_file(&path)?;

    let venv_dirs = file
        .venvs
        .unwrap_or_else(|| DEFAULT_VENV_DIRS.iter().map(PathBuf::from).collect());
    if venv_dirs.is_empty() {
        return Err(ConfigError::EmptyCandidates {
            path: path.display().to_string(),
        });
    }

    let script = file.script.unwrap_or_else(|| PathBuf::from(DEFAULT_SCRIPT));

    let python_override = std::env::var_os("BEAST_PYTHON")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);

    // BEAST_NO_PAUSE=1 beats the file; the file beats the Auto default.
    let no_pause = std::env::var("BEAST_NO_PAUSE")
        .map(|v| v == "1")
        .unwrap_or(false);
    let pause = if no_pause {
        PausePolicy::Never
    } else {
        file.pause.unwrap_or(PausePolicy::Auto)
    };

    Ok(LauncherConfig {
        venv_dirs,
        script,
        python_override,
        pause,
    })
}

fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Malformed {
        path: path.display().to_string(),
        source,
    })
}
