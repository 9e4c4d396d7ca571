// main.rs — flag parsing and orchestration only.
// Configuration, interpreter resolution, process handling, and the
// acknowledgment pause live in the four modules below.
mod config;
mod prompt;
mod resolve;
mod run;

use config::launcher_config;
use prompt::{pause_for_ack, PausePolicy};
use resolve::{candidates, resolve_interpreter};
use run::{exit_code, run_script};

/// Return true if `--no-pause` appears anywhere in the CLI args.
/// (No `clap` — keeps the binary small. Other arguments are ignored, and
/// nothing is ever forwarded to the engine.)
fn parse_launcher_args() -> bool {
    std::env::args().skip(1).any(|a| a == "--no-pause")
}

fn main() -> anyhow::Result<()> {
    let no_pause = parse_launcher_args();
    let mut config = launcher_config()?;
    if no_pause {
        config.pause = PausePolicy::Never;
    }

    if let Some(python) = &config.python_override {
        if !python.is_file() {
            eprintln!(
                "[beast] BEAST_PYTHON is set but {} does not exist; trying venv candidates",
                python.display()
            );
        }
    }

    let Some(python) = resolve_interpreter(&candidates(&config)) else {
        println!("Python environment not found, use install.ps1 to setup first.");
        println!("Check that beast.exe is located in root folder next to the .venv.");
        pause_for_ack(config.pause);
        return Ok(());
    };

    let status = run_script(&python, &config.script)?;
    std::process::exit(exit_code(status));
}
