use std::io;

use is_terminal::IsTerminal;
use serde::Deserialize;

/// Whether the no-interpreter branch waits for acknowledgment before exiting.
///
/// `Auto` keeps the interactive behavior on a real console (double-clicked
/// beast.exe, terminal session) while letting piped invocations run straight
/// through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PausePolicy {
    Always,
    Never,
    Auto,
}

impl PausePolicy {
    fn should_pause(self, stdin_is_tty: bool) -> bool {
        match self {
            PausePolicy::Always => true,
            PausePolicy::Never => false,
            PausePolicy::Auto => stdin_is_tty,
        }
    }
}

/// Print the prompt and block for a single line of acknowledgment, when the
/// policy says to. The line's content is discarded; EOF counts as an
/// acknowledgment so a closed stdin can never wedge the launcher.
pub fn pause_for_ack(policy: PausePolicy) {
    if !policy.should_pause(io::stdin().is_terminal()) {
        return;
    }
    println!("Press ENTER to exit...");
    let mut ack = String::new();
    let _ = io::stdin().read_line(&mut ack);
}
