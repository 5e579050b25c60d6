use std::path::Path;
use std::process::Command;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::models::TerminalApp;

/// The external CLI the launcher hands the workspace to.
pub const TOOL_COMMAND: &str = "claude";

/// Host platform, lifted to data so launch plans stay testable on any OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Linux
        }
    }
}

/// One candidate process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCandidate {
    pub program: String,
    pub args: Vec<String>,
}

/// Builds the tool invocation, quoting the file argument when present.
fn tool_invocation(file: Option<&Path>) -> String {
    match file {
        Some(file) => format!("{} \"{}\"", TOOL_COMMAND, file.display()),
        None => TOOL_COMMAND.to_string(),
    }
}

/// Maps (platform, terminal preference, file, cwd) to an ordered list of
/// spawn candidates.
///
/// macOS and Windows have a single scripted candidate each; Linux yields
/// a fixed priority list of terminal emulators to try. The preference
/// only matters on macOS, where it picks which application the
/// AppleScript drives.
pub fn launch_plan(
    platform: Platform,
    terminal: TerminalApp,
    file: Option<&Path>,
    cwd: &Path,
) -> Vec<LaunchCandidate> {
    let shell_line = format!("cd \"{}\" && {}", cwd.display(), tool_invocation(file));

    match platform {
        Platform::MacOs => {
            let script = match terminal {
                TerminalApp::Iterm => format!(
                    "tell application \"iTerm\"\n\
                     \tactivate\n\
                     \ttell current window\n\
                     \t\tcreate tab with default profile\n\
                     \t\ttell current session\n\
                     \t\t\twrite text \"{}\"\n\
                     \t\tend tell\n\
                     \tend tell\n\
                     end tell",
                    shell_line.replace('"', "\\\"")
                ),
                TerminalApp::Terminal => format!(
                    "tell application \"Terminal\"\n\
                     \tactivate\n\
                     \tdo script \"{}\"\n\
                     end tell",
                    shell_line.replace('"', "\\\"")
                ),
            };
            vec![LaunchCandidate {
                program: "osascript".to_string(),
                args: vec!["-e".to_string(), script],
            }]
        }
        Platform::Windows => vec![LaunchCandidate {
            program: "cmd.exe".to_string(),
            args: vec![
                "/c".to_string(),
                "start".to_string(),
                "cmd.exe".to_string(),
                "/k".to_string(),
                format!("cd /d \"{}\" && {}", cwd.display(), tool_invocation(file)),
            ],
        }],
        Platform::Linux => {
            // keep the shell open after the tool exits
            let bash_line = format!("{}; exec bash", shell_line);
            [
                ("gnome-terminal", "--"),
                ("konsole", "-e"),
                ("xterm", "-e"),
            ]
            .into_iter()
            .map(|(emulator, separator)| LaunchCandidate {
                program: emulator.to_string(),
                args: vec![
                    separator.to_string(),
                    "bash".to_string(),
                    "-c".to_string(),
                    bash_line.clone(),
                ],
            })
            .collect()
        }
    }
}

/// Spawns the external tool in a terminal emulator, fire-and-forget.
///
/// Candidates from [`launch_plan`] are tried in order; the first one that
/// spawns wins. The child is detached: no handle is kept and its exit
/// status is never observed.
///
/// # Arguments
/// * `file` - Optional file to hand to the tool
/// * `cwd` - Working directory the terminal starts in
/// * `terminal` - Terminal preference (macOS only)
pub fn launch(file: Option<&Path>, cwd: &Path, terminal: TerminalApp) -> Result<()> {
    for candidate in launch_plan(Platform::current(), terminal, file, cwd) {
        match Command::new(&candidate.program).args(&candidate.args).spawn() {
            Ok(_child) => {
                info!("launched {} via {}", TOOL_COMMAND, candidate.program);
                return Ok(());
            }
            Err(err) => {
                debug!("candidate {} failed to spawn: {}", candidate.program, err);
            }
        }
    }
    Err(Error::NoTerminal)
}
