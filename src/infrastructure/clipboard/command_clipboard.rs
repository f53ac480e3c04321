//! System clipboard through platform command-line utilities.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::domain::ports::{Clipboard, ClipboardError};

/// A clipboard program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardProgram {
    pub program: String,
    pub args: Vec<String>,
}

impl ClipboardProgram {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Writes to the system clipboard by piping text into the first available
/// clipboard utility (`pbcopy`, `clip`, `wl-copy`, `xclip` or `xsel`).
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    programs: Vec<ClipboardProgram>,
}

impl CommandClipboard {
    /// Uses the utilities customary for the current platform.
    pub fn new() -> Self {
        Self::with_programs(default_programs())
    }

    /// Uses `programs`, tried in order.
    pub fn with_programs(programs: Vec<ClipboardProgram>) -> Self {
        Self { programs }
    }

    pub fn programs(&self) -> &[ClipboardProgram] {
        &self.programs
    }

    async fn pipe_to(program: &ClipboardProgram, text: &str) -> std::io::Result<bool> {
        let mut child = Command::new(&program.program)
            .args(&program.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            stdin.shutdown().await?;
        }

        Ok(child.wait().await?.success())
    }
}

impl Default for CommandClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clipboard for CommandClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut last_error = String::from("no clipboard utility configured");

        for program in &self.programs {
            match Self::pipe_to(program, text).await {
                Ok(true) => {
                    debug!(program = %program.program, "Clipboard written");
                    return Ok(());
                }
                Ok(false) => {
                    last_error = format!("{} exited with an error", program.program);
                }
                Err(err) => {
                    last_error = format!("{}: {}", program.program, err);
                }
            }
            debug!(program = %program.program, error = %last_error, "Clipboard utility failed");
        }

        Err(ClipboardError(last_error))
    }
}

fn default_programs() -> Vec<ClipboardProgram> {
    if cfg!(target_os = "macos") {
        return vec![ClipboardProgram::new("pbcopy", &[])];
    }
    if cfg!(target_os = "windows") {
        return vec![ClipboardProgram::new("clip", &[])];
    }

    let mut programs = Vec::new();
    if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        programs.push(ClipboardProgram::new("wl-copy", &[]));
    }
    programs.push(ClipboardProgram::new("xclip", &["-selection", "clipboard"]));
    programs.push(ClipboardProgram::new("xsel", &["--clipboard", "--input"]));
    programs
}
