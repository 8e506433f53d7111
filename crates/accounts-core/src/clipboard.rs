//! Clipboard access
//!
//! The system backend pipes text into the first clipboard tool found on
//! `PATH` (pbcopy, wl-copy, xclip, xsel, clip.exe) or into an explicitly
//! configured command line.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{ClipboardError, ClipboardResult};

/// Destination for copied account fields
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> ClipboardResult<()>;
}

/// Known clipboard tools, probed in order
const CANDIDATES: &[&[&str]] = &[
    &["pbcopy"],
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
    &["clip.exe"],
];

/// Clipboard backed by an external command
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    program: String,
    args: Vec<String>,
}

impl SystemClipboard {
    /// Detect an installed clipboard tool
    pub fn detect() -> ClipboardResult<Self> {
        for candidate in CANDIDATES {
            if is_on_path(candidate[0]) {
                debug!("Using clipboard tool: {}", candidate[0]);
                return Ok(Self {
                    program: candidate[0].to_string(),
                    args: candidate[1..].iter().map(|s| s.to_string()).collect(),
                });
            }
        }
        Err(ClipboardError::Unavailable)
    }

    /// Use an explicit command line such as `"xclip -selection clipboard"`
    pub fn from_command(command_line: &str) -> ClipboardResult<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(ClipboardError::Unavailable)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> ClipboardResult<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ClipboardError::CommandFailed(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}

fn is_on_path(program: &str) -> bool {
    std::env::var_os("PATH")
        .map(|paths| {
            std::env::split_paths(&paths).any(|dir| dir.join(program).is_file())
        })
        .unwrap_or(false)
}

/// In-process clipboard, for tests and headless sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> ClipboardResult<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
