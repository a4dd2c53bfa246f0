use crate::error::{Result, YankrError};
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// A clipboard command: program plus arguments, fed the text on stdin.
type ClipboardCommand = (&'static str, &'static [&'static str]);

#[cfg(target_os = "macos")]
const CANDIDATES: &[ClipboardCommand] = &[("pbcopy", &[])];

#[cfg(target_os = "linux")]
const CANDIDATES: &[ClipboardCommand] = &[
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[cfg(target_os = "windows")]
const CANDIDATES: &[ClipboardCommand] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const CANDIDATES: &[ClipboardCommand] = &[];

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses xclip, falling back to xsel
/// - Windows: uses clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut last_spawn_error = None;

    for &(program, args) in CANDIDATES {
        match Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
        {
            Ok(child) => {
                debug!(program, bytes = text.len(), "writing to clipboard");
                return feed(program, child, text);
            }
            Err(e) => {
                warn!(program, error = %e, "clipboard command unavailable");
                last_spawn_error = Some(format!("failed to spawn {}: {}", program, e));
            }
        }
    }

    Err(YankrError::Clipboard(last_spawn_error.unwrap_or_else(|| {
        "clipboard not supported on this platform".to_string()
    })))
}

fn feed(program: &str, mut child: std::process::Child, text: &str) -> Result<()> {
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| YankrError::Clipboard(format!("failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| YankrError::Clipboard(format!("failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(YankrError::Clipboard(format!(
            "{} exited with {}",
            program, status
        )))
    }
}
