use crate::error::{Result, YankrError};
use std::io::BufRead;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// An editor command line, split on whitespace into executable and arguments.
///
/// `EDITOR="code --wait"` becomes program `code` with args `["--wait"]`; the
/// snippet path is appended when the editor is launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl EditorCommand {
    /// Returns `None` for an empty or whitespace-only command line.
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }
}

/// Where the content of a new snippet comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Open the file in the configured editor and wait for it to exit.
    Editor(EditorCommand),
    /// Read lines from standard input until end of stream.
    Stdin,
}

/// Opens a file in the editor and waits for it to close.
///
/// The editor inherits the terminal. A launch failure or a non-zero exit is
/// reported as [`YankrError::Editor`].
pub fn open_in_editor<P: AsRef<Path>>(editor: &EditorCommand, file_path: P) -> Result<()> {
    let path = file_path.as_ref();
    info!(editor = %editor.program, path = %path.display(), "launching editor");

    let status = Command::new(&editor.program)
        .args(&editor.args)
        .arg(path)
        .status()
        .map_err(|e| YankrError::Editor(format!("could not launch '{}': {}", editor.program, e)))?;

    if !status.success() {
        return Err(YankrError::Editor(format!(
            "'{}' exited with {}",
            editor.program, status
        )));
    }

    debug!("editor exited cleanly");
    Ok(())
}

/// Reads lines until end of input, terminating each with `\n`.
pub fn capture_content<R: BufRead>(input: R) -> Result<String> {
    let mut content = String::new();
    for line in input.lines() {
        let line = line?;
        content.push_str(line.strip_suffix('\r').unwrap_or(&line));
        content.push('\n');
    }
    Ok(content)
}
