use crate::commands::{CmdMessage, CmdResult};
use crate::editor::{capture_content, open_in_editor, ContentSource};
use crate::error::Result;
use crate::store::SnippetStore;
use std::io::{BufRead, Write};
use tracing::debug;

/// Creates an empty snippet, then fills it from exactly one content source.
///
/// If the editor fails the empty snippet is left behind.
pub fn run<S, R, W>(
    store: &mut S,
    name: &str,
    source: &ContentSource,
    input: R,
    output: &mut W,
) -> Result<CmdResult>
where
    S: SnippetStore,
    R: BufRead,
    W: Write,
{
    let path = store.create(name)?;

    match source {
        ContentSource::Editor(editor) => {
            debug!(snippet = name, "acquiring content from editor");
            open_in_editor(editor, &path)?;
        }
        ContentSource::Stdin => {
            debug!(snippet = name, "acquiring content from stdin");
            writeln!(output, "Enter snippet content (press Ctrl+D to finish):")?;
            output.flush()?;
            let content = capture_content(input)?;
            store.write(name, &content)?;
        }
    }

    let mut result = CmdResult::default().with_snippet_path(path);
    result.add_message(CmdMessage::success(format!(
        "Snippet '{}' created successfully!",
        name
    )));
    Ok(result)
}
