use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::prompt::resolve_values;
use crate::store::SnippetStore;
use crate::template::{extract_params, substitute};
use std::io::{BufRead, Write};
use tracing::debug;

use super::helpers::{parse_assignments, require_snippet};

/// Fills a snippet and returns the finished text in `yanked_text`.
///
/// Assignments are validated before the store is touched. Placeholders without
/// a supplied value are prompted for on `input`/`output`. Writing the result to
/// the clipboard is left to the caller.
pub fn run<S, I, R, W>(
    store: &S,
    name: &str,
    assignments: &[I],
    input: &mut R,
    output: &mut W,
) -> Result<CmdResult>
where
    S: SnippetStore,
    I: AsRef<str>,
    R: BufRead,
    W: Write,
{
    let supplied = parse_assignments(assignments)?;
    require_snippet(store, name)?;

    let text = store.read(name)?;
    let params = extract_params(&text);
    debug!(snippet = name, params = params.len(), supplied = supplied.len(), "filling snippet");

    let values = resolve_values(&params, &supplied, input, output)?;
    let filled = substitute(&text, &values);

    let mut result = CmdResult::default().with_yanked_text(filled);
    result.add_message(CmdMessage::success("Snippet copied to clipboard!"));
    Ok(result)
}
