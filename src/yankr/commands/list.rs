use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnippetStore;

pub fn run<S: SnippetStore>(store: &S) -> Result<CmdResult> {
    let names = store.list()?;
    let mut result = CmdResult::default();
    if names.is_empty() {
        result.add_message(CmdMessage::info("No snippets found."));
    }
    Ok(result.with_listed_snippets(names))
}
