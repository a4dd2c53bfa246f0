use crate::commands::{CmdResult, SnippetsLocation};
use crate::config::YankrConfig;
use crate::error::Result;

pub fn run(config: &YankrConfig) -> Result<CmdResult> {
    Ok(CmdResult::default().with_location(SnippetsLocation {
        dir: config.snippets_dir.clone(),
        source: config.dir_source,
    }))
}
