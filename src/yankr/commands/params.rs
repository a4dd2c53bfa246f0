use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnippetStore;
use crate::template::extract_params;

use super::helpers::require_snippet;

pub fn run<S: SnippetStore>(store: &S, name: &str) -> Result<CmdResult> {
    require_snippet(store, name)?;
    let text = store.read(name)?;
    let params = extract_params(&text);
    let usage = usage_hint(name, &params);
    let mut result = CmdResult::default();
    if params.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Snippet '{}' has no parameters.",
            name
        )));
    }
    Ok(result.with_params(params, usage))
}

/// `yankr yank <name> --param a=value --param b=value`
pub fn usage_hint(name: &str, params: &[String]) -> String {
    let flags: Vec<String> = params
        .iter()
        .map(|p| format!("--param {}=value", p))
        .collect();
    if flags.is_empty() {
        format!("yankr yank {}", name)
    } else {
        format!("yankr yank {} {}", name, flags.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::YankrError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn reports_params_and_usage() {
        let store = InMemoryStore::new().with_snippet("mail", "Dear {{to}}, re: {{subject}}. {{to}}");
        let result = run(&store, "mail").unwrap();

        assert_eq!(result.params, vec!["to", "subject"]);
        assert_eq!(
            result.usage.as_deref(),
            Some("yankr yank mail --param to=value --param subject=value")
        );
        assert!(result.messages.is_empty());
    }

    #[test]
    fn reports_no_params() {
        let store = InMemoryStore::new().with_snippet("plain", "nothing here");
        let result = run(&store, "plain").unwrap();

        assert!(result.params.is_empty());
        assert_eq!(result.usage.as_deref(), Some("yankr yank plain"));
        assert_eq!(
            result.messages,
            vec![CmdMessage::info("Snippet 'plain' has no parameters.")]
        );
    }

    #[test]
    fn missing_snippet_is_not_found() {
        let store = InMemoryStore::new();
        assert!(matches!(
            run(&store, "ghost"),
            Err(YankrError::SnippetNotFound(_))
        ));
    }
}
