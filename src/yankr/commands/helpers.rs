use crate::error::{Result, YankrError};
use crate::store::SnippetStore;

/// Parses `name=value` assignments, splitting on the first `=`.
///
/// Values may contain further `=` characters. Names are not validated, so
/// `=value` assigns to the empty name. An assignment with no `=` at all is
/// rejected.
pub fn parse_assignments<I: AsRef<str>>(raw: &[I]) -> Result<Vec<(String, String)>> {
    raw.iter()
        .map(|s| {
            let s = s.as_ref();
            s.split_once('=')
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .ok_or_else(|| YankrError::InvalidParam(s.to_string()))
        })
        .collect()
}

/// Fails with `SnippetNotFound` unless the store holds `name`.
pub fn require_snippet<S: SnippetStore>(store: &S, name: &str) -> Result<()> {
    if store.contains(name) {
        Ok(())
    } else {
        Err(YankrError::SnippetNotFound(name.to_string()))
    }
}
