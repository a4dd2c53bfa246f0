//! # Template Engine
//!
//! Snippets are plain text with `{{name}}` placeholders. There is no template
//! language beyond that: no conditionals, loops, nesting or escapes.
//!
//! - [`extract_params`] scans a snippet and returns the distinct placeholder names.
//! - [`substitute`] replaces every `{{name}}` with its value from a [`ParamValues`].
//!
//! A placeholder is any run of one or more non-`}` characters between `{{` and
//! `}}`. Names are taken verbatim, so `{{ name }}` and `{{name}}` are different
//! placeholders. A name can never contain `}`.

use once_cell::sync::Lazy;
use regex::Regex;

static PARAM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("constant regex pattern is valid"));

/// Returns the distinct placeholder names in `text`, in order of first occurrence.
pub fn extract_params(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PARAM_PATTERN.captures_iter(text) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Replaces every placeholder in `text` with its value from `values`.
///
/// This is a single scan of the original text, so substituted values are
/// never re-expanded, whichever placeholder they mention. Matching is exact
/// and case-sensitive. Placeholders without an entry are left as written, and
/// entries whose name never appears in `text` change nothing.
pub fn substitute(text: &str, values: &ParamValues) -> String {
    PARAM_PATTERN
        .replace_all(text, |caps: &regex::Captures| {
            values
                .get(&caps[1])
                .map_or_else(|| caps[0].to_string(), str::to_string)
        })
        .into_owned()
}

/// An ordered mapping of placeholder name to value.
///
/// Order is insertion order: extracted names first (in the order they appear in
/// the snippet), then any supplied names the snippet does not use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamValues {
    entries: Vec<(String, String)>,
}

impl ParamValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds every name with an empty value.
    pub fn seeded<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values = Self::new();
        for name in names {
            values.set(name, "");
        }
        values
    }

    /// Sets `name` to `value`, overwriting an existing entry in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for ParamValues {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut values = Self::new();
        for (name, value) in iter {
            values.set(name, value);
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_no_params() {
        assert!(extract_params("plain text, no markers").is_empty());
        assert!(extract_params("").is_empty());
    }

    #[test]
    fn test_extract_two_params() {
        let params = extract_params("Hi {{name}}, your id is {{id}}");
        assert_eq!(params, vec!["name", "id"]);
    }

    #[test]
    fn test_extract_duplicates_collapse() {
        assert_eq!(extract_params("{{a}}{{a}}"), vec!["a"]);
        assert_eq!(extract_params("{{b}} {{a}} {{b}}"), vec!["b", "a"]);
    }

    #[test]
    fn test_extract_adjacent_params() {
        assert_eq!(extract_params("{{a}}{{b}}{{c}}"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_extract_unmatched_open() {
        assert!(extract_params("{{open but never closed").is_empty());
        assert_eq!(extract_params("{{broken and {{ok}}"), vec!["broken and {{ok"]);
    }

    #[test]
    fn test_extract_empty_braces_ignored() {
        assert!(extract_params("{{}}").is_empty());
    }

    #[test]
    fn test_extract_names_are_verbatim() {
        let params = extract_params("{{ spaced }} {{spaced}} {{Spaced}}");
        assert_eq!(params, vec![" spaced ", "spaced", "Spaced"]);
    }

    #[test]
    fn test_extract_stops_at_first_closing_brace() {
        // `}` cannot be part of a name
        assert!(extract_params("{{a}b}}").is_empty());
        assert_eq!(extract_params("{{a}}}"), vec!["a"]);
    }

    #[test]
    fn test_substitute_single() {
        let values: ParamValues = [("x", "5")].into_iter().collect();
        assert_eq!(substitute("{{x}}", &values), "5");
    }

    #[test]
    fn test_substitute_every_occurrence() {
        let values: ParamValues = [("name", "Ada"), ("id", "42")].into_iter().collect();
        assert_eq!(
            substitute("Hi {{name}} ({{id}}), bye {{name}}", &values),
            "Hi Ada (42), bye Ada"
        );
    }

    #[test]
    fn test_substitute_unused_name_is_noop() {
        let values: ParamValues = [("unused", "zzz")].into_iter().collect();
        assert_eq!(substitute("keep {{this}}", &values), "keep {{this}}");
    }

    #[test]
    fn test_substitute_is_case_sensitive() {
        let values: ParamValues = [("name", "Ada")].into_iter().collect();
        assert_eq!(substitute("{{Name}} {{name}}", &values), "{{Name}} Ada");
    }

    #[test]
    fn test_substitute_does_not_reexpand_own_marker() {
        let values: ParamValues = [("x", "{{x}}!")].into_iter().collect();
        assert_eq!(substitute("{{x}}", &values), "{{x}}!");
    }

    #[test]
    fn test_substitute_does_not_expand_other_markers_in_values() {
        let values: ParamValues = [("a", "{{b}}"), ("b", "X")].into_iter().collect();
        assert_eq!(substitute("{{a}} {{b}}", &values), "{{b}} X");
        assert_eq!(substitute("{{b}} {{a}}", &values), "X {{b}}");
    }

    #[test]
    fn test_substitute_leaves_unknown_placeholders() {
        let values: ParamValues = [("known", "yes")].into_iter().collect();
        assert_eq!(
            substitute("{{known}} {{unknown}}", &values),
            "yes {{unknown}}"
        );
    }

    #[test]
    fn test_substitute_empty_name_is_noop() {
        let values: ParamValues = [("", "v")].into_iter().collect();
        assert_eq!(substitute("a {{}} b", &values), "a {{}} b");
    }

    #[test]
    fn test_substitute_empty_value() {
        let values: ParamValues = [("gone", "")].into_iter().collect();
        assert_eq!(substitute("a{{gone}}b", &values), "ab");
    }

    #[test]
    fn test_substitute_removes_all_markers() {
        let text = "{{a}}-{{b}}-{{a}}";
        let values: ParamValues = extract_params(text)
            .into_iter()
            .map(|n| (n.clone(), n.to_uppercase()))
            .collect();
        let out = substitute(text, &values);
        assert_eq!(out, "A-B-A");
        for (name, _) in values.iter() {
            assert!(!out.contains(&format!("{{{{{}}}}}", name)));
        }
    }

    #[test]
    fn test_param_values_set_overwrites_in_place() {
        let mut values = ParamValues::seeded(["a", "b"]);
        values.set("a", "1");
        values.set("c", "3");
        let collected: Vec<_> = values.iter().collect();
        assert_eq!(collected, vec![("a", "1"), ("b", ""), ("c", "3")]);
        assert_eq!(values.get("c"), Some("3"));
        assert_eq!(values.get("zzz"), None);
    }
}
