//! Interactive fill of placeholder values.
//!
//! The resolver never touches stdin/stdout directly: it reads from any
//! [`BufRead`] and writes prompts to any [`Write`], so the CLI passes the
//! terminal while tests pass in-memory buffers.
//!
//! Prompts are issued in mapping order, which is the order placeholders first
//! appear in the snippet, followed by supplied names the snippet does not use.

use crate::error::Result;
use crate::template::ParamValues;
use std::io::{BufRead, Write};
use tracing::debug;

/// Builds a complete mapping for `names`.
///
/// 1. every extracted name starts with an empty value
/// 2. `supplied` pairs overwrite those defaults
/// 3. each name still empty is prompted for, one line per name
/// 4. each name with a supplied value gets a confirmation line instead
///
/// End of input leaves the remaining values empty. An empty value is accepted,
/// it is not an error.
pub fn resolve_values<R, W>(
    names: &[String],
    supplied: &[(String, String)],
    input: &mut R,
    output: &mut W,
) -> Result<ParamValues>
where
    R: BufRead,
    W: Write,
{
    let mut values = ParamValues::seeded(names.iter().cloned());
    for (name, value) in supplied {
        values.set(name.clone(), value.clone());
    }

    let pending: Vec<(String, String)> = values
        .iter()
        .map(|(n, v)| (n.to_string(), v.to_string()))
        .collect();

    for (name, value) in pending {
        if value.is_empty() {
            write!(output, "Enter value for parameter '{}': ", name)?;
            output.flush()?;
            let entered = read_line(input)?;
            debug!(param = %name, empty = entered.is_empty(), "read parameter value");
            values.set(name, entered);
        } else {
            writeln!(output, "Using provided value for '{}': {}", name, value)?;
        }
    }

    Ok(values)
}

/// Reads one line without its terminator. Returns an empty string at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(String::new());
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_supplied_and_empty_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let values =
            resolve_values(&names(&["a", "b"]), &pairs(&[("a", "1")]), &mut input, &mut output)
                .unwrap();

        assert_eq!(values.get("a"), Some("1"));
        assert_eq!(values.get("b"), Some(""));
        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Using provided value for 'a': 1"));
        assert!(printed.contains("Enter value for parameter 'b': "));
    }

    #[test]
    fn test_prompts_in_extraction_order() {
        let mut input = Cursor::new("first\nsecond\n");
        let mut output = Vec::new();

        let values =
            resolve_values(&names(&["zeta", "alpha"]), &[], &mut input, &mut output).unwrap();

        assert_eq!(values.get("zeta"), Some("first"));
        assert_eq!(values.get("alpha"), Some("second"));
        let printed = String::from_utf8(output).unwrap();
        let zeta = printed.find("'zeta'").unwrap();
        let alpha = printed.find("'alpha'").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_crlf_is_stripped() {
        let mut input = Cursor::new("windows\r\n");
        let mut output = Vec::new();

        let values = resolve_values(&names(&["x"]), &[], &mut input, &mut output).unwrap();
        assert_eq!(values.get("x"), Some("windows"));
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut input = Cursor::new("one\ntwo");
        let mut output = Vec::new();

        let values = resolve_values(&names(&["a", "b"]), &[], &mut input, &mut output).unwrap();
        assert_eq!(values.get("a"), Some("one"));
        assert_eq!(values.get("b"), Some("two"));
    }

    #[test]
    fn test_input_runs_out() {
        let mut input = Cursor::new("only\n");
        let mut output = Vec::new();

        let values =
            resolve_values(&names(&["a", "b", "c"]), &[], &mut input, &mut output).unwrap();
        assert_eq!(values.get("a"), Some("only"));
        assert_eq!(values.get("b"), Some(""));
        assert_eq!(values.get("c"), Some(""));
    }

    #[test]
    fn test_supplied_empty_value_is_prompted() {
        let mut input = Cursor::new("typed\n");
        let mut output = Vec::new();

        let values =
            resolve_values(&names(&["a"]), &pairs(&[("a", "")]), &mut input, &mut output)
                .unwrap();
        assert_eq!(values.get("a"), Some("typed"));
    }

    #[test]
    fn test_supplied_name_not_in_snippet_is_kept() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let values =
            resolve_values(&names(&[]), &pairs(&[("extra", "v")]), &mut input, &mut output)
                .unwrap();
        assert_eq!(values.get("extra"), Some("v"));
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn test_no_params_reads_nothing() {
        let mut input = Cursor::new("untouched\n");
        let mut output = Vec::new();

        let values = resolve_values(&[], &[], &mut input, &mut output).unwrap();
        assert!(values.is_empty());
        assert!(output.is_empty());
        assert_eq!(read_line(&mut input).unwrap(), "untouched");
    }
}
