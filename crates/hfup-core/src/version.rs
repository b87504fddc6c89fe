//! Lenient version-string parsing for tool output.
//!
//! The installer reads versions out of lines like `Python 3.11.4` or
//! `hf version: 1.2.0.dev0`; these helpers extract just enough to compare
//! against a minimum and to echo back to the user.

/// Parse a version string into a (major, minor) tuple.
///
/// Extracts only the leading numeric portion of each component,
/// so "3.13.0rc1" successfully parses as (3, 13).
pub fn parse_version_tuple(version_str: &str) -> Option<(u32, u32)> {
    let mut parts = version_str.split('.');

    let parse_numeric = |part: &str| -> Option<u32> {
        let numeric: String = part.chars().take_while(char::is_ascii_digit).collect();
        numeric.parse::<u32>().ok()
    };

    let major = parse_numeric(parts.next()?)?;
    let minor = parse_numeric(parts.next()?)?;
    Some((major, minor))
}

/// Scan command output for the first token that looks like a version
/// (starts with a digit and contains a dot).
///
/// Handles `Python 3.11.4`, `hf version: 1.2.3`, and bare `1.2.3` alike.
pub fn scan_version_token(output: &str) -> Option<String> {
    output
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_ascii_alphanumeric() && c != '.'))
        .find(|token| {
            token.starts_with(|c: char| c.is_ascii_digit()) && token.contains('.')
        })
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_versions() {
        assert_eq!(parse_version_tuple("3.11.4"), Some((3, 11)));
        assert_eq!(parse_version_tuple("3.9"), Some((3, 9)));
    }

    #[test]
    fn parses_suffixed_components() {
        assert_eq!(parse_version_tuple("3.13.0rc1"), Some((3, 13)));
        assert_eq!(parse_version_tuple("12.0-rc1"), Some((12, 0)));
    }

    #[test]
    fn rejects_non_versions() {
        assert_eq!(parse_version_tuple("three.nine"), None);
        assert_eq!(parse_version_tuple(""), None);
        assert_eq!(parse_version_tuple("3"), None);
    }

    #[test]
    fn scans_tool_output() {
        assert_eq!(scan_version_token("Python 3.11.4"), Some("3.11.4".into()));
        assert_eq!(
            scan_version_token("hf version: 1.2.0.dev0"),
            Some("1.2.0.dev0".into())
        );
        assert_eq!(scan_version_token("no numbers here"), None);
    }
}
