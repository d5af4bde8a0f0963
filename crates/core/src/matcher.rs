//! Keyword matching over a candidate table.
//!
//! A query is split on single spaces and the pieces are joined into an
//! alternation pattern (`tok1|tok2|...`). A key matches if the pattern is
//! found anywhere in it, ignoring case. Matches are not ranked.

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::candidates::CandidateTable;
use crate::error::Result;

/// How query tokens are turned into a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Tokens are regular expression syntax.
    #[default]
    Regex,
    /// Tokens are escaped and matched as plain text.
    Literal,
}

/// Builds the alternation pattern for `query`.
///
/// An empty query gives an empty pattern, which matches every key. Runs of
/// spaces produce empty alternatives, which also match everything.
pub fn build_pattern(query: &str, mode: MatchMode) -> String {
    query
        .split(' ')
        .map(|token| match mode {
            MatchMode::Regex => token.to_string(),
            MatchMode::Literal => regex::escape(token),
        })
        .collect::<Vec<String>>()
        .join("|")
}

fn compile(query: &str, mode: MatchMode) -> Result<Regex> {
    let pattern = build_pattern(query, mode);
    debug!("Search pattern: `{}`", pattern);

    Ok(RegexBuilder::new(&pattern).case_insensitive(true).build()?)
}

/// Returns every entry of `table` whose key matches `query`.
///
/// # Errors
///
/// Returns [`crate::error::Error::Pattern`] if, in [`MatchMode::Regex`], the
/// query is not a valid regular expression.
///
/// # Examples
///
/// ```
/// use bowme_core::candidates::CandidateTable;
/// use bowme_core::matcher::{find_matches, MatchMode};
///
/// let mut table = CandidateTable::new();
/// table.insert("git-log".to_string(), "git log --oneline".to_string());
/// table.insert("ls".to_string(), "ls -la".to_string());
///
/// let matched = find_matches("LOG", &table, MatchMode::Regex)?;
/// assert_eq!(matched.len(), 1);
/// assert!(matched.contains_key("git-log"));
/// # Ok::<(), bowme_core::error::Error>(())
/// ```
pub fn find_matches(query: &str, table: &CandidateTable, mode: MatchMode) -> Result<CandidateTable> {
    let pattern = compile(query, mode)?;

    Ok(table
        .iter()
        .filter(|(key, _)| pattern.is_match(key))
        .map(|(key, command)| (key.clone(), command.clone()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn table(entries: &[(&str, &str)]) -> CandidateTable {
        entries
            .iter()
            .map(|(key, command)| ((*key).to_string(), (*command).to_string()))
            .collect()
    }

    #[test]
    fn test_build_pattern_joins_tokens() {
        assert_eq!(build_pattern("log push", MatchMode::Regex), "log|push");
        assert_eq!(build_pattern("log", MatchMode::Regex), "log");
        assert_eq!(build_pattern("", MatchMode::Regex), "");
    }

    #[test]
    fn test_build_pattern_splits_on_single_spaces() {
        assert_eq!(build_pattern("a  b", MatchMode::Regex), "a||b");
    }

    #[test]
    fn test_build_pattern_literal_escapes() {
        assert_eq!(build_pattern("a.b c*", MatchMode::Literal), r"a\.b|c\*");
    }

    #[test]
    fn test_empty_query_matches_all() {
        let candidates = table(&[("git-log", "git log"), ("ls", "ls -la")]);
        let matched = find_matches("", &candidates, MatchMode::Regex).unwrap();
        assert_eq!(matched, candidates);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let candidates = table(&[("git-log", "git log --oneline")]);
        let matched = find_matches("LOG", &candidates, MatchMode::Regex).unwrap();
        assert_eq!(matched.get("git-log"), Some(&"git log --oneline".to_string()));
    }

    #[test]
    fn test_multiple_tokens_are_alternatives() {
        let candidates = table(&[
            ("git-log", "git log"),
            ("git-push", "git push"),
            ("ls", "ls -la"),
        ]);
        let matched = find_matches("log push", &candidates, MatchMode::Regex).unwrap();

        assert_eq!(matched.len(), 2);
        assert!(matched.contains_key("git-log"));
        assert!(matched.contains_key("git-push"));
        assert!(!matched.contains_key("ls"));
    }

    #[test]
    fn test_matches_key_not_command() {
        let candidates = table(&[("list", "ls -la")]);
        let matched = find_matches("ls", &candidates, MatchMode::Regex).unwrap();
        assert!(matched.is_empty());
    }

    #[test]
    fn test_regex_tokens_are_interpreted() {
        let candidates = table(&[("git-log", "git log"), ("docker-ps", "docker ps")]);
        let matched = find_matches("^git", &candidates, MatchMode::Regex).unwrap();
        assert_eq!(matched.len(), 1);
        assert!(matched.contains_key("git-log"));
    }

    #[test]
    fn test_literal_mode_ignores_metacharacters() {
        let candidates = table(&[("git-log", "git log"), ("a.b", "echo dot")]);

        let matched = find_matches(".", &candidates, MatchMode::Literal).unwrap();
        assert_eq!(matched.len(), 1);
        assert!(matched.contains_key("a.b"));

        let matched = find_matches(".", &candidates, MatchMode::Regex).unwrap();
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let candidates = table(&[("git-log", "git log")]);
        let result = find_matches("(unclosed", &candidates, MatchMode::Regex);
        assert!(matches!(result, Err(Error::Pattern(_))));

        let result = find_matches("(unclosed", &candidates, MatchMode::Literal);
        assert!(result.unwrap().is_empty());
    }
}
