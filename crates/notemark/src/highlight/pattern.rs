//! Compiles a document's quotes into one matcher.

use regex_automata::meta::{BuildError, Config, Regex};
use regex_automata::util::syntax;

use crate::highlighter::HighlightConfig;

/// Character class standing in for any quote character.
const QUOTE_CLASS: &str = "[\"'\u{201C}\u{201D}\u{2018}\u{2019}]";

/// Pattern fragment matching any run of whitespace.
const WHITESPACE_RUN: &str = r"\s+";

fn is_quote_char(c: char) -> bool {
    matches!(c, '"' | '\'' | '\u{201C}' | '\u{201D}' | '\u{2018}' | '\u{2019}')
}

/// Turn one quote into a regex pattern.
///
/// Every regex metacharacter is escaped. With the default configuration a
/// whitespace run becomes `\s+` and any quote character becomes a class of
/// all quote characters.
pub fn escape_quote(quote: &str, config: &HighlightConfig) -> String {
    let mut out = String::with_capacity(quote.len() * 2);
    let mut in_whitespace = false;

    for c in quote.chars() {
        if config.flexible_whitespace && c.is_whitespace() {
            if !in_whitespace {
                out.push_str(WHITESPACE_RUN);
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;

        if config.flexible_quotes && is_quote_char(c) {
            out.push_str(QUOTE_CLASS);
        } else {
            let mut buf = [0u8; 4];
            out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
        }
    }

    out
}

/// A compiled multi-pattern matcher over a document's quotes.
///
/// Pattern `i` is the quote group at index `i` in declaration order. Earlier
/// patterns win when several match at the same start.
#[derive(Debug, Clone)]
pub struct QuotePattern {
    regex: Option<Regex>,
    alternatives: usize,
}

impl QuotePattern {
    /// A pattern that never matches.
    pub fn empty() -> Self {
        Self {
            regex: None,
            alternatives: 0,
        }
    }

    /// Compile quotes, in declaration order, into a single matcher.
    ///
    /// Matching is case-insensitive unless the configuration says otherwise.
    /// An empty quote list yields [`QuotePattern::empty`] rather than a regex
    /// that matches the empty string everywhere. Empty quotes must already
    /// have been removed.
    pub fn compile<'a, I>(quotes: I, config: &HighlightConfig) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let patterns: Vec<String> = quotes
            .into_iter()
            .map(|q| escape_quote(q, config))
            .collect();

        if patterns.is_empty() {
            return Ok(Self::empty());
        }

        let regex = Regex::builder()
            .syntax(syntax::Config::new().case_insensitive(config.case_insensitive))
            .configure(Config::new().nfa_size_limit(Some(config.size_limit)))
            .build_many(patterns.as_slice())?;

        Ok(Self {
            regex: Some(regex),
            alternatives: patterns.len(),
        })
    }

    /// Whether the pattern can never match.
    pub fn is_empty(&self) -> bool {
        self.regex.is_none()
    }

    /// Number of quote alternatives.
    pub fn alternatives(&self) -> usize {
        self.alternatives
    }

    pub(crate) fn regex(&self) -> Option<&Regex> {
        self.regex.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn config() -> HighlightConfig {
        HighlightConfig::default()
    }

    #[test]
    fn test_escape_metacharacters() {
        let escaped = escape_quote("bp 120/80 (sitting)?", &config());
        let re = Regex::new(&format!("^{}$", escaped)).unwrap();
        assert!(re.is_match("bp 120/80 (sitting)?"));
        assert!(!re.is_match("bp 120/80 sitting"));

        let escaped = escape_quote("a.b*c+[d]$^|{2}\\", &config());
        let re = Regex::new(&format!("^{}$", escaped)).unwrap();
        assert!(re.is_match("a.b*c+[d]$^|{2}\\"));
        assert!(!re.is_match("axb*c+[d]$^|{2}\\"));
    }

    #[test]
    fn test_whitespace_runs_are_flexible() {
        let escaped = escape_quote("discharged  home", &config());
        assert_eq!(escaped, r"discharged\s+home");

        let re = Regex::new(&format!("^{}$", escaped)).unwrap();
        assert!(re.is_match("discharged home"));
        assert!(re.is_match("discharged\n   home"));
        assert!(!re.is_match("dischargedhome"));
    }

    #[test]
    fn test_quote_characters_are_interchangeable() {
        let escaped = escape_quote("patient's \"wish\"", &config());
        let re = Regex::new(&format!("^{}$", escaped)).unwrap();
        assert!(re.is_match("patient\"s 'wish'"));
        assert!(re.is_match("patient's \"wish\""));
        assert!(re.is_match("patient\u{2019}s \u{201C}wish\u{201D}"));
    }

    #[test]
    fn test_strict_config_escapes_literally() {
        let strict = HighlightConfig::default()
            .with_flexible_whitespace(false)
            .with_flexible_quotes(false);
        let escaped = escape_quote("it's  here", &strict);
        let re = Regex::new(&format!("^{}$", escaped)).unwrap();
        assert!(re.is_match("it's  here"));
        assert!(!re.is_match("it\"s here"));
    }

    #[test]
    fn test_empty_quote_set_never_matches() {
        let pattern = QuotePattern::compile(std::iter::empty::<&str>(), &config()).unwrap();
        assert!(pattern.is_empty());
        assert_eq!(pattern.alternatives(), 0);
        assert!(pattern.regex().is_none());
    }

    #[test]
    fn test_compile_is_case_insensitive() {
        let pattern = QuotePattern::compile(["we"], &config()).unwrap();
        let re = pattern.regex().unwrap();
        assert!(re.is_match("We"));
        assert!(re.is_match("WE"));
        assert!(re.is_match("we"));
    }

    #[test]
    fn test_case_sensitive_config() {
        let sensitive = HighlightConfig::default().with_case_insensitive(false);
        let pattern = QuotePattern::compile(["We"], &sensitive).unwrap();
        let re = pattern.regex().unwrap();
        assert!(re.is_match("We met"));
        assert!(!re.is_match("we met"));
    }

    #[test]
    fn test_uppercase_surface_form_matches_itself() {
        // Lowercasing turns U+0130 into two chars that never match it.
        let pattern = QuotePattern::compile(["\u{130}stanbul"], &config()).unwrap();
        let re = pattern.regex().unwrap();
        assert!(re.is_match("Seen in \u{130}stanbul clinic."));
    }

    #[test]
    fn test_size_limit_failure() {
        let tight = HighlightConfig::default().with_size_limit(16);
        let long_quote = "a long quote that will not fit ".repeat(20);
        let result = QuotePattern::compile([long_quote.as_str()], &tight);
        assert!(result.is_err());
    }
}
