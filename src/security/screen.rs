//! Binary safe/unsafe gate run on raw input before any extraction.

use std::collections::BTreeSet;

use regex::RegexSet;
use serde::{Deserialize, Serialize};

use super::signatures::{INPUT_TOO_LONG, SIGNATURES};
use crate::error::ExtractError;

/// Outcome of screening one input.
///
/// Carries signature identifiers only, never the text that triggered them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityVerdict {
    pub is_safe: bool,
    pub matched_signatures: BTreeSet<String>,
}

impl SecurityVerdict {
    fn from_hits(hits: BTreeSet<String>) -> Self {
        Self {
            is_safe: hits.is_empty(),
            matched_signatures: hits,
        }
    }

    pub fn is_too_long(&self) -> bool {
        self.matched_signatures.contains(INPUT_TOO_LONG)
    }

    /// Comma-separated signature identifiers, for logs and error messages.
    pub fn joined(&self) -> String {
        self.matched_signatures
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Compiled signature set plus the input-length ceiling.
pub struct SecurityScreen {
    set: RegexSet,
    max_input_len: usize,
}

impl SecurityScreen {
    pub fn new(max_input_len: usize) -> Result<Self, ExtractError> {
        let set = RegexSet::new(SIGNATURES.iter().map(|s| s.pattern))?;
        Ok(Self { set, max_input_len })
    }

    /// Byte length above which input is rejected without matching.
    pub fn max_input_len(&self) -> usize {
        self.max_input_len
    }

    pub fn signature_count(&self) -> usize {
        self.set.len()
    }

    pub fn classify(&self, text: &str) -> SecurityVerdict {
        if text.len() > self.max_input_len {
            return SecurityVerdict::from_hits(BTreeSet::from([INPUT_TOO_LONG.to_string()]));
        }

        let hits = self
            .set
            .matches(text)
            .into_iter()
            .map(|idx| SIGNATURES[idx].name.to_string())
            .collect();
        SecurityVerdict::from_hits(hits)
    }
}

impl std::fmt::Debug for SecurityScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityScreen")
            .field("signatures", &self.set.len())
            .field("max_input_len", &self.max_input_len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> SecurityScreen {
        SecurityScreen::new(10_000).expect("signatures should compile")
    }

    fn hits(text: &str) -> Vec<String> {
        screen().classify(text).matched_signatures.into_iter().collect()
    }

    #[test]
    fn compiles_every_signature() {
        assert_eq!(screen().signature_count(), SIGNATURES.len());
    }

    #[test]
    fn detects_sql_tautology() {
        assert!(hits("name=' OR '1'='1").contains(&"sql_tautology".to_string()));
        assert!(hits("admin' or 1=1").contains(&"sql_tautology".to_string()));
        assert!(hits("admin' or 'a'='a").contains(&"sql_tautology".to_string()));
    }

    #[test]
    fn detects_sql_statements_and_comments() {
        let found = hits("Visit https://evil.com'; DROP TABLE users; --");
        assert!(found.contains(&"sql_statement".to_string()));
        assert!(found.contains(&"sql_comment".to_string()));
        assert!(hits("1 UNION ALL SELECT password").contains(&"sql_statement".to_string()));
    }

    #[test]
    fn detects_xss() {
        assert!(hits("<script>alert('xss')</script>").contains(&"xss_script_tag".to_string()));
        assert!(hits(r#"<img src=x onerror="alert(1)">"#).contains(&"xss_event_handler".to_string()));
        assert!(hits("go to JavaScript:alert(1)").contains(&"xss_javascript_scheme".to_string()));
        assert!(hits("<iframe src=x>").contains(&"xss_embedded_frame".to_string()));
    }

    #[test]
    fn detects_path_traversal() {
        assert!(hits("../../../etc/passwd").contains(&"path_dot_dot".to_string()));
        assert!(hits("..\\..\\boot.ini").contains(&"path_dot_dot".to_string()));
        assert!(hits("/files/%2E%2E%2Fsecret").contains(&"path_encoded_dot_dot".to_string()));
        assert!(hits(r"read C:\Windows\system32").contains(&"path_system_file".to_string()));
    }

    #[test]
    fn detects_command_injection() {
        assert!(hits("Call (555) 123-4567 && rm -rf /").contains(&"cmd_chained".to_string()));
        assert!(hits("name; cat secrets").contains(&"cmd_chained".to_string()));
        assert!(hits("x=$(whoami)").contains(&"cmd_substitution".to_string()));
    }

    #[test]
    fn benign_text_is_safe() {
        let benign = [
            "Contact us at support@company.com or call (555) 123-4567",
            "Tom & Jerry met at 9:00 AM; they talked for an hour.",
            r#"<div class="content"><p>Welcome to our site!</p></div>"#,
            "It's 5 < 6 and one = 1, nothing more.",
            "Prices start at $19.99, premium plans from $1,234.56",
            "They said 'hi' and 'bye' like always",
            "see 'item' or 'thing' = same",
            "Price: 'A' and 'B' = 5",
        ];
        let screen = screen();
        for text in benign {
            let verdict = screen.classify(text);
            assert!(verdict.is_safe, "{text:?} flagged: {}", verdict.joined());
        }
    }

    #[test]
    fn rejects_oversized_input_without_matching() {
        let screen = SecurityScreen::new(16).unwrap();
        let verdict = screen.classify("plain but far too long for the ceiling");
        assert!(!verdict.is_safe);
        assert!(verdict.is_too_long());
        assert_eq!(verdict.matched_signatures.len(), 1);
    }

    #[test]
    fn input_at_ceiling_is_screened_normally() {
        let screen = SecurityScreen::new(5).unwrap();
        assert!(screen.classify("hello").is_safe);
    }
}
