use std::path::PathBuf;

use crate::security::SecurityVerdict;

/// Input refused by the security screen, either for a signature hit or for
/// exceeding the length ceiling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("input rejected by security screen: {}", .verdict.joined())]
pub struct Rejected {
    pub verdict: SecurityVerdict,
}

impl Rejected {
    pub fn new(verdict: SecurityVerdict) -> Self {
        Self { verdict }
    }

    pub fn signatures(&self) -> impl Iterator<Item = &str> {
        self.verdict.matched_signatures.iter().map(String::as_str)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error(transparent)]
    Rejected(#[from] Rejected),

    #[error("failed to compile pattern: {0}")]
    PatternCompile(#[from] regex::Error),

    #[error("failed to read config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("unknown category: {0}")]
    UnknownCategory(String),
}
