pub mod config;
pub mod engine;
pub mod error;
pub mod logger;
pub mod mask;
pub mod patterns;
pub mod result;
pub mod security;
pub mod validate;

pub use config::ExtractorConfig;
pub use engine::Extractor;
pub use error::{ExtractError, Rejected};
pub use patterns::{Category, PatternCatalog, PatternMatcher};
pub use result::{ExtractionResult, Report};
pub use security::{SecurityScreen, SecurityVerdict};

use lazy_static::lazy_static;

lazy_static! {
    static ref DEFAULT_EXTRACTOR: Extractor = Extractor::new(ExtractorConfig::default()).unwrap();
}

/// Extract with the default configuration.
pub fn extract(text: &str) -> Result<ExtractionResult, Rejected> {
    DEFAULT_EXTRACTOR.extract(text)
}

/// Main classifier function that takes a single token and returns every category
/// whose pattern covers it completely and whose validator accepts it.
pub fn classify(value: &str) -> Vec<Category> {
    if value.is_empty() {
        return vec![];
    }

    PatternCatalog::builtin()
        .entries()
        .iter()
        .filter(|entry| entry.matcher.matches(value) && validate::accept(entry.category, value))
        .map(|entry| entry.category)
        .collect()
}
