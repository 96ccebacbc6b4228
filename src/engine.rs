//! Extraction pipeline: screen, scan, validate, mask, deduplicate.

use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::config::ExtractorConfig;
use crate::error::{ExtractError, Rejected};
use crate::mask;
use crate::patterns::{PatternCatalog, PatternEntry};
use crate::result::ExtractionResult;
use crate::security::SecurityScreen;

/// Pipeline states of a single `extract` call, as reported in debug logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Screening,
    Rejected,
    Scanning,
    Aggregating,
    Done,
}

fn transition(from: Stage, to: Stage) {
    debug!(?from, ?to, "extraction stage");
}

/// Stateless extractor. Cheap to share across threads; each call is independent.
#[derive(Debug)]
pub struct Extractor {
    catalog: &'static PatternCatalog,
    screen: SecurityScreen,
    config: ExtractorConfig,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractError> {
        let screen = SecurityScreen::new(config.max_input_len)?;
        Ok(Self {
            catalog: PatternCatalog::builtin(),
            screen,
            config,
        })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn screen(&self) -> &SecurityScreen {
        &self.screen
    }

    /// Extract every enabled category from `text`.
    ///
    /// Returns `Err(Rejected)` without scanning anything when the security
    /// screen flags the input. Sensitive values are masked before they are
    /// placed in the result.
    pub fn extract(&self, text: &str) -> Result<ExtractionResult, Rejected> {
        transition(Stage::Idle, Stage::Screening);
        let verdict = self.screen.classify(text);
        if !verdict.is_safe {
            transition(Stage::Screening, Stage::Rejected);
            warn!(
                signatures = %verdict.joined(),
                input_len = text.len(),
                "input rejected due to security concerns"
            );
            return Err(Rejected::new(verdict));
        }

        transition(Stage::Screening, Stage::Scanning);
        let scanned: Vec<_> = self
            .catalog
            .entries()
            .iter()
            .filter(|entry| self.config.enabled(entry.category))
            .map(|entry| (entry.category, self.scan(entry, text)))
            .collect();

        transition(Stage::Scanning, Stage::Aggregating);
        let mut result = ExtractionResult::default();
        for (category, values) in scanned {
            debug!(%category, found = values.len(), "category scanned");
            result.insert_unique(category, values);
        }

        transition(Stage::Aggregating, Stage::Done);
        debug!(total = result.total(), "extraction finished");
        Ok(result)
    }

    /// Run independent extractions in parallel; output order matches `texts`.
    pub fn extract_batch<S>(&self, texts: &[S]) -> Vec<Result<ExtractionResult, Rejected>>
    where
        S: AsRef<str> + Sync,
    {
        texts.par_iter().map(|text| self.extract(text.as_ref())).collect()
    }

    fn scan(&self, entry: &PatternEntry, text: &str) -> Vec<String> {
        entry
            .candidates(text)
            .into_iter()
            .filter(|candidate| {
                let accepted = entry.accepts(candidate.value);
                if !accepted {
                    trace!(category = %candidate.category, span = ?candidate.span, "candidate failed validation");
                }
                accepted
            })
            .map(|candidate| {
                if entry.sensitive {
                    mask::mask(candidate.category, candidate.value)
                } else {
                    candidate.value.to_string()
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::Category;

    fn extractor() -> Extractor {
        Extractor::new(ExtractorConfig::default()).expect("extractor should build")
    }

    #[test]
    fn extractor_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Extractor>();
    }

    #[test]
    fn scans_every_category_independently() {
        let text = "Mail jo@ex.io, see https://ex.io/a, call 555-123-4567, \
                    pay 4111 1111 1111 1111 by 5:30 PM";
        let result = extractor().extract(text).unwrap();
        assert_eq!(result.get(Category::Email), ["j***@ex.io"]);
        assert_eq!(result.get(Category::Url), ["https://ex.io/a"]);
        assert_eq!(result.get(Category::Phone), ["555-123-4567"]);
        assert_eq!(result.get(Category::CreditCard), ["**** **** **** 1111"]);
        assert_eq!(result.get(Category::Time), ["5:30 PM"]);
    }

    #[test]
    fn drops_values_failing_validation() {
        let result = extractor()
            .extract("cards 4111111111111112 and 4111111111111111 at 25:00 or 13:00 PM or 23:15")
            .unwrap();
        assert_eq!(result.get(Category::CreditCard), ["************1111"]);
        assert_eq!(result.get(Category::Time), ["23:15"]);
    }

    #[test]
    fn deduplicates_after_masking() {
        let result = extractor()
            .extract("a@x.com, a@x.com, and b@x.com at 9:00 and again 9:00")
            .unwrap();
        // distinct one-letter local parts mask to the same display value
        assert_eq!(result.get(Category::Email), ["***@x.com"]);
        assert_eq!(result.get(Category::Time), ["9:00"]);
    }

    #[test]
    fn respects_category_filters() {
        let config = ExtractorConfig {
            exclude: vec![Category::Time],
            categories: Some(vec![Category::Phone, Category::Time]),
            ..ExtractorConfig::default()
        };
        let result = Extractor::new(config)
            .unwrap()
            .extract("call 555-123-4567 at 9:00 or mail a@b.co")
            .unwrap();
        assert_eq!(result.categories().collect::<Vec<_>>(), vec![Category::Phone]);
        assert_eq!(result.get(Category::Email), [] as [&str; 0]);
    }

    #[test]
    fn rejection_skips_scanning() {
        let rejected = extractor()
            .extract("mail a@b.co <script>alert(1)</script>")
            .unwrap_err();
        assert!(rejected.signatures().any(|s| s == "xss_script_tag"));
    }

    #[test]
    fn batch_preserves_input_order() {
        let texts = ["call 555-123-4567", "' OR '1'='1", "nothing here"];
        let outcomes = extractor().extract_batch(&texts);
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].as_ref().unwrap().get(Category::Phone), ["555-123-4567"]);
        assert!(outcomes[1].is_err());
        assert!(outcomes[2].as_ref().unwrap().is_empty());
    }
}
