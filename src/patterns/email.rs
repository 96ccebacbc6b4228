use regex::Regex;
use lazy_static::lazy_static;
use super::PatternMatcher;

lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(
        r"\b[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}\b"
    ).unwrap();
}

pub fn is_match(value: &str) -> bool {
    EmailMatcher {}.matches(value)
}

pub struct EmailMatcher {}

impl PatternMatcher for EmailMatcher {
    fn pattern(&self) -> &Regex {
        &EMAIL_PATTERN
    }
}
