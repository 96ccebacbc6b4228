use regex::Regex;
use lazy_static::lazy_static;
use super::PatternMatcher;

lazy_static! {
    // http(s) host with optional port; query and fragment only follow a path
    static ref URL_PATTERN: Regex = Regex::new(
        r"\bhttps?://[-\w.]+(?::[0-9]+)?(?:/[\w/.]*(?:\?[\w&=%.]*)?(?:#[\w.]*)?)?"
    ).unwrap();
}

pub fn is_match(value: &str) -> bool {
    UrlMatcher {}.matches(value)
}

pub struct UrlMatcher {}

impl PatternMatcher for UrlMatcher {
    fn pattern(&self) -> &Regex {
        &URL_PATTERN
    }
}
