use regex::Regex;
use lazy_static::lazy_static;
use super::PatternMatcher;

lazy_static! {
    // H:MM or HH:MM with an optional AM/PM suffix; ranges are checked by the validator
    static ref TIME_PATTERN: Regex = Regex::new(
        r"\b\d{1,2}:\d{2}(?:[ ]?[AaPp][Mm])?\b"
    ).unwrap();
}

pub fn is_match(value: &str) -> bool {
    TimeMatcher {}.matches(value)
}

pub struct TimeMatcher {}

impl PatternMatcher for TimeMatcher {
    fn pattern(&self) -> &Regex {
        &TIME_PATTERN
    }
}
