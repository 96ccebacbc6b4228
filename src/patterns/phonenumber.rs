use regex::Regex;
use lazy_static::lazy_static;
use super::PatternMatcher;

lazy_static! {
    // North-American 10 digit groupings: (ddd) ddd-dddd, ddd-ddd-dddd, ddd.ddd.dddd
    static ref PHONE_PATTERN: Regex = Regex::new(
        r"(?:\(\d{3}\) \d{3}-\d{4}|\b\d{3}-\d{3}-\d{4}|\b\d{3}\.\d{3}\.\d{4})\b"
    ).unwrap();
}

pub fn is_match(value: &str) -> bool {
    PhoneNumberMatcher {}.matches(value)
}

pub struct PhoneNumberMatcher {}

impl PatternMatcher for PhoneNumberMatcher {
    fn pattern(&self) -> &Regex {
        &PHONE_PATTERN
    }
}
