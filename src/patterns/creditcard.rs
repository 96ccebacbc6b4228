use regex::Regex;
use lazy_static::lazy_static;
use super::PatternMatcher;

lazy_static! {
    // Contiguous: Visa 13/16, MasterCard 51-55 16, Amex 34/37 15, Discover 6011/65 16.
    // Grouped: the 16 digit issuers as four groups of four split by space or hyphen.
    static ref CREDIT_CARD_PATTERN: Regex = Regex::new(
        r"\b(?:4\d{12}(?:\d{3})?|5[1-5]\d{14}|3[47]\d{13}|6(?:011|5\d{2})\d{12})\b|\b(?:4\d{3}|5[1-5]\d{2}|6011|65\d{2})[ -]?\d{4}[ -]?\d{4}[ -]?\d{4}\b"
    ).unwrap();
}

pub fn is_match(value: &str) -> bool {
    CreditCardMatcher {}.matches(value)
}

pub struct CreditCardMatcher {}

impl PatternMatcher for CreditCardMatcher {
    fn pattern(&self) -> &Regex {
        &CREDIT_CARD_PATTERN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_card_shapes() {
        let valid_cards = vec![
            "4111111111111111",     // Visa 16
            "4222222222222",        // Visa 13
            "5555555555554444",     // MasterCard
            "378282246310005",      // Amex
            "6011111111111117",     // Discover 6011
            "6511111111111111",     // Discover 65
            "4111 1111 1111 1111",
            "5555-4444-3333-2222",
        ];

        for card in valid_cards {
            assert!(is_match(card), "Card shape should match: {}", card);
        }
    }

    #[test]
    fn test_invalid_card_shapes() {
        let invalid_cards = vec![
            "41111111111111",       // Visa 14
            "5655555555554444",     // MasterCard prefix out of range
            "3782822463100055",     // Amex 16
            "6111111111111111",     // not an issuer prefix
            "4111_1111_1111_1111",
            "41111111111111112345", // too long
        ];

        for card in invalid_cards {
            assert!(!is_match(card), "Card shape should not match: {}", card);
        }
    }
}
