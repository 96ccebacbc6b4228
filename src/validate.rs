//! Semantic checks applied after a category pattern matched.
//!
//! A candidate that fails here is dropped from the result without an error.

use crate::patterns::{Category, PatternCatalog};

/// Accept or drop a syntactic match for `category`.
///
/// Categories without a validator in the catalog accept every match.
pub fn accept(category: Category, raw: &str) -> bool {
    PatternCatalog::builtin()
        .entry(category)
        .map_or(true, |entry| entry.accepts(raw))
}

/// Luhn checksum over an all-digit string.
pub fn luhn(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }

    let mut sum = 0;
    for (i, c) in digits.chars().rev().enumerate() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };
        if i % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }
    sum % 10 == 0
}

/// Card numbers: 13 to 19 digits once spaces and hyphens are removed, passing Luhn.
pub fn card_number(raw: &str) -> bool {
    let digits: String = raw.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    (13..=19).contains(&digits.len()) && luhn(&digits)
}

/// Times: hour 1-12 with an AM/PM suffix, 0-23 without; minute 0-59.
pub fn time_of_day(raw: &str) -> bool {
    let Some((hour, rest)) = raw.split_once(':') else {
        return false;
    };
    if rest.len() < 2 || !rest.is_char_boundary(2) {
        return false;
    }
    let (minute, suffix) = rest.split_at(2);

    let (Ok(hour), Ok(minute)) = (hour.parse::<u32>(), minute.parse::<u32>()) else {
        return false;
    };
    if minute > 59 {
        return false;
    }

    match suffix.trim().to_ascii_lowercase().as_str() {
        "" => hour <= 23,
        "am" | "pm" => (1..=12).contains(&hour),
        _ => false,
    }
}
