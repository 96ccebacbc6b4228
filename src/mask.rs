//! Irreversible, category-aware masking of extracted values.

use crate::patterns::Category;

const MASK_CHAR: char = '*';
const EMAIL_MASK: &str = "***";
const CARD_VISIBLE_DIGITS: usize = 4;

/// Mask `value` for display. Non-sensitive categories come back unchanged.
pub fn mask(category: Category, value: &str) -> String {
    match category {
        Category::CreditCard => mask_card(value),
        Category::Email => mask_email(value),
        Category::Url | Category::Phone | Category::Time => value.to_string(),
    }
}

/// Every digit but the last four becomes `*`; separators stay in place.
pub fn mask_card(value: &str) -> String {
    let total = value.chars().filter(char::is_ascii_digit).count();
    let hidden = total.saturating_sub(CARD_VISIBLE_DIGITS);

    let mut seen = 0;
    value
        .chars()
        .map(|c| {
            if !c.is_ascii_digit() {
                return c;
            }
            seen += 1;
            if seen <= hidden {
                MASK_CHAR
            } else {
                c
            }
        })
        .collect()
}

/// Keeps up to two leading characters of the local part, then a fixed `***`.
///
/// Local parts of one or two characters keep one fewer so some of the
/// local part is always hidden.
pub fn mask_email(value: &str) -> String {
    let Some((local, domain)) = value.rsplit_once('@') else {
        return EMAIL_MASK.to_string();
    };

    let keep = match local.chars().count() {
        0 | 1 => 0,
        2 => 1,
        _ => 2,
    };
    let prefix: String = local.chars().take(keep).collect();
    format!("{prefix}{EMAIL_MASK}@{domain}")
}
