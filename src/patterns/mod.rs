pub mod creditcard;
pub mod email;
pub mod phonenumber;
pub mod time;
pub mod url;

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ExtractError;
use crate::validate;

/// The closed set of data types the extractor recognizes.
///
/// Declaration order is the catalog order and the order categories appear in
/// serialized results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Email,
    Url,
    #[serde(alias = "phonenumber")]
    Phone,
    CreditCard,
    Time,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Email,
        Category::Url,
        Category::Phone,
        Category::CreditCard,
        Category::Time,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Email => "email",
            Category::Url => "url",
            Category::Phone => "phone",
            Category::CreditCard => "credit_card",
            Category::Time => "time",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(Category::Email),
            "url" => Ok(Category::Url),
            "phone" | "phonenumber" => Ok(Category::Phone),
            "credit_card" | "creditcard" => Ok(Category::CreditCard),
            "time" => Ok(Category::Time),
            _ => Err(ExtractError::UnknownCategory(s.to_string())),
        }
    }
}

pub trait PatternMatcher: Send + Sync {
    /// Boundary-delimited pattern used to scan free text.
    fn pattern(&self) -> &Regex;

    /// True when the pattern covers the whole of `value`.
    fn matches(&self, value: &str) -> bool {
        self.pattern()
            .find(value)
            .is_some_and(|m| m.start() == 0 && m.end() == value.len())
    }
}

/// Secondary check run on a syntactic match.
pub type Validator = fn(&str) -> bool;

/// A substring that matched a category pattern but has not been validated yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'t> {
    pub category: Category,
    pub value: &'t str,
    pub span: Range<usize>,
}

pub struct PatternEntry {
    pub category: Category,
    pub matcher: Box<dyn PatternMatcher>,
    pub validator: Option<Validator>,
    pub sensitive: bool,
}

impl PatternEntry {
    /// All non-overlapping matches in `text`, left to right.
    ///
    /// Matches that are only a slice of a longer digit token, such as the
    /// `800-555-0199` in `1-800-555-0199` or the `10:30` in `10:30:45`, are
    /// dropped.
    pub fn candidates<'t>(&self, text: &'t str) -> Vec<Candidate<'t>> {
        self.matcher
            .pattern()
            .find_iter(text)
            .filter(|m| !is_token_fragment(text.as_bytes(), m.range()))
            .map(|m| Candidate {
                category: self.category,
                value: m.as_str(),
                span: m.range(),
            })
            .collect()
    }

    pub fn accepts(&self, raw: &str) -> bool {
        self.validator.map_or(true, |check| check(raw))
    }
}

/// Separators that join digit groups into one token.
const DIGIT_JOINERS: [u8; 3] = [b'-', b'.', b':'];

fn is_token_fragment(bytes: &[u8], span: Range<usize>) -> bool {
    let joined = |sep: Option<&u8>, digit: Option<&u8>| {
        sep.is_some_and(|b| DIGIT_JOINERS.contains(b)) && digit.is_some_and(u8::is_ascii_digit)
    };
    let before = span.start >= 2 && joined(bytes.get(span.start - 1), bytes.get(span.start - 2));
    let after = joined(bytes.get(span.end), bytes.get(span.end + 1));
    before || after
}

impl fmt::Debug for PatternEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternEntry")
            .field("category", &self.category)
            .field("pattern", &self.matcher.pattern().as_str())
            .field("validated", &self.validator.is_some())
            .field("sensitive", &self.sensitive)
            .finish()
    }
}

lazy_static! {
    static ref BUILTIN_CATALOG: PatternCatalog = PatternCatalog {
        entries: vec![
            PatternEntry {
                category: Category::Email,
                matcher: Box::new(email::EmailMatcher {}),
                validator: None,
                sensitive: true,
            },
            PatternEntry {
                category: Category::Url,
                matcher: Box::new(url::UrlMatcher {}),
                validator: None,
                sensitive: false,
            },
            PatternEntry {
                category: Category::Phone,
                matcher: Box::new(phonenumber::PhoneNumberMatcher {}),
                validator: None,
                sensitive: false,
            },
            PatternEntry {
                category: Category::CreditCard,
                matcher: Box::new(creditcard::CreditCardMatcher {}),
                validator: Some(validate::card_number),
                sensitive: true,
            },
            PatternEntry {
                category: Category::Time,
                matcher: Box::new(time::TimeMatcher {}),
                validator: Some(validate::time_of_day),
                sensitive: false,
            },
        ],
    };
}

/// Fixed, process-wide mapping from category to matcher.
#[derive(Debug)]
pub struct PatternCatalog {
    entries: Vec<PatternEntry>,
}

impl PatternCatalog {
    pub fn builtin() -> &'static PatternCatalog {
        &BUILTIN_CATALOG
    }

    /// Entries in category order.
    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    pub fn entry(&self, category: Category) -> Option<&PatternEntry> {
        self.entries.iter().find(|e| e.category == category)
    }

    pub fn is_sensitive(&self, category: Category) -> bool {
        self.entry(category).is_some_and(|e| e.sensitive)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
