//! Attack-signature catalogue.
//!
//! Each entry carries a stable identifier that shows up in
//! [`SecurityVerdict`](super::SecurityVerdict)s and logs, the [`AttackClass`]
//! it belongs to, and a regex string compiled by
//! [`SecurityScreen`](super::SecurityScreen). Every pattern is
//! case-insensitive.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Family of attack a signature targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackClass {
    SqlInjection,
    Xss,
    PathTraversal,
    CommandInjection,
}

impl fmt::Display for AttackClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SqlInjection => write!(f, "sql_injection"),
            Self::Xss => write!(f, "xss"),
            Self::PathTraversal => write!(f, "path_traversal"),
            Self::CommandInjection => write!(f, "command_injection"),
        }
    }
}

pub struct Signature {
    pub name: &'static str,
    pub class: AttackClass,
    pub pattern: &'static str,
}

/// Reported instead of a signature hit when the input exceeds the length ceiling.
pub const INPUT_TOO_LONG: &str = "input_too_long";

// Command names that turn a shell metacharacter into an injection attempt.
macro_rules! shell_commands {
    () => {
        r"(?:rm|cat|ls|wget|curl|nc|netcat|bash|sh|zsh|chmod|chown|whoami|uname|ping|python|perl|powershell|cmd|nslookup|kill|shutdown|reboot)\b"
    };
}

pub static SIGNATURES: &[Signature] = &[
    // ---- SQL injection --------------------------------------------------
    Signature {
        name: "sql_tautology",
        class: AttackClass::SqlInjection,
        // 'x'='x or a bare numeric 1=1 after the closing quote
        pattern: r"(?i)'\s*(?:or|and)\s+(?:'\w+'\s*=\s*'\w+|\d+\s*=\s*\d+)",
    },
    Signature {
        name: "sql_statement",
        class: AttackClass::SqlInjection,
        pattern: r"(?i)\b(?:union\s+(?:all\s+)?select|drop\s+(?:table|database)|delete\s+from|insert\s+into|update\s+\w+\s+set)\b",
    },
    Signature {
        name: "sql_comment",
        class: AttackClass::SqlInjection,
        pattern: r"(?i)'\s*(?:--|#|/\*|;)|;\s*--",
    },
    // ---- XSS ------------------------------------------------------------
    Signature {
        name: "xss_script_tag",
        class: AttackClass::Xss,
        pattern: r"(?i)<\s*/?\s*script\b",
    },
    Signature {
        name: "xss_event_handler",
        class: AttackClass::Xss,
        pattern: r"(?i)<[a-z][^>]*\bon[a-z]+\s*=",
    },
    Signature {
        name: "xss_javascript_scheme",
        class: AttackClass::Xss,
        pattern: r"(?i)\b(?:javascript|vbscript)\s*:",
    },
    Signature {
        name: "xss_embedded_frame",
        class: AttackClass::Xss,
        pattern: r"(?i)<\s*(?:iframe|object|embed)\b",
    },
    // ---- Path traversal -------------------------------------------------
    Signature {
        name: "path_dot_dot",
        class: AttackClass::PathTraversal,
        pattern: r"(?i)\.\.[\\/]",
    },
    Signature {
        name: "path_encoded_dot_dot",
        class: AttackClass::PathTraversal,
        pattern: r"(?i)(?:%2e%2e|\.\.)(?:%2f|%5c)|%2e%2e[\\/]",
    },
    Signature {
        name: "path_system_file",
        class: AttackClass::PathTraversal,
        pattern: r"(?i)/etc/(?:passwd|shadow|hosts)\b|/proc/self/|\b[a-z]:\\windows\b",
    },
    // ---- Command injection ----------------------------------------------
    Signature {
        name: "cmd_chained",
        class: AttackClass::CommandInjection,
        pattern: concat!(r"(?i)[;&|`]\s*", shell_commands!()),
    },
    Signature {
        name: "cmd_substitution",
        class: AttackClass::CommandInjection,
        pattern: concat!(r"(?i)\$\(\s*", shell_commands!()),
    },
];

/// Look up a signature by identifier.
pub fn find(name: &str) -> Option<&'static Signature> {
    SIGNATURES.iter().find(|s| s.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn signature_names_are_unique() {
        let names: HashSet<&str> = SIGNATURES.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), SIGNATURES.len());
        assert!(!names.contains(INPUT_TOO_LONG));
    }

    #[test]
    fn every_class_has_a_signature() {
        for class in [
            AttackClass::SqlInjection,
            AttackClass::Xss,
            AttackClass::PathTraversal,
            AttackClass::CommandInjection,
        ] {
            assert!(SIGNATURES.iter().any(|s| s.class == class), "no signature for {class}");
        }
    }

    #[test]
    fn find_by_name() {
        let sig = find("cmd_chained").unwrap();
        assert_eq!(sig.class, AttackClass::CommandInjection);
        assert!(find("nope").is_none());
    }
}
