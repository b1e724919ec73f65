//! Operator synonym tables
//!
//! Uses compile-time perfect hashing (phf) for O(1) synonym lookup.

use phf::phf_map;
use std::fmt;

/// Relational operator spellings mapped to their canonical form.
///
/// `is`, `isnot` and `isNot` canonicalize to lowercase while every other
/// spelling canonicalizes to uppercase. Catalogs match on the exact text.
static RELOPS: phf::Map<&'static str, &'static str> = phf_map! {
    "LT" => "LT",
    "lt" => "LT",
    "<" => "LT",
    "LE" => "LE",
    "le" => "LE",
    "<=" => "LE",
    "EQ" => "EQ",
    "eq" => "EQ",
    "=" => "EQ",
    "GE" => "GE",
    "ge" => "GE",
    ">=" => "GE",
    "GT" => "GT",
    "gt" => "GT",
    ">" => "GT",
    "NE" => "NE",
    "ne" => "NE",
    "!=" => "NE",
    "LIKE" => "LIKE",
    "like" => "LIKE",
    "NOTLIKE" => "NOTLIKE",
    "notlike" => "NOTLIKE",
    "notLike" => "NOTLIKE",
    "IS" => "IS",
    "is" => "is",
    "ISNOT" => "ISNOT",
    "isnot" => "isnot",
    "isNot" => "isnot",
};

/// Logical operator spellings
static LOGOPS: phf::Map<&'static str, LogOp> = phf_map! {
    "AND" => LogOp::And,
    "and" => LogOp::And,
    "&" => LogOp::And,
    "OR" => LogOp::Or,
    "or" => LogOp::Or,
    "|" => LogOp::Or,
    "NOT" => LogOp::Not,
    "not" => LogOp::Not,
    "!" => LogOp::Not,
};

/// Canonical form of a relational operator, or `None` if `token` is not one.
pub fn canonical_relop(token: &str) -> Option<&'static str> {
    RELOPS.get(token).copied()
}

/// Logical connective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogOp {
    And,
    Or,
    Not,
}

impl LogOp {
    /// Look up a logical operator by any of its spellings
    pub fn from_token(token: &str) -> Option<Self> {
        LOGOPS.get(token).copied()
    }

    /// Binding strength; higher binds tighter
    pub fn precedence(&self) -> u8 {
        match self {
            LogOp::Not => 2,
            LogOp::And => 1,
            LogOp::Or => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogOp::And => "AND",
            LogOp::Or => "OR",
            LogOp::Not => "NOT",
        }
    }
}

impl fmt::Display for LogOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relop_synonyms() {
        for (token, canonical) in [
            ("<", "LT"),
            ("le", "LE"),
            ("=", "EQ"),
            (">=", "GE"),
            ("gt", "GT"),
            ("!=", "NE"),
            ("like", "LIKE"),
            ("notLike", "NOTLIKE"),
        ] {
            assert_eq!(canonical_relop(token), Some(canonical), "token {}", token);
        }
    }

    #[test]
    fn test_is_casing_follows_spelling() {
        assert_eq!(canonical_relop("IS"), Some("IS"));
        assert_eq!(canonical_relop("is"), Some("is"));
        assert_eq!(canonical_relop("ISNOT"), Some("ISNOT"));
        assert_eq!(canonical_relop("isNot"), Some("isnot"));
    }

    #[test]
    fn test_unknown_relops() {
        assert_eq!(canonical_relop("~"), None);
        assert_eq!(canonical_relop("Eq"), None);
        assert_eq!(canonical_relop(""), None);
    }

    #[test]
    fn test_logop_synonyms() {
        assert_eq!(LogOp::from_token("&"), Some(LogOp::And));
        assert_eq!(LogOp::from_token("or"), Some(LogOp::Or));
        assert_eq!(LogOp::from_token("!"), Some(LogOp::Not));
        assert_eq!(LogOp::from_token("And"), None);
    }

    #[test]
    fn test_precedence_order() {
        assert!(LogOp::Not.precedence() > LogOp::And.precedence());
        assert!(LogOp::And.precedence() > LogOp::Or.precedence());
    }
}
