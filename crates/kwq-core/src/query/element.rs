//! Query elements: the tagged (role, value) output units of the compiler

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::parser::LogOp;

/// What a `QueryElement` stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Name of the field being compared or selected
    #[serde(rename = "elemName")]
    ElemName,
    /// Raw comparison value
    #[serde(rename = "LITERAL")]
    Literal,
    /// Canonical relational operator
    #[serde(rename = "RELOP")]
    RelOp,
    /// Canonical logical operator
    #[serde(rename = "LOGOP")]
    LogOp,
}

impl Role {
    /// Wire tag for this role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::ElemName => "elemName",
            Role::Literal => "LITERAL",
            Role::RelOp => "RELOP",
            Role::LogOp => "LOGOP",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One token of a compiled query.
///
/// Two elements are equal when both role and value are equal. Elements order
/// by role tag text, then by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryElement {
    role: Role,
    value: String,
}

impl QueryElement {
    pub fn new(role: Role, value: impl Into<String>) -> Self {
        Self {
            role,
            value: value.into(),
        }
    }

    pub fn elem_name(name: impl Into<String>) -> Self {
        Self::new(Role::ElemName, name)
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self::new(Role::Literal, value)
    }

    pub fn relop(op: impl Into<String>) -> Self {
        Self::new(Role::RelOp, op)
    }

    pub fn logop(op: LogOp) -> Self {
        Self::new(Role::LogOp, op.as_str())
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Ord for QueryElement {
    fn cmp(&self, other: &Self) -> Ordering {
        self.role
            .as_str()
            .cmp(other.role.as_str())
            .then_with(|| self.value.cmp(&other.value))
    }
}

impl PartialOrd for QueryElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for QueryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QueryElement(role=\"{}\",value=\"{}\")", self.role, self.value)
    }
}
