//! Closed operator enumerations used by criteria filters and key-set tokens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Comparison operator with a canonical textual form.
///
/// The rendering is a bijection: every operator has exactly one canonical
/// string and [`FromStr`] maps each string back to its operator. The key-set
/// token round trip depends on this. No form contains a space or `#`, both
/// reserved by the key-set and token wire formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    #[default]
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanEquals,
    LessThan,
    LessThanEquals,
    Between,
    NotBetween,
    In,
    NotIn,
    Like,
    NotLike,
    Exists,
    NotExists,
    IsNull,
    IsNotNull,
}

/// The argument shape an operator expects in a criteria filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// No arguments (exists and null checks).
    None,
    /// Exactly one argument.
    Single,
    /// Exactly two arguments (range bounds).
    Pair,
    /// One or more arguments (set membership).
    Many,
}

impl ComparisonOperator {
    /// Every operator, in declaration order.
    pub const ALL: [ComparisonOperator; 16] = [
        Self::Equals,
        Self::NotEquals,
        Self::GreaterThan,
        Self::GreaterThanEquals,
        Self::LessThan,
        Self::LessThanEquals,
        Self::Between,
        Self::NotBetween,
        Self::In,
        Self::NotIn,
        Self::Like,
        Self::NotLike,
        Self::Exists,
        Self::NotExists,
        Self::IsNull,
        Self::IsNotNull,
    ];

    /// Canonical textual form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::NotEquals => "!=",
            Self::GreaterThan => ">",
            Self::GreaterThanEquals => ">=",
            Self::LessThan => "<",
            Self::LessThanEquals => "<=",
            Self::Between => "BETWEEN",
            Self::NotBetween => "NOT_BETWEEN",
            Self::In => "IN",
            Self::NotIn => "NOT_IN",
            Self::Like => "LIKE",
            Self::NotLike => "NOT_LIKE",
            Self::Exists => "EXISTS",
            Self::NotExists => "NOT_EXISTS",
            Self::IsNull => "IS_NULL",
            Self::IsNotNull => "IS_NOT_NULL",
        }
    }

    /// The argument shape this operator expects.
    pub fn arity(&self) -> Arity {
        match self {
            Self::Equals
            | Self::NotEquals
            | Self::GreaterThan
            | Self::GreaterThanEquals
            | Self::LessThan
            | Self::LessThanEquals
            | Self::Like
            | Self::NotLike => Arity::Single,
            Self::Between | Self::NotBetween => Arity::Pair,
            Self::In | Self::NotIn => Arity::Many,
            Self::Exists | Self::NotExists | Self::IsNull | Self::IsNotNull => Arity::None,
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown operator form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown comparison operator: {0:?}")]
pub struct ParseOperatorError(pub String);

impl FromStr for ComparisonOperator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| ParseOperatorError(s.to_owned()))
    }
}

/// Connective between the filters of one criteria value. Carried to the
/// data-access layer, never evaluated here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOperator {
    #[default]
    And,
    Or,
}

/// Ordering direction for a criteria query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    #[default]
    Ascending,
    Descending,
}
