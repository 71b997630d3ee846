//! Key-set pagination triple: resume after `<field> <operator> <value>`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::operator::{ComparisonOperator, ParseOperatorError};

/// A single-field comparison used as the payload of key-set page tokens.
///
/// Renders as `"<field> <operator> <value>"` with single-space separators.
/// Field and operator must not contain spaces; the value keeps any spaces it
/// has, because parsing only splits on the first two.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySet {
    pub field: String,
    pub operator: ComparisonOperator,
    pub value: String,
}

impl fmt::Display for KeySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.operator, self.value)
    }
}

/// Error returned when a key-set expression cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKeySetError {
    /// Fewer than three space-separated groups, or an empty field name.
    #[error("malformed key-set expression: {0:?}")]
    MalformedExpression(String),

    /// The middle group is not a canonical operator form.
    #[error(transparent)]
    Operator(#[from] ParseOperatorError),
}

impl FromStr for KeySet {
    type Err = ParseKeySetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ' ');
        let (Some(field), Some(operator), Some(value)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseKeySetError::MalformedExpression(s.to_owned()));
        };
        if field.is_empty() {
            return Err(ParseKeySetError::MalformedExpression(s.to_owned()));
        }
        Ok(Self {
            field: field.to_owned(),
            operator: operator.parse()?,
            value: value.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_with_single_spaces() {
        let set = KeySet {
            field: "name".into(),
            operator: ComparisonOperator::GreaterThan,
            value: "Foo".into(),
        };
        assert_eq!(set.to_string(), "name > Foo");
    }

    #[test]
    fn parse_round_trip() {
        let set = KeySet {
            field: "created_at".into(),
            operator: ComparisonOperator::LessThanEquals,
            value: "2024-01-01".into(),
        };
        assert_eq!(set.to_string().parse::<KeySet>().unwrap(), set);
    }

    #[test]
    fn value_keeps_embedded_spaces() {
        let set: KeySet = "name > Foo Bar Baz".parse().unwrap();
        assert_eq!(set.value, "Foo Bar Baz");
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(matches!(
            "name >".parse::<KeySet>(),
            Err(ParseKeySetError::MalformedExpression(_))
        ));
        assert!(matches!(
            "".parse::<KeySet>(),
            Err(ParseKeySetError::MalformedExpression(_))
        ));
    }

    #[test]
    fn rejects_unknown_operator() {
        assert!(matches!(
            "name <> Foo".parse::<KeySet>(),
            Err(ParseKeySetError::Operator(_))
        ));
    }

    #[test]
    fn zero_value_is_empty_equals() {
        let zero = KeySet::default();
        assert_eq!(zero.field, "");
        assert_eq!(zero.operator, ComparisonOperator::Equals);
        assert_eq!(zero.value, "");
    }
}
