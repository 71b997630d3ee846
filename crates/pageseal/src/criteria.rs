//! Query-parameterization DSL handed to paging repositories.
//!
//! A [`Criteria`] value is owned by the caller for the duration of one paging
//! request and immutable once passed down. The DSL only carries filters and
//! ordering; evaluating them against a datastore is the repository's concern.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::operator::{Arity, ComparisonOperator, LogicalOperator, OrderType};
use crate::token::PageToken;

/// Smallest accepted page size.
pub const MIN_PAGE_SIZE: u64 = 1;

/// Largest accepted page size.
pub const MAX_PAGE_SIZE: u64 = 250;

/// Largest accepted external token length, in bytes.
pub const MAX_PAGE_TOKEN_LEN: usize = 255;

/// Errors raised when building or validating criteria.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriteriaError {
    /// Page size outside the accepted bounds.
    #[error("page size must be between {MIN_PAGE_SIZE} and {MAX_PAGE_SIZE}, got {0}")]
    PageSizeOutOfRange(u64),

    /// Token text longer than any token this system issues.
    #[error("page token exceeds {MAX_PAGE_TOKEN_LEN} bytes: {0}")]
    PageTokenTooLong(usize),

    /// Filter arguments shaped differently than the operator expects.
    #[error("operator {operator} expects {expected:?} argument(s), got {got:?}")]
    ArityMismatch {
        operator: ComparisonOperator,
        expected: Arity,
        got: Arity,
    },

    /// A membership operator was given an empty candidate set.
    #[error("operator {0} requires at least one argument")]
    EmptyArgumentSet(ComparisonOperator),
}

/// Arguments of one criteria filter, shaped per operator.
///
/// Replaces an untyped value list with a closed set of shapes, so a filter
/// with the wrong number of operands cannot be constructed in the first
/// place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterArgs {
    /// No operands (exists and null checks).
    None,
    /// One comparison operand.
    Single(Value),
    /// Lower and upper bound for range operators.
    Pair(Value, Value),
    /// Candidate set for membership operators.
    Many(Vec<Value>),
}

impl FilterArgs {
    fn arity(&self) -> Arity {
        match self {
            FilterArgs::None => Arity::None,
            FilterArgs::Single(_) => Arity::Single,
            FilterArgs::Pair(..) => Arity::Pair,
            FilterArgs::Many(_) => Arity::Many,
        }
    }
}

/// One filter clause of a [`Criteria`] value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriteriaFilter {
    /// Name of the field to filter on.
    pub field: String,
    /// Comparison applied to the field.
    pub operator: ComparisonOperator,
    /// Operands, shape-checked against the operator at construction.
    pub args: FilterArgs,
}

impl CriteriaFilter {
    /// Build a filter, rejecting argument shapes the operator cannot take.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::ArityMismatch`] when the shape is wrong and
    /// [`CriteriaError::EmptyArgumentSet`] when a membership operator gets an
    /// empty list.
    pub fn new(
        field: impl Into<String>,
        operator: ComparisonOperator,
        args: FilterArgs,
    ) -> Result<Self, CriteriaError> {
        let expected = operator.arity();
        let got = args.arity();
        if expected != got {
            return Err(CriteriaError::ArityMismatch {
                operator,
                expected,
                got,
            });
        }
        if let FilterArgs::Many(values) = &args {
            if values.is_empty() {
                return Err(CriteriaError::EmptyArgumentSet(operator));
            }
        }
        Ok(Self {
            field: field.into(),
            operator,
            args,
        })
    }
}

/// Ordering clause of a criteria query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaOrdering {
    /// Name of the field the dataset is ordered by.
    pub field: String,
    /// Ordering direction.
    pub order_type: OrderType,
}

/// Read-operation arguments accepted by paging repositories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    /// Maximum number of items to fetch, bounded by [`MIN_PAGE_SIZE`] and
    /// [`MAX_PAGE_SIZE`] when present.
    pub page_size: Option<u64>,
    /// Continuation marker from a previous page, or the empty sentinel.
    pub page_token: PageToken,
    /// Ordering applied to the dataset.
    pub ordering: CriteriaOrdering,
    /// Connective between `filters`, interpreted by the repository.
    pub logical_operator: LogicalOperator,
    /// Filter clauses, in caller order.
    pub filters: Vec<CriteriaFilter>,
}

impl Criteria {
    /// Validate bounds before handing the criteria to a repository.
    ///
    /// # Errors
    ///
    /// Returns the first bound violation found.
    pub fn validate(&self) -> Result<(), CriteriaError> {
        if let Some(size) = self.page_size {
            if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&size) {
                return Err(CriteriaError::PageSizeOutOfRange(size));
            }
        }
        if self.page_token.len() > MAX_PAGE_TOKEN_LEN {
            return Err(CriteriaError::PageTokenTooLong(self.page_token.len()));
        }
        Ok(())
    }
}
