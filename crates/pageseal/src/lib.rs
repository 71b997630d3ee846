//! Opaque pagination tokens, query criteria, and page envelopes.
//!
//! Data-access layers hand clients a continuation marker — a [`PageToken`] —
//! that hides query implementation details and is safe to transmit over
//! untrusted channels. One uniform wire representation covers three
//! pagination strategies: offset, cursor, and key-set. The [`Criteria`] DSL
//! and the [`Page`] envelope are the shared vocabulary between services and
//! repository implementations.

pub mod criteria;
pub mod error;
pub mod key_set;
pub mod operator;
pub mod page;
pub mod persistence;
pub mod token;

pub use criteria::{Criteria, CriteriaError, CriteriaFilter, CriteriaOrdering, FilterArgs};
pub use error::TokenError;
pub use key_set::KeySet;
pub use operator::{ComparisonOperator, LogicalOperator, OrderType};
pub use page::Page;
pub use token::{PageToken, PaginationType, TokenCodec};
