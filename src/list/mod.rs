//! Generic list-data processing engine
//!
//! Turns an in-memory record collection plus a declarative request into a
//! filtered, scored, ordered, and paginated page with metadata. No
//! per-entity code: every field read goes through the
//! [`FieldAccess`](crate::core::FieldAccess) capability.

pub mod filter;
pub mod pagination;
pub mod processor;
pub mod search;
pub mod sort;

pub use filter::{
    DateOperator, FilterRequest, ListOperator, Logic, NumberOperator, Predicate, StringOperator,
    TypedFilter,
};
pub use pagination::{
    DEFAULT_LIMIT, MAX_LIMIT, PaginationMethod, PaginationRequest, PaginationResponse,
};
pub use processor::{ListDataResult, ListProcessor, SearchHit};
pub use search::{
    HighlightSpan, Highlights, ScoredRecord, SearchMetrics, SearchOptions, SearchRequest,
};
pub use sort::{NullOrder, SortDirection, SortField, SortRequest};
