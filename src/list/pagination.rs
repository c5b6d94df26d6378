//! Pagination resolution and response metadata
//!
//! Two methods share one limit: page-number pagination and opaque cursor
//! tokens. A cursor decodes to the same offset scheme the page method
//! computes, so the two can be mixed across sequential requests without
//! drift.

use crate::core::error::PaginationError;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

/// Page size applied when the caller leaves the limit at zero
pub const DEFAULT_LIMIT: usize = 20;

/// Largest page size the resolver will produce
pub const MAX_LIMIT: usize = 100;

/// How the caller addresses a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PaginationMethod {
    /// Page-number pagination; pages start at 1
    Offset { page: usize },
    /// Opaque continuation token from a previous response
    Cursor { token: String },
}

impl Default for PaginationMethod {
    fn default() -> Self {
        PaginationMethod::Offset { page: 1 }
    }
}

/// A pagination request: the addressing method plus a shared page size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PaginationRequest {
    #[serde(flatten)]
    pub method: PaginationMethod,
    #[serde(default)]
    pub limit: usize,
}

impl PaginationRequest {
    /// Page-number request
    pub fn page(page: usize, limit: usize) -> Self {
        Self {
            method: PaginationMethod::Offset { page },
            limit,
        }
    }

    /// Cursor request
    pub fn cursor(token: impl Into<String>, limit: usize) -> Self {
        Self {
            method: PaginationMethod::Cursor {
                token: token.into(),
            },
            limit,
        }
    }

    /// Normalize the request into `(offset, limit)`.
    ///
    /// A zero limit defaults to [`DEFAULT_LIMIT`]; otherwise the limit is
    /// clamped into `[1, MAX_LIMIT]`. A page below 1 is floored to 1. An
    /// undecodable cursor token is an error.
    pub fn resolve(&self) -> Result<(usize, usize), PaginationError> {
        let limit = if self.limit == 0 {
            DEFAULT_LIMIT
        } else {
            self.limit.clamp(1, MAX_LIMIT)
        };
        let offset = match &self.method {
            PaginationMethod::Offset { page } => (page.max(&1) - 1) * limit,
            PaginationMethod::Cursor { token } => decode_cursor(token)?,
        };
        Ok((offset, limit))
    }
}

/// Pagination metadata for a produced page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationResponse {
    /// Total number of items after filtering and search, before slicing
    pub total_items: usize,

    /// Whether another page follows this one
    pub has_next: bool,

    /// Next page number; set for page-number requests with a next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<usize>,

    /// Next cursor token; set for cursor requests with a next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

impl PaginationResponse {
    /// Build response metadata from a resolved request and the
    /// pre-pagination total
    pub fn build(
        request: &PaginationRequest,
        total_items: usize,
        offset: usize,
        limit: usize,
    ) -> Self {
        let has_next = offset + limit < total_items;
        let (next_page, next_cursor) = match (&request.method, has_next) {
            (PaginationMethod::Offset { page }, true) => (Some(*page.max(&1) + 1), None),
            (PaginationMethod::Cursor { .. }, true) => (None, Some(encode_cursor(offset + limit))),
            (_, false) => (None, None),
        };
        Self {
            total_items,
            has_next,
            next_page,
            next_cursor,
        }
    }
}

/// Encode an offset into an opaque cursor token
pub fn encode_cursor(offset: usize) -> String {
    URL_SAFE_NO_PAD.encode(offset.to_string())
}

/// Decode a cursor token back into an offset
pub fn decode_cursor(token: &str) -> Result<usize, PaginationError> {
    let invalid = || PaginationError::InvalidCursor {
        token: token.to_string(),
    };
    let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| invalid())?;
    let text = String::from_utf8(bytes).map_err(|_| invalid())?;
    text.parse::<usize>().map_err(|_| invalid())
}
