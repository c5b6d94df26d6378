//! Typed error handling for listkit
//!
//! This module provides the error type hierarchy for the list engine and
//! its surrounding layers. Each category gets its own enum so clients can
//! handle errors specifically rather than dealing with generic
//! `anyhow::Error` values, and every error carries a stable code for
//! programmatic handling and translation.
//!
//! # Error Categories
//!
//! - [`FilterError`]: structurally invalid filter requests
//! - [`PaginationError`]: malformed pagination input (bad cursor tokens)
//! - [`ValidationError`]: request-level validation at the use-case boundary
//! - [`EntityError`]: errors from entity CRUD operations
//! - [`StorageError`]: errors from storage backends
//! - [`AuthError`]: authorization failures

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// The main error type for listkit operations
#[derive(Debug)]
pub enum ListError {
    /// Filter construction errors
    Filter(FilterError),

    /// Pagination errors
    Pagination(PaginationError),

    /// Request validation errors
    Validation(ValidationError),

    /// Entity-related errors (CRUD operations)
    Entity(EntityError),

    /// Storage backend errors
    Storage(StorageError),

    /// Authorization errors
    Auth(AuthError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::Filter(e) => write!(f, "{}", e),
            ListError::Pagination(e) => write!(f, "{}", e),
            ListError::Validation(e) => write!(f, "{}", e),
            ListError::Entity(e) => write!(f, "{}", e),
            ListError::Storage(e) => write!(f, "{}", e),
            ListError::Auth(e) => write!(f, "{}", e),
            ListError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListError::Filter(e) => Some(e),
            ListError::Pagination(e) => Some(e),
            ListError::Validation(e) => Some(e),
            ListError::Entity(e) => Some(e),
            ListError::Storage(e) => Some(e),
            ListError::Auth(e) => Some(e),
            ListError::Internal(_) => None,
        }
    }
}

impl ListError {
    /// Get the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ListError::Filter(e) => e.error_code(),
            ListError::Pagination(e) => e.error_code(),
            ListError::Validation(e) => e.error_code(),
            ListError::Entity(e) => e.error_code(),
            ListError::Storage(_) => "STORAGE_ERROR",
            ListError::Auth(e) => e.error_code(),
            ListError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

// =============================================================================
// Filter Errors
// =============================================================================

/// Structurally invalid filter requests.
///
/// These are construction errors: they abort the whole list call with no
/// partial processing, unlike per-record coercion mismatches which resolve
/// locally to "no match".
#[derive(Debug)]
pub enum FilterError {
    /// A range operator was used without its upper bound
    MissingRangeEnd {
        field: String,
    },

    /// A date predicate whose own value never parses as a timestamp
    UnparseableDate {
        field: String,
        value: String,
    },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::MissingRangeEnd { field } => {
                write!(
                    f,
                    "Between filter on field '{}' requires a range end",
                    field
                )
            }
            FilterError::UnparseableDate { field, value } => {
                write!(
                    f,
                    "Date filter on field '{}' has unparseable value '{}'",
                    field, value
                )
            }
        }
    }
}

impl std::error::Error for FilterError {}

impl FilterError {
    pub fn error_code(&self) -> &'static str {
        match self {
            FilterError::MissingRangeEnd { .. } => "FILTER_MISSING_RANGE_END",
            FilterError::UnparseableDate { .. } => "FILTER_UNPARSEABLE_DATE",
        }
    }
}

impl From<FilterError> for ListError {
    fn from(err: FilterError) -> Self {
        ListError::Filter(err)
    }
}

// =============================================================================
// Pagination Errors
// =============================================================================

/// Errors related to pagination input
#[derive(Debug)]
pub enum PaginationError {
    /// Cursor token could not be decoded
    InvalidCursor {
        token: String,
    },
}

impl fmt::Display for PaginationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaginationError::InvalidCursor { token } => {
                write!(f, "Invalid pagination cursor: '{}'", token)
            }
        }
    }
}

impl std::error::Error for PaginationError {}

impl PaginationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            PaginationError::InvalidCursor { .. } => "INVALID_CURSOR",
        }
    }
}

impl From<PaginationError> for ListError {
    fn from(err: PaginationError) -> Self {
        ListError::Pagination(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Request validation errors raised at the use-case boundary, before the
/// engine runs
#[derive(Debug)]
pub enum ValidationError {
    /// A filter, sort, or search field is not whitelisted for the entity
    UnknownField {
        entity_type: String,
        field: String,
    },

    /// A filter request was supplied with no clauses
    EmptyFilter,

    /// A sort request was supplied with no sort fields
    EmptySort,

    /// Requested page size exceeds the configured maximum
    LimitTooLarge {
        limit: usize,
        max: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnknownField { entity_type, field } => {
                write!(f, "Unknown field '{}' for entity '{}'", field, entity_type)
            }
            ValidationError::EmptyFilter => {
                write!(f, "Filter request must contain at least one clause")
            }
            ValidationError::EmptySort => {
                write!(f, "Sort request must contain at least one sort field")
            }
            ValidationError::LimitTooLarge { limit, max } => {
                write!(f, "Page size {} exceeds the maximum of {}", limit, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::UnknownField { .. } => "UNKNOWN_FIELD",
            ValidationError::EmptyFilter => "EMPTY_FILTER",
            ValidationError::EmptySort => "EMPTY_SORT",
            ValidationError::LimitTooLarge { .. } => "LIMIT_TOO_LARGE",
        }
    }
}

impl From<ValidationError> for ListError {
    fn from(err: ValidationError) -> Self {
        ListError::Validation(err)
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to entity operations
#[derive(Debug)]
pub enum EntityError {
    /// Entity was not found
    NotFound {
        entity_type: String,
        id: Uuid,
    },

    /// Entity already exists (conflict)
    AlreadyExists {
        entity_type: String,
        id: Uuid,
    },
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityError::NotFound { entity_type, id } => {
                write!(f, "{} with id '{}' not found", entity_type, id)
            }
            EntityError::AlreadyExists { entity_type, id } => {
                write!(f, "{} with id '{}' already exists", entity_type, id)
            }
        }
    }
}

impl std::error::Error for EntityError {}

impl EntityError {
    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
            EntityError::AlreadyExists { .. } => "ENTITY_ALREADY_EXISTS",
        }
    }
}

impl From<EntityError> for ListError {
    fn from(err: EntityError) -> Self {
        ListError::Entity(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug)]
pub struct StorageError {
    pub backend: String,
    pub message: String,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} storage error: {}", self.backend, self.message)
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for ListError {
    fn from(err: StorageError) -> Self {
        ListError::Storage(err)
    }
}

// =============================================================================
// Auth Errors
// =============================================================================

/// Authorization failures
#[derive(Debug)]
pub enum AuthError {
    /// The caller is not authenticated
    Unauthenticated,

    /// The caller is authenticated but the policy denies the operation
    Forbidden {
        policy: String,
    },
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Unauthenticated => write!(f, "Authentication required"),
            AuthError::Forbidden { policy } => {
                write!(f, "Operation forbidden by policy '{}'", policy)
            }
        }
    }
}

impl std::error::Error for AuthError {}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::Unauthenticated => "UNAUTHENTICATED",
            AuthError::Forbidden { .. } => "FORBIDDEN",
        }
    }
}

impl From<AuthError> for ListError {
    fn from(err: AuthError) -> Self {
        ListError::Auth(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

/// Convert from anyhow::Error at the storage-collaborator seam
impl From<anyhow::Error> for ListError {
    fn from(err: anyhow::Error) -> Self {
        ListError::Storage(StorageError {
            backend: "unknown".to_string(),
            message: err.to_string(),
        })
    }
}

// =============================================================================
// User-facing error shape
// =============================================================================

/// Error shape handed to the presentation layer, with the human-readable
/// message already translated by the translation collaborator
#[derive(Debug, Clone, Serialize)]
pub struct UseCaseError {
    /// Stable error code for programmatic handling
    pub code: String,
    /// Human-readable, translated error message
    pub message: String,
}

impl fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for UseCaseError {}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for listkit operations
pub type ListResult<T> = Result<T, ListError>;

// =============================================================================
// Tests
// =============================================================================
