//! # Listkit
//!
//! A generic list-data processing engine for multi-entity backend APIs in Rust.
//!
//! ## Features
//!
//! - **Declarative List Requests**: Typed filters, free-text search,
//!   multi-field sort, and offset or cursor pagination in one request
//! - **No Per-Entity Code**: Records are accessed dynamically through the
//!   `FieldAccess` capability, dot paths included
//! - **Relevance Scoring**: Search ranks by match quality with highlight
//!   spans for presentation
//! - **Stable Multi-Field Sort**: Direction and null placement per field,
//!   ties keep input order
//! - **Collaborator Seams**: Authorization, translation, transactions, and
//!   storage are injected traits with explicit pass-through defaults
//! - **Configuration-Based**: Per-entity field whitelists and search field
//!   sets via YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use listkit::prelude::*;
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({"name": "Past Event", "amount": 150.75}),
//!     json!({"name": "Future Event", "amount": -75.25}),
//!     json!({"name": "Current Event", "amount": 250.00}),
//! ];
//!
//! let result = ListProcessor::process(
//!     records,
//!     &PaginationRequest::page(1, 20),
//!     None,
//!     Some(&SortRequest::by(SortField::desc("amount"))),
//!     Some(&SearchRequest::in_fields("Event", vec!["name".into()])),
//! )?;
//!
//! assert_eq!(result.pagination.total_items, 3);
//! ```

pub mod config;
pub mod core;
pub mod list;
pub mod storage;
pub mod usecase;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        auth::{AllowAllAuthorizer, AuthContext, AuthPolicy, Authorizer, PolicyAuthorizer},
        collaborators::{IdentityTranslator, NoTransaction, TransactionGuard, Translator},
        entity::{Data, Entity, FieldAccess},
        error::{ListError, ListResult, UseCaseError},
        field::FieldValue,
        service::DataService,
    };

    // === List Engine ===
    pub use crate::list::{
        DateOperator, FilterRequest, HighlightSpan, ListDataResult, ListOperator, ListProcessor,
        Logic, NullOrder, NumberOperator, PaginationMethod, PaginationRequest, PaginationResponse,
        Predicate, ScoredRecord, SearchHit, SearchMetrics, SearchOptions, SearchRequest,
        SortDirection, SortField, SortRequest, StringOperator, TypedFilter,
    };

    // === Use Case ===
    pub use crate::usecase::{ListEntitiesUseCase, ListRequest};

    // === Storage ===
    pub use crate::storage::InMemoryDataService;

    // === Config ===
    pub use crate::config::{EntityListConfig, ListConfig, ListSettings};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
