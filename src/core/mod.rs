//! Core module containing fundamental traits and types for the framework

pub mod auth;
pub mod collaborators;
pub mod entity;
pub mod error;
pub mod field;
pub mod service;

pub use auth::{AllowAllAuthorizer, AuthContext, AuthPolicy, Authorizer, PolicyAuthorizer};
pub use collaborators::{IdentityTranslator, NoTransaction, TransactionGuard, Translator};
pub use entity::{Data, Entity, FieldAccess};
pub use error::{
    AuthError, EntityError, FilterError, ListError, ListResult, PaginationError, StorageError,
    UseCaseError, ValidationError,
};
pub use field::FieldValue;
pub use service::DataService;
