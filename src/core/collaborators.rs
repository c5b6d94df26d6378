//! Translation and transaction collaborators
//!
//! Both collaborators default to explicit pass-through implementations
//! injected per use case, the same null-object approach as
//! [`AllowAllAuthorizer`](crate::core::auth::AllowAllAuthorizer), never
//! ambient global state.

use anyhow::Result;
use async_trait::async_trait;

/// Translates stable error codes into user-facing messages.
///
/// The engine and use case produce error codes plus an untranslated
/// fallback message; the presentation layer receives whatever this
/// collaborator returns.
pub trait Translator: Send + Sync {
    /// Translate an error code, falling back to the given message when the
    /// code has no translation
    fn translate(&self, code: &str, fallback: &str) -> String;
}

/// Pass-through translator that always returns the fallback message
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, _code: &str, fallback: &str) -> String {
        fallback.to_string()
    }
}

/// Transactional boundary around a use-case execution.
///
/// Storage backends with real transactions implement this against their
/// connection; the default does nothing, which is correct for read-only
/// list operations and the in-memory backend.
#[async_trait]
pub trait TransactionGuard: Send + Sync {
    async fn begin(&self) -> Result<()>;
    async fn commit(&self) -> Result<()>;
    async fn rollback(&self) -> Result<()>;
}

/// Pass-through transaction guard
pub struct NoTransaction;

#[async_trait]
impl TransactionGuard for NoTransaction {
    async fn begin(&self) -> Result<()> {
        Ok(())
    }

    async fn commit(&self) -> Result<()> {
        Ok(())
    }

    async fn rollback(&self) -> Result<()> {
        Ok(())
    }
}
