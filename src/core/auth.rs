//! Authorization system for listkit
//!
//! Provides context-based authorization with multiple auth types:
//! - User authentication
//! - Service-to-service
//! - Admin access
//!
//! The engine itself never sees auth: the authorization collaborator runs
//! in the use case, around the engine call.

use crate::core::error::AuthError;
use async_trait::async_trait;
use uuid::Uuid;

/// Authorization context attached to a request
#[derive(Debug, Clone)]
pub enum AuthContext {
    /// Authenticated user
    User {
        user_id: Uuid,
        roles: Vec<String>,
    },

    /// Service-to-service communication
    Service {
        service_name: String,
    },

    /// System administrator
    Admin { admin_id: Uuid },

    /// No authentication (public access)
    Anonymous,
}

impl AuthContext {
    /// Check if context represents an admin
    pub fn is_admin(&self) -> bool {
        matches!(self, AuthContext::Admin { .. })
    }

    /// Check if context represents a service
    pub fn is_service(&self) -> bool {
        matches!(self, AuthContext::Service { .. })
    }

    /// Get user_id if available
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            AuthContext::User { user_id, .. } => Some(*user_id),
            _ => None,
        }
    }
}

/// Authorization policy for an operation
#[derive(Debug, Clone)]
pub enum AuthPolicy {
    /// Public access (no auth required)
    Public,

    /// Any authenticated user
    Authenticated,

    /// User must have one of these roles
    HasRole(Vec<String>),

    /// Service-to-service only
    ServiceOnly,

    /// Admin only
    AdminOnly,

    /// Combination of policies (AND)
    And(Vec<AuthPolicy>),

    /// Combination of policies (OR)
    Or(Vec<AuthPolicy>),
}

impl AuthPolicy {
    /// Check if auth context satisfies this policy
    pub fn check(&self, context: &AuthContext) -> bool {
        match self {
            AuthPolicy::Public => true,

            AuthPolicy::Authenticated => !matches!(context, AuthContext::Anonymous),

            AuthPolicy::HasRole(required_roles) => match context {
                AuthContext::User { roles, .. } => required_roles.iter().any(|r| roles.contains(r)),
                _ => false,
            },

            AuthPolicy::ServiceOnly => context.is_service(),

            AuthPolicy::AdminOnly => context.is_admin(),

            AuthPolicy::And(policies) => policies.iter().all(|p| p.check(context)),

            AuthPolicy::Or(policies) => policies.iter().any(|p| p.check(context)),
        }
    }

    /// Parse policy from string (for YAML config)
    pub fn parse_policy(s: &str) -> Self {
        match s {
            "public" => AuthPolicy::Public,
            "authenticated" => AuthPolicy::Authenticated,
            "service_only" => AuthPolicy::ServiceOnly,
            "admin_only" => AuthPolicy::AdminOnly,
            s if s.starts_with("role:") => {
                let role = s.trim_start_matches("role:").to_string();
                AuthPolicy::HasRole(vec![role])
            }
            _ => AuthPolicy::Authenticated, // Default
        }
    }

    /// Short label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            AuthPolicy::Public => "public",
            AuthPolicy::Authenticated => "authenticated",
            AuthPolicy::HasRole(_) => "role",
            AuthPolicy::ServiceOnly => "service_only",
            AuthPolicy::AdminOnly => "admin_only",
            AuthPolicy::And(_) => "and",
            AuthPolicy::Or(_) => "or",
        }
    }
}

/// Trait for authorization collaborators
#[async_trait]
pub trait Authorizer: Send + Sync {
    /// Check whether the context may perform the operation guarded by the
    /// policy
    async fn authorize(&self, context: &AuthContext, policy: &AuthPolicy)
        -> Result<(), AuthError>;
}

/// Authorizer that enforces the policy against the context
pub struct PolicyAuthorizer;

#[async_trait]
impl Authorizer for PolicyAuthorizer {
    async fn authorize(
        &self,
        context: &AuthContext,
        policy: &AuthPolicy,
    ) -> Result<(), AuthError> {
        if policy.check(context) {
            Ok(())
        } else if matches!(context, AuthContext::Anonymous) {
            Err(AuthError::Unauthenticated)
        } else {
            Err(AuthError::Forbidden {
                policy: policy.label().to_string(),
            })
        }
    }
}

/// No-op authorizer that allows everything.
///
/// The explicit default when no authorization collaborator is configured:
/// an injected null object, not ambient state.
pub struct AllowAllAuthorizer;

#[async_trait]
impl Authorizer for AllowAllAuthorizer {
    async fn authorize(
        &self,
        _context: &AuthContext,
        _policy: &AuthPolicy,
    ) -> Result<(), AuthError> {
        Ok(())
    }
}
