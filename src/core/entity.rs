//! Entity traits and the dynamic field access capability

use crate::core::field::FieldValue;
use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

/// Dynamic, by-name access to a record's fields.
///
/// This is the capability the list engine is built on: it has no
/// compile-time knowledge of record shape, so every field read goes through
/// `field_value`. Paths are case-sensitive and may use dot separators to
/// descend into nested sub-objects (e.g. `"location.name"`). A path that
/// does not resolve yields `None`: absence, never an error.
pub trait FieldAccess {
    /// Resolve a field path to its value, or `None` when absent
    fn field_value(&self, path: &str) -> Option<FieldValue>;

    /// Top-level field names, used when a search does not restrict its
    /// field set
    fn field_names(&self) -> Vec<String>;
}

/// JSON objects get field access for free, including dot-path traversal.
impl FieldAccess for Value {
    fn field_value(&self, path: &str) -> Option<FieldValue> {
        let mut current = self;
        for segment in path.split('.') {
            current = current.as_object()?.get(segment)?;
        }
        FieldValue::from_json(current)
    }

    fn field_names(&self) -> Vec<String> {
        self.as_object()
            .map(|map| map.keys().cloned().collect())
            .unwrap_or_default()
    }
}

/// Base trait for all entities in the system.
///
/// This trait provides the fundamental metadata needed for any entity type.
/// All entities have:
/// - id: Unique identifier
/// - type: Entity type name (e.g., "event", "product")
/// - created_at: Creation timestamp
/// - updated_at: Last modification timestamp
/// - deleted_at: Soft deletion timestamp (optional)
/// - status: Current status of the entity
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name used in listings (e.g., "events", "products")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "event", "product")
    fn resource_name_singular() -> &'static str;

    // === Core Entity Fields ===

    /// Get the unique identifier for this entity instance
    fn id(&self) -> Uuid;

    /// Get the entity type name
    fn entity_type(&self) -> &str;

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Get the last update timestamp
    fn updated_at(&self) -> DateTime<Utc>;

    /// Get the deletion timestamp (soft delete)
    fn deleted_at(&self) -> Option<DateTime<Utc>>;

    /// Get the entity status
    fn status(&self) -> &str;

    // === Utility Methods ===

    /// Check if the entity has been soft-deleted
    fn is_deleted(&self) -> bool {
        self.deleted_at().is_some()
    }

    /// Check if the entity is active (status == "active" and not deleted)
    fn is_active(&self) -> bool {
        self.status() == "active" && !self.is_deleted()
    }
}

/// Trait for data entities that represent concrete domain objects.
///
/// Data entities extend the base Entity with a human-readable name, a set
/// of indexed fields, and dynamic field access through [`FieldAccess`].
pub trait Data: Entity + FieldAccess {
    /// Get the name of this data entity
    fn name(&self) -> &str;

    /// Fields that can be filtered, sorted, and searched for this type
    fn indexed_fields() -> &'static [&'static str];
}
