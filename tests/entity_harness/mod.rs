//! Shared test harness for entity and storage testing
//!
//! Provides `TestEvent` implementing `Entity + Data` with fields covering
//! all `FieldValue` variants, plus helper functions for creating test data.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! mod entity_harness;
//! use entity_harness::*;
//! ```

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use listkit::core::entity::{Data, Entity, FieldAccess};
use listkit::core::field::FieldValue;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// TestEvent — covers all FieldValue variants for thorough testing
// ---------------------------------------------------------------------------

/// A scheduling-event test entity with fields spanning the `FieldValue`
/// variants.
///
/// Fields:
/// - `name`: String (also used by `Data::name()`)
/// - `category`: String (for search/filter testing)
/// - `attendees`: i64 (Integer variant)
/// - `amount`: f64 (Float variant)
/// - `active`: bool (Boolean variant)
/// - `id`: Uuid (Uuid variant)
/// - `starts_at`: DateTime (DateTime variant)
/// - Unknown fields return `None` (absence testing)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestEvent {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub status: String,
    pub category: String,
    pub attendees: i64,
    pub amount: f64,
    pub active: bool,
    pub starts_at: DateTime<Utc>,
}

impl Entity for TestEvent {
    fn resource_name() -> &'static str {
        "events"
    }

    fn resource_name_singular() -> &'static str {
        "event"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn entity_type(&self) -> &str {
        "event"
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    fn status(&self) -> &str {
        &self.status
    }
}

impl FieldAccess for TestEvent {
    fn field_value(&self, path: &str) -> Option<FieldValue> {
        match path {
            "name" => Some(FieldValue::String(self.name.clone())),
            "category" => Some(FieldValue::String(self.category.clone())),
            "attendees" => Some(FieldValue::Integer(self.attendees)),
            "amount" => Some(FieldValue::Float(self.amount)),
            "active" => Some(FieldValue::Boolean(self.active)),
            "id" => Some(FieldValue::Uuid(self.id)),
            "starts_at" => Some(FieldValue::DateTime(self.starts_at)),
            "status" => Some(FieldValue::String(self.status.clone())),
            _ => None,
        }
    }

    fn field_names(&self) -> Vec<String> {
        ["name", "category", "attendees", "amount", "active", "status"]
            .iter()
            .map(|f| f.to_string())
            .collect()
    }
}

impl Data for TestEvent {
    fn name(&self) -> &str {
        &self.name
    }

    fn indexed_fields() -> &'static [&'static str] {
        &["name", "category", "attendees", "amount", "active", "status"]
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a test event with the given field values
pub fn create_test_event(
    name: &str,
    category: &str,
    attendees: i64,
    amount: f64,
    active: bool,
) -> TestEvent {
    create_test_event_with_id(Uuid::new_v4(), name, category, attendees, amount, active)
}

/// Create a test event with an explicit id
pub fn create_test_event_with_id(
    id: Uuid,
    name: &str,
    category: &str,
    attendees: i64,
    amount: f64,
    active: bool,
) -> TestEvent {
    let now = Utc::now();
    TestEvent {
        id,
        name: name.to_string(),
        created_at: now,
        updated_at: now,
        deleted_at: None,
        status: "active".to_string(),
        category: category.to_string(),
        attendees,
        amount,
        active,
        starts_at: now,
    }
}

/// Install a tracing subscriber for test runs; honors `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Create a batch of distinct test events
pub fn sample_batch(count: usize) -> Vec<TestEvent> {
    (0..count)
        .map(|i| {
            create_test_event(
                &format!("Event {}", i),
                if i % 2 == 0 { "planning" } else { "review" },
                (i as i64 + 1) * 5,
                (i as f64 + 1.0) * 10.0,
                i % 2 == 0,
            )
        })
        .collect()
}

pub mod data_service_tests;
