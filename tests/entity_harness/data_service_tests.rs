//! Macro-generated test suite for `DataService<TestEvent>` contract validation.
//!
//! The `data_service_tests!` macro generates a test module that validates
//! any `DataService<TestEvent>` implementation against the full contract:
//! CRUD operations, field lookup across `FieldValue` variants, edge cases,
//! and concurrent access.
//!
//! # Usage
//!
//! ```rust,ignore
//! mod entity_harness;
//!
//! use entity_harness::*;
//! use listkit::storage::InMemoryDataService;
//!
//! data_service_tests!(InMemoryDataService::<TestEvent>::new());
//! ```

/// Generate a full `DataService<TestEvent>` conformance test suite.
///
/// `$factory` must be an expression that evaluates to an instance
/// implementing `DataService<TestEvent>`. It is re-evaluated for each test
/// to ensure isolation. For the concurrent access test, the returned
/// service must also implement `Clone + 'static` (shared state via Arc
/// pattern).
#[macro_export]
macro_rules! data_service_tests {
    ($factory:expr) => {
        mod data_service_contract_tests {
            use super::*;
            use listkit::core::entity::{Data, Entity};
            use listkit::core::service::DataService;
            use uuid::Uuid;

            // ==================================================================
            // CRUD — Create & Get
            // ==================================================================

            #[tokio::test]
            async fn test_create_and_get() {
                let service = $factory;
                let event = create_test_event("Kickoff", "planning", 12, 150.75, true);
                let original_id = event.id;

                let created = service.create(event).await.unwrap();
                assert_eq!(created.id(), original_id);
                assert_eq!(created.name(), "Kickoff");
                assert_eq!(created.category, "planning");
                assert_eq!(created.attendees, 12);
                assert!((created.amount - 150.75).abs() < f64::EPSILON);
                assert!(created.active);
                assert_eq!(created.status(), "active");

                let retrieved = service.get(&original_id).await.unwrap();
                assert!(retrieved.is_some(), "Entity should exist after create");
                let retrieved = retrieved.unwrap();
                assert_eq!(retrieved.id(), original_id);
                assert_eq!(retrieved.name(), "Kickoff");
            }

            // ==================================================================
            // CRUD — Get nonexistent
            // ==================================================================

            #[tokio::test]
            async fn test_get_nonexistent() {
                let service = $factory;
                let random_id = Uuid::new_v4();

                let result = service.get(&random_id).await.unwrap();
                assert!(
                    result.is_none(),
                    "Getting a nonexistent entity should return None"
                );
            }

            // ==================================================================
            // CRUD — List
            // ==================================================================

            #[tokio::test]
            async fn test_list_empty() {
                let service = $factory;

                let all = service.list().await.unwrap();
                assert!(all.is_empty(), "List on empty store should return empty vec");
            }

            #[tokio::test]
            async fn test_list_multiple() {
                let service = $factory;
                let batch = sample_batch(5);
                let mut expected_ids: Vec<Uuid> = Vec::new();

                for event in batch {
                    expected_ids.push(event.id);
                    service.create(event).await.unwrap();
                }

                let all = service.list().await.unwrap();
                assert_eq!(all.len(), 5, "List should return all 5 created entities");

                let returned_ids: Vec<Uuid> = all.iter().map(|e| e.id()).collect();
                for id in &expected_ids {
                    assert!(
                        returned_ids.contains(id),
                        "Listed entities should contain id {}",
                        id
                    );
                }
            }

            // ==================================================================
            // CRUD — Update
            // ==================================================================

            #[tokio::test]
            async fn test_update_existing() {
                let service = $factory;
                let mut event = create_test_event("Kickoff", "planning", 12, 150.75, true);
                let id = event.id;

                service.create(event.clone()).await.unwrap();

                event.name = "Kickoff (moved)".to_string();
                event.attendees = 20;

                let updated = service.update(&id, event).await.unwrap();
                assert_eq!(updated.name(), "Kickoff (moved)");
                assert_eq!(updated.attendees, 20);

                let retrieved = service.get(&id).await.unwrap().unwrap();
                assert_eq!(retrieved.name(), "Kickoff (moved)");
                assert_eq!(retrieved.attendees, 20);
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let service = $factory;
                let event = create_test_event("Ghost", "none", 0, 0.0, false);
                let id = event.id;

                let result = service.update(&id, event).await;
                assert!(
                    result.is_err(),
                    "Updating a nonexistent entity should return an error"
                );
            }

            // ==================================================================
            // CRUD — Delete
            // ==================================================================

            #[tokio::test]
            async fn test_delete_existing() {
                let service = $factory;
                let event = create_test_event("ToDelete", "cleanup", 4, 2.0, true);
                let id = event.id;

                service.create(event).await.unwrap();
                assert!(service.get(&id).await.unwrap().is_some());

                service.delete(&id).await.unwrap();
                assert!(
                    service.get(&id).await.unwrap().is_none(),
                    "Entity should be gone after delete"
                );
            }

            /// Deleting a nonexistent entity: some backends return Ok
            /// (idempotent), others return Err (strict). Both are accepted.
            #[tokio::test]
            async fn test_delete_nonexistent() {
                let service = $factory;
                let random_id = Uuid::new_v4();

                let result = service.delete(&random_id).await;
                match result {
                    Ok(()) => { /* Idempotent delete — in-memory style */ }
                    Err(_) => { /* Strict delete — SQL style (entity not found) */ }
                }
            }

            // ==================================================================
            // Field lookup — across FieldValue variants
            // ==================================================================

            #[tokio::test]
            async fn test_find_by_string_field() {
                let service = $factory;

                service
                    .create(create_test_event("Kickoff", "planning", 12, 1.0, true))
                    .await
                    .unwrap();
                service
                    .create(create_test_event("Retro", "review", 8, 2.0, true))
                    .await
                    .unwrap();

                let results = service.find_by_field("category", "review").await.unwrap();
                assert_eq!(results.len(), 1, "Lookup should find exactly one match");
                assert_eq!(results[0].name(), "Retro");
            }

            #[tokio::test]
            async fn test_find_by_integer_field() {
                let service = $factory;

                service
                    .create(create_test_event("Small", "planning", 5, 1.0, true))
                    .await
                    .unwrap();
                service
                    .create(create_test_event("AlsoSmall", "review", 5, 2.0, true))
                    .await
                    .unwrap();
                service
                    .create(create_test_event("Large", "planning", 80, 3.0, false))
                    .await
                    .unwrap();

                let results = service.find_by_field("attendees", "5").await.unwrap();
                assert_eq!(results.len(), 2, "Should find both events with 5 attendees");
                assert!(results.iter().all(|e| e.attendees == 5));
            }

            #[tokio::test]
            async fn test_find_by_boolean_field() {
                let service = $factory;

                service
                    .create(create_test_event("A", "planning", 1, 1.0, true))
                    .await
                    .unwrap();
                service
                    .create(create_test_event("B", "planning", 2, 2.0, false))
                    .await
                    .unwrap();

                let results = service.find_by_field("active", "false").await.unwrap();
                assert_eq!(results.len(), 1);
                assert!(!results[0].active);
            }

            #[tokio::test]
            async fn test_find_by_unknown_field() {
                let service = $factory;

                service
                    .create(create_test_event("A", "planning", 1, 1.0, true))
                    .await
                    .unwrap();

                let results = service
                    .find_by_field("nonexistent_field", "anything")
                    .await
                    .unwrap();
                assert!(
                    results.is_empty(),
                    "Lookup on unknown field should return empty vec"
                );
            }

            // ==================================================================
            // Edge case — Concurrent access
            // ==================================================================

            /// Concurrent creates from multiple spawned tasks. Requires the
            /// service to be `Clone + Send + 'static` (Clone shares the
            /// backing store via Arc).
            #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
            async fn test_concurrent_access() {
                let service = $factory;
                let s1 = service.clone();
                let s2 = service.clone();

                let e1 = create_test_event("Concurrent_A", "planning", 1, 1.0, true);
                let e2 = create_test_event("Concurrent_B", "review", 2, 2.0, false);
                let id1 = e1.id;
                let id2 = e2.id;

                let h1 = tokio::spawn(async move { s1.create(e1).await });
                let h2 = tokio::spawn(async move { s2.create(e2).await });

                let (r1, r2) = tokio::try_join!(h1, h2).unwrap();
                r1.unwrap();
                r2.unwrap();

                let all = service.list().await.unwrap();
                assert_eq!(all.len(), 2, "Both concurrently created entities should be present");

                let ids: Vec<Uuid> = all.iter().map(|e| e.id()).collect();
                assert!(ids.contains(&id1), "Entity A should be present");
                assert!(ids.contains(&id2), "Entity B should be present");
            }
        }
    };
}
