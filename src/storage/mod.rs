//! Storage implementations
//!
//! Real deployments plug their own [`DataService`](crate::core::DataService)
//! backends in; the in-memory implementation is for testing and
//! development.

pub mod in_memory;

pub use in_memory::InMemoryDataService;
