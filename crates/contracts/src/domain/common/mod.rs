//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod aggregate_root;
pub mod api_scope;
pub mod named_ref;

// Re-exports
pub use aggregate_id::AggregateId;
pub use aggregate_root::AggregateRoot;
pub use api_scope::ApiScope;
pub use named_ref::NamedRef;
