//! `reservoir-core` — shared building blocks for the bounded-resource entities.
//!
//! This crate contains **pure domain** primitives (no I/O).

pub mod aggregate;
pub mod arg;
pub mod bounded;
pub mod entity;
pub mod error;
pub mod event;
pub mod id;

pub use aggregate::{Aggregate, AggregateRoot};
pub use arg::Arg;
pub use bounded::{BoundedLevel, Quantity};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use event::Event;
pub use id::EntityId;
