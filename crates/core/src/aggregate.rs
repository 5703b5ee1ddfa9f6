//! Aggregate root trait for the bounded-resource entities.

use crate::entity::Entity;
use crate::event::Event;

/// Aggregate root: an entity whose state moves through versioned events.
pub trait AggregateRoot: Entity {
    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Corresponds to the number of events applied since construction.
    fn version(&self) -> u64;
}

/// Aggregate execution semantics (pure, deterministic).
///
/// - **Decision logic**: `handle(&self, cmd)` validates and returns events.
/// - **State mutation**: `apply(&mut self, event)` evolves state.
///
/// Because `handle` only borrows `self`, a rejected command can never leave
/// the aggregate half-updated.
pub trait Aggregate: AggregateRoot {
    type Command: Clone + core::fmt::Debug;
    type Event: crate::event::Event;
    type Error: core::fmt::Debug;

    /// Evolve in-memory state from a single event.
    ///
    /// Implementations should bump their `version()` by exactly one.
    fn apply(&mut self, event: &Self::Event);

    /// Decide which events to emit given the current state and a command.
    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error>;

    /// Handle `command` and apply every resulting event.
    ///
    /// Returns the applied events.
    fn execute(&mut self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let events = match self.handle(command) {
            Ok(events) => events,
            Err(err) => {
                tracing::debug!(?command, ?err, "command rejected");
                return Err(err);
            }
        };

        for event in &events {
            self.apply(event);
            tracing::trace!(
                event_type = event.event_type(),
                version = self.version(),
                "event applied"
            );
        }

        Ok(events)
    }
}
