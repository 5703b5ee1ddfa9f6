//! Vehicles domain module.
//!
//! A vehicle owns a fuel tank of fixed capacity. Refuelling fails on overfill;
//! driving burns fuel proportional to distance and fails when the tank can't
//! cover the trip.

pub mod vehicle;

pub use vehicle::{
    Drive, Driven, FUEL_PER_DISTANCE, Refuel, Refueled, Vehicle, VehicleCommand, VehicleEvent,
    VehicleId,
};
