//! Handsets domain module.
//!
//! A handset starts fully charged. Charging clamps at capacity instead of
//! failing; calls drain the battery per minute and fail when it runs short.

pub mod handset;

pub use handset::{
    BATTERY_PER_MINUTE, CallMade, Charge, Charged, Handset, HandsetCommand, HandsetEvent,
    HandsetId, MakeCall,
};
