//! Background services
//!
//! The only background work today is the simulated registration call.

pub mod submission;
