//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the FoodGuard monitor:
//! baseline calibration, spoilage classification, the food sensitivity
//! table, and the shared-state region both tasks synchronize on.
//! All interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real peripherals.

pub mod calibration;
pub mod classifier;
pub mod commands;
pub mod events;
pub mod food;
pub mod ports;
pub mod service;
pub mod shared;
pub mod state;
