//! Core domain model of a grid-city delivery service.
//!
//! Couriers carry a limited set of storage places, orders carry a volume and
//! a destination, and an external dispatcher wires the two together: it asks
//! a [`Courier`] whether it can take an order, stores the order, keeps the
//! [`Order`] state machine in sync, and advances the courier tick by tick
//! until handover. This crate holds only that decision logic; persistence and
//! transport live in the surrounding service layer.

pub mod domain;

pub use domain::courier::{Courier, CourierError, Speed, StoragePlace, StoragePlaceError};
pub use domain::kernel::{Location, ValueError, Volume};
pub use domain::order::{Order, OrderError, OrderStatus, ReassignmentPolicy};
