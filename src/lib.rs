//! Book circulation for a small lending library.
//!
//! This crate models the lifecycle of a library book (available, borrowed,
//! reserved) as a closed state machine with a total transition function,
//! layers a premium lending policy on top of it, and tracks every request
//! through a circulation desk that keeps history and notifies observers.

pub mod catalog;
pub mod circulation;
pub mod desk;
pub mod observers;
pub mod patron;
pub mod policy;
pub mod report;

pub use catalog::{Book, Catalog};
pub use circulation::{BookStatus, CirculationEvent, Outcome, RejectReason};
pub use desk::{CirculationDesk, LoanRecord};
pub use patron::{Entitlement, Patron};
pub use report::CirculationReport;
