// src/output/mod.rs
//! Output handling with planning separated from execution.
//!
//! [`plan_delivery`] is pure; [`deliver`] performs the I/O.

mod planner;
mod types;
mod writer;

pub use planner::{plan_delivery, sanitize_file_stem, OutputTarget};
pub use types::{CompletedOperation, DeliveryTarget, FailedOperation, OutputPlan, OutputReport};
pub use writer::deliver;
