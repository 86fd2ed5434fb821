//! # Clinic Core
//!
//! Core record-keeping logic for the clinic record system.
//!
//! This crate contains the in-memory record store and everything that
//! operates on it:
//! - The [`registry::ClinicRegistry`] holding doctors, patients, staff,
//!   and appointments, with capacity-checked operations
//! - Billing ([`billing`]) and the staff schedule report ([`report`])
//! - Plain-text listing renderers ([`render`])
//! - Explicit save/load persistence to three flat binary files
//!   ([`persist`])
//!
//! **No interface concerns**: prompting, menu dispatch, and argument
//! parsing belong to the binaries. The registry is handed a resolved
//! [`config::ClinicConfig`] and never reads the environment itself.

pub mod billing;
pub mod config;
pub mod constants;
pub mod error;
pub mod persist;
pub mod records;
pub mod registry;
pub mod render;
pub mod report;

pub use billing::{bill_breakdown, calculate_bill, BillBreakdown};
pub use clinic_types::{NonEmptyText, TextError, Weekday};
pub use config::ClinicConfig;
pub use error::{RegistryError, RegistryResult};
pub use persist::{load_or_fresh, save, try_load, StoreError, StoreResult};
pub use records::{Appointment, Doctor, Medication, Patient, Shift, Staff};
pub use registry::{ClinicRegistry, RemovedPatient};
