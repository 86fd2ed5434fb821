//! Constants used throughout the clinic core crate.
//!
//! Capacity ceilings and file names live here so the documented limits
//! stay consistent across the registry, persistence, and both binaries.

/// Maximum number of doctors the registry will hold.
pub const MAX_DOCTORS: usize = 100;

/// Maximum number of patients the registry will hold.
pub const MAX_PATIENTS: usize = 300;

/// Maximum number of medications a single patient can carry.
pub const MAX_MEDICATIONS: usize = 10;

/// Maximum number of appointments that can be scheduled.
pub const MAX_APPOINTMENTS: usize = 100;

/// Maximum number of staff members.
pub const MAX_STAFF: usize = 100;

/// Maximum number of shifts per staff member.
///
/// Shares the appointment ceiling rather than the staff one. The limits
/// have always been coupled this way and the coupling is part of the
/// documented behaviour.
pub const MAX_SHIFTS_PER_STAFF: usize = MAX_APPOINTMENTS;

/// Fixed per-stay room charge, in currency units.
pub const ROOM_CHARGE: u32 = 100;

/// Filename for the persisted doctor records.
pub const DOCTORS_FILENAME: &str = "doctors.dat";

/// Filename for the persisted patient records.
pub const PATIENTS_FILENAME: &str = "patients.dat";

/// Filename for the persisted staff records.
pub const STAFF_FILENAME: &str = "staff.dat";

/// Default data directory when no explicit directory is configured.
pub const DEFAULT_DATA_DIR: &str = "clinic_data";
