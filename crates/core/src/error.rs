//! Error types for registry operations.
//!
//! Every failure here is terminal to the current operation only; callers
//! report the message and return to whatever surface invoked them. No
//! variant implies partial mutation: operations validate before touching
//! the collections.

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("maximum doctor limit reached")]
    DoctorCapacity,
    #[error("maximum patient limit reached")]
    PatientCapacity,
    #[error("maximum staff limit reached")]
    StaffCapacity,
    #[error("maximum appointment limit reached")]
    AppointmentCapacity,
    #[error("this patient has reached the maximum number of medications")]
    MedicationCapacity,
    #[error("this staff member has reached the maximum number of shifts")]
    ShiftCapacity,
    #[error("doctor not found: {0}")]
    DoctorNotFound(String),
    #[error("staff member not found: {0}")]
    StaffNotFound(String),
    #[error("invalid patient ID: {0}")]
    InvalidPatientId(usize),
    #[error("invalid doctor ID: {0}")]
    InvalidDoctorId(usize),
}

pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
