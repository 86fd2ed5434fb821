//! Record structs held by the registry and written to disk.
//!
//! All records derive `Serialize`/`Deserialize`; the persistence layer
//! encodes them with bincode, so the field order here is part of the
//! on-disk format.

use clinic_types::NonEmptyText;
use serde::{Deserialize, Serialize};

/// A doctor on the clinic's books.
///
/// The name doubles as the lookup key when patients are admitted: exact,
/// case-sensitive, first match wins. Duplicate names are allowed; a
/// duplicate is simply unreachable through by-name lookup. External
/// identity is the record's position in the doctor sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: NonEmptyText,
    pub age: u32,
    pub specialty: String,
    /// Consultation fee in currency units, added onto the room charge
    /// when a bill is computed.
    pub visiting_fee: u32,
}

/// A medication assigned to one patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub dosage: String,
}

/// An admitted patient.
///
/// `doctor_id` is resolved once at admission by doctor-name lookup and is
/// never re-validated on the record itself. Because patient removal
/// compacts the sequence, indices held elsewhere (appointments) can go
/// stale; that is detected defensively at render time only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub name: NonEmptyText,
    pub age: u32,
    pub diagnosis: String,
    pub room_number: u32,
    pub doctor_id: usize,
    pub medications: Vec<Medication>,
}

/// A single scheduled work period for a staff member.
///
/// Every field is free text. The day string only participates in the
/// weekday histogram when it exactly matches a canonical weekday name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub role: String,
}

/// A staff member and their assigned shifts, in assignment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub name: NonEmptyText,
    pub role: String,
    pub contact_info: String,
    pub shifts: Vec<Shift>,
}

/// A scheduled appointment.
///
/// Both ids are plain positions into the patient and doctor sequences,
/// validated against current bounds when the appointment is created and
/// re-checked defensively whenever the list is rendered. The date is
/// free text. Appointments are never mutated or removed, and they are
/// not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub patient_id: usize,
    pub doctor_id: usize,
    pub date: String,
}
