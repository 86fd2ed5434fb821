//! Bill computation.
//!
//! A bill is the fixed room charge plus the visiting fee of the patient's
//! assigned doctor. No proration, no medication cost, no insurance logic.

use crate::constants::ROOM_CHARGE;
use crate::records::{Doctor, Patient};

/// The line items of one patient's bill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillBreakdown {
    pub patient_name: String,
    pub room_charge: u32,
    pub doctor_fee: u32,
}

impl BillBreakdown {
    pub fn total(&self) -> u32 {
        self.room_charge + self.doctor_fee
    }
}

/// Total bill for a patient treated by the given doctor.
pub fn calculate_bill(_patient: &Patient, doctor: &Doctor) -> u32 {
    ROOM_CHARGE + doctor.visiting_fee
}

/// Builds the displayable breakdown for a patient/doctor pair.
pub fn bill_breakdown(patient: &Patient, doctor: &Doctor) -> BillBreakdown {
    BillBreakdown {
        patient_name: patient.name.as_str().to_owned(),
        room_charge: ROOM_CHARGE,
        doctor_fee: doctor.visiting_fee,
    }
}
