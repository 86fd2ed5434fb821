//! Plain-text rendering of registry contents.
//!
//! Listings are built here so the interactive menu and the admin CLI
//! print identical output. Rendering never mutates the registry and is
//! where stale appointment references are detected: a bad entry gets its
//! own error line and the listing continues.

use crate::billing::BillBreakdown;
use crate::records::{Doctor, Staff};
use crate::registry::ClinicRegistry;

/// Numbered listing of all doctors in storage order.
pub fn doctor_list(doctors: &[Doctor]) -> String {
    if doctors.is_empty() {
        return "No doctors available.\n".to_owned();
    }

    let mut out = String::from("\n----- Doctors List -----\n");
    for (i, doctor) in doctors.iter().enumerate() {
        out.push_str(&format!("Doctor #{}\n", i + 1));
        out.push_str(&format!("Name: {}\n", doctor.name));
        out.push_str(&format!("Age: {}\n", doctor.age));
        out.push_str(&format!("Specialty: {}\n", doctor.specialty));
        out.push_str(&format!("Visiting Fee: {}\n\n", doctor.visiting_fee));
    }
    out
}

/// Listing of all patients with their resolved doctor and medications.
pub fn patient_list(registry: &ClinicRegistry) -> String {
    if registry.patients().is_empty() {
        return "No patients available.\n".to_owned();
    }

    let mut out = String::from("\n----- Patients List -----\n");
    for (i, patient) in registry.patients().iter().enumerate() {
        out.push_str(&format!("Patient #{}\n", i + 1));
        out.push_str(&format!("Name: {}\n", patient.name));
        out.push_str(&format!("Age: {}\n", patient.age));
        out.push_str(&format!("Diagnosis: {}\n", patient.diagnosis));
        out.push_str(&format!("Room Number: {}\n", patient.room_number));
        match registry.doctor(patient.doctor_id) {
            Some(doctor) => out.push_str(&format!("Assigned Doctor: {}\n", doctor.name)),
            None => out.push_str(&format!(
                "Assigned Doctor: (unknown doctor {})\n",
                patient.doctor_id
            )),
        }

        if patient.medications.is_empty() {
            out.push_str("No medications assigned.\n");
        } else {
            out.push_str("Medications:\n");
            for medication in &patient.medications {
                out.push_str(&format!(
                    "  {}, Dosage: {}\n",
                    medication.name, medication.dosage
                ));
            }
        }
    }
    out
}

/// Listing of all appointments.
///
/// Each entry's patient and doctor ids are re-validated against current
/// bounds; an entry whose references have gone stale (after a patient
/// removal) renders as an error line without stopping the listing.
pub fn appointment_list(registry: &ClinicRegistry) -> String {
    if registry.appointments().is_empty() {
        return "No appointments scheduled.\n".to_owned();
    }

    let mut out = String::from("\n----- Appointments List -----\n");
    for (i, appointment) in registry.appointments().iter().enumerate() {
        let patient = registry.patient(appointment.patient_id);
        let doctor = registry.doctor(appointment.doctor_id);
        match (patient, doctor) {
            (Some(patient), Some(doctor)) => {
                out.push_str(&format!("Appointment #{}\n", i + 1));
                out.push_str(&format!("Patient: {}\n", patient.name));
                out.push_str(&format!("Doctor: {}\n", doctor.name));
                out.push_str(&format!("Date: {}\n\n", appointment.date));
            }
            _ => {
                out.push_str(&format!(
                    "Error: Invalid patient or doctor data for appointment #{}\n",
                    i + 1
                ));
            }
        }
    }
    out
}

/// Every staff member with role, contact, and shifts in assignment order.
pub fn staff_schedules(staff: &[Staff]) -> String {
    if staff.is_empty() {
        return "No staff members found.\n".to_owned();
    }

    let mut out = String::new();
    for member in staff {
        out.push_str(&format!("\nStaff Member: {} ({})\n", member.name, member.role));
        out.push_str(&format!("Contact Info: {}\n", member.contact_info));
        out.push_str("Assigned Shifts:\n");
        if member.shifts.is_empty() {
            out.push_str("  No shifts assigned.\n");
        } else {
            for shift in &member.shifts {
                out.push_str(&format!(
                    "  Day: {}, Shift: {} to {}, Role: {}\n",
                    shift.day, shift.start_time, shift.end_time, shift.role
                ));
            }
        }
    }
    out
}

/// The itemised bill for one patient.
pub fn bill(breakdown: &BillBreakdown) -> String {
    let mut out = String::new();
    out.push_str(&format!("Patient: {}\n", breakdown.patient_name));
    out.push_str(&format!("Room Charge: {}\n", breakdown.room_charge));
    out.push_str(&format!("Doctor's Fee: {}\n", breakdown.doctor_fee));
    out.push_str(&format!("Total Bill: {}\n", breakdown.total()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Medication, Shift};
    use clinic_types::NonEmptyText;

    fn name(s: &str) -> NonEmptyText {
        NonEmptyText::new(s).unwrap()
    }

    fn populated_registry() -> ClinicRegistry {
        let mut registry = ClinicRegistry::new();
        registry
            .add_doctor(name("Smith"), 45, "Cardiology".into(), 200)
            .unwrap();
        registry
            .add_patient(name("Doe"), 30, "Flu".into(), 101, "Smith")
            .unwrap();
        registry
    }

    #[test]
    fn empty_listings_use_empty_state_messages() {
        let registry = ClinicRegistry::new();
        assert_eq!(doctor_list(registry.doctors()), "No doctors available.\n");
        assert_eq!(patient_list(&registry), "No patients available.\n");
        assert_eq!(appointment_list(&registry), "No appointments scheduled.\n");
        assert_eq!(staff_schedules(registry.staff()), "No staff members found.\n");
    }

    #[test]
    fn patient_listing_resolves_doctor_name() {
        let mut registry = populated_registry();
        registry
            .assign_medication(
                0,
                Medication {
                    name: "Paracetamol".into(),
                    dosage: "500mg".into(),
                },
            )
            .unwrap();
        let listing = patient_list(&registry);
        assert!(listing.contains("Assigned Doctor: Smith"));
        assert!(listing.contains("  Paracetamol, Dosage: 500mg"));
    }

    #[test]
    fn stale_appointment_renders_error_line_and_continues() {
        let mut registry = populated_registry();
        registry
            .add_patient(name("Roe"), 40, "Cold".into(), 102, "Smith")
            .unwrap();
        registry
            .schedule_appointment(1, 0, "2024-01-01".into())
            .unwrap();
        registry
            .schedule_appointment(0, 0, "2024-02-02".into())
            .unwrap();

        // Removing patient 0 shifts Roe to index 0; the first appointment
        // now points past the end of the sequence.
        registry.remove_patient(0).unwrap();

        let listing = appointment_list(&registry);
        assert!(listing.contains("Error: Invalid patient or doctor data for appointment #1"));
        assert!(listing.contains("Appointment #2"));
        assert!(listing.contains("Date: 2024-02-02"));
    }

    #[test]
    fn bill_lists_all_line_items() {
        let registry = populated_registry();
        let rendered = bill(&registry.bill_for(0).unwrap());
        assert_eq!(
            rendered,
            "Patient: Doe\nRoom Charge: 100\nDoctor's Fee: 200\nTotal Bill: 300\n"
        );
    }

    #[test]
    fn shiftless_staff_render_placeholder() {
        let mut registry = ClinicRegistry::new();
        registry
            .add_staff(name("Alice"), "Nurse".into(), "alice@clinic".into())
            .unwrap();
        registry
            .add_staff(name("Bob"), "Admin".into(), "bob@clinic".into())
            .unwrap();
        registry
            .assign_shift(
                "Bob",
                Shift {
                    day: "Friday".into(),
                    start_time: "09:00".into(),
                    end_time: "17:00".into(),
                    role: "Admin".into(),
                },
            )
            .unwrap();

        let listing = staff_schedules(registry.staff());
        assert!(listing.contains("Staff Member: Alice (Nurse)"));
        assert!(listing.contains("  No shifts assigned.\n"));
        assert!(listing.contains("  Day: Friday, Shift: 09:00 to 17:00, Role: Admin"));
    }
}
