//! The in-memory record store.
//!
//! [`ClinicRegistry`] owns the four collections (doctors, patients, staff,
//! appointments) and every operation on them. The registry is explicitly
//! constructed, loaded, and saved by the binaries; nothing here touches
//! process-wide state.
//!
//! Collections are growable vectors that enforce the documented capacity
//! ceilings, so hitting a limit behaves exactly like the fixed-size
//! arrays it replaces. Records are identified externally by their
//! position in the sequence at time of reference; removal compacts the
//! patient sequence, which is why appointment references can go stale.

use crate::billing::{self, BillBreakdown};
use crate::constants::{
    MAX_APPOINTMENTS, MAX_DOCTORS, MAX_MEDICATIONS, MAX_PATIENTS, MAX_SHIFTS_PER_STAFF, MAX_STAFF,
};
use crate::error::{RegistryError, RegistryResult};
use crate::records::{Appointment, Doctor, Medication, Patient, Shift, Staff};
use clinic_types::NonEmptyText;

/// A patient taken off the books, together with the final bill shown on
/// the way out.
///
/// The bill is `None` only when the patient's doctor reference no longer
/// resolves (possible after loading data files saved with a different
/// doctor roster).
#[derive(Debug)]
pub struct RemovedPatient {
    pub patient: Patient,
    pub bill: Option<BillBreakdown>,
}

/// The clinic's in-memory record store.
#[derive(Debug, Default)]
pub struct ClinicRegistry {
    doctors: Vec<Doctor>,
    patients: Vec<Patient>,
    staff: Vec<Staff>,
    appointments: Vec<Appointment>,
}

impl ClinicRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a registry from persisted collections.
    ///
    /// Appointments are not persisted, so a loaded registry always starts
    /// with an empty appointment list.
    pub(crate) fn from_parts(doctors: Vec<Doctor>, patients: Vec<Patient>, staff: Vec<Staff>) -> Self {
        Self {
            doctors,
            patients,
            staff,
            appointments: Vec::new(),
        }
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn staff(&self) -> &[Staff] {
        &self.staff
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn doctor(&self, doctor_id: usize) -> Option<&Doctor> {
        self.doctors.get(doctor_id)
    }

    pub fn patient(&self, patient_id: usize) -> Option<&Patient> {
        self.patients.get(patient_id)
    }

    /// First doctor whose name matches exactly (case-sensitive).
    pub fn find_doctor_by_name(&self, name: &str) -> Option<usize> {
        self.doctors.iter().position(|d| d.name.as_str() == name)
    }

    /// First staff member whose name matches exactly (case-sensitive).
    pub fn find_staff_by_name(&self, name: &str) -> Option<usize> {
        self.staff.iter().position(|s| s.name.as_str() == name)
    }

    // --- doctors ---

    /// Adds a doctor and returns its id (position in the sequence).
    ///
    /// No duplicate-name check: a second doctor with the same name is
    /// stored but unreachable through by-name lookup.
    pub fn add_doctor(
        &mut self,
        name: NonEmptyText,
        age: u32,
        specialty: String,
        visiting_fee: u32,
    ) -> RegistryResult<usize> {
        if self.doctors.len() >= MAX_DOCTORS {
            return Err(RegistryError::DoctorCapacity);
        }
        self.doctors.push(Doctor {
            name,
            age,
            specialty,
            visiting_fee,
        });
        Ok(self.doctors.len() - 1)
    }

    /// Sorts doctors by name, ascending, comparing the full name string
    /// byte-wise. Idempotent; only ever invoked as an explicit action.
    ///
    /// Doctor ids are positions, so sorting renumbers every doctor. Any
    /// `doctor_id` held by a patient or appointment keeps pointing at the
    /// old position.
    pub fn sort_doctors_by_name(&mut self) {
        self.doctors
            .sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
    }

    // --- patients ---

    /// Admits a patient under the named doctor.
    ///
    /// The doctor is resolved by exact name match, first match wins, and
    /// the resolved position becomes the patient's `doctor_id`. An
    /// unknown doctor aborts the admission with no mutation.
    pub fn add_patient(
        &mut self,
        name: NonEmptyText,
        age: u32,
        diagnosis: String,
        room_number: u32,
        doctor_name: &str,
    ) -> RegistryResult<usize> {
        if self.patients.len() >= MAX_PATIENTS {
            return Err(RegistryError::PatientCapacity);
        }
        let doctor_id = self
            .find_doctor_by_name(doctor_name)
            .ok_or_else(|| RegistryError::DoctorNotFound(doctor_name.to_owned()))?;
        self.patients.push(Patient {
            name,
            age,
            diagnosis,
            room_number,
            doctor_id,
            medications: Vec::new(),
        });
        Ok(self.patients.len() - 1)
    }

    /// Sorts patients by age, ascending. The tie-break is unstable:
    /// equal-age patients may swap relative order.
    pub fn sort_patients_by_age(&mut self) {
        self.patients.sort_unstable_by_key(|p| p.age);
    }

    /// Appends a medication to the given patient's list.
    pub fn assign_medication(
        &mut self,
        patient_id: usize,
        medication: Medication,
    ) -> RegistryResult<()> {
        let patient = self
            .patients
            .get_mut(patient_id)
            .ok_or(RegistryError::InvalidPatientId(patient_id))?;
        if patient.medications.len() >= MAX_MEDICATIONS {
            return Err(RegistryError::MedicationCapacity);
        }
        patient.medications.push(medication);
        Ok(())
    }

    /// Removes a patient, returning the record and the bill computed just
    /// before removal.
    ///
    /// Later entries shift down one position, so any appointment holding
    /// this or a higher patient id now silently points at the wrong
    /// patient. That staleness is only ever detected when appointments
    /// are rendered.
    pub fn remove_patient(&mut self, patient_id: usize) -> RegistryResult<RemovedPatient> {
        if patient_id >= self.patients.len() {
            return Err(RegistryError::InvalidPatientId(patient_id));
        }
        let bill = {
            let patient = &self.patients[patient_id];
            self.doctors
                .get(patient.doctor_id)
                .map(|doctor| billing::bill_breakdown(patient, doctor))
        };
        let patient = self.patients.remove(patient_id);
        Ok(RemovedPatient { patient, bill })
    }

    // --- staff ---

    /// Adds a staff member with no shifts assigned.
    pub fn add_staff(
        &mut self,
        name: NonEmptyText,
        role: String,
        contact_info: String,
    ) -> RegistryResult<usize> {
        if self.staff.len() >= MAX_STAFF {
            return Err(RegistryError::StaffCapacity);
        }
        self.staff.push(Staff {
            name,
            role,
            contact_info,
            shifts: Vec::new(),
        });
        Ok(self.staff.len() - 1)
    }

    /// Assigns a shift to the named staff member, returning their index.
    ///
    /// The member is resolved by exact name match, first match wins; an
    /// unknown name aborts with no mutation.
    pub fn assign_shift(&mut self, staff_name: &str, shift: Shift) -> RegistryResult<usize> {
        let staff_id = self
            .find_staff_by_name(staff_name)
            .ok_or_else(|| RegistryError::StaffNotFound(staff_name.to_owned()))?;
        let member = &mut self.staff[staff_id];
        if member.shifts.len() >= MAX_SHIFTS_PER_STAFF {
            return Err(RegistryError::ShiftCapacity);
        }
        member.shifts.push(shift);
        Ok(staff_id)
    }

    // --- appointments ---

    /// Schedules an appointment after validating both ids against the
    /// current sequence bounds. Nothing is stored unless every check
    /// passes.
    pub fn schedule_appointment(
        &mut self,
        patient_id: usize,
        doctor_id: usize,
        date: String,
    ) -> RegistryResult<usize> {
        if self.appointments.len() >= MAX_APPOINTMENTS {
            return Err(RegistryError::AppointmentCapacity);
        }
        if patient_id >= self.patients.len() {
            return Err(RegistryError::InvalidPatientId(patient_id));
        }
        if doctor_id >= self.doctors.len() {
            return Err(RegistryError::InvalidDoctorId(doctor_id));
        }
        self.appointments.push(Appointment {
            patient_id,
            doctor_id,
            date,
        });
        Ok(self.appointments.len() - 1)
    }

    // --- billing ---

    /// The bill breakdown for the given patient.
    pub fn bill_for(&self, patient_id: usize) -> RegistryResult<BillBreakdown> {
        let patient = self
            .patients
            .get(patient_id)
            .ok_or(RegistryError::InvalidPatientId(patient_id))?;
        let doctor = self
            .doctors
            .get(patient.doctor_id)
            .ok_or(RegistryError::InvalidDoctorId(patient.doctor_id))?;
        Ok(billing::bill_breakdown(patient, doctor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ROOM_CHARGE;

    fn name(s: &str) -> NonEmptyText {
        NonEmptyText::new(s).unwrap()
    }

    fn registry_with_doctor(fee: u32) -> ClinicRegistry {
        let mut registry = ClinicRegistry::new();
        registry
            .add_doctor(name("Smith"), 45, "Cardiology".into(), fee)
            .unwrap();
        registry
    }

    fn admit(registry: &mut ClinicRegistry, patient_name: &str, age: u32) -> usize {
        registry
            .add_patient(name(patient_name), age, "Flu".into(), 101, "Smith")
            .unwrap()
    }

    #[test]
    fn add_doctor_returns_sequence_position() {
        let mut registry = ClinicRegistry::new();
        assert_eq!(
            registry
                .add_doctor(name("Smith"), 45, "Cardiology".into(), 200)
                .unwrap(),
            0
        );
        assert_eq!(
            registry
                .add_doctor(name("Jones"), 50, "Neurology".into(), 300)
                .unwrap(),
            1
        );
    }

    #[test]
    fn doctor_capacity_is_enforced_without_mutation() {
        let mut registry = ClinicRegistry::new();
        for i in 0..MAX_DOCTORS {
            registry
                .add_doctor(name(&format!("Doctor{i}")), 40, "General".into(), 50)
                .unwrap();
        }
        let err = registry
            .add_doctor(name("Overflow"), 40, "General".into(), 50)
            .unwrap_err();
        assert!(matches!(err, RegistryError::DoctorCapacity));
        assert_eq!(registry.doctors().len(), MAX_DOCTORS);
    }

    #[test]
    fn add_patient_resolves_doctor_by_exact_name() {
        let mut registry = registry_with_doctor(200);
        let patient_id = admit(&mut registry, "Doe", 30);
        assert_eq!(registry.patient(patient_id).unwrap().doctor_id, 0);
        assert_eq!(
            registry
                .doctor(registry.patient(patient_id).unwrap().doctor_id)
                .unwrap()
                .name
                .as_str(),
            "Smith"
        );
    }

    #[test]
    fn add_patient_rejects_unknown_doctor() {
        let mut registry = registry_with_doctor(200);
        let err = registry
            .add_patient(name("Doe"), 30, "Flu".into(), 101, "smith")
            .unwrap_err();
        assert!(matches!(err, RegistryError::DoctorNotFound(ref n) if n == "smith"));
        assert!(registry.patients().is_empty());
    }

    #[test]
    fn first_matching_doctor_wins_on_duplicate_names() {
        let mut registry = ClinicRegistry::new();
        registry
            .add_doctor(name("Smith"), 45, "Cardiology".into(), 200)
            .unwrap();
        registry
            .add_doctor(name("Smith"), 60, "Dermatology".into(), 500)
            .unwrap();
        let patient_id = registry
            .add_patient(name("Doe"), 30, "Flu".into(), 101, "Smith")
            .unwrap();
        assert_eq!(registry.patient(patient_id).unwrap().doctor_id, 0);
    }

    #[test]
    fn patient_capacity_is_enforced() {
        let mut registry = registry_with_doctor(200);
        for i in 0..MAX_PATIENTS {
            admit(&mut registry, &format!("Patient{i}"), 30);
        }
        let err = registry
            .add_patient(name("Overflow"), 30, "Flu".into(), 101, "Smith")
            .unwrap_err();
        assert!(matches!(err, RegistryError::PatientCapacity));
        assert_eq!(registry.patients().len(), MAX_PATIENTS);
    }

    #[test]
    fn remove_patient_compacts_the_sequence() {
        let mut registry = registry_with_doctor(200);
        admit(&mut registry, "First", 20);
        admit(&mut registry, "Second", 30);
        admit(&mut registry, "Third", 40);

        let removed = registry.remove_patient(1).unwrap();
        assert_eq!(removed.patient.name.as_str(), "Second");
        assert_eq!(registry.patients().len(), 2);
        assert_eq!(registry.patient(0).unwrap().name.as_str(), "First");
        assert_eq!(registry.patient(1).unwrap().name.as_str(), "Third");
    }

    #[test]
    fn remove_patient_out_of_range_changes_nothing() {
        let mut registry = registry_with_doctor(200);
        admit(&mut registry, "Only", 20);
        let err = registry.remove_patient(5).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidPatientId(5)));
        assert_eq!(registry.patients().len(), 1);
    }

    #[test]
    fn remove_patient_reports_the_final_bill() {
        let mut registry = registry_with_doctor(200);
        admit(&mut registry, "Doe", 30);
        let removed = registry.remove_patient(0).unwrap();
        let bill = removed.bill.unwrap();
        assert_eq!(bill.total(), ROOM_CHARGE + 200);
    }

    #[test]
    fn medication_capacity_is_ten() {
        let mut registry = registry_with_doctor(200);
        let patient_id = admit(&mut registry, "Doe", 30);
        for i in 0..MAX_MEDICATIONS {
            registry
                .assign_medication(
                    patient_id,
                    Medication {
                        name: format!("Med{i}"),
                        dosage: "500mg".into(),
                    },
                )
                .unwrap();
        }
        let err = registry
            .assign_medication(
                patient_id,
                Medication {
                    name: "Overflow".into(),
                    dosage: "1mg".into(),
                },
            )
            .unwrap_err();
        assert!(matches!(err, RegistryError::MedicationCapacity));
        assert_eq!(
            registry.patient(patient_id).unwrap().medications.len(),
            MAX_MEDICATIONS
        );
    }

    #[test]
    fn assign_medication_rejects_bad_patient_id() {
        let mut registry = registry_with_doctor(200);
        let err = registry
            .assign_medication(
                0,
                Medication {
                    name: "Med".into(),
                    dosage: "1mg".into(),
                },
            )
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidPatientId(0)));
    }

    #[test]
    fn sort_doctors_by_name_orders_and_preserves_the_roster() {
        let mut registry = ClinicRegistry::new();
        for n in ["Young", "Adams", "Moore"] {
            registry
                .add_doctor(name(n), 40, "General".into(), 50)
                .unwrap();
        }
        registry.sort_doctors_by_name();
        let names: Vec<&str> = registry.doctors().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Adams", "Moore", "Young"]);

        // Idempotent: sorting again changes nothing.
        let before = registry.doctors().to_vec();
        registry.sort_doctors_by_name();
        assert_eq!(registry.doctors(), &before[..]);
    }

    #[test]
    fn sort_patients_by_age_is_ascending() {
        let mut registry = registry_with_doctor(200);
        admit(&mut registry, "Old", 80);
        admit(&mut registry, "Young", 8);
        admit(&mut registry, "Middle", 40);
        registry.sort_patients_by_age();
        let ages: Vec<u32> = registry.patients().iter().map(|p| p.age).collect();
        assert_eq!(ages, vec![8, 40, 80]);
    }

    #[test]
    fn staff_capacity_is_enforced() {
        let mut registry = ClinicRegistry::new();
        for i in 0..MAX_STAFF {
            registry
                .add_staff(name(&format!("Staff{i}")), "Nurse".into(), "x@clinic".into())
                .unwrap();
        }
        let err = registry
            .add_staff(name("Overflow"), "Nurse".into(), "x@clinic".into())
            .unwrap_err();
        assert!(matches!(err, RegistryError::StaffCapacity));
        assert_eq!(registry.staff().len(), MAX_STAFF);
    }

    #[test]
    fn assign_shift_appends_in_order() {
        let mut registry = ClinicRegistry::new();
        registry
            .add_staff(name("Alice"), "Nurse".into(), "alice@clinic".into())
            .unwrap();
        for day in ["Monday", "Tuesday"] {
            registry
                .assign_shift(
                    "Alice",
                    Shift {
                        day: day.into(),
                        start_time: "09:00".into(),
                        end_time: "17:00".into(),
                        role: "Nurse".into(),
                    },
                )
                .unwrap();
        }
        let shifts = &registry.staff()[0].shifts;
        assert_eq!(shifts.len(), 2);
        assert_eq!(shifts[0].day, "Monday");
        assert_eq!(shifts[1].day, "Tuesday");
    }

    #[test]
    fn assign_shift_to_unknown_staff_mutates_nothing() {
        let mut registry = ClinicRegistry::new();
        registry
            .add_staff(name("Alice"), "Nurse".into(), "alice@clinic".into())
            .unwrap();
        let err = registry
            .assign_shift(
                "Bob",
                Shift {
                    day: "Monday".into(),
                    start_time: "09:00".into(),
                    end_time: "17:00".into(),
                    role: "Nurse".into(),
                },
            )
            .unwrap_err();
        assert!(matches!(err, RegistryError::StaffNotFound(ref n) if n == "Bob"));
        assert!(registry.staff()[0].shifts.is_empty());
    }

    #[test]
    fn shift_ceiling_shares_the_appointment_capacity() {
        let mut registry = ClinicRegistry::new();
        registry
            .add_staff(name("Alice"), "Nurse".into(), "alice@clinic".into())
            .unwrap();
        for _ in 0..MAX_SHIFTS_PER_STAFF {
            registry
                .assign_shift(
                    "Alice",
                    Shift {
                        day: "Monday".into(),
                        start_time: "09:00".into(),
                        end_time: "17:00".into(),
                        role: "Nurse".into(),
                    },
                )
                .unwrap();
        }
        let err = registry
            .assign_shift(
                "Alice",
                Shift {
                    day: "Monday".into(),
                    start_time: "09:00".into(),
                    end_time: "17:00".into(),
                    role: "Nurse".into(),
                },
            )
            .unwrap_err();
        assert!(matches!(err, RegistryError::ShiftCapacity));
        assert_eq!(registry.staff()[0].shifts.len(), MAX_APPOINTMENTS);
    }

    #[test]
    fn schedule_appointment_validates_patient_bounds() {
        let mut registry = registry_with_doctor(200);
        admit(&mut registry, "One", 20);
        admit(&mut registry, "Two", 30);

        let err = registry
            .schedule_appointment(5, 0, "2024-01-01".into())
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidPatientId(5)));
        assert!(registry.appointments().is_empty());
    }

    #[test]
    fn schedule_appointment_validates_doctor_bounds() {
        let mut registry = registry_with_doctor(200);
        admit(&mut registry, "One", 20);
        let err = registry
            .schedule_appointment(0, 3, "2024-01-01".into())
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidDoctorId(3)));
        assert!(registry.appointments().is_empty());
    }

    #[test]
    fn schedule_appointment_stores_on_success() {
        let mut registry = registry_with_doctor(200);
        admit(&mut registry, "Doe", 30);
        let id = registry
            .schedule_appointment(0, 0, "2024-01-01".into())
            .unwrap();
        assert_eq!(id, 0);
        assert_eq!(registry.appointments()[0].date, "2024-01-01");
    }

    #[test]
    fn appointment_capacity_is_enforced() {
        let mut registry = registry_with_doctor(200);
        admit(&mut registry, "Doe", 30);
        for _ in 0..MAX_APPOINTMENTS {
            registry
                .schedule_appointment(0, 0, "2024-01-01".into())
                .unwrap();
        }
        let err = registry
            .schedule_appointment(0, 0, "2024-01-01".into())
            .unwrap_err();
        assert!(matches!(err, RegistryError::AppointmentCapacity));
        assert_eq!(registry.appointments().len(), MAX_APPOINTMENTS);
    }

    #[test]
    fn bill_for_adds_room_charge_to_doctor_fee() {
        let mut registry = registry_with_doctor(200);
        admit(&mut registry, "Doe", 30);
        let bill = registry.bill_for(0).unwrap();
        assert_eq!(bill.room_charge, 100);
        assert_eq!(bill.doctor_fee, 200);
        assert_eq!(bill.total(), 300);
    }

    #[test]
    fn bill_for_rejects_out_of_range_patient() {
        let registry = registry_with_doctor(200);
        let err = registry.bill_for(0).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidPatientId(0)));
    }

    #[test]
    fn appointment_reference_goes_stale_after_removal() {
        let mut registry = registry_with_doctor(200);
        admit(&mut registry, "First", 20);
        admit(&mut registry, "Second", 30);
        registry
            .schedule_appointment(1, 0, "2024-01-01".into())
            .unwrap();

        registry.remove_patient(0).unwrap();

        // The appointment still holds patient_id 1, which now points past
        // the end of the compacted sequence.
        let appointment = &registry.appointments()[0];
        assert_eq!(appointment.patient_id, 1);
        assert!(registry.patient(appointment.patient_id).is_none());
    }
}
