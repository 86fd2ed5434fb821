//! Interactive clinic record manager.
//!
//! A numbered menu loop against the in-memory registry: records are
//! loaded once at startup, every operation reports its outcome and
//! returns to the menu, and data is only written back when the save
//! action is chosen. All field inputs are whitespace-delimited tokens;
//! numeric inputs re-prompt in place until a valid non-negative integer
//! is supplied.

use clap::Parser;
use clinic_core::constants::{
    MAX_APPOINTMENTS, MAX_DOCTORS, MAX_MEDICATIONS, MAX_PATIENTS, MAX_STAFF,
};
use clinic_core::{
    persist, render, report, ClinicConfig, ClinicRegistry, Medication, NonEmptyText, Shift,
};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "clinic-run")]
#[command(about = "Interactive clinic record manager")]
struct Args {
    /// Data directory for the record files (falls back to
    /// CLINIC_DATA_DIR, then ./clinic_data)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = ClinicConfig::resolve(args.data_dir, std::env::var("CLINIC_DATA_DIR").ok());
    let mut registry = persist::load_or_fresh(&config);

    let stdin = io::stdin();
    let mut input = TokenInput::new(stdin.lock());
    run(&mut registry, &config, &mut input)
}

/// Whitespace-delimited token reader over an input stream.
///
/// Tokens are buffered a line at a time, so one line can feed several
/// prompts, exactly like token-based console input. Embedded spaces in a
/// field are therefore unsupported.
struct TokenInput<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenInput<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once the input stream is exhausted.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Reads a non-negative integer, re-prompting in place on anything
    /// else. Malformed input is never propagated as a failure.
    fn read_number(&mut self) -> io::Result<Option<u32>> {
        loop {
            let Some(token) = self.next_token()? else {
                return Ok(None);
            };
            match token.parse::<u32>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => prompt("Invalid input. Please enter a valid positive integer: ")?,
            }
        }
    }

    /// Like [`read_number`](Self::read_number) but for sequence indices.
    fn read_index(&mut self) -> io::Result<Option<usize>> {
        Ok(self.read_number()?.map(|n| n as usize))
    }
}

fn prompt(text: &str) -> io::Result<()> {
    print!("{text}");
    io::stdout().flush()
}

fn show_menu() {
    println!("\n----- Main Menu -----");
    println!("1. Add Doctor");
    println!("2. Add Patient");
    println!("3. Assign Medication to Patient");
    println!("4. View Doctors");
    println!("5. View Patients");
    println!("6. Schedule Appointment");
    println!("7. View Appointments");
    println!("8. Generate Report");
    println!("9. Save Data");
    println!("10. Add Staff");
    println!("11. Assign Shift to Staff");
    println!("12. View Staff Schedules");
    println!("13. Remove Patient");
    println!("14. View Patient's Bill");
    println!("15. Exit");
}

fn run<R: BufRead>(
    registry: &mut ClinicRegistry,
    config: &ClinicConfig,
    input: &mut TokenInput<R>,
) -> anyhow::Result<()> {
    loop {
        show_menu();
        prompt("Enter your choice: ")?;
        let Some(choice) = input.read_number()? else {
            // End of input: nothing more to do.
            return Ok(());
        };

        match choice {
            1 => add_doctor(registry, input)?,
            2 => add_patient(registry, input)?,
            3 => assign_medication(registry, input)?,
            4 => print!("{}", render::doctor_list(registry.doctors())),
            5 => print!("{}", render::patient_list(registry)),
            6 => schedule_appointment(registry, input)?,
            7 => print!("{}", render::appointment_list(registry)),
            8 => print!("{}", report::staff_schedule_report(registry.staff())),
            9 => save_data(registry, config),
            10 => add_staff(registry, input)?,
            11 => assign_shift(registry, input)?,
            12 => print!("{}", render::staff_schedules(registry.staff())),
            13 => remove_patient(registry, input)?,
            14 => view_patient_bill(registry, input)?,
            15 => {
                println!("Exiting program...");
                return Ok(());
            }
            _ => println!("Invalid choice! Please try again."),
        }
    }
}

fn add_doctor<R: BufRead>(
    registry: &mut ClinicRegistry,
    input: &mut TokenInput<R>,
) -> io::Result<()> {
    if registry.doctors().len() >= MAX_DOCTORS {
        println!("Maximum doctor limit reached.");
        return Ok(());
    }

    prompt("Enter doctor's name (this will be used as the ID): ")?;
    let Some(name) = input.next_token()? else {
        return Ok(());
    };
    prompt("Enter doctor's age: ")?;
    let Some(age) = input.read_number()? else {
        return Ok(());
    };
    prompt("Enter doctor's specialty: ")?;
    let Some(specialty) = input.next_token()? else {
        return Ok(());
    };
    prompt("Enter doctor's visiting fee: ")?;
    let Some(fee) = input.read_number()? else {
        return Ok(());
    };

    // Tokens are never empty, so this cannot fail in practice.
    let Ok(name) = NonEmptyText::new(&name) else {
        println!("Invalid doctor name.");
        return Ok(());
    };
    match registry.add_doctor(name, age, specialty, fee) {
        Ok(_) => println!("Doctor added successfully!"),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn add_patient<R: BufRead>(
    registry: &mut ClinicRegistry,
    input: &mut TokenInput<R>,
) -> io::Result<()> {
    if registry.patients().len() >= MAX_PATIENTS {
        println!("Maximum patient limit reached.");
        return Ok(());
    }

    prompt("Enter patient's name: ")?;
    let Some(name) = input.next_token()? else {
        return Ok(());
    };
    prompt("Enter patient's age: ")?;
    let Some(age) = input.read_number()? else {
        return Ok(());
    };
    prompt("Enter patient's diagnosis: ")?;
    let Some(diagnosis) = input.next_token()? else {
        return Ok(());
    };
    prompt("Enter patient's room number: ")?;
    let Some(room) = input.read_number()? else {
        return Ok(());
    };
    prompt("Enter the doctor's name (used as doctor ID): ")?;
    let Some(doctor_name) = input.next_token()? else {
        return Ok(());
    };

    let Ok(name) = NonEmptyText::new(&name) else {
        println!("Invalid patient name.");
        return Ok(());
    };
    // The fields above are already consumed; a failed doctor lookup
    // simply discards them without touching the registry.
    match registry.add_patient(name, age, diagnosis, room, &doctor_name) {
        Ok(_) => println!("Patient added successfully!"),
        Err(clinic_core::RegistryError::DoctorNotFound(_)) => println!("Doctor not found."),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn assign_medication<R: BufRead>(
    registry: &mut ClinicRegistry,
    input: &mut TokenInput<R>,
) -> io::Result<()> {
    prompt("Enter patient ID to assign medication: ")?;
    let Some(patient_id) = input.read_index()? else {
        return Ok(());
    };
    let Some(patient) = registry.patient(patient_id) else {
        println!("Invalid patient ID.");
        return Ok(());
    };
    if patient.medications.len() >= MAX_MEDICATIONS {
        println!("This patient has reached the maximum number of medications.");
        return Ok(());
    }

    prompt("Enter medication name: ")?;
    let Some(med_name) = input.next_token()? else {
        return Ok(());
    };
    prompt("Enter medication dosage: ")?;
    let Some(dosage) = input.next_token()? else {
        return Ok(());
    };

    match registry.assign_medication(
        patient_id,
        Medication {
            name: med_name,
            dosage,
        },
    ) {
        Ok(()) => println!("Medication assigned successfully!"),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn schedule_appointment<R: BufRead>(
    registry: &mut ClinicRegistry,
    input: &mut TokenInput<R>,
) -> io::Result<()> {
    if registry.appointments().len() >= MAX_APPOINTMENTS {
        println!("Maximum appointment limit reached.");
        return Ok(());
    }

    prompt(&format!(
        "Enter patient ID (0-{}): ",
        registry.patients().len() as i64 - 1
    ))?;
    let Some(patient_id) = input.read_index()? else {
        return Ok(());
    };
    if registry.patient(patient_id).is_none() {
        println!("Invalid patient ID.");
        return Ok(());
    }

    prompt(&format!(
        "Enter doctor ID (0-{}): ",
        registry.doctors().len() as i64 - 1
    ))?;
    let Some(doctor_id) = input.read_index()? else {
        return Ok(());
    };
    if registry.doctor(doctor_id).is_none() {
        println!("Invalid doctor ID.");
        return Ok(());
    }

    prompt("Enter appointment date (YYYY-MM-DD): ")?;
    let Some(date) = input.next_token()? else {
        return Ok(());
    };

    match registry.schedule_appointment(patient_id, doctor_id, date) {
        Ok(_) => println!("Appointment scheduled successfully!"),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn save_data(registry: &ClinicRegistry, config: &ClinicConfig) {
    match persist::save(registry, config) {
        Ok(()) => println!("Data saved successfully!"),
        Err(error) => {
            tracing::error!(%error, "save failed");
            println!("Error saving data.");
        }
    }
}

fn add_staff<R: BufRead>(
    registry: &mut ClinicRegistry,
    input: &mut TokenInput<R>,
) -> io::Result<()> {
    if registry.staff().len() >= MAX_STAFF {
        println!("Maximum staff limit reached.");
        return Ok(());
    }

    prompt("Enter staff member's name: ")?;
    let Some(name) = input.next_token()? else {
        return Ok(());
    };
    prompt("Enter staff member's role (e.g., Nurse, Admin): ")?;
    let Some(role) = input.next_token()? else {
        return Ok(());
    };
    prompt("Enter staff member's contact info: ")?;
    let Some(contact) = input.next_token()? else {
        return Ok(());
    };

    let Ok(name) = NonEmptyText::new(&name) else {
        println!("Invalid staff name.");
        return Ok(());
    };
    match registry.add_staff(name, role, contact) {
        Ok(_) => println!("Staff member added successfully!"),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn assign_shift<R: BufRead>(
    registry: &mut ClinicRegistry,
    input: &mut TokenInput<R>,
) -> io::Result<()> {
    prompt("Enter the staff member's name to assign shift: ")?;
    let Some(staff_name) = input.next_token()? else {
        return Ok(());
    };
    if registry.find_staff_by_name(&staff_name).is_none() {
        println!("Staff member not found.");
        return Ok(());
    }

    prompt("Enter day for the shift: ")?;
    let Some(day) = input.next_token()? else {
        return Ok(());
    };
    prompt("Enter start time for the shift: ")?;
    let Some(start_time) = input.next_token()? else {
        return Ok(());
    };
    prompt("Enter end time for the shift: ")?;
    let Some(end_time) = input.next_token()? else {
        return Ok(());
    };
    prompt("Enter role for the shift: ")?;
    let Some(role) = input.next_token()? else {
        return Ok(());
    };

    match registry.assign_shift(
        &staff_name,
        Shift {
            day,
            start_time,
            end_time,
            role,
        },
    ) {
        Ok(_) => println!("Shift assigned successfully to {staff_name}!"),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn remove_patient<R: BufRead>(
    registry: &mut ClinicRegistry,
    input: &mut TokenInput<R>,
) -> io::Result<()> {
    prompt("Enter the patient ID to remove: ")?;
    let Some(patient_id) = input.read_index()? else {
        return Ok(());
    };

    match registry.remove_patient(patient_id) {
        Ok(removed) => {
            match removed.bill {
                Some(breakdown) => print!("{}", render::bill(&breakdown)),
                None => println!(
                    "Patient: {} (no bill: doctor record unavailable)",
                    removed.patient.name
                ),
            }
            println!("Patient removed successfully!");
        }
        Err(_) => println!("Invalid patient ID."),
    }
    Ok(())
}

fn view_patient_bill<R: BufRead>(
    registry: &ClinicRegistry,
    input: &mut TokenInput<R>,
) -> io::Result<()> {
    prompt("Enter patient ID to view the bill: ")?;
    let Some(patient_id) = input.read_index()? else {
        return Ok(());
    };

    match registry.bill_for(patient_id) {
        Ok(breakdown) => print!("{}", render::bill(&breakdown)),
        Err(_) => println!("Invalid patient ID."),
    }
    Ok(())
}
