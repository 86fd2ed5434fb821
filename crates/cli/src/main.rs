use clap::{Parser, Subcommand};
use clinic_core::{persist, render, report, ClinicConfig, NonEmptyText, Shift};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clinic")]
#[command(about = "Clinic record system admin CLI")]
struct Cli {
    /// Data directory holding the record files (falls back to
    /// CLINIC_DATA_DIR, then ./clinic_data)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all doctors
    ListDoctors,
    /// List all patients
    ListPatients,
    /// List all staff members and their schedules
    ListStaff,
    /// Add a doctor
    AddDoctor {
        /// Doctor's name (used as the lookup key when admitting patients)
        name: String,
        /// Doctor's age
        age: u32,
        /// Doctor's specialty
        specialty: String,
        /// Visiting fee in currency units
        fee: u32,
    },
    /// Admit a patient under an existing doctor
    AddPatient {
        /// Patient's name
        name: String,
        /// Patient's age
        age: u32,
        /// Diagnosis
        diagnosis: String,
        /// Room number
        room: u32,
        /// Name of the treating doctor (exact match)
        doctor: String,
    },
    /// Add a staff member
    AddStaff {
        /// Staff member's name
        name: String,
        /// Role (e.g. Nurse, Admin)
        role: String,
        /// Contact info
        contact: String,
    },
    /// Assign a shift to a staff member
    AssignShift {
        /// Staff member's name (exact match)
        staff: String,
        /// Day of the week
        day: String,
        /// Shift start time
        start: String,
        /// Shift end time
        end: String,
        /// Role during the shift
        role: String,
    },
    /// Sort doctors by name (renumbers doctor IDs)
    SortDoctors,
    /// Sort patients by age (renumbers patient IDs)
    SortPatients,
    /// Show a patient's bill
    Bill {
        /// Patient ID (position in the patient list)
        patient_id: usize,
    },
    /// Generate the staff schedule report
    Report,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = ClinicConfig::resolve(cli.data_dir, std::env::var("CLINIC_DATA_DIR").ok());

    match cli.command {
        Some(Commands::ListDoctors) => {
            let registry = persist::load_or_fresh(&config);
            print!("{}", render::doctor_list(registry.doctors()));
        }
        Some(Commands::ListPatients) => {
            let registry = persist::load_or_fresh(&config);
            print!("{}", render::patient_list(&registry));
        }
        Some(Commands::ListStaff) => {
            let registry = persist::load_or_fresh(&config);
            print!("{}", render::staff_schedules(registry.staff()));
        }
        Some(Commands::AddDoctor {
            name,
            age,
            specialty,
            fee,
        }) => {
            let mut registry = persist::load_or_fresh(&config);
            match registry.add_doctor(NonEmptyText::new(&name)?, age, specialty, fee) {
                Ok(id) => {
                    persist::save(&registry, &config)?;
                    println!("Doctor added successfully with ID {id}");
                }
                Err(e) => eprintln!("Error adding doctor: {e}"),
            }
        }
        Some(Commands::AddPatient {
            name,
            age,
            diagnosis,
            room,
            doctor,
        }) => {
            let mut registry = persist::load_or_fresh(&config);
            match registry.add_patient(NonEmptyText::new(&name)?, age, diagnosis, room, &doctor) {
                Ok(id) => {
                    persist::save(&registry, &config)?;
                    println!("Patient added successfully with ID {id}");
                }
                Err(e) => eprintln!("Error adding patient: {e}"),
            }
        }
        Some(Commands::AddStaff {
            name,
            role,
            contact,
        }) => {
            let mut registry = persist::load_or_fresh(&config);
            match registry.add_staff(NonEmptyText::new(&name)?, role, contact) {
                Ok(id) => {
                    persist::save(&registry, &config)?;
                    println!("Staff member added successfully with ID {id}");
                }
                Err(e) => eprintln!("Error adding staff member: {e}"),
            }
        }
        Some(Commands::AssignShift {
            staff,
            day,
            start,
            end,
            role,
        }) => {
            let mut registry = persist::load_or_fresh(&config);
            let shift = Shift {
                day,
                start_time: start,
                end_time: end,
                role,
            };
            match registry.assign_shift(&staff, shift) {
                Ok(_) => {
                    persist::save(&registry, &config)?;
                    println!("Shift assigned successfully to {staff}!");
                }
                Err(e) => eprintln!("Error assigning shift: {e}"),
            }
        }
        Some(Commands::SortDoctors) => {
            let mut registry = persist::load_or_fresh(&config);
            registry.sort_doctors_by_name();
            persist::save(&registry, &config)?;
            println!("Doctors sorted by name.");
        }
        Some(Commands::SortPatients) => {
            let mut registry = persist::load_or_fresh(&config);
            registry.sort_patients_by_age();
            persist::save(&registry, &config)?;
            println!("Patients sorted by age.");
        }
        Some(Commands::Bill { patient_id }) => {
            let registry = persist::load_or_fresh(&config);
            match registry.bill_for(patient_id) {
                Ok(breakdown) => print!("{}", render::bill(&breakdown)),
                Err(e) => eprintln!("Error: {e}"),
            }
        }
        Some(Commands::Report) => {
            let registry = persist::load_or_fresh(&config);
            print!("{}", report::staff_schedule_report(registry.staff()));
        }
        None => {
            println!("Use 'clinic --help' for commands");
        }
    }

    Ok(())
}
