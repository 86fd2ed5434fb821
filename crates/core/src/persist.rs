//! Flat-file persistence for the registry.
//!
//! Three independent binary files (`doctors.dat`, `patients.dat`,
//! `staff.dat`), each holding a record count followed by that many
//! bincode-encoded records. Saving is explicit and fully overwrites all
//! three files; there is no autosave and no incremental write.
//!
//! Loading is all-or-nothing across the three files: if any of them is
//! absent or cannot be opened, the store starts fresh rather than
//! erroring. Appointments are deliberately not persisted; a loaded
//! registry always begins with an empty appointment list.

use crate::config::ClinicConfig;
use crate::constants::{MAX_DOCTORS, MAX_PATIENTS, MAX_STAFF};
use crate::registry::ClinicRegistry;
use bincode::config;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode record data: {0}")]
    Encode(#[from] bincode::error::EncodeError),
    #[error("failed to decode record data: {0}")]
    Decode(#[from] bincode::error::DecodeError),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Writes all three data files, overwriting any previous contents.
///
/// The data directory is created if it does not exist yet. Appointments
/// stay in memory only.
pub fn save(registry: &ClinicRegistry, config: &ClinicConfig) -> StoreResult<()> {
    fs::create_dir_all(config.data_dir())?;
    write_records(&config.doctors_file(), registry.doctors())?;
    write_records(&config.patients_file(), registry.patients())?;
    write_records(&config.staff_file(), registry.staff())?;
    if !registry.appointments().is_empty() {
        tracing::debug!(
            count = registry.appointments().len(),
            "appointments are in-memory only and were not saved"
        );
    }
    Ok(())
}

/// Reads the three data files back into a registry.
///
/// Returns `Ok(None)` when any of the files cannot be opened — the
/// "no saved data" case. Decode failures are real errors; callers that
/// want the degrade-to-fresh behaviour use [`load_or_fresh`].
pub fn try_load(config: &ClinicConfig) -> StoreResult<Option<ClinicRegistry>> {
    let doctors_file = File::open(config.doctors_file());
    let patients_file = File::open(config.patients_file());
    let staff_file = File::open(config.staff_file());
    let (Ok(doctors_file), Ok(patients_file), Ok(staff_file)) =
        (doctors_file, patients_file, staff_file)
    else {
        return Ok(None);
    };

    let doctors = read_records(doctors_file, MAX_DOCTORS, "doctors")?;
    let patients = read_records(patients_file, MAX_PATIENTS, "patients")?;
    let staff = read_records(staff_file, MAX_STAFF, "staff")?;
    Ok(Some(ClinicRegistry::from_parts(doctors, patients, staff)))
}

/// Loads saved data, falling back to an empty registry when the files are
/// absent or unreadable.
pub fn load_or_fresh(config: &ClinicConfig) -> ClinicRegistry {
    match try_load(config) {
        Ok(Some(registry)) => registry,
        Ok(None) => {
            tracing::info!("no saved data found, starting fresh");
            ClinicRegistry::new()
        }
        Err(error) => {
            tracing::warn!(%error, "saved data is unreadable, starting fresh");
            ClinicRegistry::new()
        }
    }
}

fn write_records<T: serde::Serialize>(path: &Path, records: &[T]) -> StoreResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    bincode::serde::encode_into_std_write(records.len() as u32, &mut writer, config::standard())?;
    for record in records {
        bincode::serde::encode_into_std_write(record, &mut writer, config::standard())?;
    }
    writer.flush()?;
    Ok(())
}

fn read_records<T: serde::de::DeserializeOwned>(
    file: File,
    capacity: usize,
    collection: &str,
) -> StoreResult<Vec<T>> {
    let mut reader = BufReader::new(file);
    let count: u32 = bincode::serde::decode_from_std_read(&mut reader, config::standard())?;
    if count as usize > capacity {
        tracing::warn!(
            count,
            capacity,
            collection,
            "persisted count exceeds capacity, loading up to capacity"
        );
    }
    let keep = (count as usize).min(capacity);
    let mut records = Vec::with_capacity(keep);
    for _ in 0..keep {
        records.push(bincode::serde::decode_from_std_read(
            &mut reader,
            config::standard(),
        )?);
    }
    Ok(records)
}
