//! Staff schedule report.
//!
//! Tallies shifts across the whole roster and renders the report text:
//! per-member details, summary totals, and a per-weekday histogram in
//! fixed Sunday-first order. A shift is counted into the histogram only
//! when its day string exactly matches a canonical weekday name; anything
//! else contributes to the overall total but to no day.

use crate::records::Staff;
use clinic_types::Weekday;

/// Shift totals across the staff roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftTally {
    /// Every assigned shift, whatever its day string says.
    pub total_shifts: usize,
    /// Members with an empty shift list.
    pub staff_without_shifts: usize,
    /// Shifts per canonical weekday, Sunday first.
    pub per_day: [usize; 7],
}

/// Tallies shifts for the report.
pub fn tally_shifts(staff: &[Staff]) -> ShiftTally {
    let mut tally = ShiftTally {
        total_shifts: 0,
        staff_without_shifts: 0,
        per_day: [0; 7],
    };
    for member in staff {
        tally.total_shifts += member.shifts.len();
        if member.shifts.is_empty() {
            tally.staff_without_shifts += 1;
        }
        for shift in &member.shifts {
            if let Some(day) = Weekday::from_name(&shift.day) {
                tally.per_day[day.index()] += 1;
            }
        }
    }
    tally
}

/// Full staff schedule report.
pub fn staff_schedule_report(staff: &[Staff]) -> String {
    if staff.is_empty() {
        return "No staff members available to generate a report.\n".to_owned();
    }

    let mut out = String::from("\n--- Staff Schedule Report ---\n");
    out.push_str(&format!("Total number of staff: {}\n", staff.len()));

    for member in staff {
        out.push_str(&format!("\nStaff Member: {}\n", member.name));
        out.push_str(&format!("Role: {}\n", member.role));
        out.push_str(&format!("Contact Info: {}\n", member.contact_info));
        if member.shifts.is_empty() {
            out.push_str("No shifts assigned.\n");
        } else {
            out.push_str("Assigned Shifts:\n");
            for shift in &member.shifts {
                out.push_str(&format!(
                    "  Day: {}, Shift: {} to {}, Role: {}\n",
                    shift.day, shift.start_time, shift.end_time, shift.role
                ));
            }
        }
    }

    let tally = tally_shifts(staff);
    out.push_str("\n--- Report Summary ---\n");
    out.push_str(&format!(
        "Total number of shifts assigned across all staff: {}\n",
        tally.total_shifts
    ));
    out.push_str(&format!(
        "Staff members with no shifts: {}\n",
        tally.staff_without_shifts
    ));

    out.push_str("\n--- Shifts Summary by Day ---\n");
    for day in Weekday::ALL {
        out.push_str(&format!(
            "{}: {} shifts\n",
            day.name(),
            tally.per_day[day.index()]
        ));
    }

    out.push_str("\n--- End of Report ---\n");
    out
}
