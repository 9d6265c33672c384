//! Field-to-machine partitioning.
//!
//! # Algorithm
//!
//! - **Abundant machines** (`machine_count >= fields.len()`): field `i` goes
//!   to machine `i` in input order; the remaining machines stay empty.
//! - **Scarce machines**: Longest Processing Time first. Fields are sorted
//!   by area, largest first (stable), and each is handed to the machine with
//!   the lowest cumulative area, lowest index on ties.
//!
//! LPT is not optimal but bounds the makespan at 4/3 of the optimum.
//!
//! # Complexity
//! O(n log n + n * m) where n=fields, m=machines.
//!
//! # Reference
//! Graham (1969), "Bounds on Multiprocessing Timing Anomalies"

use crate::models::Field;

/// Partitions fields across `machine_count` machines.
///
/// Returns exactly `machine_count` lists (some possibly empty), indexed by
/// zero-based machine index. Every input field appears in exactly one list.
///
/// `machine_count` must be positive; a zero count yields an empty partition
/// and drops every field, so callers validate first.
pub fn assign_fields(fields: &[Field], machine_count: usize) -> Vec<Vec<Field>> {
    if machine_count == 0 {
        return Vec::new();
    }

    if machine_count >= fields.len() {
        let mut assignments: Vec<Vec<Field>> = fields.iter().map(|f| vec![f.clone()]).collect();
        assignments.resize_with(machine_count, Vec::new);
        return assignments;
    }

    let mut by_area: Vec<&Field> = fields.iter().collect();
    by_area.sort_by(|a, b| b.area().total_cmp(&a.area()));

    let mut assignments: Vec<Vec<Field>> = vec![Vec::new(); machine_count];
    let mut loads = vec![0.0_f64; machine_count];

    for field in by_area {
        let target = least_loaded(&loads);
        loads[target] += field.area();
        assignments[target].push(field.clone());
    }

    assignments
}

/// Cumulative assigned area per machine.
pub fn machine_loads(assignments: &[Vec<Field>]) -> Vec<f64> {
    assignments
        .iter()
        .map(|fields| fields.iter().map(Field::area).sum::<f64>())
        .collect()
}

/// Index of the smallest load; the first one wins ties.
fn least_loaded(loads: &[f64]) -> usize {
    loads
        .iter()
        .enumerate()
        .fold((0, f64::INFINITY), |(best, best_load), (i, &load)| {
            if load < best_load {
                (i, load)
            } else {
                (best, best_load)
            }
        })
        .0
}
