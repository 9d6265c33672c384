//! Per-machine route construction.
//!
//! # Algorithm
//!
//! 1. Order the machine's fields by nearest neighbor: starting from the
//!    depot, repeatedly visit the unvisited field whose centroid is closest
//!    to the current position, then move to that centroid.
//! 2. Generate each field's coverage path in visiting order.
//! 3. Concatenate. Every field after the first is preceded by one extra
//!    copy of its entry waypoint, marking the arrival transit. The entry
//!    waypoint therefore appears twice in a row at each field boundary;
//!    downstream consumers rely on that shape.
//!
//! # Complexity
//! O(n²) in the machine's field count.

use crate::config::PlannerConfig;
use crate::geometry::distance;
use crate::models::{Field, MachineRoute, Point};

use super::coverage::coverage_path;

/// Orders fields by repeated nearest-centroid selection from `start`.
///
/// Ties go to the field that comes first among the remaining ones, which
/// keeps the input order.
pub fn nearest_neighbor_order(fields: &[Field], start: Point) -> Vec<Field> {
    let mut remaining: Vec<Field> = fields.to_vec();
    let mut ordered = Vec::with_capacity(fields.len());
    let mut current = start;

    while !remaining.is_empty() {
        let next = nearest_index(&remaining, current);
        let field = remaining.remove(next);
        current = field.centroid();
        ordered.push(field);
    }

    ordered
}

fn nearest_index(fields: &[Field], from: Point) -> usize {
    let mut best_idx = 0;
    let mut best_dist = f64::INFINITY;
    for (i, field) in fields.iter().enumerate() {
        let d = distance(from, field.centroid());
        if d < best_dist {
            best_dist = d;
            best_idx = i;
        }
    }
    best_idx
}

/// Builds the full route of one machine.
///
/// With no fields the machine is idle: its path is empty but it keeps its
/// id and color.
pub fn build_route(
    machine_id: usize,
    fields: &[Field],
    color: &str,
    config: &PlannerConfig,
) -> MachineRoute {
    if fields.is_empty() {
        return MachineRoute::idle(machine_id, color);
    }

    let ordered = nearest_neighbor_order(fields, config.depot);

    let mut path: Vec<Point> = Vec::new();
    for field in &ordered {
        let sweep = coverage_path(field, config);
        if let Some(&entry) = sweep.first() {
            if !path.is_empty() {
                path.push(entry);
            }
        }
        path.extend(sweep);
    }

    log::debug!(
        "machine {machine_id}: {} field(s), {} waypoint(s)",
        ordered.len(),
        path.len()
    );

    MachineRoute {
        machine_id,
        fields: ordered,
        path,
        color: color.to_string(),
    }
}
