//! Fleet coverage planning.
//!
//! Turns a field list and a machine count into per-machine routes and
//! plan-level metrics.
//!
//! # Pipeline
//!
//! `assign` partitions fields across machines, `route` orders each
//! machine's fields and stitches their `coverage` paths together, and
//! `kpi` scores the resulting routes. `FleetPlanner` runs the whole chain.
//!
//! All stages are greedy, local-decision heuristics: fast, deterministic,
//! and not optimal.
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies" (LPT)
//! - Choset (2001), "Coverage for robotics – A survey of recent results"
//!   (boustrophedon coverage)

mod assign;
mod coverage;
mod fleet;
mod kpi;
mod route;

pub use assign::{assign_fields, machine_loads};
pub use coverage::{coverage_path, sweep_rows};
pub use fleet::{plan, FleetPlanner};
pub use kpi::{FleetKpi, MAX_EFFICIENCY, MIN_EFFICIENCY};
pub use route::{build_route, nearest_neighbor_order};
