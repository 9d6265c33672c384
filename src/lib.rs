//! Coverage planning for fleets of field machines.
//!
//! Assigns rectangular fields to machines, orders each machine's visits,
//! generates back-and-forth coverage paths, and scores the plan.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Field`, `Point`, `MachineRoute`,
//!   `PlanRequest`, `PlanResult`
//! - **`planner`**: LPT field assignment, nearest-neighbor routing,
//!   boustrophedon coverage, KPIs, and the `FleetPlanner` pipeline
//! - **`validation`**: Request integrity checks (machine count, geometry, IDs)
//! - **`config`**: `PlannerConfig` (speed, sweep spacing, depot)
//! - **`geometry`**: Distance helpers
//! - **`io`**: JSON request/result documents
//! - **`synthetic`**: Seeded random field layouts
//!
//! # Example
//!
//! ```
//! use u_fleet::models::{Field, PlanRequest};
//!
//! let request = PlanRequest::new(1, vec![Field::new(0.0, 0.0, 10.0, 30.0)]);
//! let result = u_fleet::plan(&request).unwrap();
//!
//! // One field, rows = 3 → 4 sweep lines, 8 waypoints
//! assert_eq!(result.machines[0].path.len(), 8);
//! ```
//!
//! # Determinism
//!
//! Planning uses no randomness; identical requests produce identical
//! results. Only `synthetic` draws random numbers, from an explicit seed.

pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod models;
pub mod planner;
pub mod synthetic;
pub mod validation;

pub use config::PlannerConfig;
pub use error::PlanError;
pub use planner::{plan, FleetPlanner};
