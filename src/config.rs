//! Planner configuration.

use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::models::Point;

/// Tunable parameters for coverage, routing and timing.
///
/// Defaults reproduce the reference plan output exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlannerConfig {
    /// Machine travel speed in distance units per second.
    /// Used only for time estimation.
    pub machine_speed: f64,

    /// Field height covered by one sweep row.
    pub row_spacing: f64,

    /// Lower bound on sweep rows per field.
    pub min_sweep_rows: usize,

    /// Start position of every machine.
    pub depot: Point,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            machine_speed: 5.0,
            row_spacing: 10.0,
            min_sweep_rows: 3,
            depot: Point::ORIGIN,
        }
    }
}

impl PlannerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the machine speed (units/s).
    pub fn with_machine_speed(mut self, speed: f64) -> Self {
        self.machine_speed = speed;
        self
    }

    /// Sets the sweep row spacing.
    pub fn with_row_spacing(mut self, spacing: f64) -> Self {
        self.row_spacing = spacing;
        self
    }

    /// Sets the minimum number of sweep rows.
    pub fn with_min_sweep_rows(mut self, rows: usize) -> Self {
        self.min_sweep_rows = rows;
        self
    }

    /// Sets the depot position.
    pub fn with_depot(mut self, depot: Point) -> Self {
        self.depot = depot;
        self
    }

    /// Checks that every parameter is usable.
    pub fn validate(&self) -> Result<(), PlanError> {
        if !(self.machine_speed.is_finite() && self.machine_speed > 0.0) {
            return Err(PlanError::InvalidConfig(format!(
                "machine speed must be positive, got {}",
                self.machine_speed
            )));
        }
        if !(self.row_spacing.is_finite() && self.row_spacing > 0.0) {
            return Err(PlanError::InvalidConfig(format!(
                "row spacing must be positive, got {}",
                self.row_spacing
            )));
        }
        if self.min_sweep_rows == 0 {
            return Err(PlanError::InvalidConfig(
                "at least one sweep row is required".into(),
            ));
        }
        if !(self.depot.x.is_finite() && self.depot.y.is_finite()) {
            return Err(PlanError::InvalidConfig("depot must be finite".into()));
        }
        Ok(())
    }
}
