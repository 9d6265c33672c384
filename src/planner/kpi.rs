//! Fleet plan quality metrics (KPIs).
//!
//! Computes timing and balance indicators from the built machine routes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Time | Longest machine route duration at the configured speed (h) |
//! | Total Distance | Sum of route lengths |
//! | Avg Distance | Total distance / number of machines |
//! | Distance Variance | Σ (route length - avg)² / number of machines |
//! | Efficiency | clamp(1 - variance / (avg² + 1) * 0.3, 0.6, 0.95) |
//!
//! Only routes with at least two waypoints contribute lengths, but both
//! averages divide by the full machine count.

use crate::config::PlannerConfig;
use crate::geometry::path_length;
use crate::models::MachineRoute;

/// Lower bound of the efficiency score.
pub const MIN_EFFICIENCY: f64 = 0.6;
/// Upper bound of the efficiency score.
pub const MAX_EFFICIENCY: f64 = 0.95;
/// Weight of the normalized distance variance in the efficiency score.
const VARIANCE_WEIGHT: f64 = 0.3;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Fleet plan performance indicators.
///
/// Distances are in field coordinate units; times are in hours.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetKpi {
    /// Longest single machine route duration (hours).
    pub total_time_hours: f64,
    /// Sum of route lengths across the fleet.
    pub total_distance: f64,
    /// Mean route length over all machines passed in.
    pub avg_distance: f64,
    /// Spread of route lengths around the mean.
    pub distance_variance: f64,
    /// Balance score in [`MIN_EFFICIENCY`, `MAX_EFFICIENCY`].
    pub efficiency: f64,
    /// Route length per machine id, for routes with two or more waypoints.
    pub distance_by_machine: Vec<(usize, f64)>,
}

impl FleetKpi {
    /// Computes KPIs from built machine routes.
    ///
    /// # Arguments
    /// * `machines` - Routes to evaluate. Idle routes count toward the
    ///   averaging denominators.
    /// * `config` - Supplies the machine speed.
    pub fn calculate(machines: &[MachineRoute], config: &PlannerConfig) -> Self {
        let distance_by_machine: Vec<(usize, f64)> = machines
            .iter()
            .filter(|m| m.path.len() >= 2)
            .map(|m| (m.machine_id, path_length(&m.path)))
            .collect();

        let total_distance: f64 = distance_by_machine.iter().map(|(_, d)| d).sum();
        let total_time_hours = distance_by_machine
            .iter()
            .map(|(_, d)| d / config.machine_speed / SECONDS_PER_HOUR)
            .fold(0.0, f64::max);

        let machine_count = machines.len() as f64;
        let (avg_distance, distance_variance) = if machines.is_empty() {
            (0.0, 0.0)
        } else {
            let avg = total_distance / machine_count;
            let spread: f64 = distance_by_machine
                .iter()
                .map(|(_, d)| (d - avg).powi(2))
                .sum();
            (avg, spread / machine_count)
        };

        let efficiency = (1.0 - distance_variance / (avg_distance.powi(2) + 1.0) * VARIANCE_WEIGHT)
            .clamp(MIN_EFFICIENCY, MAX_EFFICIENCY);

        Self {
            total_time_hours,
            total_distance,
            avg_distance,
            distance_variance,
            efficiency,
            distance_by_machine,
        }
    }

    /// Whether every derived figure is finite.
    ///
    /// Huge but finite geometry can push squared distances past `f64::MAX`.
    pub fn is_finite(&self) -> bool {
        self.total_time_hours.is_finite()
            && self.total_distance.is_finite()
            && self.avg_distance.is_finite()
            && self.distance_variance.is_finite()
            && self.efficiency.is_finite()
    }

    /// Whether the plan meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_hours: f64, min_efficiency: f64) -> bool {
        self.total_time_hours <= max_hours && self.efficiency >= min_efficiency
    }
}
