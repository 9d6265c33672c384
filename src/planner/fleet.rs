//! Fleet planner: partition → route → metrics.
//!
//! # Algorithm
//!
//! 1. Validate the request.
//! 2. With no fields, return the empty result immediately.
//! 3. Partition fields across machines (LPT load balancing).
//! 4. Build a route per machine; machine `i` gets id `i + 1` and palette
//!    color `i % 8`.
//! 5. Drop machines that received no field.
//! 6. Compute KPIs over the remaining machines.
//!
//! The planner is deterministic: identical requests give identical results.

use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::models::{machine_color, MachineRoute, PlanRequest, PlanResult};
use crate::validation::validate_request;

use super::assign::assign_fields;
use super::kpi::FleetKpi;
use super::route::build_route;

/// Coverage planner for a fleet of machines.
///
/// # Example
///
/// ```
/// use u_fleet::models::{Field, PlanRequest};
/// use u_fleet::planner::FleetPlanner;
///
/// let request = PlanRequest::new(2, vec![
///     Field::new(0.0, 0.0, 10.0, 30.0),
///     Field::new(100.0, 0.0, 20.0, 40.0),
/// ]);
///
/// let planner = FleetPlanner::new();
/// let result = planner.plan(&request).unwrap();
/// assert_eq!(result.machines.len(), 2);
/// assert!(result.efficiency >= 0.6 && result.efficiency <= 0.95);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FleetPlanner {
    config: PlannerConfig,
}

impl FleetPlanner {
    /// Creates a planner with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans routes for a request.
    pub fn plan(&self, request: &PlanRequest) -> Result<PlanResult, PlanError> {
        self.plan_with_kpi(request).map(|(result, _)| result)
    }

    /// Plans routes and also returns the full KPI breakdown.
    ///
    /// With no fields the KPI is `None` and the result is
    /// [`PlanResult::empty`].
    pub fn plan_with_kpi(
        &self,
        request: &PlanRequest,
    ) -> Result<(PlanResult, Option<FleetKpi>), PlanError> {
        self.config.validate()?;
        validate_request(request).map_err(PlanError::InvalidRequest)?;

        if request.fields.is_empty() {
            log::info!("no fields to plan; returning empty schedule");
            return Ok((PlanResult::empty(), None));
        }

        let assignments = assign_fields(&request.fields, request.machine_count);

        let machines: Vec<MachineRoute> = assignments
            .iter()
            .enumerate()
            .filter(|(_, fields)| !fields.is_empty())
            .map(|(i, fields)| build_route(i + 1, fields, machine_color(i), &self.config))
            .collect();

        let kpi = FleetKpi::calculate(&machines, &self.config);
        if !kpi.is_finite() {
            return Err(PlanError::MetricOverflow(format!(
                "average distance {}, variance {}, efficiency {}",
                kpi.avg_distance, kpi.distance_variance, kpi.efficiency
            )));
        }

        log::info!(
            "planned {} field(s) on {}/{} machine(s): total time {:.4} h, efficiency {:.3}",
            request.fields.len(),
            machines.len(),
            request.machine_count,
            kpi.total_time_hours,
            kpi.efficiency
        );

        let result = PlanResult {
            machines,
            total_time: kpi.total_time_hours,
            efficiency: kpi.efficiency,
            error: None,
        };
        Ok((result, Some(kpi)))
    }
}

/// Plans a request with the default configuration.
pub fn plan(request: &PlanRequest) -> Result<PlanResult, PlanError> {
    FleetPlanner::new().plan(request)
}
