//! Planning request and result documents.

use serde::{Deserialize, Serialize};

use super::{Field, MachineRoute};

/// Input to the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// Number of machines in the fleet. Must be positive.
    pub machine_count: usize,
    /// Fields to cover.
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl PlanRequest {
    /// Creates a new request.
    pub fn new(machine_count: usize, fields: Vec<Field>) -> Self {
        Self {
            machine_count,
            fields,
        }
    }

    /// Adds a field.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

/// Output of the planner.
///
/// `machines` only lists machines with at least one assigned field.
/// `error` is set only on the fallback document written when planning fails.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResult {
    /// Working machines, in machine index order.
    pub machines: Vec<MachineRoute>,
    /// Longest machine route duration (hours).
    pub total_time: f64,
    /// Distance-balance score in [0.6, 0.95], or 0 with no fields.
    pub efficiency: f64,
    /// Failure message for the fallback document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PlanResult {
    /// The result for a request with no fields.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The fallback document reporting a failure.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Total waypoint count across all machines.
    pub fn waypoint_count(&self) -> usize {
        self.machines.iter().map(|m| m.path.len()).sum()
    }

    /// Looks up a machine by its 1-based id.
    pub fn machine(&self, machine_id: usize) -> Option<&MachineRoute> {
        self.machines.iter().find(|m| m.machine_id == machine_id)
    }
}
