//! Machine route model.

use serde::{Deserialize, Serialize};

use super::{Field, Point};

/// Display colors, assigned round-robin by machine index.
pub const MACHINE_COLORS: [&str; 8] = [
    "#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6", "#ec4899", "#06b6d4", "#84cc16",
];

/// Palette color for a zero-based machine index.
#[inline]
pub fn machine_color(index: usize) -> &'static str {
    MACHINE_COLORS[index % MACHINE_COLORS.len()]
}

/// A machine together with its visiting order and full route.
///
/// `fields` holds the assigned fields in visiting order; it is kept for
/// in-process consumers and is not part of the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineRoute {
    /// 1-based machine identifier.
    pub machine_id: usize,
    /// Assigned fields in visiting order.
    #[serde(skip)]
    pub fields: Vec<Field>,
    /// Full route across all fields.
    pub path: Vec<Point>,
    /// Display color.
    pub color: String,
}

impl MachineRoute {
    /// Creates an idle machine (no fields, empty path).
    pub fn idle(machine_id: usize, color: impl Into<String>) -> Self {
        Self {
            machine_id,
            fields: Vec::new(),
            path: Vec::new(),
            color: color.into(),
        }
    }

    /// Whether this machine has nothing to do.
    pub fn is_idle(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of waypoints in the route.
    pub fn waypoint_count(&self) -> usize {
        self.path.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_color_wraps() {
        assert_eq!(machine_color(0), "#3b82f6");
        assert_eq!(machine_color(7), "#84cc16");
        assert_eq!(machine_color(8), "#3b82f6");
        assert_eq!(machine_color(17), "#ef4444");
    }

    #[test]
    fn test_idle_route() {
        let m = MachineRoute::idle(3, machine_color(2));
        assert!(m.is_idle());
        assert_eq!(m.waypoint_count(), 0);
        assert_eq!(m.color, "#10b981");
    }

    #[test]
    fn test_route_wire_format() {
        let m = MachineRoute {
            machine_id: 1,
            fields: vec![Field::new(0.0, 0.0, 1.0, 1.0)],
            path: vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
            color: "#3b82f6".into(),
        };
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["machineId"], 1);
        assert_eq!(v["path"][1]["x"], 1.0);
        assert!(v.get("fields").is_none());
    }
}
