//! Fleet planning domain models.
//!
//! Value records for a single planning run. Everything is built fresh per
//! request; nothing here holds state across calls.
//!
//! # Domain Mappings
//!
//! | u-fleet | Agriculture | Cleaning | Survey |
//! |---------|-------------|----------|--------|
//! | Field | Plot | Room | Survey block |
//! | MachineRoute | Tractor/Harvester | Floor robot | Drone |
//! | PlanResult | Work plan | Shift plan | Flight plan |

mod field;
mod plan;
mod route;

pub use field::{Field, Point};
pub use plan::{PlanRequest, PlanResult};
pub use route::{machine_color, MachineRoute, MACHINE_COLORS};
