//! Rotation logic: the fixed cycle, the resolver, index stepping, CSV in/out.

mod advance;
mod cycle;
mod resolver;
mod roster_csv;

pub use advance::{next_rotation, normalize_rotation, previous_rotation, ROTATION_COUNT};
pub use cycle::RotationCycle;
pub use resolver::{lineup, resolve, rotation_chart, RotationLineup, RotationResolver, SeatAssignment};
pub use roster_csv::{roster_from_csv, rotation_chart_csv};
