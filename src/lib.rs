//! Volleyball rotation planner: library with models and rotation logic.

pub mod logic;
pub mod models;

pub use logic::{
    lineup, next_rotation, normalize_rotation, previous_rotation, resolve, roster_from_csv,
    rotation_chart, rotation_chart_csv, RotationCycle, RotationLineup, RotationResolver,
    SeatAssignment, ROTATION_COUNT,
};
pub use models::{
    default_roster, Planner, PlannerError, PlannerId, Player, PlayerId, PlayerUpdate, Seat,
    SeatKind, SEAT_COUNT,
};
