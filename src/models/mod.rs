//! Data structures for the rotation planner: seats, players, planner session.

mod planner;
mod player;
mod seat;

pub use planner::{Planner, PlannerError, PlannerId};
pub use player::{default_roster, Player, PlayerId, PlayerUpdate};
pub use seat::{Seat, SeatKind, SEAT_COUNT};
