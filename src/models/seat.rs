//! Seat: the 11 fixed slots a player can stand in (6 on court, 5 on the bench).

use crate::models::planner::PlannerError;
use serde::{Deserialize, Serialize};

/// Number of seats (and therefore players and rotations).
pub const SEAT_COUNT: usize = 11;

/// Whether a seat is on the court or on the bench.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatKind {
    Court,
    Bench,
}

/// One of the 11 seats. Court seats are numbered 1..=6, bench seats 7..=11.
/// Serialized as its number.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Seat {
    P1,
    P2,
    P3,
    P4,
    P5,
    P6,
    B1,
    B2,
    B3,
    B4,
    B5,
}

impl Seat {
    /// All seats in number order.
    pub const ALL: [Seat; SEAT_COUNT] = [
        Seat::P1,
        Seat::P2,
        Seat::P3,
        Seat::P4,
        Seat::P5,
        Seat::P6,
        Seat::B1,
        Seat::B2,
        Seat::B3,
        Seat::B4,
        Seat::B5,
    ];

    /// 0-based index (number - 1), used for table lookups.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Seat number, 1..=11.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_number(n: u8) -> Result<Seat, PlannerError> {
        match n {
            1..=11 => Ok(Seat::ALL[usize::from(n - 1)]),
            _ => Err(PlannerError::InvalidSeat(n)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Seat::P1 => "P1",
            Seat::P2 => "P2",
            Seat::P3 => "P3",
            Seat::P4 => "P4",
            Seat::P5 => "P5",
            Seat::P6 => "P6",
            Seat::B1 => "B1",
            Seat::B2 => "B2",
            Seat::B3 => "B3",
            Seat::B4 => "B4",
            Seat::B5 => "B5",
        }
    }

    pub fn kind(self) -> SeatKind {
        if self.number() <= 6 {
            SeatKind::Court
        } else {
            SeatKind::Bench
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for Seat {
    type Error = PlannerError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Seat::from_number(n)
    }
}

impl From<Seat> for u8 {
    fn from(seat: Seat) -> u8 {
        seat.number()
    }
}
