//! The fixed rotation cycle: the path every player walks, one step per rotation.

use crate::models::{PlannerError, Seat, SEAT_COUNT};

/// Standard cycle: P2 → B5 → B4 → B3 → B2 → B1 → P1 → P6 → P5 → P4 → P3 → (P2).
///
/// Front-right (P2) leaves the court to the last bench seat; the first bench seat feeds
/// back-right (P1, the server). Not a plain 6-seat court rotation.
const STANDARD_CYCLE: [Seat; SEAT_COUNT] = [
    Seat::P2,
    Seat::B5,
    Seat::B4,
    Seat::B3,
    Seat::B2,
    Seat::B1,
    Seat::P1,
    Seat::P6,
    Seat::P5,
    Seat::P4,
    Seat::P3,
];

/// Ordered, circular sequence of all 11 seats plus a seat → position table built once.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RotationCycle {
    seats: [Seat; SEAT_COUNT],
    /// Indexed by `Seat::index()`.
    positions: [usize; SEAT_COUNT],
}

impl Default for RotationCycle {
    fn default() -> Self {
        Self::standard()
    }
}

impl RotationCycle {
    pub fn standard() -> Self {
        Self::from_permutation(STANDARD_CYCLE)
    }

    /// Build a cycle from any ordering of the 11 seats. Fails on a repeated seat.
    pub fn new(seats: [Seat; SEAT_COUNT]) -> Result<Self, PlannerError> {
        let mut seen = [false; SEAT_COUNT];
        for seat in seats {
            if std::mem::replace(&mut seen[seat.index()], true) {
                return Err(PlannerError::CycleNotPermutation(seat));
            }
        }
        Ok(Self::from_permutation(seats))
    }

    fn from_permutation(seats: [Seat; SEAT_COUNT]) -> Self {
        let mut positions = [0; SEAT_COUNT];
        for (pos, seat) in seats.iter().enumerate() {
            positions[seat.index()] = pos;
        }
        Self { seats, positions }
    }

    /// 0-based position of `seat` in the cycle.
    pub fn position_of(&self, seat: Seat) -> usize {
        self.positions[seat.index()]
    }

    /// Seat at a 0-based cycle position. Wraps around.
    pub fn seat_at(&self, position: usize) -> Seat {
        self.seats[position % SEAT_COUNT]
    }

    pub fn seats(&self) -> &[Seat; SEAT_COUNT] {
        &self.seats
    }
}
