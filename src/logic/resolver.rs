//! Rotation resolver: which player stands in a seat at a given rotation.

use crate::logic::cycle::RotationCycle;
use crate::models::{Player, Seat, SEAT_COUNT};
use serde::Serialize;

/// Maps (rotation, seat) to the player whose home seat walks into that seat.
/// Holds only the immutable cycle; roster and rotation come from the caller.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RotationResolver {
    cycle: RotationCycle,
}

impl RotationResolver {
    pub fn new(cycle: RotationCycle) -> Self {
        Self { cycle }
    }

    pub fn cycle(&self) -> &RotationCycle {
        &self.cycle
    }

    /// Home seat of whoever stands at `seat` during `rotation`.
    ///
    /// Players move one cycle position per rotation, so the occupant at rotation `r`
    /// started `r - 1` positions earlier. Any integer rotation is accepted (period 11).
    pub fn source_seat(&self, rotation: i64, seat: Seat) -> Seat {
        // Reduce before subtracting so extreme i64 rotations cannot overflow.
        let n = SEAT_COUNT as i64;
        let p = self.cycle.position_of(seat) as i64;
        let offset = (rotation.rem_euclid(n) + n - 1) % n;
        let source = (p + n - offset) % n;
        self.cycle.seat_at(source as usize)
    }

    /// Player occupying `seat` at `rotation`, or `None` if no roster entry has the
    /// matching home seat. First match wins if home seats repeat.
    pub fn resolve<'a>(&self, rotation: i64, seat: Seat, roster: &'a [Player]) -> Option<&'a Player> {
        let home = self.source_seat(rotation, seat);
        roster.iter().find(|p| p.home_seat == home)
    }

    /// One assignment per seat, in seat number order.
    pub fn lineup(&self, rotation: i64, roster: &[Player]) -> Vec<SeatAssignment> {
        Seat::ALL
            .iter()
            .map(|&seat| SeatAssignment {
                seat,
                label: seat.label(),
                player: self.resolve(rotation, seat, roster).cloned(),
            })
            .collect()
    }

    /// Lineups for every rotation 1..=11.
    pub fn rotation_chart(&self, roster: &[Player]) -> Vec<RotationLineup> {
        (1..=SEAT_COUNT as i64)
            .map(|rotation| RotationLineup {
                rotation: rotation as u8,
                seats: self.lineup(rotation, roster),
            })
            .collect()
    }
}

/// A seat and its occupant at some rotation (None renders as an empty slot).
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SeatAssignment {
    pub seat: Seat,
    pub label: &'static str,
    pub player: Option<Player>,
}

/// Full lineup for one rotation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RotationLineup {
    pub rotation: u8,
    pub seats: Vec<SeatAssignment>,
}

/// Resolve against the standard cycle.
pub fn resolve(rotation: i64, seat: Seat, roster: &[Player]) -> Option<&Player> {
    RotationResolver::default().resolve(rotation, seat, roster)
}

/// Lineup at `rotation` using the standard cycle.
pub fn lineup(rotation: i64, roster: &[Player]) -> Vec<SeatAssignment> {
    RotationResolver::default().lineup(rotation, roster)
}

/// All 11 lineups using the standard cycle.
pub fn rotation_chart(roster: &[Player]) -> Vec<RotationLineup> {
    RotationResolver::default().rotation_chart(roster)
}
