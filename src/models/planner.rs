//! Planner (one planning session: roster + current rotation) and PlannerError.

use crate::logic::{self, SeatAssignment, ROTATION_COUNT};
use crate::models::player::{default_roster, Player, PlayerId, PlayerUpdate};
use crate::models::seat::Seat;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during planner operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PlannerError {
    /// Seat number outside 1..=11.
    InvalidSeat(u8),
    /// Rotation index outside 1..=11 where a canonical index is required.
    InvalidRotation(i64),
    /// No player with this id on the roster.
    PlayerNotFound(PlayerId),
    /// Player name is empty after trimming.
    EmptyName,
    /// A rotation cycle listed this seat more than once.
    CycleNotPermutation(Seat),
    /// Malformed roster CSV (or CSV writer failure).
    Csv(String),
}

impl std::fmt::Display for PlannerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlannerError::InvalidSeat(n) => write!(f, "Seat must be between 1 and 11 (got {})", n),
            PlannerError::InvalidRotation(r) => {
                write!(f, "Rotation must be between 1 and {} (got {})", ROTATION_COUNT, r)
            }
            PlannerError::PlayerNotFound(_) => write!(f, "Player not found"),
            PlannerError::EmptyName => write!(f, "Player name cannot be empty"),
            PlannerError::CycleNotPermutation(seat) => {
                write!(f, "Rotation cycle lists seat {} more than once", seat)
            }
            PlannerError::Csv(msg) => write!(f, "Invalid roster CSV: {}", msg),
        }
    }
}

impl std::error::Error for PlannerError {}

/// Unique identifier for a planner session.
pub type PlannerId = Uuid;

/// One planning session: the roster and the rotation currently shown.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Planner {
    pub id: PlannerId,
    pub roster: Vec<Player>,
    /// Current rotation index, always in 1..=11.
    pub rotation: u8,
    pub created_at: DateTime<Utc>,
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}

impl Planner {
    /// Create a planner with the default roster at rotation 1.
    pub fn new() -> Self {
        Self::with_roster(default_roster())
    }

    /// Create a planner with the given roster at rotation 1. Home seats are not validated.
    pub fn with_roster(roster: Vec<Player>) -> Self {
        Self {
            id: Uuid::new_v4(),
            roster,
            rotation: 1,
            created_at: Utc::now(),
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.roster.iter().find(|p| p.id == id)
    }

    /// Mutable reference to a player by id.
    pub fn get_player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.roster.iter_mut().find(|p| p.id == id)
    }

    /// Edit a player's name / number / role. Home seat is never changed.
    pub fn update_player(&mut self, player_id: PlayerId, update: &PlayerUpdate) -> Result<(), PlannerError> {
        let planner_id = self.id;
        let p = self
            .get_player_mut(player_id)
            .ok_or(PlannerError::PlayerNotFound(player_id))?;
        p.apply_update(update)?;
        log::debug!("planner {}: updated player {} ({})", planner_id, player_id, p.name);
        Ok(())
    }

    /// Advance to the next rotation (11 wraps to 1).
    pub fn next_rotation(&mut self) -> u8 {
        self.rotation = logic::next_rotation(self.rotation);
        log::debug!("planner {}: rotation -> {}", self.id, self.rotation);
        self.rotation
    }

    /// Step back to the previous rotation (1 wraps to 11).
    pub fn previous_rotation(&mut self) -> u8 {
        self.rotation = logic::previous_rotation(self.rotation);
        log::debug!("planner {}: rotation -> {}", self.id, self.rotation);
        self.rotation
    }

    /// Jump straight to a rotation. Only canonical indices (1..=11) are accepted.
    pub fn set_rotation(&mut self, rotation: i64) -> Result<(), PlannerError> {
        if !(1..=i64::from(ROTATION_COUNT)).contains(&rotation) {
            return Err(PlannerError::InvalidRotation(rotation));
        }
        self.rotation = rotation as u8;
        log::debug!("planner {}: rotation set to {}", self.id, self.rotation);
        Ok(())
    }

    /// Who stands where at the current rotation.
    pub fn current_lineup(&self) -> Vec<SeatAssignment> {
        logic::lineup(i64::from(self.rotation), &self.roster)
    }
}
