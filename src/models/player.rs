//! Player and PlayerUpdate data structures.

use crate::models::planner::PlannerError;
use crate::models::seat::Seat;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in lookups and edits).
pub type PlayerId = Uuid;

/// A player on the roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Jersey number, if one has been entered.
    pub number: Option<u8>,
    /// Free-form role tag (e.g. "S", "OH", "L").
    pub role: String,
    /// Seat this player occupies at rotation 1. Not editable after creation.
    pub home_seat: Seat,
}

impl Player {
    /// Create a new player with the given name and home seat. No number, empty role.
    pub fn new(name: impl Into<String>, home_seat: Seat) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            number: None,
            role: String::new(),
            home_seat,
        }
    }

    pub fn with_number(mut self, number: u8) -> Self {
        self.number = Some(number);
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Apply a display-attribute edit. The home seat is left untouched.
    pub fn apply_update(&mut self, update: &PlayerUpdate) -> Result<(), PlannerError> {
        if let Some(name) = &update.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(PlannerError::EmptyName);
            }
            self.name = name.to_string();
        }
        if let Some(number) = update.number {
            self.number = number;
        }
        if let Some(role) = &update.role {
            self.role = role.trim().to_string();
        }
        Ok(())
    }
}

/// Partial edit of a player's display attributes. Absent fields are left as-is.
/// `number: Some(None)` clears the jersey number.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, with = "double_option")]
    pub number: Option<Option<u8>>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Distinguishes a missing field (`None`) from an explicit `null` (`Some(None)`).
mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &Option<Option<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Option<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<u8>::deserialize(deserializer).map(Some)
    }
}

/// The default 11-player roster: "A".."K", one per seat.
pub fn default_roster() -> Vec<Player> {
    const HOME_SEATS: [(&str, u8); 11] = [
        ("A", 4),
        ("B", 3),
        ("C", 2),
        ("D", 1),
        ("E", 6),
        ("F", 5),
        ("G", 7),
        ("H", 8),
        ("I", 9),
        ("J", 10),
        ("K", 11),
    ];
    HOME_SEATS
        .iter()
        .zip(1u8..)
        .map(|(&(name, seat), number)| {
            Player::new(name, Seat::ALL[usize::from(seat - 1)]).with_number(number)
        })
        .collect()
}
