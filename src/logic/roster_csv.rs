//! Roster import from CSV and rotation chart export to CSV.

use crate::logic::resolver::rotation_chart;
use crate::models::{Player, PlannerError, Seat};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use serde::Deserialize;

/// One row of a roster CSV: `seat,name,number,role`.
#[derive(Debug, Deserialize)]
struct RosterRow {
    seat: u8,
    name: String,
    #[serde(default)]
    number: Option<u8>,
    #[serde(default)]
    role: Option<String>,
}

impl From<csv::Error> for PlannerError {
    fn from(e: csv::Error) -> Self {
        PlannerError::Csv(e.to_string())
    }
}

/// Parse a roster from CSV text with header `seat,name,number,role`.
/// `number` and `role` may be left empty. Duplicate seats are not checked.
pub fn roster_from_csv(data: &str) -> Result<Vec<Player>, PlannerError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(data.as_bytes());

    let mut roster = Vec::new();
    for row in reader.deserialize::<RosterRow>() {
        let row = row?;
        let seat = Seat::from_number(row.seat)?;
        if row.name.is_empty() {
            return Err(PlannerError::EmptyName);
        }
        let mut player = Player::new(row.name, seat);
        player.number = row.number;
        if let Some(role) = row.role {
            player.role = role;
        }
        roster.push(player);
    }
    log::debug!("imported roster of {} players from CSV", roster.len());
    Ok(roster)
}

/// Export the 11-rotation chart: one row per rotation, one column per seat (player name,
/// empty when nobody resolves there).
pub fn rotation_chart_csv(roster: &[Player]) -> Result<String, PlannerError> {
    let mut wtr = WriterBuilder::new().from_writer(Vec::new());

    let mut header = vec!["rotation"];
    header.extend(Seat::ALL.iter().map(|s| s.label()));
    wtr.write_record(&header)?;

    for lineup in rotation_chart(roster) {
        let mut record = vec![lineup.rotation.to_string()];
        record.extend(
            lineup
                .seats
                .iter()
                .map(|a| a.player.as_ref().map(|p| p.name.clone()).unwrap_or_default()),
        );
        wtr.write_record(&record)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| PlannerError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| PlannerError::Csv(e.to_string()))
}
