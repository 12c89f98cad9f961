//! CSV demand-set loader and writer.
//!
//! # CSV format
//!
//! One row per passenger, in registration order.  The `direction` column is
//! optional; when present it must agree with the floors.
//!
//! ```csv
//! origin,destination,direction
//! 1,5,up
//! 5,1,down
//! 3,4,up
//! ```
//!
//! Row `i` (0-based, header excluded) becomes `PassengerId(i)`.  Every row is
//! checked against the target `Building` so a bad file fails at load time
//! rather than part-way through a run.

use std::io::{Read, Write};
use std::path::Path;

use serde::Deserialize;

use lift_core::{Building, Direction, Floor, LiftError, Passenger, PassengerId};

use crate::{DemandError, DemandResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct DemandRecord {
    origin:      u32,
    destination: u32,
    #[serde(default)]
    direction:   Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a demand set for `building` from a CSV file.
pub fn load_demand_csv(path: &Path, building: &Building) -> DemandResult<Vec<Passenger>> {
    let file = std::fs::File::open(path)?;
    load_demand_reader(file, building)
}

/// Like [`load_demand_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for demand sets embedded
/// in a binary.
pub fn load_demand_reader<R: Read>(reader: R, building: &Building) -> DemandResult<Vec<Passenger>> {
    building.validate()?;

    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut passengers = Vec::new();

    for (row, result) in csv_reader.deserialize::<DemandRecord>().enumerate() {
        let record = result.map_err(|e| DemandError::Parse(format!("row {row}: {e}")))?;
        let id = PassengerId::try_from(row)
            .map_err(|_| LiftError::Config(format!("row {row} overflows u32 passenger ids")))?;
        let passenger = Passenger::new(id, Floor(record.origin), Floor(record.destination));
        building.check_passenger(&passenger)?;

        if let Some(dir) = record.direction.as_deref().filter(|d| !d.is_empty()) {
            let declared: Direction = dir
                .parse()
                .map_err(|e: String| DemandError::Parse(format!("row {row}: {e}")))?;
            if declared != passenger.direction() {
                return Err(DemandError::Parse(format!(
                    "row {row}: direction {declared} contradicts floors {} -> {}",
                    passenger.origin, passenger.destination
                )));
            }
        }

        passengers.push(passenger);
    }

    Ok(passengers)
}

/// Save a demand set as CSV (with the derived `direction` column).
pub fn write_demand_csv(path: &Path, passengers: &[Passenger]) -> DemandResult<()> {
    let file = std::fs::File::create(path)?;
    write_demand_writer(file, passengers)
}

/// Like [`write_demand_csv`] but accepts any `Write` sink.
pub fn write_demand_writer<W: Write>(writer: W, passengers: &[Passenger]) -> DemandResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["origin", "destination", "direction"])?;
    for p in passengers {
        csv_writer.write_record(&[
            p.origin.0.to_string(),
            p.destination.0.to_string(),
            p.direction().to_string(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}
