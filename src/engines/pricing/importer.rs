use std::collections::BTreeSet;
use std::io::Read;

use serde::Deserialize;

use super::domain::RoomDraft;

/// Errors surfaced while reading a host's room sheet. Import is the one
/// fallible boundary in the pricing flow; the allocator itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum RoomImportError {
    #[error("csv parse failure: {0}")]
    Csv(#[from] csv::Error),
    #[error("room number must be a positive integer (row {row})")]
    InvalidRoomNumber { row: usize },
    #[error("duplicate room number {room_number}")]
    DuplicateRoomNumber { room_number: u32 },
}

/// Reads room drafts from a CSV export with `Room Number,Name,Feature`
/// headers, enforcing positive and unique room numbers.
pub fn rooms_from_reader<R: Read>(reader: R) -> Result<Vec<RoomDraft>, RoomImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rooms = Vec::new();
    let mut seen = BTreeSet::new();

    for (index, record) in csv_reader.deserialize::<RoomRow>().enumerate() {
        let row = record?;
        if row.room_number == 0 {
            return Err(RoomImportError::InvalidRoomNumber { row: index + 1 });
        }
        if !seen.insert(row.room_number) {
            return Err(RoomImportError::DuplicateRoomNumber {
                room_number: row.room_number,
            });
        }

        rooms.push(RoomDraft {
            room_number: row.room_number,
            name: row.name,
            feature: row.feature,
        });
    }

    Ok(rooms)
}

#[derive(Debug, Deserialize)]
struct RoomRow {
    #[serde(rename = "Room Number")]
    room_number: u32,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Feature")]
    feature: String,
}
