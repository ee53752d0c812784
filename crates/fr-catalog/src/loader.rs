//! Event record loaders.
//!
//! # CSV format
//!
//! One row per event, header required.  `description` may be left empty.
//!
//! ```csv
//! id,name,type,location,date,start_time,duration,description
//! 1,Opening concert,concert,Main stage,2025-07-12,18:30,90,
//! 2,Pottery workshop,workshop,Tent B,2025-07-12,10:00,60,Bring an apron
//! ```
//!
//! # JSON format
//!
//! An array of objects in the CRUD API shape (see `fr_core::EventRecord`).
//!
//! Loaders only check the *shape* of the input.  Field-level validation
//! (times, dates, durations) happens in `EventCatalog::from_records`, where
//! the caller picks an `InvalidEventPolicy`.

use std::io::Read;
use std::path::Path;

use fr_core::EventRecord;

use crate::{CatalogError, CatalogResult};

/// Load event records from a CSV file.
pub fn load_records_csv(path: &Path) -> CatalogResult<Vec<EventRecord>> {
    let file = std::fs::File::open(path).map_err(CatalogError::Io)?;
    load_records_reader(file)
}

/// Like [`load_records_csv`] but accepts any `Read` source.
pub fn load_records_reader<R: Read>(reader: R) -> CatalogResult<Vec<EventRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<EventRecord>()
        .map(|row| row.map_err(|e| CatalogError::Parse(e.to_string())))
        .collect()
}

/// Load event records from a JSON array.
pub fn load_records_json<R: Read>(reader: R) -> CatalogResult<Vec<EventRecord>> {
    serde_json::from_reader(reader).map_err(|e| CatalogError::Parse(e.to_string()))
}
