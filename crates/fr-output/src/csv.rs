//! CSV output backend.
//!
//! Creates `routes.csv` in the configured output directory with one row per
//! route stop.  Several rankings written to the same file continue the same
//! table; `rank` restarts at 1 for each.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use fr_route::RankedResult;

use crate::row::RouteStopRow;
use crate::writer::RouteWriter;
use crate::OutputResult;

/// Writes ranked routes to `routes.csv`.
pub struct CsvRouteWriter {
    rows:     Writer<File>,
    finished: bool,
}

impl CsvRouteWriter {
    /// Open (or create) `routes.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut rows = Writer::from_path(dir.join("routes.csv"))?;
        rows.write_record(RouteStopRow::HEADER)?;
        Ok(Self { rows, finished: false })
    }
}

impl RouteWriter for CsvRouteWriter {
    fn write_ranked(&mut self, result: &RankedResult) -> OutputResult<()> {
        for row in RouteStopRow::from_ranked(result) {
            self.rows.write_record(&row.to_record())?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
