//! JSON output backend.
//!
//! Creates `routes.json` in the configured output directory.  Each ranking
//! is written as one compact JSON array of routes followed by a newline, so
//! a file holding several requests reads as JSON Lines.  The array has the
//! same shape as `RankedResult`'s serde representation.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use fr_route::RankedResult;

use crate::writer::RouteWriter;
use crate::OutputResult;

/// Writes ranked routes to `routes.json`.
pub struct JsonRouteWriter {
    out:      BufWriter<File>,
    finished: bool,
}

impl JsonRouteWriter {
    /// Open (or create) `routes.json` in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let out = BufWriter::new(File::create(dir.join("routes.json"))?);
        Ok(Self { out, finished: false })
    }
}

impl RouteWriter for JsonRouteWriter {
    fn write_ranked(&mut self, result: &RankedResult) -> OutputResult<()> {
        serde_json::to_writer(&mut self.out, result)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
