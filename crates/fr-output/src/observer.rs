//! `PlanOutputObserver<W>` — bridges `PlanObserver` to a `RouteWriter`.

use fr_planner::PlanObserver;
use fr_route::RankedResult;

use crate::writer::RouteWriter;
use crate::{OutputError, OutputResult};

/// A [`PlanObserver`] that writes every final ranking to a [`RouteWriter`].
///
/// Observer methods cannot fail, so the first write error is kept and
/// returned by [`take_error`][Self::take_error] or [`finish`][Self::finish].
pub struct PlanOutputObserver<W: RouteWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: RouteWriter> PlanOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer and report the first error seen.
    pub fn finish(&mut self) -> OutputResult<()> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        self.writer.finish()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: RouteWriter> PlanObserver for PlanOutputObserver<W> {
    fn on_ranked(&mut self, result: &RankedResult) {
        let result = self.writer.write_ranked(result);
        self.store_err(result);
    }
}
