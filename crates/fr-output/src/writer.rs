//! The `RouteWriter` trait implemented by all backend writers.

use fr_route::RankedResult;

use crate::OutputResult;

/// Trait implemented by the JSON and CSV writers.
pub trait RouteWriter {
    /// Write one planning request's ranked routes.
    fn write_ranked(&mut self, result: &RankedResult) -> OutputResult<()>;

    /// Flush the underlying file.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
