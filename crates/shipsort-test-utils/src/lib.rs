//! Shared test utilities for shipsort.
//!
//! - [`SourceTree`]: a temporary directory laid out like a real run
//! - [`RecordingSink`]: a `LogSink` that keeps every message
//! - [`LockedMover`]: a `FileMover` that always fails
//! - sample log texts for each triage outcome

mod helpers;
mod sinks;

pub use helpers::*;
pub use sinks::{Level, LockedMover, RecordingSink};
