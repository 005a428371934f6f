//! Pipeline entry points.
//!
//! - `run_calendar`: fetch the calendar page and build the reply

pub mod calendar;

pub use calendar::{build_report, run_calendar};
