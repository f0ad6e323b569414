//! Shared terminal utilities.
//!
//! Box drawing and the strength report.

mod output;
mod report;

pub use output::*;
pub use report::*;
