//! Report building and formatting

pub mod formatter;
pub mod report;

pub use formatter::{ListLimits, OutputFormatter, ReportGenerator};
pub use report::{PlacementReport, ReportMetadata};
