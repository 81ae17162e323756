//! Placement readiness library

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{PlacementError, Result};
