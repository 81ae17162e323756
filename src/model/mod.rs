//! Placement classifier and probability estimation

pub mod classifier;
pub mod predictor;
