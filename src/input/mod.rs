//! Input processing module
//! Handles file detection, text extraction, and input management

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use file_detector::DocumentKind;
pub use manager::{InputManager, TextSource};
