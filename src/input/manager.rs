//! Input manager for resume and job description sources

use crate::error::{PlacementError, Result};
use crate::input::file_detector::{DocumentKind, FileType};
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Where a document's text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    File(PathBuf),
    Inline(String),
}

impl TextSource {
    /// Pick a file over pasted text when both are given.
    pub fn from_options(path: Option<PathBuf>, text: Option<String>) -> Option<Self> {
        path.map(TextSource::File).or_else(|| text.map(TextSource::Inline))
    }
}

pub struct InputManager {
    cache: HashMap<PathBuf, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn read(&mut self, source: &TextSource, kind: DocumentKind) -> Result<String> {
        match source {
            TextSource::Inline(text) => Ok(text.clone()),
            TextSource::File(path) => self.extract_text(path, kind).await,
        }
    }

    pub async fn extract_text(&mut self, path: &Path, kind: DocumentKind) -> Result<String> {
        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(path) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(PlacementError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = FileType::from_path(path);
        if !kind.accepts(file_type) {
            return Err(PlacementError::UnsupportedFormat(format!(
                "Unsupported {} format: {}",
                kind.label(),
                path.display()
            )));
        }

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(PlacementError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path.to_path_buf(), text.clone());
        }

        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
