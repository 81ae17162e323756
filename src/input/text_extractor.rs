//! Text extraction from various file formats

use crate::error::{PlacementError, Result};
use once_cell::sync::Lazy;
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::path::Path;
use tokio::fs;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex"));

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            PlacementError::Extraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;

        // Scanned PDFs parse fine but carry no text layer.
        if text.trim().is_empty() {
            return Err(PlacementError::Extraction(format!(
                "No extractable text in PDF '{}'",
                path.display()
            )));
        }
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Render markdown and strip it back down to plain lines.
pub fn markdown_to_text(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    let text = html_output
        .replace("<br>", "\n")
        .replace("</p>", "\n\n")
        .replace("</li>", "\n")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    let clean_text = HTML_TAG.replace_all(&text, "");

    clean_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_markdown_to_text() {
        let text = markdown_to_text("# Skills\n\n- **Python** & SQL\n- Git\n");
        assert_eq!(text, "Skills\nPython & SQL\nGit");
    }

    #[tokio::test]
    async fn test_invalid_pdf_is_extraction_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "this is not a pdf").unwrap();
        let err = PdfExtractor.extract(file.path()).await.unwrap_err();
        assert!(matches!(err, PlacementError::Extraction(_)));
    }

    #[tokio::test]
    async fn test_plain_text_missing_file_is_io_error() {
        let err = PlainTextExtractor
            .extract(Path::new("/nonexistent/resume.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, PlacementError::Io(_)));
    }
}
