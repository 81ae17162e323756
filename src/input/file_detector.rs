//! File type detection

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FileType::Unknown)
    }
}

/// What a document is used for; resumes may be PDFs, job descriptions may not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Resume,
    JobDescription,
}

impl DocumentKind {
    pub fn accepts(&self, file_type: FileType) -> bool {
        match (self, file_type) {
            (_, FileType::Unknown) => false,
            (DocumentKind::Resume, _) => true,
            (DocumentKind::JobDescription, FileType::Pdf) => false,
            (DocumentKind::JobDescription, _) => true,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::JobDescription => "job description",
        }
    }
}
