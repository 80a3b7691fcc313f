//! File type detection

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileType {
    Pdf,
    Docx,
    Text,
    Markdown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "docx" => FileType::Docx,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Text,
        }
    }

    /// Detect from leading magic bytes; `None` when the bytes carry no signature
    pub fn from_magic(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(b"%PDF") {
            Some(FileType::Pdf)
        } else if bytes.starts_with(b"PK\x03\x04") {
            Some(FileType::Docx)
        } else {
            None
        }
    }

    /// Magic bytes win over the extension; anything unrecognised is plain text
    pub fn detect(path: &Path, bytes: &[u8]) -> Self {
        Self::from_magic(bytes).unwrap_or_else(|| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(Self::from_extension)
                .unwrap_or(FileType::Text)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magic_bytes_take_precedence() {
        assert_eq!(FileType::detect(Path::new("cv.txt"), b"%PDF-1.7 ..."), FileType::Pdf);
        assert_eq!(FileType::detect(Path::new("cv"), b"PK\x03\x04rest"), FileType::Docx);
    }

    #[test]
    fn test_extension_fallback() {
        assert_eq!(FileType::detect(Path::new("cv.MD"), b"# Jane"), FileType::Markdown);
        assert_eq!(FileType::detect(Path::new("cv.rtf"), b"Jane"), FileType::Text);
        assert_eq!(FileType::detect(Path::new("cv"), b"Jane"), FileType::Text);
    }
}
