//! Text decoding from various file formats

use crate::error::{Result, SkillLensError};
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::io::{Cursor, Read};
use std::sync::LazyLock;

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));

static CLEANING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s.,\-+#@()/]").expect("Invalid cleaning regex"));

static DOCX_TABLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<w:tbl(?:\s[^>]*)?>.*?</w:tbl>").expect("Invalid table regex")
});

static DOCX_CELL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<w:tc(?:\s[^>]*)?>(.*?)</w:tc>").expect("Invalid cell regex")
});

// `<w:p/>` is an empty paragraph and must not open a match
static DOCX_PARAGRAPH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<w:p(?:\s[^>]*[^/])?>(.*?)</w:p>").expect("Invalid paragraph regex")
});

static DOCX_RUN_TEXT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|<w:tab/>").expect("Invalid run text regex")
});

pub trait TextExtractor {
    fn decode(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn decode(&self, bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            SkillLensError::PdfExtraction(format!("Failed to extract text from PDF: {}", e))
        })
    }
}

/// UTF-8 first, Latin-1 otherwise
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn decode(&self, bytes: &[u8]) -> Result<String> {
        match std::str::from_utf8(bytes) {
            Ok(text) => Ok(text.to_string()),
            // every byte is a valid Latin-1 code point
            Err(_) => Ok(bytes.iter().map(|&b| b as char).collect()),
        }
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn decode(&self, bytes: &[u8]) -> Result<String> {
        let markdown_content = PlainTextExtractor.decode(bytes)?;

        let parser = Parser::new(&markdown_content);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        Ok(self.html_to_text(&html_output))
    }
}

impl MarkdownExtractor {
    fn html_to_text(&self, html: &str) -> String {
        let text = html
            .replace("<br>", "\n")
            .replace("</p>", "\n\n")
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        let clean_text = TAG_REGEX.replace_all(&text, "\n");

        let lines: Vec<&str> = clean_text
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect();

        lines.join("\n")
    }
}

/// Reads `word/document.xml` out of the DOCX archive.
///
/// Body paragraphs come first, then the text of every table cell, one per line.
/// Empty paragraphs and cells are skipped.
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn decode(&self, bytes: &[u8]) -> Result<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| SkillLensError::DocxExtraction(format!("Not a DOCX archive: {}", e)))?;

        let mut document = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| SkillLensError::DocxExtraction(format!("Missing document body: {}", e)))?
            .read_to_string(&mut document)?;

        Ok(self.document_to_text(&document))
    }
}

impl DocxExtractor {
    fn document_to_text(&self, document: &str) -> String {
        let body = DOCX_TABLE_REGEX.replace_all(document, "");

        let mut parts: Vec<String> = Self::paragraphs(&body)
            .into_iter()
            .filter(|p| !p.trim().is_empty())
            .collect();

        for table in DOCX_TABLE_REGEX.find_iter(document) {
            for cell in DOCX_CELL_REGEX.captures_iter(table.as_str()) {
                let cell_text = Self::paragraphs(&cell[1]).join("\n");
                if !cell_text.trim().is_empty() {
                    parts.push(cell_text);
                }
            }
        }

        parts.join("\n")
    }

    fn paragraphs(xml: &str) -> Vec<String> {
        DOCX_PARAGRAPH_REGEX
            .captures_iter(xml)
            .map(|paragraph| {
                DOCX_RUN_TEXT_REGEX
                    .captures_iter(&paragraph[1])
                    .map(|run| match run.get(1) {
                        Some(text) => unescape_xml(text.as_str()),
                        None => "\t".to_string(),
                    })
                    .collect::<String>()
            })
            .collect()
    }
}

fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Normalize decoded text before skill extraction.
///
/// Characters outside word characters, whitespace and `. , - + # @ ( ) /`
/// become spaces, then whitespace runs collapse to one space.
pub fn clean_text(text: &str) -> String {
    let replaced = CLEANING_REGEX.replace_all(text, " ");
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_latin1_fallback() {
        let bytes = b"Jos\xe9 - Python";
        let text = PlainTextExtractor.decode(bytes).unwrap();
        assert_eq!(text, "José - Python");
    }

    #[test]
    fn test_markdown_is_stripped() {
        let md = b"# Jane Doe\n\n## Skills\n\n- **React** and *Node.js*\n- [Docker](https://docker.com)\n";
        let text = MarkdownExtractor.decode(md).unwrap();
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("React"));
        assert!(text.contains("Node.js"));
        assert!(!text.contains("**"));
        assert!(!text.contains("##"));
        assert!(!text.contains("<li>"));
    }

    #[test]
    fn test_clean_text_keeps_skill_punctuation() {
        let cleaned = clean_text("Skills:\n\n  C++ | C# | .NET | CI/CD * Node.js\t(5 yrs)");
        assert_eq!(cleaned, "Skills C++ C# .NET CI/CD Node.js (5 yrs)");
    }

    fn docx_bytes(document_xml: &str) -> Vec<u8> {
        use std::io::Write;

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", zip::write::FileOptions::default())
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_docx_paragraphs_then_table_cells() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>
<w:p w:rsidR="00A1"><w:pPr><w:pStyle w:val="Title"/></w:pPr><w:r><w:t>Jane Doe</w:t></w:r></w:p>
<w:p/>
<w:tbl><w:tblPr><w:tblW w:w="0" w:type="auto"/></w:tblPr>
<w:tr><w:tc><w:tcPr><w:tcW w:w="2000"/></w:tcPr><w:p><w:r><w:t>Rust</w:t></w:r></w:p></w:tc>
<w:tc><w:p><w:r><w:t xml:space="preserve">C++ </w:t></w:r><w:r><w:t>&amp; Go</w:t></w:r></w:p></w:tc>
<w:tc><w:p></w:p></w:tc></w:tr>
</w:tbl>
<w:p><w:r><w:t>Led a team</w:t></w:r><w:r><w:tab/><w:t>2020</w:t></w:r></w:p>
</w:body></w:document>"#;

        let text = DocxExtractor.decode(&docx_bytes(xml)).unwrap();
        assert_eq!(text, "Jane Doe\nLed a team\t2020\nRust\nC++ & Go");
    }

    #[test]
    fn test_docx_rejects_non_archive() {
        let result = DocxExtractor.decode(b"PK\x03\x04 truncated");
        assert!(matches!(result, Err(SkillLensError::DocxExtraction(_))));
    }
}
