//! Input manager turning resume files into cleaned plain text

use crate::config::InputConfig;
use crate::error::{Result, SkillLensError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    clean_text, DocxExtractor, MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
    min_text_length: usize,
    max_file_size: u64,
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
            min_text_length: 20,
            max_file_size: 5 * 1024 * 1024,
        }
    }

    pub fn from_config(config: &InputConfig) -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: config.enable_cache,
            min_text_length: config.min_text_length,
            max_file_size: config.max_file_size_bytes,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(SkillLensError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let size = fs::metadata(path).await?.len();
        if size > self.max_file_size {
            return Err(SkillLensError::InvalidInput(format!(
                "File too large: {} ({} bytes, limit {})",
                path.display(),
                size,
                self.max_file_size
            )));
        }

        let bytes = fs::read(path).await?;
        let file_type = FileType::detect(path, &bytes);
        info!("Reading {:?} file: {}", file_type, path.display());

        let text = self.decode_bytes(&bytes, file_type)?;

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    /// Decode raw bytes of a known type into cleaned text.
    ///
    /// Decoder failures and near-empty output fall back to a lossy UTF-8
    /// read of the raw bytes.
    pub fn decode_bytes(&self, bytes: &[u8], file_type: FileType) -> Result<String> {
        if bytes.is_empty() {
            return Err(SkillLensError::InvalidInput("Empty file".to_string()));
        }

        let decoded = match file_type {
            FileType::Pdf => PdfExtractor.decode(bytes),
            FileType::Text => PlainTextExtractor.decode(bytes),
            FileType::Markdown => MarkdownExtractor.decode(bytes),
            FileType::Docx => DocxExtractor.decode(bytes),
        };

        let text = match decoded {
            Ok(raw) => clean_text(&raw),
            Err(e) => {
                warn!("Decoding as {:?} failed: {}", file_type, e);
                String::new()
            }
        };

        if text.trim().chars().count() >= self.min_text_length {
            return Ok(text);
        }

        warn!(
            "Decoded text shorter than {} characters, falling back to raw UTF-8",
            self.min_text_length
        );
        Ok(clean_text(&String::from_utf8_lossy(bytes)))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
