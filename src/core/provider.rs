use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::model::PortfolioDocument;
use crate::domain::ports::DocumentSource;
use crate::utils::error::Result;

/// Reads the portfolio document from a file on local disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    async fn read_document(&self) -> Result<Vec<u8>> {
        let data = std::fs::read(&self.path)?;
        Ok(data)
    }
}

/// Load the document once at startup. Never fails: a missing or unparsable
/// document is logged and replaced by the degraded fallback stub, and the
/// provider keeps serving.
pub async fn load_document<S: DocumentSource>(source: &S) -> PortfolioDocument {
    let parsed = match source.read_document().await {
        Ok(bytes) => {
            info!("Read portfolio document ({} bytes)", bytes.len());
            PortfolioDocument::from_slice(&bytes)
        }
        Err(e) => Err(e),
    };

    match parsed {
        Ok(document) => document,
        Err(e) => {
            error!("Error loading portfolio data: {}", e);
            PortfolioDocument::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FolioError;

    struct MockSource {
        payload: Option<Vec<u8>>,
    }

    impl MockSource {
        fn with_bytes(bytes: &[u8]) -> Self {
            Self {
                payload: Some(bytes.to_vec()),
            }
        }

        fn missing() -> Self {
            Self { payload: None }
        }
    }

    #[async_trait]
    impl DocumentSource for MockSource {
        async fn read_document(&self) -> Result<Vec<u8>> {
            self.payload.clone().ok_or_else(|| {
                FolioError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "document file not found",
                ))
            })
        }
    }

    #[tokio::test]
    async fn test_load_document_from_valid_json() {
        let raw = br#"{"personal": {"name": "Sam"}, "projects": [{"name": "one"}]}"#;
        let source = MockSource::with_bytes(raw);

        let document = load_document(&source).await;

        assert_eq!(document.personal_field("name"), Some("Sam"));
        assert_eq!(document.section_len("projects"), 1);
    }

    #[tokio::test]
    async fn test_load_document_missing_file_falls_back() {
        let source = MockSource::missing();

        let document = load_document(&source).await;

        assert_eq!(document, PortfolioDocument::fallback());
    }

    #[tokio::test]
    async fn test_load_document_malformed_json_falls_back() {
        let source = MockSource::with_bytes(b"{not valid json");

        let document = load_document(&source).await;

        assert_eq!(document, PortfolioDocument::fallback());
    }

    #[tokio::test]
    async fn test_file_source_reads_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("portfolio.json");
        std::fs::write(&path, br#"{"personal": {"name": "Disk"}}"#).unwrap();

        let document = load_document(&FileSource::new(&path)).await;

        assert_eq!(document.personal_field("name"), Some("Disk"));
    }
}
