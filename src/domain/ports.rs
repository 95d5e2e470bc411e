use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only source of raw portfolio document bytes. The provider reads it
/// exactly once, before serving begins.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn read_document(&self) -> Result<Vec<u8>>;
}

pub trait ProviderConfig: Send + Sync {
    fn port(&self) -> u16;

    fn document_path(&self) -> &str;
}
