pub mod loader;
pub mod provider;

pub use crate::domain::model::PortfolioDocument;
pub use crate::domain::ports::{DocumentSource, ProviderConfig};
pub use crate::utils::error::Result;
