pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use config::loader::LoaderConfig;
pub use config::ServerConfig;
pub use core::loader::{mount, FetchOutcome, LoadState, PortfolioHandle, PortfolioLoader};
pub use core::provider::FileSource;
pub use domain::model::PortfolioDocument;
pub use utils::error::{FolioError, Result};
