pub mod loader;

use crate::domain::ports::ProviderConfig;
use crate::utils::error::{FolioError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "folio-server")]
#[command(about = "Serves a portfolio document over HTTP")]
pub struct ServerConfig {
    #[arg(long, env = "PORT", default_value = "4000")]
    pub port: u16,

    #[arg(long, default_value = "./data/portfolio.json")]
    pub data_path: String,

    #[arg(long, help = "Emit JSON-formatted logs")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ProviderConfig for ServerConfig {
    fn port(&self) -> u16 {
        self.port
    }

    fn document_path(&self) -> &str {
        &self.data_path
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("data_path", &self.data_path)?;

        if self.port == 0 {
            return Err(FolioError::ValidationError {
                message: "port: must be non-zero".to_string(),
            });
        }

        Ok(())
    }
}
