use anyhow::Context;
use clap::Parser;
use folio::utils::{logger, validation::Validate};
use folio::{mount, LoaderConfig, PortfolioLoader};

#[derive(Debug, Parser)]
#[command(name = "view_portfolio")]
#[command(about = "Fetches a portfolio document and prints a summary")]
struct ViewArgs {
    /// Base URL of the portfolio provider. Empty means the default local origin.
    #[arg(long, default_value = "")]
    api_url: String,

    /// Optional TOML file with loader settings (api_url, timeout_seconds).
    #[arg(long)]
    config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ViewArgs::parse();

    logger::init_cli_logger(args.verbose);

    let mut config = match &args.config {
        Some(path) => LoaderConfig::from_file(path)
            .with_context(|| format!("Failed to load loader config from {}", path))?,
        None => LoaderConfig::default(),
    };
    if !args.api_url.is_empty() {
        config.api_url = args.api_url.clone();
    }
    config.validate()?;

    tracing::info!("Fetching portfolio from {}", config.portfolio_url());

    let mut handle = mount(PortfolioLoader::new(config));
    handle.settled().await;
    let state = handle.snapshot().await;

    if let Some(e) = &state.error {
        println!("⚠️  Could not reach the provider ({}), showing bundled data", e);
        println!();
    }

    let document = &state.data;
    println!("{}", document.personal_field("name").unwrap_or("Portfolio"));
    if let Some(title) = document.personal_field("title") {
        println!("{}", title);
    }
    if let Some(email) = document.personal_field("email") {
        println!("Contact: {}", email);
    }

    println!();
    for section in ["social", "experience", "projects", "skills", "testimonials"] {
        println!("  {:<12} {} entries", section, document.section_len(section));
    }

    Ok(())
}
