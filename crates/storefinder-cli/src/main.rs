use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod near;
mod render;

#[derive(Debug, Parser)]
#[command(name = "storefinder")]
#[command(about = "Find nearby hardware stores, grouped by brand")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Find stores near a location and list them grouped by brand.
    Near {
        /// Free-text address or postal code to geocode.
        query: Option<String>,
        /// Explicit latitude; skips geocoding. Requires --lon.
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Explicit longitude; skips geocoding. Requires --lat.
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
        /// Skip the per-brand logo refinement pass.
        #[arg(long)]
        no_logos: bool,
    },
    /// Resolve one brand's display logo through the fallback chain.
    Logo { brand: String },
    /// Resolve a free-text query to coordinates.
    Geocode { query: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = storefinder_core::load_app_config_from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Near {
            query,
            lat,
            lon,
            no_logos,
        } => near::run(&config, query.as_deref(), lat.zip(lon), no_logos).await,
        Commands::Logo { brand } => near::run_logo(&config, &brand).await,
        Commands::Geocode { query } => near::run_geocode(&config, &query).await,
    }
}
