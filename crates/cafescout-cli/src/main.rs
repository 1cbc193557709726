mod catalog;
mod locate;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cafescout_core::GeoPoint;
use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "cafescout")]
#[command(about = "Find coffee-shop brand locations through the Overpass API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch locations for the selected brands and render them
    Locate {
        /// Brand to include, by catalog slug (repeatable)
        #[arg(long = "brand", value_name = "SLUG", required = true)]
        brands: Vec<String>,

        /// Reference point as LAT,LON; keeps only locations within the radius
        #[arg(long, value_name = "LAT,LON")]
        near: Option<GeoPoint>,

        /// Radius in kilometers applied around --near
        #[arg(long, value_name = "KM")]
        radius_km: Option<f64>,

        /// Output format for the result set
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Print the fetch plan without any network activity
        #[arg(long)]
        dry_run: bool,
    },
    /// List the configured brand catalog
    Brands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = cafescout_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Locate {
            brands,
            near,
            radius_km,
            format,
            dry_run,
        } => locate::run_locate(&config, &brands, near, radius_km, format, dry_run).await,
        Commands::Brands => catalog::run_list_brands(&config),
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
