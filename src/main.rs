use clap::Parser;
use color_eyre::Result;
use env_logger::Env;
use log::{info, warn};
use std::path::PathBuf;

use paynetsim::analysis::summarize;
use paynetsim::config_loader::{self, CliOverrides};
use paynetsim::export::{write_network, ExportFormat};
use paynetsim::orchestrator::{generate_network, NetworkLevel};

/// Synthetic hierarchical payment network generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the generation configuration YAML file (defaults are used if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for the generated graph and summary
    #[arg(short, long, default_value = "paynet_output")]
    output: PathBuf,

    /// Level of the network hierarchy to generate
    #[arg(short, long, value_enum, default_value = "national")]
    level: NetworkLevel,

    /// Graph export format
    #[arg(short, long, value_enum, default_value = "gml")]
    format: ExportFormat,

    /// Seed for reproducible generation (overrides the configuration)
    #[arg(long)]
    seed: Option<u64>,

    /// Build child networks sequentially instead of in parallel
    #[arg(long)]
    sequential: bool,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    let mut config = config_loader::load_or_default(args.config.as_deref())?;
    config_loader::apply_overrides(
        &mut config,
        &CliOverrides {
            seed: args.seed,
            sequential: args.sequential,
        },
    )?;

    // Initialize logging, RUST_LOG takes precedence over the configured level
    let default_level = config.general.log_level.clone().unwrap_or_else(|| "info".to_string());
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    info!("Starting PaynetSim generator");
    info!("Output directory: {:?}", args.output);

    let network = generate_network(&config, args.level)?;

    let summary = summarize(&network.graph);
    if !summary.validation.is_valid() {
        for finding in &summary.validation.findings {
            warn!("{}", finding);
        }
    }
    info!(
        "Individuals: {}, businesses: {}, edges: {}, mean customers per business: {:.1}",
        summary.individual_count,
        summary.business_count,
        summary.edge_count,
        summary.business_in_degree.mean
    );

    let graph_path = write_network(
        &network.graph,
        &network.businesses,
        &summary,
        args.format,
        &args.output,
    )?;

    info!("Generation completed with seed {}: {:?}", network.seed, graph_path);
    Ok(())
}
