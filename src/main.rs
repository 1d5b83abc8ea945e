use anyhow::{Context, Result, bail};
use cellpack::{
    BalancerConfig, DEMO_CELLS, DEMO_TOPOLOGY, LayoutReport, PackTopology, export_text,
    parse_cells, partition_with_voltage,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

/// Balance measured cell capacities into an SxP battery pack
#[derive(Parser)]
#[command(name = "cellpack")]
#[command(version)]
#[command(about = "Groups cells into series groups with the tightest capacity spread")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// TOML config with nominal_voltage and delta_warning_mah
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Balance a list of measured capacities
    Balance {
        /// Pack topology, e.g. 4S5P
        #[arg(short, long)]
        topology: PackTopology,

        /// Capacities (mAh), comma or whitespace separated
        #[arg(long, conflicts_with = "file")]
        cells: Option<String>,

        /// Read capacities from a file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Balance the built-in 4S5P demo data set
    Demo {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => BalancerConfig::load(path)?,
        None => BalancerConfig::default(),
    };

    match cli.command {
        Commands::Balance {
            topology,
            cells,
            file,
            format,
        } => {
            let text = read_cell_text(cells, file)?;
            let parsed = parse_cells(&text);

            if !parsed.rejected.is_empty() {
                tracing::warn!(
                    count = parsed.rejected.len(),
                    tokens = ?parsed.rejected,
                    "ignoring values that are not positive numbers"
                );
            }

            run(&parsed.cells, &topology, &config, format)
        }
        Commands::Demo { format } => run(&DEMO_CELLS, &DEMO_TOPOLOGY, &config, format),
    }
}

fn read_cell_text(cells: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(cells) = cells {
        return Ok(cells);
    }

    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .context(format!("Failed to read cells from {}", path.display()));
    }

    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read cells from stdin")?;
    Ok(buf)
}

fn run(
    cells: &[f64],
    topology: &PackTopology,
    config: &BalancerConfig,
    format: OutputFormat,
) -> Result<()> {
    if let Err(e) = topology.check(cells) {
        bail!("{} for {}", e, topology);
    }

    tracing::info!(
        topology = %topology,
        cells = cells.len(),
        "balancing pack"
    );

    let result = partition_with_voltage(cells, topology.series, config.nominal_voltage);

    tracing::info!(
        delta = result.delta(),
        pack_capacity = result.pack_capacity(),
        "balancing complete"
    );

    if config.exceeds_warning(result.delta()) {
        tracing::warn!(
            delta = result.delta(),
            threshold = config.delta_warning_mah,
            "group spread exceeds warning threshold"
        );
    }

    match format {
        OutputFormat::Text => println!("{}", export_text(&result, topology)),
        OutputFormat::Json => {
            let report = LayoutReport::build(&result, topology, cells, config);
            println!("{}", report.to_json().context("Failed to serialize report")?);
        }
    }

    Ok(())
}
