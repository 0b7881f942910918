//! devinfo - print device hardware and OS metadata

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use devinfo::{create_provider, DeviceReport, ReaderConfig, SystemMetricsReader};

#[derive(Parser)]
#[command(name = "devinfo")]
#[command(about = "Report device hardware and OS metadata", long_about = None)]
struct Cli {
    /// Config file (defaults to the per-user config if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log source reads at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the device report as a table
    Status,

    /// Print the device report as JSON
    Json {
        #[arg(long)]
        pretty: bool,
    },

    /// Print the CPU core count
    Cores,

    /// Print total RAM in megabytes (0 = unknown)
    Ram,

    /// Show the effective configuration
    Config {
        /// Write the default configuration to the config path
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG overrides --verbose
    let default_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command.unwrap_or(Commands::Status) {
        Commands::Status => {
            let (config, reader) = open_reader(cli.config.as_deref())?;
            let provider = create_provider(&config);
            print!("{}", DeviceReport::collect(&reader, provider.as_ref()).render_text());
        }

        Commands::Json { pretty } => {
            let (config, reader) = open_reader(cli.config.as_deref())?;
            let provider = create_provider(&config);
            let report = DeviceReport::collect(&reader, provider.as_ref());
            let json = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{}", json);
        }

        Commands::Cores => {
            let (_, reader) = open_reader(cli.config.as_deref())?;
            println!("{}", reader.cpu_core_count());
        }

        Commands::Ram => {
            let (_, reader) = open_reader(cli.config.as_deref())?;
            println!("{}", reader.total_ram_megabytes());
        }

        Commands::Config { init } => run_config(cli.config, init)?,
    }

    Ok(())
}

fn open_reader(
    path: Option<&Path>,
) -> Result<(ReaderConfig, SystemMetricsReader), Box<dyn std::error::Error>> {
    let config = ReaderConfig::load_or_default(path)?;
    let reader = SystemMetricsReader::new(&config);
    Ok((config, reader))
}

fn run_config(path: Option<PathBuf>, init: bool) -> Result<(), Box<dyn std::error::Error>> {
    if init {
        let path = path
            .or_else(ReaderConfig::default_path)
            .ok_or("no config directory available; pass --config")?;
        ReaderConfig::default().save(&path)?;
        info!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = ReaderConfig::load_or_default(path.as_deref())?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
