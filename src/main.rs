use std::path::PathBuf;

use clap::{Parser, Subcommand};

use bestiary::commands;
use bestiary_core::config::Config;

#[derive(Parser)]
#[command(name = "bestiary", about = "Bestiary — grep, diff, and normalize monster datasets")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(long, global = true)]
    debug: bool,

    /// Config file to use instead of ~/.config/bestiary/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the lines of a file that contain a substring.
    Grep {
        file: PathBuf,
        pattern: String,
        /// Only report lines that also contain this substring.
        #[arg(long)]
        also: Option<String>,
    },
    /// List monsters on the remote index that the local dataset lacks.
    Missing {
        /// Local dataset to diff against.
        #[arg(long)]
        local: Option<PathBuf>,
        /// Where to write the missing list.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Index page to fetch instead of the configured one.
        #[arg(long)]
        url: Option<String>,
    },
    /// Normalize a raw monster dataset.
    Normalize {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Check that a file is valid JSON.
    Validate { file: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Grep { file, pattern, also } => {
            for hit in commands::grep(&file, &pattern, also.as_deref())? {
                println!("{hit}");
            }
        }
        Command::Missing { local, out, url } => {
            let local = local.unwrap_or(config.paths.local_dataset);
            let out = out.unwrap_or(config.paths.missing_output);
            let mut remote = config.remote;
            if let Some(url) = url {
                remote.index_url = url;
            }

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let report = runtime.block_on(commands::find_missing(&local, &out, &remote))?;

            println!("Local monsters count: {}", report.local);
            println!("Remote monsters found: {}", report.remote);
            println!("Missing monsters: {}", report.missing.len());
            println!("Saved to {}", out.display());
        }
        Command::Normalize { input, output } => {
            let input = input.unwrap_or(config.paths.raw_input);
            let output = output.unwrap_or(config.paths.normalized_output);
            let count = commands::normalize(&input, &output)?;
            println!("Processed {count} monsters.");
        }
        Command::Validate { file } => {
            let count = commands::validate(&file)?;
            println!("JSON is VALID ({count} records)");
        }
    }

    Ok(())
}
