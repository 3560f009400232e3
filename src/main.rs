//! `fetchnodes` CLI - Run the plugin nodes against a local input directory

mod cmd;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fetchnodes::config::{load_config, load_config_from};
use fetchnodes::{LocalHost, NodeRegistry};

#[derive(Parser)]
#[command(name = "fetchnodes")]
#[command(about = "JSON path extraction, URL image loading and Unicode decoding nodes")]
#[command(version)]
struct Cli {
    /// Config file (default: ~/.config/fetchnodes/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory images are downloaded into (overrides config)
    #[arg(long, global = true)]
    input_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered nodes
    List,

    /// Print the node discovery manifest as JSON
    Manifest,

    /// Parse JSON (inline, from a file, or fetched) and extract a path
    Json {
        /// Inline JSON text
        #[arg(short = 's', long, conflicts_with = "file")]
        json_string: Option<String>,

        /// Read JSON text from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Fetch JSON from this URL instead
        #[arg(short, long)]
        url: Option<String>,

        /// Query parameter as key=value (repeatable)
        #[arg(short, long = "query")]
        query: Vec<String>,

        /// Dotted/bracketed path, e.g. data.items[0].title
        #[arg(short, long, default_value = "")]
        path: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Decode \uXXXX escapes and numeric HTML entities
    Decode {
        /// Text to decode (reads stdin when omitted)
        text: Option<String>,
    },

    /// Download an image into the input directory (skips existing files)
    Image {
        /// Image URL or a filename already in the input directory
        source: String,
    },
}

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    if let Some(dir) = cli.input_dir {
        config.input_dir = Some(dir);
    }

    let registry = NodeRegistry::with_config(&config);
    let host = LocalHost::new(config.input_dir());

    match cli.command {
        Commands::List => cmd::list::cmd_list(&registry),
        Commands::Manifest => cmd::list::cmd_manifest(&registry)?,
        Commands::Json {
            json_string,
            file,
            url,
            query,
            path,
            format,
        } => {
            let source = cmd::json::JsonSource {
                json_string,
                file,
                url,
            };
            cmd::json::cmd_json(&registry, &host, source, &query, &path, format)?;
        }
        Commands::Decode { text } => cmd::decode::cmd_decode(&registry, &host, text)?,
        Commands::Image { source } => cmd::image::cmd_image(&registry, &host, &source)?,
    }

    Ok(())
}
