mod app;
mod palette;
mod renderer;
mod shared;
mod utils;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::palette::PaletteConfig;
use crate::renderer::TableChannels;
use crate::utils::logger;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Default)]
struct ConfigArg {
    /// JSON file overriding any of the palette settings
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ConfigArg {
    fn load(&self) -> Result<PaletteConfig> {
        PaletteConfig::load_or_default(self.config.as_deref())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write the HTML preview and the C palette table (default)
    Generate {
        #[command(flatten)]
        config: ConfigArg,
        /// Where to write the HTML preview
        #[arg(short, long)]
        preview: Option<PathBuf>,
        /// Where to write the C table
        #[arg(short, long)]
        table: Option<PathBuf>,
        #[arg(long, value_enum, help = "Channels written into each table entry")]
        table_channels: Option<TableChannels>,
    },
    /// Print every entry with its packed encodings
    List {
        #[command(flatten)]
        config: ConfigArg,
        #[arg(short, long, default_value_t = false)]
        json: bool,
    },
    /// Draw the palette in the terminal
    Show {
        #[command(flatten)]
        config: ConfigArg,
    },
    /// Print the effective configuration as JSON
    Config {
        #[command(flatten)]
        config: ConfigArg,
    },
}

fn main() -> Result<()> {
    logger::init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Generate {
        config: ConfigArg::default(),
        preview: None,
        table: None,
        table_channels: None,
    });

    let result = run(command);
    if let Err(e) = &result {
        logger::error(&format!("{:#}", e));
    }
    result
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Generate { config, preview, table, table_channels } => {
            let mut config = config.load()?;
            if let Some(path) = preview {
                config.preview_path = path;
            }
            if let Some(path) = table {
                config.table_path = path;
            }
            if let Some(channels) = table_channels {
                config.table_channels = channels;
            }

            let report = app::launcher::generate(&config)?;
            println!("{}", report.entries);
            println!("preview: {}", report.preview_path.display());
            println!("table:   {}", report.table_path.display());
        }
        Commands::List { config, json } => {
            app::launcher::list(&config.load()?, json)?;
        }
        Commands::Show { config } => {
            app::launcher::show(&config.load()?)?;
        }
        Commands::Config { config } => {
            println!("{}", serde_json::to_string_pretty(&config.load()?)?);
        }
    }

    Ok(())
}
