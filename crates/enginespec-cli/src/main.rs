//! Engine Spec CLI
//!
//! Thin wrapper around enginespec-core for checking content catalogs.
//!
//! ## Usage
//!
//! ```bash
//! # Validate the catalog (bundled one unless --content is given)
//! enginespec validate
//!
//! # List pages
//! enginespec --content engines.json list
//!
//! # Print a page as the desktop or mobile layout would show it
//! enginespec show bmw-n47 --layout mobile
//! ```

mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use enginespec_core::Catalog;

use crate::render::{render_page, Layout};

/// Engine Spec - technical specification content
#[derive(Parser)]
#[command(name = "enginespec")]
#[command(version = "0.1.0")]
#[command(about = "Engine Spec - validate and inspect engine specification catalogs")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Catalog JSON file (default: <data dir>/enginespec/catalog.json, else the bundled sample)
    #[arg(short, long, global = true)]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the catalog and check every table schema
    Validate,

    /// List page slugs and names
    List,

    /// Print a page as text
    Show {
        /// Page slug
        slug: String,

        /// Which layout to print
        #[arg(short, long, value_enum, default_value_t = Layout::Desktop)]
        layout: Layout,
    },
}

fn setup_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "enginespec=info,enginespec_core=info",
        2 => "enginespec=debug,enginespec_core=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Catalog installed in the user's data directory, if there is one
fn default_catalog_path() -> Option<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join("enginespec").join("catalog.json"))
        .filter(|p| p.exists())
}

fn load_catalog(path: Option<PathBuf>) -> Result<Catalog> {
    match path.or_else(default_catalog_path) {
        Some(path) => Catalog::load(&path)
            .with_context(|| format!("Failed to load catalog {}", path.display())),
        None => {
            tracing::info!("using bundled catalog");
            Catalog::bundled().context("Bundled catalog is invalid")
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let catalog = load_catalog(cli.content)?;

    match cli.command {
        Commands::Validate => {
            println!(
                "OK: {} pages, {} tables",
                catalog.pages().len(),
                catalog.table_count()
            );
        }
        Commands::List => {
            for page in catalog.pages() {
                println!("{}\t{}", page.slug, page.name);
            }
        }
        Commands::Show { slug, layout } => {
            let page = catalog.page(&slug)?;
            print!("{}", render_page(page, layout));
        }
    }

    Ok(())
}
