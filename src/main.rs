#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Launch options, set once from the command line
static LAUNCH: OnceLock<LaunchOptions> = OnceLock::new();

/// What the window should show on startup
#[derive(Clone, Debug, Default)]
pub struct LaunchOptions {
    /// Catalog file to load; the bundled sample when `None`
    pub content: Option<PathBuf>,
    /// Initial page slug; the first page when `None`
    pub page: Option<String>,
}

/// Get the launch options (defaults if never set)
pub fn get_launch_options() -> LaunchOptions {
    LAUNCH.get().cloned().unwrap_or_default()
}

/// Engine Spec - technical specification viewer
#[derive(Parser, Debug)]
#[command(name = "enginespec-desktop")]
#[command(about = "Engine Spec - browse engine specification pages")]
struct Args {
    /// Catalog JSON file (default: <data dir>/enginespec/catalog.json, else the bundled sample)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Slug of the page to open first
    #[arg(short, long)]
    page: Option<String>,

    /// Window width in logical pixels (below 768 shows the mobile layout)
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let content = args.content.or_else(|| {
        dirs::data_dir()
            .map(|d| d.join("enginespec").join("catalog.json"))
            .filter(|p| p.exists())
    });

    tracing::info!(content = ?content, page = ?args.page, "Starting Engine Spec");

    let _ = LAUNCH.set(LaunchOptions {
        content,
        page: args.page,
    });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Engine Spec")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
