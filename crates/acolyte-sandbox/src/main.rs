//! Entry point for the Acolyte Sandbox showcase.
//!
//! This Dioxus desktop application shows the AI demo catalog and tracks
//! which demos have been explored.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use acolyte_catalog::{PageVariant, ViewMode};
use acolyte_sandbox::components::App;
use acolyte_sandbox::config::{SandboxConfig, default_data_dir};
use acolyte_sandbox::opener::BrowserOpener;
use acolyte_sandbox::state::AppState;
use acolyte_sandbox::theme::palette_css;

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "acolyte-sandbox")]
#[command(about = "AI technology showcase for Acolyte Health")]
struct Args {
    /// Page feature set: `progress` (visit tracking) or `categories` (per-card category switch)
    #[arg(long, default_value_t = PageVariant::Progress)]
    variant: PageVariant,

    /// Initial layout: `cards` or `tiles`
    #[arg(long, default_value_t = ViewMode::Cards)]
    view: ViewMode,

    /// Directory for persisted progress (default: $ACOLYTE_DATA_DIR or the platform data dir)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Directory holding demo images and videos; missing files show a placeholder
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Keep progress in memory only
    #[arg(long)]
    memory: bool,

    /// Forget explored demos before starting
    #[arg(long)]
    reset_progress: bool,
}

impl From<Args> for SandboxConfig {
    fn from(args: Args) -> Self {
        Self {
            variant: args.variant,
            view_mode: args.view,
            data_dir: args.data_dir.unwrap_or_else(default_data_dir),
            asset_dir: args.assets,
            persist: !args.memory,
            reset_progress: args.reset_progress,
        }
    }
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = SandboxConfig::from(Args::parse());
    tracing::info!("Starting Acolyte Sandbox ({} variant)", config.variant);

    let state = match AppState::from_config(&config, Arc::new(BrowserOpener)) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Invalid demo catalog: {}", e);
            std::process::exit(1);
        }
    };

    dioxus::LaunchBuilder::desktop()
        .with_context(state)
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Acolyte Sandbox")
                        .with_inner_size(LogicalSize::new(1280, 900)),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap" rel="stylesheet">
                    <style>{}{}</style>
                    "#,
                    STYLES_CSS,
                    palette_css()
                )),
        )
        .launch(RootApp);
}

/// Root component owning the state signal, seeded from the launch context.
#[component]
fn RootApp() -> Element {
    let initial = use_context::<AppState>();
    let state = use_signal(move || initial);

    use_drop(|| {
        tracing::info!("Shutting down Acolyte Sandbox");
    });

    rsx! {
        App { state }
    }
}
