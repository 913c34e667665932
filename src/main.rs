#![allow(non_snake_case)]

mod app;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Whether the demo mounts the hover action button, set from the command line.
static SHOW_OPEN_BUTTON: OnceLock<bool> = OnceLock::new();

/// Read the demo's action-button toggle.
pub fn show_open_button() -> bool {
    SHOW_OPEN_BUTTON.get().copied().unwrap_or(true)
}

/// Rumata Preview - loading indicator demo
#[derive(Parser, Debug)]
#[command(name = "rumata-preview-desktop")]
#[command(about = "Rumata embedded preview - loading indicator demo")]
struct Args {
    /// Hide the "Open in Rumata" hover button
    #[arg(long)]
    hide_open_button: bool,

    /// Window title suffix (for running several demo windows side by side)
    #[arg(short, long)]
    name: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let _ = SHOW_OPEN_BUTTON.set(!args.hide_open_button);

    let title = match args.name {
        Some(ref name) => format!("Rumata Preview - {}", name),
        None => "Rumata Preview".to_string(),
    };

    tracing::info!(
        "Starting '{}' (open button: {})",
        title,
        show_open_button()
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(520.0, 640.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
