//! # Questview
//!
//! Loads a quest definition and a progress snapshot, derives the quest
//! progress display, and prints it as JSON.
//!
//! ```text
//! questview <definition> <progress> [--config <panel.toml>]
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

use anyhow::{Context, Result};
use clap::Parser;
use questview_core::model::QuestDisplayModel;
use questview_core::{derive, loader};
use questview_tools::{PanelConfig, PanelView, QuestBackground, QuestProgressPanel};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(
    name = "questview",
    about = "Derive and print a quest progress display",
    version
)]
struct Args {
    /// Quest definition file (.json or .ron)
    definition: PathBuf,

    /// Progress snapshot file (.json or .ron)
    progress: PathBuf,

    /// Panel configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Everything printed for one run.
#[derive(Debug, Serialize)]
struct Report {
    model: QuestDisplayModel,
    panel: PanelView,
    background: Option<QuestBackground>,
}

fn run(args: &Args) -> Result<Report> {
    let definition = loader::load_definition(&args.definition)
        .with_context(|| format!("loading definition {}", args.definition.display()))?;
    let progress = loader::load_progress(&args.progress)
        .with_context(|| format!("loading progress {}", args.progress.display()))?;
    let config = args
        .config
        .as_ref()
        .map_or_else(PanelConfig::default, PanelConfig::load_from);

    let model = derive(Some(&definition), Some(&progress));
    info!(quest = %definition.key, state = ?model.state(), "Derived quest display");

    let mut panel = QuestProgressPanel::new(config);
    panel.apply(&model);

    Ok(Report {
        background: QuestBackground::from_definition(&definition),
        panel: panel.view().clone(),
        model,
    })
}

/// Main entry point.
fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("questview=info".parse()?))
        .init();

    let args = Args::parse();
    let report = run(&args)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
