//! Formstep CLI
//!
//! Loads a server-rendered page, drives its form wizard the way the "next"
//! and "previous" buttons would, and prints what the page looks like.

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};

use formstep_core::{
    render, Config, Cursor, Direction, FormContext, FormPage, RenderPlan, ReviewLayout,
    WizardSnapshot,
};

#[derive(Parser)]
#[command(name = "formstep")]
#[command(version)]
#[command(about = "Multi-step form navigator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration file (defaults match the stock add forms)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Load a page and replay button clicks on its wizard
    Replay {
        /// Rendered HTML page
        file: PathBuf,

        /// Click to replay, in order (next or previous)
        #[arg(long = "step", value_name = "DIRECTION")]
        steps: Vec<Direction>,
    },
    /// Print the render plan of a cursor position
    Plan {
        /// Number of panels
        #[arg(long)]
        panels: usize,

        /// Cursor position, `panels` being the review position
        #[arg(long)]
        cursor: usize,

        #[arg(long, default_value = "course")]
        context: FormContext,

        /// Overrides the configured review layout (collapsed, expanded)
        #[arg(long)]
        layout: Option<ReviewLayout>,
    },
}

#[derive(Serialize)]
struct Click {
    direction: Direction,
    moved: bool,
    cursor: usize,
}

#[derive(Serialize)]
struct ReplayReport {
    clicks: Vec<Click>,
    wizard: WizardSnapshot,
}

fn main() -> Result<()> {
    formstep_core::init_logging();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Replay { file, steps } => {
            let report = replay(&file, &steps, config)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Plan {
            panels,
            cursor,
            context,
            layout,
        } => {
            let plan = plan(panels, cursor, context, layout.unwrap_or(config.review_layout))?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

fn replay(file: &Path, steps: &[Direction], config: Config) -> Result<ReplayReport> {
    let page = FormPage::open(file, config)
        .with_context(|| format!("Failed to read page {}", file.display()))?;

    let Some(wizard) = page.wizard() else {
        bail!("{} has no multi-step add form", file.display());
    };

    let clicks = steps
        .iter()
        .map(|&direction| {
            let moved = wizard.advance(direction);
            Click {
                direction,
                moved,
                cursor: wizard.cursor().position(),
            }
        })
        .collect();

    tracing::info!(clicks = steps.len(), "Replay finished");

    Ok(ReplayReport {
        clicks,
        wizard: wizard.snapshot(),
    })
}

fn plan(
    panels: usize,
    cursor: usize,
    context: FormContext,
    layout: ReviewLayout,
) -> Result<RenderPlan> {
    let cursor = Cursor::at(cursor, panels).context("Cursor must be within [0, panels]")?;
    Ok(render(&cursor, context, layout))
}
