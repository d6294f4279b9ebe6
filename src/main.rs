//! stickylist - Entry Point

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use stickylist::model::{AppError, ListFixture, load_fixture};
use stickylist::report::{render_text, scroll_reports};
use stickylist::{SectionTracker, StickyListLayout};
use tracing::info;

/// Lay out a sticky multi-section list and print what is visible while scrolling
#[derive(Parser, Debug)]
#[command(name = "stickylist")]
#[command(version)]
#[command(about = "Inspect sticky list layouts at given scroll offsets")]
pub struct Args {
    /// Path to a TOML list fixture (uses the built-in demo list if not provided)
    pub fixture: Option<PathBuf>,

    /// Comma-separated scroll offsets to apply in order
    #[arg(short, long, value_delimiter = ',', default_value = "0", allow_negative_numbers = true)]
    pub scroll: Vec<f64>,

    /// Viewport height used for visible-frame queries
    #[arg(long, value_parser = parse_finite)]
    pub viewport_height: Option<f64>,

    /// Height of the bar the sticky element pins below
    #[arg(long, value_parser = parse_finite)]
    pub top_bar_height: Option<f64>,

    /// Print reports as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Parse a finite number of points.
fn parse_finite(value: &str) -> Result<f64, String> {
    let number: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if number.is_finite() {
        Ok(number)
    } else {
        Err(format!("`{value}` is not a finite number"))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = stickylist::config::load_config_with_precedence(args.config.clone())?;
        let merged = stickylist::config::merge_config(config_file);
        let with_env = stickylist::config::apply_env_overrides(merged);
        stickylist::config::apply_cli_overrides(
            with_env,
            args.top_bar_height,
            args.viewport_height,
        )
    };

    stickylist::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let fixture = match &args.fixture {
        Some(path) => load_fixture(path)?,
        None => ListFixture::demo(config.viewport_width),
    };

    let mut layout = StickyListLayout::new(config.layout_params())
        .with_top_bar_height(config.top_bar_height);
    let content_size = layout.full_relayout(
        &fixture.section_counts(),
        |index| fixture.size_of(index),
        |section| fixture.header_size_of(section),
    )?;
    info!(
        sections = fixture.sections.len(),
        content_height = content_size.height,
        "Fixture laid out"
    );

    let mut tracker = SectionTracker::new();
    let reports = scroll_reports(
        &mut layout,
        &mut tracker,
        &args.scroll,
        config.viewport_width,
        config.viewport_height,
    );

    let mut stdout = std::io::stdout().lock();
    if args.json {
        let json = serde_json::to_string_pretty(&reports).map_err(std::io::Error::from)?;
        writeln!(stdout, "{json}")?;
    } else {
        writeln!(
            stdout,
            "content {}x{}",
            content_size.width, content_size.height
        )?;
        write!(stdout, "{}", render_text(&reports))?;
    }

    Ok(())
}
