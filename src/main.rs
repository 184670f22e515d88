//! # Barchart CLI
//!
//! Command-line interface for rendering bar charts.
//!
//! ## Usage
//!
//! ```bash
//! # Render a chart described in JSON
//! barchart render chart.json -o chart.png
//!
//! # Render the built-in demo chart
//! barchart demo -o demo.png
//!
//! # Show layout details
//! barchart -vv demo -o demo.gif
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

use barchart::{Bar, BarChartBuilder, ChartConfig, ChartError, Color};

/// Barchart - horizontal bar chart renderer
#[derive(Parser, Debug)]
#[command(name = "barchart")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a chart described by a JSON file
    Render {
        /// Chart description (JSON)
        config: PathBuf,

        /// Output image; format follows the extension (bmp, jpg, gif, png)
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// TrueType/OpenType font, overriding the description's font
        #[arg(long, value_name = "FILE")]
        font: Option<PathBuf>,
    },
    /// Render the demo chart
    Demo {
        /// Output image; format follows the extension (bmp, jpg, gif, png)
        #[arg(short, long, value_name = "FILE", default_value = "test.png")]
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<(), ChartError> {
    match command {
        Commands::Render {
            config,
            output,
            font,
        } => {
            let mut config = ChartConfig::from_file(&config)?;
            if font.is_some() {
                config.font = font;
            }
            BarChartBuilder::from_config(config).build(&output)?;
            println!("Saved to {}", output.display());
        }
        Commands::Demo { output } => {
            demo_chart().build(&output)?;
            println!("Saved to {}", output.display());
        }
    }

    Ok(())
}

/// The "Election Results" demo chart.
fn demo_chart() -> BarChartBuilder {
    BarChartBuilder::new()
        .size(300, 100)
        .text_color(Color::WHITE)
        .background_color(Color::BLACK)
        .bar_color(Color::LIME_GREEN)
        .title("Election Results")
        .add_bar(Bar::new("Cthulu", 512.0).with_color(Color::GOLD))
        .add_bar(Bar::new("Bob", 112.0))
        .add_bar(Bar::new("Hitler", -22.0))
}
