mod args;
mod logger;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dive_pattern::{Length, PatternSummary, calculate_summary, generate};
use dive_svg::RenderOptions;
use std::path::PathBuf;

use args::{ParamArgs, SideArg};
use logger::CliLogger;

#[derive(Parser)]
#[command(
    name = "pmdive",
    about = "Poor Man's Dive cardboard VR viewer pattern generator",
    version
)]
struct Cli {
    /// More log output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the pattern as an SVG file
    Generate {
        #[command(flatten)]
        params: ParamArgs,

        /// Image href for the device pocket (file name, URL or data URI)
        #[arg(long)]
        logo: Option<String>,

        /// Leave out the description and licence metadata
        #[arg(long)]
        no_metadata: bool,

        /// Also write the effective parameters as JSON
        #[arg(long, value_name = "PATH")]
        save_config: Option<PathBuf>,

        /// Output SVG file
        #[arg(default_value = "pmdive.svg")]
        output: PathBuf,
    },

    /// Print control points, symbols and page layout as JSON
    Points {
        #[command(flatten)]
        params: ParamArgs,

        /// Which side to print
        #[arg(long, default_value = "both", value_enum)]
        side: SideArg,
    },

    /// Print the page usage summary
    Summary {
        #[command(flatten)]
        params: ParamArgs,
    },
}

fn print_summary(summary: &PatternSummary) {
    println!("Pattern Summary:");
    println!("  Points per side: {}", summary.points_per_side);
    println!(
        "  Left side: {}",
        if summary.mirrored {
            "computed separately"
        } else {
            "same as right"
        }
    );
    if summary.clamped {
        println!("  Fold offset clamped to the page width");
    }
    for page in &summary.pages {
        println!(
            "  Page {}: {} x {} mm{}{}",
            page.page.number(),
            Length::from_hundredths(page.bounds.width()),
            Length::from_hundredths(page.bounds.height()),
            if page.visible { "" } else { " (hidden)" },
            if page.fits_sheet { "" } else { ", exceeds the sheet" }
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    CliLogger::new(cli.verbose, cli.quiet).init()?;

    match cli.command {
        Commands::Generate {
            params,
            logo,
            no_metadata,
            save_config,
            output,
        } => {
            let params = params.resolve().await?;
            if let Some(path) = &save_config {
                dive_svg::save_parameters(&params, path).await?;
                println!("Parameters → {}", path.display());
            }

            let pattern = generate(&params);
            let options = RenderOptions {
                logo: logo.unwrap_or_else(|| dive_svg::DEFAULT_LOGO.to_string()),
                include_metadata: !no_metadata,
            };
            dive_svg::save_svg(&pattern, &options, &output).await?;

            print_summary(&calculate_summary(&pattern));
            println!("Generated pattern → {}", output.display());
        }

        Commands::Points { params, side } => {
            let pattern = generate(&params.resolve().await?);
            let mut sides = serde_json::Map::new();
            for &side in side.sides() {
                sides.insert(
                    side.name().to_lowercase(),
                    serde_json::to_value(pattern.side(side))?,
                );
            }
            sides.insert("layout".to_string(), serde_json::to_value(pattern.layout)?);
            println!("{}", serde_json::to_string_pretty(&sides)?);
        }

        Commands::Summary { params } => {
            let pattern = generate(&params.resolve().await?);
            print_summary(&calculate_summary(&pattern));
        }
    }

    Ok(())
}
