//! CLI entry point for the title report pipeline.

use anyhow::Result;
use clap::Parser;
use title_report::config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_DIR};
use title_report::{Pipeline, ReportConfig};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Clean the Netflix titles dataset and report genres of recent movies",
    long_about = "Reads a titles CSV, keeps movies released since a given year, ranks their \
                  genres and writes a bar chart, a cleaned CSV and a text summary.\n\n\
                  EXAMPLES:\n  \
                  # Default locations (data/netflix_titles.csv -> outputs/)\n  \
                  title-report\n\n  \
                  # Custom locations, no chart\n  \
                  title-report -i titles.csv -o reports/ --no-chart\n\n  \
                  # Machine-readable result\n  \
                  title-report --json | jq .kpis"
)]
struct Args {
    /// Path to the titles CSV
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    input: String,

    /// Output directory for the chart, cleaned CSV and summary
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output: String,

    /// Value of the `type` column to keep (case-insensitive)
    #[arg(long, default_value = "movie")]
    category: String,

    /// Lowest release year kept
    #[arg(long, default_value = "2015")]
    min_year: i64,

    /// Number of genres in the rank list
    #[arg(long, default_value = "10")]
    top_n: usize,

    /// Skip rendering the genre chart
    #[arg(long)]
    no_chart: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,

    /// Print the run result (or the error) as JSON; disables logging
    #[arg(long)]
    json: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging stays off so stdout carries the
/// report and the JSON only.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    let config = ReportConfig::builder()
        .input_path(&args.input)
        .output_dir(&args.output)
        .target_category(&args.category)
        .min_release_year(args.min_year)
        .top_n(args.top_n)
        .render_chart(!args.no_chart)
        .build()?;

    let result = match Pipeline::new(config).run() {
        Ok(result) => result,
        Err(err) => {
            if args.json {
                let payload = serde_json::json!({ "error": &err });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
            return Err(err.into());
        }
    };
    info!("Finished in {}ms", result.duration_ms);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}
