use anyhow::{Context, Result};
use clap::Parser;
use gridplot::{caption, configure, height, lower, offset, parser, upper, width, PlotOption};
use log::debug;
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(name = "gridplot")]
#[command(about = "Resolve character-grid plot settings and print them as JSON", long_about = None)]
struct Args {
    /// Option pipeline (e.g., 'width(60) | height(12) | caption("cpu load")')
    pipeline: Option<String>,

    /// Plot width in columns; <= 0 means derive from the series length
    #[arg(long, allow_negative_numbers = true)]
    width: Option<i64>,

    /// Plot height in rows; <= 0 means derive from the value range
    #[arg(long, allow_negative_numbers = true)]
    height: Option<i64>,

    /// Fixed lower bound of the value axis
    #[arg(long, allow_negative_numbers = true)]
    lower: Option<f64>,

    /// Fixed upper bound of the value axis
    #[arg(long, allow_negative_numbers = true)]
    upper: Option<f64>,

    /// Left margin in columns
    #[arg(long, allow_negative_numbers = true)]
    offset: Option<i64>,

    /// Caption text
    #[arg(long, allow_hyphen_values = true)]
    caption: Option<String>,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,
}

impl Args {
    /// Flag options in fixed order; they apply after the pipeline
    fn flag_options(&self) -> [Option<PlotOption>; 6] {
        [
            self.width.map(width),
            self.height.map(height),
            self.lower.map(lower),
            self.upper.map(upper),
            self.offset.map(offset),
            self.caption.clone().map(caption),
        ]
    }
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let args = Args::parse();

    let pipeline = match &args.pipeline {
        Some(dsl) => parser::parse_options(dsl).context("Failed to parse option pipeline")?,
        None => Vec::new(),
    };
    debug!("pipeline options: {:?}", pipeline);

    let settings = configure(
        pipeline
            .into_iter()
            .map(Some)
            .chain(args.flag_options()),
    );

    let json = if args.compact {
        serde_json::to_string(&settings)
    } else {
        serde_json::to_string_pretty(&settings)
    }
    .context("Failed to serialize settings")?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", json).context("Failed to write settings to stdout")?;
    handle.flush().context("Failed to flush stdout")?;

    Ok(())
}
