use std::io::{self, BufRead};

use anyhow::{Context, anyhow};
use clap::{Parser, ValueEnum};
use log::warn;
use milankovitch::constants::EPOCH_YEAR;
use milankovitch::time::within_accuracy_bound;
use milankovitch::{OrbitalParameters, compute_orbital_parameters};

/// Print Earth's eccentricity, obliquity and longitude of perihelion for one year.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Milankovitch orbital parameters (Berger 1978) for a single year"
)]
struct Cli {
    /// Year, AD positive and BC negative (read from stdin when omitted)
    #[arg(allow_hyphen_values = true)]
    year: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let raw = match cli.year {
        Some(year) => year,
        None => read_stdin_line()?,
    };
    let year = parse_year(&raw)?;
    if !within_accuracy_bound(year, EPOCH_YEAR) {
        warn!("year {year} is outside the ±1,000,000 year accuracy window; result is extrapolated");
    }

    let params = compute_orbital_parameters(year);
    match cli.format {
        OutputFormat::Text => print_text(&params),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&params)?),
    }
    Ok(())
}

fn read_stdin_line() -> anyhow::Result<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read year from stdin")?;
    Ok(line)
}

fn parse_year(raw: &str) -> anyhow::Result<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("invalid year: no input"));
    }
    trimmed
        .parse::<i32>()
        .map_err(|e| anyhow!("invalid year '{}': {}", trimmed, e))
}

fn print_text(params: &OrbitalParameters) {
    println!("eccentricity             : {:.10}", params.eccentricity);
    println!("obliquity_deg            : {:.10}", params.obliquity);
    println!(
        "longitude_perihelion_deg : {:.10}",
        params.longitude_perihelion
    );
}
