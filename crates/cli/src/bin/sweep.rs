use std::path::PathBuf;

use anyhow::anyhow;
use clap::{Parser, ValueEnum};
use log::info;
use milankovitch::config::{self, ExportFormat};
use milankovitch::constants::EPOCH_YEAR;
use milankovitch::export::{sidecar, table};
use milankovitch::sweep::{YearRange, sweep_records};

/// Evaluate the orbital parameters over a range of years and export them.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Milankovitch parameter sweep (CSV or JSON)"
)]
struct Cli {
    /// First year of the sweep
    #[arg(long, allow_hyphen_values = true, conflicts_with = "config")]
    start: Option<i32>,

    /// Last year of the sweep (inclusive when aligned with the step)
    #[arg(long, allow_hyphen_values = true, conflicts_with = "config")]
    end: Option<i32>,

    /// Step in years
    #[arg(long, default_value_t = 1)]
    step: u32,

    /// Sweep manifest (YAML file, TOML file, or directory of TOML files)
    #[arg(long, requires = "name")]
    config: Option<PathBuf>,

    /// Sweep name inside the manifest
    #[arg(long)]
    name: Option<String>,

    /// Output file (use '-' for stdout); defaults to the manifest entry or artifacts/milankovitch.csv
    #[arg(long)]
    output: Option<PathBuf>,

    /// Output format; defaults to the manifest entry or csv
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}

struct Plan {
    name: String,
    range: YearRange,
    output: PathBuf,
    format: ExportFormat,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let plan = resolve_plan(&cli)?;

    let records = sweep_records(&plan.range)?;
    match plan.format {
        ExportFormat::Csv => {
            let mut writer = table::writer_for_path(&plan.output)?;
            table::write_all(&mut writer, &records)?;
        }
        ExportFormat::Json => {
            let meta = sidecar::Metadata {
                name: &plan.name,
                epoch_year: EPOCH_YEAR,
                start_year: plan.range.start,
                end_year: plan.range.end,
                step_years: plan.range.step,
            };
            sidecar::write_json(&plan.output, &meta, &records)?;
        }
    }
    info!(
        "wrote {} sample(s) for '{}' to {}",
        records.len(),
        plan.name,
        plan.output.display()
    );
    Ok(())
}

fn resolve_plan(cli: &Cli) -> anyhow::Result<Plan> {
    if let Some(path) = &cli.config {
        let name = cli
            .name
            .as_deref()
            .ok_or_else(|| anyhow!("--name is required with --config"))?;
        let sweeps = config::load_sweeps(path)?;
        let entry = config::find_sweep(&sweeps, name)?;
        let format = cli.format.map(ExportFormat::from).unwrap_or(entry.format);
        return Ok(Plan {
            name: entry.name.clone(),
            range: YearRange::try_from(entry)?,
            output: cli
                .output
                .clone()
                .or_else(|| entry.output.clone())
                .unwrap_or_else(|| default_output(format)),
            format,
        });
    }

    let start = cli
        .start
        .ok_or_else(|| anyhow!("--start is required without --config"))?;
    let end = cli
        .end
        .ok_or_else(|| anyhow!("--end is required without --config"))?;
    let format = cli.format.map(ExportFormat::from).unwrap_or_default();
    Ok(Plan {
        name: cli.name.clone().unwrap_or_else(|| "sweep".to_string()),
        range: YearRange::new(start, end, cli.step)?,
        output: cli.output.clone().unwrap_or_else(|| default_output(format)),
        format,
    })
}

fn default_output(format: ExportFormat) -> PathBuf {
    match format {
        ExportFormat::Csv => PathBuf::from("artifacts/milankovitch.csv"),
        ExportFormat::Json => PathBuf::from("artifacts/milankovitch.json"),
    }
}
