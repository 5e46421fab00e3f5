use clap::Parser;
use csv::ReaderBuilder;
use log::debug;
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render orbital parameter curves from a sweep CSV"
)]
struct Cli {
    #[arg(long)]
    input: PathBuf,
    #[arg(long, default_value = "artifacts/milankovitch.png")]
    output: PathBuf,
    /// Comma-separated CSV columns to plot, one panel each
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "eccentricity,obliquity_deg,longitude_perihelion_deg"
    )]
    metrics: Vec<String>,
    #[arg(long, default_value_t = 1200)]
    width: u32,
    #[arg(long, default_value_t = 900)]
    height: u32,
}

#[derive(Debug, Clone, PartialEq)]
struct Series {
    column: String,
    points: Vec<(f64, f64)>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let series = read_series(&cli.input, &cli.metrics)?;
    if series.iter().all(|s| s.points.is_empty()) {
        return Err(anyhow::anyhow!("No rows in the provided CSV"));
    }
    debug!(
        "plotting {} panel(s) from {}",
        series.len(),
        cli.input.display()
    );

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 20.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 14.0, FontStyle::Normal);

    let panels = root.split_evenly((series.len(), 1));
    for (idx, (panel, s)) in panels.iter().zip(&series).enumerate() {
        let (x_min, x_max) = padded_bounds(s.points.iter().map(|p| p.0));
        let (y_min, y_max) = padded_bounds(s.points.iter().map(|p| p.1));
        let mut chart = ChartBuilder::on(panel)
            .margin(15)
            .caption(metric_title(&s.column), caption_font.clone())
            .x_label_area_size(40)
            .y_label_area_size(80)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        chart
            .configure_mesh()
            .x_desc("Year")
            .y_desc(metric_axis_label(&s.column))
            .label_style(label_font.clone())
            .x_labels(8)
            .y_labels(5)
            .x_label_formatter(&|y| format!("{y:.0}"))
            .y_label_formatter(&|v| format!("{v:.4}"))
            .draw()?;

        let color = Palette99::pick(idx).to_rgba();
        chart.draw_series(LineSeries::new(
            s.points.iter().copied(),
            ShapeStyle::from(&color).stroke_width(2),
        ))?;
    }

    root.present()?;
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn read_series(path: &Path, metrics: &[String]) -> anyhow::Result<Vec<Series>> {
    if metrics.is_empty() {
        return Err(anyhow::anyhow!("At least one metric column is required"));
    }
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let year_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("year"))
        .ok_or_else(|| anyhow::anyhow!("CSV missing 'year' column"))?;
    let mut columns = Vec::with_capacity(metrics.len());
    for metric in metrics {
        let idx = headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(metric.trim()))
            .ok_or_else(|| anyhow::anyhow!("CSV missing metric column '{}'", metric))?;
        columns.push((idx, headers.get(idx).unwrap_or(metric).to_string()));
    }

    let mut series: Vec<Series> = columns
        .iter()
        .map(|(_, name)| Series {
            column: name.clone(),
            points: Vec::new(),
        })
        .collect();
    for rec in rdr.records() {
        let r = rec?;
        let year: f64 = r.get(year_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        if !year.is_finite() {
            continue;
        }
        for ((idx, _), s) in columns.iter().zip(series.iter_mut()) {
            let value: f64 = r.get(*idx).unwrap_or("").parse().unwrap_or(f64::NAN);
            if value.is_finite() {
                s.points.push((year, value));
            }
        }
    }
    Ok(series)
}

fn padded_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let span = max - min;
    if span.abs() < f64::EPSILON {
        let pad = if min.abs() > 0.0 { min.abs() * 0.01 } else { 1.0 };
        return (min - pad, max + pad);
    }
    (min - span * 0.05, max + span * 0.05)
}

fn metric_title(column: &str) -> String {
    match column.to_lowercase().as_str() {
        "eccentricity" => "Eccentricity".to_string(),
        "obliquity_deg" => "Obliquity".to_string(),
        "longitude_perihelion_deg" => "Longitude of perihelion".to_string(),
        "climatic_precession" => "Climatic precession".to_string(),
        other => other.to_string(),
    }
}

fn metric_axis_label(column: &str) -> String {
    match column.to_lowercase().as_str() {
        "eccentricity" => "e".to_string(),
        "obliquity_deg" | "longitude_perihelion_deg" => "degrees".to_string(),
        "climatic_precession" => "e sin ϖ".to_string(),
        other => other.to_string(),
    }
}
