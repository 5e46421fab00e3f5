//! Export helpers for CSV and JSON artifacts.

pub mod table {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use serde::{Deserialize, Serialize};

    pub const HEADER: &str =
        "year,eccentricity,obliquity_deg,longitude_perihelion_deg,climatic_precession";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard sweep CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// One row of a sweep: the orbital parameters at a single year.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Record {
        pub year: i32,
        pub eccentricity: f64,
        pub obliquity_deg: f64,
        pub longitude_perihelion_deg: f64,
        pub climatic_precession: f64,
    }

    impl Record {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{:.10},{:.10},{:.10},{:.10}",
                self.year,
                self.eccentricity,
                self.obliquity_deg,
                self.longitude_perihelion_deg,
                self.climatic_precession,
            )
        }
    }

    /// Write a header followed by every record, then flush.
    pub fn write_all(writer: &mut dyn Write, records: &[Record]) -> io::Result<()> {
        write_header(writer)?;
        for record in records {
            record.write_to(writer)?;
        }
        writer.flush()
    }
}

pub mod sidecar {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::io::{self, Write};
    use std::path::Path;

    use crate::table::{Record, writer_for_path};

    /// Metadata describing the sweep run.
    #[derive(Debug)]
    pub struct Metadata<'a> {
        pub name: &'a str,
        pub epoch_year: i32,
        pub start_year: i32,
        pub end_year: i32,
        pub step_years: u32,
    }

    #[derive(Serialize)]
    struct SweepDocument<'a> {
        name: &'a str,
        epoch_year: i32,
        start_year: i32,
        end_year: i32,
        step_years: u32,
        samples: &'a [Record],
    }

    /// Write a pretty-printed JSON document of the sweep to `output` (`-` for stdout).
    pub fn write_json(output: &Path, meta: &Metadata<'_>, records: &[Record]) -> io::Result<()> {
        let mut writer = writer_for_path(output)?;
        let document = SweepDocument {
            name: meta.name,
            epoch_year: meta.epoch_year,
            start_year: meta.start_year,
            end_year: meta.end_year,
            step_years: meta.step_years,
            samples: records,
        };
        to_writer_pretty(&mut writer, &document)?;
        writeln!(writer)?;
        writer.flush()
    }
}
