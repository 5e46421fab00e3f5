//! Batch evaluation of orbital parameters over a range of years.

use log::{debug, warn};
use thiserror::Error;

use milankovitch_config::SweepConfig;
use milankovitch_core::constants::EPOCH_YEAR;
use milankovitch_core::time::within_accuracy_bound;
use milankovitch_export::table::Record;

use crate::orbit::{OrbitalParameters, compute_orbital_parameters};

/// Inclusive range of years walked with a fixed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
    pub step: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SweepError {
    #[error("year step must be positive")]
    ZeroStep,
    #[error("end year {end} precedes start year {start}")]
    Reversed { start: i32, end: i32 },
}

impl YearRange {
    pub fn new(start: i32, end: i32, step: u32) -> Result<Self, SweepError> {
        if step == 0 {
            return Err(SweepError::ZeroStep);
        }
        if end < start {
            return Err(SweepError::Reversed { start, end });
        }
        Ok(Self { start, end, step })
    }

    /// Number of years the range visits.
    pub fn len(&self) -> usize {
        if self.step == 0 || self.end < self.start {
            return 0;
        }
        let span = i64::from(self.end) - i64::from(self.start);
        (span / i64::from(self.step)) as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Years from `start`, stepping by `step`, never past `end`.
    pub fn years(&self) -> impl Iterator<Item = i32> + use<> {
        let start = i64::from(self.start);
        let step = i64::from(self.step);
        (0..self.len() as i64).map(move |i| (start + i * step) as i32)
    }

    /// Whether every visited year lies within the published accuracy window.
    pub fn within_accuracy_bound(&self) -> bool {
        within_accuracy_bound(self.start, EPOCH_YEAR) && within_accuracy_bound(self.end, EPOCH_YEAR)
    }
}

impl TryFrom<&SweepConfig> for YearRange {
    type Error = SweepError;

    fn try_from(value: &SweepConfig) -> Result<Self, Self::Error> {
        YearRange::new(value.start_year, value.end_year, value.step_years)
    }
}

/// Orbital parameters at one year of a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub year: i32,
    pub parameters: OrbitalParameters,
}

impl From<Sample> for Record {
    fn from(sample: Sample) -> Self {
        Record {
            year: sample.year,
            eccentricity: sample.parameters.eccentricity,
            obliquity_deg: sample.parameters.obliquity,
            longitude_perihelion_deg: sample.parameters.longitude_perihelion,
            climatic_precession: sample.parameters.climatic_precession(),
        }
    }
}

/// Evaluate every year of `range`, in order.
///
/// Ranges reaching past the accuracy window are still computed; a warning is logged.
pub fn sweep(range: &YearRange) -> Result<Vec<Sample>, SweepError> {
    let range = YearRange::new(range.start, range.end, range.step)?;
    if !range.within_accuracy_bound() {
        warn!(
            "years {}..={} extend past the ±1,000,000 year accuracy window; values are extrapolated",
            range.start, range.end
        );
    }
    debug!(
        "sweeping {} year(s) from {} to {} step {}",
        range.len(),
        range.start,
        range.end,
        range.step
    );
    Ok(range
        .years()
        .map(|year| Sample {
            year,
            parameters: compute_orbital_parameters(year),
        })
        .collect())
}

/// Sweep and convert straight to export records.
pub fn sweep_records(range: &YearRange) -> Result<Vec<Record>, SweepError> {
    Ok(sweep(range)?.into_iter().map(Record::from).collect())
}
