//! Harmonic series of the Berger (1978) orbital solution.
//!
//! Each series is a table of `(amplitude, frequency, phase)` terms summed as
//! `Σ A·trig(π/180 · (Δy·f/3600 + φ))`, with `Δy` the signed offset in years
//! from the 1950 epoch.

pub mod tables;

use milankovitch_core::constants::ARCSEC_PER_DEGREE;
use milankovitch_core::units::DEG_TO_RAD;

pub use tables::{ECCENTRICITY, OBLIQUITY, PRECESSION};

/// One oscillating component of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicTerm {
    /// Units depend on the table: arcseconds or dimensionless.
    pub amplitude: f64,
    /// Arcseconds per year.
    pub frequency: f64,
    /// Degrees.
    pub phase: f64,
}

impl HarmonicTerm {
    pub const fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }

    /// Term argument in radians at `years_since_epoch`.
    ///
    /// The argument is assembled in degrees and converted last, matching the
    /// reference routine's rounding.
    #[inline]
    pub fn argument_radians(&self, years_since_epoch: f64) -> f64 {
        DEG_TO_RAD * (years_since_epoch * self.frequency / ARCSEC_PER_DEGREE + self.phase)
    }

    /// Weighted contribution `A·trig(argument)`.
    #[inline]
    pub fn contribution(&self, years_since_epoch: f64, projector: Projector) -> f64 {
        self.amplitude * projector.apply(self.argument_radians(years_since_epoch))
    }
}

/// Ordered, immutable set of harmonic terms.
///
/// Term order only affects rounding; sums are always taken in table order.
#[derive(Debug, Clone, Copy)]
pub struct HarmonicTable {
    name: &'static str,
    terms: &'static [HarmonicTerm],
}

impl HarmonicTable {
    pub const fn new(name: &'static str, terms: &'static [HarmonicTerm]) -> Self {
        Self { name, terms }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&HarmonicTerm> {
        self.terms.get(index)
    }

    pub fn terms(&self) -> &'static [HarmonicTerm] {
        self.terms
    }

    pub fn iter(&self) -> std::slice::Iter<'static, HarmonicTerm> {
        self.terms.iter()
    }

    /// Sum the series at `years_since_epoch` with the given projector.
    pub fn sum(&self, years_since_epoch: f64, projector: Projector) -> f64 {
        evaluate(self, years_since_epoch, projector)
    }
}

impl<'a> IntoIterator for &'a HarmonicTable {
    type Item = &'static HarmonicTerm;
    type IntoIter = std::slice::Iter<'static, HarmonicTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// Trigonometric function applied to each term's argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projector {
    Sine,
    Cosine,
}

impl Projector {
    #[inline]
    pub fn apply(self, radians: f64) -> f64 {
        match self {
            Projector::Sine => radians.sin(),
            Projector::Cosine => radians.cos(),
        }
    }
}

/// Evaluate `Σ A·trig(π/180 · (Δy·f/3600 + φ))` over `table`, in table order.
pub fn evaluate(table: &HarmonicTable, years_since_epoch: f64, projector: Projector) -> f64 {
    let mut total = 0.0;
    for term in table {
        total += term.contribution(years_since_epoch, projector);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    static SINGLE: [HarmonicTerm; 1] = [HarmonicTerm::new(2.0, 3_600.0, 90.0)];
    static PAIR: [HarmonicTerm; 2] = [
        HarmonicTerm::new(1.0, 0.0, 0.0),
        HarmonicTerm::new(-1.0, 0.0, 180.0),
    ];

    #[test]
    fn epoch_argument_is_phase_only() {
        let term = HarmonicTerm::new(5.0, 31.609974, 251.9025);
        assert_eq!(term.argument_radians(0.0), DEG_TO_RAD * 251.9025);
    }

    #[test]
    fn frequency_is_arcseconds_per_year() {
        // 3600"/yr advances one degree per year.
        let table = HarmonicTable::new("single", &SINGLE);
        assert_relative_eq!(table.sum(0.0, Projector::Sine), 2.0);
        assert_relative_eq!(table.sum(90.0, Projector::Sine), 0.0, epsilon = 1e-12);
        assert_relative_eq!(table.sum(-90.0, Projector::Cosine), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn terms_are_summed() {
        let table = HarmonicTable::new("pair", &PAIR);
        assert_relative_eq!(evaluate(&table, 0.0, Projector::Cosine), 2.0);
        assert_relative_eq!(evaluate(&table, 0.0, Projector::Sine), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn sum_follows_table_order() {
        let years = -12_345.0;
        let mut expected = 0.0;
        for term in PRECESSION.terms() {
            expected += term.amplitude
                * (DEG_TO_RAD * (years * term.frequency / 3_600.0 + term.phase)).sin();
        }
        assert_eq!(PRECESSION.sum(years, Projector::Sine), expected);
    }

    #[test]
    fn table_accessors() {
        assert_eq!(OBLIQUITY.name(), "obliquity");
        assert!(!ECCENTRICITY.is_empty());
        assert!(ECCENTRICITY.get(19).is_none());
        assert_eq!(PRECESSION.iter().count(), PRECESSION.len());
    }
}
