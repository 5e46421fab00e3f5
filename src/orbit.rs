//! Earth's orbital (Milankovitch) parameters from the Berger (1978) series.
//!
//! The generated parameters are documented as precise within ±1,000,000
//! years of present. Years outside that window are still evaluated; the
//! result is an extrapolation.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use milankovitch_core::constants::{
    MEAN_OBLIQUITY_DEG, PRECESSION_PHASE_DEG, PRECESSION_RATE_ARCSEC_PER_YEAR,
};
use milankovitch_core::units::{DEG_TO_RAD, arcsec_to_deg, rad_to_deg};
use milankovitch_core::{angle, time};
use milankovitch_series::{ECCENTRICITY, OBLIQUITY, PRECESSION, Projector};

/// Eccentricity, obliquity, and longitude of perihelion at one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalParameters {
    /// Dimensionless eccentricity of the orbital ellipse.
    pub eccentricity: f64,
    /// Axial tilt in degrees.
    pub obliquity: f64,
    /// Angle from the vernal equinox to perihelion, Sun at the vertex, in degrees `[0, 360)`.
    pub longitude_perihelion: f64,
}

impl OrbitalParameters {
    /// Axial tilt in radians.
    pub fn obliquity_radians(&self) -> f64 {
        DEG_TO_RAD * self.obliquity
    }

    /// Precession angle used to orient a rendered orbit, `360 - ϖ` in `[0, 360)`.
    pub fn precession_for_orbit(&self) -> f64 {
        angle::wrap_degrees(360.0 - self.longitude_perihelion)
    }

    /// Climatic precession index `e·sin(ϖ)`.
    pub fn climatic_precession(&self) -> f64 {
        self.eccentricity * (DEG_TO_RAD * self.longitude_perihelion).sin()
    }
}

/// The `e·sin(π)` and `e·cos(π)` sums of the eccentricity series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EccentricityComponents {
    pub e_sin_pi: f64,
    pub e_cos_pi: f64,
}

impl EccentricityComponents {
    /// Eccentricity as the norm of the two components.
    pub fn eccentricity(&self) -> f64 {
        (self.e_sin_pi * self.e_sin_pi + self.e_cos_pi * self.e_cos_pi).sqrt()
    }

    /// Longitude of perihelion relative to the fixed reference, radians in `(-π, π]`.
    pub fn perihelion_angle(&self) -> f64 {
        self.e_sin_pi.atan2(self.e_cos_pi)
    }
}

/// Compute the three Milankovitch parameters for `year` (CE positive, BCE negative).
///
/// Total over every `i32`; no range is enforced.
pub fn compute_orbital_parameters(year: i32) -> OrbitalParameters {
    let dy = time::years_since_epoch(year);

    let eccentricity = eccentricity_components(dy);
    let pie = eccentricity.perihelion_angle();
    let psi = general_precession(dy);

    OrbitalParameters {
        eccentricity: eccentricity.eccentricity(),
        obliquity: obliquity_degrees(dy),
        longitude_perihelion: longitude_of_perihelion(pie, psi),
    }
}

/// Obliquity in degrees: mean obliquity plus the Table 1 cosine series.
pub fn obliquity_degrees(years_since_epoch: f64) -> f64 {
    let sumc = OBLIQUITY.sum(years_since_epoch, Projector::Cosine);
    MEAN_OBLIQUITY_DEG + arcsec_to_deg(sumc)
}

/// Sine and cosine sums of the Table 4 eccentricity series.
pub fn eccentricity_components(years_since_epoch: f64) -> EccentricityComponents {
    EccentricityComponents {
        e_sin_pi: ECCENTRICITY.sum(years_since_epoch, Projector::Sine),
        e_cos_pi: ECCENTRICITY.sum(years_since_epoch, Projector::Cosine),
    }
}

/// General precession in longitude `ψ`, radians.
pub fn general_precession(years_since_epoch: f64) -> f64 {
    let fsinfd = PRECESSION.sum(years_since_epoch, Projector::Sine);
    DEG_TO_RAD
        * (PRECESSION_PHASE_DEG
            + arcsec_to_deg(years_since_epoch * PRECESSION_RATE_ARCSEC_PER_YEAR + fsinfd))
}

/// Combine the perihelion angle `pie` and precession `psi` (radians) into
/// the longitude of perihelion in degrees, `[0, 360)`.
///
/// The raw angle `pie + psi + π` is reduced to `[0, 2π)`, then shifted by
/// 180° to measure from the vernal equinox.
pub fn longitude_of_perihelion(pie: f64, psi: f64) -> f64 {
    let raw = angle::wrap_two_pi(pie + psi + PI);
    let mut omega_bar = rad_to_deg(raw) - 180.0;
    if omega_bar < 0.0 {
        omega_bar += 360.0;
    }
    // a raw angle a hair below π rounds up to exactly 360
    if omega_bar >= 360.0 {
        omega_bar -= 360.0;
    }
    omega_bar
}
