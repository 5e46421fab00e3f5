//! Core constants, unit conversions, and angle helpers shared across the Milankovitch workspace.

/// Reference constants of the Berger (1978) long-term orbital solution.
pub mod constants {
    /// Time origin of every harmonic series (years CE).
    pub const EPOCH_YEAR: i32 = 1950;
    /// Arcseconds per degree.
    pub const ARCSEC_PER_DEGREE: f64 = 3_600.0;
    /// Mean obliquity at epoch in degrees (Berger 1978, eq. 5.5).
    pub const MEAN_OBLIQUITY_DEG: f64 = 23.320556;
    /// Linear rate of general precession in arcseconds per year (eq. 7.5).
    pub const PRECESSION_RATE_ARCSEC_PER_YEAR: f64 = 50.439273;
    /// Constant phase of general precession in degrees (eq. 7.5).
    pub const PRECESSION_PHASE_DEG: f64 = 3.392506;
    /// Published accuracy window of the series, in years either side of present.
    pub const ACCURACY_BOUND_YEARS: i64 = 1_000_000;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::ARCSEC_PER_DEGREE;

    /// Degrees-to-radians factor, `π/180`.
    pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

    /// Convert arcseconds to degrees.
    #[inline]
    pub fn arcsec_to_deg(v: f64) -> f64 {
        v / ARCSEC_PER_DEGREE
    }

    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        DEG_TO_RAD * v
    }

    /// Convert radians to degrees.
    #[inline]
    pub fn rad_to_deg(v: f64) -> f64 {
        v * 180.0 / std::f64::consts::PI
    }
}

/// Angle normalisation.
pub mod angle {
    use std::f64::consts::TAU;

    /// Reduce an angle in radians to `[0, 2π)`.
    ///
    /// Uses the Euclidean remainder so that negative accumulated angles (far
    /// past epochs) land in range instead of keeping the dividend's sign.
    #[inline]
    pub fn wrap_two_pi(radians: f64) -> f64 {
        let wrapped = radians.rem_euclid(TAU);
        if wrapped >= TAU { 0.0 } else { wrapped }
    }

    /// Reduce an angle in degrees to `[0, 360)`.
    #[inline]
    pub fn wrap_degrees(degrees: f64) -> f64 {
        let wrapped = degrees.rem_euclid(360.0);
        if wrapped >= 360.0 { 0.0 } else { wrapped }
    }
}

/// Year arithmetic relative to the series epoch.
pub mod time {
    use super::constants::{ACCURACY_BOUND_YEARS, EPOCH_YEAR};

    /// Signed offset `year - 1950` as a float, exact for every `i32`.
    #[inline]
    pub fn years_since_epoch(year: i32) -> f64 {
        f64::from(year) - f64::from(EPOCH_YEAR)
    }

    /// Whether `year` lies within the published accuracy window of `origin`.
    ///
    /// Callers measure the window from the 1950 epoch (`EPOCH_YEAR`).
    /// Advisory only: the solver accepts every year.
    pub fn within_accuracy_bound(year: i32, origin: i32) -> bool {
        (i64::from(year) - i64::from(origin)).abs() <= ACCURACY_BOUND_YEARS
    }
}
