//! Long-term variations of Earth's orbit (Berger 1978).
//!
//! The solver in [`orbit`] turns a calendar year into eccentricity,
//! obliquity, and longitude of perihelion. [`sweep`] batches it over ranges
//! of years for export and plotting; the member crates are re-exported so
//! front-ends only need this one dependency.

pub mod orbit;
pub mod sweep;

pub use milankovitch_config as config;
pub use milankovitch_core::{angle, constants, time, units};
pub use milankovitch_export as export;
pub use milankovitch_series as series;

pub use orbit::{OrbitalParameters, compute_orbital_parameters};
