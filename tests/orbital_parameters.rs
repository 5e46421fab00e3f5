use approx::assert_abs_diff_eq;
use std::f64::consts::{PI, TAU};

use milankovitch::orbit::{
    compute_orbital_parameters, eccentricity_components, general_precession,
    longitude_of_perihelion, obliquity_degrees,
};
use milankovitch::series::{ECCENTRICITY, OBLIQUITY, PRECESSION, Projector};

// Computed independently from the same series in double precision.
const GOLDEN: [(i32, f64, f64, f64); 4] = [
    (1950, 0.0167239329967327, 23.4462712893979, 102.039049517636),
    (2000, 0.0167036603927656, 23.4397677178855, 102.89549291896),
    (0, 0.0174657190692281, 23.6953729798826, 68.8196686284011),
    (-100_000, 0.039346583316038, 23.42626456055, 327.146662635246),
];

#[test]
fn golden_values_match() {
    for (year, e, obliquity, omega) in GOLDEN {
        let p = compute_orbital_parameters(year);
        assert_abs_diff_eq!(p.eccentricity, e, epsilon = 1e-12);
        assert_abs_diff_eq!(p.obliquity, obliquity, epsilon = 1e-9);
        assert_abs_diff_eq!(p.longitude_perihelion, omega, epsilon = 1e-8);
    }
}

#[test]
fn epoch_is_close_to_published_reference() {
    let p = compute_orbital_parameters(1950);
    assert!((p.eccentricity - 0.01672).abs() < 1e-4);
    assert!((p.obliquity - 23.446).abs() < 1e-3);
}

#[test]
fn epoch_sums_reduce_to_phases() {
    let expected: f64 = OBLIQUITY
        .iter()
        .map(|t| t.amplitude * t.phase.to_radians().cos())
        .sum();
    assert_abs_diff_eq!(OBLIQUITY.sum(0.0, Projector::Cosine), expected, epsilon = 1e-9);
    assert_abs_diff_eq!(
        obliquity_degrees(0.0),
        23.320556 + expected / 3600.0,
        epsilon = 1e-12
    );
}

#[test]
fn offsets_are_not_symmetric_about_epoch() {
    for k in [1, 10, 500, 25_000] {
        let after = compute_orbital_parameters(1950 + k);
        let before = compute_orbital_parameters(1950 - k);
        assert_ne!(after, before, "k = {k}");
        assert_ne!(after.longitude_perihelion, before.longitude_perihelion);
    }
}

#[test]
fn outputs_stay_in_physical_ranges() {
    for year in (-100_000..=100_000).step_by(250) {
        let p = compute_orbital_parameters(year);
        assert!(
            (0.0..0.08).contains(&p.eccentricity),
            "eccentricity {} at {year}",
            p.eccentricity
        );
        assert!(
            (22.0..=25.0).contains(&p.obliquity),
            "obliquity {} at {year}",
            p.obliquity
        );
        assert!(
            (0.0..360.0).contains(&p.longitude_perihelion),
            "longitude of perihelion {} at {year}",
            p.longitude_perihelion
        );
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    for year in [-250_000, -1, 0, 1950, 2024, 731_000] {
        let a = compute_orbital_parameters(year);
        let b = compute_orbital_parameters(year);
        assert_eq!(a.eccentricity.to_bits(), b.eccentricity.to_bits());
        assert_eq!(a.obliquity.to_bits(), b.obliquity.to_bits());
        assert_eq!(
            a.longitude_perihelion.to_bits(),
            b.longitude_perihelion.to_bits()
        );
    }
}

#[test]
fn adjacent_years_change_smoothly() {
    for year in (-20_000..=5_000).step_by(97) {
        let a = compute_orbital_parameters(year);
        let b = compute_orbital_parameters(year + 1);
        assert!((a.eccentricity - b.eccentricity).abs() < 1e-6);
        assert!((a.obliquity - b.obliquity).abs() < 1e-3);
        let d = circular_distance(a.longitude_perihelion, b.longitude_perihelion);
        assert!(d < 0.1, "perihelion jump {d} at {year}");
    }
}

#[test]
fn perihelion_wraps_without_off_by_360() {
    // raw angle a hair below 2π and a hair above 0
    let just_below_turn = longitude_of_perihelion(TAU - PI - 1e-12, 0.0);
    assert!((0.0..360.0).contains(&just_below_turn));
    assert_abs_diff_eq!(just_below_turn, 180.0, epsilon = 1e-9);

    let just_above_zero = longitude_of_perihelion(-PI + 1e-12, 0.0);
    assert!((0.0..360.0).contains(&just_above_zero));
    assert_abs_diff_eq!(just_above_zero, 180.0, epsilon = 1e-9);

    // raw angle one ulp below π: 180 - 180 is a tiny negative that rounds to 360
    let below_pi = f64::from_bits(PI.to_bits() - 1);
    let omega = longitude_of_perihelion(below_pi - PI, 0.0);
    assert!((0.0..360.0).contains(&omega), "got {omega}");

    // many whole turns either side
    let turned = longitude_of_perihelion(0.0, 40.0 * TAU);
    assert!((0.0..360.0).contains(&turned));
    assert!(circular_distance(turned, 0.0) < 1e-9);
    let turned_back = longitude_of_perihelion(PI / 2.0, -40.0 * TAU);
    assert!((0.0..360.0).contains(&turned_back));
    assert!(circular_distance(turned_back, 90.0) < 1e-9);
}

fn circular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

#[test]
fn far_past_uses_full_circle() {
    // precession accumulates to tens of negative turns a million years back
    let dy = -1_000_000.0 - 1950.0;
    assert!(general_precession(dy) < -200.0);
    let p = compute_orbital_parameters(-1_000_000);
    assert!((0.0..360.0).contains(&p.longitude_perihelion));
}

#[test]
fn year_zero_and_deep_past_are_total() {
    for year in [0, -100_000, i32::MIN, i32::MAX] {
        let p = compute_orbital_parameters(year);
        assert!(p.eccentricity.is_finite());
        assert!(p.obliquity.is_finite());
        assert!((0.0..360.0).contains(&p.longitude_perihelion));
    }
    let p = compute_orbital_parameters(-100_000);
    assert!((0.0..0.08).contains(&p.eccentricity));
    assert!((22.0..=25.0).contains(&p.obliquity));
}

#[test]
fn eccentricity_is_norm_of_components() {
    let dy = 5_000.0;
    let components = eccentricity_components(dy);
    let e_sin = ECCENTRICITY.sum(dy, Projector::Sine);
    let e_cos = ECCENTRICITY.sum(dy, Projector::Cosine);
    assert_eq!(components.e_sin_pi, e_sin);
    assert_eq!(components.e_cos_pi, e_cos);
    assert_eq!(
        compute_orbital_parameters(1950 + 5_000).eccentricity,
        (e_sin * e_sin + e_cos * e_cos).sqrt()
    );
}

#[test]
fn precession_table_drives_perihelion() {
    let with_series = general_precession(0.0);
    let fsinfd = PRECESSION.sum(0.0, Projector::Sine);
    assert_abs_diff_eq!(
        with_series,
        (3.392506 + fsinfd / 3600.0).to_radians(),
        epsilon = 1e-12
    );
}
