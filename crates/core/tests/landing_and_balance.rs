//! Landing distance and weight-and-balance validation through the public
//! calculator surface.
//!
//! Run with: `cargo test --test landing_and_balance`

use heavy_perf_core::{
    compute_cg_percent_mac, EnvelopeKind, LandingFlap, LandingInputs, PerfCalculator,
    RunwayCondition,
};

fn benign_landing(weight_kg: f64) -> LandingInputs {
    LandingInputs {
        weight_kg,
        flap: LandingFlap::Full,
        condition: RunwayCondition::Dry,
        wind_speed_kt: 0.0,
        wind_direction_deg: 0.0,
        runway_heading_deg: 0.0,
        elevation_ft: 0.0,
        qnh_hpa: 1013.25,
        oat_c: 15.0,
        slope_pct: 0.0,
        reverse_thrust: false,
        autoland: false,
        approach_speed_kt: None,
    }
}

#[test]
fn reference_landing_is_the_raw_distance_times_the_margin() {
    let calc = PerfCalculator::new();
    let d = calc.calculate_landing_distances(&benign_landing(350_000.0));
    // At the reference weight with calm wind, standard day and no options,
    // every correction is zero and only the 1.15 factor remains.
    assert!((d.max_autobrake_m - 1750.0 * 1.15).abs() < 1e-9);
    assert!((d.medium_autobrake_m - 2050.0 * 1.15).abs() < 1e-9);
    assert!((d.low_autobrake_m - 2450.0 * 1.15).abs() < 1e-9);
    assert!((d.target_approach_speed_kt - 136.0).abs() < 1e-9);
}

#[test]
fn margin_scales_every_correction_too() {
    let calc = PerfCalculator::new();
    let mut inputs = benign_landing(350_000.0);
    inputs.autoland = true;
    let with = calc.calculate_landing_distances(&inputs).max_autobrake_m;
    let without = calc
        .calculate_landing_distances(&benign_landing(350_000.0))
        .max_autobrake_m;
    assert!(
        (with - without - 250.0 * 1.15).abs() < 1e-9,
        "the margin applies to the correction sum, not just the reference"
    );
}

#[test]
fn autobrake_ordering_holds_everywhere() {
    let calc = PerfCalculator::new();
    for condition in [
        RunwayCondition::Dry,
        RunwayCondition::Wet,
        RunwayCondition::WetSnow15mm,
        RunwayCondition::Water13mm,
    ] {
        let mut inputs = benign_landing(380_000.0);
        inputs.condition = condition;
        let d = calc.calculate_landing_distances(&inputs);
        assert!(
            d.max_autobrake_m < d.medium_autobrake_m
                && d.medium_autobrake_m < d.low_autobrake_m,
            "{condition:?}: autobrake ordering violated"
        );
    }
}

#[test]
fn quartering_wind_only_counts_its_tail_component() {
    let calc = PerfCalculator::new();
    let base = calc
        .calculate_landing_distances(&benign_landing(350_000.0))
        .max_autobrake_m;

    // Pure crosswind: no tail component, no penalty.
    let mut cross = benign_landing(350_000.0);
    cross.wind_speed_kt = 20.0;
    cross.wind_direction_deg = 90.0;
    let cross_d = calc.calculate_landing_distances(&cross).max_autobrake_m;
    assert!((cross_d - base).abs() < 1e-6);

    // Quartering tailwind: the projected component penalizes.
    let mut quarter = benign_landing(350_000.0);
    quarter.wind_speed_kt = 20.0;
    quarter.wind_direction_deg = 135.0;
    let quarter_d = calc.calculate_landing_distances(&quarter).max_autobrake_m;
    let full = benign_landing(350_000.0);
    let mut tail = full.clone();
    tail.wind_speed_kt = 20.0;
    tail.wind_direction_deg = 180.0;
    let tail_d = calc.calculate_landing_distances(&tail).max_autobrake_m;
    assert!(base < quarter_d && quarter_d < tail_d);
}

#[test]
fn conf3_flap_needs_more_runway_and_speed() {
    let calc = PerfCalculator::new();
    let full = calc.calculate_landing_distances(&benign_landing(380_000.0));
    let mut c3 = benign_landing(380_000.0);
    c3.flap = LandingFlap::Conf3;
    let conf3 = calc.calculate_landing_distances(&c3);
    assert!(conf3.max_autobrake_m > full.max_autobrake_m);
    assert!(conf3.target_approach_speed_kt > full.target_approach_speed_kt);
}

#[test]
fn mid_envelope_loading_point_passes_all_checks() {
    let calc = PerfCalculator::new();
    let check = calc.check_performance_envelope(31.0, 370_000.0);
    assert!(check.ok, "failing: {:?}", check.failing);
    assert!(calc.is_cg_within_limits(31.0, 370_000.0));
}

#[test]
fn aft_cg_fails_every_envelope() {
    let calc = PerfCalculator::new();
    let check = calc.check_performance_envelope(45.0, 370_000.0);
    assert!(!check.ok);
    assert_eq!(
        check.failing,
        vec![EnvelopeKind::Mtow, EnvelopeKind::Mzfw, EnvelopeKind::Mlw]
    );
    assert!(!calc.is_cg_within_limits(45.0, 370_000.0));
}

#[test]
fn weight_bookkeeping_accepts_a_consistent_load() {
    let calc = PerfCalculator::new();
    let check = calc.check_weights(430_000.0, 340_000.0, 90_000.0);
    assert!(check.ok, "violations: {:?}", check.violations);
}

#[test]
fn cg_percent_mac_is_the_exact_affine_inverse() {
    let mac_start = 28.45;
    let mac_len = 11.3;
    for x in [0.0, 0.17, 0.31, 0.5, 1.0] {
        let pct = compute_cg_percent_mac(mac_start + x * mac_len, mac_start, mac_len);
        assert!((pct - 100.0 * x).abs() < 1e-9);
    }
}

#[test]
fn landing_row_lookup_is_total() {
    // Every condition and autobrake combination resolves to a distance.
    let calc = PerfCalculator::new();
    for condition in [
        RunwayCondition::Dry,
        RunwayCondition::Wet,
        RunwayCondition::CompactedSnow,
        RunwayCondition::DrySnow10mm,
        RunwayCondition::DrySnow100mm,
        RunwayCondition::WetSnow5mm,
        RunwayCondition::WetSnow15mm,
        RunwayCondition::WetSnow30mm,
        RunwayCondition::Water6mm,
        RunwayCondition::Water13mm,
        RunwayCondition::Slush6mm,
        RunwayCondition::Slush13mm,
    ] {
        let mut inputs = benign_landing(360_000.0);
        inputs.condition = condition;
        let d = calc.calculate_landing_distances(&inputs);
        for dist in [d.max_autobrake_m, d.medium_autobrake_m, d.low_autobrake_m] {
            assert!(dist > 1000.0 && dist < 8000.0, "{condition:?}: implausible {dist}");
        }
    }
}
