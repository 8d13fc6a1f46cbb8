//! End-to-end takeoff scenario validation
//!
//! Exercises the full calculation surface against pinned operational
//! scenarios: benign dry takeoffs with flex, overweight rejections, cold
//! short high-elevation fields, contaminated-runway floors, forced TOGA,
//! and the optimal-configuration sweep. Also pins the engine-wide
//! monotonicity properties that the correction kernels must preserve.
//!
//! Run with: `cargo test --test takeoff_scenarios`

use heavy_perf_core::{
    AntiIce, CalcError, LimitingFactor, LineupAngle, PerfCalculator, RunwayCondition,
    TakeoffConfig, TakeoffInputs,
};

fn benign() -> TakeoffInputs {
    TakeoffInputs {
        tow_kg: 380_000.0,
        forward_cg: false,
        config: TakeoffConfig::Conf2,
        tora_m: 3500.0,
        slope_pct: 0.0,
        lineup: LineupAngle::None,
        wind_kt: 0.0,
        elevation_ft: 0.0,
        qnh_hpa: 1013.25,
        oat_c: 15.0,
        anti_ice: AntiIce::Off,
        packs: false,
        force_toga: false,
        runway_condition: RunwayCondition::Dry,
        cg_percent_mac: None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SECTION 1: SEED SCENARIOS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn dry_benign_takeoff_flexes_well_above_oat() {
    let calc = PerfCalculator::new();
    let mut inputs = benign();
    inputs.lineup = LineupAngle::Turn90;
    inputs.wind_kt = 10.0;
    inputs.packs = true;
    inputs.cg_percent_mac = Some(32.0);

    let result = calc.calculate(&inputs);
    assert_eq!(result.error, CalcError::None);
    assert!(result.mtow_kg >= inputs.tow_kg);
    let flex = result.flex_temp_c.expect("a light dry takeoff must flex");
    assert!(flex > 15, "flex {flex} must exceed the OAT");
    assert!(result.speeds.v2_kt >= 150, "V2 {} too low", result.speeds.v2_kt);
    assert!(result.speeds.v1_kt <= result.speeds.vr_kt);
    assert!(result.speeds.vr_kt <= result.speeds.v2_kt);
    assert!(result.stab_trim.is_some(), "CG supplied, trim expected");
}

#[test]
fn standard_day_2000m_carries_400_tonnes() {
    let calc = PerfCalculator::new();
    let mut inputs = benign();
    inputs.tow_kg = 400_000.0;
    inputs.tora_m = 2000.0;

    let result = calc.calculate(&inputs);
    assert_eq!(result.error, CalcError::None);
    assert!(result.mtow_kg >= inputs.tow_kg);
    assert!(result.speeds.v1_kt <= result.speeds.vr_kt);
    assert!(result.speeds.vr_kt <= result.speeds.v2_kt);
}

#[test]
fn overweight_short_runway_is_too_heavy() {
    let calc = PerfCalculator::new();
    let mut inputs = benign();
    inputs.tow_kg = 512_000.0;
    inputs.tora_m = 1200.0;
    inputs.lineup = LineupAngle::Turn90;
    inputs.wind_kt = 10.0;
    inputs.packs = true;

    let result = calc.calculate(&inputs);
    assert_eq!(result.error, CalcError::TooHeavy);
    assert!(
        result.mtow_kg < inputs.tow_kg,
        "reported MTOW {} must undercut the requested weight",
        result.mtow_kg
    );
}

#[test]
fn cold_short_high_field_is_ground_limited_without_flex() {
    let calc = PerfCalculator::new();
    let mut inputs = benign();
    inputs.tow_kg = 320_000.0;
    inputs.config = TakeoffConfig::Conf1;
    inputs.tora_m = 1800.0;
    inputs.elevation_ft = 4000.0;
    inputs.qnh_hpa = 1013.0;
    inputs.oat_c = -20.0;

    let result = calc.calculate(&inputs);
    assert_eq!(result.error, CalcError::None);
    assert!(
        matches!(
            result.oat_limiting_factor,
            LimitingFactor::Vmcg | LimitingFactor::Runway
        ),
        "expected a ground limit, got {:?}",
        result.oat_limiting_factor
    );
    assert_eq!(
        result.flex_temp_c, None,
        "the weight already sits above the Tref limit, flex must be denied"
    );
}

#[test]
fn deep_slush_with_light_weight_is_too_light() {
    let calc = PerfCalculator::new();
    let mut inputs = benign();
    inputs.tow_kg = 305_000.0;
    inputs.config = TakeoffConfig::Conf3;
    inputs.qnh_hpa = 1013.0;
    inputs.oat_c = 10.0;
    inputs.runway_condition = RunwayCondition::Slush13mm;

    let result = calc.calculate(&inputs);
    assert_eq!(result.error, CalcError::TooLight);
}

#[test]
fn forced_toga_uses_the_worst_admissible_wind() {
    let calc = PerfCalculator::new();
    let mut forced = benign();
    forced.tow_kg = 400_000.0;
    forced.tora_m = 3000.0;
    forced.wind_kt = 20.0;
    forced.force_toga = true;

    let mut reference = forced.clone();
    reference.wind_kt = -15.0;
    reference.force_toga = false;

    let forced_result = calc.calculate(&forced);
    let reference_result = calc.calculate(&reference);
    assert_eq!(forced_result.error, CalcError::None);
    assert_eq!(
        forced_result.speeds, reference_result.speeds,
        "TOGA speeds must match the max-tailwind calculation"
    );
    assert_eq!(forced_result.flex_temp_c, None, "TOGA never flexes");
    assert_eq!(forced_result.inputs.wind_kt, 20.0, "inputs echo the request");
}

#[test]
fn optimal_configuration_maximizes_flex_then_minimizes_v1() {
    let calc = PerfCalculator::new();
    let mut inputs = benign();
    inputs.tow_kg = 420_000.0;
    inputs.tora_m = 3000.0;
    inputs.oat_c = 25.0;

    let best = calc.calculate_optimal_configuration(&inputs);
    assert_eq!(best.error, CalcError::None);

    for config in TakeoffConfig::ALL {
        let mut attempt = inputs.clone();
        attempt.config = config;
        let result = calc.calculate(&attempt);
        if result.error != CalcError::None {
            continue;
        }
        let best_flex = best.flex_temp_c.unwrap_or(i32::MIN);
        let this_flex = result.flex_temp_c.unwrap_or(i32::MIN);
        assert!(
            best_flex >= this_flex,
            "{config:?} flexes higher ({this_flex}) than the chosen {:?} ({best_flex})",
            best.inputs.config
        );
        if this_flex == best_flex {
            assert!(
                best.speeds.v1_kt <= result.speeds.v1_kt,
                "flex tie must break toward the lower V1"
            );
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SECTION 2: VALIDATION ERRORS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn validation_rejections_carry_the_exact_code() {
    let calc = PerfCalculator::new();

    let mut structural = benign();
    structural.tow_kg = 520_000.0;
    assert_eq!(calc.calculate(&structural).error, CalcError::StructuralMtow);

    let mut below_oew = benign();
    below_oew.tow_kg = 200_000.0;
    assert_eq!(calc.calculate(&below_oew).error, CalcError::Oew);

    let mut high = benign();
    high.elevation_ft = 14_000.0;
    assert_eq!(calc.calculate(&high).error, CalcError::MaxPressureAlt);

    let mut hot = benign();
    hot.oat_c = 60.0;
    assert_eq!(calc.calculate(&hot).error, CalcError::MaxTemperature);

    let mut tailwind = benign();
    tailwind.wind_kt = -20.0;
    assert_eq!(calc.calculate(&tailwind).error, CalcError::MaxTailwind);

    let mut steep = benign();
    steep.slope_pct = 2.5;
    assert_eq!(calc.calculate(&steep).error, CalcError::MaxSlope);

    let mut bad_cg = benign();
    bad_cg.cg_percent_mac = Some(50.0);
    assert_eq!(calc.calculate(&bad_cg).error, CalcError::CgOutOfLimits);

    let mut nonsense = benign();
    nonsense.tora_m = -5.0;
    assert_eq!(calc.calculate(&nonsense).error, CalcError::InvalidData);

    let mut nan = benign();
    nan.tow_kg = f64::NAN;
    assert_eq!(calc.calculate(&nan).error, CalcError::InvalidData);
}

#[test]
fn validation_precedence_structural_before_temperature() {
    let calc = PerfCalculator::new();
    let mut inputs = benign();
    inputs.tow_kg = 520_000.0;
    inputs.oat_c = 60.0;
    assert_eq!(calc.calculate(&inputs).error, CalcError::StructuralMtow);
}

#[test]
fn boundary_weights_pass_validation() {
    let calc = PerfCalculator::new();
    let mut at_structural = benign();
    at_structural.tow_kg = 512_000.0;
    // Exactly at the structural limit validation passes; the performance
    // limits then decide.
    assert_ne!(calc.calculate(&at_structural).error, CalcError::StructuralMtow);

    let mut at_oew = benign();
    at_oew.tow_kg = 277_000.0;
    assert_ne!(calc.calculate(&at_oew).error, CalcError::Oew);
}

// ═══════════════════════════════════════════════════════════════════════════
// SECTION 3: ENGINE-WIDE PROPERTIES
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn valid_results_keep_mtow_inside_certificate_weights() {
    let calc = PerfCalculator::new();
    for tora in [2000.0, 3000.0, 4000.0] {
        for oat in [-10.0, 15.0, 35.0] {
            let mut inputs = benign();
            inputs.tow_kg = 300_000.0;
            inputs.tora_m = tora;
            inputs.oat_c = oat;
            let result = calc.calculate(&inputs);
            assert_eq!(result.error, CalcError::None);
            assert!(result.mtow_kg >= 277_000.0);
            assert!(result.mtow_kg <= 512_000.0);
        }
    }
}

#[test]
fn longer_runway_never_costs_takeoff_weight() {
    let calc = PerfCalculator::new();
    let mut previous = 0.0;
    for tora in [1600.0, 2000.0, 2500.0, 3000.0, 3500.0, 4000.0, 4500.0] {
        let mut inputs = benign();
        inputs.tow_kg = 290_000.0;
        inputs.tora_m = tora;
        let result = calc.calculate(&inputs);
        assert_eq!(result.error, CalcError::None);
        assert!(
            result.mtow_kg >= previous,
            "MTOW dropped from {previous} to {} at TORA {tora}",
            result.mtow_kg
        );
        previous = result.mtow_kg;
    }
}

#[test]
fn hotter_day_never_gains_takeoff_weight() {
    let calc = PerfCalculator::new();
    let mut previous = f64::INFINITY;
    for oat in [-20.0, -5.0, 5.0, 15.0, 25.0, 35.0, 44.0, 50.0, 55.0] {
        let mut inputs = benign();
        inputs.tow_kg = 290_000.0;
        inputs.oat_c = oat;
        let result = calc.calculate(&inputs);
        assert_eq!(result.error, CalcError::None);
        assert!(
            result.mtow_kg <= previous,
            "MTOW rose from {previous} to {} at OAT {oat}",
            result.mtow_kg
        );
        previous = result.mtow_kg;
    }
}

#[test]
fn more_headwind_never_costs_takeoff_weight() {
    let calc = PerfCalculator::new();
    let mut previous = 0.0;
    for wind in [0.0, 5.0, 10.0, 20.0, 30.0, 40.0, 45.0] {
        let mut inputs = benign();
        inputs.tow_kg = 290_000.0;
        inputs.wind_kt = wind;
        let result = calc.calculate(&inputs);
        assert_eq!(result.error, CalcError::None);
        assert!(
            result.mtow_kg >= previous,
            "MTOW dropped from {previous} to {} at headwind {wind}",
            result.mtow_kg
        );
        previous = result.mtow_kg;
    }
}

#[test]
fn more_tailwind_never_gains_takeoff_weight() {
    let calc = PerfCalculator::new();
    let mut previous = f64::INFINITY;
    for wind in [0.0, -5.0, -10.0, -15.0] {
        let mut inputs = benign();
        inputs.tow_kg = 290_000.0;
        inputs.wind_kt = wind;
        let result = calc.calculate(&inputs);
        assert_eq!(result.error, CalcError::None);
        assert!(
            result.mtow_kg <= previous,
            "MTOW rose from {previous} to {} at tailwind {wind}",
            result.mtow_kg
        );
        previous = result.mtow_kg;
    }
}

#[test]
fn speeds_stay_ordered_across_the_weight_band() {
    let calc = PerfCalculator::new();
    for tow in [290_000.0, 340_000.0, 390_000.0, 440_000.0] {
        for condition in [RunwayCondition::Dry, RunwayCondition::Wet, RunwayCondition::CompactedSnow] {
            let mut inputs = benign();
            inputs.tow_kg = tow;
            inputs.runway_condition = condition;
            let result = calc.calculate(&inputs);
            if result.error != CalcError::None {
                continue;
            }
            assert!(
                result.speeds.v1_kt <= result.speeds.vr_kt
                    && result.speeds.vr_kt <= result.speeds.v2_kt,
                "{condition:?} at {tow}: speeds out of order {:?}",
                result.speeds
            );
        }
    }
}

#[test]
fn wet_runway_never_outperforms_dry() {
    let calc = PerfCalculator::new();
    for tow in [300_000.0, 360_000.0, 420_000.0] {
        let mut dry = benign();
        dry.tow_kg = tow;
        let mut wet = dry.clone();
        wet.runway_condition = RunwayCondition::Wet;
        let dry_result = calc.calculate(&dry);
        let wet_result = calc.calculate(&wet);
        assert!(wet_result.mtow_kg <= dry_result.mtow_kg);
        if let (Some(df), Some(wf)) = (dry_result.flex_temp_c, wet_result.flex_temp_c) {
            assert!(wf <= df, "wet flex {wf} must not exceed dry flex {df}");
        }
    }
}

#[test]
fn forward_cg_credit_applies_when_ground_limited() {
    let calc = PerfCalculator::new();
    // Short runway, ground limited.
    let mut inputs = benign();
    inputs.tow_kg = 290_000.0;
    inputs.tora_m = 1900.0;
    let baseline = calc.calculate(&inputs);
    assert!(matches!(
        baseline.oat_limiting_factor,
        LimitingFactor::Runway | LimitingFactor::Vmcg
    ));
    let mut fwd = inputs.clone();
    fwd.forward_cg = true;
    let credited = calc.calculate(&fwd);
    assert!(
        credited.mtow_kg > baseline.mtow_kg,
        "forward CG must buy takeoff weight when ground limited"
    );
}

#[test]
fn crosswind_limits_per_condition() {
    let calc = PerfCalculator::new();
    assert_eq!(calc.crosswind_limit_kt(RunwayCondition::Dry, 20.0), 35.0);
    assert_eq!(calc.crosswind_limit_kt(RunwayCondition::Wet, -30.0), 35.0);
    assert_eq!(calc.crosswind_limit_kt(RunwayCondition::CompactedSnow, -20.0), 29.0);
    assert_eq!(calc.crosswind_limit_kt(RunwayCondition::CompactedSnow, 0.0), 25.0);
    assert_eq!(calc.crosswind_limit_kt(RunwayCondition::DrySnow100mm, 5.0), 25.0);
    assert_eq!(calc.crosswind_limit_kt(RunwayCondition::Water13mm, 30.0), 20.0);
    assert_eq!(calc.crosswind_limit_kt(RunwayCondition::Slush6mm, -40.0), 20.0);
}
