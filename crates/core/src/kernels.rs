//! Correction kernels
//!
//! Each limit family corrects its base weight through the same subtractive
//! chain: slope, pressure altitude, temperature and wind. Temperature and
//! wind are piecewise in temperature with breakpoints at ISA, Tref and Tmax,
//! and most families scale with the length term
//! `L = adjusted_tora - pressure_alt / K`.
//!
//! Anchors above the flex ceiling are outside the published data. Callers
//! are expected to clamp their probe temperature to Tflexmax; the kernels
//! assert that in debug builds rather than letting a NaN escape.

use crate::core_types::{AntiIce, Parameters, TakeoffConfig};
use crate::tables::takeoff::{FamilyCoefs, WindBranch};
use crate::tables::AircraftLimits;

/// Length term of a family, `adjusted_tora - pressure_alt / K`.
///
/// Families without a published length dependence (brake energy) tabulate
/// zero length slopes, so the returned value is inert for them.
#[must_use]
pub fn length_term_m(family: &FamilyCoefs, params: &Parameters) -> f64 {
    match family.k_divisor {
        Some(k) => params.adjusted_tora_m - params.pressure_alt_ft / k,
        None => 0.0,
    }
}

/// Slope correction (kg, subtractive). Positive coefficients make an uphill
/// runway cost limit weight; the brake-energy family tabulates a negative
/// coefficient so a downhill runway costs instead.
#[must_use]
pub fn slope_correction_kg(
    family: &FamilyCoefs,
    config: TakeoffConfig,
    adjusted_tora_m: f64,
    slope_pct: f64,
) -> f64 {
    1000.0 * family.slope_coef[config.index()] * adjusted_tora_m * slope_pct
}

/// Altitude correction (kg, subtractive), quadratic in pressure altitude.
#[must_use]
pub fn altitude_correction_kg(
    family: &FamilyCoefs,
    config: TakeoffConfig,
    pressure_alt_ft: f64,
) -> f64 {
    let [a1, a2] = family.alt_coef[config.index()];
    1000.0 * pressure_alt_ft * (pressure_alt_ft * a1 + a2)
}

/// Temperature correction (kg, subtractive) at anchor temperature `t_c`.
///
/// Three continuous segments: ISA to Tref, Tref to Tmax, Tmax to Tflexmax.
/// Below ISA the first segment goes negative, returning weight. The anchor
/// must not exceed the flex ceiling.
#[must_use]
pub fn temperature_correction_kg(
    family: &FamilyCoefs,
    config: TakeoffConfig,
    params: &Parameters,
    t_c: f64,
) -> f64 {
    debug_assert!(
        t_c <= params.tflexmax_c + 1e-9,
        "temperature anchor {t_c} above flex ceiling {}",
        params.tflexmax_c
    );
    let c = &family.temp_coef[config.index()];
    let l = length_term_m(family, params);
    let mut delta = if family.k_divisor.is_some() {
        1000.0 * (l * c[0] + c[1]) * (t_c.min(params.tref_c) - params.isa_temp_c)
    } else {
        // Brake energy: constant coefficients, no length term.
        1000.0 * c[0] * (t_c.min(params.tref_c) - params.isa_temp_c)
    };
    if t_c > params.tref_c {
        let seg = t_c.min(params.tmax_c) - params.tref_c;
        delta += if family.k_divisor.is_some() {
            1000.0 * (l * c[2] + c[3]) * seg
        } else {
            1000.0 * c[1] * seg
        };
    }
    if t_c > params.tmax_c && family.k_divisor.is_some() {
        delta += 1000.0 * (l * c[4] + c[5]) * (t_c - params.tmax_c);
    }
    delta
}

/// Wind correction (kg, subtractive) at anchor temperature `t_c`.
///
/// The branch is chosen by the sign of the wind component. If the resulting
/// correction carries the same sign as the wind itself, the tables were
/// extrapolated past their physical range and the correction is zeroed.
#[must_use]
pub fn wind_correction_kg(
    family: &FamilyCoefs,
    config: TakeoffConfig,
    params: &Parameters,
    t_c: f64,
    wind_kt: f64,
) -> f64 {
    if wind_kt == 0.0 {
        return 0.0;
    }
    let branch: &WindBranch = if wind_kt > 0.0 {
        &family.wind_head[config.index()]
    } else {
        &family.wind_tail[config.index()]
    };
    let l = length_term_m(family, params);
    let eval = |pair: [f64; 2]| l * pair[0] + pair[1];

    let mut delta = 1000.0 * eval(branch.primary) * wind_kt;
    delta += 1000.0 * eval(branch.isa_seg) * wind_kt * (t_c.min(params.tref_c) - params.isa_temp_c);
    if t_c > params.tref_c {
        delta += 1000.0 * eval(branch.tref_seg) * wind_kt * (t_c.min(params.tmax_c) - params.tref_c);
    }
    if t_c > params.tmax_c {
        delta += 1000.0 * eval(branch.tmax_seg) * wind_kt * (t_c - params.tmax_c);
    }
    if delta.signum() == wind_kt.signum() {
        // Sign flip guard against extrapolation artifacts at table edges.
        return 0.0;
    }
    delta
}

/// Bleed correction (kg, subtractive). Engine-only anti-ice costs no weight;
/// engine-and-wing and the packs each cost a fixed amount.
#[must_use]
pub fn bleed_correction_kg(limits: &AircraftLimits, anti_ice: AntiIce, packs: bool) -> f64 {
    let ai = match anti_ice {
        AntiIce::EngineWing => limits.engine_wing_anti_ice_bleed_kg,
        AntiIce::Off | AntiIce::Engine => 0.0,
    };
    let pk = if packs { limits.packs_bleed_kg } else { 0.0 };
    ai + pk
}
