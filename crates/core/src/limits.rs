//! Limit-weight solver
//!
//! For each limit family the chain runs base, slope-corrected,
//! altitude-corrected, then temperature-plus-wind corrected at the four
//! anchors (OAT, Tref, Tmax, Tflexmax), each with and without the bleed
//! penalty. The governing factor at an anchor is the family with the lowest
//! limit there; ties resolve in declaration order.

use tracing::debug;

use crate::core_types::{
    AnchorLimit, LimitWeights, LimitingFactor, Parameters, TakeoffInputs,
};
use crate::kernels;
use crate::tables::PerfDatabase;

/// Governing factor per temperature anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoverningFactors {
    pub oat: LimitingFactor,
    pub tref: LimitingFactor,
    pub tmax: LimitingFactor,
    pub tflexmax: LimitingFactor,
}

/// Compute the full correction chain of one family.
#[must_use]
pub fn family_chain(
    db: &PerfDatabase,
    inputs: &TakeoffInputs,
    params: &Parameters,
    factor: LimitingFactor,
) -> LimitWeights {
    let family = db.takeoff.family(factor);
    let config = inputs.config;

    let base = family.base_limit_kg(config, params.adjusted_tora_m);
    let slope_limit =
        base - kernels::slope_correction_kg(family, config, params.adjusted_tora_m, inputs.slope_pct);
    let alt_limit =
        slope_limit - kernels::altitude_correction_kg(family, config, params.pressure_alt_ft);

    let bleed = kernels::bleed_correction_kg(&db.limits, inputs.anti_ice, inputs.packs);
    let anchor = |t_c: f64| -> AnchorLimit {
        let dt = kernels::temperature_correction_kg(family, config, params, t_c);
        let dw = kernels::wind_correction_kg(family, config, params, t_c, params.headwind_kt);
        let no_bleed = alt_limit - dt - dw;
        AnchorLimit {
            temp_c: t_c,
            delta_temp_kg: dt,
            delta_wind_kg: dw,
            limit_no_bleed_kg: no_bleed,
            limit_kg: no_bleed - bleed,
        }
    };

    LimitWeights {
        base_kg: base,
        slope_limit_kg: slope_limit,
        alt_limit_kg: alt_limit,
        oat: anchor(inputs.oat_c),
        tref: anchor(params.tref_c),
        tmax: anchor(params.tmax_c),
        tflexmax: anchor(params.tflexmax_c),
    }
}

/// Compute all four family chains.
#[must_use]
pub fn all_families(
    db: &PerfDatabase,
    inputs: &TakeoffInputs,
    params: &Parameters,
) -> [LimitWeights; 4] {
    let mut out = [LimitWeights::default(); 4];
    for factor in LimitingFactor::ALL {
        out[factor.index()] = family_chain(db, inputs, params, factor);
    }
    out
}

/// Governing factor at each anchor: the argmin over families, ties broken in
/// declaration order.
#[must_use]
pub fn governing_factors(limits: &[LimitWeights; 4]) -> GoverningFactors {
    let argmin = |pick: fn(&LimitWeights) -> f64| -> LimitingFactor {
        let mut best = LimitingFactor::Runway;
        for factor in LimitingFactor::ALL {
            if pick(&limits[factor.index()]) < pick(&limits[best.index()]) {
                best = factor;
            }
        }
        best
    };
    let gov = GoverningFactors {
        oat: argmin(|l| l.oat.limit_kg),
        tref: argmin(|l| l.tref.limit_kg),
        tmax: argmin(|l| l.tmax.limit_kg),
        tflexmax: argmin(|l| l.tflexmax.limit_kg),
    };
    debug!(?gov.oat, ?gov.tref, ?gov.tmax, "governing factors resolved");
    gov
}

/// Wet-runway MTOW reduction: the more negative of two affine forms in
/// `L = adjusted_tora - pressure_alt / 20`, clipped non-positive, branched on
/// OAT against Tvmcg.
#[must_use]
pub fn wet_tow_delta_kg(db: &PerfDatabase, inputs: &TakeoffInputs, params: &Parameters) -> f64 {
    let table = if inputs.oat_c > params.tvmcg_c {
        &db.takeoff.wet.tow_above[inputs.config.index()]
    } else {
        &db.takeoff.wet.tow_below[inputs.config.index()]
    };
    let [m1, b1, m2, b2] = table.get(params.headwind_kt);
    let l = params.adjusted_tora_m - params.pressure_alt_ft / 20.0;
    (m1 * l + b1).min(m2 * l + b2).min(0.0)
}

/// Forward-CG MTOW credit, available when the takeoff is runway or Vmcg
/// limited at the OAT anchor.
#[must_use]
pub fn forward_cg_credit_kg(db: &PerfDatabase, inputs: &TakeoffInputs, mtow_kg: f64) -> f64 {
    let [cg0, cg1] = db.takeoff.fwd_cg_credit[inputs.config.index()];
    (cg0 * mtow_kg + cg1).max(0.0)
}
