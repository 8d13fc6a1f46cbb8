//! Flexible-temperature search
//!
//! Reduced thrust is commanded by assuming a temperature higher than the
//! actual OAT. The search finds the highest integer temperature at which the
//! planned weight still clears every limit family, scanning one of three
//! brackets depending on which limit band contains the weight. Anti-ice and
//! packs shave fixed amounts off the found temperature; wet runways shave a
//! further tabulated amount.

use tracing::debug;

use crate::core_types::{
    AntiIce, LimitWeights, LimitingFactor, Parameters, RunwayCondition, TakeoffInputs,
};
use crate::kernels;
use crate::limits::GoverningFactors;
use crate::tables::PerfDatabase;

/// Bracket 3 extends this far past the flex ceiling before the cap brings
/// the result back down.
const SCAN_ABOVE_CEILING_C: f64 = 8.0;

/// Result of a successful flex search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexOutcome {
    pub temp_c: i32,
    pub limiting_factor: LimitingFactor,
}

/// Tvmcg: the OAT above which a wet runway becomes Vmcg-limited.
#[must_use]
pub fn tvmcg_c(db: &PerfDatabase, params: &Parameters) -> f64 {
    let [a, b] = db.takeoff.tvmcg.get(params.headwind_kt);
    a * (params.adjusted_tora_m - params.pressure_alt_ft / 10.0) + b
}

/// Candidate limit weight of one family at a probe temperature: the
/// altitude-corrected weight less the temperature and wind corrections,
/// before bleed. Probes beyond the flex ceiling clamp to it.
fn candidate_tow_kg(
    db: &PerfDatabase,
    inputs: &TakeoffInputs,
    params: &Parameters,
    limits: &[LimitWeights; 4],
    factor: LimitingFactor,
    probe_c: f64,
) -> f64 {
    let t = probe_c.min(params.tflexmax_c);
    let family = db.takeoff.family(factor);
    let dt = kernels::temperature_correction_kg(family, inputs.config, params, t);
    let dw = kernels::wind_correction_kg(family, inputs.config, params, t, params.headwind_kt);
    limits[factor.index()].alt_limit_kg - dt - dw
}

/// Search for the highest admissible flex temperature.
///
/// Returns `None` when flex is not available: contaminated runway, weight
/// already above the Tref limit, no admissible temperature in the bracket,
/// or a final temperature not exceeding the OAT.
#[must_use]
pub fn search(
    db: &PerfDatabase,
    inputs: &TakeoffInputs,
    params: &Parameters,
    limits: &[LimitWeights; 4],
    gov: &GoverningFactors,
) -> Option<FlexOutcome> {
    if inputs.runway_condition.is_contaminated() {
        return None;
    }
    let tow = inputs.tow_kg;
    if tow >= limits[gov.tref.index()].tref.limit_kg {
        return None;
    }

    let (lo, hi, from, to) = if tow > limits[gov.tmax.index()].tmax.limit_no_bleed_kg {
        (params.tref_c, params.tmax_c, gov.tref, gov.tmax)
    } else if tow > limits[gov.tflexmax.index()].tflexmax.limit_no_bleed_kg {
        (params.tmax_c, params.tflexmax_c, gov.tmax, gov.tflexmax)
    } else {
        (
            params.tflexmax_c,
            params.tflexmax_c + SCAN_ABOVE_CEILING_C,
            gov.tflexmax,
            gov.tflexmax,
        )
    };

    let mut found: Option<FlexOutcome> = None;
    let mut probe = lo.ceil() as i32;
    let last = hi.floor() as i32;
    while probe <= last {
        let t = f64::from(probe);
        let from_tow = candidate_tow_kg(db, inputs, params, limits, from, t);
        let to_tow = candidate_tow_kg(db, inputs, params, limits, to, t);
        if tow <= from_tow.min(to_tow) {
            let tighter = if to_tow < from_tow { to } else { from };
            found = Some(FlexOutcome {
                temp_c: probe,
                limiting_factor: tighter,
            });
        }
        probe += 1;
    }
    let raw = found?;

    let mut flex = f64::from(raw.temp_c);
    flex -= match inputs.anti_ice {
        AntiIce::Off => 0.0,
        AntiIce::Engine => 2.0,
        AntiIce::EngineWing => 6.0,
    };
    if inputs.packs {
        flex -= 2.0;
    }
    // Cap at the ceiling and truncate first; the wet delta applies to the
    // already-integer flex.
    let mut flex = flex.min(params.tflexmax_c).trunc() as i32;
    if inputs.runway_condition == RunwayCondition::Wet {
        let table = if inputs.oat_c > params.tvmcg_c {
            &db.takeoff.wet.flex_above
        } else {
            &db.takeoff.wet.flex_below
        };
        let [m, b] = table.get(params.headwind_kt);
        let l = params.adjusted_tora_m - params.pressure_alt_ft / 20.0;
        let delta = (m * l + b).min(0.0);
        flex = (f64::from(flex) + delta).trunc() as i32;
    }
    if f64::from(flex) <= inputs.oat_c {
        return None;
    }
    debug!(flex, factor = ?raw.limiting_factor, "flex temperature found");
    Some(FlexOutcome {
        temp_c: flex,
        limiting_factor: raw.limiting_factor,
    })
}
