//! Environment resolver
//!
//! Derives the atmospheric and runway intermediates every downstream kernel
//! consumes exactly once: ISA temperature, pressure altitude, the Tref/Tmax
//! temperature anchors, the flex ceiling, the lineup-corrected runway length,
//! and the capped headwind component.

use crate::core_types::{LineupAngle, Parameters};
use crate::tables::PerfDatabase;

/// ISA lapse rate below the tropopause, deg C per foot.
const ISA_LAPSE_C_PER_FT: f64 = 0.0019812;

/// Barometric constants of the pressure-altitude formula.
const PRESSURE_ALT_SCALE_FT: f64 = 145_442.15;
const PRESSURE_ALT_EXPONENT: f64 = 0.190_263;
const STANDARD_QNH_HPA: f64 = 1013.25;

/// Flex ceiling above ISA, deg C.
const TFLEXMAX_ABOVE_ISA_C: f64 = 59.0;

/// ISA temperature at the given altitude (ft).
#[must_use]
pub fn isa_temp_c(altitude_ft: f64) -> f64 {
    15.0 - ISA_LAPSE_C_PER_FT * altitude_ft
}

/// Pressure altitude from field elevation and altimeter setting.
///
/// At standard pressure this reduces to the elevation itself (the
/// `(qnh/1013.25)^k` term becomes exactly 1).
#[must_use]
pub fn pressure_altitude_ft(elevation_ft: f64, qnh_hpa: f64) -> f64 {
    elevation_ft
        + PRESSURE_ALT_SCALE_FT * (1.0 - (qnh_hpa / STANDARD_QNH_HPA).powf(PRESSURE_ALT_EXPONENT))
}

/// Resolve the full parameter set for one calculation.
#[must_use]
pub fn resolve(
    db: &PerfDatabase,
    elevation_ft: f64,
    qnh_hpa: f64,
    wind_kt: f64,
    lineup: LineupAngle,
    tora_m: f64,
) -> Parameters {
    let isa = isa_temp_c(elevation_ft);
    let pressure_alt = pressure_altitude_ft(elevation_ft, qnh_hpa);
    let adjusted_tora = tora_m - db.limits.lineup_distance_m(lineup);
    let headwind = wind_kt.min(db.limits.max_headwind_credit_kt);
    Parameters {
        isa_temp_c: isa,
        pressure_alt_ft: pressure_alt,
        tref_c: db.takeoff.tref_by_elevation.get(elevation_ft),
        tmax_c: db.takeoff.tmax_by_pressure_alt.get(pressure_alt),
        tflexmax_c: isa + TFLEXMAX_ABOVE_ISA_C,
        adjusted_tora_m: adjusted_tora,
        headwind_kt: headwind,
        // Filled by the flex module once the configuration is known.
        tvmcg_c: 0.0,
    }
}
