//! Contaminated-runway adjustments
//!
//! On a contaminated surface the dry MTOW is first reduced by the
//! per-contaminant weight correction, then mapped through the published
//! corrected-to-contaminated table. A corrected weight below the lowest
//! tabulated breakpoint is outside the data (`TooLight`). V-speeds come
//! straight from the contaminant's schedule instead of the dry kernels.

use crate::core_types::{CalcError, TakeoffConfig, VSpeeds};
use crate::tables::ContaminatedPerf;

/// Contaminated MTOW for a configuration, from the dry MTOW.
///
/// Returns the mapped MTOW and the outcome code; `TooLight` when the
/// corrected weight undercuts the data floor (the mapped value then clamps
/// to the lowest published figure).
#[must_use]
pub fn mtow_kg(
    perf: &ContaminatedPerf,
    config: TakeoffConfig,
    adjusted_tora_m: f64,
    dry_mtow_kg: f64,
) -> (f64, CalcError) {
    let i = config.index();
    let corrected = dry_mtow_kg - perf.weight_corr[i].get(adjusted_tora_m);
    let mapped = perf.mtow_map[i].get(corrected);
    if corrected < perf.min_corrected_kg(config) {
        (mapped, CalcError::TooLight)
    } else {
        (mapped, CalcError::None)
    }
}

/// Direct V-speed schedule of the contaminant at the takeoff weight.
#[must_use]
pub fn speeds(perf: &ContaminatedPerf, config: TakeoffConfig, tow_kg: f64) -> VSpeeds {
    let [v1, vr, v2] = perf.vspeeds[config.index()].get(tow_kg / 1000.0);
    VSpeeds {
        v1_kt: v1.round() as i32,
        vr_kt: vr.round() as i32,
        v2_kt: v2.round() as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::RunwayCondition;
    use crate::tables::ContaminatedTables;

    #[test]
    fn deep_slush_floors_a_light_takeoff() {
        let tables = ContaminatedTables::heavy_widebody();
        let perf = tables
            .for_condition(RunwayCondition::Slush13mm)
            .expect("dataset");
        let (_, err) = mtow_kg(perf, TakeoffConfig::Conf3, 3500.0, 452_400.0);
        assert_eq!(err, CalcError::TooLight);
    }

    #[test]
    fn compacted_snow_stays_within_data() {
        let tables = ContaminatedTables::heavy_widebody();
        let perf = tables
            .for_condition(RunwayCondition::CompactedSnow)
            .expect("dataset");
        let (mtow, err) = mtow_kg(perf, TakeoffConfig::Conf2, 3500.0, 468_000.0);
        assert_eq!(err, CalcError::None);
        assert!(mtow < 468_000.0, "contamination must cost takeoff weight");
        assert!(mtow > 350_000.0);
    }

    #[test]
    fn schedule_speeds_are_rounded_and_ordered() {
        let tables = ContaminatedTables::heavy_widebody();
        let perf = tables
            .for_condition(RunwayCondition::Water6mm)
            .expect("dataset");
        let s = speeds(perf, TakeoffConfig::Conf2, 380_000.0);
        assert!(s.v1_kt <= s.vr_kt && s.vr_kt <= s.v2_kt);
        assert!(s.v1_kt > 100 && s.v2_kt < 200);
    }
}
