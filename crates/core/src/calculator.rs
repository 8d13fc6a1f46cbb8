//! Public calculation surface
//!
//! [`PerfCalculator`] owns the immutable table database and exposes the
//! takeoff calculation, the optimal-configuration sweep, landing distances,
//! crosswind advisories and the weight-and-balance helpers. Every call is a
//! pure function of its inputs and the constant tables; the calculator can
//! be shared freely across threads.

use tracing::debug;

use crate::contaminated;
use crate::core_types::{
    CalcError, LandingDistances, LimitingFactor, Parameters, RunwayCondition, TakeoffConfig,
    TakeoffInputs, TakeoffResult, VSpeeds,
};
use crate::envelope::{self, EnvelopeCheck, WeightCheck};
use crate::environment;
use crate::flex;
use crate::landing::{self, LandingInputs};
use crate::limits;
use crate::tables::PerfDatabase;
use crate::vspeeds;

/// Plausible altimeter setting band (hPa); anything outside is bad data, not
/// weather.
const QNH_RANGE_HPA: (f64, f64) = (850.0, 1100.0);

/// The takeoff/landing performance calculator.
#[derive(Debug, Clone)]
pub struct PerfCalculator {
    db: PerfDatabase,
}

impl Default for PerfCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl PerfCalculator {
    /// Calculator over the published heavy-widebody dataset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            db: PerfDatabase::heavy_widebody(),
        }
    }

    /// Calculator over a replacement dataset.
    #[must_use]
    pub fn with_database(db: PerfDatabase) -> Self {
        Self { db }
    }

    /// The table database in use.
    #[must_use]
    pub fn database(&self) -> &PerfDatabase {
        &self.db
    }

    /// Run the full takeoff calculation.
    #[must_use]
    pub fn calculate(&self, inputs: &TakeoffInputs) -> TakeoffResult {
        let db = &self.db;

        if !inputs.is_finite()
            || inputs.tow_kg <= 0.0
            || inputs.tora_m <= 0.0
            || inputs.qnh_hpa < QNH_RANGE_HPA.0
            || inputs.qnh_hpa > QNH_RANGE_HPA.1
        {
            return TakeoffResult::rejected(inputs.clone(), Parameters::default(), CalcError::InvalidData);
        }

        let mut params = environment::resolve(
            db,
            inputs.elevation_ft,
            inputs.qnh_hpa,
            inputs.wind_kt,
            inputs.lineup,
            inputs.tora_m,
        );
        params.tvmcg_c = flex::tvmcg_c(db, &params);

        if let Some(error) = self.validate(inputs, &params) {
            return TakeoffResult::rejected(inputs.clone(), params, error);
        }

        if inputs.force_toga {
            // Full thrust is committed against the worst admissible wind;
            // one bounded re-entry of the same body with the wind replaced.
            let mut toga = inputs.clone();
            toga.wind_kt = -db.limits.max_tailwind_kt;
            toga.force_toga = false;
            let mut result = self.calculate(&toga);
            result.inputs = inputs.clone();
            result.flex_temp_c = None;
            result.flex_limiting_factor = None;
            return result;
        }

        let limit_weights = limits::all_families(db, inputs, &params);
        let gov = limits::governing_factors(&limit_weights);

        // Dry MTOW is the OAT limit of the governing family; wet and
        // contaminated surfaces reduce from there.
        let dry_mtow = limit_weights[gov.oat.index()].oat.limit_kg;
        let mut mtow = dry_mtow;
        let mut error = CalcError::None;
        match inputs.runway_condition {
            RunwayCondition::Dry => {}
            RunwayCondition::Wet => {
                mtow += limits::wet_tow_delta_kg(db, inputs, &params);
            }
            _ => {
                if let Some(perf) = db.contaminated.for_condition(inputs.runway_condition) {
                    let (contaminated_mtow, outcome) =
                        contaminated::mtow_kg(perf, inputs.config, params.adjusted_tora_m, dry_mtow);
                    mtow = contaminated_mtow;
                    error = outcome;
                }
            }
        }
        if inputs.forward_cg
            && matches!(gov.oat, LimitingFactor::Runway | LimitingFactor::Vmcg)
        {
            mtow += limits::forward_cg_credit_kg(db, inputs, mtow);
        }

        let mut result = TakeoffResult {
            inputs: inputs.clone(),
            params,
            limits: limit_weights,
            oat_limiting_factor: gov.oat,
            tref_limiting_factor: gov.tref,
            tmax_limiting_factor: gov.tmax,
            tflexmax_limiting_factor: gov.tflexmax,
            mtow_kg: mtow,
            flex_temp_c: None,
            flex_limiting_factor: None,
            speeds: VSpeeds::default(),
            dry_speeds: VSpeeds::default(),
            stab_trim: inputs
                .cg_percent_mac
                .map(|cg| db.takeoff.stab_trim.get(cg)),
            error,
        };
        if result.error != CalcError::None {
            return result;
        }
        if mtow < inputs.tow_kg {
            result.error = CalcError::TooHeavy;
            return result;
        }

        if let Some(flex) = flex::search(db, inputs, &params, &limit_weights, &gov) {
            result.flex_temp_c = Some(flex.temp_c);
            result.flex_limiting_factor = Some(flex.limiting_factor);
        }

        let mut raw = vspeeds::dry_speeds(
            db,
            inputs.config,
            &params,
            inputs.tow_kg,
            inputs.slope_pct,
            gov.oat.is_airborne(),
        );
        if inputs.forward_cg && mtow <= db.limits.fwd_cg_speed_threshold_kg {
            let [d1, dr, d2] = db.takeoff.fwd_cg_speed_delta_kt;
            raw.v1_kt += d1;
            raw.vr_kt += dr;
            raw.v2_kt += d2;
        }
        result.dry_speeds = raw.rounded();

        let scheduled = match inputs.runway_condition {
            RunwayCondition::Dry => result.dry_speeds,
            RunwayCondition::Wet => {
                let table = if inputs.oat_c > params.tvmcg_c {
                    &db.takeoff.wet.speeds_above
                } else {
                    &db.takeoff.wet.speeds_below
                };
                let [d1, dr, d2] = table.get(params.headwind_kt);
                VSpeeds {
                    v1_kt: (raw.v1_kt + d1).round() as i32,
                    vr_kt: (raw.vr_kt + dr).round() as i32,
                    v2_kt: (raw.v2_kt + d2).round() as i32,
                }
            }
            _ => {
                // for_condition is Some for every contaminated variant; the
                // dry schedule stands in if the dataset were ever absent.
                db.contaminated
                    .for_condition(inputs.runway_condition)
                    .map_or(result.dry_speeds, |perf| {
                        contaminated::speeds(perf, inputs.config, inputs.tow_kg)
                    })
            }
        };
        let (reconciled, speed_error) =
            vspeeds::reconcile(db, inputs.config, &params, inputs.tow_kg, scheduled);
        result.speeds = reconciled;
        result.error = speed_error;

        debug!(
            mtow = result.mtow_kg,
            factor = ?result.oat_limiting_factor,
            flex = ?result.flex_temp_c,
            v1 = result.speeds.v1_kt,
            vr = result.speeds.vr_kt,
            v2 = result.speeds.v2_kt,
            "takeoff calculation complete"
        );
        result
    }

    /// Try every configuration and keep the best valid result: highest flex,
    /// ties broken by lowest V1. Falls back to the last attempt when none
    /// succeed.
    #[must_use]
    pub fn calculate_optimal_configuration(&self, inputs: &TakeoffInputs) -> TakeoffResult {
        let run = |config| {
            let mut attempt = inputs.clone();
            attempt.config = config;
            self.calculate(&attempt)
        };
        let mut best: Option<TakeoffResult> = None;
        let mut last = run(TakeoffConfig::Conf1);
        for config in [TakeoffConfig::Conf2, TakeoffConfig::Conf3] {
            Self::consider(&mut best, last);
            last = run(config);
        }
        Self::consider(&mut best, last.clone());
        best.unwrap_or(last)
    }

    fn consider(best: &mut Option<TakeoffResult>, candidate: TakeoffResult) {
        if candidate.error != CalcError::None {
            return;
        }
        let replace = match best {
            None => true,
            Some(current) => {
                let cand = candidate.flex_temp_c.unwrap_or(i32::MIN);
                let held = current.flex_temp_c.unwrap_or(i32::MIN);
                cand > held || (cand == held && candidate.speeds.v1_kt < current.speeds.v1_kt)
            }
        };
        if replace {
            *best = Some(candidate);
        }
    }

    /// Whether a CG sits inside the takeoff envelope at the given weight.
    #[must_use]
    pub fn is_cg_within_limits(&self, cg_percent_mac: f64, tow_kg: f64) -> bool {
        envelope::is_cg_within_limits(&self.db, cg_percent_mac, tow_kg)
    }

    /// Maximum demonstrated crosswind for a runway state (kt).
    #[must_use]
    pub fn crosswind_limit_kt(&self, condition: RunwayCondition, oat_c: f64) -> f64 {
        match condition {
            RunwayCondition::Dry | RunwayCondition::Wet => 35.0,
            RunwayCondition::CompactedSnow => {
                if oat_c <= -15.0 {
                    29.0
                } else {
                    25.0
                }
            }
            RunwayCondition::DrySnow10mm
            | RunwayCondition::DrySnow100mm
            | RunwayCondition::WetSnow5mm
            | RunwayCondition::WetSnow15mm
            | RunwayCondition::WetSnow30mm => 25.0,
            RunwayCondition::Water6mm
            | RunwayCondition::Water13mm
            | RunwayCondition::Slush6mm
            | RunwayCondition::Slush13mm => 20.0,
        }
    }

    /// Landing distances for all three autobrake modes.
    #[must_use]
    pub fn calculate_landing_distances(&self, inputs: &LandingInputs) -> LandingDistances {
        landing::distances(&self.db, inputs)
    }

    /// Check a loading point against the certificate envelopes.
    #[must_use]
    pub fn check_performance_envelope(&self, cg_percent_mac: f64, weight_kg: f64) -> EnvelopeCheck {
        envelope::check_performance_envelope(&self.db, cg_percent_mac, weight_kg)
    }

    /// Check gross, zero-fuel and fuel weights for consistency.
    #[must_use]
    pub fn check_weights(&self, gross_kg: f64, zfw_kg: f64, fuel_kg: f64) -> WeightCheck {
        envelope::check_weights(&self.db, gross_kg, zfw_kg, fuel_kg)
    }

    /// Input validation, in fixed precedence order. `None` means valid.
    fn validate(&self, inputs: &TakeoffInputs, params: &Parameters) -> Option<CalcError> {
        let limits = &self.db.limits;
        if params.adjusted_tora_m <= 0.0 {
            return Some(CalcError::InvalidData);
        }
        if inputs.tow_kg > limits.structural_mtow_kg {
            return Some(CalcError::StructuralMtow);
        }
        if params.pressure_alt_ft > limits.max_pressure_alt_ft {
            return Some(CalcError::MaxPressureAlt);
        }
        if inputs.oat_c > params.tmax_c {
            return Some(CalcError::MaxTemperature);
        }
        if inputs.tow_kg < limits.oew_kg {
            return Some(CalcError::Oew);
        }
        if let Some(cg) = inputs.cg_percent_mac {
            if !self.is_cg_within_limits(cg, inputs.tow_kg) {
                return Some(CalcError::CgOutOfLimits);
            }
        }
        if inputs.wind_kt < -limits.max_tailwind_kt {
            return Some(CalcError::MaxTailwind);
        }
        if inputs.slope_pct.abs() > limits.max_slope_pct {
            return Some(CalcError::MaxSlope);
        }
        None
    }
}

/// Convert a longitudinal position to percent of the mean aerodynamic chord.
#[must_use]
pub fn compute_cg_percent_mac(position_m: f64, mac_start_m: f64, mac_length_m: f64) -> f64 {
    envelope::compute_cg_percent_mac(position_m, mac_start_m, mac_length_m)
}
