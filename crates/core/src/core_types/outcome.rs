//! Result types: environment parameters, per-family limit weights, and the
//! full takeoff result

use serde::{Deserialize, Serialize};

use super::inputs::{CalcError, LimitingFactor, TakeoffInputs};

/// Environment-derived intermediates, populated once per calculation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Parameters {
    /// ISA temperature at field elevation (deg C).
    pub isa_temp_c: f64,
    /// Pressure altitude (ft).
    pub pressure_alt_ft: f64,
    /// Flat-rating reference temperature (deg C).
    pub tref_c: f64,
    /// Maximum permissible OAT (deg C).
    pub tmax_c: f64,
    /// Highest assumable flex temperature (deg C).
    pub tflexmax_c: f64,
    /// Runway length remaining after the lineup correction (m).
    pub adjusted_tora_m: f64,
    /// Wind component after the headwind credit cap (kt, tailwind negative).
    pub headwind_kt: f64,
    /// Threshold temperature above which a wet runway is Vmcg-limited (deg C).
    pub tvmcg_c: f64,
}

/// Limit weight at one temperature anchor, with its correction intermediates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnchorLimit {
    /// Anchor temperature (deg C).
    pub temp_c: f64,
    /// Temperature correction subtracted at this anchor (kg).
    pub delta_temp_kg: f64,
    /// Wind correction subtracted at this anchor (kg).
    pub delta_wind_kg: f64,
    /// Limit weight before the bleed correction (kg).
    pub limit_no_bleed_kg: f64,
    /// Limit weight with the bleed correction applied (kg).
    pub limit_kg: f64,
}

/// The correction chain of one limit family: base, slope- and
/// altitude-corrected weights, then the four temperature anchors.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LimitWeights {
    /// Uncorrected base limit (kg).
    pub base_kg: f64,
    /// After the slope correction (kg).
    pub slope_limit_kg: f64,
    /// After the altitude correction (kg).
    pub alt_limit_kg: f64,
    /// Anchor at the outside air temperature.
    pub oat: AnchorLimit,
    /// Anchor at Tref.
    pub tref: AnchorLimit,
    /// Anchor at Tmax.
    pub tmax: AnchorLimit,
    /// Anchor at Tflexmax.
    pub tflexmax: AnchorLimit,
}

/// Reconciled and intermediate V-speeds (kt, integer after rounding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VSpeeds {
    pub v1_kt: i32,
    pub vr_kt: i32,
    pub v2_kt: i32,
}

/// Full output of one takeoff calculation.
///
/// Always fully populated as far as the calculation progressed; `error`
/// distinguishes a valid result from a rejected one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TakeoffResult {
    /// Echo of the request.
    pub inputs: TakeoffInputs,
    /// Environment-derived intermediates.
    pub params: Parameters,
    /// Limit chains per family, indexed by [`LimitingFactor::index`].
    pub limits: [LimitWeights; 4],
    /// Governing family at the OAT anchor.
    pub oat_limiting_factor: LimitingFactor,
    /// Governing family at the Tref anchor.
    pub tref_limiting_factor: LimitingFactor,
    /// Governing family at the Tmax anchor.
    pub tmax_limiting_factor: LimitingFactor,
    /// Governing family at the Tflexmax anchor.
    pub tflexmax_limiting_factor: LimitingFactor,
    /// Maximum allowable takeoff weight for the runway state (kg).
    pub mtow_kg: f64,
    /// Flexible temperature, when reduced thrust is available (deg C).
    pub flex_temp_c: Option<i32>,
    /// Family that capped the flex temperature.
    pub flex_limiting_factor: Option<LimitingFactor>,
    /// Final reconciled speeds.
    pub speeds: VSpeeds,
    /// Speeds before wet/contaminated adjustments, for crew cross-check.
    pub dry_speeds: VSpeeds,
    /// Stabilizer trim for the supplied center of gravity, when known.
    pub stab_trim: Option<f64>,
    /// Outcome code; `CalcError::None` for a valid result.
    pub error: CalcError,
}

impl TakeoffResult {
    /// A result rejected before (or during) limit computation.
    #[must_use]
    pub fn rejected(inputs: TakeoffInputs, params: Parameters, error: CalcError) -> Self {
        Self {
            inputs,
            params,
            limits: [LimitWeights::default(); 4],
            oat_limiting_factor: LimitingFactor::Runway,
            tref_limiting_factor: LimitingFactor::Runway,
            tmax_limiting_factor: LimitingFactor::Runway,
            tflexmax_limiting_factor: LimitingFactor::Runway,
            mtow_kg: 0.0,
            flex_temp_c: None,
            flex_limiting_factor: None,
            speeds: VSpeeds::default(),
            dry_speeds: VSpeeds::default(),
            stab_trim: None,
            error,
        }
    }

    /// Whether the calculation produced usable figures.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error == CalcError::None
    }
}

/// Landing distances per autobrake mode, already including the regulatory
/// 1.15 factor (m).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandingDistances {
    pub max_autobrake_m: f64,
    pub medium_autobrake_m: f64,
    pub low_autobrake_m: f64,
    /// Target approach speed for the flap setting and weight (kt).
    pub target_approach_speed_kt: f64,
}
