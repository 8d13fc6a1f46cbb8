//! Landing distance calculator
//!
//! Landing distance is the reference distance of the (condition, autobrake)
//! row plus additive corrections for weight, excess approach speed, tailwind,
//! reverse thrust, altitude, downhill slope, temperature above ISA, the
//! overweight procedure and autoland, the whole sum factored by the mandated
//! 15 percent margin. Only the tailwind component of the reported wind
//! penalizes; only downhill slope penalizes.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::core_types::{AutobrakeMode, LandingDistances, LandingFlap, RunwayCondition};
use crate::environment;
use crate::tables::{LandingPerfRow, PerfDatabase};

/// Regulatory landing distance margin.
const LANDING_MARGIN: f64 = 1.15;

/// A landing distance request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingInputs {
    /// Expected landing weight (kg).
    pub weight_kg: f64,
    /// Landing flap setting.
    pub flap: LandingFlap,
    /// Runway surface state.
    pub condition: RunwayCondition,
    /// Reported wind speed (kt).
    pub wind_speed_kt: f64,
    /// Reported wind direction (deg).
    pub wind_direction_deg: f64,
    /// Runway heading (deg).
    pub runway_heading_deg: f64,
    /// Runway elevation (ft).
    pub elevation_ft: f64,
    /// Altimeter setting (hPa).
    pub qnh_hpa: f64,
    /// Outside air temperature (deg C).
    pub oat_c: f64,
    /// Runway slope in percent; positive is uphill.
    pub slope_pct: f64,
    /// Reverse thrust planned for the roll-out.
    pub reverse_thrust: bool,
    /// Autoland planned.
    pub autoland: bool,
    /// Flown approach speed when it differs from the target (kt).
    pub approach_speed_kt: Option<f64>,
}

/// Target approach speed for the flap setting and weight.
///
/// Below the table's 270 t edge the speed follows the lowest tabulated value
/// scaled by `sqrt(max(0.6, ratio))`; the floor keeps very light weights
/// from producing pathologically slow approaches.
#[must_use]
pub fn approach_speed_target_kt(db: &PerfDatabase, flap: LandingFlap, weight_kg: f64) -> f64 {
    let vls = db.landing.vls(flap);
    let weight_t = weight_kg / 1000.0;
    let floor_t = vls.min_key();
    if weight_t >= floor_t {
        vls.get(weight_t)
    } else {
        vls.get(floor_t) * (weight_t / floor_t).max(0.6).sqrt()
    }
}

/// Tailwind component of the reported wind along the runway (kt, >= 0).
fn tailwind_component_kt(inputs: &LandingInputs) -> f64 {
    let diff = (inputs.wind_direction_deg - inputs.runway_heading_deg).rem_euclid(360.0);
    let delta_deg = if diff > 180.0 { 360.0 - diff } else { diff };
    let delta = delta_deg.to_radians();
    ((PI - delta).cos() * inputs.wind_speed_kt.abs()).max(0.0)
}

/// Distance for one autobrake row (m), margin included.
fn distance_m(db: &PerfDatabase, row: &LandingPerfRow, inputs: &LandingInputs, target_kt: f64) -> f64 {
    let pressure_alt = environment::pressure_altitude_ft(inputs.elevation_ft, inputs.qnh_hpa);
    let isa = environment::isa_temp_c(pressure_alt);

    let delta_weight_t = inputs.weight_kg / 1000.0 - row.ref_weight_t;
    let d_weight = if delta_weight_t >= 0.0 {
        row.weight_above_m_per_t * delta_weight_t
    } else {
        row.weight_below_m_per_t * delta_weight_t.abs()
    };
    let flown = inputs.approach_speed_kt.unwrap_or(target_kt);
    let d_speed = (flown - target_kt).max(0.0) / 5.0 * row.speed_corr_m_per_5kt;
    let d_wind = tailwind_component_kt(inputs) / 5.0 * row.wind_corr_m_per_5kt;
    let d_reverse = if inputs.reverse_thrust {
        row.reverser_corr_m * 2.0
    } else {
        0.0
    };
    let d_alt = (pressure_alt / 1000.0).max(0.0) * row.alt_corr_m_per_1000ft;
    let d_slope = (-inputs.slope_pct).max(0.0) * row.slope_corr_m_per_pct;
    let d_temp = (inputs.oat_c - isa).max(0.0) / 10.0 * row.temp_corr_m_per_10c;
    let d_overweight = if inputs.weight_kg > db.limits.mlw_kg {
        row.overweight_corr_m
    } else {
        0.0
    };
    let d_autoland = if inputs.autoland { row.autoland_m(inputs.flap) } else { 0.0 };

    let sum = row.ref_distance_m(inputs.flap)
        + d_weight
        + d_speed
        + d_wind
        + d_reverse
        + d_alt
        + d_slope
        + d_temp
        + d_overweight
        + d_autoland;
    sum * LANDING_MARGIN
}

/// Landing distances for all three autobrake modes.
#[must_use]
pub fn distances(db: &PerfDatabase, inputs: &LandingInputs) -> LandingDistances {
    let target = approach_speed_target_kt(db, inputs.flap, inputs.weight_kg);
    let row = |mode| db.landing.row(inputs.condition, mode);
    LandingDistances {
        max_autobrake_m: distance_m(db, row(AutobrakeMode::Max), inputs, target),
        medium_autobrake_m: distance_m(db, row(AutobrakeMode::Medium), inputs, target),
        low_autobrake_m: distance_m(db, row(AutobrakeMode::Low), inputs, target),
        target_approach_speed_kt: target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn benign(weight_kg: f64) -> LandingInputs {
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
    fn reference_case_is_exactly_the_margin() {
        let db = PerfDatabase::heavy_widebody();
        let d = distances(&db, &benign(350_000.0));
        assert!(
            (d.max_autobrake_m - 1750.0 * 1.15).abs() < 1e-9,
            "with every delta zero the distance is ref times 1.15, got {}",
            d.max_autobrake_m
        );
        assert!((d.medium_autobrake_m - 2050.0 * 1.15).abs() < 1e-9);
        assert!((d.low_autobrake_m - 2450.0 * 1.15).abs() < 1e-9);
    }

    #[test]
    fn headwind_does_not_shorten_but_tailwind_lengthens() {
        let db = PerfDatabase::heavy_widebody();
        let base = distances(&db, &benign(350_000.0)).max_autobrake_m;

        let mut head = benign(350_000.0);
        head.wind_speed_kt = 15.0;
        head.wind_direction_deg = 0.0; // straight down the runway
        assert!((distances(&db, &head).max_autobrake_m - base).abs() < 1e-9);

        let mut tail = benign(350_000.0);
        tail.wind_speed_kt = 10.0;
        tail.wind_direction_deg = 180.0;
        let with_tail = distances(&db, &tail).max_autobrake_m;
        assert!(
            (with_tail - base - 10.0 / 5.0 * 130.0 * 1.15).abs() < 1e-9,
            "tailwind correction off: {with_tail} vs {base}"
        );
    }

    #[test]
    fn only_downhill_slope_penalizes() {
        let db = PerfDatabase::heavy_widebody();
        let base = distances(&db, &benign(350_000.0)).max_autobrake_m;
        let mut up = benign(350_000.0);
        up.slope_pct = 1.5;
        assert!((distances(&db, &up).max_autobrake_m - base).abs() < 1e-9);
        let mut down = benign(350_000.0);
        down.slope_pct = -1.5;
        assert!(distances(&db, &down).max_autobrake_m > base);
    }

    #[test]
    fn reverse_thrust_credits_distance() {
        let db = PerfDatabase::heavy_widebody();
        let base = distances(&db, &benign(350_000.0)).max_autobrake_m;
        let mut rev = benign(350_000.0);
        rev.reverse_thrust = true;
        assert!(
            (base - distances(&db, &rev).max_autobrake_m - 140.0 * 1.15).abs() < 1e-9,
            "two reverser pairs credit 140 m before margin"
        );
    }

    #[test]
    fn overweight_landing_adds_the_procedure_margin() {
        let db = PerfDatabase::heavy_widebody();
        let heavy = distances(&db, &benign(400_000.0));
        let normal = distances(&db, &benign(394_000.0));
        assert!(
            heavy.max_autobrake_m - normal.max_autobrake_m > 900.0,
            "above MLW the overweight procedure distance applies"
        );
    }

    #[test]
    fn approach_speed_floor_below_table_edge() {
        let db = PerfDatabase::heavy_widebody();
        let at_edge = approach_speed_target_kt(&db, LandingFlap::Full, 270_000.0);
        let below = approach_speed_target_kt(&db, LandingFlap::Full, 100_000.0);
        assert!((at_edge - 121.0).abs() < 1e-9);
        // Far below the table the sqrt floor of 0.6 caps the reduction.
        assert!((below - 121.0 * 0.6_f64.sqrt()).abs() < 1e-9);
        assert!(below > 90.0, "the floor keeps approach speeds sane");
    }

    #[test]
    fn contaminated_surfaces_land_longer() {
        let db = PerfDatabase::heavy_widebody();
        let dry = distances(&db, &benign(350_000.0)).max_autobrake_m;
        let mut wet = benign(350_000.0);
        wet.condition = RunwayCondition::Wet;
        let mut slush = benign(350_000.0);
        slush.condition = RunwayCondition::Slush13mm;
        let wet_d = distances(&db, &wet).max_autobrake_m;
        let slush_d = distances(&db, &slush).max_autobrake_m;
        assert!(dry < wet_d && wet_d < slush_d);
    }
}
