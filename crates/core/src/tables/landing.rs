//! Landing distance data
//!
//! One row per (runway condition, autobrake mode): a reference distance per
//! flap setting at the 350 t reference weight plus the additive correction
//! coefficients of the landing distance sum. Approach speeds come from the
//! nine-point Vls tables.

use serde::{Deserialize, Serialize};

use crate::core_types::{AutobrakeMode, LandingFlap, RunwayCondition};

use super::lookup::Table1D;

/// Correction row of one (condition, autobrake) cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandingPerfRow {
    /// Unfactored reference distance, flaps full (m).
    pub ref_dist_full_m: f64,
    /// Unfactored reference distance, flaps conf 3 (m).
    pub ref_dist_conf3_m: f64,
    /// Reference landing weight (t).
    pub ref_weight_t: f64,
    /// Distance per tonne above the reference weight (m).
    pub weight_above_m_per_t: f64,
    /// Distance per tonne below the reference weight (m, negative).
    pub weight_below_m_per_t: f64,
    /// Distance per 5 kt of approach speed above target (m).
    pub speed_corr_m_per_5kt: f64,
    /// Distance per 5 kt of tailwind component (m).
    pub wind_corr_m_per_5kt: f64,
    /// Distance per reverser pair when reverse is used (m, negative).
    pub reverser_corr_m: f64,
    /// Distance per 1000 ft of pressure altitude (m).
    pub alt_corr_m_per_1000ft: f64,
    /// Distance per percent of downhill slope (m).
    pub slope_corr_m_per_pct: f64,
    /// Distance per 10 deg C above ISA (m).
    pub temp_corr_m_per_10c: f64,
    /// Fixed addition for the overweight landing procedure (m).
    pub overweight_corr_m: f64,
    /// Fixed addition for autoland, flaps full (m).
    pub autoland_full_m: f64,
    /// Fixed addition for autoland, flaps conf 3 (m).
    pub autoland_conf3_m: f64,
}

impl LandingPerfRow {
    /// Reference distance for a flap setting (m).
    #[must_use]
    pub fn ref_distance_m(&self, flap: LandingFlap) -> f64 {
        match flap {
            LandingFlap::Full => self.ref_dist_full_m,
            LandingFlap::Conf3 => self.ref_dist_conf3_m,
        }
    }

    /// Autoland addition for a flap setting (m).
    #[must_use]
    pub fn autoland_m(&self, flap: LandingFlap) -> f64 {
        match flap {
            LandingFlap::Full => self.autoland_full_m,
            LandingFlap::Conf3 => self.autoland_conf3_m,
        }
    }
}

/// The three autobrake rows of one runway condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConditionRows {
    pub max: LandingPerfRow,
    pub medium: LandingPerfRow,
    pub low: LandingPerfRow,
}

/// All landing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingTables {
    pub dry: ConditionRows,
    pub wet: ConditionRows,
    pub compacted_snow: ConditionRows,
    pub dry_snow_10mm: ConditionRows,
    pub dry_snow_100mm: ConditionRows,
    pub wet_snow_5mm: ConditionRows,
    pub wet_snow_15mm: ConditionRows,
    pub wet_snow_30mm: ConditionRows,
    pub water_6mm: ConditionRows,
    pub water_13mm: ConditionRows,
    pub slush_6mm: ConditionRows,
    pub slush_13mm: ConditionRows,
    /// Lowest selectable speed over weight in tonnes, flaps full (kt).
    pub vls_full: Table1D,
    /// Lowest selectable speed over weight in tonnes, flaps conf 3 (kt).
    pub vls_conf3: Table1D,
}

impl LandingTables {
    /// Correction row for a condition and autobrake mode.
    #[must_use]
    pub fn row(&self, condition: RunwayCondition, mode: AutobrakeMode) -> &LandingPerfRow {
        let rows = match condition {
            RunwayCondition::Dry => &self.dry,
            RunwayCondition::Wet => &self.wet,
            RunwayCondition::CompactedSnow => &self.compacted_snow,
            RunwayCondition::DrySnow10mm => &self.dry_snow_10mm,
            RunwayCondition::DrySnow100mm => &self.dry_snow_100mm,
            RunwayCondition::WetSnow5mm => &self.wet_snow_5mm,
            RunwayCondition::WetSnow15mm => &self.wet_snow_15mm,
            RunwayCondition::WetSnow30mm => &self.wet_snow_30mm,
            RunwayCondition::Water6mm => &self.water_6mm,
            RunwayCondition::Water13mm => &self.water_13mm,
            RunwayCondition::Slush6mm => &self.slush_6mm,
            RunwayCondition::Slush13mm => &self.slush_13mm,
        };
        match mode {
            AutobrakeMode::Max => &rows.max,
            AutobrakeMode::Medium => &rows.medium,
            AutobrakeMode::Low => &rows.low,
        }
    }

    /// Vls table for a flap setting.
    #[must_use]
    pub fn vls(&self, flap: LandingFlap) -> &Table1D {
        match flap {
            LandingFlap::Full => &self.vls_full,
            LandingFlap::Conf3 => &self.vls_conf3,
        }
    }

    #[must_use]
    pub fn heavy_widebody() -> Self {
        Self {
            dry: condition_rows([1750.0, 2050.0, 2450.0], [1930.0, 2260.0, 2700.0]),
            wet: condition_rows([2050.0, 2400.0, 2850.0], [2260.0, 2640.0, 3140.0]),
            compacted_snow: condition_rows([2350.0, 2750.0, 3250.0], [2590.0, 3030.0, 3580.0]),
            dry_snow_10mm: condition_rows([2250.0, 2650.0, 3150.0], [2480.0, 2920.0, 3470.0]),
            dry_snow_100mm: condition_rows([2900.0, 3400.0, 4000.0], [3190.0, 3740.0, 4400.0]),
            wet_snow_5mm: condition_rows([2450.0, 2850.0, 3350.0], [2700.0, 3140.0, 3690.0]),
            wet_snow_15mm: condition_rows([2700.0, 3150.0, 3700.0], [2970.0, 3470.0, 4070.0]),
            wet_snow_30mm: condition_rows([3050.0, 3550.0, 4150.0], [3360.0, 3910.0, 4570.0]),
            water_6mm: condition_rows([2600.0, 3050.0, 3600.0], [2860.0, 3360.0, 3960.0]),
            water_13mm: condition_rows([3000.0, 3500.0, 4100.0], [3300.0, 3850.0, 4510.0]),
            slush_6mm: condition_rows([2650.0, 3100.0, 3650.0], [2920.0, 3410.0, 4020.0]),
            slush_13mm: condition_rows([3050.0, 3550.0, 4150.0], [3360.0, 3910.0, 4570.0]),
            vls_full: Table1D::new(&[
                (270.0, 121.0),
                (300.0, 127.0),
                (330.0, 132.0),
                (360.0, 138.0),
                (390.0, 143.0),
                (420.0, 148.0),
                (450.0, 153.0),
                (480.0, 158.0),
                (512.0, 163.0),
            ]),
            vls_conf3: Table1D::new(&[
                (270.0, 126.0),
                (300.0, 132.0),
                (330.0, 137.0),
                (360.0, 143.0),
                (390.0, 148.0),
                (420.0, 153.0),
                (450.0, 158.0),
                (480.0, 163.0),
                (512.0, 168.0),
            ]),
        }
    }
}

/// Build the three autobrake rows of one condition from its reference
/// distances `[max, medium, low]` per flap. The lighter the deceleration,
/// the more sensitive the roll-out is to excess speed and tailwind.
fn condition_rows(full: [f64; 3], conf3: [f64; 3]) -> ConditionRows {
    ConditionRows {
        max: row(full[0], conf3[0], 60.0, 130.0),
        medium: row(full[1], conf3[1], 70.0, 145.0),
        low: row(full[2], conf3[2], 85.0, 165.0),
    }
}

fn row(ref_full_m: f64, ref_conf3_m: f64, speed_corr: f64, wind_corr: f64) -> LandingPerfRow {
    LandingPerfRow {
        ref_dist_full_m: ref_full_m,
        ref_dist_conf3_m: ref_conf3_m,
        ref_weight_t: 350.0,
        weight_above_m_per_t: 5.5,
        weight_below_m_per_t: -2.5,
        speed_corr_m_per_5kt: speed_corr,
        wind_corr_m_per_5kt: wind_corr,
        reverser_corr_m: -70.0,
        alt_corr_m_per_1000ft: 45.0,
        slope_corr_m_per_pct: 80.0,
        temp_corr_m_per_10c: 70.0,
        overweight_corr_m: 900.0,
        autoland_full_m: 250.0,
        autoland_conf3_m: 290.0,
    }
}
