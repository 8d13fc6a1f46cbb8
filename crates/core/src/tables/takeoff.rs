//! Takeoff limit-family data
//!
//! Each of the four limit families (runway, second segment, brake energy,
//! Vmcg) owns per-configuration base data plus slope, altitude, temperature
//! and wind coefficient tuples, consumed by the correction kernels. Wet
//! runway adjustments and the forward-CG credit live here too.
//!
//! All figures are estimates for a generic heavy widebody, scaled from
//! published data of smaller types. They are engine *data*, not engine code:
//! the whole set round-trips through serde so a better dataset can be swapped
//! in from JSON.

use serde::{Deserialize, Serialize};

use crate::core_types::{LimitingFactor, LineupAngle, TakeoffConfig};

use super::lookup::{Table1D, VectorTable};

/// Certificate weights and operational caps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftLimits {
    /// Operating empty weight (kg).
    pub oew_kg: f64,
    /// Structural maximum takeoff weight (kg).
    pub structural_mtow_kg: f64,
    /// Maximum zero-fuel weight (kg).
    pub mzfw_kg: f64,
    /// Maximum landing weight (kg).
    pub mlw_kg: f64,
    /// Usable fuel capacity (kg).
    pub max_fuel_kg: f64,
    /// Tire limit speed (kt ground speed, applied to V2/Vr).
    pub tire_speed_max_kt: f64,
    /// Maximum tailwind for takeoff (kt, positive number).
    pub max_tailwind_kt: f64,
    /// Headwind component above which no further credit is taken (kt).
    pub max_headwind_credit_kt: f64,
    /// Maximum runway slope magnitude (percent).
    pub max_slope_pct: f64,
    /// Maximum certified pressure altitude (ft).
    pub max_pressure_alt_ft: f64,
    /// MTOW at or below which the forward-CG speed decrement applies (kg).
    pub fwd_cg_speed_threshold_kg: f64,
    /// Runway length consumed lining up with a 90 degree turn (m).
    pub lineup_90_m: f64,
    /// Runway length consumed by a 180 degree backtrack turn (m).
    pub lineup_180_m: f64,
    /// Takeoff weight penalty for air-conditioning packs on (kg).
    pub packs_bleed_kg: f64,
    /// Takeoff weight penalty for engine-and-wing anti-ice (kg).
    pub engine_wing_anti_ice_bleed_kg: f64,
}

impl AircraftLimits {
    #[must_use]
    pub fn heavy_widebody() -> Self {
        Self {
            oew_kg: 277_000.0,
            structural_mtow_kg: 512_000.0,
            mzfw_kg: 373_000.0,
            mlw_kg: 395_000.0,
            max_fuel_kg: 259_470.0,
            tire_speed_max_kt: 195.0,
            max_tailwind_kt: 15.0,
            max_headwind_credit_kt: 40.0,
            max_slope_pct: 2.0,
            max_pressure_alt_ft: 12_500.0,
            fwd_cg_speed_threshold_kg: 473_040.0,
            lineup_90_m: 25.0,
            lineup_180_m: 50.0,
            packs_bleed_kg: 4_700.0,
            engine_wing_anti_ice_bleed_kg: 3_200.0,
        }
    }

    /// Runway length consumed by the lineup maneuver (m).
    #[must_use]
    pub fn lineup_distance_m(&self, lineup: LineupAngle) -> f64 {
        match lineup {
            LineupAngle::None => 0.0,
            LineupAngle::Turn90 => self.lineup_90_m,
            LineupAngle::Turn180 => self.lineup_180_m,
        }
    }
}

/// One branch (head or tail) of a wind correction.
///
/// Every term is an `(l_slope, constant)` pair evaluated as
/// `l_slope * L + constant`; families whose published data carries no
/// length dependence in a term simply tabulate a zero slope. The tail branch
/// of every family except Vmcg has no ISA-to-Tref segment (zero pair).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindBranch {
    /// Primary term, proportional to the wind component alone.
    pub primary: [f64; 2],
    /// Extra term per degree between ISA and Tref (Vmcg head branch only).
    pub isa_seg: [f64; 2],
    /// Extra term per degree above Tref.
    pub tref_seg: [f64; 2],
    /// Extra term per degree above Tmax.
    pub tmax_seg: [f64; 2],
}

/// Coefficients of one limit family across the three configurations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyCoefs {
    /// Base limit weight over adjusted TORA (kg), per configuration.
    pub base: [Table1D; 3],
    /// Slope correction coefficient, per configuration. Positive means an
    /// uphill runway reduces the limit weight.
    pub slope_coef: [f64; 3],
    /// Altitude correction pair `(a1, a2)`, per configuration.
    pub alt_coef: [[f64; 2]; 3],
    /// Temperature sextuple `(c0..c5)`, per configuration.
    pub temp_coef: [[f64; 6]; 3],
    /// Divisor K of `L = adjusted_tora - pressure_alt / K`. `None` for a
    /// family whose temperature data carries no length dependence.
    pub k_divisor: Option<f64>,
    /// Headwind correction branch, per configuration.
    pub wind_head: [WindBranch; 3],
    /// Tailwind correction branch, per configuration.
    pub wind_tail: [WindBranch; 3],
}

impl FamilyCoefs {
    /// Base limit for a configuration at the adjusted TORA.
    #[must_use]
    pub fn base_limit_kg(&self, config: TakeoffConfig, adjusted_tora_m: f64) -> f64 {
        self.base[config.index()].get(adjusted_tora_m)
    }
}

/// Wet-runway adjustments, branched on OAT relative to Tvmcg.
///
/// The TOW reduction is per configuration; the flex and speed deltas are
/// common. All deltas are clipped so they can only reduce the dry figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WetAdjustments {
    /// TOW reduction coefficients `[m1, b1, m2, b2]` over headwind, above Tvmcg.
    pub tow_above: [VectorTable<4>; 3],
    /// TOW reduction coefficients over headwind, at or below Tvmcg.
    pub tow_below: [VectorTable<4>; 3],
    /// Flex reduction `[m, b]` (deg C) over headwind, above Tvmcg.
    pub flex_above: VectorTable<2>,
    /// Flex reduction over headwind, at or below Tvmcg.
    pub flex_below: VectorTable<2>,
    /// `[v1, vr, v2]` deltas (kt) over headwind, above Tvmcg.
    pub speeds_above: VectorTable<3>,
    /// Speed deltas over headwind, at or below Tvmcg.
    pub speeds_below: VectorTable<3>,
}

/// Everything the limit-weight solver and flex search read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TakeoffTables {
    /// Flat-rating reference temperature over field elevation (deg C).
    pub tref_by_elevation: Table1D,
    /// Maximum permissible OAT over pressure altitude (deg C).
    pub tmax_by_pressure_alt: Table1D,
    /// Limit-family coefficients, indexed by [`LimitingFactor::index`].
    pub families: [FamilyCoefs; 4],
    /// Wet-runway adjustments.
    pub wet: WetAdjustments,
    /// Tvmcg affine coefficients `[a, b]` over headwind.
    pub tvmcg: VectorTable<2>,
    /// Forward-CG MTOW credit `(cg0, cg1)` per configuration:
    /// `max(0, cg0 * mtow + cg1)` kilograms.
    pub fwd_cg_credit: [[f64; 2]; 3],
    /// Forward-CG `[v1, vr, v2]` decrement (kt) below the speed threshold.
    pub fwd_cg_speed_delta_kt: [f64; 3],
    /// Stabilizer trim over CG (% MAC).
    pub stab_trim: Table1D,
}

impl TakeoffTables {
    /// Coefficients of one limit family.
    #[must_use]
    pub fn family(&self, factor: LimitingFactor) -> &FamilyCoefs {
        &self.families[factor.index()]
    }

    #[must_use]
    pub fn heavy_widebody() -> Self {
        Self {
            tref_by_elevation: Table1D::new(&[
                (0.0, 44.0),
                (2000.0, 40.0),
                (4000.0, 36.0),
                (6000.0, 32.0),
                (8000.0, 28.0),
                (10_000.0, 24.0),
                (12_500.0, 19.0),
            ]),
            tmax_by_pressure_alt: Table1D::new(&[
                (0.0, 55.0),
                (2000.0, 51.0),
                (4000.0, 47.0),
                (6000.0, 43.0),
                (8000.0, 39.0),
                (10_000.0, 35.0),
                (12_500.0, 30.0),
            ]),
            families: [
                runway_family(),
                second_segment_family(),
                brake_energy_family(),
                vmcg_family(),
            ],
            wet: WetAdjustments::heavy_widebody(),
            tvmcg: VectorTable::new(&[
                (-15.0, [0.0026, 16.0]),
                (0.0, [0.0030, 18.0]),
                (10.0, [0.0034, 19.0]),
            ]),
            fwd_cg_credit: [[0.011, -2800.0], [0.012, -3000.0], [0.013, -3200.0]],
            fwd_cg_speed_delta_kt: [-1.0, -1.0, 0.0],
            stab_trim: Table1D::new(&[(17.0, 6.5), (25.0, 4.5), (33.0, 2.0), (41.0, 0.0)]),
        }
    }
}

impl WetAdjustments {
    #[must_use]
    pub fn heavy_widebody() -> Self {
        Self {
            tow_above: [
                VectorTable::new(&[
                    (-15.0, [-3.3, -4400.0, -0.9, -9900.0]),
                    (0.0, [-2.2, -2200.0, -0.55, -6600.0]),
                    (10.0, [-1.65, -1650.0, -0.45, -5500.0]),
                ]),
                VectorTable::new(&[
                    (-15.0, [-3.0, -4000.0, -0.8, -9000.0]),
                    (0.0, [-2.0, -2000.0, -0.5, -6000.0]),
                    (10.0, [-1.5, -1500.0, -0.4, -5000.0]),
                ]),
                VectorTable::new(&[
                    (-15.0, [-2.7, -3600.0, -0.7, -8100.0]),
                    (0.0, [-1.8, -1800.0, -0.45, -5400.0]),
                    (10.0, [-1.35, -1350.0, -0.35, -4500.0]),
                ]),
            ],
            tow_below: [
                VectorTable::new(&[
                    (-15.0, [-2.2, -3300.0, -0.65, -7700.0]),
                    (0.0, [-1.55, -1650.0, -0.45, -4950.0]),
                    (10.0, [-1.1, -1100.0, -0.35, -3850.0]),
                ]),
                VectorTable::new(&[
                    (-15.0, [-2.0, -3000.0, -0.6, -7000.0]),
                    (0.0, [-1.4, -1500.0, -0.4, -4500.0]),
                    (10.0, [-1.0, -1000.0, -0.3, -3500.0]),
                ]),
                VectorTable::new(&[
                    (-15.0, [-1.8, -2700.0, -0.55, -6300.0]),
                    (0.0, [-1.25, -1350.0, -0.35, -4050.0]),
                    (10.0, [-0.9, -900.0, -0.25, -3150.0]),
                ]),
            ],
            flex_above: VectorTable::new(&[
                (-15.0, [-6.0e-4, -1.0]),
                (0.0, [-4.0e-4, -0.5]),
                (10.0, [-3.0e-4, -0.3]),
            ]),
            flex_below: VectorTable::new(&[
                (-15.0, [-4.5e-4, -0.8]),
                (0.0, [-3.0e-4, -0.4]),
                (10.0, [-2.2e-4, -0.2]),
            ]),
            speeds_above: VectorTable::new(&[
                (-15.0, [-5.0, -2.0, -1.0]),
                (0.0, [-4.0, -2.0, 0.0]),
                (10.0, [-3.0, -1.0, 0.0]),
            ]),
            speeds_below: VectorTable::new(&[
                (-15.0, [-4.0, -2.0, 0.0]),
                (0.0, [-3.0, -1.0, 0.0]),
                (10.0, [-2.0, -1.0, 0.0]),
            ]),
        }
    }
}

fn runway_family() -> FamilyCoefs {
    FamilyCoefs {
        base: [
            Table1D::new(&[
                (1500.0, 265_000.0),
                (2000.0, 390_000.0),
                (2500.0, 436_000.0),
                (3000.0, 466_000.0),
                (3500.0, 488_000.0),
                (4000.0, 508_000.0),
                (4500.0, 523_000.0),
            ]),
            Table1D::new(&[
                (1500.0, 277_000.0),
                (2000.0, 402_000.0),
                (2500.0, 448_000.0),
                (3000.0, 478_000.0),
                (3500.0, 500_000.0),
                (4000.0, 520_000.0),
                (4500.0, 535_000.0),
            ]),
            Table1D::new(&[
                (1500.0, 285_000.0),
                (2000.0, 410_000.0),
                (2500.0, 456_000.0),
                (3000.0, 486_000.0),
                (3500.0, 508_000.0),
                (4000.0, 528_000.0),
                (4500.0, 543_000.0),
            ]),
        ],
        slope_coef: [0.0022, 0.0020, 0.0018],
        alt_coef: [[2.5e-7, 0.0032], [2.5e-7, 0.0030], [2.5e-7, 0.0028]],
        temp_coef: [
            [2.0e-4, 0.60, 2.4e-4, 0.95, 2.8e-4, 1.10],
            [2.0e-4, 0.55, 2.4e-4, 0.90, 2.8e-4, 1.05],
            [2.0e-4, 0.52, 2.4e-4, 0.86, 2.8e-4, 1.00],
        ],
        k_divisor: Some(12.0),
        wind_head: [
            wind_branch([-2.0e-5, -0.11], [0.0, 0.0], [0.0, -2.0e-3], [0.0, -2.5e-3]),
            wind_branch([-2.0e-5, -0.10], [0.0, 0.0], [0.0, -2.0e-3], [0.0, -2.5e-3]),
            wind_branch([-2.0e-5, -0.095], [0.0, 0.0], [0.0, -2.0e-3], [0.0, -2.5e-3]),
        ],
        wind_tail: [
            wind_branch([-6.0e-5, -0.37], [0.0, 0.0], [0.0, -6.0e-3], [0.0, -8.0e-3]),
            wind_branch([-6.0e-5, -0.35], [0.0, 0.0], [0.0, -6.0e-3], [0.0, -8.0e-3]),
            wind_branch([-6.0e-5, -0.33], [0.0, 0.0], [0.0, -6.0e-3], [0.0, -8.0e-3]),
        ],
    }
}

fn second_segment_family() -> FamilyCoefs {
    FamilyCoefs {
        // Climb gradient does not depend on runway length.
        base: [
            flat_base(478_000.0),
            flat_base(462_000.0),
            flat_base(446_000.0),
        ],
        slope_coef: [0.0004, 0.0004, 0.0004],
        alt_coef: [[3.0e-7, 0.0042], [3.0e-7, 0.0042], [3.0e-7, 0.0042]],
        temp_coef: [
            [1.0e-4, 0.95, 1.2e-4, 1.05, 1.5e-4, 1.15],
            [1.0e-4, 0.90, 1.2e-4, 1.00, 1.5e-4, 1.10],
            [1.0e-4, 0.93, 1.2e-4, 1.03, 1.5e-4, 1.12],
        ],
        k_divisor: Some(5.0),
        wind_head: [
            wind_branch([-1.0e-5, -0.055], [0.0, 0.0], [0.0, -1.0e-3], [0.0, -1.5e-3]),
            wind_branch([-1.0e-5, -0.05], [0.0, 0.0], [0.0, -1.0e-3], [0.0, -1.5e-3]),
            wind_branch([-1.0e-5, -0.048], [0.0, 0.0], [0.0, -1.0e-3], [0.0, -1.5e-3]),
        ],
        wind_tail: [
            wind_branch([-3.0e-5, -0.19], [0.0, 0.0], [0.0, -3.0e-3], [0.0, -5.0e-3]),
            wind_branch([-3.0e-5, -0.18], [0.0, 0.0], [0.0, -3.0e-3], [0.0, -5.0e-3]),
            wind_branch([-3.0e-5, -0.17], [0.0, 0.0], [0.0, -3.0e-3], [0.0, -5.0e-3]),
        ],
    }
}

fn brake_energy_family() -> FamilyCoefs {
    FamilyCoefs {
        base: [
            flat_base(507_000.0),
            flat_base(505_000.0),
            flat_base(503_000.0),
        ],
        // Negative: a downhill runway raises brake energy, reducing the limit.
        slope_coef: [-0.0012, -0.0012, -0.0012],
        alt_coef: [[2.0e-7, 0.0036], [2.0e-7, 0.0036], [2.0e-7, 0.0036]],
        temp_coef: [
            [0.50, 0.85, 0.0, 0.0, 0.0, 0.0],
            [0.50, 0.80, 0.0, 0.0, 0.0, 0.0],
            [0.50, 0.75, 0.0, 0.0, 0.0, 0.0],
        ],
        k_divisor: None,
        wind_head: [
            wind_branch([0.0, -0.085], [0.0, 0.0], [0.0, -1.5e-3], [0.0, -2.0e-3]),
            wind_branch([0.0, -0.08], [0.0, 0.0], [0.0, -1.5e-3], [0.0, -2.0e-3]),
            wind_branch([0.0, -0.078], [0.0, 0.0], [0.0, -1.5e-3], [0.0, -2.0e-3]),
        ],
        wind_tail: [
            wind_branch([0.0, -0.31], [0.0, 0.0], [0.0, -5.0e-3], [0.0, -7.0e-3]),
            wind_branch([0.0, -0.30], [0.0, 0.0], [0.0, -5.0e-3], [0.0, -7.0e-3]),
            wind_branch([0.0, -0.29], [0.0, 0.0], [0.0, -5.0e-3], [0.0, -7.0e-3]),
        ],
    }
}

fn vmcg_family() -> FamilyCoefs {
    FamilyCoefs {
        base: [
            Table1D::new(&[
                (1500.0, 290_000.0),
                (2000.0, 380_000.0),
                (2500.0, 425_000.0),
                (3000.0, 462_000.0),
                (3500.0, 492_000.0),
                (4000.0, 515_000.0),
                (4500.0, 530_000.0),
            ]),
            Table1D::new(&[
                (1500.0, 300_000.0),
                (2000.0, 405_000.0),
                (2500.0, 440_000.0),
                (3000.0, 472_000.0),
                (3500.0, 502_000.0),
                (4000.0, 525_000.0),
                (4500.0, 540_000.0),
            ]),
            Table1D::new(&[
                (1500.0, 306_000.0),
                (2000.0, 411_000.0),
                (2500.0, 446_000.0),
                (3000.0, 478_000.0),
                (3500.0, 508_000.0),
                (4000.0, 531_000.0),
                (4500.0, 546_000.0),
            ]),
        ],
        slope_coef: [0.0008, 0.0008, 0.0008],
        alt_coef: [[4.0e-7, 0.0050], [4.0e-7, 0.0050], [4.0e-7, 0.0050]],
        temp_coef: [
            [5.0e-5, 0.70, 6.0e-5, 0.85, 7.0e-5, 0.95],
            [5.0e-5, 0.65, 6.0e-5, 0.80, 7.0e-5, 0.90],
            [5.0e-5, 0.62, 6.0e-5, 0.77, 7.0e-5, 0.87],
        ],
        k_divisor: Some(1.0),
        // The head branch carries the extra ISA-to-Tref segment.
        wind_head: [
            wind_branch([-1.0e-6, -0.125], [0.0, -8.0e-4], [0.0, -2.0e-3], [0.0, -3.0e-3]),
            wind_branch([-1.0e-6, -0.12], [0.0, -8.0e-4], [0.0, -2.0e-3], [0.0, -3.0e-3]),
            wind_branch([-1.0e-6, -0.115], [0.0, -8.0e-4], [0.0, -2.0e-3], [0.0, -3.0e-3]),
        ],
        wind_tail: [
            wind_branch([-3.0e-6, -0.41], [0.0, 0.0], [0.0, -6.0e-3], [0.0, -9.0e-3]),
            wind_branch([-3.0e-6, -0.40], [0.0, 0.0], [0.0, -6.0e-3], [0.0, -9.0e-3]),
            wind_branch([-3.0e-6, -0.39], [0.0, 0.0], [0.0, -6.0e-3], [0.0, -9.0e-3]),
        ],
    }
}

fn wind_branch(
    primary: [f64; 2],
    isa_seg: [f64; 2],
    tref_seg: [f64; 2],
    tmax_seg: [f64; 2],
) -> WindBranch {
    WindBranch {
        primary,
        isa_seg,
        tref_seg,
        tmax_seg,
    }
}

fn flat_base(limit_kg: f64) -> Table1D {
    Table1D::new(&[(1500.0, limit_kg), (4500.0, limit_kg)])
}
