//! V-speed base tables, kernel coefficients, and reconciliation minima
//!
//! Speeds are tabulated over takeoff weight in tonnes. Each of V1/Vr/V2 has
//! two base tables: the ground branch applies when the governing limit is
//! reached on the runway (runway or Vmcg limited), the airborne branch when
//! it is reached in the air (second segment or brake energy limited).
//! Configuration 1 flies the same schedule shifted up, configuration 3
//! shifted down, reflecting the flap effect on scheduled speeds.

use serde::{Deserialize, Serialize};

use super::lookup::{Table1D, Table2D};

/// Base tables of one speed across the three configurations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedSet {
    pub v1: [Table1D; 3],
    pub vr: [Table1D; 3],
    pub v2: [Table1D; 3],
}

/// All V-speed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VSpeedTables {
    /// Base schedule when runway/Vmcg limited.
    pub ground: SpeedSet,
    /// Base schedule when second-segment/brake-energy limited.
    pub airborne: SpeedSet,
    /// Speed increment per km of adjusted TORA beyond 3000 m (kt).
    pub tora_coef_kt_per_km: f64,
    /// Speed increment per 1000 ft of pressure altitude (kt).
    pub alt_coef_kt_per_1000ft: f64,
    /// Speed increment per percent of uphill slope (kt).
    pub slope_coef_kt_per_pct: f64,
    /// Speed increment per knot of headwind component (kt).
    pub wind_coef_kt_per_kt: f64,
    /// Lowest V1 honoring Vmcg over pressure altitude (kt).
    pub min_v1_vmc: Table1D,
    /// Lowest Vr honoring Vmca over pressure altitude (kt).
    pub min_vr_vmc: Table1D,
    /// Lowest V2 honoring Vmca over pressure altitude, per configuration (kt).
    pub min_v2_vmc: [Table1D; 3],
    /// Lowest V2 honoring Vmu over (pressure altitude, weight in tonnes),
    /// per configuration (kt).
    pub min_v2_vmu: [Table2D; 3],
}

impl VSpeedTables {
    #[must_use]
    pub fn heavy_widebody() -> Self {
        // Conf 2 schedules; conf 1 is +4 kt, conf 3 is -3 kt.
        let ground_v1: &[(f64, f64)] = &[
            (250.0, 116.0),
            (300.0, 124.0),
            (350.0, 132.0),
            (400.0, 140.0),
            (450.0, 147.0),
            (512.0, 155.0),
        ];
        let ground_vr: &[(f64, f64)] = &[
            (250.0, 120.0),
            (300.0, 128.0),
            (350.0, 137.0),
            (400.0, 145.0),
            (450.0, 152.0),
            (512.0, 160.0),
        ];
        let ground_v2: &[(f64, f64)] = &[
            (250.0, 131.0),
            (300.0, 139.0),
            (350.0, 147.0),
            (400.0, 155.0),
            (450.0, 162.0),
            (512.0, 170.0),
        ];
        let air_v1: &[(f64, f64)] = &[
            (250.0, 118.0),
            (300.0, 126.0),
            (350.0, 134.0),
            (400.0, 142.0),
            (450.0, 149.0),
            (512.0, 157.0),
        ];
        let air_vr: &[(f64, f64)] = &[
            (250.0, 121.0),
            (300.0, 129.0),
            (350.0, 138.0),
            (400.0, 146.0),
            (450.0, 153.0),
            (512.0, 161.0),
        ];
        let air_v2: &[(f64, f64)] = &[
            (250.0, 132.0),
            (300.0, 140.0),
            (350.0, 148.0),
            (400.0, 156.0),
            (450.0, 163.0),
            (512.0, 171.0),
        ];
        Self {
            ground: SpeedSet {
                v1: config_spread(ground_v1),
                vr: config_spread(ground_vr),
                v2: config_spread(ground_v2),
            },
            airborne: SpeedSet {
                v1: config_spread(air_v1),
                vr: config_spread(air_vr),
                v2: config_spread(air_v2),
            },
            tora_coef_kt_per_km: 2.0,
            alt_coef_kt_per_1000ft: 0.4,
            slope_coef_kt_per_pct: 1.0,
            wind_coef_kt_per_kt: 0.05,
            min_v1_vmc: Table1D::new(&[
                (0.0, 117.0),
                (4000.0, 114.0),
                (8000.0, 109.0),
                (12_500.0, 105.0),
            ]),
            min_vr_vmc: Table1D::new(&[
                (0.0, 121.0),
                (4000.0, 118.0),
                (8000.0, 113.0),
                (12_500.0, 109.0),
            ]),
            min_v2_vmc: [
                Table1D::new(&[
                    (0.0, 130.0),
                    (4000.0, 127.0),
                    (8000.0, 123.0),
                    (12_500.0, 119.0),
                ]),
                Table1D::new(&[
                    (0.0, 126.0),
                    (4000.0, 123.0),
                    (8000.0, 119.0),
                    (12_500.0, 115.0),
                ]),
                Table1D::new(&[
                    (0.0, 124.0),
                    (4000.0, 121.0),
                    (8000.0, 117.0),
                    (12_500.0, 113.0),
                ]),
            ],
            min_v2_vmu: [
                vmu_table(3.0),
                vmu_table(0.0),
                vmu_table(-2.0),
            ],
        }
    }

    /// Base speed tables for the given kernel branch.
    #[must_use]
    pub fn branch(&self, airborne: bool) -> &SpeedSet {
        if airborne {
            &self.airborne
        } else {
            &self.ground
        }
    }
}

/// Spread a conf-2 schedule across the three configurations.
fn config_spread(conf2: &[(f64, f64)]) -> [Table1D; 3] {
    [shifted(conf2, 4.0), shifted(conf2, 0.0), shifted(conf2, -3.0)]
}

fn shifted(points: &[(f64, f64)], dv: f64) -> Table1D {
    let moved: Vec<(f64, f64)> = points.iter().map(|&(k, v)| (k, v + dv)).collect();
    Table1D::new(&moved)
}

/// Vmu-floor V2 over (pressure altitude ft, weight t), offset per config.
fn vmu_table(dv: f64) -> Table2D {
    let sea: Vec<(f64, f64)> = [(250.0, 118.0), (350.0, 135.0), (450.0, 152.0), (512.0, 161.0)]
        .iter()
        .map(|&(k, v)| (k, v + dv))
        .collect();
    let high: Vec<(f64, f64)> = [(250.0, 121.0), (350.0, 138.0), (450.0, 155.0), (512.0, 164.0)]
        .iter()
        .map(|&(k, v)| (k, v + dv))
        .collect();
    Table2D::new(&[(0.0, &sea[..]), (12_500.0, &high[..])])
}
