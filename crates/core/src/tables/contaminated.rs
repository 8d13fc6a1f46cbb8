//! Standing-contamination performance data
//!
//! Each contaminant depth gets its own dataset, built by a dedicated
//! constructor: a takeoff-weight correction over adjusted TORA, the mapping
//! from corrected weight to the contaminated MTOW, and the direct V-speed
//! schedule over takeoff weight. The lowest breakpoint of the MTOW mapping is
//! the floor below which the published data simply does not go (`TooLight`).

use serde::{Deserialize, Serialize};

use crate::core_types::{RunwayCondition, TakeoffConfig};

use super::lookup::{Table1D, VectorTable};

/// Performance data of one contaminant, per configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContaminatedPerf {
    /// Weight subtracted from the dry MTOW, over adjusted TORA (kg).
    pub weight_corr: [Table1D; 3],
    /// Corrected weight to contaminated MTOW mapping (kg).
    pub mtow_map: [Table1D; 3],
    /// `[v1, vr, v2]` over takeoff weight in tonnes (kt).
    pub vspeeds: [VectorTable<3>; 3],
}

impl ContaminatedPerf {
    /// Weight floor of the published data for a configuration (kg).
    #[must_use]
    pub fn min_corrected_kg(&self, config: TakeoffConfig) -> f64 {
        self.mtow_map[config.index()].min_key()
    }

    fn build(
        wc: [[(f64, f64); 3]; 3],
        map: [[(f64, f64); 3]; 3],
        speed_offset_kt: f64,
    ) -> Self {
        Self {
            weight_corr: [
                Table1D::new(&wc[0]),
                Table1D::new(&wc[1]),
                Table1D::new(&wc[2]),
            ],
            mtow_map: [
                Table1D::new(&map[0]),
                Table1D::new(&map[1]),
                Table1D::new(&map[2]),
            ],
            vspeeds: [
                contaminated_speed_table(3.0 + speed_offset_kt),
                contaminated_speed_table(speed_offset_kt),
                contaminated_speed_table(-3.0 + speed_offset_kt),
            ],
        }
    }

    /// Thin compacted snow, good braking action.
    #[must_use]
    pub fn compacted_snow() -> Self {
        Self::build(
            [
                [(1500.0, 20_000.0), (3000.0, 33_000.0), (4500.0, 46_000.0)],
                [(1500.0, 18_000.0), (3000.0, 30_000.0), (4500.0, 42_000.0)],
                [(1500.0, 17_000.0), (3000.0, 28_000.0), (4500.0, 39_000.0)],
            ],
            [
                [(300_000.0, 288_000.0), (420_000.0, 398_000.0), (480_000.0, 452_000.0)],
                [(310_000.0, 295_000.0), (420_000.0, 400_000.0), (480_000.0, 455_000.0)],
                [(315_000.0, 298_000.0), (420_000.0, 402_000.0), (480_000.0, 457_000.0)],
            ],
            0.0,
        )
    }

    /// Up to 10 mm of dry snow.
    #[must_use]
    pub fn dry_snow_10mm() -> Self {
        Self::build(
            [
                [(1500.0, 17_000.0), (3000.0, 29_000.0), (4500.0, 41_000.0)],
                [(1500.0, 15_000.0), (3000.0, 26_000.0), (4500.0, 37_000.0)],
                [(1500.0, 14_000.0), (3000.0, 24_000.0), (4500.0, 34_000.0)],
            ],
            [
                [(295_000.0, 280_000.0), (420_000.0, 395_000.0), (480_000.0, 448_000.0)],
                [(305_000.0, 290_000.0), (420_000.0, 398_000.0), (480_000.0, 450_000.0)],
                [(310_000.0, 293_000.0), (420_000.0, 400_000.0), (480_000.0, 452_000.0)],
            ],
            0.0,
        )
    }

    /// Up to 100 mm of dry snow.
    #[must_use]
    pub fn dry_snow_100mm() -> Self {
        Self::build(
            [
                [(1500.0, 50_000.0), (3000.0, 82_000.0), (4500.0, 114_000.0)],
                [(1500.0, 45_000.0), (3000.0, 75_000.0), (4500.0, 105_000.0)],
                [(1500.0, 42_000.0), (3000.0, 70_000.0), (4500.0, 98_000.0)],
            ],
            [
                [(330_000.0, 262_000.0), (420_000.0, 340_000.0), (480_000.0, 388_000.0)],
                [(340_000.0, 268_000.0), (420_000.0, 345_000.0), (480_000.0, 392_000.0)],
                [(350_000.0, 275_000.0), (420_000.0, 348_000.0), (480_000.0, 395_000.0)],
            ],
            -2.0,
        )
    }

    /// Up to 5 mm of wet snow.
    #[must_use]
    pub fn wet_snow_5mm() -> Self {
        Self::build(
            [
                [(1500.0, 22_000.0), (3000.0, 37_000.0), (4500.0, 52_000.0)],
                [(1500.0, 20_000.0), (3000.0, 34_000.0), (4500.0, 48_000.0)],
                [(1500.0, 18_000.0), (3000.0, 31_000.0), (4500.0, 44_000.0)],
            ],
            [
                [(300_000.0, 284_000.0), (420_000.0, 390_000.0), (480_000.0, 442_000.0)],
                [(310_000.0, 290_000.0), (420_000.0, 393_000.0), (480_000.0, 445_000.0)],
                [(315_000.0, 293_000.0), (420_000.0, 395_000.0), (480_000.0, 447_000.0)],
            ],
            0.0,
        )
    }

    /// Up to 15 mm of wet snow.
    #[must_use]
    pub fn wet_snow_15mm() -> Self {
        Self::build(
            [
                [(1500.0, 39_000.0), (3000.0, 64_000.0), (4500.0, 89_000.0)],
                [(1500.0, 35_000.0), (3000.0, 58_000.0), (4500.0, 81_000.0)],
                [(1500.0, 32_000.0), (3000.0, 54_000.0), (4500.0, 75_000.0)],
            ],
            [
                [(315_000.0, 272_000.0), (420_000.0, 362_000.0), (480_000.0, 410_000.0)],
                [(325_000.0, 278_000.0), (420_000.0, 365_000.0), (480_000.0, 413_000.0)],
                [(330_000.0, 281_000.0), (420_000.0, 367_000.0), (480_000.0, 415_000.0)],
            ],
            -1.0,
        )
    }

    /// Up to 30 mm of wet snow.
    #[must_use]
    pub fn wet_snow_30mm() -> Self {
        Self::build(
            [
                [(1500.0, 61_000.0), (3000.0, 99_000.0), (4500.0, 137_000.0)],
                [(1500.0, 55_000.0), (3000.0, 90_000.0), (4500.0, 125_000.0)],
                [(1500.0, 51_000.0), (3000.0, 84_000.0), (4500.0, 116_000.0)],
            ],
            [
                [(335_000.0, 255_000.0), (420_000.0, 330_000.0), (480_000.0, 376_000.0)],
                [(345_000.0, 260_000.0), (420_000.0, 333_000.0), (480_000.0, 379_000.0)],
                [(355_000.0, 266_000.0), (420_000.0, 336_000.0), (480_000.0, 382_000.0)],
            ],
            -2.0,
        )
    }

    /// Up to 6 mm of standing water.
    #[must_use]
    pub fn standing_water_6mm() -> Self {
        Self::build(
            [
                [(1500.0, 33_000.0), (3000.0, 55_000.0), (4500.0, 77_000.0)],
                [(1500.0, 30_000.0), (3000.0, 50_000.0), (4500.0, 70_000.0)],
                [(1500.0, 28_000.0), (3000.0, 46_000.0), (4500.0, 64_000.0)],
            ],
            [
                [(310_000.0, 275_000.0), (420_000.0, 370_000.0), (480_000.0, 420_000.0)],
                [(320_000.0, 281_000.0), (420_000.0, 373_000.0), (480_000.0, 423_000.0)],
                [(325_000.0, 284_000.0), (420_000.0, 375_000.0), (480_000.0, 425_000.0)],
            ],
            -1.0,
        )
    }

    /// Up to 13 mm of standing water.
    #[must_use]
    pub fn standing_water_13mm() -> Self {
        Self::build(
            [
                [(1500.0, 66_000.0), (3000.0, 110_000.0), (4500.0, 154_000.0)],
                [(1500.0, 60_000.0), (3000.0, 100_000.0), (4500.0, 140_000.0)],
                [(1500.0, 56_000.0), (3000.0, 93_000.0), (4500.0, 130_000.0)],
            ],
            [
                [(335_000.0, 250_000.0), (420_000.0, 322_000.0), (480_000.0, 368_000.0)],
                [(345_000.0, 256_000.0), (420_000.0, 325_000.0), (480_000.0, 371_000.0)],
                [(355_000.0, 262_000.0), (420_000.0, 328_000.0), (480_000.0, 374_000.0)],
            ],
            -2.0,
        )
    }

    /// Up to 6 mm of slush.
    #[must_use]
    pub fn slush_6mm() -> Self {
        Self::build(
            [
                [(1500.0, 35_000.0), (3000.0, 59_000.0), (4500.0, 83_000.0)],
                [(1500.0, 32_000.0), (3000.0, 54_000.0), (4500.0, 76_000.0)],
                [(1500.0, 30_000.0), (3000.0, 50_000.0), (4500.0, 70_000.0)],
            ],
            [
                [(312_000.0, 272_000.0), (420_000.0, 365_000.0), (480_000.0, 415_000.0)],
                [(322_000.0, 278_000.0), (420_000.0, 368_000.0), (480_000.0, 418_000.0)],
                [(327_000.0, 281_000.0), (420_000.0, 370_000.0), (480_000.0, 420_000.0)],
            ],
            -1.0,
        )
    }

    /// Up to 13 mm of slush.
    #[must_use]
    pub fn slush_13mm() -> Self {
        Self::build(
            [
                [(1500.0, 66_000.0), (3000.0, 111_000.0), (4500.0, 156_000.0)],
                [(1500.0, 62_000.0), (3000.0, 104_000.0), (4500.0, 146_000.0)],
                [(1500.0, 58_000.0), (3000.0, 97_000.0), (4500.0, 136_000.0)],
            ],
            [
                [(330_000.0, 248_000.0), (420_000.0, 320_000.0), (480_000.0, 366_000.0)],
                [(340_000.0, 254_000.0), (420_000.0, 323_000.0), (480_000.0, 369_000.0)],
                [(360_000.0, 270_000.0), (420_000.0, 325_000.0), (480_000.0, 371_000.0)],
            ],
            -2.0,
        )
    }
}

/// All contaminant datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContaminatedTables {
    pub compacted_snow: ContaminatedPerf,
    pub dry_snow_10mm: ContaminatedPerf,
    pub dry_snow_100mm: ContaminatedPerf,
    pub wet_snow_5mm: ContaminatedPerf,
    pub wet_snow_15mm: ContaminatedPerf,
    pub wet_snow_30mm: ContaminatedPerf,
    pub water_6mm: ContaminatedPerf,
    pub water_13mm: ContaminatedPerf,
    pub slush_6mm: ContaminatedPerf,
    pub slush_13mm: ContaminatedPerf,
}

impl ContaminatedTables {
    #[must_use]
    pub fn heavy_widebody() -> Self {
        Self {
            compacted_snow: ContaminatedPerf::compacted_snow(),
            dry_snow_10mm: ContaminatedPerf::dry_snow_10mm(),
            dry_snow_100mm: ContaminatedPerf::dry_snow_100mm(),
            wet_snow_5mm: ContaminatedPerf::wet_snow_5mm(),
            wet_snow_15mm: ContaminatedPerf::wet_snow_15mm(),
            wet_snow_30mm: ContaminatedPerf::wet_snow_30mm(),
            water_6mm: ContaminatedPerf::standing_water_6mm(),
            water_13mm: ContaminatedPerf::standing_water_13mm(),
            slush_6mm: ContaminatedPerf::slush_6mm(),
            slush_13mm: ContaminatedPerf::slush_13mm(),
        }
    }

    /// Dataset for a runway condition; `None` for dry and wet surfaces.
    #[must_use]
    pub fn for_condition(&self, condition: RunwayCondition) -> Option<&ContaminatedPerf> {
        match condition {
            RunwayCondition::Dry | RunwayCondition::Wet => None,
            RunwayCondition::CompactedSnow => Some(&self.compacted_snow),
            RunwayCondition::DrySnow10mm => Some(&self.dry_snow_10mm),
            RunwayCondition::DrySnow100mm => Some(&self.dry_snow_100mm),
            RunwayCondition::WetSnow5mm => Some(&self.wet_snow_5mm),
            RunwayCondition::WetSnow15mm => Some(&self.wet_snow_15mm),
            RunwayCondition::WetSnow30mm => Some(&self.wet_snow_30mm),
            RunwayCondition::Water6mm => Some(&self.water_6mm),
            RunwayCondition::Water13mm => Some(&self.water_13mm),
            RunwayCondition::Slush6mm => Some(&self.slush_6mm),
            RunwayCondition::Slush13mm => Some(&self.slush_13mm),
        }
    }
}

/// Contaminated V-speed schedule over weight in tonnes, shifted per config
/// and contaminant.
fn contaminated_speed_table(dv: f64) -> VectorTable<3> {
    let base = [
        (250.0, [108.0, 118.0, 128.0]),
        (300.0, [115.0, 126.0, 136.0]),
        (350.0, [122.0, 133.0, 144.0]),
        (400.0, [129.0, 140.0, 151.0]),
        (450.0, [135.0, 146.0, 157.0]),
        (512.0, [142.0, 153.0, 164.0]),
    ];
    let moved: Vec<(f64, [f64; 3])> = base
        .iter()
        .map(|&(k, v)| (k, [v[0] + dv, v[1] + dv, v[2] + dv]))
        .collect();
    VectorTable::new(&moved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deeper_contamination_penalizes_more() {
        let t = ContaminatedTables::heavy_widebody();
        let i = TakeoffConfig::Conf2.index();
        let shallow = t.slush_6mm.weight_corr[i].get(3000.0);
        let deep = t.slush_13mm.weight_corr[i].get(3000.0);
        assert!(deep > shallow, "13 mm slush must cost more weight than 6 mm");
    }

    #[test]
    fn every_condition_has_a_dataset_except_dry_and_wet() {
        let t = ContaminatedTables::heavy_widebody();
        assert!(t.for_condition(RunwayCondition::Dry).is_none());
        assert!(t.for_condition(RunwayCondition::Wet).is_none());
        for c in [
            RunwayCondition::CompactedSnow,
            RunwayCondition::DrySnow10mm,
            RunwayCondition::DrySnow100mm,
            RunwayCondition::WetSnow5mm,
            RunwayCondition::WetSnow15mm,
            RunwayCondition::WetSnow30mm,
            RunwayCondition::Water6mm,
            RunwayCondition::Water13mm,
            RunwayCondition::Slush6mm,
            RunwayCondition::Slush13mm,
        ] {
            assert!(t.for_condition(c).is_some(), "missing dataset for {c:?}");
        }
    }

    #[test]
    fn contaminated_speeds_stay_ordered() {
        let t = ContaminatedTables::heavy_widebody();
        for perf in [&t.compacted_snow, &t.water_13mm, &t.slush_13mm] {
            for tbl in &perf.vspeeds {
                for w in [260.0, 320.0, 410.0, 500.0] {
                    let [v1, vr, v2] = tbl.get(w);
                    assert!(v1 <= vr && vr <= v2, "schedule must satisfy V1 <= Vr <= V2");
                }
            }
        }
    }

    #[test]
    fn mtow_mapping_floor_is_lowest_breakpoint() {
        let t = ContaminatedTables::heavy_widebody();
        let floor = t.slush_13mm.min_corrected_kg(TakeoffConfig::Conf3);
        assert!((floor - 360_000.0).abs() < 1e-9);
    }
}
