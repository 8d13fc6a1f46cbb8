//! Request types and closed enumerations for a performance calculation

use serde::{Deserialize, Serialize};

/// Takeoff flap/slat configuration family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TakeoffConfig {
    Conf1,
    Conf2,
    Conf3,
}

impl TakeoffConfig {
    /// All configurations in sweep order.
    pub const ALL: [TakeoffConfig; 3] = [
        TakeoffConfig::Conf1,
        TakeoffConfig::Conf2,
        TakeoffConfig::Conf3,
    ];

    /// Dense index used to address per-configuration coefficient arrays.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            TakeoffConfig::Conf1 => 0,
            TakeoffConfig::Conf2 => 1,
            TakeoffConfig::Conf3 => 2,
        }
    }
}

/// Landing flap configuration family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandingFlap {
    Full,
    Conf3,
}

/// The four families of takeoff weight limits.
///
/// The declaration order is also the tie-break order when two families
/// produce the same limit weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LimitingFactor {
    Runway,
    SecondSegment,
    BrakeEnergy,
    Vmcg,
}

impl LimitingFactor {
    /// All families in tie-break order.
    pub const ALL: [LimitingFactor; 4] = [
        LimitingFactor::Runway,
        LimitingFactor::SecondSegment,
        LimitingFactor::BrakeEnergy,
        LimitingFactor::Vmcg,
    ];

    /// Dense index used to address per-family storage.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            LimitingFactor::Runway => 0,
            LimitingFactor::SecondSegment => 1,
            LimitingFactor::BrakeEnergy => 2,
            LimitingFactor::Vmcg => 3,
        }
    }

    /// Whether the limit is reached airborne rather than on the runway.
    /// Selects the V-speed kernel branch.
    #[must_use]
    pub fn is_airborne(self) -> bool {
        matches!(
            self,
            LimitingFactor::SecondSegment | LimitingFactor::BrakeEnergy
        )
    }
}

/// Reported runway surface state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunwayCondition {
    Dry,
    Wet,
    CompactedSnow,
    DrySnow10mm,
    DrySnow100mm,
    WetSnow5mm,
    WetSnow15mm,
    WetSnow30mm,
    Water6mm,
    Water13mm,
    Slush6mm,
    Slush13mm,
}

impl RunwayCondition {
    /// Standing contamination, as opposed to merely dry or wet.
    #[must_use]
    pub fn is_contaminated(self) -> bool {
        !matches!(self, RunwayCondition::Dry | RunwayCondition::Wet)
    }
}

/// Autobrake deceleration profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AutobrakeMode {
    Low,
    Medium,
    Max,
}

/// How the aircraft lines up on the runway before brake release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineupAngle {
    /// Entering from a full-length threshold with no turn.
    None,
    /// 90 degree turn onto the runway.
    Turn90,
    /// 180 degree backtrack turn.
    Turn180,
}

/// Anti-ice bleed configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AntiIce {
    Off,
    Engine,
    EngineWing,
}

/// The closed set of calculation outcomes. `None` means a valid result.
///
/// Business-logic failures are values, never panics: the engine always
/// returns a populated result carrying one of these codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CalcError {
    #[default]
    None,
    InvalidData,
    StructuralMtow,
    MaxPressureAlt,
    MaxTemperature,
    Oew,
    CgOutOfLimits,
    MaxTailwind,
    MaxSlope,
    TooHeavy,
    TooLight,
    VmcgVmcaLimits,
    MaxTireSpeed,
}

/// A complete takeoff calculation request. Immutable for the duration of the
/// calculation and echoed back in the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TakeoffInputs {
    /// Planned takeoff weight (kg).
    pub tow_kg: f64,
    /// Forward center-of-gravity takeoff procedure selected.
    pub forward_cg: bool,
    /// Takeoff flap configuration.
    pub config: TakeoffConfig,
    /// Takeoff run available (m).
    pub tora_m: f64,
    /// Runway slope in percent; positive is uphill.
    pub slope_pct: f64,
    /// Lineup turn onto the runway.
    pub lineup: LineupAngle,
    /// Wind component along the runway (kt); positive is headwind.
    pub wind_kt: f64,
    /// Runway elevation (ft).
    pub elevation_ft: f64,
    /// Altimeter setting (hPa).
    pub qnh_hpa: f64,
    /// Outside air temperature (deg C).
    pub oat_c: f64,
    /// Anti-ice bleed selection.
    pub anti_ice: AntiIce,
    /// Air-conditioning packs on.
    pub packs: bool,
    /// Force full takeoff thrust; suppresses flex.
    pub force_toga: bool,
    /// Runway surface state.
    pub runway_condition: RunwayCondition,
    /// Center of gravity (% MAC), when known.
    pub cg_percent_mac: Option<f64>,
}

impl TakeoffInputs {
    /// True when every numeric field is finite. Non-finite input is rejected
    /// as `InvalidData` before any table access.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        let mut ok = self.tow_kg.is_finite()
            && self.tora_m.is_finite()
            && self.slope_pct.is_finite()
            && self.wind_kt.is_finite()
            && self.elevation_ft.is_finite()
            && self.qnh_hpa.is_finite()
            && self.oat_c.is_finite();
        if let Some(cg) = self.cg_percent_mac {
            ok &= cg.is_finite();
        }
        ok
    }
}
