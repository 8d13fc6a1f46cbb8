//! V-speed kernels and reconciliation
//!
//! The kernels produce raw decision, rotation and safety speeds from the
//! weight schedule of the active branch (ground- or airborne-limited) plus
//! runway, altitude, slope and wind increments. The reconciler then enforces
//! the control-speed floors, the ordering V1 <= Vr <= V2, and the tire speed
//! ceiling, reporting `VmcgVmcaLimits` or `MaxTireSpeed` when the published
//! floors and ceilings cannot be satisfied together.

use crate::core_types::{CalcError, Parameters, TakeoffConfig, VSpeeds};
use crate::tables::PerfDatabase;

/// Raw kernel speeds before rounding and reconciliation (kt).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawSpeeds {
    pub v1_kt: f64,
    pub vr_kt: f64,
    pub v2_kt: f64,
}

impl RawSpeeds {
    /// Integer-round each speed.
    #[must_use]
    pub fn rounded(&self) -> VSpeeds {
        VSpeeds {
            v1_kt: self.v1_kt.round() as i32,
            vr_kt: self.vr_kt.round() as i32,
            v2_kt: self.v2_kt.round() as i32,
        }
    }
}

/// Evaluate the V-speed kernels for a dry runway.
#[must_use]
pub fn dry_speeds(
    db: &PerfDatabase,
    config: TakeoffConfig,
    params: &Parameters,
    tow_kg: f64,
    slope_pct: f64,
    airborne_limited: bool,
) -> RawSpeeds {
    let t = &db.speeds;
    let set = t.branch(airborne_limited);
    let tow_t = tow_kg / 1000.0;
    let i = config.index();
    let correction = t.tora_coef_kt_per_km * (params.adjusted_tora_m - 3000.0) / 1000.0
        + t.alt_coef_kt_per_1000ft * params.pressure_alt_ft / 1000.0
        + t.slope_coef_kt_per_pct * slope_pct
        + t.wind_coef_kt_per_kt * params.headwind_kt;
    RawSpeeds {
        v1_kt: set.v1[i].get(tow_t) + correction,
        vr_kt: set.vr[i].get(tow_t) + correction,
        v2_kt: set.v2[i].get(tow_t) + correction,
    }
}

/// Reconcile rounded speeds against the Vmcg/Vmca/Vmu floors and the tire
/// speed ceiling. Returns the adjusted speeds and the error, `None` on
/// success. Re-running on an already-consistent triple is a no-op.
#[must_use]
pub fn reconcile(
    db: &PerfDatabase,
    config: TakeoffConfig,
    params: &Parameters,
    tow_kg: f64,
    speeds: VSpeeds,
) -> (VSpeeds, CalcError) {
    let t = &db.speeds;
    let i = config.index();
    let pa = params.pressure_alt_ft;
    let tow_t = tow_kg / 1000.0;

    let min_v1 = t.min_v1_vmc.get(pa).ceil() as i32;
    let min_vr = t.min_vr_vmc.get(pa).ceil() as i32;
    let min_v2 = t.min_v2_vmc[i]
        .get(pa)
        .max(t.min_v2_vmu[i].get(pa, tow_t))
        .ceil() as i32;
    let tire_cap = db.limits.tire_speed_max_kt as i32;

    let mut v1 = speeds.v1_kt.max(min_v1);
    let mut vr = speeds.vr_kt.max(min_vr);
    let v2 = speeds.v2_kt.max(min_v2);
    let mut error = CalcError::None;

    if vr > v2 {
        vr = v2;
        if vr < min_vr {
            error = CalcError::VmcgVmcaLimits;
        }
    }
    if v2 > tire_cap {
        if vr > tire_cap {
            error = CalcError::MaxTireSpeed;
        } else {
            let cap = tire_cap - (v2 - tire_cap);
            if vr > cap {
                vr = cap;
            }
            if vr < min_vr {
                error = CalcError::VmcgVmcaLimits;
            }
        }
    }
    if v1 > vr {
        v1 = vr;
        if v1 < min_v1 {
            error = CalcError::VmcgVmcaLimits;
        }
    }

    (VSpeeds { v1_kt: v1, vr_kt: vr, v2_kt: v2 }, error)
}
