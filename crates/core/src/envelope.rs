//! Weight-and-balance checks
//!
//! Loading points are validated against the closed certificate polygons by
//! even-odd ray casting. A tiny denominator guard keeps horizontal edges
//! from dividing by zero.

use serde::{Deserialize, Serialize};

use crate::tables::PerfDatabase;

/// Guard added to edge denominators in the ray cast.
const DENOMINATOR_GUARD: f64 = 1e-9;

/// The three certificate envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnvelopeKind {
    Mtow,
    Mzfw,
    Mlw,
}

/// Outcome of a performance envelope check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeCheck {
    pub ok: bool,
    /// Envelopes the point falls outside of.
    pub failing: Vec<EnvelopeKind>,
}

/// A single gross/zero-fuel/fuel bookkeeping violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightViolation {
    GrossAboveStructuralMtow,
    ZeroFuelAboveMzfw,
    GrossBelowOew,
    FuelAboveCapacity,
    SumMismatch,
}

/// Outcome of a weight bookkeeping check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightCheck {
    pub ok: bool,
    pub violations: Vec<WeightViolation>,
}

/// Even-odd ray cast of `(cg, weight)` against a closed polygon.
///
/// Invariant under cyclic rotation of the vertex order; repeated evaluation
/// of the same point is trivially idempotent.
#[must_use]
pub fn point_in_polygon(polygon: &[(f64, f64)], cg: f64, weight_kg: f64) -> bool {
    let mut inside = false;
    let n = polygon.len();
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = polygon[i];
        let (xj, yj) = polygon[j];
        if (yi > weight_kg) != (yj > weight_kg) {
            let cross = xi + (weight_kg - yi) * (xj - xi) / ((yj - yi) + DENOMINATOR_GUARD);
            if cg < cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Whether a CG sits inside the takeoff envelope at the given weight.
#[must_use]
pub fn is_cg_within_limits(db: &PerfDatabase, cg_percent_mac: f64, tow_kg: f64) -> bool {
    point_in_polygon(&db.envelope.mtow, cg_percent_mac, tow_kg)
}

/// Check a loading point against all three certificate envelopes.
#[must_use]
pub fn check_performance_envelope(
    db: &PerfDatabase,
    cg_percent_mac: f64,
    weight_kg: f64,
) -> EnvelopeCheck {
    let mut failing = Vec::new();
    if !point_in_polygon(&db.envelope.mtow, cg_percent_mac, weight_kg) {
        failing.push(EnvelopeKind::Mtow);
    }
    if !point_in_polygon(&db.envelope.mzfw, cg_percent_mac, weight_kg) {
        failing.push(EnvelopeKind::Mzfw);
    }
    if !point_in_polygon(&db.envelope.mlw, cg_percent_mac, weight_kg) {
        failing.push(EnvelopeKind::Mlw);
    }
    EnvelopeCheck {
        ok: failing.is_empty(),
        failing,
    }
}

/// Check gross, zero-fuel and fuel weights for bookkeeping consistency.
#[must_use]
pub fn check_weights(db: &PerfDatabase, gross_kg: f64, zfw_kg: f64, fuel_kg: f64) -> WeightCheck {
    let limits = &db.limits;
    let mut violations = Vec::new();
    if gross_kg > limits.structural_mtow_kg {
        violations.push(WeightViolation::GrossAboveStructuralMtow);
    }
    if zfw_kg > limits.mzfw_kg {
        violations.push(WeightViolation::ZeroFuelAboveMzfw);
    }
    if gross_kg < limits.oew_kg {
        violations.push(WeightViolation::GrossBelowOew);
    }
    if fuel_kg > limits.max_fuel_kg {
        violations.push(WeightViolation::FuelAboveCapacity);
    }
    if (gross_kg - (zfw_kg + fuel_kg)).abs() > 1.0 {
        violations.push(WeightViolation::SumMismatch);
    }
    WeightCheck {
        ok: violations.is_empty(),
        violations,
    }
}

/// Convert a longitudinal position to percent of the mean aerodynamic chord.
#[must_use]
pub fn compute_cg_percent_mac(position_m: f64, mac_start_m: f64, mac_length_m: f64) -> f64 {
    100.0 * (position_m - mac_start_m) / mac_length_m
}
