//! Heavy Widebody Performance Engine
//!
//! A deterministic takeoff and landing performance engine for a heavy
//! four-engine widebody transport. Given aircraft state and operating
//! environment, it computes the maximum allowable takeoff weight under every
//! governing limit, the optimal reduced-thrust (flex) temperature, the
//! reconciled V1/Vr/V2 speeds, landing distances per autobrake mode, and
//! weight-and-balance envelope verdicts.
//!
//! The engine does no I/O, reads no clock and keeps no mutable state: the
//! published tables are built once and every calculation is a pure function
//! of its inputs. The tables themselves are estimates and are swappable via
//! JSON; nothing here certifies real-world operations.

// Core types and lookup-table data
pub mod core_types;
pub mod tables;

// Calculation modules
pub mod calculator;
pub mod contaminated;
pub mod envelope;
pub mod environment;
pub mod flex;
pub mod kernels;
pub mod landing;
pub mod limits;
pub mod vspeeds;

// Re-export the public surface
pub use calculator::{compute_cg_percent_mac, PerfCalculator};
pub use core_types::{
    AntiIce, AutobrakeMode, CalcError, LandingDistances, LandingFlap, LimitWeights,
    LimitingFactor, LineupAngle, Parameters, RunwayCondition, TakeoffConfig, TakeoffInputs,
    TakeoffResult, VSpeeds,
};
pub use envelope::{EnvelopeCheck, EnvelopeKind, WeightCheck, WeightViolation};
pub use landing::LandingInputs;
pub use tables::{PerfDatabase, TableDataError};
