//! Core data types shared across the engine

pub mod inputs;
pub mod outcome;

pub use inputs::{
    AntiIce, AutobrakeMode, CalcError, LandingFlap, LimitingFactor, LineupAngle, RunwayCondition,
    TakeoffConfig, TakeoffInputs,
};
pub use outcome::{
    AnchorLimit, LandingDistances, LimitWeights, Parameters, TakeoffResult, VSpeeds,
};
