//! Published performance data
//!
//! Everything the engine knows about the airframe lives here as immutable
//! tables, constructed once and never mutated. The in-code dataset
//! ([`PerfDatabase::heavy_widebody`]) carries estimated figures for a generic
//! four-engine heavy widebody; because every container derives serde, the
//! whole database can also be loaded from JSON and swapped without touching
//! the engine code.

pub mod contaminated;
pub mod envelope;
pub mod landing;
pub mod lookup;
pub mod speeds;
pub mod takeoff;

pub use contaminated::{ContaminatedPerf, ContaminatedTables};
pub use envelope::EnvelopeTables;
pub use landing::{LandingPerfRow, LandingTables};
pub use lookup::{Table1D, Table2D, VectorTable};
pub use speeds::VSpeedTables;
pub use takeoff::{AircraftLimits, TakeoffTables};

use serde::{Deserialize, Serialize};

/// Failure to load an external table dataset.
#[derive(Debug, thiserror::Error)]
pub enum TableDataError {
    #[error("malformed performance dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The complete immutable table set for one airframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerfDatabase {
    /// Certificate weights and operational caps.
    pub limits: AircraftLimits,
    /// Takeoff limit-family data and wet-runway adjustments.
    pub takeoff: TakeoffTables,
    /// V-speed kernels and reconciliation minima.
    pub speeds: VSpeedTables,
    /// Standing-contamination corrections.
    pub contaminated: ContaminatedTables,
    /// Landing distance rows and approach speed tables.
    pub landing: LandingTables,
    /// Weight-and-balance envelopes.
    pub envelope: EnvelopeTables,
}

impl PerfDatabase {
    /// The published (estimated) dataset for the heavy widebody.
    #[must_use]
    pub fn heavy_widebody() -> Self {
        Self {
            limits: AircraftLimits::heavy_widebody(),
            takeoff: TakeoffTables::heavy_widebody(),
            speeds: VSpeedTables::heavy_widebody(),
            contaminated: ContaminatedTables::heavy_widebody(),
            landing: LandingTables::heavy_widebody(),
            envelope: EnvelopeTables::heavy_widebody(),
        }
    }

    /// Load a replacement dataset from JSON.
    ///
    /// # Errors
    /// Returns [`TableDataError::Parse`] when the document does not match the
    /// database schema.
    pub fn from_json_str(json: &str) -> Result<Self, TableDataError> {
        Ok(serde_json::from_str(json)?)
    }
}
