//! Weight-and-balance envelopes
//!
//! Each certificate weight has a closed polygon of
//! `(cg percent MAC, weight kg)` vertices. A loading point must fall inside
//! every applicable polygon.

use serde::{Deserialize, Serialize};

/// The three certificate envelopes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeTables {
    /// Takeoff envelope, bounded above by structural MTOW.
    pub mtow: Vec<(f64, f64)>,
    /// Zero-fuel envelope, bounded above by MZFW.
    pub mzfw: Vec<(f64, f64)>,
    /// Landing envelope, bounded above by MLW.
    pub mlw: Vec<(f64, f64)>,
}

impl EnvelopeTables {
    #[must_use]
    pub fn heavy_widebody() -> Self {
        Self {
            mtow: vec![
                (17.0, 300_000.0),
                (17.0, 445_000.0),
                (21.0, 512_000.0),
                (37.0, 512_000.0),
                (43.0, 470_000.0),
                (43.0, 300_000.0),
            ],
            mzfw: vec![
                (17.0, 270_000.0),
                (17.0, 330_000.0),
                (22.0, 373_000.0),
                (38.0, 373_000.0),
                (43.0, 340_000.0),
                (43.0, 270_000.0),
            ],
            mlw: vec![
                (17.0, 280_000.0),
                (17.0, 350_000.0),
                (22.0, 395_000.0),
                (38.0, 395_000.0),
                (43.0, 360_000.0),
                (43.0, 280_000.0),
            ],
        }
    }
}
