//! Clamped piecewise-linear lookup tables
//!
//! All published performance data is tabulated: a sorted sequence of
//! breakpoints queried with linear interpolation between the two surrounding
//! points and clamped to the end values outside the covered range. Three
//! shapes exist:
//!
//! - [`Table1D`] — scalar value over one key
//! - [`Table2D`] — scalar value over two keys (bilinear over per-row tables;
//!   ragged grids clamp in the missing dimension)
//! - [`VectorTable`] — fixed-size vector over one key, interpolated
//!   component-wise and returned by value so no scratch storage is shared
//!   between callers

use serde::{Deserialize, Serialize};

/// Scalar table over a single strictly increasing key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table1D {
    points: Vec<(f64, f64)>,
}

impl Table1D {
    /// Build a table from `(key, value)` breakpoints.
    ///
    /// # Panics
    /// Panics when fewer than two points are supplied or the keys are not
    /// strictly increasing. Table construction happens once at startup from
    /// published data, so a malformed table is a programming error.
    #[must_use]
    pub fn new(points: &[(f64, f64)]) -> Self {
        assert!(points.len() >= 2, "lookup table needs at least two points");
        assert!(
            points.windows(2).all(|w| w[0].0 < w[1].0),
            "lookup table keys must be strictly increasing"
        );
        Self {
            points: points.to_vec(),
        }
    }

    /// Interpolated value at `key`, clamped to the end values outside the
    /// covered range.
    #[must_use]
    pub fn get(&self, key: f64) -> f64 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if key <= first.0 {
            return first.1;
        }
        if key >= last.0 {
            return last.1;
        }
        // Interior query: exactly one pair of breakpoints straddles the key.
        let idx = self.points.partition_point(|p| p.0 <= key);
        let (k_lo, v_lo) = self.points[idx - 1];
        let (k_hi, v_hi) = self.points[idx];
        v_lo + (v_hi - v_lo) * (key - k_lo) / (k_hi - k_lo)
    }

    /// Smallest tabulated key.
    #[must_use]
    pub fn min_key(&self) -> f64 {
        self.points[0].0
    }

    /// Largest tabulated key.
    #[must_use]
    pub fn max_key(&self) -> f64 {
        self.points[self.points.len() - 1].0
    }
}

/// Scalar table over two keys.
///
/// Stored as rows of `(primary key, Table1D over the secondary key)`. The
/// secondary tables may cover different ranges per row; queries clamp within
/// each row before blending, which tolerates ragged source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table2D {
    rows: Vec<(f64, Table1D)>,
}

impl Table2D {
    /// Build from `(primary key, secondary breakpoints)` rows.
    ///
    /// # Panics
    /// Panics when fewer than two rows are supplied or primary keys are not
    /// strictly increasing (see [`Table1D::new`] for the per-row rules).
    #[must_use]
    pub fn new(rows: &[(f64, &[(f64, f64)])]) -> Self {
        assert!(rows.len() >= 2, "2-D lookup table needs at least two rows");
        assert!(
            rows.windows(2).all(|w| w[0].0 < w[1].0),
            "2-D lookup table primary keys must be strictly increasing"
        );
        Self {
            rows: rows
                .iter()
                .map(|(k, pts)| (*k, Table1D::new(pts)))
                .collect(),
        }
    }

    /// Bilinear value at `(k1, k2)`, clamped on both axes.
    #[must_use]
    pub fn get(&self, k1: f64, k2: f64) -> f64 {
        let first = &self.rows[0];
        let last = &self.rows[self.rows.len() - 1];
        if k1 <= first.0 {
            return first.1.get(k2);
        }
        if k1 >= last.0 {
            return last.1.get(k2);
        }
        let idx = self.rows.partition_point(|r| r.0 <= k1);
        let (lo_k, lo_row) = &self.rows[idx - 1];
        let (hi_k, hi_row) = &self.rows[idx];
        let frac = (k1 - lo_k) / (hi_k - lo_k);
        let lo = lo_row.get(k2);
        let hi = hi_row.get(k2);
        lo + (hi - lo) * frac
    }
}

/// Vector table over a single key, interpolated component-wise.
///
/// Returns the interpolated vector by value; there is deliberately no shared
/// scratch buffer, so lookups are safe from any number of threads.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorTable<const N: usize> {
    points: Vec<(f64, [f64; N])>,
}

// `serde`'s blanket array impls only cover fixed lengths up to 32 via a
// macro, not a `const N: usize` generic, so the derive can't prove
// `[f64; N]: Serialize`/`Deserialize` for a generic `N`. Serialize/deserialize
// through `Vec<f64>` instead, which carries the same data.
impl<const N: usize> Serialize for VectorTable<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let points: Vec<(f64, Vec<f64>)> = self
            .points
            .iter()
            .map(|(k, v)| (*k, v.to_vec()))
            .collect();
        points.serialize(serializer)
    }
}

impl<'de, const N: usize> Deserialize<'de> for VectorTable<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Vec<(f64, Vec<f64>)> = Vec::deserialize(deserializer)?;
        let points = raw
            .into_iter()
            .map(|(k, v)| {
                let arr: [f64; N] = v
                    .try_into()
                    .map_err(|_| serde::de::Error::custom("vector table entry has wrong length"))?;
                Ok((k, arr))
            })
            .collect::<Result<Vec<_>, D::Error>>()?;
        Ok(VectorTable { points })
    }
}

impl<const N: usize> VectorTable<N> {
    /// Build a vector table from `(key, vector)` breakpoints.
    ///
    /// # Panics
    /// Same construction rules as [`Table1D::new`].
    #[must_use]
    pub fn new(points: &[(f64, [f64; N])]) -> Self {
        assert!(points.len() >= 2, "vector table needs at least two points");
        assert!(
            points.windows(2).all(|w| w[0].0 < w[1].0),
            "vector table keys must be strictly increasing"
        );
        Self {
            points: points.to_vec(),
        }
    }

    /// Component-wise interpolated vector at `key`, clamped at the ends.
    #[must_use]
    pub fn get(&self, key: f64) -> [f64; N] {
        let first = &self.points[0];
        let last = &self.points[self.points.len() - 1];
        if key <= first.0 {
            return first.1;
        }
        if key >= last.0 {
            return last.1;
        }
        let idx = self.points.partition_point(|p| p.0 <= key);
        let (k_lo, lo) = &self.points[idx - 1];
        let (k_hi, hi) = &self.points[idx];
        let frac = (key - k_lo) / (k_hi - k_lo);
        let mut out = [0.0; N];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = lo[i] + (hi[i] - lo[i]) * frac;
        }
        out
    }

    /// Smallest tabulated key.
    #[must_use]
    pub fn min_key(&self) -> f64 {
        self.points[0].0
    }
}
