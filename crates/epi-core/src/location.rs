//! Planar coordinate type for cells, households, and places.
//!
//! Populations are laid out on an abstract plane (grid coordinates from the
//! population builder, not geodetic lat/lon), so plain Euclidean distance is
//! the right metric.  Distances only feed the neighbour-cell cutoff and
//! optional spatial weighting; no unit is imposed beyond "same unit as the
//! infection radius".

/// A 2-D planar coordinate stored as double-precision floats.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Location) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Squared Euclidean distance — cheaper when only comparisons are needed
    /// (e.g. R-tree radius queries take a squared cutoff).
    #[inline]
    pub fn distance_sq(self, other: Location) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
