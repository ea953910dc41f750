//! Neighbour-cell precomputation for spatial transmission.
//!
//! An R-tree over cell centroids answers "which cells lie within the
//! infection radius of this one?" without the naive O(N²) distance scan on
//! large populations.  The result is cached on each cell and refreshed only
//! when geometry or the radius changes.
//!
//! Neighbour lists are sorted by `CellId` before being stored: R-tree
//! iteration order is unspecified, and an unspecified order would leak into
//! the shared RNG stream through the spatial sweep's cell sampling.

use epi_core::{CellId, Location};
use rstar::{AABB, PointDistance, RTree, RTreeObject};

use crate::Population;

// ── R-tree cell entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 2-D point with the associated `CellId`.
#[derive(Clone)]
struct CellEntry {
    point: [f64; 2],
    id: CellId,
}

impl RTreeObject for CellEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for CellEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── Precomputation ────────────────────────────────────────────────────────────

/// Rebuild every cell's `nearby_cells` cache: all *other* cells whose
/// centroid lies strictly within `radius`, with their Euclidean distances.
///
/// A radius of 0 or below clears every neighbour set — spatial transmission
/// then becomes a no-op, which is a valid configuration rather than an
/// error.
pub fn find_nearby_cells(population: &mut Population, radius: f64) {
    if radius <= 0.0 {
        for cell in &mut population.cells {
            cell.nearby_cells.clear();
        }
        return;
    }

    let entries: Vec<CellEntry> = population
        .cells
        .iter()
        .map(|c| CellEntry {
            point: [c.location.x, c.location.y],
            id: c.id,
        })
        .collect();
    let tree = RTree::bulk_load(entries);

    let centroids: Vec<(CellId, Location)> =
        population.cells.iter().map(|c| (c.id, c.location)).collect();

    let neighbour_lists = collect_neighbours(&tree, &centroids, radius);

    for (cell, nearby) in population.cells.iter_mut().zip(neighbour_lists) {
        cell.nearby_cells = nearby;
    }
}

fn neighbours_of(
    tree:   &RTree<CellEntry>,
    id:     CellId,
    centre: Location,
    radius: f64,
) -> Vec<(CellId, f64)> {
    let point = [centre.x, centre.y];
    let mut nearby: Vec<(CellId, f64)> = tree
        .locate_within_distance(point, radius * radius)
        .filter(|e| e.id != id)
        .map(|e| (e.id, e.distance_2(&point).sqrt()))
        .filter(|&(_, d)| d < radius) // strict cutoff; the query is ≤
        .collect();
    nearby.sort_unstable_by_key(|&(other, _)| other);
    nearby
}

#[cfg(not(feature = "parallel"))]
fn collect_neighbours(
    tree:      &RTree<CellEntry>,
    centroids: &[(CellId, Location)],
    radius:    f64,
) -> Vec<Vec<(CellId, f64)>> {
    centroids
        .iter()
        .map(|&(id, centre)| neighbours_of(tree, id, centre, radius))
        .collect()
}

#[cfg(feature = "parallel")]
fn collect_neighbours(
    tree:      &RTree<CellEntry>,
    centroids: &[(CellId, Location)],
    radius:    f64,
) -> Vec<Vec<(CellId, f64)>> {
    use rayon::prelude::*;

    centroids
        .par_iter()
        .map(|&(id, centre)| neighbours_of(tree, id, centre, radius))
        .collect()
}
