use std::collections::HashMap;
use trophica_data::{OrganismId, Position};

type CellKey = (i32, i32);

#[derive(Clone, Debug, Default)]
/// Bucket index of organism positions for radius queries.
///
/// Buckets are keyed by `(floor(x / cell_size), floor(y / cell_size))`, so
/// the index is unbounded and needs no world dimensions. Feeding never
/// consults it; it only answers proximity questions.
///
/// # Performance Characteristics
/// - Insert / remove / relocate: O(bucket occupancy)
/// - Radius query: O(min(cells in the covering square, occupied buckets) + candidates)
///
/// # Examples
/// ```
/// use trophica_core::spatial_hash::SpatialHash;
/// use trophica_data::{OrganismId, Position};
///
/// let mut spatial = SpatialHash::new(10.0);
/// spatial.insert(OrganismId(1), Position::new(15.0, 15.0));
/// spatial.insert(OrganismId(2), Position::new(85.0, 85.0));
///
/// let nearby = spatial.query_radius(Position::new(12.0, 12.0), 5.0);
/// assert_eq!(nearby, vec![OrganismId(1)]);
/// ```
pub struct SpatialHash {
    pub cell_size: f64,
    cells: HashMap<CellKey, Vec<(OrganismId, Position)>>,
    len: usize,
}

impl SpatialHash {
    /// Creates an empty index with square buckets of side `cell_size`.
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size,
            cells: HashMap::new(),
            len: 0,
        }
    }

    /// Computes the bucket key for a world coordinate.
    ///
    /// Non-finite coordinates and coordinates whose bucket index would
    /// overflow `i32` have no bucket.
    #[inline]
    pub fn cell_key(&self, x: f64, y: f64) -> Option<CellKey> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let cx = (x / self.cell_size).floor();
        let cy = (y / self.cell_size).floor();
        if cx.abs() > f64::from(i32::MAX) || cy.abs() > f64::from(i32::MAX) {
            return None;
        }
        Some((cx as i32, cy as i32))
    }

    /// Indexes `id` at `pos`. Returns false when the position has no bucket.
    pub fn insert(&mut self, id: OrganismId, pos: Position) -> bool {
        let Some(key) = self.cell_key(pos.x, pos.y) else {
            return false;
        };
        self.cells.entry(key).or_default().push((id, pos));
        self.len += 1;
        true
    }

    /// Removes `id`, which must have been inserted at `pos`.
    pub fn remove(&mut self, id: OrganismId, pos: Position) -> bool {
        let Some(key) = self.cell_key(pos.x, pos.y) else {
            return false;
        };
        let Some(bucket) = self.cells.get_mut(&key) else {
            return false;
        };
        let Some(slot) = bucket.iter().position(|(other, _)| *other == id) else {
            return false;
        };
        bucket.swap_remove(slot);
        if bucket.is_empty() {
            self.cells.remove(&key);
        }
        self.len -= 1;
        true
    }

    /// Moves `id` from `old` to `new`.
    pub fn relocate(&mut self, id: OrganismId, old: Position, new: Position) -> bool {
        self.remove(id, old) && self.insert(id, new)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, id: OrganismId, pos: Position) -> bool {
        self.cell_key(pos.x, pos.y)
            .and_then(|key| self.cells.get(&key))
            .is_some_and(|bucket| bucket.iter().any(|(other, _)| *other == id))
    }

    /// Visits every entry within `radius` of `center` (inclusive), in no
    /// particular order.
    ///
    /// Candidate buckets span `ceil(radius / cell_size)` cells around the
    /// center bucket; each candidate is then checked by true distance. When
    /// that square holds more cells than there are occupied buckets, the
    /// occupied buckets are scanned instead.
    pub fn query_callback<F>(&self, center: Position, radius: f64, mut callback: F)
    where
        F: FnMut(OrganismId, Position),
    {
        let Some((ccx, ccy)) = self.cell_key(center.x, center.y) else {
            return;
        };
        if !radius.is_finite() || radius < 0.0 {
            return;
        }
        let mut visit = |bucket: &[(OrganismId, Position)]| {
            for &(id, pos) in bucket {
                if pos.distance_to(&center) <= radius {
                    callback(id, pos);
                }
            }
        };

        let reach = (radius / self.cell_size).ceil();
        let side = 2.0 * reach + 1.0;
        if side * side > self.cells.len() as f64 {
            for bucket in self.cells.values() {
                visit(bucket.as_slice());
            }
            return;
        }
        let reach = reach as i32;

        for cy in ccy.saturating_sub(reach)..=ccy.saturating_add(reach) {
            for cx in ccx.saturating_sub(reach)..=ccx.saturating_add(reach) {
                if let Some(bucket) = self.cells.get(&(cx, cy)) {
                    visit(bucket.as_slice());
                }
            }
        }
    }

    /// Ids within `radius` of `center`, sorted by id.
    pub fn query_radius(&self, center: Position, radius: f64) -> Vec<OrganismId> {
        let mut result = Vec::new();
        self.query_callback(center, radius, |id, _| result.push(id));
        result.sort_unstable();
        result
    }

    pub fn count_nearby(&self, center: Position, radius: f64) -> usize {
        let mut count = 0;
        self.query_callback(center, radius, |_, _| count += 1);
        count
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.len = 0;
    }
}
