use crate::{Point, Topology};
use ahash::AHashSet;

/// Sparse set of live cells. A coordinate absent from the set is dead,
/// so dead cells cost no memory.
pub type CellSet = AHashSet<Point>;

/// One generation of the Game of Life.
///
/// An engine owns its live-cell set and the [`Topology`] it was built
/// with, and is immutable after construction: [`next`](Self::next)
/// produces a fresh instance and leaves the current one readable, so a
/// caller can keep generations around for history or diffing.
#[derive(Clone, Debug)]
pub struct LifeEngine {
    cells: CellSet,
    topology: Topology,
}

impl LifeEngine {
    /// Creates an unbounded engine from the given live cells.
    /// Duplicate coordinates collapse into one cell.
    pub fn unbounded(live_cells: impl IntoIterator<Item = Point>) -> Self {
        Self {
            cells: live_cells.into_iter().collect(),
            topology: Topology::Unbounded,
        }
    }

    /// Creates an engine clipped to the closed rectangle
    /// `[min.x, max.x] x [min.y, max.y]`.
    ///
    /// Construction does not validate `live_cells` against the rectangle.
    /// A cell seeded outside it is stored anyway, but the bounded neighbor
    /// rule never reaches positions outside the rectangle, so such a cell
    /// is evaluated for survival against its in-rectangle neighbors only
    /// and no birth can ever occur out of bounds. Cells at the rectangle
    /// edge genuinely see fewer than 8 neighbors; that asymmetry is the
    /// prescribed bounded-grid semantics, not an artifact.
    pub fn bounded(
        live_cells: impl IntoIterator<Item = Point>,
        min: Point,
        max: Point,
    ) -> Self {
        Self {
            cells: live_cells.into_iter().collect(),
            topology: Topology::Bounded { min, max },
        }
    }

    /// Creates an unbounded engine seeded with a random soup inside the
    /// closed rectangle `[min, max]`; each position is live with
    /// probability `fill_rate`.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(min: Point, max: Point, fill_rate: f64, seed: Option<u64>) -> Self {
        use rand::{Rng, SeedableRng};
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        let mut cells = CellSet::new();
        for y in min.y..=max.y {
            for x in min.x..=max.x {
                if rng.gen_bool(fill_rate) {
                    cells.insert(Point::new(x, y));
                }
            }
        }
        Self {
            cells,
            topology: Topology::Unbounded,
        }
    }

    /// The current live-cell set.
    pub fn live_cells(&self) -> &CellSet {
        &self.cells
    }

    /// The neighbor strategy this engine was constructed with.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Whether the cell at `p` is currently alive.
    pub fn is_alive(&self, p: Point) -> bool {
        self.cells.contains(&p)
    }

    /// Total number of live cells.
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Computes the next generation.
    ///
    /// Survivors are live cells with exactly 2 or 3 live neighbors; births
    /// are dead neighbor positions of live cells with exactly 3 live
    /// neighbors. Both are counted against the current generation, never
    /// against the set under construction. Only neighbors of live cells are
    /// visited, so the cost is proportional to the live population, not to
    /// any grid area.
    ///
    /// The returned engine carries the same topology; bounds never change
    /// across generations.
    pub fn next(&self) -> Self {
        let mut next_cells = CellSet::with_capacity(self.cells.len());
        for &cell in &self.cells {
            if self.survives(cell) {
                next_cells.insert(cell);
            }
            for neighbor in self.topology.neighbors(cell) {
                if self.is_born(neighbor) {
                    next_cells.insert(neighbor);
                }
            }
        }
        Self {
            cells: next_cells,
            topology: self.topology,
        }
    }

    /// Advances `iters` generations and returns the final one.
    pub fn step(&self, iters: usize) -> Self {
        let mut engine = self.clone();
        for _ in 0..iters {
            engine = engine.next();
        }
        engine
    }

    fn live_neighbor_count(&self, p: Point) -> usize {
        self.topology
            .neighbors(p)
            .filter(|n| self.cells.contains(n))
            .count()
    }

    fn survives(&self, p: Point) -> bool {
        matches!(self.live_neighbor_count(p), 2 | 3)
    }

    fn is_born(&self, p: Point) -> bool {
        !self.cells.contains(&p) && self.live_neighbor_count(p) == 3
    }
}
