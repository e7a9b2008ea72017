use crate::Point;

/// Describes the strategy for enumerating a cell's neighbors.
///
/// Chosen at engine construction and carried unchanged into every
/// generation an engine produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    /// Field is unbounded; all 8 adjacent positions count as neighbors.
    Unbounded,
    /// Field is clipped to the closed rectangle `[min.x, max.x] x [min.y, max.y]`.
    /// Adjacent positions outside the rectangle are not neighbors, so cells
    /// on the boundary see fewer than 8.
    ///
    /// A `min` that is not component-wise `<= max` describes an empty
    /// rectangle: every candidate is filtered out and nothing can survive
    /// or be born past the first generation. The engine does not reject
    /// this configuration.
    Bounded { min: Point, max: Point },
}

impl Topology {
    /// Enumerates the neighbors of `p` under this topology.
    pub fn neighbors(self, p: Point) -> impl Iterator<Item = Point> {
        p.adjacent().into_iter().filter(move |n| match self {
            Self::Unbounded => true,
            Self::Bounded { min, max } => !n.less_than(min) && !n.greater_than(max),
        })
    }
}
