/// Coordinates of a single grid cell.
///
/// Plain value type; equality and hashing are by components, so it can
/// key the sparse live-cell set directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns `true` if **either** the x or y component is less than the
    /// corresponding component of `other`.
    ///
    /// This is a disjunction, not a per-axis or lexicographic order. It only
    /// amounts to a rectangle test when negated and conjoined with
    /// [`greater_than`](Self::greater_than), which is how
    /// [`Topology::Bounded`](crate::Topology) uses it. Callers expecting a
    /// total order should not reach for this.
    pub const fn less_than(self, other: Self) -> bool {
        self.x < other.x || self.y < other.y
    }

    /// Returns `true` if **either** the x or y component is greater than the
    /// corresponding component of `other`.
    ///
    /// Disjunctive, like [`less_than`](Self::less_than).
    pub const fn greater_than(self, other: Self) -> bool {
        self.x > other.x || self.y > other.y
    }

    /// The 8 positions at Chebyshev distance 1, unfiltered.
    pub const fn adjacent(self) -> [Self; 8] {
        let Self { x, y } = self;
        [
            Self::new(x - 1, y - 1),
            Self::new(x - 1, y),
            Self::new(x - 1, y + 1),
            Self::new(x, y - 1),
            Self::new(x, y + 1),
            Self::new(x + 1, y - 1),
            Self::new(x + 1, y),
            Self::new(x + 1, y + 1),
        ]
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}
