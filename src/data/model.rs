// ---------------------------------------------------------------------------
// Record – one parsed line of the input file
// ---------------------------------------------------------------------------

/// Records whose flag is strictly greater than this land in the `down` series.
pub const FLAG_THRESHOLD: f64 = 0.5;

/// A single parsed input line: `<x> <y> <unused> <flag>`.
///
/// The third column is positional only and never parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub x: f64,
    pub y: f64,
    pub flag: f64,
}

impl Record {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Point / PointSet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// An ordered sequence of points destined for one scatter series.
pub type PointSet = Vec<Point>;

// ---------------------------------------------------------------------------
// PointSets – the complete classified dataset
// ---------------------------------------------------------------------------

/// Both scatter series, built once in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSets {
    /// Every record, drawn in the first color. Flagged records appear twice.
    pub up: PointSet,
    /// Flagged records only, drawn in the second color.
    pub down: PointSet,
}

impl PointSets {
    /// Total number of points across both series.
    pub fn len(&self) -> usize {
        self.up.len() + self.down.len()
    }

    pub fn is_empty(&self) -> bool {
        self.up.is_empty() && self.down.is_empty()
    }

    /// Plot-ready `[x, y]` pairs for the `up` series.
    pub fn up_coords(&self) -> Vec<[f64; 2]> {
        self.up.iter().copied().map(Into::into).collect()
    }

    /// Plot-ready `[x, y]` pairs for the `down` series.
    pub fn down_coords(&self) -> Vec<[f64; 2]> {
        self.down.iter().copied().map(Into::into).collect()
    }
}
