#![forbid(unsafe_code)]

//! Geometric primitives.

/// A point in CSS pixel space (origin at top-left, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangle for tile bounds, chart plot areas, and hit testing.
///
/// Uses CSS pixel coordinates (origin at top-left). Width and height are
/// expected to be non-negative; constructors clamp negative sizes to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f64,
    /// Top edge (inclusive).
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Area in square pixels.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if a point is inside the rectangle (half-open on right/bottom).
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Compute the intersection with another rectangle.
    ///
    /// Returns `None` if the rectangles don't overlap.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Whether the two rectangles share any interior area.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.intersection(other).is_some()
    }

    /// Create a new rectangle inside the current one with the given margin.
    pub fn inner(&self, margin: &Sides) -> Rect {
        Rect::new(
            self.x + margin.left,
            self.y + margin.top,
            self.width - margin.left - margin.right,
            self.height - margin.top - margin.bottom,
        )
    }

    /// Create a new rectangle that is the union of this rectangle and another.
    ///
    /// The result is the smallest rectangle that contains both.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());

        Rect::new(x, y, right - x, bottom - y)
    }
}

/// Sides for padding/margin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sides {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Sides {
    /// Create new sides with equal values.
    pub const fn all(val: f64) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Block (top/bottom) sides equal, inline (left/right) sides equal.
    pub const fn symmetric(block: f64, inline: f64) -> Self {
        Self {
            top: block,
            right: inline,
            bottom: block,
            left: inline,
        }
    }

    /// Create new sides with specific values.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The sum of left and right.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// The sum of top and bottom.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}
