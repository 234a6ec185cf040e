//! Geometry primitives shared by the tree: points, rectangles and quadrants.
//!
//! Rectangles use screen-style orientation: `y` grows downwards, so the
//! "top" half of a rectangle is the half with the smaller `y` values.

/// A 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate, growing downwards
    pub y: f64,
}

impl Point {
    /// Creates a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true when both coordinates are finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned rectangle: origin plus non-negative width and height.
///
/// The rectangle occupies `[x, x + width] × [y, y + height]`. All four
/// edges are inclusive for [`Rect::contains`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Horizontal extent, never negative after [`Rect::new`]
    pub width: f64,
    /// Vertical extent, never negative after [`Rect::new`]
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle, normalizing negative dimensions.
    ///
    /// A negative width (or height) is flipped and the origin shifted so the
    /// rectangle covers the same area:
    ///
    /// ```
    /// use quadtree::Rect;
    ///
    /// let a = Rect::new(0.0, 0.0, 100.0, 200.0);
    /// let b = Rect::new(100.0, 200.0, -100.0, -200.0);
    /// assert_eq!(a, b);
    /// ```
    pub fn new(mut x: f64, mut y: f64, mut width: f64, mut height: f64) -> Self {
        if width < 0.0 {
            width = -width;
            x -= width;
        }
        if height < 0.0 {
            height = -height;
            y -= height;
        }
        Self { x, y, width, height }
    }

    /// Right edge (`x + width`)
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`)
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Midpoint of the rectangle, where it is split into quadrants
    #[must_use]
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Inclusive containment test on all four edges
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.y >= self.y && p.x <= self.right() && p.y <= self.bottom()
    }

    /// The sub-rectangle covering one quadrant of this rectangle
    #[must_use]
    pub fn quadrant(&self, quadrant: Quadrant) -> Self {
        let sub_width = self.width / 2.0;
        let sub_height = self.height / 2.0;
        match quadrant {
            Quadrant::TopRight => Self::new(self.x + sub_width, self.y, sub_width, sub_height),
            Quadrant::TopLeft => Self::new(self.x, self.y, sub_width, sub_height),
            Quadrant::BottomLeft => Self::new(self.x, self.y + sub_height, sub_width, sub_height),
            Quadrant::BottomRight => {
                Self::new(self.x + sub_width, self.y + sub_height, sub_width, sub_height)
            }
        }
    }
}

/// One of the four sub-regions produced by halving a rectangle on both axes.
///
/// The discriminant is the child slot used by [`crate::Node`].
#[expect(clippy::exhaustive_enums, reason = "a rectangle always has exactly four quadrants")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Smaller `y`, larger `x` half
    TopRight = 0,
    /// Smaller `y`, smaller `x` half; owns both midpoint lines
    TopLeft = 1,
    /// Larger `y`, smaller `x` half; owns the vertical midpoint line
    BottomLeft = 2,
    /// Larger `y`, larger `x` half
    BottomRight = 3,
}

impl Quadrant {
    /// All quadrants in child slot order
    pub const ALL: [Self; 4] = [Self::TopRight, Self::TopLeft, Self::BottomLeft, Self::BottomRight];

    /// Child slot index
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Classifies a point against the midpoint of `bounds`.
    ///
    /// Points on a midpoint line belong to the top and/or left side. Returns
    /// `None` only when no comparison holds, which happens for NaN
    /// coordinates.
    pub fn of(bounds: &Rect, p: Point) -> Option<Self> {
        let mid = bounds.center();

        if p.x <= mid.x && p.y <= mid.y {
            return Some(Self::TopLeft);
        }
        if p.x > mid.x && p.y <= mid.y {
            return Some(Self::TopRight);
        }
        if p.x <= mid.x && p.y > mid.y {
            return Some(Self::BottomLeft);
        }
        if p.x > mid.x && p.y > mid.y {
            return Some(Self::BottomRight);
        }
        None
    }

    /// Quadrants of `bounds` a query rectangle may reach, in slot order.
    ///
    /// This only compares the query's extent with the midpoint lines, never
    /// against the quadrants' own rectangles, so it can report a quadrant
    /// the query misses. Callers filter exact results afterwards. The
    /// comparisons mirror [`Quadrant::of`]: top and left quadrants own the
    /// midpoint lines, so a query edge lying on a midpoint still reaches
    /// them.
    pub fn overlapping(bounds: &Rect, query: &Rect) -> impl Iterator<Item = Self> + use<> {
        let mid = bounds.center();

        let reaches_top = query.y <= mid.y;
        let reaches_left = query.x <= mid.x;
        let reaches_right = query.right() > mid.x;
        let reaches_bottom = query.bottom() > mid.y;

        let hits = [
            reaches_top && reaches_right,
            reaches_top && reaches_left,
            reaches_bottom && reaches_left,
            reaches_bottom && reaches_right,
        ];

        Self::ALL
            .into_iter()
            .zip(hits)
            .filter_map(|(quadrant, hit)| hit.then_some(quadrant))
    }
}
