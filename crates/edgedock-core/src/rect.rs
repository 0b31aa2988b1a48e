/// A screen-space point in physical pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair, used for both the screen and the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// A rectangle representing a window's position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from a top-left origin and a size.
    pub fn from_origin(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Returns a copy moved to `origin`, keeping the size.
    pub fn with_origin(&self, origin: Point) -> Self {
        Self::from_origin(origin, self.size())
    }

    /// Whether the point lies inside the rectangle.
    ///
    /// The left/top edges are inclusive and the right/bottom edges are
    /// exclusive, so adjacent rectangles never both claim a pixel.
    pub fn contains(&self, p: Point) -> bool {
        self.spans_x(p.x) && self.spans_y(p.y)
    }

    /// Whether `x` falls within the horizontal span `[x, right)`.
    pub fn spans_x(&self, x: i32) -> bool {
        x >= self.x && x < self.right()
    }

    /// Whether `y` falls within the vertical span `[y, bottom)`.
    pub fn spans_y(&self, y: i32) -> bool {
        y >= self.y && y < self.bottom()
    }
}
