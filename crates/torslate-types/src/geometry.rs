use serde::{Deserialize, Serialize};

/// Screen position of the result surface or the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Rectangle in logical (UI) coordinates as reported by a drag gesture.
///
/// Width and height may be negative when the drag ran right-to-left or
/// bottom-to-top; call [`SelectionRect::normalized`] before measuring it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl SelectionRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle spanned by a press point and a release point, in any order
    pub fn from_corners(start: Point, end: Point) -> Self {
        Self {
            x: start.x.min(end.x),
            y: start.y.min(end.y),
            width: (end.x - start.x).abs(),
            height: (end.y - start.y).abs(),
        }
    }

    /// Same area with the origin at the top-left corner and non-negative extents
    pub fn normalized(self) -> Self {
        let end = Point::new(self.x + self.width, self.y + self.height);
        Self::from_corners(Point::new(self.x, self.y), end)
    }
}

/// Rectangle in physical pixels, as consumed by the screen capture provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}
