//! Geometric primitives for canvas placement.
//!
//! This module provides the integer geometry used when placing cells on the
//! draw.io canvas.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate on the canvas
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangle anchored at its top-left corner
//!
//! # Coordinate System
//!
//! Drawflow uses the draw.io coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Cell geometry is always expressed by its top-left corner, which is what
//! `mxGeometry` stores.

use serde::{Deserialize, Serialize};

/// A 2D point on the canvas.
///
/// # Examples
///
/// ```
/// # use drawflow_core::geometry::Point;
/// let anchor = Point::new(250, 50);
/// let below = anchor.offset(0, 120);
/// assert_eq!(below.y(), 170);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> i32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> i32 {
        self.y
    }

    /// Returns a new point moved by `dx` and `dy`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Converts this point (as a top-left corner) and a size into bounds.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new(self, size)
    }
}

/// Represents the dimensions of a cell with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    width: i32,
    height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> i32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> i32 {
        self.height
    }
}

/// An axis-aligned rectangle defined by its top-left corner and size.
///
/// # Examples
///
/// ```
/// # use drawflow_core::geometry::{Bounds, Point, Size};
/// let a = Bounds::new(Point::new(0, 0), Size::new(10, 10));
/// let b = Bounds::new(Point::new(20, 5), Size::new(10, 10));
///
/// let merged = a.merge(&b);
/// assert_eq!(merged.size(), Size::new(30, 15));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    origin: Point,
    size: Size,
}

impl Bounds {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Returns the top-left corner.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn min_x(&self) -> i32 {
        self.origin.x
    }

    pub fn min_y(&self) -> i32 {
        self.origin.y
    }

    pub fn max_x(&self) -> i32 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> i32 {
        self.origin.y + self.size.height
    }

    /// Returns the smallest bounds enclosing both `self` and `other`.
    pub fn merge(&self, other: &Bounds) -> Bounds {
        let min_x = self.min_x().min(other.min_x());
        let min_y = self.min_y().min(other.min_y());
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        Bounds::new(
            Point::new(min_x, min_y),
            Size::new(max_x - min_x, max_y - min_y),
        )
    }

    /// Returns `true` if the two rectangles share any interior area.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min_x() < other.max_x()
            && other.min_x() < self.max_x()
            && self.min_y() < other.max_y()
            && other.min_y() < self.max_y()
    }
}
