//! Core types for the region editor.
//!
//! This module defines the fundamental data structures manipulated by the
//! interaction engine: points and sizes, rectangle geometry, the rectangles
//! themselves, the container surface and the closed set of resize directions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Points and Sizes
// ============================================================================

/// A 2D point or offset. The coordinate space depends on context: global
/// (host pointer space), container-local, or image pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height of a surface or an image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when both extents are strictly positive.
    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

// ============================================================================
// Rectangle Geometry
// ============================================================================

/// Position and size of a rectangle in container-local units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Geometry {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner
    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// True when the rectangle lies fully inside `container`.
    pub fn fits_within(&self, container: Container) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.right() <= container.width
            && self.bottom() <= container.height
    }
}

/// Unique identifier of a rectangle within a store.
pub type RectId = u64;

/// A manipulable region: geometry plus a user-visible label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub id: RectId,
    #[serde(flatten)]
    pub geometry: Geometry,
    /// "Area N" on creation, "Detected: ..." after a detection round trip
    pub label: String,
}

impl Rectangle {
    pub fn new(id: RectId, geometry: Geometry, label: impl Into<String>) -> Self {
        Self {
            id,
            geometry,
            label: label.into(),
        }
    }
}

// ============================================================================
// Container
// ============================================================================

/// Extents of the manipulable surface. Queried from the host at the start
/// of every interaction and fixed for that interaction's duration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub width: f32,
    pub height: f32,
}

impl Container {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The container's extents together with its top-left corner in the
/// host's global pointer space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerFrame {
    pub origin: Point,
    pub container: Container,
}

impl ContainerFrame {
    pub const fn new(origin: Point, container: Container) -> Self {
        Self { origin, container }
    }
}

// ============================================================================
// Resize Directions
// ============================================================================

/// Which edges or corner a resize handle controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl Direction {
    /// All eight handles, clockwise from the top-left corner.
    pub const ALL: [Direction; 8] = [
        Direction::NW,
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::N => "n",
            Direction::S => "s",
            Direction::E => "e",
            Direction::W => "w",
            Direction::NE => "ne",
            Direction::NW => "nw",
            Direction::SE => "se",
            Direction::SW => "sw",
        }
    }

    /// Handle anchor point on the border of `geometry`.
    pub fn handle_position(&self, geometry: &Geometry) -> Point {
        let cx = geometry.x + geometry.width / 2.0;
        let cy = geometry.y + geometry.height / 2.0;
        match self {
            Direction::N => Point::new(cx, geometry.y),
            Direction::S => Point::new(cx, geometry.bottom()),
            Direction::E => Point::new(geometry.right(), cy),
            Direction::W => Point::new(geometry.x, cy),
            Direction::NE => Point::new(geometry.right(), geometry.y),
            Direction::NW => Point::new(geometry.x, geometry.y),
            Direction::SE => Point::new(geometry.right(), geometry.bottom()),
            Direction::SW => Point::new(geometry.x, geometry.bottom()),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A direction token that is not one of the eight handles.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown resize direction: {0:?}")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" => Ok(Direction::N),
            "s" => Ok(Direction::S),
            "e" => Ok(Direction::E),
            "w" => Ok(Direction::W),
            "ne" => Ok(Direction::NE),
            "nw" => Ok(Direction::NW),
            "se" => Ok(Direction::SE),
            "sw" => Ok(Direction::SW),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

// ============================================================================
// Image-Pixel Rectangles
// ============================================================================

/// A crop rectangle in image-pixel coordinates, as sent to the backend.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}
