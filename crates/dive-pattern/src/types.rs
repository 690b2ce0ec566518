use std::fmt;

use crate::constants::{MIRROR_AXIS_Y, UNITS_PER_MM};

/// A point in the fixed-point pattern space (1 unit = 0.01 mm)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// This point moved by `(dx, dy)`
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Reflection about the horizontal mid-line of the working band
    pub const fn mirrored(self) -> Self {
        Self::new(self.x, MIRROR_AXIS_Y - self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A physical length stored as fixed-point hundredths of a millimetre
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Length(i64);

impl Length {
    pub const fn from_hundredths(hundredths: i64) -> Self {
        Self(hundredths)
    }

    /// Round a millimetre value to the nearest hundredth
    pub fn from_mm(mm: f64) -> Self {
        Self(crate::constants::mm_to_units(mm))
    }

    pub const fn hundredths(self) -> i64 {
        self.0
    }

    pub fn mm(self) -> f64 {
        crate::constants::units_to_mm(self.0)
    }
}

impl fmt::Display for Length {
    /// Millimetres with trailing zeros trimmed ("65.5", "40", "6.18")
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        let whole = abs / UNITS_PER_MM;
        let frac = abs % UNITS_PER_MM;
        if frac == 0 {
            write!(f, "{sign}{whole}")
        } else if frac % 10 == 0 {
            write!(f, "{sign}{whole}.{}", frac / 10)
        } else {
            write!(f, "{sign}{whole}.{frac:02}")
        }
    }
}

/// Which half of the viewer a point sequence describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    #[default]
    Right,
    /// Mirror image of the right side; only differs when the screen is off-centre
    Left,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Right, Side::Left];

    pub fn name(self) -> &'static str {
        match self {
            Side::Right => "Right",
            Side::Left => "Left",
        }
    }
}

/// Physical output page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Page {
    /// Lens shrouds
    One,
    /// Device pockets
    Two,
}

impl Page {
    pub fn number(self) -> u8 {
        match self {
            Page::One => 1,
            Page::Two => 2,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Page::One),
            2 => Some(Page::Two),
            _ => None,
        }
    }
}

/// A circle given by centre and radius
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub center: Point,
    pub radius: i64,
}

impl Circle {
    pub fn new(center: Point, radius: i64) -> Self {
        Self { center, radius }
    }
}

/// An axis-aligned rectangle; `(x, y)` is the corner with the smallest coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    /// Bottom edge y coordinate (y grows downwards on the sheet)
    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }

    /// Centre y coordinate, rounded towards the top edge
    pub fn center_y(&self) -> i64 {
        self.y + self.height / 2
    }
}

/// A straight crease or cut segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// Axis-aligned bounding box over a set of points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Smallest box containing all points, `None` for an empty set
    pub fn of(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Bounds {
            min: first,
            max: first,
        };
        for p in iter {
            bounds.min.x = bounds.min.x.min(p.x);
            bounds.min.y = bounds.min.y.min(p.y);
            bounds.max.x = bounds.max.x.max(p.x);
            bounds.max.y = bounds.max.y.max(p.y);
        }
        Some(bounds)
    }

    pub fn width(&self) -> i64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i64 {
        self.max.y - self.min.y
    }

    /// Whether this box lies inside `[0, width] x [0, height]`
    pub fn within(&self, width: i64, height: i64) -> bool {
        self.min.x >= 0 && self.min.y >= 0 && self.max.x <= width && self.max.y <= height
    }
}
