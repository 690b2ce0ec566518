//! Shared constants for the pattern construction
//!
//! This module centralizes the fixed offsets and anchors used throughout the
//! layout. Unless a name ends in `_MM`, values are fixed-point units of
//! 1/100 mm.

use crate::types::Point;

// =============================================================================
// Unit Conversion
// =============================================================================

/// Fixed-point units per millimetre
pub const UNITS_PER_MM: i64 = 100;

/// Convert a millimetre measurement to fixed-point units, rounding to nearest
#[inline]
pub fn mm_to_units(mm: f64) -> i64 {
    (mm * UNITS_PER_MM as f64).round() as i64
}

/// Convert fixed-point units to millimetres
#[inline]
pub fn units_to_mm(units: i64) -> f64 {
    units as f64 / UNITS_PER_MM as f64
}

// =============================================================================
// Lens Shroud (upper symbol)
// =============================================================================

/// Apex of the lens cone; every cutting angle is measured from here
pub const LENS_APEX: Point = Point::new(5800, 9000);

/// Distance of the lens apex from the pattern's inner edge, in millimetres
pub const LENS_APEX_MM: f64 = 58.0;

/// Inset of the lens axis from the device's half width, in millimetres
pub const LENS_AXIS_INSET_MM: f64 = 25.0;

/// The pocket seats the lens this much closer than the focal length
pub const POCKET_FOCAL_INSET_MM: f64 = 1.0;

/// x of the outer shroud corner
pub const SHROUD_CORNER_X: i64 = 1300;

/// Drop from the shroud corner to the glue tab tip
pub const SHROUD_TAB_DROP: i64 = 1200;

/// Clearance added to the screen offset so the cone clears the screen edge
pub const SCREEN_CLEARANCE: i64 = 100;

/// Polar radius of the side flap crease point (14.14 mm)
pub const FLAP_CREASE_RADIUS: f64 = 1414.0;

/// Polar radius of the side flap tip (10 mm)
pub const FLAP_TIP_RADIUS: f64 = 1000.0;

/// Size of the strap tabs around the cone corner
pub const STRAP_TAB: i64 = 1000;

/// Extra length of the strap tab beyond the device width
pub const STRAP_TAB_EXTRA: i64 = 2000;

/// The lower half of the shroud mirrors the upper half about this line
pub const MIRROR_AXIS_Y: i64 = 13000;

/// Substitute for the mirrored flap crease when the cone angle is degenerate
pub const DEGENERATE_CREASE_ANCHOR: Point = Point::new(5800, 3300);

// =============================================================================
// Device Pocket (lower symbol)
// =============================================================================

/// Hinge between the shroud and the pocket
pub const POCKET_HINGE: Point = Point::new(5800, 4000);

/// Inner end of the pocket hinge
pub const POCKET_HINGE_INNER: Point = Point::new(5600, 4000);

/// Top edge of the pocket's glue flap
pub const POCKET_TOP: Point = Point::new(5600, 0);

/// Allowance added to the device depth and width for the pocket walls
pub const WALL_ALLOWANCE: i64 = 100;

/// Length of the rear strap flap
pub const REAR_STRAP_DROP: i64 = 5000;

// =============================================================================
// Symbol Assembly
// =============================================================================

/// Centre height of the lens cut circle on the upper symbol
pub const LENS_CUT_Y: i64 = 6500;

/// Centre height of the far lens circle on both symbols
pub const LENS_FAR_Y: i64 = 1500;

/// Radius reduction of the smaller lens circle
pub const LENS_RIM: i64 = 200;

/// Width of a strap slot
pub const STRAP_SLOT_WIDTH: i64 = 200;

/// Slack added to the strap width for its slot
pub const STRAP_SLOT_ALLOWANCE: i64 = 200;

/// Vertical centre of the upper symbol's strap slots
pub const UPPER_STRAP_MIDLINE: i64 = 6500;

/// x positions of the upper symbol's strap slots
pub const UPPER_STRAP_SLOTS_X: [i64; 3] = [5600, 6800, 7800];

/// Offsets of the lower symbol's strap slots back from the rear corner
pub const LOWER_STRAP_SLOT_OFFSETS: [i64; 2] = [1200, 2100];

/// Gap between parallel crease lines and the edge they follow
pub const CREASE_GAP: i64 = 100;

/// Fixed closing polyline of the upper symbol
pub const UPPER_CLOSING: [Point; 5] = [
    Point::new(0, 7600),
    Point::new(800, 7600),
    Point::new(1800, 4000),
    Point::new(800, 400),
    Point::new(0, 400),
];

// =============================================================================
// Page Layout
// =============================================================================

/// Margin added to page translations
pub const PAGE_MARGIN: i64 = 50;

/// Extra length of the logo area beyond the device height
pub const LOGO_LENGTH_ALLOWANCE: i64 = 200;

/// Extra width of the logo area beyond the device width
pub const LOGO_WIDTH_ALLOWANCE: i64 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversion() {
        assert_eq!(mm_to_units(65.5), 6550);
        assert_eq!(mm_to_units(6.18), 618);
        assert_eq!(mm_to_units(132.6), 13260);
        assert_eq!(units_to_mm(6550), 65.5);
    }

    #[test]
    fn test_anchors_sit_below_mirror_axis() {
        assert!(LENS_APEX.y < MIRROR_AXIS_Y);
        assert_eq!(POCKET_HINGE.x, LENS_APEX.x);
        assert_eq!(POCKET_TOP.x, POCKET_HINGE_INNER.x);
    }
}
