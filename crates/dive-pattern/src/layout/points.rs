//! Control point construction
//!
//! Derives the 29 control points of one side of the pattern from the
//! parameter set. Each point is built from earlier ones by a fixed sequence
//! of geometric steps, and every derived coordinate is rounded to the
//! nearest unit as soon as it is computed.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::constants::*;
use crate::params::ParameterSet;
use crate::types::{Point, Side};

/// Number of points in a side's sequence
pub const POINT_COUNT: usize = 29;

/// Positions of the named anchors in the point sequence.
///
/// These indices are shared with markup consumers and must stay stable.
pub mod index {
    pub const SHROUD_TAB: usize = 0;
    pub const SHROUD_CORNER: usize = 1;
    pub const SCREEN_EDGE: usize = 2;
    pub const LENS_APEX: usize = 3;
    pub const FLAP_CREASE: usize = 4;
    pub const FLAP_TIP: usize = 5;
    pub const CONE_CORNER: usize = 6;
    pub const STRAP_TAB_BASE: usize = 7;
    pub const STRAP_TAB_OUTER: usize = 8;
    pub const STRAP_TAB_FAR: usize = 9;
    pub const STRAP_TAB_FAR_INNER: usize = 10;
    pub const STRAP_TAB_RETURN: usize = 11;
    pub const FLAP_TIP_MIRROR: usize = 12;
    pub const FLAP_CREASE_MIRROR: usize = 13;
    pub const POCKET_HINGE: usize = 14;
    pub const POCKET_HINGE_INNER: usize = 15;
    pub const POCKET_TOP: usize = 16;
    pub const LOWER_HINGE_INNER: usize = 17;
    pub const LOWER_HINGE: usize = 18;
    pub const POCKET_CORNER: usize = 19;
    pub const DEPTH_CORNER: usize = 20;
    pub const DEPTH_BASE: usize = 21;
    pub const BASE_CORNER: usize = 22;
    pub const BASE_CORNER_OUTER: usize = 23;
    pub const REAR_CORNER: usize = 24;
    pub const REAR_STRAP: usize = 25;
    pub const REAR_BASE: usize = 26;
    pub const REAR_OUTER: usize = 27;
    pub const REAR_TAB: usize = 28;

    /// Last point of the upper symbol's outline, shared with the lower one
    pub const UPPER_END: usize = POCKET_TOP;
}

/// The two angles that decide the shape of the cone's side flap
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CuttingAngles {
    /// Angle from the lens apex to the cone corner, plus 45°
    pub cone: f64,
    /// Angle from the lens apex to the screen edge, capped at `cone`
    pub flap: f64,
}

impl CuttingAngles {
    fn measure(apex: Point, cone_corner: Point, screen_edge: Point) -> Self {
        let cone = slope_angle(apex, cone_corner) + FRAC_PI_4;
        let mut flap = slope_angle(apex, screen_edge);
        if flap.abs() > cone {
            flap = cone;
        }
        Self { cone, flap }
    }

    /// Past 90° the mirrored crease would self-intersect the flap
    pub fn is_degenerate(&self) -> bool {
        self.cone > FRAC_PI_2
    }
}

/// Named control points of one side, in sequence order.
///
/// The upper symbol (lens shroud) is traced from `shroud_tab` to
/// `pocket_top`; the lower symbol (device pocket) from `pocket_top` to
/// `rear_tab`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PatternPoints {
    pub side: Side,
    pub angles: CuttingAngles,

    // Lens shroud
    pub shroud_tab: Point,
    pub shroud_corner: Point,
    pub screen_edge: Point,
    pub lens_apex: Point,
    pub flap_crease: Point,
    pub flap_tip: Point,
    pub cone_corner: Point,
    pub strap_tab_base: Point,
    pub strap_tab_outer: Point,
    pub strap_tab_far: Point,
    pub strap_tab_far_inner: Point,
    pub strap_tab_return: Point,
    pub flap_tip_mirror: Point,
    pub flap_crease_mirror: Point,
    pub pocket_hinge: Point,
    pub pocket_hinge_inner: Point,
    pub pocket_top: Point,

    // Device pocket
    pub lower_hinge_inner: Point,
    pub lower_hinge: Point,
    pub pocket_corner: Point,
    pub depth_corner: Point,
    pub depth_base: Point,
    pub base_corner: Point,
    pub base_corner_outer: Point,
    pub rear_corner: Point,
    pub rear_strap: Point,
    pub rear_base: Point,
    pub rear_outer: Point,
    pub rear_tab: Point,
}

impl PatternPoints {
    /// Run the construction for one side
    pub fn construct(params: &ParameterSet, side: Side) -> Self {
        let screen = params.screen_offset(side);
        let screen_mm = screen / UNITS_PER_MM as f64;
        let half_width_mm = params.device_width().mm() / 2.0 - LENS_AXIS_INSET_MM;
        let focal_mm = params.lens_focal_length().mm();
        let device_width = params.device_width().hundredths();
        let depth = params.device_depth().hundredths() + WALL_ALLOWANCE;

        // Lens centre to the far corner of the device fixes the shroud height.
        let shroud_y = LENS_APEX.y + diagonal_units(half_width_mm, focal_mm);
        let shroud_corner = Point::new(SHROUD_CORNER_X, shroud_y);
        let shroud_tab = Point::new(0, shroud_y - SHROUD_TAB_DROP);

        let screen_x = round(screen + SCREEN_CLEARANCE as f64);
        let screen_edge = Point::new(screen_x, shroud_y);
        let lens_apex = LENS_APEX;

        let cone_run = diagonal_units(screen_mm - LENS_APEX_MM, focal_mm);
        let cone_rise = round(half_width_mm * UNITS_PER_MM as f64);
        let cone_corner = lens_apex.offset(cone_run, cone_rise);

        let angles = CuttingAngles::measure(lens_apex, cone_corner, screen_edge);
        log::debug!(
            "{} side: screen offset {}, cone angle {:.4}, flap angle {:.4}",
            side.name(),
            screen,
            angles.cone,
            angles.flap
        );

        let flap_crease = Point::new(
            round(lens_apex.x as f64 + (angles.flap.cos() * FLAP_CREASE_RADIUS).abs()),
            round((angles.flap.sin() * FLAP_CREASE_RADIUS).abs()) + lens_apex.y,
        );
        let tilt = angles.cone - FRAC_PI_4;
        let flap_tip = cone_corner.offset(
            -round((tilt.sin() * FLAP_TIP_RADIUS).abs()),
            round((tilt.cos() * FLAP_TIP_RADIUS).abs()),
        );

        // Strap tab around the cone corner, spanning the device width.
        let strap_tab_base = cone_corner.offset(0, STRAP_TAB);
        let strap_tab_outer = strap_tab_base.offset(STRAP_TAB, 0);
        let strap_tab_far = strap_tab_outer.offset(0, -device_width - STRAP_TAB_EXTRA);
        let strap_tab_far_inner = strap_tab_far.offset(-STRAP_TAB, 0);
        let strap_tab_return = strap_tab_far_inner.offset(0, STRAP_TAB);

        let flap_tip_mirror = flap_tip.mirrored();
        let flap_crease_mirror = mirrored_crease(flap_crease, &angles);

        // Device pocket, seated one millimetre inside the focal distance.
        let lower_hinge = POCKET_HINGE;
        let pocket_corner = Point::new(
            screen_x,
            diagonal_units(half_width_mm, focal_mm - POCKET_FOCAL_INSET_MM) + lower_hinge.y,
        );
        let depth_corner = pocket_corner.offset(depth, 0);
        let depth_base = depth_corner.offset(0, depth);
        let base_corner = Point::new(pocket_corner.x, depth_base.y);
        let base_corner_outer = Point::new(depth_corner.x, depth_base.y);

        // Rear wall repeats the cone run and rise from the pocket base.
        let rear_corner = base_corner_outer.offset(cone_run, cone_rise);
        let rear_strap = rear_corner.offset(0, REAR_STRAP_DROP);
        let rear_base = base_corner_outer.offset(0, device_width + WALL_ALLOWANCE);
        let rear_outer = Point::new(SHROUD_CORNER_X, rear_base.y);
        let rear_tab = Point::new(0, rear_base.y - SHROUD_TAB_DROP);

        Self {
            side,
            angles,
            shroud_tab,
            shroud_corner,
            screen_edge,
            lens_apex,
            flap_crease,
            flap_tip,
            cone_corner,
            strap_tab_base,
            strap_tab_outer,
            strap_tab_far,
            strap_tab_far_inner,
            strap_tab_return,
            flap_tip_mirror,
            flap_crease_mirror,
            pocket_hinge: POCKET_HINGE,
            pocket_hinge_inner: POCKET_HINGE_INNER,
            pocket_top: POCKET_TOP,
            lower_hinge_inner: POCKET_HINGE_INNER,
            lower_hinge,
            pocket_corner,
            depth_corner,
            depth_base,
            base_corner,
            base_corner_outer,
            rear_corner,
            rear_strap,
            rear_base,
            rear_outer,
            rear_tab,
        }
    }

    /// All points in drawing order
    pub fn sequence(&self) -> [Point; POINT_COUNT] {
        [
            self.shroud_tab,
            self.shroud_corner,
            self.screen_edge,
            self.lens_apex,
            self.flap_crease,
            self.flap_tip,
            self.cone_corner,
            self.strap_tab_base,
            self.strap_tab_outer,
            self.strap_tab_far,
            self.strap_tab_far_inner,
            self.strap_tab_return,
            self.flap_tip_mirror,
            self.flap_crease_mirror,
            self.pocket_hinge,
            self.pocket_hinge_inner,
            self.pocket_top,
            self.lower_hinge_inner,
            self.lower_hinge,
            self.pocket_corner,
            self.depth_corner,
            self.depth_base,
            self.base_corner,
            self.base_corner_outer,
            self.rear_corner,
            self.rear_strap,
            self.rear_base,
            self.rear_outer,
            self.rear_tab,
        ]
    }

    /// Outline of the lens shroud
    pub fn upper_outline(&self) -> Vec<Point> {
        self.sequence()[..=index::UPPER_END].to_vec()
    }

    /// Outline of the device pocket
    pub fn lower_outline(&self) -> Vec<Point> {
        self.sequence()[index::UPPER_END..].to_vec()
    }

    /// The same geometry attributed to another side
    pub fn relabeled(&self, side: Side) -> Self {
        Self {
            side,
            ..self.clone()
        }
    }
}

/// Mirror image of the flap crease, or the fixed anchor when the angle is degenerate
pub(crate) fn mirrored_crease(flap_crease: Point, angles: &CuttingAngles) -> Point {
    if angles.is_degenerate() {
        DEGENERATE_CREASE_ANCHOR
    } else {
        flap_crease.mirrored()
    }
}

fn round(value: f64) -> i64 {
    value.round() as i64
}

/// Hypotenuse of two millimetre legs, in units.
/// Must stay `sqrt(a² + b²)`: `hypot` can differ in the last bit and change the rounding.
fn diagonal_units(a_mm: f64, b_mm: f64) -> i64 {
    round((a_mm * a_mm + b_mm * b_mm).sqrt() * UNITS_PER_MM as f64)
}

fn slope_angle(from: Point, to: Point) -> f64 {
    ((to.y - from.y) as f64 / (to.x - from.x) as f64).atan()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_matches_named_indices() {
        let points = PatternPoints::construct(&ParameterSet::default(), Side::Right);
        let seq = points.sequence();
        assert_eq!(seq[index::LENS_APEX], LENS_APEX);
        assert_eq!(seq[index::FLAP_CREASE], points.flap_crease);
        assert_eq!(seq[index::POCKET_CORNER], points.pocket_corner);
        assert_eq!(seq[index::REAR_TAB], points.rear_tab);
        assert_eq!(points.upper_outline().len(), 17);
        assert_eq!(points.lower_outline().len(), 13);
        assert_eq!(points.upper_outline().last(), points.lower_outline().first());
    }

    #[test]
    fn test_flap_angle_capped_at_cone_angle() {
        let apex = LENS_APEX;
        // Screen edge nearly straight above the apex: steep flap angle.
        let angles = CuttingAngles::measure(apex, apex.offset(3000, 775), apex.offset(10, 4000));
        assert_eq!(angles.flap, angles.cone);

        let angles = CuttingAngles::measure(apex, apex.offset(3000, 775), apex.offset(4000, 100));
        assert!(angles.flap < angles.cone);
    }

    #[test]
    fn test_vertical_screen_edge_is_total() {
        let apex = LENS_APEX;
        let angles = CuttingAngles::measure(apex, apex.offset(3000, 775), apex.offset(0, 4000));
        assert!(angles.flap.is_finite());
        assert_eq!(angles.flap, angles.cone);
    }

    #[test]
    fn test_degenerate_crease_uses_anchor() {
        let crease = Point::new(6596, 10169);
        let regular = CuttingAngles {
            cone: 1.2,
            flap: 0.9,
        };
        assert_eq!(mirrored_crease(crease, &regular), Point::new(6596, 2831));

        let steep = CuttingAngles {
            cone: FRAC_PI_2 + 0.01,
            flap: 0.9,
        };
        assert!(steep.is_degenerate());
        assert_eq!(mirrored_crease(crease, &steep), DEGENERATE_CREASE_ANCHOR);
    }

    #[test]
    fn test_diagonal_units() {
        assert_eq!(diagonal_units(3.0, 4.0), 500);
        assert_eq!(diagonal_units(7.75, 40.0), 4074);
    }
}
