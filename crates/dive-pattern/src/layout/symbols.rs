//! Symbol assembly
//!
//! Reshapes a side's control points into the two drawable pieces: the
//! upper symbol (lens shroud) and the lower symbol (device pocket). Nothing
//! here changes geometry; it only selects points and adds the fixed
//! primitives anchored to them:
//! - outline and closing polylines
//! - lens circles (cut circle and fold guide)
//! - strap slots
//! - crease lines

use crate::constants::*;
use crate::params::ParameterSet;
use crate::types::{Circle, Point, Rect, Segment, Side};

use super::PatternPoints;

/// Which of a side's two pieces a symbol draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolKind {
    /// Lens shroud with strap mounts
    Upper,
    /// Device pocket
    Lower,
}

impl SymbolKind {
    fn suffix(self) -> &'static str {
        match self {
            SymbolKind::Upper => "UpSide",
            SymbolKind::Lower => "DownSide",
        }
    }
}

/// Drawing instructions for one piece of one side
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Symbol {
    pub side: Side,
    pub kind: SymbolKind,
    /// Outer cut line taken from the control points
    pub outline: Vec<Point>,
    /// Fixed glue-tab polyline closing the outline
    pub closing: Vec<Point>,
    pub circles: Vec<Circle>,
    pub strap_slots: Vec<Rect>,
    /// Dashed fold lines
    pub creases: Vec<Segment>,
}

impl Symbol {
    /// Stable identifier, e.g. `RightUpSide`
    pub fn id(&self) -> String {
        format!("{}{}", self.side.name(), self.kind.suffix())
    }

    /// Every vertex of the outline and closing polylines
    pub fn silhouette(&self) -> impl Iterator<Item = Point> + '_ {
        self.outline.iter().chain(self.closing.iter()).copied()
    }

    pub(crate) fn relabeled(&self, side: Side) -> Self {
        Self {
            side,
            ..self.clone()
        }
    }
}

/// Lens circle centre x and rim radius, shared by both symbols
struct LensPlacement {
    center_x: i64,
    radius: i64,
}

impl LensPlacement {
    fn new(params: &ParameterSet) -> Self {
        Self {
            center_x: half_rounded(params.pupillary_distance().hundredths()),
            radius: half_rounded(params.lens_diameter().hundredths()),
        }
    }
}

fn half_rounded(units: i64) -> i64 {
    (units as f64 / 2.0).round() as i64
}

fn strap_slot_height(params: &ParameterSet) -> i64 {
    params.strap_width().hundredths() + STRAP_SLOT_ALLOWANCE
}

/// Build the lens shroud symbol.
///
/// Anchors: cone corner (6), strap tab outer (8), strap tab return (11) and
/// the lens apex (3).
pub fn upper_symbol(params: &ParameterSet, points: &PatternPoints) -> Symbol {
    let lens = LensPlacement::new(params);
    let slot_height = strap_slot_height(params);
    let slot_y = UPPER_STRAP_MIDLINE - slot_height / 2;

    let cone = points.cone_corner;
    let tab_outer = points.strap_tab_outer;
    let tab_return = points.strap_tab_return;
    let apex = points.lens_apex;

    let creases = vec![
        Segment::new(Point::new(0, apex.y), apex),
        Segment::new(
            Point::new(cone.x, cone.y - CREASE_GAP),
            Point::new(tab_outer.x, cone.y - CREASE_GAP),
        ),
        Segment::new(apex, cone),
        Segment::new(cone, tab_return),
        Segment::new(Point::new(tab_return.x, apex.y), tab_return),
        Segment::new(
            Point::new(tab_return.x, tab_return.y + CREASE_GAP),
            Point::new(tab_outer.x, tab_return.y + CREASE_GAP),
        ),
        Segment::new(apex, POCKET_HINGE),
        Segment::new(UPPER_CLOSING[2], POCKET_HINGE),
        Segment::new(POCKET_HINGE, tab_return),
        Segment::new(Point::new(0, 0), POCKET_TOP),
    ];

    Symbol {
        side: points.side,
        kind: SymbolKind::Upper,
        outline: points.upper_outline(),
        closing: UPPER_CLOSING.to_vec(),
        circles: vec![
            Circle::new(Point::new(lens.center_x, LENS_CUT_Y), lens.radius - LENS_RIM),
            Circle::new(Point::new(lens.center_x, LENS_FAR_Y), lens.radius),
        ],
        strap_slots: UPPER_STRAP_SLOTS_X
            .iter()
            .map(|&x| Rect::new(x, slot_y, STRAP_SLOT_WIDTH, slot_height))
            .collect(),
        creases,
    }
}

/// Build the device pocket symbol.
///
/// Anchors: pocket corner (19), base corners (22, 23), rear corner and
/// strap (24, 25) and rear base (26). The pocket's height depends on the
/// device, so its strap slots centre between the rear corner and the end
/// of the rear strap flap.
pub fn lower_symbol(params: &ParameterSet, points: &PatternPoints) -> Symbol {
    let lens = LensPlacement::new(params);
    let slot_height = strap_slot_height(params);
    let band = points.rear_strap.y - points.rear_corner.y;
    let slot_y = ((band - slot_height) as f64 / 2.0).round() as i64 + points.rear_corner.y;

    let pocket = points.pocket_corner;
    let base = points.base_corner;
    let base_outer = points.base_corner_outer;
    let rear_base_y = points.rear_base.y;
    let fold_x = UPPER_CLOSING[2].x;

    let creases = vec![
        Segment::new(Point::new(0, 0), POCKET_TOP),
        Segment::new(UPPER_CLOSING[2], POCKET_HINGE),
        Segment::new(Point::new(fold_x, pocket.y), pocket),
        Segment::new(pocket, base),
        Segment::new(Point::new(0, base.y), base),
        Segment::new(
            Point::new(base.x + CREASE_GAP, base.y),
            Point::new(base.x + CREASE_GAP, rear_base_y),
        ),
        Segment::new(base_outer, Point::new(base_outer.x, rear_base_y)),
    ];

    let closing = vec![
        UPPER_CLOSING[4],
        UPPER_CLOSING[3],
        UPPER_CLOSING[2],
        Point::new(fold_x, pocket.y),
        Point::new(0, pocket.y),
    ];

    Symbol {
        side: points.side,
        kind: SymbolKind::Lower,
        outline: points.lower_outline(),
        closing,
        circles: vec![Circle::new(
            Point::new(lens.center_x, LENS_FAR_Y),
            lens.radius - LENS_RIM,
        )],
        strap_slots: LOWER_STRAP_SLOT_OFFSETS
            .iter()
            .map(|&offset| {
                Rect::new(
                    points.rear_corner.x - offset,
                    slot_y,
                    STRAP_SLOT_WIDTH,
                    slot_height,
                )
            })
            .collect(),
        creases,
    }
}
