//! Pattern generation - the full call graph from parameters to layout
//!
//! 1. Construct the right side's control points
//! 2. Construct the left side's, only when the screen is off-centre
//! 3. Assemble the symbols of both sides
//! 4. Place both sides on the two pages

use crate::layout::{
    PageLayout, PatternPoints, Symbol, compute_page_layout, lower_symbol, upper_symbol,
};
use crate::params::ParameterSet;
use crate::types::Side;

/// Points and drawable symbols of one side
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SidePattern {
    pub points: PatternPoints,
    pub upper: Symbol,
    pub lower: Symbol,
}

impl SidePattern {
    fn assemble(params: &ParameterSet, points: PatternPoints) -> Self {
        Self {
            upper: upper_symbol(params, &points),
            lower: lower_symbol(params, &points),
            points,
        }
    }

    pub fn side(&self) -> Side {
        self.points.side
    }

    fn relabeled(&self, side: Side) -> Self {
        Self {
            points: self.points.relabeled(side),
            upper: self.upper.relabeled(side),
            lower: self.lower.relabeled(side),
        }
    }
}

/// Everything needed to draw the viewer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Pattern {
    pub params: ParameterSet,
    pub right: SidePattern,
    pub left: SidePattern,
    pub layout: PageLayout,
    /// Whether the left side has its own geometry
    pub mirrored: bool,
}

impl Pattern {
    pub fn side(&self, side: Side) -> &SidePattern {
        match side {
            Side::Right => &self.right,
            Side::Left => &self.left,
        }
    }

    /// The four symbols in definition order
    pub fn symbols(&self) -> [&Symbol; 4] {
        [
            &self.right.upper,
            &self.right.lower,
            &self.left.upper,
            &self.left.lower,
        ]
    }
}

/// Generate the pattern for a validated parameter set.
///
/// Derivation cannot fail once the parameters are valid.
pub fn generate(params: &ParameterSet) -> Pattern {
    let right = SidePattern::assemble(params, PatternPoints::construct(params, Side::Right));

    let mirrored = !params.is_screen_centered();
    let left = if mirrored {
        SidePattern::assemble(params, PatternPoints::construct(params, Side::Left))
    } else {
        right.relabeled(Side::Left)
    };
    log::debug!(
        "generated pattern, left side {}",
        if mirrored { "recomputed" } else { "shared" }
    );

    let layout = compute_page_layout(params, &right.points, &left.points);

    Pattern {
        params: params.clone(),
        right,
        left,
        layout,
        mirrored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_screen_shares_geometry() {
        let pattern = generate(&ParameterSet::default());
        assert!(!pattern.mirrored);
        assert_eq!(pattern.left.side(), Side::Left);
        assert_eq!(pattern.left.points.sequence(), pattern.right.points.sequence());
        assert_eq!(pattern.left.upper.id(), "LeftUpSide");
        assert_eq!(pattern.left.lower.id(), "LeftDownSide");
    }

    #[test]
    fn test_off_center_screen_recomputes_left() {
        let params = ParameterSet::default()
            .set("device_screen_middle", "70")
            .unwrap();
        let pattern = generate(&params);
        assert!(pattern.mirrored);
        assert_ne!(pattern.left.points.sequence(), pattern.right.points.sequence());
    }

    #[test]
    fn test_symbol_order() {
        let pattern = generate(&ParameterSet::default());
        let ids: Vec<String> = pattern.symbols().iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["RightUpSide", "RightDownSide", "LeftUpSide", "LeftDownSide"]);
    }
}
