//! Page layout
//!
//! Places both sides on the two physical pages. Page 1 carries the two lens
//! shrouds mirrored about a shared vertical fold, page 2 the two device
//! pockets. Both pages are always laid out; single-page output only hides
//! the other one.

use crate::constants::*;
use crate::params::ParameterSet;
use crate::types::{Page, Point};

use super::PatternPoints;

/// Translation and visibility of one physical page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagePlacement {
    pub page: Page,
    pub translate: Point,
    pub visible: bool,
}

/// Where the logo goes on the outside of the right device pocket.
///
/// The image is drawn rotated by 180° about `origin`, so it extends towards
/// smaller coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogoPlacement {
    pub origin: Point,
    pub width: i64,
    pub height: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageLayout {
    pub pages: [PagePlacement; 2],
    pub logo: LogoPlacement,
    /// Whether the shared fold had to be pulled back onto the sheet
    pub clamped: bool,
}

impl PageLayout {
    pub fn placement(&self, page: Page) -> &PagePlacement {
        match page {
            Page::One => &self.pages[0],
            Page::Two => &self.pages[1],
        }
    }
}

/// Horizontal position of the fold shared by the two sides.
///
/// Half the sum of both sides' widest extents plus a margin; when that
/// exceeds half the page width it is pulled back to half the page width.
/// Returns the position and whether it was clamped.
pub fn fold_offset(params: &ParameterSet, right: &PatternPoints, left: &PatternPoints) -> (i64, bool) {
    let reach = |p: &PatternPoints| p.strap_tab_outer.x.max(p.rear_corner.x);
    let x = (reach(right) + reach(left)) / 2 + PAGE_MARGIN;
    let half_page = params.page_width().hundredths() as f64 / 2.0;
    if x as f64 > half_page {
        (half_page.round() as i64 + PAGE_MARGIN, true)
    } else {
        (x, false)
    }
}

/// Compute both page placements and the logo area
pub fn compute_page_layout(
    params: &ParameterSet,
    right: &PatternPoints,
    left: &PatternPoints,
) -> PageLayout {
    let (x, clamped) = fold_offset(params, right, left);
    if clamped {
        log::warn!(
            "pattern is wider than a {} mm page; fold pulled back to x={}",
            params.page_width(),
            x
        );
    }
    let first = Point::new(x, right.shroud_corner.y + PAGE_MARGIN);
    let second = match params.page() {
        Some(Page::Two) => Point::new(x, PAGE_MARGIN),
        _ => first,
    };
    log::debug!("page translations: {} / {}", first, second);

    PageLayout {
        pages: [
            PagePlacement {
                page: Page::One,
                translate: first,
                visible: params.page() != Some(Page::Two),
            },
            PagePlacement {
                page: Page::Two,
                translate: second,
                visible: params.page() != Some(Page::One),
            },
        ],
        logo: LogoPlacement {
            origin: Point::new(right.pocket_corner.x, right.rear_base.y),
            width: params.device_height().hundredths() + LOGO_LENGTH_ALLOWANCE,
            height: params.device_width().hundredths() + LOGO_WIDTH_ALLOWANCE,
        },
        clamped,
    }
}
