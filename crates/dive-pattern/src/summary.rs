use crate::layout::Symbol;
use crate::pattern::Pattern;
use crate::types::{Bounds, Page, Point};

/// Placed extent of one physical page
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PageSummary {
    pub page: Page,
    pub visible: bool,
    /// Silhouette bounds in sheet coordinates
    pub bounds: Bounds,
    pub fits_sheet: bool,
}

/// Statistics about a generated pattern
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PatternSummary {
    pub points_per_side: usize,
    /// Whether the left side was computed separately
    pub mirrored: bool,
    /// Whether the fold offset was pulled back onto the sheet
    pub clamped: bool,
    pub pages: Vec<PageSummary>,
}

impl PatternSummary {
    /// True when every visible page stays inside the sheet
    pub fn fits(&self) -> bool {
        self.pages.iter().filter(|p| p.visible).all(|p| p.fits_sheet)
    }
}

/// Calculate placed extents for both pages.
///
/// Page 1 shows the left shroud rotated by 180° and the right shroud
/// flipped vertically; page 2 the left pocket flipped horizontally and the
/// right pocket as constructed.
pub fn calculate_summary(pattern: &Pattern) -> PatternSummary {
    let params = &pattern.params;
    let sheet_width = params.page_width().hundredths();
    let sheet_height = params.page_height().hundredths();

    let pages = [Page::One, Page::Two]
        .into_iter()
        .filter_map(|page| {
            let placement = pattern.layout.placement(page);
            let (left, right, left_flip, right_flip) = match page {
                Page::One => (&pattern.left.upper, &pattern.right.upper, (-1, -1), (1, -1)),
                Page::Two => (&pattern.left.lower, &pattern.right.lower, (-1, 1), (1, 1)),
            };
            let vertices = placed(left, left_flip, placement.translate)
                .chain(placed(right, right_flip, placement.translate));
            let bounds = Bounds::of(vertices)?;
            let fits_sheet = bounds.within(sheet_width, sheet_height);
            if placement.visible && !fits_sheet {
                log::warn!("page {} extends beyond the sheet: {:?}", page.number(), bounds);
            }
            Some(PageSummary {
                page,
                visible: placement.visible,
                bounds,
                fits_sheet,
            })
        })
        .collect();

    PatternSummary {
        points_per_side: pattern.right.points.sequence().len(),
        mirrored: pattern.mirrored,
        clamped: pattern.layout.clamped,
        pages,
    }
}

fn placed(
    symbol: &Symbol,
    (sx, sy): (i64, i64),
    translate: Point,
) -> impl Iterator<Item = Point> + '_ {
    symbol
        .silhouette()
        .map(move |p| Point::new(translate.x + sx * p.x, translate.y + sy * p.y))
}
