//! SVG rendering
//!
//! The document carries one `symbol` per piece and side in `defs`, and two
//! page groups that place them: page 1 shows both lens shrouds flipped
//! about the shared fold, page 2 both device pockets and the logo.

use dive_pattern::{Field, Page, Pattern, Point, Symbol};

use crate::document::Element;
use crate::options::{RenderOptions, STYLE};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const DOCTYPE: &str = r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
const CC_NS: &str = "http://creativecommons.org/ns#";
const DC_NS: &str = "http://purl.org/dc/elements/1.1/";
const LICENSE: &str = "http://creativecommons.org/licenses/by-sa/3.0/";

const TITLE: &str = "Poor Man's Dive";
const DESCRIPTION: &str = "Poor Man's Dive is a pattern for paper model of OpenDive \
    (http://www.durovis.com/opendive.html) compatible 3D glasses.";
const AUTHOR: &str = "Egor Puzanov";

const LICENSE_TERMS: [(&str, &str); 6] = [
    ("cc:permits", "Reproduction"),
    ("cc:permits", "Distribution"),
    ("cc:requires", "Notice"),
    ("cc:requires", "Attribution"),
    ("cc:permits", "DerivativeWorks"),
    ("cc:requires", "ShareAlike"),
];

/// Parameters echoed as `param` elements, in document order
pub(crate) const ECHOED_FIELDS: [Field; 11] = [
    Field::PageWidth,
    Field::PageHeight,
    Field::DeviceWidth,
    Field::DeviceHeight,
    Field::DeviceDepth,
    Field::DeviceScreenMiddle,
    Field::LensFocalLength,
    Field::LensDiameter,
    Field::PupillaryDistance,
    Field::StrapWidth,
    Field::Page,
];

/// Render the pattern as a complete SVG file
pub fn render_svg(pattern: &Pattern, options: &RenderOptions) -> String {
    let document = build_document(pattern, options);
    let svg = format!("{XML_DECLARATION}\n{DOCTYPE}\n{document}");
    log::debug!("rendered SVG document ({} bytes)", svg.len());
    svg
}

/// Build the root `svg` element
pub fn build_document(pattern: &Pattern, options: &RenderOptions) -> Element {
    let params = &pattern.params;
    let mut svg = Element::new("svg")
        .attr("version", "1.1")
        .attr("width", format!("{}mm", params.page_width()))
        .attr("height", format!("{}mm", params.page_height()))
        .attr(
            "viewBox",
            format!(
                "0 0 {} {}",
                params.page_width().hundredths(),
                params.page_height().hundredths()
            ),
        )
        .attr("preserveAspectRatio", "xMinYMin slice")
        .attr("xmlns", SVG_NS)
        .attr("xmlns:xlink", XLINK_NS)
        .child(Element::new("title").text(TITLE));

    if options.include_metadata {
        svg.push(Element::new("desc").text(DESCRIPTION));
        svg.push(metadata());
    }

    for field in ECHOED_FIELDS {
        svg.push(
            Element::new("param")
                .attr("name", field.name())
                .attr("value", params.value_text(field)),
        );
    }

    let mut defs =
        Element::new("defs").child(Element::new("style").attr("type", "text/css").cdata(STYLE));
    for symbol in pattern.symbols() {
        defs.push(symbol_element(symbol));
    }
    svg.push(defs);

    svg.push(page_group(pattern, Page::One, options));
    svg.push(page_group(pattern, Page::Two, options));
    svg
}

fn metadata() -> Element {
    let resource = |name: &str, url: &str| Element::new(name).attr("rdf:resource", url);

    let work = Element::new("cc:Work")
        .attr("xmlns:dc", DC_NS)
        .attr("rdf:about", "")
        .child(Element::new("dc:format").text("image/svg+xml"))
        .child(resource("dc:type", "http://purl.org/dc/dcmitype/StillImage"))
        .child(Element::new("dc:creator").text(AUTHOR))
        .child(resource("dc:license", LICENSE))
        .child(resource("cc:license", LICENSE))
        .child(Element::new("cc:attributionName").text(AUTHOR));

    let mut license = Element::new("cc:License").attr("rdf:about", LICENSE);
    for (relation, term) in LICENSE_TERMS {
        license.push(resource(relation, &format!("{CC_NS}{term}")));
    }

    Element::new("metadata").child(
        Element::new("rdf:RDF")
            .attr("xmlns:rdf", RDF_NS)
            .attr("xmlns:cc", CC_NS)
            .child(work)
            .child(license),
    )
}

fn symbol_element(symbol: &Symbol) -> Element {
    let mut element = Element::new("symbol")
        .attr("id", symbol.id())
        .child(polyline(&symbol.outline))
        .child(polyline(&symbol.closing));

    for circle in &symbol.circles {
        element.push(
            Element::new("circle")
                .attr("cx", circle.center.x)
                .attr("cy", circle.center.y)
                .attr("r", circle.radius),
        );
    }
    for slot in &symbol.strap_slots {
        element.push(
            Element::new("rect")
                .attr("x", slot.x)
                .attr("y", slot.y)
                .attr("width", slot.width)
                .attr("height", slot.height),
        );
    }
    for crease in &symbol.creases {
        element.push(
            Element::new("line")
                .attr("x1", crease.from.x)
                .attr("y1", crease.from.y)
                .attr("x2", crease.to.x)
                .attr("y2", crease.to.y),
        );
    }
    element
}

fn polyline(points: &[Point]) -> Element {
    let points: Vec<String> = points.iter().map(Point::to_string).collect();
    Element::new("polyline").attr("points", points.join(" "))
}

fn translate(p: Point) -> String {
    format!("translate({},{})", p.x, p.y)
}

fn use_symbol(symbol: &Symbol, transform: Option<&str>) -> Element {
    let element = Element::new("use").attr("xlink:href", format!("#{}", symbol.id()));
    match transform {
        Some(transform) => element.attr("transform", transform),
        None => element,
    }
}

fn page_group(pattern: &Pattern, page: Page, options: &RenderOptions) -> Element {
    let placement = pattern.layout.placement(page);
    let group = Element::new("g")
        .attr("id", format!("page{}", page.number()))
        .attr(
            "visibility",
            if placement.visible { "visible" } else { "hidden" },
        )
        .attr("transform", translate(placement.translate));

    match page {
        Page::One => group
            .child(use_symbol(&pattern.left.upper, Some("scale(-1,-1)")))
            .child(use_symbol(&pattern.right.upper, Some("scale(1,-1)"))),
        Page::Two => {
            let logo = pattern.layout.logo;
            group
                .child(
                    Element::new("image")
                        .attr("x", 0)
                        .attr("y", 0)
                        .attr("width", logo.width)
                        .attr("height", logo.height)
                        .attr("xlink:href", &options.logo)
                        .attr("transform", format!("{} scale(-1,-1)", translate(logo.origin))),
                )
                .child(use_symbol(&pattern.left.lower, Some("scale(-1,1)")))
                .child(use_symbol(&pattern.right.lower, None))
        }
    }
}
