/// Inline "PM Dive" badge used when no logo is given
pub const DEFAULT_LOGO: &str = concat!(
    r#"data:image/svg+xml;utf8,%3Csvg xmlns="http://www.w3.org/2000/svg"%3E"#,
    r#"%3Ctext x="270" y="500" font-family="Verdana" font-size="200"%3EPM%3C/text%3E"#,
    r#"%3Ctext x="100" y="700" font-family="Verdana" font-size="800"%3EDive%3C/text%3E"#,
    r#"%3C/svg%3E"#,
);

/// Stroke styles for the pattern: cuts solid 0.5 mm, creases dashed 0.2 mm
pub const STYLE: &str = "
polyline {
    fill: none;
    stroke: black;
    stroke-width: 50
}
circle {
    fill: none;
    stroke: black;
    stroke-width: 50
}
rect {
    fill: none;
    stroke: black;
    stroke-width: 50
}
line {
    fill: none;
    stroke: black;
    stroke-width: 20;
    stroke-dasharray: 200,200
}
";

/// Presentation options that do not affect the geometry
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// `xlink:href` of the image drawn on the right device pocket
    pub logo: String,
    /// Description and licence metadata
    pub include_metadata: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            logo: DEFAULT_LOGO.to_string(),
            include_metadata: true,
        }
    }
}
