use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::types::{Length, Page, Side};
use crate::{Result, ValidationError};

/// Recognised parameter names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    PageWidth,
    PageHeight,
    DeviceWidth,
    DeviceHeight,
    DeviceDepth,
    /// Compound `HxWxD` shorthand for the three device fields
    Dimensions,
    DeviceScreenMiddle,
    LensFocalLength,
    LensDiameter,
    StrapWidth,
    PupillaryDistance,
    Page,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::PageWidth,
        Field::PageHeight,
        Field::DeviceWidth,
        Field::DeviceHeight,
        Field::DeviceDepth,
        Field::Dimensions,
        Field::DeviceScreenMiddle,
        Field::LensFocalLength,
        Field::LensDiameter,
        Field::StrapWidth,
        Field::PupillaryDistance,
        Field::Page,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::PageWidth => "page_width",
            Field::PageHeight => "page_height",
            Field::DeviceWidth => "device_width",
            Field::DeviceHeight => "device_height",
            Field::DeviceDepth => "device_depth",
            Field::Dimensions => "dimensions",
            Field::DeviceScreenMiddle => "device_screen_middle",
            Field::LensFocalLength => "lens_focal_length",
            Field::LensDiameter => "lens_diameter",
            Field::StrapWidth => "strap_width",
            Field::PupillaryDistance => "pupillary_distance",
            Field::Page => "page",
        }
    }

    /// Accepted range in millimetres (page numbers for [`Field::Page`])
    pub fn bounds(self) -> Option<RangeInclusive<f64>> {
        match self {
            Field::PageWidth | Field::PageHeight => Some(100.0..=498.0),
            Field::DeviceWidth => Some(50.0..=100.0),
            Field::DeviceHeight => Some(90.0..=200.0),
            Field::DeviceDepth => Some(5.0..=20.0),
            Field::DeviceScreenMiddle => Some(30.0..=200.0),
            Field::LensFocalLength => Some(30.0..=50.0),
            Field::LensDiameter => Some(20.0..=30.0),
            Field::StrapWidth => Some(20.0..=46.0),
            Field::PupillaryDistance => Some(50.0..=80.0),
            Field::Page => Some(1.0..=2.0),
            Field::Dimensions => None,
        }
    }

    /// Whether the field may be unset
    pub fn is_optional(self) -> bool {
        matches!(self, Field::DeviceScreenMiddle | Field::Page)
    }
}

impl FromStr for Field {
    type Err = ValidationError;

    fn from_str(name: &str) -> Result<Self> {
        if name == "pd" {
            return Ok(Field::PupillaryDistance);
        }
        Field::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| ValidationError::UnknownField(name.to_string()))
    }
}

/// Validated physical inputs of the pattern.
///
/// A `ParameterSet` is immutable: every setter validates a complete candidate
/// record and returns a new value, so a failed assignment never leaves a
/// partially updated set behind.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawParameters", into = "RawParameters")
)]
pub struct ParameterSet {
    page_width: Length,
    page_height: Length,
    device_width: Length,
    device_height: Length,
    device_depth: Length,
    device_screen_middle: Option<Length>,
    lens_focal_length: Length,
    lens_diameter: Length,
    strap_width: Length,
    pupillary_distance: Length,
    page: Option<Page>,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            page_width: Length::from_hundredths(29700),
            page_height: Length::from_hundredths(42000),
            device_width: Length::from_hundredths(6550),
            device_height: Length::from_hundredths(13260),
            device_depth: Length::from_hundredths(618),
            device_screen_middle: None,
            lens_focal_length: Length::from_hundredths(4000),
            lens_diameter: Length::from_hundredths(2600),
            strap_width: Length::from_hundredths(4000),
            pupillary_distance: Length::from_hundredths(6000),
            page: None,
        }
    }
}

impl ParameterSet {
    pub fn builder() -> ParameterSetBuilder {
        ParameterSetBuilder::default()
    }

    /// Start a builder from this set's values
    pub fn to_builder(&self) -> ParameterSetBuilder {
        ParameterSetBuilder {
            page_width: self.page_width.mm(),
            page_height: self.page_height.mm(),
            device_width: self.device_width.mm(),
            device_height: self.device_height.mm(),
            device_depth: self.device_depth.mm(),
            device_screen_middle: self.device_screen_middle.map(Length::mm),
            lens_focal_length: self.lens_focal_length.mm(),
            lens_diameter: self.lens_diameter.mm(),
            strap_width: self.strap_width.mm(),
            pupillary_distance: self.pupillary_distance.mm(),
            page: self.page,
        }
    }

    /// Assign a parameter from its textual form.
    ///
    /// Empty text or `None` unsets an optional field. `pd` is accepted as an
    /// alias of `pupillary_distance`, and `dimensions` takes `HxWxD`.
    pub fn set(&self, name: &str, raw: &str) -> Result<Self> {
        let field: Field = name.parse()?;
        if field == Field::Dimensions {
            return self.with_dimensions(raw);
        }
        let value = parse_optional(field, raw)?;
        self.with_value(field, value)
    }

    /// Assign a single field; `None` unsets it.
    pub fn with_value(&self, field: Field, value: Option<f64>) -> Result<Self> {
        let builder = self.to_builder();
        let builder = match (field, value) {
            (Field::DeviceScreenMiddle, middle) => builder.device_screen_middle(middle),
            (Field::Page, None) => builder.page(None),
            (Field::Page, Some(number)) => builder.page(Some(page_from_value(number)?)),
            (Field::Dimensions, value) => {
                return Err(ValidationError::MalformedDimensions(
                    value.map(|v| v.to_string()).unwrap_or_default(),
                ));
            }
            (field, None) => return Err(ValidationError::Required { field: field.name() }),
            (Field::PageWidth, Some(v)) => builder.page_width(v),
            (Field::PageHeight, Some(v)) => builder.page_height(v),
            (Field::DeviceWidth, Some(v)) => builder.device_width(v),
            (Field::DeviceHeight, Some(v)) => builder.device_height(v),
            (Field::DeviceDepth, Some(v)) => builder.device_depth(v),
            (Field::LensFocalLength, Some(v)) => builder.lens_focal_length(v),
            (Field::LensDiameter, Some(v)) => builder.lens_diameter(v),
            (Field::StrapWidth, Some(v)) => builder.strap_width(v),
            (Field::PupillaryDistance, Some(v)) => builder.pupillary_distance(v),
        };
        builder.build()
    }

    /// Assign height, width and depth from `HxWxD` as one atomic update.
    ///
    /// Like any height change, this clears the screen middle.
    pub fn with_dimensions(&self, raw: &str) -> Result<Self> {
        let malformed = || ValidationError::MalformedDimensions(raw.to_string());
        let tokens: Vec<&str> = raw.trim().split(['x', 'X']).collect();
        let &[height, width, depth] = tokens.as_slice() else {
            return Err(malformed());
        };
        let parse = |token: &str| {
            token
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(malformed)
        };
        let (height, width, depth) = (parse(height)?, parse(width)?, parse(depth)?);
        self.to_builder().dimensions(height, width, depth).build()
    }

    pub fn page_width(&self) -> Length {
        self.page_width
    }

    pub fn page_height(&self) -> Length {
        self.page_height
    }

    pub fn device_width(&self) -> Length {
        self.device_width
    }

    pub fn device_height(&self) -> Length {
        self.device_height
    }

    pub fn device_depth(&self) -> Length {
        self.device_depth
    }

    /// Distance from the device edge to the screen centre, if not centred
    pub fn device_screen_middle(&self) -> Option<Length> {
        self.device_screen_middle
    }

    pub fn lens_focal_length(&self) -> Length {
        self.lens_focal_length
    }

    pub fn lens_diameter(&self) -> Length {
        self.lens_diameter
    }

    pub fn strap_width(&self) -> Length {
        self.strap_width
    }

    pub fn pupillary_distance(&self) -> Length {
        self.pupillary_distance
    }

    /// Selected single page, `None` for both
    pub fn page(&self) -> Option<Page> {
        self.page
    }

    /// Screen offset for one side in fixed-point units.
    ///
    /// Half the device height when the screen middle is unset. Otherwise the
    /// right side measures from the opposite edge, so the two sides always
    /// sum to the device height. The result carries a half unit when the
    /// height is an odd number of hundredths.
    pub fn screen_offset(&self, side: Side) -> f64 {
        let height = self.device_height.hundredths();
        match (self.device_screen_middle, side) {
            (None, _) => height as f64 / 2.0,
            (Some(middle), Side::Right) => (height - middle.hundredths()) as f64,
            (Some(middle), Side::Left) => middle.hundredths() as f64,
        }
    }

    /// Whether both sides share one geometry
    pub fn is_screen_centered(&self) -> bool {
        match self.device_screen_middle {
            None => true,
            Some(middle) => middle.hundredths() * 2 == self.device_height.hundredths(),
        }
    }

    /// Textual value of a field as it would be echoed back; empty when unset
    pub fn value_text(&self, field: Field) -> String {
        match field {
            Field::PageWidth => self.page_width.to_string(),
            Field::PageHeight => self.page_height.to_string(),
            Field::DeviceWidth => self.device_width.to_string(),
            Field::DeviceHeight => self.device_height.to_string(),
            Field::DeviceDepth => self.device_depth.to_string(),
            Field::Dimensions => format!(
                "{}x{}x{}",
                self.device_height, self.device_width, self.device_depth
            ),
            Field::DeviceScreenMiddle => self
                .device_screen_middle
                .map(|m| m.to_string())
                .unwrap_or_default(),
            Field::LensFocalLength => self.lens_focal_length.to_string(),
            Field::LensDiameter => self.lens_diameter.to_string(),
            Field::StrapWidth => self.strap_width.to_string(),
            Field::PupillaryDistance => self.pupillary_distance.to_string(),
            Field::Page => self.page.map(|p| p.number().to_string()).unwrap_or_default(),
        }
    }
}

/// Candidate parameter record in millimetres, validated by [`build`](Self::build)
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSetBuilder {
    page_width: f64,
    page_height: f64,
    device_width: f64,
    device_height: f64,
    device_depth: f64,
    device_screen_middle: Option<f64>,
    lens_focal_length: f64,
    lens_diameter: f64,
    strap_width: f64,
    pupillary_distance: f64,
    page: Option<Page>,
}

impl Default for ParameterSetBuilder {
    fn default() -> Self {
        ParameterSet::default().to_builder()
    }
}

impl ParameterSetBuilder {
    pub fn page_width(mut self, mm: f64) -> Self {
        self.page_width = mm;
        self
    }

    pub fn page_height(mut self, mm: f64) -> Self {
        self.page_height = mm;
        self
    }

    pub fn device_width(mut self, mm: f64) -> Self {
        self.device_width = mm;
        self
    }

    /// Changing the height invalidates any screen middle set before it
    pub fn device_height(mut self, mm: f64) -> Self {
        self.device_height = mm;
        self.device_screen_middle = None;
        self
    }

    pub fn device_depth(mut self, mm: f64) -> Self {
        self.device_depth = mm;
        self
    }

    pub fn dimensions(self, height_mm: f64, width_mm: f64, depth_mm: f64) -> Self {
        self.device_width(width_mm)
            .device_depth(depth_mm)
            .device_height(height_mm)
    }

    pub fn device_screen_middle(mut self, mm: Option<f64>) -> Self {
        self.device_screen_middle = mm;
        self
    }

    pub fn lens_focal_length(mut self, mm: f64) -> Self {
        self.lens_focal_length = mm;
        self
    }

    pub fn lens_diameter(mut self, mm: f64) -> Self {
        self.lens_diameter = mm;
        self
    }

    pub fn strap_width(mut self, mm: f64) -> Self {
        self.strap_width = mm;
        self
    }

    pub fn pupillary_distance(mut self, mm: f64) -> Self {
        self.pupillary_distance = mm;
        self
    }

    pub fn page(mut self, page: Option<Page>) -> Self {
        self.page = page;
        self
    }

    /// Validate every field and produce the parameter set
    pub fn build(&self) -> Result<ParameterSet> {
        Ok(ParameterSet {
            page_width: checked(Field::PageWidth, self.page_width)?,
            page_height: checked(Field::PageHeight, self.page_height)?,
            device_width: checked(Field::DeviceWidth, self.device_width)?,
            device_height: checked(Field::DeviceHeight, self.device_height)?,
            device_depth: checked(Field::DeviceDepth, self.device_depth)?,
            device_screen_middle: self
                .device_screen_middle
                .map(|mm| checked(Field::DeviceScreenMiddle, mm))
                .transpose()?,
            lens_focal_length: checked(Field::LensFocalLength, self.lens_focal_length)?,
            lens_diameter: checked(Field::LensDiameter, self.lens_diameter)?,
            strap_width: checked(Field::StrapWidth, self.strap_width)?,
            pupillary_distance: checked(Field::PupillaryDistance, self.pupillary_distance)?,
            page: self.page,
        })
    }
}

fn checked(field: Field, mm: f64) -> Result<Length> {
    if !mm.is_finite() {
        return Err(ValidationError::Unparsable {
            field: field.name(),
            raw: mm.to_string(),
        });
    }
    if let Some(range) = field.bounds() {
        if !range.contains(&mm) {
            return Err(ValidationError::OutOfRange {
                field: field.name(),
                value: mm,
                min: *range.start(),
                max: *range.end(),
            });
        }
    }
    Ok(Length::from_mm(mm))
}

fn parse_optional(field: Field, raw: &str) -> Result<Option<f64>> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or_else(|| ValidationError::Unparsable {
            field: field.name(),
            raw: raw.to_string(),
        })
}

fn page_from_value(value: f64) -> Result<Page> {
    let out_of_range = || ValidationError::OutOfRange {
        field: Field::Page.name(),
        value,
        min: 1.0,
        max: 2.0,
    };
    if value.fract() != 0.0 || !(1.0..=2.0).contains(&value) {
        return Err(out_of_range());
    }
    Page::from_number(value as u8).ok_or_else(out_of_range)
}

/// Wire form of a [`ParameterSet`]: plain millimetre values
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
struct RawParameters {
    page_width: f64,
    page_height: f64,
    device_width: f64,
    device_height: f64,
    device_depth: f64,
    device_screen_middle: Option<f64>,
    lens_focal_length: f64,
    lens_diameter: f64,
    strap_width: f64,
    pupillary_distance: f64,
    page: Option<u8>,
}

#[cfg(feature = "serde")]
impl Default for RawParameters {
    fn default() -> Self {
        ParameterSet::default().into()
    }
}

#[cfg(feature = "serde")]
impl From<ParameterSet> for RawParameters {
    fn from(params: ParameterSet) -> Self {
        Self {
            page_width: params.page_width.mm(),
            page_height: params.page_height.mm(),
            device_width: params.device_width.mm(),
            device_height: params.device_height.mm(),
            device_depth: params.device_depth.mm(),
            device_screen_middle: params.device_screen_middle.map(Length::mm),
            lens_focal_length: params.lens_focal_length.mm(),
            lens_diameter: params.lens_diameter.mm(),
            strap_width: params.strap_width.mm(),
            pupillary_distance: params.pupillary_distance.mm(),
            page: params.page.map(Page::number),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawParameters> for ParameterSet {
    type Error = ValidationError;

    fn try_from(raw: RawParameters) -> Result<Self> {
        let page = raw.page.map(|n| page_from_value(n as f64)).transpose()?;
        ParameterSetBuilder {
            page_width: raw.page_width,
            page_height: raw.page_height,
            device_width: raw.device_width,
            device_height: raw.device_height,
            device_depth: raw.device_depth,
            device_screen_middle: raw.device_screen_middle,
            lens_focal_length: raw.lens_focal_length,
            lens_diameter: raw.lens_diameter,
            strap_width: raw.strap_width,
            pupillary_distance: raw.pupillary_distance,
            page,
        }
        .build()
    }
}
