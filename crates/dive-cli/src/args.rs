use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use dive_pattern::{Field, ParameterSet, Side};

/// Pattern parameters shared by every subcommand, in millimetres
#[derive(Args, Debug, Default)]
pub struct ParamArgs {
    /// Parameter file (JSON, or a previously generated SVG) applied before the flags
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Target page width [100-498]
    #[arg(long, alias = "page_width", value_name = "MM")]
    pub page_width: Option<String>,

    /// Target page height [100-498]
    #[arg(long, alias = "page_height", value_name = "MM")]
    pub page_height: Option<String>,

    /// Device size as HxWxD
    #[arg(long, value_name = "HxWxD")]
    pub dimensions: Option<String>,

    /// Device width [50-100]
    #[arg(long, alias = "device_width", value_name = "MM")]
    pub device_width: Option<String>,

    /// Device height [90-200]; clears the screen middle from a config file
    #[arg(long, alias = "device_height", value_name = "MM")]
    pub device_height: Option<String>,

    /// Device depth [5-20]
    #[arg(long, alias = "device_depth", value_name = "MM")]
    pub device_depth: Option<String>,

    /// Distance from the device edge to the screen centre [30-200], or None
    #[arg(long, alias = "device_screen_middle", value_name = "MM")]
    pub device_screen_middle: Option<String>,

    /// Lens focal length [30-50]
    #[arg(long, alias = "lens_focal_length", value_name = "MM")]
    pub lens_focal_length: Option<String>,

    /// Lens diameter [20-30]
    #[arg(long, alias = "lens_diameter", value_name = "MM")]
    pub lens_diameter: Option<String>,

    /// Head strap width [20-46]
    #[arg(long, alias = "strap_width", value_name = "MM")]
    pub strap_width: Option<String>,

    /// Pupillary distance [50-80]
    #[arg(long, visible_alias = "pd", alias = "pupillary_distance", value_name = "MM")]
    pub pupillary_distance: Option<String>,

    /// Output a single page (1 or 2), or None for both
    #[arg(long, value_name = "PAGE")]
    pub page: Option<String>,
}

impl ParamArgs {
    /// Flags in the order they are applied.
    ///
    /// Size changes come before the screen middle so that an explicit
    /// middle is not cleared by a height given on the same command line.
    fn assignments(&self) -> Vec<(Field, &str)> {
        [
            (Field::PageWidth, &self.page_width),
            (Field::PageHeight, &self.page_height),
            (Field::Dimensions, &self.dimensions),
            (Field::DeviceWidth, &self.device_width),
            (Field::DeviceHeight, &self.device_height),
            (Field::DeviceDepth, &self.device_depth),
            (Field::LensFocalLength, &self.lens_focal_length),
            (Field::LensDiameter, &self.lens_diameter),
            (Field::StrapWidth, &self.strap_width),
            (Field::PupillaryDistance, &self.pupillary_distance),
            (Field::Page, &self.page),
            (Field::DeviceScreenMiddle, &self.device_screen_middle),
        ]
        .into_iter()
        .filter_map(|(field, raw)| raw.as_deref().map(|raw| (field, raw)))
        .collect()
    }

    /// Apply the flags on top of `base`
    pub fn apply(&self, base: ParameterSet) -> Result<ParameterSet> {
        let mut params = base;
        for (field, raw) in self.assignments() {
            params = params
                .set(field.name(), raw)
                .with_context(|| format!("Invalid --{} value {raw:?}", field.name().replace('_', "-")))?;
            log::debug!("{} = {}", field.name(), params.value_text(field));
        }
        Ok(params)
    }

    /// Defaults, then the config file, then the flags
    pub async fn resolve(&self) -> Result<ParameterSet> {
        let base = match &self.config {
            Some(path) => dive_svg::load_parameters(path)
                .await
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => ParameterSet::default(),
        };
        self.apply(base)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SideArg {
    Right,
    Left,
    Both,
}

impl SideArg {
    pub fn sides(self) -> &'static [Side] {
        match self {
            SideArg::Right => &[Side::Right],
            SideArg::Left => &[Side::Left],
            SideArg::Both => &Side::ALL,
        }
    }
}
