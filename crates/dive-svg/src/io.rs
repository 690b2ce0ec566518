//! File I/O for rendered patterns and parameter files

use std::path::Path;

use dive_pattern::{Field, ParameterSet, Pattern};

use crate::document::unescape;
use crate::options::RenderOptions;
use crate::render::{ECHOED_FIELDS, render_svg};
use crate::types::*;

/// Render the pattern and write it to `path`
pub async fn save_svg(
    pattern: &Pattern,
    options: &RenderOptions,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref().to_owned();
    let pattern = pattern.clone();
    let options = options.clone();
    let svg = tokio::task::spawn_blocking(move || render_svg(&pattern, &options)).await?;
    tokio::fs::write(&path, svg).await?;
    log::info!("wrote {}", path.display());
    Ok(())
}

/// Load a parameter set.
///
/// A `.svg` file is read back from its `param` elements; anything else is
/// parsed as JSON. Fields missing from the file keep their defaults.
pub async fn load_parameters(path: impl AsRef<Path>) -> Result<ParameterSet> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    let params = if is_svg {
        embedded_parameters(&String::from_utf8_lossy(&bytes))?
    } else {
        serde_json::from_slice(&bytes)?
    };
    log::debug!("loaded parameters from {}", path.display());
    Ok(params)
}

/// Save a parameter set as pretty-printed JSON
pub async fn save_parameters(params: &ParameterSet, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(params)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

/// Recover the parameter set echoed in a rendered document.
///
/// Each `param` element is applied in document order on top of the
/// defaults, so the screen middle is restored after the device height.
pub fn embedded_parameters(svg: &str) -> Result<ParameterSet> {
    let mut params = ParameterSet::default();
    for tag in svg.split("<param ").skip(1) {
        let Some(end) = tag.find('>') else {
            continue;
        };
        let tag = &tag[..end];
        let (Some(name), Some(value)) = (attribute(tag, "name"), attribute(tag, "value")) else {
            continue;
        };
        let field: Field = name.parse()?;
        if !ECHOED_FIELDS.contains(&field) {
            continue;
        }
        params = params.set(field.name(), &value)?;
    }
    Ok(params)
}

fn attribute(tag: &str, name: &str) -> Option<String> {
    let pattern = format!(" {name}=\"");
    let start = format!(" {tag}").find(&pattern)? + pattern.len() - 1;
    let rest = &tag[start..];
    let end = rest.find('"')?;
    Some(unescape(&rest[..end]))
}
