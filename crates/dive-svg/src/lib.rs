//! SVG presentation of Poor Man's Dive patterns.
//!
//! Turns a generated [`dive_pattern::Pattern`] into a printable SVG document
//! at 1 user unit = 0.01 mm, and reads and writes parameter files.

mod document;
mod io;
mod options;
mod render;
mod types;

pub use document::Element;
pub use io::{embedded_parameters, load_parameters, save_parameters, save_svg};
pub use options::*;
pub use render::{build_document, render_svg};
pub use types::*;
