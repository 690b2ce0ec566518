//! Layout calculation modules for the pattern
//!
//! This module handles all the geometric calculations:
//! - Control point construction (per side)
//! - Symbol assembly (outlines, lens circles, strap slots, creases)
//! - Page placement (fold offset, single-page visibility)

mod page;
mod points;
mod symbols;

pub use page::*;
pub use points::*;
pub use symbols::*;
