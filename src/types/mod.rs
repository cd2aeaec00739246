//! Data types for story pages and their map.

mod geo;
mod scroll;
mod section;

pub use geo::*;
pub use scroll::*;
pub use section::*;
