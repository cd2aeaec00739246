//! Layout engine for mapping scroll positions onto story sections.
//!
//! This module handles:
//! - Pre-computing cumulative section bottoms from rendered heights
//! - Picking the active section for a scroll sample (first match wins)
//! - Resolving host scroll metrics, with the root-element fallback

mod section_layout;
mod viewport;

pub use section_layout::{SectionLayout, DEFAULT_BUFFER_RATIO};
pub use viewport::Viewport;
