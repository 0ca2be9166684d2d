//! Style layer: colours, tri-state props, presets and their resolution.

mod color;
mod preset;
mod prop;
mod resolver;

pub use color::Color;
pub use preset::{Alignment, FontWeight, Side, SizePreset, Variant};
pub use prop::Prop;
pub use resolver::StyleResolver;
