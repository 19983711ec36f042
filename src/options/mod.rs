pub mod legacy;
pub mod registry;
pub mod tables;

pub use legacy::{map_legacy_style, map_legacy_tone};
pub use registry::{keys, Dimension, OptionRegistry};
