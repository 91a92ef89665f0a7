//! Color representation, conversion, and procedural palette derivation

/// RGB and HSV color types with conversions between them
pub mod hsv;
/// Cosine palette synthesis and hue-relation shifts
pub mod palette;

pub use hsv::{Hsv, Rgb};
pub use palette::{ColorRelation, PaletteCoeffs, PaletteParams};
