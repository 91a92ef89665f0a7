//! Spatial primitives shared across the generation pipeline

/// Validated grid dimensions and index helpers
pub mod grid;

pub use grid::GridDimensions;
