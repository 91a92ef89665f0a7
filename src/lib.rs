//! Procedural banner and flag pixel art generation
//!
//! Generates a banner in three sequential passes over one shared pixel
//! buffer: a random walk carves an organic silhouette which a cellular
//! automaton smooths into the flag shape, a second short walk scatters an
//! interior pattern, and a mirrored walk grows a centered sigil. Colors
//! derive from a cosine palette through configurable hue relations, and a
//! banded shading pass gives the cloth its directional texture. Fixed seeds
//! reproduce banners bit for bit.

#![forbid(unsafe_code)]

/// Core generation algorithms: noise, carving, smoothing, compositing
pub mod algorithm;
/// Color types, palette synthesis, and hue relations
pub mod color;
/// Input/output operations and error handling
pub mod io;
/// Spatial primitives shared across the pipeline
pub mod spatial;

pub use algorithm::pipeline::{Banner, BannerConfig, BannerPipeline, StylePreset};
pub use io::error::{BannerError, Result};
