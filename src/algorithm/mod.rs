//! Core generation algorithms: noise, carving, smoothing, compositing

/// Cellular-automaton smoothing with birth/survival rules
pub mod automaton;
/// Compositing pass producing shaded pixels and outlines
pub mod compositor;
/// Fractal noise field synthesis
pub mod noise;
/// Three-pass pipeline orchestration
pub mod pipeline;
/// Seeded constrained random walk carving
pub mod walker;
