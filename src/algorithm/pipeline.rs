//! Three-pass banner generation pipeline
//!
//! Runs the Flag, Pattern, and Sigil passes in strict order over one shared
//! pixel buffer. The Flag pass carves the banner silhouette and freezes it
//! as the occupancy mask; the Pattern pass scatters an interior texture
//! confined to that mask; the Sigil pass grows a mirrored emblem around the
//! derived anchor row. Every stochastic choice flows through one session
//! generator, so a fixed seed reproduces the banner bit for bit.

use crate::algorithm::automaton::{self, NeighborRule};
use crate::algorithm::compositor;
use crate::algorithm::noise::{self, NoiseParams};
use crate::algorithm::walker::{self, EdgePolicy, WalkParams};
use crate::color::hsv::{Hsv, Rgb};
use crate::color::palette::{self, ColorRelation, PaletteCoeffs, PaletteParams};
use crate::io::configuration::{
    BROAD_SURVIVE, DEFAULT_NOISE_LACUNARITY, DEFAULT_NOISE_OCTAVES, DEFAULT_NOISE_PERSISTENCE,
    DEFAULT_NOISE_SCALE, DEFAULT_PALETTE_A, DEFAULT_PALETTE_B, DEFAULT_PALETTE_C,
    DEFAULT_PALETTE_CYCLE, DEFAULT_PALETTE_D, DEFAULT_PALETTE_RANGE, DEFAULT_SEED,
    FLAG_BIRTH_BOLD, FLAG_BIRTH_CLASSIC, FLAG_GENERATIONS, FLAG_WALK_BOLD, FLAG_WALK_CLASSIC,
    PATTERN_BIRTH, PATTERN_GENERATIONS, PATTERN_SURVIVE, PATTERN_VALUE_DELTA_BOLD,
    PATTERN_VALUE_DELTA_CLASSIC, PATTERN_WALK, SIGIL_GENERATIONS, SIGIL_SHIFT, SIGIL_SHIFT_PIVOT,
    SIGIL_WALK, VALUE_DAMPING,
};
use crate::io::error::Result;
use crate::io::visualization::GenerationCapture;
use crate::spatial::GridDimensions;
use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Parameters of one generation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassParams {
    /// Random walk step count
    pub walk_iterations: usize,
    /// Boundary behavior of the walk
    pub edges: EdgePolicy,
    /// Mirror walk marks about the vertical centerline
    pub symmetric: bool,
    /// Neighbor counts bringing dead cells to life
    pub birth: NeighborRule,
    /// Neighbor counts keeping live cells alive
    pub survive: NeighborRule,
    /// Automaton smoothing generations
    pub generations: usize,
    /// Stroke a black outline around the pass result
    pub outline: bool,
}

/// Source of the sigil pass palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigilPalette {
    /// Per-cell cosine palette phased by the mirrored noise map
    Cosine,
    /// Uniform fill with the shifted working color
    Uniform,
}

/// Built-in banner tunings, selectable as configuration presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylePreset {
    /// Cosine-shaded sigil with an outline; narrower flag birth rule
    Classic,
    /// Uniform sigil without an outline; heavier flag carve from the edge
    Bold,
}

/// Full configuration of one banner generation run
#[derive(Debug, Clone, PartialEq)]
pub struct BannerConfig {
    /// Validated grid geometry
    pub dims: GridDimensions,
    /// Fractal noise parameters
    pub noise: NoiseParams,
    /// Cosine palette coefficients and phase window
    pub palette: PaletteParams,
    /// Hue relation deriving the working colors
    pub relation: ColorRelation,
    /// Draw fresh seeds and palette phase instead of replaying `seed`
    pub randomize: bool,
    /// Seed replayed by every pass walk when `randomize` is off
    pub seed: u32,
    /// Flag pass tuning
    pub flag: PassParams,
    /// Pattern pass tuning
    pub pattern: PassParams,
    /// Sigil pass tuning
    pub sigil: PassParams,
    /// Column where the flag walk starts
    pub flag_start_col: usize,
    /// Value offset separating the pattern tone from the flag tone
    pub pattern_value_delta: f32,
    /// Source of the sigil palette
    pub sigil_palette: SigilPalette,
}

impl BannerConfig {
    /// Build a configuration from a style preset
    ///
    /// # Errors
    ///
    /// Returns an error if the geometry fails validation (see
    /// [`GridDimensions::new`]).
    pub fn preset(style: StylePreset, width: usize, height: usize) -> Result<Self> {
        let dims = GridDimensions::new(width, height)?;

        let (flag_walk, flag_birth, flag_start_col, pattern_value_delta, sigil_outline) =
            match style {
                StylePreset::Classic => (
                    FLAG_WALK_CLASSIC,
                    FLAG_BIRTH_CLASSIC,
                    dims.half_width() - 1,
                    PATTERN_VALUE_DELTA_CLASSIC,
                    true,
                ),
                StylePreset::Bold => (
                    FLAG_WALK_BOLD,
                    FLAG_BIRTH_BOLD,
                    1,
                    PATTERN_VALUE_DELTA_BOLD,
                    false,
                ),
            };

        let sigil_palette = match style {
            StylePreset::Classic => SigilPalette::Cosine,
            StylePreset::Bold => SigilPalette::Uniform,
        };

        Ok(Self {
            dims,
            noise: NoiseParams {
                scale: DEFAULT_NOISE_SCALE,
                octaves: DEFAULT_NOISE_OCTAVES,
                persistence: DEFAULT_NOISE_PERSISTENCE,
                lacunarity: DEFAULT_NOISE_LACUNARITY,
            },
            palette: PaletteParams {
                coeffs: PaletteCoeffs {
                    a: DEFAULT_PALETTE_A,
                    b: DEFAULT_PALETTE_B,
                    c: DEFAULT_PALETTE_C,
                    d: DEFAULT_PALETTE_D,
                },
                range: DEFAULT_PALETTE_RANGE,
                cycle: DEFAULT_PALETTE_CYCLE,
            },
            relation: ColorRelation::Analogous,
            randomize: false,
            seed: DEFAULT_SEED,
            flag: PassParams {
                walk_iterations: flag_walk,
                edges: EdgePolicy::Bounce,
                symmetric: true,
                birth: NeighborRule::from_counts(flag_birth),
                survive: NeighborRule::from_counts(BROAD_SURVIVE),
                generations: FLAG_GENERATIONS,
                outline: true,
            },
            pattern: PassParams {
                walk_iterations: PATTERN_WALK,
                edges: EdgePolicy::Wrap,
                symmetric: false,
                birth: NeighborRule::from_counts(PATTERN_BIRTH),
                survive: NeighborRule::from_counts(PATTERN_SURVIVE),
                generations: PATTERN_GENERATIONS,
                outline: false,
            },
            sigil: PassParams {
                walk_iterations: SIGIL_WALK,
                edges: EdgePolicy::Bounce,
                symmetric: true,
                birth: NeighborRule::from_counts(flag_birth),
                survive: NeighborRule::from_counts(BROAD_SURVIVE),
                generations: SIGIL_GENERATIONS,
                outline: sigil_outline,
            },
            flag_start_col,
            pattern_value_delta,
            sigil_palette,
        })
    }
}

/// A finished banner: the composite pixel buffer plus the silhouette mask
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    /// Final pixels; `None` cells were never painted by any pass
    pub pixels: Array2<Option<Rgb>>,
    /// The flag silhouette that confined the later passes
    pub occupancy: Array2<bool>,
    /// Grid geometry of both buffers
    pub dims: GridDimensions,
}

impl Banner {
    /// Fraction of cells inside the silhouette
    pub fn coverage(&self) -> f64 {
        let filled = self.occupancy.iter().filter(|&&cell| cell).count();
        filled as f64 / self.dims.cell_count() as f64
    }
}

/// Sequences the three generation passes over shared buffers
pub struct BannerPipeline {
    config: BannerConfig,
    session: StdRng,
    capture: Option<GenerationCapture>,
}

impl BannerPipeline {
    /// Create a pipeline for one or more runs of the given configuration
    ///
    /// With `randomize` off the session generator is seeded from the
    /// configured seed, so a fresh pipeline reproduces the same banner.
    pub fn new(config: BannerConfig) -> Self {
        let session = if config.randomize {
            StdRng::from_os_rng()
        } else {
            StdRng::seed_from_u64(u64::from(config.seed))
        };

        Self {
            config,
            session,
            capture: None,
        }
    }

    /// Record mask snapshots of every smoothing generation for GIF export
    pub fn enable_visualization(&mut self) {
        self.capture = Some(GenerationCapture::new());
    }

    /// Access the recorded generation snapshots, if capturing
    pub const fn visualization(&self) -> Option<&GenerationCapture> {
        self.capture.as_ref()
    }

    /// Export the recorded generation snapshots as an animated GIF
    ///
    /// # Errors
    ///
    /// Returns an error if capturing was never enabled, no frames were
    /// recorded, or the GIF cannot be written.
    pub fn export_visualization(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        match &self.capture {
            Some(capture) => capture.export_gif(output_path, frame_delay_ms),
            None => Err(crate::io::error::invalid_parameter(
                "visualization",
                &"disabled",
                &"call enable_visualization before generating",
            )),
        }
    }

    /// Run one full Flag -> Pattern -> Sigil sequence
    pub fn generate(&mut self) -> Banner {
        let dims = self.config.dims;
        let shape = dims.shape();
        let (rows, cols) = shape;

        let mut pixels: Array2<Option<Rgb>> = Array2::from_elem(shape, None);

        // Randomized runs redraw the palette phase vector and cycle; fixed
        // runs keep the configured window
        let (phase, cycle) = if self.config.randomize {
            (
                [
                    self.session.random::<f32>(),
                    self.session.random::<f32>(),
                    self.session.random::<f32>(),
                ],
                self.session.random::<f32>(),
            )
        } else {
            (self.config.palette.coeffs.d, self.config.palette.cycle)
        };
        let coeffs = PaletteCoeffs {
            d: phase,
            ..self.config.palette.coeffs
        };

        // Flag: carve the silhouette over the whole canvas
        let flag_noise = noise::generate(cols, rows, self.noise_seed(), &self.config.noise, [
            0.0, 0.0,
        ]);

        let base_phase = self.config.palette.range.mul_add(0.5, cycle);
        let base = palette::cosine_color(base_phase, &coeffs);
        let mut working = palette::shift_hue(base.to_hsv(), self.config.relation, &mut self.session);
        if !self.config.relation.is_flat() {
            working.v = (0.5 - working.v).mul_add(VALUE_DAMPING, working.v);
        }

        let flag_color = working.to_rgb();
        let flag_palette = palette::solid_palette(shape, flag_color);
        let open_canvas = Array2::from_elem(shape, true);

        let flag_seed = self.walk_seed();
        let occupancy = run_pass(
            &self.config.flag,
            flag_seed,
            [rows - 2, self.config.flag_start_col],
            &open_canvas,
            &flag_palette,
            &flag_noise,
            &mut pixels,
            self.capture.as_mut(),
            flag_color,
        );

        let anchor_row = banner_anchor_row(&occupancy);

        // Pattern: sparse interior texture inside the silhouette
        let pattern_value = if working.v > 0.5 {
            working.v - self.config.pattern_value_delta
        } else {
            working.v + self.config.pattern_value_delta
        };
        let pattern_color = Hsv::new(working.h, working.s, pattern_value).to_rgb();
        let pattern_palette = palette::solid_palette(shape, pattern_color);

        let pattern_seed = self.walk_seed();
        run_pass(
            &self.config.pattern,
            pattern_seed,
            [anchor_row, dims.half_width() - 1],
            &occupancy,
            &pattern_palette,
            &flag_noise,
            &mut pixels,
            self.capture.as_mut(),
            pattern_color,
        );

        // Sigil: mirrored emblem recolored away from the flag tone
        let sigil_noise = mirrored_noise(
            dims,
            self.noise_seed(),
            &self.config.noise,
        );

        working.v = swing(working.v);
        working.s = swing(working.s);
        working = palette::shift_hue(working, self.config.relation, &mut self.session);
        let sigil_color = working.to_rgb();

        let sigil_palette = match self.config.sigil_palette {
            SigilPalette::Cosine => palette::per_cell_palette(
                &sigil_noise,
                self.config.palette.range,
                cycle,
                &coeffs,
            ),
            SigilPalette::Uniform => palette::solid_palette(shape, sigil_color),
        };

        let sigil_seed = self.walk_seed();
        run_pass(
            &self.config.sigil,
            sigil_seed,
            [anchor_row, dims.half_width() - 1],
            &occupancy,
            &sigil_palette,
            &sigil_noise,
            &mut pixels,
            self.capture.as_mut(),
            sigil_color,
        );

        Banner {
            pixels,
            occupancy,
            dims,
        }
    }

    // Noise seeds always come from the session so fixed runs replay them
    fn noise_seed(&mut self) -> u32 {
        self.session.random::<u32>()
    }

    // Random mode composes a fresh 32-bit seed from a 30-bit and a 2-bit
    // draw; fixed mode replays the configured seed for every pass
    fn walk_seed(&mut self) -> u32 {
        if self.config.randomize {
            let thirty_bits = self.session.random_range(1u32..(1 << 30));
            let two_bits = self.session.random_range(0u32..(1 << 2));
            (thirty_bits << 2) | two_bits
        } else {
            self.config.seed
        }
    }
}

// Swing a channel away from its current level, pivoting near the top
fn swing(channel: f32) -> f32 {
    if channel > SIGIL_SHIFT_PIVOT {
        channel - SIGIL_SHIFT
    } else {
        channel + SIGIL_SHIFT
    }
}

// Carve, smooth, and composite one pass; returns the smoothed mask
fn run_pass(
    params: &PassParams,
    walk_seed: u32,
    start: [usize; 2],
    allowed: &Array2<bool>,
    pass_palette: &Array2<Rgb>,
    noise_map: &Array2<f64>,
    pixels: &mut Array2<Option<Rgb>>,
    capture: Option<&mut GenerationCapture>,
    pass_color: Rgb,
) -> Array2<bool> {
    let mut mask = walker::carve(allowed, &WalkParams {
        iterations: params.walk_iterations,
        seed: walk_seed,
        edges: params.edges,
        symmetric: params.symmetric,
        start,
    });

    if let Some(frames) = capture {
        frames.record(&mask, pass_color);
        for _ in 0..params.generations {
            automaton::smooth(&mut mask, allowed, &params.birth, &params.survive, 1);
            frames.record(&mask, pass_color);
        }
    } else {
        automaton::smooth(
            &mut mask,
            allowed,
            &params.birth,
            &params.survive,
            params.generations,
        );
    }

    compositor::render(pixels, &mask, pass_palette, noise_map, params.outline);
    mask
}

// Anchor row for the pattern and sigil walks: midway between the far edge
// and the first row whose filled count (ignoring the first column) reaches
// width - 2; falls back to the center when the silhouette never gets there
fn banner_anchor_row(occupancy: &Array2<bool>) -> usize {
    let (rows, cols) = occupancy.dim();

    for row in 0..rows {
        let filled = (1..cols)
            .filter(|&col| occupancy.get((row, col)).copied().unwrap_or(false))
            .count();
        if filled >= cols - 2 {
            return (rows + row) / 2;
        }
    }

    rows / 2
}

// Generate a half-width noise map and mirror it to full width, enforcing
// left-right symmetry of the sigil's color variation
fn mirrored_noise(dims: GridDimensions, seed: u32, params: &NoiseParams) -> Array2<f64> {
    let half = noise::generate(dims.half_width(), dims.height(), seed, params, [0.0, 0.0]);
    let width = dims.width();

    Array2::from_shape_fn(dims.shape(), |(row, col)| {
        let source = if col < width / 2 { col } else { width - 1 - col };
        half.get((row, source)).copied().unwrap_or(0.5)
    })
}
