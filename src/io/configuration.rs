//! Generation constants and runtime configuration defaults

// Default grid geometry (a hanging banner, taller than wide)
/// Default banner width in cells
pub const DEFAULT_WIDTH: usize = 32;
/// Default banner height in cells
pub const DEFAULT_HEIGHT: usize = 48;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u32 = 42;

// Noise field defaults
/// Default noise feature scale
pub const DEFAULT_NOISE_SCALE: f64 = 10.0;
/// Default number of octave bands
pub const DEFAULT_NOISE_OCTAVES: u32 = 3;
/// Default per-octave amplitude falloff
pub const DEFAULT_NOISE_PERSISTENCE: f64 = 0.5;
/// Default per-octave frequency growth
pub const DEFAULT_NOISE_LACUNARITY: f64 = 0.6;
/// Substitute for non-positive noise scales
pub const MIN_NOISE_SCALE: f64 = 1e-4;

// Cosine palette defaults (a mid-gray carrier with full-range oscillation)
/// Default palette DC offset
pub const DEFAULT_PALETTE_A: [f32; 3] = [0.5, 0.5, 0.5];
/// Default palette amplitude
pub const DEFAULT_PALETTE_B: [f32; 3] = [0.5, 0.5, 0.5];
/// Default palette frequency
pub const DEFAULT_PALETTE_C: [f32; 3] = [1.0, 1.0, 1.0];
/// Default palette phase
pub const DEFAULT_PALETTE_D: [f32; 3] = [0.0, 0.33, 0.67];
/// Default width of the sampled phase window
pub const DEFAULT_PALETTE_RANGE: f32 = 0.5;
/// Default phase offset of the sampled window
pub const DEFAULT_PALETTE_CYCLE: f32 = 0.0;

// Hue relation steps, as fractions of a full turn
/// Analogous relation step (30 degrees)
pub const ANALOGOUS_STEP: f32 = 30.0 / 360.0;
/// Complementary relation step (180 degrees)
pub const COMPLEMENTARY_STEP: f32 = 0.5;
/// Triad relation step (120 degrees)
pub const TRIAD_STEP: f32 = 120.0 / 360.0;
/// Tetrad relation step (90 degrees)
pub const TETRAD_STEP: f32 = 90.0 / 360.0;

/// Pull of the flag base value toward mid-brightness after the hue shift
pub const VALUE_DAMPING: f32 = 1.8;

// Flag pass tuning
/// Flag walk length for the classic preset
pub const FLAG_WALK_CLASSIC: usize = 6000;
/// Flag walk length for the bold preset
pub const FLAG_WALK_BOLD: usize = 7000;
/// Flag birth rule for the classic preset
pub const FLAG_BIRTH_CLASSIC: &[u8] = &[6, 7, 8];
/// Flag birth rule for the bold preset
pub const FLAG_BIRTH_BOLD: &[u8] = &[5, 6, 7, 8];
/// Survive rule shared by the flag and sigil passes
pub const BROAD_SURVIVE: &[u8] = &[1, 2, 3, 4, 5, 6, 7, 8];
/// Smoothing generations for the flag pass
pub const FLAG_GENERATIONS: usize = 20;

// Pattern pass tuning
/// Pattern walk length
pub const PATTERN_WALK: usize = 500;
/// Pattern birth rule
pub const PATTERN_BIRTH: &[u8] = &[3];
/// Pattern survive rule; zero is included so isolated speckles persist
pub const PATTERN_SURVIVE: &[u8] = &[0, 1, 2, 3, 4];
/// Smoothing generations for the pattern pass
pub const PATTERN_GENERATIONS: usize = 100;
/// Value offset separating the pattern tone from the flag, classic preset
pub const PATTERN_VALUE_DELTA_CLASSIC: f32 = 0.05;
/// Value offset separating the pattern tone from the flag, bold preset
pub const PATTERN_VALUE_DELTA_BOLD: f32 = 0.03;

// Sigil pass tuning
/// Sigil walk length
pub const SIGIL_WALK: usize = 150;
/// Smoothing generations for the sigil pass
pub const SIGIL_GENERATIONS: usize = 5;
/// Value/saturation swing applied before the sigil recolor
pub const SIGIL_SHIFT: f32 = 0.3;
/// Pivot deciding the swing direction
pub const SIGIL_SHIFT_PIVOT: f32 = 0.7;

// Compositor shading
/// Strength of the row/column band perturbation on value and saturation
pub const SHADE_STRENGTH: f32 = 0.2;
/// Blue channel tint added where bands overlap filled cells
pub const BLUE_TINT: f32 = 0.02;

// Visualization output
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 80;
/// Hold multiplier for the final GIF frame
pub const GIF_FINAL_FRAME_HOLD: u32 = 12;
