//! Command-line interface for batch banner generation

use crate::algorithm::pipeline::{BannerConfig, BannerPipeline, StylePreset};
use crate::color::palette::ColorRelation;
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH, GIF_FRAME_DELAY_MS,
};
use crate::io::error::{BannerError, Result, invalid_parameter};
use crate::io::image::export_banner_as_png;
use crate::io::progress::ProgressManager;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Command-line arguments for the banner generation tool
#[derive(Parser)]
#[command(name = "bannergen")]
#[command(
    author,
    version,
    about = "Generate procedural banner pixel art from seeded stochastic processes"
)]
pub struct Cli {
    /// Output directory for generated banners
    #[arg(value_name = "OUTPUT", default_value = "banners")]
    pub output: PathBuf,

    /// Number of banners to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Random seed for reproducible generation (advanced per banner)
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u32,

    /// Banner width in cells (must be even)
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Banner height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Style preset selecting one of the built-in tunings
    #[arg(long, value_enum, default_value_t = StyleArg::Classic)]
    pub style: StyleArg,

    /// Hue relation deriving the working colors
    #[arg(long, value_enum, default_value_t = RelationArg::Analogous)]
    pub relation: RelationArg,

    /// Draw fresh seeds instead of replaying the fixed seed
    #[arg(short, long)]
    pub randomize: bool,

    /// Export an animated GIF of the smoothing generations per banner
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// CLI-facing style preset selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// Cosine-shaded sigil with an outline
    Classic,
    /// Uniform sigil without an outline
    Bold,
}

impl StyleArg {
    const fn to_preset(self) -> StylePreset {
        match self {
            Self::Classic => StylePreset::Classic,
            Self::Bold => StylePreset::Bold,
        }
    }
}

/// CLI-facing hue relation selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RelationArg {
    /// Hue shifted up to two steps of 30 degrees either way
    Analogous,
    /// Hue shifted 180 degrees
    Complementary,
    /// Hue shifted 120 or 240 degrees
    Triad,
    /// Hue shifted 90, 180, or 270 degrees
    Tetrad,
    /// Near-black flat tone
    Black,
    /// Full-white flat tone
    White,
}

impl RelationArg {
    const fn to_relation(self) -> ColorRelation {
        match self {
            Self::Analogous => ColorRelation::Analogous,
            Self::Complementary => ColorRelation::Complementary,
            Self::Triad => ColorRelation::Triad,
            Self::Tetrad => ColorRelation::Tetrad,
            Self::Black => ColorRelation::BLACK,
            Self::White => ColorRelation::WHITE,
        }
    }
}

/// Orchestrates batch generation with progress tracking
pub struct BatchGenerator {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl BatchGenerator {
    /// Create a batch generator from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli
            .should_show_progress()
            .then(|| ProgressManager::new(cli.count));

        Self { cli, progress }
    }

    /// Generate all requested banners
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or any output file
    /// cannot be written.
    pub fn run(&self) -> Result<()> {
        std::fs::create_dir_all(&self.cli.output).map_err(|e| BannerError::FileSystem {
            path: self.cli.output.clone(),
            operation: "create directory",
            source: e,
        })?;

        for index in 0..self.cli.count {
            self.generate_one(index)?;
        }

        if let Some(ref progress) = self.progress {
            progress.finish();
        }

        Ok(())
    }

    fn generate_one(&self, index: usize) -> Result<()> {
        let mut config = BannerConfig::preset(
            self.cli.style.to_preset(),
            self.cli.width,
            self.cli.height,
        )?;
        config.relation = self.cli.relation.to_relation();
        config.randomize = self.cli.randomize;
        config.seed = self.cli.seed.wrapping_add(index as u32);

        let mut pipeline = BannerPipeline::new(config);
        if self.cli.visualize {
            pipeline.enable_visualization();
        }

        let banner = pipeline.generate();

        let file_name = format!("banner_{index:03}.png");
        let output_path = self.cli.output.join(&file_name);
        export_banner_as_png(&banner, path_str(&output_path)?)?;

        if self.cli.visualize {
            let gif_path = self
                .cli
                .output
                .join(format!("banner_{index:03}_generations.gif"));
            pipeline.export_visualization(path_str(&gif_path)?, GIF_FRAME_DELAY_MS)?;
        }

        if let Some(ref progress) = self.progress {
            progress.complete_banner(&file_name);
        }

        Ok(())
    }
}

fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| invalid_parameter("output", &path.display(), &"path is not valid UTF-8"))
}

#[cfg(test)]
mod tests {
    use super::{Cli, RelationArg, StyleArg};
    use crate::color::palette::ColorRelation;
    use clap::Parser;

    #[test]
    fn defaults_parse() {
        let cli = Cli::try_parse_from(["bannergen"]);
        assert!(cli.is_ok_and(|cli| cli.count == 1 && !cli.randomize));
    }

    #[test]
    fn relation_arguments_map_to_core_relations() {
        assert_eq!(RelationArg::Black.to_relation(), ColorRelation::BLACK);
        assert_eq!(
            RelationArg::Complementary.to_relation(),
            ColorRelation::Complementary
        );
    }

    #[test]
    fn style_arguments_parse() {
        let cli = Cli::try_parse_from(["bannergen", "out", "--style", "bold", "-n", "3"]);
        assert!(cli.is_ok_and(|cli| cli.style == StyleArg::Bold && cli.count == 3));
    }
}
