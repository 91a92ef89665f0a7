//! Mask snapshot capture and GIF generation for the smoothing passes
//!
//! Records the working mask after the walk and after every automaton
//! generation, each tinted with the owning pass's color, then encodes the
//! sequence as an animated GIF.

use crate::color::hsv::Rgb;
use crate::io::configuration::GIF_FINAL_FRAME_HOLD;
use crate::io::error::{BannerError, Result, invalid_parameter};
use image::{Frame, Rgba, RgbaImage};
use ndarray::Array2;

/// Background color for cells outside the current mask
const EMPTY_CELL: [u8; 4] = [40, 40, 44, 255];

// One recorded mask state
struct MaskFrame {
    mask: Array2<bool>,
    color: Rgb,
}

/// Captures mask snapshots during generation
///
/// Snapshots are cheap boolean grids; rendering to frames is deferred until
/// export so generation stays free of image work.
pub struct GenerationCapture {
    frames: Vec<MaskFrame>,
}

impl Default for GenerationCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationCapture {
    /// Create an empty capture
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Record the current mask state for a pass rendered in `color`
    pub fn record(&mut self, mask: &Array2<bool>, color: Rgb) {
        self.frames.push(MaskFrame {
            mask: mask.clone(),
            color,
        });
    }

    /// Number of recorded snapshots
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the recorded snapshots as an animated GIF
    ///
    /// The last frame is held longer so the finished silhouette is readable.
    ///
    /// # Errors
    ///
    /// Returns an error if no snapshots were recorded, the parent directory
    /// cannot be created, or GIF encoding fails.
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(invalid_parameter(
                "frames",
                &0,
                &"no generation snapshots captured",
            ));
        }

        let mut frames: Vec<Frame> = self
            .frames
            .iter()
            .map(|frame| render_frame(frame, frame_delay_ms))
            .collect();

        if let Some(last) = frames.last().map(|frame| frame.buffer().clone()) {
            frames.push(Frame::from_parts(
                last,
                0,
                0,
                image::Delay::from_numer_denom_ms(frame_delay_ms * GIF_FINAL_FRAME_HOLD, 1),
            ));
        }

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| BannerError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| BannerError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| BannerError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }
}

fn render_frame(frame: &MaskFrame, delay_ms: u32) -> Frame {
    let (rows, cols) = frame.mask.dim();
    let mut img = RgbaImage::new(cols as u32, rows as u32);
    let fill = frame.color.to_rgba8();

    for ((row, col), &occupied) in frame.mask.indexed_iter() {
        let rgba = if occupied { fill } else { EMPTY_CELL };
        img.put_pixel(col as u32, (rows - 1 - row) as u32, Rgba(rgba));
    }

    Frame::from_parts(img, 0, 0, image::Delay::from_numer_denom_ms(delay_ms, 1))
}
