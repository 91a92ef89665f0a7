//! PNG export with transparency for never-painted cells

use crate::algorithm::pipeline::Banner;
use crate::io::error::{BannerError, Result};
use image::{ImageBuffer, Rgba};

/// Export a banner as a PNG with a transparent background
///
/// Grid row 0 is the banner's bottom edge, so rows are flipped into image
/// coordinates. Cells no pass ever painted come out fully transparent.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved to the given path.
pub fn export_banner_as_png(banner: &Banner, output_path: &str) -> Result<()> {
    let width = banner.dims.width() as u32;
    let height = banner.dims.height() as u32;

    let mut img = ImageBuffer::new(width, height);

    for ((row, col), &pixel) in banner.pixels.indexed_iter() {
        let rgba = pixel.map_or([0, 0, 0, 0], |color| color.to_rgba8());
        let pixel_x = col as u32;
        let pixel_y = height - 1 - row as u32;
        img.put_pixel(pixel_x, pixel_y, Rgba(rgba));
    }

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| BannerError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| BannerError::ImageExport {
        path: output_path.into(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::export_banner_as_png;
    use crate::algorithm::pipeline::Banner;
    use crate::color::hsv::Rgb;
    use crate::spatial::GridDimensions;
    use ndarray::Array2;

    fn small_banner() -> Option<Banner> {
        let dims = GridDimensions::new(8, 6).ok()?;
        let mut pixels = Array2::from_elem(dims.shape(), None);
        if let Some(slot) = pixels.get_mut((2, 3)) {
            *slot = Some(Rgb::new(0.9, 0.1, 0.1));
        }
        Some(Banner {
            pixels,
            occupancy: Array2::from_elem(dims.shape(), false),
            dims,
        })
    }

    #[test]
    fn writes_png_with_expected_dimensions() {
        let Some(banner) = small_banner() else {
            return;
        };
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        let path = dir.path().join("banner.png");
        let Some(path_str) = path.to_str() else {
            return;
        };

        assert!(export_banner_as_png(&banner, path_str).is_ok());

        let reloaded = image::image_dimensions(&path).ok();
        assert_eq!(reloaded, Some((8, 6)));
    }

    #[test]
    fn rejects_unwritable_path() {
        let Some(banner) = small_banner() else {
            return;
        };
        assert!(export_banner_as_png(&banner, "/proc/banner.png").is_err());
    }
}
