//! Normalized RGB and HSV color types
//!
//! Channels are `f32` in [0,1]. Hue wraps modulo 1 rather than saturating,
//! so relation shifts can push it through either end of the range.

/// An RGB color with channels clamped to [0,1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
}

impl Rgb {
    /// Solid black, used for outline strokes
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Create a color, clamping each channel into [0,1]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Convert to hue/saturation/value
    ///
    /// An achromatic color (zero delta) reports hue 0.
    pub fn to_hsv(self) -> Hsv {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;

        let v = max;
        let s = if max > 0.0 { delta / max } else { 0.0 };

        let h = if delta <= f32::EPSILON {
            0.0
        } else if (max - self.r).abs() <= f32::EPSILON {
            ((self.g - self.b) / delta).rem_euclid(6.0) / 6.0
        } else if (max - self.g).abs() <= f32::EPSILON {
            ((self.b - self.r) / delta + 2.0) / 6.0
        } else {
            ((self.r - self.g) / delta + 4.0) / 6.0
        };

        Hsv::new(h, s, v)
    }

    /// Quantize to 8-bit RGBA with full opacity
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            255,
        ]
    }
}

/// A color in hue/saturation/value space
///
/// Saturation and value are allowed to drift outside [0,1] while shading
/// math accumulates; [`Hsv::to_rgb`] clamps at conversion time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in [0,1), wrapping
    pub h: f32,
    /// Saturation
    pub s: f32,
    /// Value (brightness)
    pub v: f32,
}

impl Hsv {
    /// Create a color, wrapping hue into [0,1)
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self {
            h: h.rem_euclid(1.0),
            s,
            v,
        }
    }

    /// Convert back to RGB via the six-sector wedge formula
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(1.0);
        let s = self.s.clamp(0.0, 1.0);
        let v = self.v.clamp(0.0, 1.0);

        let sector = (h * 6.0).floor();
        let f = h.mul_add(6.0, -sector);
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (r, g, b) = match sector as i32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgb::new(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::{Hsv, Rgb};

    const TOLERANCE: f32 = 1e-5;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn primary_colors_roundtrip() {
        for (rgb, hue) in [
            (Rgb::new(1.0, 0.0, 0.0), 0.0),
            (Rgb::new(0.0, 1.0, 0.0), 1.0 / 3.0),
            (Rgb::new(0.0, 0.0, 1.0), 2.0 / 3.0),
        ] {
            let hsv = rgb.to_hsv();
            assert!(close(hsv.h, hue), "hue {} vs {hue}", hsv.h);
            assert!(close(hsv.s, 1.0));
            assert!(close(hsv.v, 1.0));

            let back = hsv.to_rgb();
            assert!(close(back.r, rgb.r) && close(back.g, rgb.g) && close(back.b, rgb.b));
        }
    }

    #[test]
    fn gray_has_zero_saturation() {
        let hsv = Rgb::new(0.4, 0.4, 0.4).to_hsv();
        assert!(close(hsv.s, 0.0));
        assert!(close(hsv.v, 0.4));
    }

    #[test]
    fn channels_clamp_on_construction() {
        let rgb = Rgb::new(-0.5, 1.5, 0.25);
        assert!(close(rgb.r, 0.0));
        assert!(close(rgb.g, 1.0));
        assert!(close(rgb.b, 0.25));
    }

    #[test]
    fn hue_wraps_on_construction() {
        assert!(close(Hsv::new(1.25, 1.0, 1.0).h, 0.25));
        assert!(close(Hsv::new(-0.25, 1.0, 1.0).h, 0.75));
    }

    #[test]
    fn oversaturated_input_clamps_at_conversion() {
        let rgb = Hsv::new(0.5, 1.4, 1.2).to_rgb();
        assert!(rgb.r >= 0.0 && rgb.r <= 1.0);
        assert!(rgb.g >= 0.0 && rgb.g <= 1.0);
        assert!(rgb.b >= 0.0 && rgb.b <= 1.0);
    }
}
