//! Color types for the undulate sketches.
//!
//! Sketches pick their colors in HSB with every channel in [0, 1] and the
//! canvas stores sRGB, so this module only needs [`Hsb`], [`Srgb`] and the
//! conversion between them.

use serde::{Serialize, Serializer};

/// sRGB color with components in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Hue / saturation / brightness color, every channel in [0, 1].
///
/// Hue wraps: `1.25` is the same hue as `0.25`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    pub h: f64,
    pub s: f64,
    pub b: f64,
}

impl Srgb {
    pub const BLACK: Srgb = Srgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Converts the color to a hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Quantizes to 8-bit channels with rounding, clamping out-of-range values.
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl Hsb {
    pub fn new(h: f64, s: f64, b: f64) -> Self {
        Self { h, s, b }
    }
}

impl From<Hsb> for Srgb {
    fn from(c: Hsb) -> Self {
        hsb_to_srgb(c)
    }
}

/// Converts HSB (a.k.a. HSV) to sRGB.
///
/// Saturation and brightness are clamped to [0, 1]; hue is wrapped.
pub fn hsb_to_srgb(c: Hsb) -> Srgb {
    let h = c.h.rem_euclid(1.0) * 6.0;
    let s = c.s.clamp(0.0, 1.0);
    let v = c.b.clamp(0.0, 1.0);

    let sector = (h.floor() as usize).min(5);
    let f = h - sector as f64;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Srgb { r, g, b }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: Srgb, b: Srgb) -> bool {
        (a.r - b.r).abs() < EPSILON && (a.g - b.g).abs() < EPSILON && (a.b - b.b).abs() < EPSILON
    }

    #[test]
    fn primary_hues_convert_to_primaries() {
        let red = hsb_to_srgb(Hsb::new(0.0, 1.0, 1.0));
        let green = hsb_to_srgb(Hsb::new(1.0 / 3.0, 1.0, 1.0));
        let blue = hsb_to_srgb(Hsb::new(2.0 / 3.0, 1.0, 1.0));
        assert!(approx_eq(red, Srgb { r: 1.0, g: 0.0, b: 0.0 }), "{red:?}");
        assert!(approx_eq(green, Srgb { r: 0.0, g: 1.0, b: 0.0 }), "{green:?}");
        assert!(approx_eq(blue, Srgb { r: 0.0, g: 0.0, b: 1.0 }), "{blue:?}");
    }

    #[test]
    fn zero_saturation_is_gray() {
        let gray = hsb_to_srgb(Hsb::new(0.7, 0.0, 0.5));
        assert!(approx_eq(gray, Srgb { r: 0.5, g: 0.5, b: 0.5 }), "{gray:?}");
    }

    #[test]
    fn zero_brightness_is_black() {
        let c = hsb_to_srgb(Hsb::new(0.3, 0.8, 0.0));
        assert!(approx_eq(c, Srgb::BLACK));
    }

    #[test]
    fn hue_wraps_around() {
        let a = hsb_to_srgb(Hsb::new(0.25, 0.6, 0.9));
        let b = hsb_to_srgb(Hsb::new(1.25, 0.6, 0.9));
        let c = hsb_to_srgb(Hsb::new(-0.75, 0.6, 0.9));
        assert!(approx_eq(a, b));
        assert!(approx_eq(a, c));
    }

    #[test]
    fn from_impl_matches_function() {
        let hsb = Hsb::new(0.55, 0.3, 0.8);
        assert_eq!(Srgb::from(hsb), hsb_to_srgb(hsb));
    }

    #[test]
    fn to_hex_clamps_out_of_range() {
        let c = Srgb { r: 1.5, g: -0.2, b: 0.5 };
        assert_eq!(c.to_hex(), "#ff0080");
    }

    #[test]
    fn srgb_serializes_as_hex() {
        let c = Srgb { r: 1.0, g: 0.0, b: 0.5 };
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#ff0080\"");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn hsb_to_srgb_always_in_unit_cube(h in -2.0_f64..2.0, s in 0.0_f64..=1.0, b in 0.0_f64..=1.0) {
                let c = hsb_to_srgb(Hsb::new(h, s, b));
                for ch in [c.r, c.g, c.b] {
                    prop_assert!((0.0..=1.0).contains(&ch), "channel {ch} out of range");
                }
            }

            #[test]
            fn brightest_channel_equals_brightness(h in 0.0_f64..1.0, s in 0.0_f64..=1.0, b in 0.0_f64..=1.0) {
                let c = hsb_to_srgb(Hsb::new(h, s, b));
                let max = c.r.max(c.g).max(c.b);
                prop_assert!((max - b).abs() < 1e-9);
            }
        }
    }
}
