//! Pure-computation pixel buffer conversion from a [`Canvas`].
//!
//! Always available (no feature gate) so the PNG path and any embedding that
//! wants raw RGBA share the same conversion.

use undulate_core::Canvas;

/// Expands the canvas raster to RGBA8 with opaque alpha.
///
/// The buffer length is `pixel_width * pixel_height * 4`.
pub fn canvas_to_rgba(canvas: &Canvas) -> Vec<u8> {
    canvas
        .to_rgb8()
        .chunks_exact(3)
        .flat_map(|px| [px[0], px[1], px[2], 255u8])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use undulate_core::Srgb;

    #[test]
    fn canvas_to_rgba_correct_length() {
        let canvas = Canvas::new(8.0, 4.0, 1.0, Srgb::BLACK).unwrap();
        let buf = canvas_to_rgba(&canvas);
        assert_eq!(buf.len(), 8 * 4 * 4);
    }

    #[test]
    fn canvas_to_rgba_alpha_always_255() {
        let canvas = Canvas::new(4.0, 4.0, 1.0, Srgb { r: 0.2, g: 0.4, b: 0.6 }).unwrap();
        let buf = canvas_to_rgba(&canvas);
        for (i, &byte) in buf.iter().enumerate() {
            if i % 4 == 3 {
                assert_eq!(byte, 255, "alpha at pixel {} should be 255", i / 4);
            }
        }
    }

    #[test]
    fn canvas_to_rgba_copies_colors() {
        let mut canvas = Canvas::new(8.0, 8.0, 1.0, Srgb::BLACK).unwrap();
        let red = Srgb { r: 1.0, g: 0.0, b: 0.0 };
        canvas.fill_circle(0.5, 0.5, 2.0, red, 1.0);
        let buf = canvas_to_rgba(&canvas);
        assert_eq!(&buf[0..4], &[255, 0, 0, 255]);
        // Pixel (3, 0) is outside the disc.
        assert_eq!(&buf[12..16], &[0, 0, 0, 255]);
    }

    #[test]
    fn accumulated_faint_dots_reach_the_buffer() {
        let mut canvas = Canvas::new(4.0, 4.0, 1.0, Srgb::BLACK).unwrap();
        let white = Srgb { r: 1.0, g: 1.0, b: 1.0 };
        for _ in 0..500 {
            canvas.fill_circle(0.5, 0.5, 0.05, white, 0.4);
        }
        let buf = canvas_to_rgba(&canvas);
        assert!(buf[0] > 50, "expected visible deposit, got {}", buf[0]);
    }
}
