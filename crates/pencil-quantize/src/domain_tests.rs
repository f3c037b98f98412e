//! Domain-critical regression tests for pencil-quantize.
//!
//! Each test names the class of bug it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::api::Sketcher;
    use crate::buffer::PixelBuffer;
    use crate::color::{DistanceMetric, Rgb};
    use crate::palette::{Palette, PaletteEntry, Trace};
    use crate::resample::{axis_ratio, resample, resize, KernelType};

    fn golden_source() -> PixelBuffer {
        PixelBuffer::from_pixels(
            2,
            2,
            &[
                Rgb::new(0, 0, 0),
                Rgb::new(255, 255, 255),
                Rgb::new(255, 0, 0),
                Rgb::new(0, 255, 0),
            ],
        )
        .unwrap()
    }

    fn gradient(width: u32, height: u32) -> PixelBuffer {
        let mut buf = PixelBuffer::new(width, height).unwrap();
        for y in 0..height {
            for x in 0..width {
                let color = Rgb::new(
                    (x * 37 % 256) as u8,
                    (y * 53 % 256) as u8,
                    ((x + y) * 11 % 256) as u8,
                );
                buf.set_pixel(x, y, color);
            }
        }
        buf
    }

    // ========================================================================
    // Resampler
    // ========================================================================

    /// If this breaks, the 2x2 -> 3x3 bilinear output drifted: rounding,
    /// ratio convention or pass order changed.
    #[test]
    fn test_golden_output_2x2_to_3x3() {
        let dst = resize(&golden_source(), 3, 3, KernelType::Bilinear).unwrap();
        let rows: Vec<Vec<Rgb>> = (0..3)
            .map(|y| (0..3).map(|x| dst.pixel(x, y)).collect())
            .collect();

        assert_eq!(
            rows,
            vec![
                vec![Rgb::new(0, 0, 0), Rgb::new(128, 128, 128), Rgb::new(255, 255, 255)],
                vec![Rgb::new(128, 0, 0), Rgb::new(128, 128, 64), Rgb::new(128, 255, 128)],
                vec![Rgb::new(255, 0, 0), Rgb::new(128, 128, 0), Rgb::new(0, 255, 0)],
            ]
        );
    }

    /// If this breaks, equal-size resampling went through a kernel instead
    /// of the byte copy and is no longer bit-exact.
    #[test]
    fn test_identity_resize_bit_exact() {
        for (w, h) in [(1, 1), (2, 3), (13, 7)] {
            let src = gradient(w, h);
            for kernel in KernelType::ALL {
                let mut dst = PixelBuffer::new(w, h).unwrap();
                resample(&src, &mut dst, kernel).unwrap();
                assert_eq!(dst, src, "{}x{} with {}", w, h, kernel);
            }
        }
    }

    /// If this breaks, edge handling wraps or zero-pads instead of clamping:
    /// corner pixels of an upscaled image must equal the source corners.
    #[test]
    fn test_border_clamp_corners() {
        let src = golden_source();
        let dst = resize(&src, 4, 4, KernelType::Bilinear).unwrap();
        for (dx, dy, sx, sy) in [(0, 0, 0, 0), (3, 0, 1, 0), (0, 3, 0, 1), (3, 3, 1, 1)] {
            assert_eq!(dst.pixel(dx, dy), src.pixel(sx, sy), "corner ({}, {})", dx, dy);
        }
    }

    /// If this breaks, a one-pixel destination axis divides by zero.
    #[test]
    fn test_single_pixel_axis_ratio() {
        for src in 1..=64 {
            assert_eq!(axis_ratio(src, 1), 1.0);
        }
        let dst = resize(&gradient(9, 9), 1, 9, KernelType::Bilinear).unwrap();
        assert_eq!(dst.dimensions(), (1, 9));
    }

    /// If this breaks, an unimplemented kernel silently fell back to
    /// bilinear or crashed instead of reporting failure.
    #[test]
    fn test_lanczos3_reports_failure() {
        let src = gradient(8, 8);
        let mut dst = PixelBuffer::new(3, 3).unwrap();
        let err = resample(&src, &mut dst, KernelType::Lanczos3).unwrap_err();
        assert!(err.is_not_implemented());
    }

    // ========================================================================
    // Color matcher
    // ========================================================================

    /// If this breaks, the scan skipped an entry or a trace and is no longer
    /// exhaustive.
    #[test]
    fn test_exhaustive_two_entry_palette() {
        let palette = Palette::new(vec![
            PaletteEntry::new("dark", Rgb::new(0, 0, 0), Rgb::new(10, 10, 10)).unwrap(),
            PaletteEntry::new("bright", Rgb::new(255, 255, 255), Rgb::new(245, 245, 245)).unwrap(),
        ])
        .unwrap();
        let query = Rgb::new(5, 5, 5);
        let m = palette.find_closest(query);

        assert_eq!(m.index, 0);
        let metric = palette.distance_metric();
        for trace in [Trace::Heavy, Trace::Light] {
            assert!(m.distance <= metric.distance(query, palette[1].color(trace)));
        }
    }

    /// If this breaks, the tie-break changed: on equal distances the first
    /// entry, and its heavy color, must win.
    #[test]
    fn test_tie_break_is_first_in_scan_order() {
        // (100,100,100) is equidistant from 90 and 110 on every channel
        let palette = Palette::new(vec![
            PaletteEntry::new("first", Rgb::new(90, 90, 90), Rgb::new(110, 110, 110)).unwrap(),
            PaletteEntry::new("second", Rgb::new(90, 90, 90), Rgb::new(110, 110, 110)).unwrap(),
        ])
        .unwrap()
        .with_distance_metric(DistanceMetric::Euclidean);

        let m = palette.find_closest(Rgb::new(100, 100, 100));
        assert_eq!((m.index, m.trace), (0, Trace::Heavy));
    }

    /// If this breaks, matching depends on hidden state between calls.
    #[test]
    fn test_find_closest_is_deterministic() {
        let palette: Palette = "\
a 102030 405060
b 405060 102030
c 7f7f7f 808080
"
        .parse()
        .unwrap();
        for color in gradient(16, 16).pixels() {
            let first = palette.find_closest(color);
            for _ in 0..3 {
                assert_eq!(palette.find_closest(color), first);
            }
        }
    }

    // ========================================================================
    // End to end
    // ========================================================================

    /// If this breaks, resample and match no longer compose: the golden
    /// grid matched against the primaries must give a fixed index layout.
    #[test]
    fn test_end_to_end_golden_sketch() {
        let palette: Palette = "\
black 000000 000000
white ffffff ffffff
red   ff0000 ff0000
green 00ff00 00ff00
grey  808080 808080
"
        .parse()
        .unwrap();
        let sketch = Sketcher::new(palette)
            .grid(3, 3)
            .sketch(&golden_source())
            .unwrap();

        let corners: Vec<usize> = [(0, 0), (2, 0), (0, 2), (2, 2), (1, 0)]
            .iter()
            .map(|&(x, y)| sketch.get(x, y).unwrap().index)
            .collect();
        assert_eq!(corners, vec![0, 1, 2, 3, 4]);
        assert_eq!(sketch.get(0, 0).unwrap().distance, 0.0);
    }
}
