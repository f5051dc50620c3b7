//! Smoothing regression test
//!
//! Checks the filter against a direct formula over the original bytes,
//! for every color type and bit depth, plus degenerate shapes.
//!
//! Run with:
//! ```
//! cargo test -p deinterlacer-filter --test smooth_reg
//! ```

use deinterlacer_core::{BitDepth, ColorType, RasterBuffer};
use deinterlacer_filter::{average_bytes, smooth, smoothed};
use deinterlacer_test::RegParams;
use deinterlacer_test::fixtures::{ALL_FORMATS, gradient_raster, meta_for, random_raster};

/// Smoothing written directly from the definition, reading only `orig`
fn reference_smooth(orig: &RasterBuffer) -> RasterBuffer {
    let mut out = orig.clone();
    for y in 1..orig.height() as usize {
        for x in 0..orig.stride() {
            let val = average_bytes(orig.get_unchecked(y, x), orig.get_unchecked(y - 1, x));
            out.set_unchecked(y, x, val);
        }
    }
    out
}

#[test]
fn smooth_reg() {
    let mut rp = RegParams::new("smooth");

    for (i, &(ct, bd)) in ALL_FORMATS.iter().enumerate() {
        let orig = random_raster(17, 12, ct, bd, 900 + i as u32);
        let mut raster = orig.clone();
        smooth(&mut raster);

        // Seed row untouched
        rp.compare_strings(orig.row(0).unwrap(), raster.row(0).unwrap());
        // Every other row depends only on original values
        rp.compare_raster(&reference_smooth(&orig), &raster);
        // Structure unchanged
        rp.compare_values(orig.stride() as f64, raster.stride() as f64, 0.0);
        rp.compare_values(
            1.0,
            if raster.color_type() == ct && raster.bit_depth() == bd { 1.0 } else { 0.0 },
            0.0,
        );
    }

    // Save one smoothed image per color family for inspection
    for &(ct, bd) in &[
        (ColorType::Grayscale, BitDepth::Eight),
        (ColorType::Rgb, BitDepth::Eight),
        (ColorType::Indexed, BitDepth::Eight),
    ] {
        let out = smoothed(&gradient_raster(64, 48, ct, bd));
        rp.write_raster_and_check(&out, &meta_for(&out))
            .expect("write and check");
    }

    assert!(rp.cleanup());
}

#[test]
fn smooth_not_idempotent_reg() {
    let mut rp = RegParams::new("smooth_not_idempotent");

    for &(w, h) in &[(1, 3), (4, 4), (16, 9)] {
        let orig = gradient_raster(w, h, ColorType::Grayscale, BitDepth::Eight);
        let once = smoothed(&orig);
        let twice = smoothed(&once);
        rp.compare_values(1.0, if once != twice { 1.0 } else { 0.0 }, 0.0);
        // Seed row survives both passes
        rp.compare_strings(once.row(0).unwrap(), twice.row(0).unwrap());
    }

    assert!(rp.cleanup());
}

#[test]
fn smooth_degenerate_shapes_reg() {
    let mut rp = RegParams::new("smooth_degenerate");

    for (i, &(ct, bd)) in ALL_FORMATS.iter().enumerate() {
        // One row: no-op
        let orig = random_raster(9, 1, ct, bd, i as u32);
        rp.compare_raster(&orig, &smoothed(&orig));

        // One column
        let orig = random_raster(1, 6, ct, bd, i as u32 + 50);
        rp.compare_raster(&reference_smooth(&orig), &smoothed(&orig));

        // One pixel
        let orig = random_raster(1, 1, ct, bd, i as u32 + 100);
        rp.compare_raster(&orig, &smoothed(&orig));
    }

    assert!(rp.cleanup());
}

#[test]
fn smooth_scenario_2x2() {
    let mut raster = RasterBuffer::from_rows(
        2,
        2,
        ColorType::Grayscale,
        BitDepth::Eight,
        vec![vec![10, 20], vec![30, 40]],
    )
    .unwrap();
    smooth(&mut raster);
    assert_eq!(raster.row(0), Some(&[10, 20][..]));
    assert_eq!(raster.row(1), Some(&[20, 30][..]));
}
