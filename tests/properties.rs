mod common;

use common::synthetic_image::noise_bitmap;
use mezzotone::edges::detect_edges;
use mezzotone::glyph::{ramp, ramp_index};
use mezzotone::luminance::sample_luminance;
use mezzotone::{Converter, EdgeParams, GridGeometry, RampMode, RenderOptions};

#[test]
fn luminance_stays_in_unit_range_on_noise() {
    for (seed, contrast) in [(7u64, false), (7, true), (99, false), (1234, true)] {
        let bitmap = noise_bitmap(53, 41, seed);
        let geometry = GridGeometry::compute(53, 41, 5, 1.7);
        let grid = sample_luminance(&bitmap.as_view(), &geometry, contrast);
        assert_eq!((grid.w, grid.h), (geometry.cols, geometry.rows));
        assert!(grid.data.iter().all(|l| (0.0..=1.0).contains(l)));
    }
}

#[test]
fn edge_magnitudes_stay_in_unit_range_on_noise() {
    let bitmap = noise_bitmap(80, 60, 42);
    let geometry = GridGeometry::compute(80, 60, 4, 1.5);
    let luminance = sample_luminance(&bitmap.as_view(), &geometry, false);
    let det = detect_edges(&luminance, &geometry, &EdgeParams::default());
    assert!(det.edges.data.iter().all(|e| (0.0..=1.0).contains(&e.magnitude)));
    assert!(det
        .edges
        .data
        .iter()
        .all(|e| e.angle > -std::f32::consts::PI && e.angle <= std::f32::consts::PI));
    assert!(det.max_magnitude.is_finite() && det.max_magnitude >= 0.0);
}

#[test]
fn glyph_grid_matches_geometry_across_shapes() {
    let shapes = [(1usize, 1usize, 8usize, 2.0f32), (7, 3, 2, 0.5), (33, 65, 4, 2.3), (120, 10, 16, 1.0)];
    for (w, h, cell, aspect) in shapes {
        let bitmap = noise_bitmap(w, h, (w * 31 + h) as u64);
        let opts = RenderOptions::new(cell, aspect, true, 0.3, false, false, "RECTANGLES").unwrap();
        let converter = Converter::new(opts);
        let geometry = converter.geometry(w, h);
        let glyphs = converter.convert(&bitmap.as_view());
        assert_eq!((glyphs.w, glyphs.h), (geometry.cols, geometry.rows), "{w}x{h}");
        assert_eq!(glyphs.data.len(), geometry.cells());
    }
}

#[test]
fn ramp_lookup_is_bounded_and_monotonic_for_every_ramp() {
    for mode in RampMode::ALL {
        for reverse in [false, true] {
            let glyphs = ramp(mode, reverse);
            let mut prev = 0;
            for i in 0..=512 {
                let idx = ramp_index(i as f32 / 512.0, glyphs.len());
                assert!(idx < glyphs.len());
                assert!(idx >= prev);
                prev = idx;
            }
            assert_eq!(prev, glyphs.len() - 1);
        }
    }
}

#[test]
fn tiny_cell_aspect_converts_without_overflow() {
    let bitmap = noise_bitmap(1000, 10, 5);
    let opts = RenderOptions::new(1, 1e-30, true, 0.5, false, true, "ASCII").unwrap();
    let converter = Converter::new(opts);
    let geometry = converter.geometry(1000, 10);
    assert_eq!((geometry.cols, geometry.rows), (1000, 10));

    let text = converter.convert_to_string(&bitmap.as_view());
    assert_eq!(text.matches('\n').count(), 10);
    assert!(text.lines().all(|line| line.chars().count() == 1000));
}
