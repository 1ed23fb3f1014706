//! Stateless renderers for everything in the art frame except the particles.
//!
//! Coordinates are turtle-style: origin in the middle of the window, y up.

use rand::Rng;

use crate::canvas::{Canvas, Point};
use crate::color::hsv_to_rgb;
use crate::config::ArtConfig;
use crate::particle::Attractor;

const STRIPES: usize = 60;
const ATTRACTORS: usize = 3;
const MANDALA_LAYERS: usize = 6;
const RIBBON_POINTS: usize = 22;
const RIBBON_WIDTH: f32 = 2.0;
const SPARKLE_EVERY: u64 = 3;
const SPARKLES: usize = 6;

/// Vertical gradient made of thin horizontal stripes, bottom to top.
pub fn paint_background(canvas: &mut impl Canvas, config: &ArtConfig, hue_offset: f64) {
    let (w, h) = (config.width, config.height);
    let left = -config.half_width();
    let start_y = -config.half_height();
    let step = h / STRIPES as f32;

    for i in 0..STRIPES {
        let t = i as f32 / (STRIPES - 1).max(1) as f32;
        let hue = (hue_offset * 0.12 + 0.55 * f64::from(t)).rem_euclid(1.0) as f32;
        let sat = 0.55 + 0.25 * (hue_offset * 0.5 + f64::from(t) * 4.0).sin() as f32;
        let val = 0.05 + 0.45 * (1.0 - t * 0.9);

        let y = start_y + i as f32 * step;
        // stripes overlap by one unit so no seams show
        let top = y + step + 1.0;
        canvas.fill_polygon(
            vec![
                Point::new(left, y),
                Point::new(left + w, y),
                Point::new(left + w, top),
                Point::new(left, top),
            ],
            hsv_to_rgb(hue, sat, val),
            None,
        );
    }
}

/// Concentric rings of dots, each ring turning at its own speed.
pub fn draw_mandala(
    canvas: &mut impl Canvas,
    center: Point,
    radius: f32,
    layers: usize,
    hue_offset: f64,
) {
    for layer in 0..layers {
        let l = layer as f32;
        let ring = radius * (0.18 + 0.9 * (l / layers as f32));
        let parts = 6 + layer * 2;
        let diameter = 8.0 + (6.0 * (hue_offset * 0.2 + f64::from(l)).sin() as f32).trunc();
        // the ring's turn, reduced while still in f64
        let turn = (hue_offset * (6.0 + f64::from(l))).rem_euclid(360.0) as f32;

        for i in 0..parts {
            let fraction = i as f32 / parts as f32;
            let angle = (fraction * 360.0 + turn).to_radians();
            let position = Point::new(
                center.x + angle.cos() * ring,
                center.y + angle.sin() * ring,
            );
            let hue = (hue_offset * 0.07 + f64::from(0.07 * l + fraction)).rem_euclid(1.0);
            let hue = hue as f32;
            canvas.dot(position, diameter, hsv_to_rgb(hue, 0.85, 1.0 - 0.12 * l));
        }
    }
}

/// The mandala as it appears in the art frame.
pub fn draw_frame_mandala(canvas: &mut impl Canvas, config: &ArtConfig, hue: f64) {
    draw_mandala(
        canvas,
        Point::new(0.0, 0.0),
        config.width.min(config.height) * 0.26,
        MANDALA_LAYERS,
        hue * 0.8,
    );
}

/// Orbiting attractors; their paths depend only on the frame counter.
pub fn attractors(frame: u64) -> [Attractor; ATTRACTORS] {
    let frame = frame as f64;
    std::array::from_fn(|i| {
        let k = i as f64;
        let ang = frame * 0.7 * (0.9 + 0.2 * k) + k * 2.3;
        let r = 120.0 + 100.0 * k;
        Attractor {
            position: Point::new(
                ((ang * 0.02).cos() * r * (ang * 0.01 + k).cos()) as f32,
                ((ang * 0.02).sin() * r * (ang * 0.011 + k * 0.4).sin()) as f32,
            ),
            strength: (9000.0 / (50.0 * (k + 1.0))) as f32,
        }
    })
}

/// Sampled points of one wave ribbon spanning the full width.
pub fn ribbon_points(config: &ArtConfig, frame: u64, ribbon: usize) -> Vec<Point> {
    let w = ribbon as f64;
    let tsi = frame as f64 * 0.03 + w * 0.6;
    let last = (RIBBON_POINTS - 1) as f32;
    (0..RIBBON_POINTS)
        .map(|i| {
            let t = i as f32 / last;
            let x = -config.half_width() + t * config.width;
            let tw = f64::from(t);
            let mut y = (tw * 8.0 + tsi).sin() * (40.0 + 20.0 * (tsi * 0.6 + w).sin());
            y += (tw * 5.0 + tsi * 1.3 + w).sin() * 30.0;
            Point::new(x, (y - 60.0 + 30.0 * (tsi * 0.2 + w).cos()) as f32)
        })
        .collect()
}

pub fn draw_ribbons(canvas: &mut impl Canvas, config: &ArtConfig, frame: u64, hue: f64) {
    for ribbon in 0..config.wave_elements {
        let ribbon_hue = (hue * 0.08 + ribbon as f64 * 0.07).rem_euclid(1.0) as f32;
        canvas.polyline(
            ribbon_points(config, frame, ribbon),
            RIBBON_WIDTH,
            hsv_to_rgb(ribbon_hue, 0.85, 0.9),
        );
    }
}

/// Random glints over the middle third, only on every third frame.
pub fn draw_sparkles<R: Rng + ?Sized>(
    canvas: &mut impl Canvas,
    config: &ArtConfig,
    frame: u64,
    hue: f64,
    rng: &mut R,
) {
    if frame % SPARKLE_EVERY != 0 {
        return;
    }
    let spread_x = config.width * 0.33;
    let spread_y = config.height * 0.33;
    for _ in 0..SPARKLES {
        let position = Point::new(
            rng.gen_range(-spread_x..=spread_x),
            rng.gen_range(-spread_y..=spread_y),
        );
        let jitter: f64 = rng.gen_range(0.0..0.2);
        let sparkle_hue = (hue * 0.15 + jitter).rem_euclid(1.0) as f32;
        let diameter = rng.gen_range(2..=4) as f32;
        canvas.dot(position, diameter, hsv_to_rgb(sparkle_hue, 0.9, 1.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DisplayList, Primitive};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn background_covers_the_window() {
        let config = ArtConfig::default();
        let mut list = DisplayList::new();
        paint_background(&mut list, &config, 0.3);

        assert_eq!(list.len(), STRIPES);
        let ys: Vec<(f32, f32)> = list
            .primitives()
            .iter()
            .map(|p| match p {
                Primitive::Polygon { points, .. } => (points[0].y, points[2].y),
                other => panic!("expected polygon, got {other:?}"),
            })
            .collect();
        assert_eq!(ys[0].0, -config.half_height());
        assert!(ys[STRIPES - 1].1 >= config.half_height());
        for pair in ys.windows(2) {
            assert!(pair[0].1 >= pair[1].0);
        }
    }

    #[test]
    fn mandala_ring_sizes() {
        let mut list = DisplayList::new();
        draw_mandala(&mut list, Point::new(0.0, 0.0), 100.0, 6, 0.0);
        // 6 + 8 + 10 + 12 + 14 + 16
        assert_eq!(list.len(), 66);

        match &list.primitives()[0] {
            Primitive::Dot {
                center, diameter, ..
            } => {
                assert!((center.x - 18.0).abs() < 1e-4);
                assert!(center.y.abs() < 1e-4);
                assert_eq!(*diameter, 8.0);
            }
            other => panic!("expected dot, got {other:?}"),
        }
    }

    #[test]
    fn attractors_at_frame_zero() {
        let [a, b, c] = attractors(0);
        assert_eq!(a.position, Point::new(120.0, 0.0));
        assert_eq!(a.strength, 180.0);
        assert_eq!(b.strength, 90.0);
        assert_eq!(c.strength, 60.0);
    }

    #[test]
    fn attractors_are_deterministic() {
        assert_eq!(attractors(1234), attractors(1234));
        assert_ne!(attractors(1234), attractors(1235));
    }

    #[test]
    fn attractors_keep_moving_past_single_precision_frames() {
        // 2^24: the first frame count f32 cannot tell from its successor
        let frame = 16_777_216;
        assert_ne!(attractors(frame), attractors(frame + 1));
        assert_ne!(attractors(frame + 1), attractors(frame + 2));
    }

    #[test]
    fn ribbons_keep_moving_past_single_precision_frames() {
        let config = ArtConfig::default();
        let frame = 16_777_216;
        assert_ne!(
            ribbon_points(&config, frame, 0),
            ribbon_points(&config, frame + 1, 0)
        );
    }

    #[test]
    fn mandala_turns_at_large_hue_offsets() {
        let mut early = DisplayList::new();
        let mut late = DisplayList::new();
        draw_mandala(&mut early, Point::new(0.0, 0.0), 100.0, 1, 40_000.0);
        draw_mandala(&mut late, Point::new(0.0, 0.0), 100.0, 1, 40_000.01);
        assert_ne!(early, late);
    }

    #[test]
    fn ribbons_span_the_width() {
        let config = ArtConfig::default();
        let points = ribbon_points(&config, 10, 3);
        assert_eq!(points.len(), RIBBON_POINTS);
        assert_eq!(points[0].x, -config.half_width());
        assert!((points[RIBBON_POINTS - 1].x - config.half_width()).abs() < 1e-3);

        let mut list = DisplayList::new();
        draw_ribbons(&mut list, &config, 10, 0.0);
        assert_eq!(list.len(), config.wave_elements);
    }

    #[test]
    fn sparkles_only_on_every_third_frame() {
        let config = ArtConfig::default();
        let mut rng = StdRng::seed_from_u64(9);
        for frame in 1..=6u64 {
            let mut list = DisplayList::new();
            draw_sparkles(&mut list, &config, frame, 0.0, &mut rng);
            let expected = if frame % 3 == 0 { SPARKLES } else { 0 };
            assert_eq!(list.len(), expected, "frame {frame}");
        }
    }
}
