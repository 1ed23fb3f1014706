//! Static gallery of labelled shapes.
//!
//! Canvas coordinates: origin at the top-left corner, y grows downwards.

use std::f32::consts::PI;

use crate::canvas::{Canvas, Outline, Point, Primitive};
use crate::color::Rgb;

// point sizes, as Tk takes them; `render` scales to pixels
const TITLE_SIZE: f32 = 18.0;
const LABEL_SIZE: f32 = 10.0;

fn pt(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// Axis-aligned rectangle between two corners.
fn rectangle(a: Point, b: Point) -> Vec<Point> {
    vec![a, pt(b.x, a.y), b, pt(a.x, b.y)]
}

fn arc(
    canvas: &mut impl Canvas,
    a: Point,
    b: Point,
    start: f32,
    extent: f32,
    fill: Rgb,
    outline: Option<Outline>,
) {
    canvas.push(Primitive::Arc {
        corner_a: a,
        corner_b: b,
        start,
        extent,
        fill,
        outline,
    });
}

/// Alternating outer and inner vertices, first one pointing straight up.
pub fn star_points(center: Point, outer_radius: f32, inner_radius: f32) -> Vec<Point> {
    (0..10)
        .map(|i| {
            let angle = PI * i as f32 / 5.0 - PI / 2.0;
            let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
            pt(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

pub fn draw_gallery(canvas: &mut impl Canvas) {
    canvas.text(
        pt(250.0, 50.0),
        "Different Shapes Demo",
        TITLE_SIZE,
        true,
        Rgb::BLACK,
    );

    canvas.fill_polygon(
        rectangle(pt(50.0, 100.0), pt(150.0, 150.0)),
        Rgb::RED,
        Some(Outline::new(3.0, Rgb::DARK_RED)),
    );

    canvas.push(Primitive::Oval {
        corner_a: pt(200.0, 100.0),
        corner_b: pt(300.0, 200.0),
        fill: Rgb::GREEN,
        outline: Some(Outline::new(3.0, Rgb::DARK_GREEN)),
    });

    canvas.fill_polygon(
        vec![pt(350.0, 150.0), pt(400.0, 100.0), pt(450.0, 150.0)],
        Rgb::BLUE,
        Some(Outline::new(3.0, Rgb::DARK_BLUE)),
    );

    canvas.line(pt(50.0, 200.0), pt(200.0, 250.0), 5.0, Rgb::PURPLE);

    arc(
        canvas,
        pt(250.0, 220.0),
        pt(350.0, 280.0),
        0.0,
        180.0,
        Rgb::ORANGE,
        Some(Outline::new(3.0, Rgb::DARK_ORANGE)),
    );

    canvas.fill_polygon(
        star_points(pt(100.0, 350.0), 30.0, 15.0),
        Rgb::YELLOW,
        Some(Outline::new(2.0, Rgb::GOLD)),
    );

    draw_rounded_rect(canvas);

    let labels = [
        (pt(100.0, 170.0), "Rectangle"),
        (pt(250.0, 210.0), "Circle"),
        (pt(400.0, 170.0), "Triangle"),
        (pt(125.0, 270.0), "Line"),
        (pt(300.0, 290.0), "Arc"),
        (pt(100.0, 400.0), "Star"),
        (pt(350.0, 400.0), "Rounded Rect"),
    ];
    for (anchor, label) in labels {
        canvas.text(anchor, label, LABEL_SIZE, false, Rgb::BLACK);
    }
}

/// Four quarter-circle corners plus two overlapping bars; the bars have no
/// outline so the corner outlines show only on the rounded edges.
fn draw_rounded_rect(canvas: &mut impl Canvas) {
    let outline = Some(Outline::new(2.0, Rgb::HOT_PINK));
    let corners = [
        (pt(300.0, 300.0), pt(320.0, 320.0), 90.0),
        (pt(380.0, 300.0), pt(400.0, 320.0), 0.0),
        (pt(380.0, 360.0), pt(400.0, 380.0), 270.0),
        (pt(300.0, 360.0), pt(320.0, 380.0), 180.0),
    ];
    for (a, b, start) in corners {
        arc(canvas, a, b, start, 90.0, Rgb::PINK, outline);
    }
    for (a, b) in [
        (pt(310.0, 300.0), pt(390.0, 380.0)),
        (pt(300.0, 310.0), pt(400.0, 370.0)),
    ] {
        canvas.fill_polygon(rectangle(a, b), Rgb::PINK, None);
    }
}
