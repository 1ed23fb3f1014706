//! Backend-agnostic drawing primitives.
//!
//! Every demo writes into a [`Canvas`]. At runtime that canvas is a
//! [`DisplayList`] which the egui backend in [`crate::render`] replays each
//! repaint; in tests the same list is inspected directly.

use cgmath::Point2;

use crate::color::Rgb;

pub type Point = Point2<f32>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outline {
    pub width: f32,
    pub color: Rgb,
}

impl Outline {
    pub fn new(width: f32, color: Rgb) -> Self {
        Outline { width, color }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Filled polygon, closed implicitly. May be non-convex.
    Polygon {
        points: Vec<Point>,
        fill: Rgb,
        outline: Option<Outline>,
    },
    /// Filled round dot; `diameter` in canvas units.
    Dot {
        center: Point,
        diameter: f32,
        color: Rgb,
    },
    Polyline {
        points: Vec<Point>,
        width: f32,
        color: Rgb,
    },
    /// Ellipse inscribed in the box spanned by two opposite corners.
    Oval {
        corner_a: Point,
        corner_b: Point,
        fill: Rgb,
        outline: Option<Outline>,
    },
    /// Pie slice of the ellipse inscribed in the box spanned by two corners.
    /// Angles are in degrees, counter-clockwise as seen on screen, 0 at three o'clock.
    Arc {
        corner_a: Point,
        corner_b: Point,
        start: f32,
        extent: f32,
        fill: Rgb,
        outline: Option<Outline>,
    },
    /// Text centered on `anchor`; `size` is in typographic points.
    Text {
        anchor: Point,
        text: String,
        size: f32,
        bold: bool,
        color: Rgb,
    },
}

pub trait Canvas {
    fn push(&mut self, primitive: Primitive);

    fn clear(&mut self);

    fn fill_polygon(&mut self, points: Vec<Point>, fill: Rgb, outline: Option<Outline>) {
        self.push(Primitive::Polygon {
            points,
            fill,
            outline,
        });
    }

    fn dot(&mut self, center: Point, diameter: f32, color: Rgb) {
        self.push(Primitive::Dot {
            center,
            diameter,
            color,
        });
    }

    fn polyline(&mut self, points: Vec<Point>, width: f32, color: Rgb) {
        self.push(Primitive::Polyline {
            points,
            width,
            color,
        });
    }

    fn line(&mut self, from: Point, to: Point, width: f32, color: Rgb) {
        self.polyline(vec![from, to], width, color);
    }

    fn text(&mut self, anchor: Point, text: &str, size: f32, bold: bool, color: Rgb) {
        self.push(Primitive::Text {
            anchor,
            text: text.to_owned(),
            size,
            bold,
            color,
        });
    }
}

/// Recording canvas. Primitives are kept in issue order, later ones on top.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    primitives: Vec<Primitive>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl Canvas for DisplayList {
    fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    fn clear(&mut self) {
        self.primitives.clear();
    }
}

/// Forwards to another canvas and counts what went through it.
pub struct Counted<'a, C: Canvas + ?Sized> {
    inner: &'a mut C,
    pushed: usize,
}

impl<'a, C: Canvas + ?Sized> Counted<'a, C> {
    pub fn new(inner: &'a mut C) -> Self {
        Counted { inner, pushed: 0 }
    }

    /// Primitives pushed since creation or the last clear.
    pub fn pushed(&self) -> usize {
        self.pushed
    }
}

impl<C: Canvas + ?Sized> Canvas for Counted<'_, C> {
    fn push(&mut self, primitive: Primitive) {
        self.inner.push(primitive);
        self.pushed += 1;
    }

    fn clear(&mut self) {
        self.inner.clear();
        self.pushed = 0;
    }
}

/// True when every turn along the closed outline goes the same way.
/// Collinear points are ignored; triangles and degenerate outlines count as convex.
pub fn is_convex(points: &[Point]) -> bool {
    let n = points.len();
    if n < 4 {
        return true;
    }
    let mut sign = 0.0f32;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];
        let cross = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);
        if cross.abs() <= f32::EPSILON {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }
    true
}

/// Mean of the outline vertices. Every polygon drawn here is star-shaped
/// around this point, so a triangle fan from it fills correctly.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point2::new(0.0, 0.0);
    }
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    let n = points.len() as f32;
    Point2::new(sx / n, sy / n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f32, y: f32) -> Point {
        Point2::new(x, y)
    }

    #[test]
    fn counted_forwards_and_counts_only_its_own_pushes() {
        let mut list = DisplayList::new();
        list.dot(pt(0.0, 0.0), 1.0, Rgb::BLACK);

        let mut counted = Counted::new(&mut list);
        counted.line(pt(0.0, 0.0), pt(1.0, 1.0), 1.0, Rgb::RED);
        counted.text(pt(2.0, 2.0), "hi", 10.0, false, Rgb::BLUE);
        assert_eq!(counted.pushed(), 2);
        assert_eq!(list.len(), 3);

        let mut counted = Counted::new(&mut list);
        counted.dot(pt(3.0, 3.0), 2.0, Rgb::GREEN);
        counted.clear();
        assert_eq!(counted.pushed(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn display_list_records_in_order_and_clears() {
        let mut list = DisplayList::new();
        list.dot(pt(1.0, 2.0), 4.0, Rgb::RED);
        list.line(pt(0.0, 0.0), pt(5.0, 5.0), 2.0, Rgb::BLUE);
        assert_eq!(list.len(), 2);
        assert!(matches!(list.primitives()[0], Primitive::Dot { .. }));
        assert!(matches!(
            &list.primitives()[1],
            Primitive::Polyline { points, .. } if points.len() == 2
        ));

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn square_is_convex() {
        let square = [pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0), pt(0.0, 1.0)];
        assert!(is_convex(&square));
    }

    #[test]
    fn dart_is_not_convex() {
        let dart = [pt(0.0, 0.0), pt(2.0, 1.0), pt(4.0, 0.0), pt(2.0, 3.0)];
        assert!(!is_convex(&dart));
    }

    #[test]
    fn centroid_of_square() {
        let square = [pt(0.0, 0.0), pt(2.0, 0.0), pt(2.0, 2.0), pt(0.0, 2.0)];
        assert_eq!(centroid(&square), pt(1.0, 1.0));
    }
}
