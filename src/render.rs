//! egui backend: replays recorded primitives onto a painter.

use eframe::egui::{self, Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke};

use crate::canvas::{Outline, Point, Primitive, centroid, is_convex};
use crate::color::Rgb;

const FULL_CIRCLE_SEGMENTS: f32 = 64.0;
/// Screen pixels per typographic point at 96 DPI.
pub const PIXELS_PER_POINT: f32 = 96.0 / 72.0;

/// egui font size for a text size given in points.
pub fn font_pixels(points: f32) -> f32 {
    points * PIXELS_PER_POINT
}

/// Where canvas coordinates are anchored inside the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Viewport {
    /// Origin in the middle, y up (turtle coordinates).
    Centered,
    /// Origin at the top-left corner, y down (canvas coordinates).
    TopLeft,
}

impl Viewport {
    pub fn to_screen(self, rect: Rect, p: Point) -> Pos2 {
        match self {
            Viewport::Centered => {
                let c = rect.center();
                egui::pos2(c.x + p.x, c.y - p.y)
            }
            Viewport::TopLeft => egui::pos2(rect.min.x + p.x, rect.min.y + p.y),
        }
    }
}

/// Fills the whole panel with `background` and paints the primitives on top.
pub fn show_canvas(
    ctx: &egui::Context,
    background: Rgb,
    viewport: Viewport,
    primitives: &[Primitive],
) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(background.into()))
        .show(ctx, |ui| {
            let rect = ui.max_rect();
            paint(ui.painter(), rect, viewport, primitives);
        });
}

pub fn paint(painter: &Painter, rect: Rect, viewport: Viewport, primitives: &[Primitive]) {
    let screen = |p: Point| viewport.to_screen(rect, p);

    for primitive in primitives {
        match primitive {
            Primitive::Polygon {
                points,
                fill,
                outline,
            } => {
                let rim = points.iter().copied().map(screen).collect();
                if is_convex(points) {
                    painter.add(Shape::convex_polygon(rim, *fill, stroke(*outline)));
                } else {
                    fan_fill(painter, screen(centroid(points)), rim, *fill, *outline);
                }
            }
            Primitive::Dot {
                center,
                diameter,
                color,
            } => {
                painter.circle_filled(screen(*center), diameter * 0.5, *color);
            }
            Primitive::Polyline {
                points,
                width,
                color,
            } => {
                let line = points.iter().copied().map(screen).collect();
                painter.add(Shape::line(line, Stroke::new(*width, *color)));
            }
            Primitive::Oval {
                corner_a,
                corner_b,
                fill,
                outline,
            } => {
                let (center, radii) = ellipse_frame(screen(*corner_a), screen(*corner_b));
                if (radii.x - radii.y).abs() < f32::EPSILON {
                    painter.circle(center, radii.x, *fill, stroke(*outline));
                } else {
                    let mut rim = arc_points(center, radii, 0.0, 360.0);
                    rim.pop();
                    painter.add(Shape::convex_polygon(rim, *fill, stroke(*outline)));
                }
            }
            Primitive::Arc {
                corner_a,
                corner_b,
                start,
                extent,
                fill,
                outline,
            } => {
                let (center, radii) = ellipse_frame(screen(*corner_a), screen(*corner_b));
                let mut pie = vec![center];
                pie.extend(arc_points(center, radii, *start, *extent));
                if extent.abs() <= 180.0 {
                    painter.add(Shape::convex_polygon(pie, *fill, stroke(*outline)));
                } else {
                    fan_fill(painter, center, pie, *fill, *outline);
                }
            }
            Primitive::Text {
                anchor,
                text,
                size,
                bold,
                color,
            } => {
                let pos = screen(*anchor);
                let font = FontId::proportional(font_pixels(*size));
                if *bold {
                    // egui's default fonts have no bold face; overstrike instead
                    painter.text(
                        pos + egui::vec2(0.6, 0.0),
                        Align2::CENTER_CENTER,
                        text,
                        font.clone(),
                        (*color).into(),
                    );
                }
                painter.text(pos, Align2::CENTER_CENTER, text, font, (*color).into());
            }
        }
    }
}

fn stroke(outline: Option<Outline>) -> Stroke {
    match outline {
        Some(Outline { width, color }) => Stroke::new(width, color),
        None => Stroke::new(0.0, Color32::TRANSPARENT),
    }
}

/// Centre and radii of the ellipse inscribed in the screen box between two corners.
pub fn ellipse_frame(a: Pos2, b: Pos2) -> (Pos2, egui::Vec2) {
    let center = egui::pos2((a.x + b.x) * 0.5, (a.y + b.y) * 0.5);
    let radii = egui::vec2((a.x - b.x).abs() * 0.5, (a.y - b.y).abs() * 0.5);
    (center, radii)
}

/// Points along an elliptical arc in screen space, both ends included.
/// Angles in degrees, counter-clockwise as seen on screen.
pub fn arc_points(center: Pos2, radii: egui::Vec2, start: f32, extent: f32) -> Vec<Pos2> {
    let segments = (extent.abs() / 360.0 * FULL_CIRCLE_SEGMENTS).ceil().max(2.0) as usize;
    (0..=segments)
        .map(|k| {
            let angle = (start + extent * k as f32 / segments as f32).to_radians();
            egui::pos2(
                center.x + radii.x * angle.cos(),
                center.y - radii.y * angle.sin(),
            )
        })
        .collect()
}

/// Fills a star-shaped outline as a triangle fan around `hub`.
fn fan_fill(
    painter: &Painter,
    hub: Pos2,
    rim: Vec<Pos2>,
    fill: Rgb,
    outline: Option<Outline>,
) {
    let color: Color32 = fill.into();
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(hub, color);
    for p in &rim {
        mesh.colored_vertex(*p, color);
    }
    let n = rim.len() as u32;
    for i in 0..n {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % n);
    }
    painter.add(Shape::mesh(mesh));
    if outline.is_some() {
        painter.add(Shape::closed_line(rim, stroke(outline)));
    }
}
