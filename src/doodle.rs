//! The fixed turtle doodle: a ring of petal-and-loop figures whose pen
//! colour walks the hue circle.

use crate::canvas::{Canvas, Counted};
use crate::color::{Rgb, hsv_to_unit_rgb};
use crate::turtle::{Turtle, circle_steps};

pub const REPEATS: usize = 450;
pub const PEN_WIDTH: f32 = 2.0;
pub const HUE_START: f32 = 0.01;
pub const HUE_STEP: f32 = 0.005;
/// Segments revealed per repaint.
pub const REVEAL_BATCH: usize = 100;

const STROKE: f32 = 100.0;
const LOOP_RADIUS: f32 = 50.0;

/// Line segments emitted per repeat: eight strokes and two loops.
pub fn segments_per_repeat() -> usize {
    8 + 2 * circle_steps(LOOP_RADIUS)
}

/// Draws the whole doodle and returns the number of segments emitted.
pub fn draw_doodle(canvas: &mut impl Canvas) -> usize {
    let mut canvas = Counted::new(canvas);
    let mut turtle = Turtle::new();
    turtle.set_width(PEN_WIDTH);
    let mut hue = HUE_START;

    for _ in 0..REPEATS {
        turtle.forward(STROKE, &mut canvas);
        turtle.left(60.0);
        turtle.forward(STROKE, &mut canvas);
        turtle.right(120.0);
        turtle.circle(LOOP_RADIUS, &mut canvas);
        turtle.left(240.0);
        turtle.forward(STROKE, &mut canvas);
        turtle.left(60.0);
        turtle.forward(STROKE, &mut canvas);

        // the first strokes of the first repeat still use the default pen
        turtle.set_color(Rgb::from_unit(hsv_to_unit_rgb(hue, 1.0, 1.0)));

        turtle.forward(STROKE, &mut canvas);
        turtle.right(60.0);
        turtle.forward(STROKE, &mut canvas);
        turtle.left(120.0);
        turtle.circle(-LOOP_RADIUS, &mut canvas);
        turtle.right(240.0);
        turtle.forward(STROKE, &mut canvas);
        turtle.right(60.0);
        turtle.forward(STROKE, &mut canvas);
        turtle.left(2.0);

        hue += HUE_STEP;
    }

    let segments = canvas.pushed();
    tracing::debug!(target: "doodle", segments, "doodle drawn");
    segments
}

/// Shows a finished drawing a batch of primitives at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    total: usize,
    shown: usize,
    batch: usize,
}

impl Reveal {
    /// A batch of zero reveals everything on the first advance.
    pub fn new(total: usize, batch: usize) -> Self {
        Reveal {
            total,
            shown: 0,
            batch,
        }
    }

    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn is_complete(&self) -> bool {
        self.shown >= self.total
    }

    pub fn advance(&mut self) -> usize {
        self.shown = if self.batch == 0 {
            self.total
        } else {
            (self.shown + self.batch).min(self.total)
        };
        self.shown
    }
}
