//! A small turtle-graphics pen that draws onto any [`Canvas`].
//!
//! Classic turtle conventions: starts at the origin facing east, angles in
//! degrees counter-clockwise, y up, pen down, black, one unit wide.

use crate::canvas::{Canvas, Point};
use crate::color::Rgb;

#[derive(Clone, Debug, PartialEq)]
pub struct Turtle {
    position: Point,
    heading: f32,
    pen_down: bool,
    color: Rgb,
    width: f32,
}

impl Default for Turtle {
    fn default() -> Self {
        Turtle {
            position: Point::new(0.0, 0.0),
            heading: 0.0,
            pen_down: true,
            color: Rgb::BLACK,
            width: 1.0,
        }
    }
}

/// Number of chords used to approximate a full circle of the given radius.
pub fn circle_steps(radius: f32) -> usize {
    1 + (11.0 + radius.abs() / 6.0).min(59.0) as usize
}

impl Turtle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Heading in degrees, normalized to `[0, 360)`.
    pub fn heading(&self) -> f32 {
        self.heading.rem_euclid(360.0)
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn pen_up(&mut self) {
        self.pen_down = false;
    }

    pub fn pen_down(&mut self) {
        self.pen_down = true;
    }

    pub fn left(&mut self, degrees: f32) {
        self.heading += degrees;
    }

    pub fn right(&mut self, degrees: f32) {
        self.heading -= degrees;
    }

    pub fn goto(&mut self, target: Point, canvas: &mut impl Canvas) {
        if self.pen_down {
            canvas.line(self.position, target, self.width, self.color);
        }
        self.position = target;
    }

    pub fn forward(&mut self, distance: f32, canvas: &mut impl Canvas) {
        let radians = self.heading.to_radians();
        let target = Point::new(
            self.position.x + radians.cos() * distance,
            self.position.y + radians.sin() * distance,
        );
        self.goto(target, canvas);
    }

    /// Full circle through the current position. A positive radius puts the
    /// centre on the turtle's left, a negative one on its right. The turtle
    /// ends where it started with its original heading.
    pub fn circle(&mut self, radius: f32, canvas: &mut impl Canvas) {
        let steps = circle_steps(radius);
        let mut turn = 360.0 / steps as f32;
        let mut half_turn = turn * 0.5;
        let mut chord = 2.0 * radius * half_turn.to_radians().sin();
        if radius < 0.0 {
            chord = -chord;
            turn = -turn;
            half_turn = -half_turn;
        }

        self.left(half_turn);
        for _ in 0..steps {
            self.forward(chord, canvas);
            self.left(turn);
        }
        self.left(-half_turn);
    }
}
