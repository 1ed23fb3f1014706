//! Compile-time tunables for the three programs.

use crate::color::Rgb;

pub const WIDTH: u32 = 1000;
pub const HEIGHT: u32 = 700;
pub const NUM_PARTICLES: usize = 220;
pub const MAX_SPEED: f32 = 2.2;
pub const PARTICLE_SIZE: (f32, f32) = (2.0, 6.0);
pub const FPS: u32 = 60;
pub const COLOR_CYCLE_SPEED: f32 = 0.12;
pub const WAVE_ELEMENTS: usize = 8;
pub const WRAP_MARGIN: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowConfig {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
}

pub const ART_WINDOW: WindowConfig = WindowConfig {
    title: "Turtle Particle Art",
    width: WIDTH,
    height: HEIGHT,
    background: Rgb::new(8, 6, 20),
};

pub const DOODLE_WINDOW: WindowConfig = WindowConfig {
    title: "Turtle Doodle",
    width: 1000,
    height: 900,
    background: Rgb::BLACK,
};

pub const GALLERY_WINDOW: WindowConfig = WindowConfig {
    title: "my canvas",
    width: 500,
    height: 500,
    background: Rgb::LIGHT_BLUE,
};

/// Parameters of the particle-art simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArtConfig {
    pub width: f32,
    pub height: f32,
    pub particle_count: usize,
    pub max_speed: f32,
    pub particle_size: (f32, f32),
    pub fps: u32,
    pub color_cycle_speed: f32,
    pub wave_elements: usize,
    pub wrap_margin: f32,
}

impl Default for ArtConfig {
    fn default() -> Self {
        ArtConfig {
            width: WIDTH as f32,
            height: HEIGHT as f32,
            particle_count: NUM_PARTICLES,
            max_speed: MAX_SPEED,
            particle_size: PARTICLE_SIZE,
            fps: FPS,
            color_cycle_speed: COLOR_CYCLE_SPEED,
            wave_elements: WAVE_ELEMENTS,
            wrap_margin: WRAP_MARGIN,
        }
    }
}

impl ArtConfig {
    pub fn half_width(&self) -> f32 {
        self.width * 0.5
    }

    pub fn half_height(&self) -> f32 {
        self.height * 0.5
    }
}
