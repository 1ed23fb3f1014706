//! Particle-art simulation and the frame driver that clocks it.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::canvas::{Canvas, DisplayList};
use crate::config::ArtConfig;
use crate::particle::{Fate, Particle};
use crate::scene;

/// Longest wall-clock gap a single frame may account for.
pub const MAX_FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / 15);
/// Elapsed seconds are scaled so one frame at this rate is one time unit.
pub const REFERENCE_FPS: f32 = 60.0;

const HUE_STEP_SCALE: f64 = 0.016;
const PARTICLE_DT_SCALE: f32 = 0.8;

/// Clamps a raw frame gap and converts it to normalized time units.
pub fn normalize_elapsed(raw: Duration) -> f32 {
    raw.min(MAX_FRAME_TIME).as_secs_f32() * REFERENCE_FPS
}

/// Global time signal shared by every renderer.
///
/// `hue` grows without bound for as long as the window stays open, so it is
/// kept in f64; renderers reduce it before narrowing to f32.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimState {
    pub hue: f64,
    pub frame: u64,
}

impl SimState {
    pub fn advance(self, dt: f32, color_cycle_speed: f32) -> SimState {
        SimState {
            hue: self.hue + f64::from(color_cycle_speed) * f64::from(dt) * HUE_STEP_SCALE,
            frame: self.frame + 1,
        }
    }
}

pub struct Artwork {
    config: ArtConfig,
    state: SimState,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl Artwork {
    pub fn new(config: ArtConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Reproducible artwork; two instances with the same seed draw the same frames.
    pub fn with_seed(config: ArtConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: ArtConfig, mut rng: StdRng) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| Particle::spawn(&mut rng, &config))
            .collect();
        Artwork {
            config,
            state: SimState::default(),
            particles,
            rng,
        }
    }

    pub fn config(&self) -> &ArtConfig {
        &self.config
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advances one frame by `dt` normalized units and redraws it from scratch.
    /// Returns how many particles respawned.
    pub fn step(&mut self, dt: f32, canvas: &mut impl Canvas) -> usize {
        self.state = self.state.advance(dt, self.config.color_cycle_speed);
        let SimState { hue, frame } = self.state;

        let attractors = scene::attractors(frame);
        let mut respawned = 0;
        for particle in &mut self.particles {
            let fate = particle.update(
                dt * PARTICLE_DT_SCALE,
                hue,
                &attractors,
                &self.config,
                &mut self.rng,
            );
            if fate == Fate::Respawned {
                respawned += 1;
            }
        }

        canvas.clear();
        scene::paint_background(canvas, &self.config, hue * 0.5);
        scene::draw_frame_mandala(canvas, &self.config, hue);
        scene::draw_ribbons(canvas, &self.config, frame, hue);
        for particle in &self.particles {
            particle.draw(canvas, hue, self.config.color_cycle_speed);
        }
        scene::draw_sparkles(canvas, &self.config, frame, hue, &mut self.rng);

        respawned
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Stopped,
}

/// Runs the artwork off the wall clock and keeps the latest frame around
/// for the window to paint.
pub struct FrameDriver {
    artwork: Artwork,
    frame: DisplayList,
    last_tick: Instant,
    state: DriverState,
}

impl FrameDriver {
    pub fn new(artwork: Artwork, now: Instant) -> Self {
        FrameDriver {
            artwork,
            frame: DisplayList::new(),
            last_tick: now,
            state: DriverState::Running,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn artwork(&self) -> &Artwork {
        &self.artwork
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.artwork.config.fps.max(1)))
    }

    /// Time left until `poll` will step again; zero once a tick is due.
    pub fn until_next(&self, now: Instant) -> Duration {
        self.frame_delay()
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    /// Steps the artwork by the time since the previous tick.
    pub fn tick(&mut self, now: Instant) -> Option<&DisplayList> {
        if self.state == DriverState::Stopped {
            return None;
        }
        let dt = normalize_elapsed(now.saturating_duration_since(self.last_tick));
        self.last_tick = now;

        let respawned = self.artwork.step(dt, &mut self.frame);
        let frame = self.artwork.state.frame;
        if frame % 600 == 0 {
            tracing::debug!(target: "art", frame, respawned, dt, "frame stepped");
        }
        Some(&self.frame)
    }

    /// Ticks only once the frame delay has passed; otherwise hands back the
    /// last frame unchanged. The very first poll always ticks.
    pub fn poll(&mut self, now: Instant) -> Option<&DisplayList> {
        if self.state == DriverState::Stopped {
            return None;
        }
        let first = self.artwork.state.frame == 0;
        if first || now.saturating_duration_since(self.last_tick) >= self.frame_delay() {
            return self.tick(now);
        }
        Some(&self.frame)
    }

    pub fn stop(&mut self) {
        if self.state == DriverState::Running {
            tracing::info!(target: "art", frames = self.artwork.state.frame, "animation stopped");
        }
        self.state = DriverState::Stopped;
    }
}
