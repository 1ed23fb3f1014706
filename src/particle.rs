use std::f32::consts::TAU;

use cgmath::prelude::*;
use rand::Rng;

use crate::canvas::Canvas;
use crate::color::{Rgb, hsv_to_rgb};
use crate::config::ArtConfig;

const WOBBLE: f32 = 0.06;
const LIFESPAN: (f32, f32) = (4.0, 12.0);
const MIN_SPEED: f32 = 0.2;
const SPAWN_SPREAD: f32 = 0.45;
// keeps the attraction finite when a particle sits on an attractor
const SOFTENING: f32 = 1e-6;

/// Moving point that pulls particles towards itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attractor {
    pub position: cgmath::Point2<f32>,
    pub strength: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Life {
    Alive,
    Expired,
}

/// Outcome of a single [`Particle::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fate {
    Survived,
    Respawned,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: cgmath::Point2<f32>,
    pub velocity: cgmath::Vector2<f32>,
    pub size: f32,
    pub lifespan: f32,
    pub age: f32,
    pub hue: f32,
}

impl Particle {
    /// Fresh particle with a random base hue.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, config: &ArtConfig) -> Self {
        let hue = rng.gen_range(0.0..1.0);
        let mut particle = Particle {
            position: cgmath::point2(0.0, 0.0),
            velocity: cgmath::vec2(0.0, 0.0),
            size: config.particle_size.0,
            lifespan: LIFESPAN.0,
            age: 0.0,
            hue,
        };
        particle.respawn(rng, config, hue);
        particle
    }

    /// Overwrites every randomized attribute in place.
    pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R, config: &ArtConfig, hue: f32) {
        let spread_x = config.half_width() * 2.0 * SPAWN_SPREAD;
        let spread_y = config.half_height() * 2.0 * SPAWN_SPREAD;
        self.position = cgmath::point2(
            rng.gen_range(-spread_x..=spread_x),
            rng.gen_range(-spread_y..=spread_y),
        );

        let angle = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(MIN_SPEED..=config.max_speed);
        self.velocity = cgmath::vec2(angle.cos(), angle.sin()) * speed;

        let (min_size, max_size) = config.particle_size;
        self.size = rng.gen_range(min_size..=max_size);
        self.lifespan = rng.gen_range(LIFESPAN.0..=LIFESPAN.1);
        self.age = rng.gen_range(0.0..self.lifespan);
        self.hue = hue;
    }

    pub fn life(&self) -> Life {
        if self.age >= self.lifespan || !self.is_finite() {
            Life::Expired
        } else {
            Life::Alive
        }
    }

    fn is_finite(&self) -> bool {
        self.position.x.is_finite() && self.position.y.is_finite()
    }

    /// Remaining life in `[0, 1]`; 1 when just born, 0 when expired.
    pub fn life_ratio(&self) -> f32 {
        (1.0 - self.age / self.lifespan).clamp(0.0, 1.0)
    }

    pub fn update<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        global_hue: f64,
        attractors: &[Attractor],
        config: &ArtConfig,
        rng: &mut R,
    ) -> Fate {
        self.position += self.velocity * dt;

        let phase = f64::from(self.position.x + self.position.y) * 0.01 + global_hue * 2.3;
        let ang = phase.sin() as f32;
        self.velocity += cgmath::vec2(ang.cos(), ang.sin()) * WOBBLE * dt;

        for attractor in attractors {
            let delta = attractor.position - self.position;
            let force = attractor.strength / (delta.magnitude2() + SOFTENING);
            self.velocity += delta * force * dt;
        }

        self.age += dt;
        let fate = match self.life() {
            Life::Alive => Fate::Survived,
            Life::Expired => {
                self.respawn(rng, config, global_hue.rem_euclid(1.0) as f32);
                Fate::Respawned
            }
        };

        self.wrap(config);
        fate
    }

    /// Teleports the particle to the opposite edge once it leaves the
    /// visible area plus margin. Velocity is left alone.
    pub fn wrap(&mut self, config: &ArtConfig) {
        let margin = config.wrap_margin;
        let half_width = config.half_width();
        let half_height = config.half_height();

        macro_rules! wrap_axis {
            ($coord:expr, $half:expr) => {
                let bound = $half + margin;
                if $coord < -bound {
                    $coord = bound;
                }
                if $coord > bound {
                    $coord = -bound;
                }
            };
        }

        wrap_axis!(self.position.x, half_width);
        wrap_axis!(self.position.y, half_height);
    }

    pub fn color(&self, global_hue: f64, color_cycle_speed: f32) -> Rgb {
        let life_ratio = self.life_ratio();
        let cycled = f64::from(self.hue) + global_hue * f64::from(color_cycle_speed) * 0.3;
        let hue = cycled.rem_euclid(1.0) as f32;
        hsv_to_rgb(hue, 0.75 + 0.2 * life_ratio, 0.5 + 0.5 * life_ratio)
    }

    /// Dot size pulsates with remaining life, never below one unit.
    pub fn dot_diameter(&self) -> f32 {
        (self.size * (0.8 + 0.6 * self.life_ratio())).trunc().max(1.0)
    }

    pub fn draw(&self, canvas: &mut impl Canvas, global_hue: f64, color_cycle_speed: f32) {
        canvas.dot(
            self.position,
            self.dot_diameter(),
            self.color(global_hue, color_cycle_speed),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DisplayList, Primitive};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn still_particle(x: f32, y: f32) -> Particle {
        Particle {
            position: cgmath::point2(x, y),
            velocity: cgmath::vec2(0.0, 0.0),
            size: 4.0,
            lifespan: 10.0,
            age: 0.0,
            hue: 0.5,
        }
    }

    #[test]
    fn spawn_starts_alive_inside_the_window() {
        let config = ArtConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let p = Particle::spawn(&mut rng, &config);
            assert_eq!(p.life(), Life::Alive);
            assert!(p.age >= 0.0 && p.age < p.lifespan);
            assert!(p.position.x.abs() <= config.width * 0.45);
            assert!(p.position.y.abs() <= config.height * 0.45);
            let speed = p.velocity.magnitude();
            assert!(speed >= 0.2 - 1e-4 && speed <= config.max_speed + 1e-4);
        }
    }

    #[test]
    fn respawn_resets_every_attribute() {
        let config = ArtConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut p = Particle {
            position: cgmath::point2(9999.0, -9999.0),
            velocity: cgmath::vec2(100.0, 100.0),
            size: 100.0,
            lifespan: 1.0,
            age: 5.0,
            hue: 0.9,
        };
        p.respawn(&mut rng, &config, 0.25);

        assert!(p.age >= 0.0 && p.age < p.lifespan);
        assert!((4.0..=12.0).contains(&p.lifespan));
        assert!((2.0..=6.0).contains(&p.size));
        assert!(p.velocity.magnitude() <= config.max_speed + 1e-4);
        assert!(p.position.x.abs() < 9999.0);
        assert_eq!(p.hue, 0.25);
    }

    #[test]
    fn expiring_particle_respawns_within_the_update() {
        let config = ArtConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = still_particle(0.0, 0.0);
        let epsilon = 0.01;
        p.age = p.lifespan - epsilon;

        let fate = p.update(epsilon * 2.0, 0.4, &[], &config, &mut rng);

        assert_eq!(fate, Fate::Respawned);
        assert!(p.age < p.lifespan);
        assert_eq!(p.hue, 0.4);
    }

    #[test]
    fn overflowing_position_forces_a_respawn() {
        let config = ArtConfig::default();
        let mut rng = StdRng::seed_from_u64(13);
        let mut p = still_particle(f32::MAX, 0.0);
        p.velocity = cgmath::vec2(f32::MAX, 0.0);

        let fate = p.update(1.0, 0.0, &[], &config, &mut rng);

        assert_eq!(fate, Fate::Respawned);
        assert!(p.position.x.is_finite() && p.position.y.is_finite());
        assert!(p.velocity.x.is_finite() && p.velocity.y.is_finite());
        assert_eq!(p.life(), Life::Alive);
    }

    #[test]
    fn color_keeps_cycling_after_a_long_run() {
        let p = still_particle(0.0, 0.0);
        // about four days of frames at the default cycle speed
        let late = 1.0e5;
        assert_ne!(p.color(late, 0.12), p.color(late + 0.5, 0.12));
    }

    #[test]
    fn young_particle_survives() {
        let config = ArtConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = still_particle(0.0, 0.0);
        assert_eq!(p.update(1.0, 0.0, &[], &config, &mut rng), Fate::Survived);
        assert_eq!(p.age, 1.0);
    }

    #[test]
    fn crossing_the_right_edge_wraps_to_the_left() {
        let config = ArtConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        let edge = config.half_width() + config.wrap_margin;
        let mut p = still_particle(edge + 1.0, 0.0);

        p.update(1.0, 0.0, &[], &config, &mut rng);

        assert_eq!(p.position.x, -edge);
    }

    #[test]
    fn wrapping_leaves_velocity_alone() {
        let config = ArtConfig::default();
        let edge = config.half_height() + config.wrap_margin;
        let mut p = still_particle(0.0, -edge - 5.0);
        p.velocity = cgmath::vec2(1.5, -2.0);

        p.wrap(&config);

        assert_eq!(p.position.y, edge);
        assert_eq!(p.velocity, cgmath::vec2(1.5, -2.0));
    }

    #[test]
    fn attractor_pulls_velocity_towards_it() {
        let config = ArtConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = still_particle(0.0, 0.0);
        let attractor = Attractor {
            position: cgmath::point2(100.0, 0.0),
            strength: 180.0,
        };
        let mut reference = p.clone();

        p.update(1.0, 0.0, &[attractor], &config, &mut rng);
        reference.update(1.0, 0.0, &[], &config, &mut rng);

        assert!(p.velocity.x > reference.velocity.x);
        assert!((p.velocity.x - reference.velocity.x - 1.8).abs() < 1e-3);
    }

    #[test]
    fn color_and_size_fade_with_age() {
        let mut p = still_particle(0.0, 0.0);
        let young = (p.color(0.0, 0.12), p.dot_diameter());
        p.age = p.lifespan;
        let old = (p.color(0.0, 0.12), p.dot_diameter());

        assert_eq!(young.1, 5.0);
        assert_eq!(old.1, 3.0);
        let brightness = |c: Rgb| c.r.max(c.g).max(c.b);
        assert!(brightness(young.0) > brightness(old.0));
    }

    #[test]
    fn tiny_particles_still_draw_one_unit() {
        let mut p = still_particle(0.0, 0.0);
        p.size = 0.5;
        assert_eq!(p.dot_diameter(), 1.0);
    }

    #[test]
    fn draw_emits_a_single_dot() {
        let p = still_particle(3.0, 4.0);
        let mut list = DisplayList::new();
        p.draw(&mut list, 0.0, 0.12);
        match list.primitives() {
            [Primitive::Dot { center, .. }] => assert_eq!(*center, cgmath::point2(3.0, 4.0)),
            other => panic!("unexpected primitives {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn age_never_exceeds_lifespan(seed in any::<u64>(), steps in 1usize..200, dt in 0.0f32..4.0) {
            let config = ArtConfig::default();
            let mut rng = StdRng::seed_from_u64(seed);
            let mut p = Particle::spawn(&mut rng, &config);
            for _ in 0..steps {
                p.update(dt, 0.3, &[], &config, &mut rng);
                prop_assert!(p.age < p.lifespan);
            }
        }

        #[test]
        fn wrapped_positions_stay_in_bounds(
            x in -2000.0f32..2000.0,
            y in -2000.0f32..2000.0,
            vx in -500.0f32..500.0,
            vy in -500.0f32..500.0,
            dt in 0.0f32..4.0,
        ) {
            let config = ArtConfig::default();
            let mut rng = StdRng::seed_from_u64(0);
            let mut p = still_particle(x, y);
            p.velocity = cgmath::vec2(vx, vy);
            let attractor = Attractor { position: cgmath::point2(0.0, 0.0), strength: 180.0 };

            p.update(dt, 0.0, &[attractor], &config, &mut rng);

            let bound_x = config.half_width() + config.wrap_margin;
            let bound_y = config.half_height() + config.wrap_margin;
            prop_assert!(p.position.x.is_finite() && p.position.y.is_finite());
            prop_assert!(p.position.x.abs() <= bound_x);
            prop_assert!(p.position.y.abs() <= bound_y);
        }
    }
}
