use rand::Rng;

use crate::constants::*;

/// A decorative dot floating up the background, in normalized screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    speed: f32,
}

pub struct Particles {
    pub particles: Vec<Particle>,
}

impl Particles {
    pub fn new(count: usize) -> Self {
        let mut rng = rand::rng();
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.random_range(0.05..0.95),
                y: rng.random_range(0.0..1.0),
                radius: rng.random_range(2.0..6.0),
                speed: rng.random_range(PARTICLE_SPEED),
            })
            .collect();
        Self { particles }
    }

    pub fn update(&mut self, dt: f32) {
        let mut rng = rand::rng();
        for particle in self.particles.iter_mut() {
            particle.y -= particle.speed * dt;
            // Re-enter from the bottom at a new column
            if particle.y < 0.0 {
                particle.y += 1.0;
                particle.x = rng.random_range(0.05..0.95);
            }
        }
    }
}

impl Default for Particles {
    fn default() -> Self {
        Self::new(PARTICLE_COUNT)
    }
}
