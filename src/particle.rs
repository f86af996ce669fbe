// Particle field: a fixed collection of moving points that bounce off the
// viewport edges. Positions are in canvas pixel coordinates, velocities in
// pixels per frame.

use rand::Rng;

pub const NODE_COUNT: usize = 40;

// Each axis of a fresh velocity is (r - 0.5) * spread with r in [0, 1)
const VELOCITY_SPREAD: f64 = 1.2;

#[derive(Copy, Clone)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
}

pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(count: usize, width: f64, height: f64) -> ParticleField {
        let mut rng = rand::thread_rng();
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle {
                pos: [rng.gen::<f64>() * width, rng.gen::<f64>() * height],
                vel: [
                    (rng.gen::<f64>() - 0.5) * VELOCITY_SPREAD,
                    (rng.gen::<f64>() - 0.5) * VELOCITY_SPREAD,
                ],
            });
        }
        ParticleField { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    // Move every particle by its velocity, then reflect the velocity of any
    // particle that stepped past an edge. The overshooting position is kept
    // as is; the reflected velocity brings it back inside on later steps.
    pub fn advance(&mut self, width: f64, height: f64) {
        for p in &mut self.particles {
            p.pos[0] += p.vel[0];
            p.pos[1] += p.vel[1];
            if p.pos[0] < 0.0 || p.pos[0] > width {
                p.vel[0] *= -1.0;
            }
            if p.pos[1] < 0.0 || p.pos[1] > height {
                p.vel[1] *= -1.0;
            }
        }
    }
}
