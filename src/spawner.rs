use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::constants::*;
use crate::entities::{Asteroid, AsteroidSize, AsteroidVariant, random_velocity};
use crate::types::Vector2D;
use crate::upgrades::{PowerUp, PowerUpKind};

/// How many asteroids of each variant a level starts with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Population {
    pub plain: u32,
    pub fast: u32,
    pub zigzag: u32,
}

impl Population {
    pub fn for_level(level: u32) -> Self {
        Population {
            plain: BASE_PLAIN_ASTEROIDS + level.saturating_sub(1),
            fast: BASE_FAST_ASTEROIDS + level / 2,
            zigzag: BASE_ZIGZAG_ASTEROIDS + level / 2,
        }
    }

    pub fn total(&self) -> u32 {
        self.plain + self.fast + self.zigzag
    }
}

/// Owns the simulation's random source. Everything random in the game
/// (level populations, power-up drops, asteroid fragments) draws from here.
pub struct Spawner {
    rng: StdRng,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Spawner { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        Spawner { rng: StdRng::from_entropy() }
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn create_asteroids(&mut self, level: u32) -> Vec<Asteroid> {
        let population = Population::for_level(level);
        let speed_scale = 1.0 + level as f64 * LEVEL_SPEED_STEP;
        let batches = [
            (population.plain, AsteroidVariant::Plain),
            (population.fast, AsteroidVariant::Fast),
            (population.zigzag, AsteroidVariant::zigzag()),
        ];

        let mut asteroids = Vec::with_capacity(population.total() as usize);
        for (count, variant) in batches {
            for _ in 0..count {
                let size = AsteroidSize::random(&mut self.rng);
                let velocity = random_velocity(&mut self.rng).scale(speed_scale);
                let position = self.random_position();
                asteroids.push(Asteroid::new(position, velocity, size, variant));
            }
        }
        asteroids
    }

    pub fn spawn_power_up(&mut self) -> PowerUp {
        let position = self.random_position();
        let kind = *PowerUpKind::ALL.choose(&mut self.rng).unwrap_or(&PowerUpKind::ExtraLife);
        PowerUp::new(position, kind)
    }

    fn random_position(&mut self) -> Vector2D {
        let x = self.rng.gen_range(0..=MAP_WIDTH as u32);
        let y = self.rng.gen_range(0..=MAP_HEIGHT as u32);
        Vector2D::new(x as f64, y as f64)
    }
}
