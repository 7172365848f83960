use log::debug;
use rand::Rng;

use crate::entities::{Asteroid, Bullet, Player};
use crate::mask::CollisionMask;
use crate::types::Vector2D;
use crate::upgrades::{PowerUp, PowerUpKind};

// --- Two-phase overlap test: bounding circles, then masks ---
pub trait Collider {
    fn position(&self) -> Vector2D;
    fn collision_radius(&self) -> f64;
    fn collision_mask(&self) -> &CollisionMask;
}

pub trait PreciseTest {
    fn overlaps(&mut self, a: &CollisionMask, b: &CollisionMask, offset: (i32, i32)) -> bool;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MaskOverlap;

impl PreciseTest for MaskOverlap {
    fn overlaps(&mut self, a: &CollisionMask, b: &CollisionMask, offset: (i32, i32)) -> bool {
        a.overlap(b, offset)
    }
}

pub fn check_overlap<A, B>(a: &A, b: &B) -> bool
where
    A: Collider + ?Sized,
    B: Collider + ?Sized,
{
    check_overlap_with(a, b, &mut MaskOverlap)
}

pub fn check_overlap_with<A, B, T>(a: &A, b: &B, precise: &mut T) -> bool
where
    A: Collider + ?Sized,
    B: Collider + ?Sized,
    T: PreciseTest + ?Sized,
{
    let delta = b.position().sub(a.position());
    if delta.length() > a.collision_radius() + b.collision_radius() {
        return false;
    }
    // Truncate toward zero, same as the pixel grid the masks live on.
    let offset = (delta.x as i32, delta.y as i32);
    precise.overlaps(a.collision_mask(), b.collision_mask(), offset)
}

pub struct CollisionEngine<T: PreciseTest = MaskOverlap> {
    precise: T,
}

impl CollisionEngine<MaskOverlap> {
    pub fn new() -> Self {
        CollisionEngine { precise: MaskOverlap }
    }
}

impl Default for CollisionEngine<MaskOverlap> {
    fn default() -> Self {
        CollisionEngine::new()
    }
}

impl<T: PreciseTest> CollisionEngine<T> {
    pub fn with_precise(precise: T) -> Self {
        CollisionEngine { precise }
    }

    pub fn precise(&self) -> &T {
        &self.precise
    }

    pub fn check_overlap<A, B>(&mut self, a: &A, b: &B) -> bool
    where
        A: Collider + ?Sized,
        B: Collider + ?Sized,
    {
        check_overlap_with(a, b, &mut self.precise)
    }

    // --- Bullet vs asteroid ---
    // One asteroid per bullet. Fragments join the field after the pass.
    pub fn resolve_bullet_hits(
        &mut self,
        bullets: &mut Vec<Bullet>,
        asteroids: &mut Vec<Asteroid>,
        rng: &mut impl Rng,
    ) -> u32 {
        let mut fragments: Vec<Asteroid> = Vec::new();
        let mut destroyed = 0;

        bullets.retain(|bullet| {
            let Some(index) = asteroids.iter().position(|asteroid| self.check_overlap(bullet, asteroid)) else {
                return true; // Keep bullet
            };
            let asteroid = asteroids.remove(index);
            debug!("Bullet hit {:?} asteroid at ({:.1}, {:.1})", asteroid.size, asteroid.position.x, asteroid.position.y);
            fragments.extend(asteroid.split(&mut *rng));
            destroyed += 1;
            false
        });

        asteroids.extend(fragments);
        destroyed
    }

    // --- Player vs asteroid ---
    pub fn first_player_hit(&mut self, player: &Player, asteroids: &[Asteroid]) -> Option<usize> {
        asteroids.iter().position(|asteroid| self.check_overlap(player, asteroid))
    }

    // --- Player vs power-up ---
    pub fn collect_power_ups(&mut self, player: &Player, power_ups: &mut Vec<PowerUp>) -> Vec<PowerUpKind> {
        let mut collected = Vec::new();
        power_ups.retain(|power_up| {
            if self.check_overlap(player, power_up) {
                collected.push(power_up.kind);
                false
            } else {
                true
            }
        });
        collected
    }
}
