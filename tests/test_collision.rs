use asteroids_clone::collision::{check_overlap, CollisionEngine, Collider, PreciseTest};
use asteroids_clone::entities::{Asteroid, AsteroidSize, AsteroidVariant, Bullet, Player};
use asteroids_clone::mask::CollisionMask;
use asteroids_clone::types::Vector2D;
use asteroids_clone::upgrades::{PowerUp, PowerUpKind};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Precise test that records how often it is consulted.
#[derive(Default)]
struct CountingStub {
    calls: usize,
    answer: bool,
}

impl PreciseTest for CountingStub {
    fn overlaps(&mut self, _a: &CollisionMask, _b: &CollisionMask, _offset: (i32, i32)) -> bool {
        self.calls += 1;
        self.answer
    }
}

fn rock(x: f64, y: f64, size: AsteroidSize) -> Asteroid {
    Asteroid::new(Vector2D::new(x, y), Vector2D::ZERO, size, AsteroidVariant::Plain)
}

fn bullet(x: f64, y: f64) -> Bullet {
    Bullet::new(Vector2D::new(x, y), Vector2D::ZERO)
}

// ── bounding-circle rejection ────────────────────────────────────────────────

#[test]
fn far_pairs_never_reach_the_precise_test() {
    let mut engine = CollisionEngine::with_precise(CountingStub { calls: 0, answer: true });
    let player = Player::new(Vector2D::new(640.0, 400.0));
    let pairs = [
        rock(100.0, 100.0, AsteroidSize::Large),
        rock(640.0, 400.0 - 66.0, AsteroidSize::Large), // 25 + 40 = 65 < 66
        rock(700.0, 400.0, AsteroidSize::ExtraSmall),
    ];
    for asteroid in &pairs {
        assert!(!engine.check_overlap(&player, asteroid));
    }
    assert_eq!(engine.precise().calls, 0);
}

#[test]
fn touching_circles_defer_to_the_precise_test() {
    let mut engine = CollisionEngine::with_precise(CountingStub { calls: 0, answer: false });
    let asteroid = rock(300.0, 300.0, AsteroidSize::Medium);
    // Exactly at radius sum (30 + 5): not rejected.
    assert!(!engine.check_overlap(&bullet(335.0, 300.0), &asteroid));
    assert_eq!(engine.precise().calls, 1);
}

#[test]
fn pixel_test_rejects_diagonal_near_miss() {
    // Bounding circles overlap but the ship's triangle leaves its corners empty.
    let player = Player::new(Vector2D::new(640.0, 400.0));
    let corner = rock(620.0, 385.0, AsteroidSize::ExtraSmall);
    assert!(player.position().distance_to(corner.position()) < player.collision_radius() + corner.collision_radius());
    assert!(!check_overlap(&player, &corner));
}

#[test]
fn zero_sized_masks_never_collide() {
    struct Dot;
    impl Collider for Dot {
        fn position(&self) -> Vector2D {
            Vector2D::new(300.0, 300.0)
        }
        fn collision_radius(&self) -> f64 {
            0.0
        }
        fn collision_mask(&self) -> &CollisionMask {
            static EMPTY: std::sync::OnceLock<CollisionMask> = std::sync::OnceLock::new();
            EMPTY.get_or_init(CollisionMask::empty)
        }
    }
    assert!(!check_overlap(&Dot, &rock(300.0, 300.0, AsteroidSize::Large)));
}

// ── resolution passes ────────────────────────────────────────────────────────

#[test]
fn one_bullet_one_kill_even_when_overlapping_two() {
    let mut engine = CollisionEngine::new();
    let mut rng = StdRng::seed_from_u64(42);
    let mut bullets = vec![bullet(300.0, 300.0)];
    let mut asteroids = vec![rock(300.0, 300.0, AsteroidSize::ExtraSmall), rock(302.0, 300.0, AsteroidSize::ExtraSmall)];

    let destroyed = engine.resolve_bullet_hits(&mut bullets, &mut asteroids, &mut rng);

    assert_eq!(destroyed, 1);
    assert!(bullets.is_empty());
    assert_eq!(asteroids.len(), 1);
    assert_eq!(asteroids[0].position, Vector2D::new(302.0, 300.0));
}

#[test]
fn two_bullets_on_one_rock_kill_it_once() {
    let mut engine = CollisionEngine::new();
    let mut rng = StdRng::seed_from_u64(42);
    let mut bullets = vec![bullet(300.0, 300.0), bullet(301.0, 300.0)];
    let mut asteroids = vec![rock(300.0, 300.0, AsteroidSize::Small)];

    let destroyed = engine.resolve_bullet_hits(&mut bullets, &mut asteroids, &mut rng);

    // Fragments only join the field after every bullet was checked.
    assert_eq!(destroyed, 1);
    assert_eq!(bullets.len(), 1);
    assert_eq!(asteroids.len(), 2);
    assert!(asteroids.iter().all(|a| a.size == AsteroidSize::ExtraSmall));
}

#[test]
fn misses_keep_bullets_alive() {
    let mut engine = CollisionEngine::new();
    let mut rng = StdRng::seed_from_u64(1);
    let mut bullets = vec![bullet(10.0, 10.0)];
    let mut asteroids = vec![rock(900.0, 600.0, AsteroidSize::Large)];
    assert_eq!(engine.resolve_bullet_hits(&mut bullets, &mut asteroids, &mut rng), 0);
    assert_eq!(bullets.len(), 1);
    assert_eq!(asteroids.len(), 1);
}

#[test]
fn first_player_hit_reports_earliest_index() {
    let mut engine = CollisionEngine::new();
    let player = Player::new(Vector2D::new(640.0, 400.0));
    let asteroids = vec![
        rock(100.0, 100.0, AsteroidSize::Large),
        rock(645.0, 400.0, AsteroidSize::Small),
        rock(640.0, 400.0, AsteroidSize::Large),
    ];
    assert_eq!(engine.first_player_hit(&player, &asteroids), Some(1));
    assert_eq!(engine.first_player_hit(&player, &asteroids[..1]), None);
}

#[test]
fn every_touching_power_up_is_collected() {
    let mut engine = CollisionEngine::new();
    let player = Player::new(Vector2D::new(640.0, 400.0));
    let mut power_ups = vec![
        PowerUp::new(Vector2D::new(640.0, 400.0), PowerUpKind::Shield),
        PowerUp::new(Vector2D::new(100.0, 100.0), PowerUpKind::ExtraLife),
        PowerUp::new(Vector2D::new(645.0, 405.0), PowerUpKind::IncreasedSpeed),
    ];
    let collected = engine.collect_power_ups(&player, &mut power_ups);
    assert_eq!(collected, vec![PowerUpKind::Shield, PowerUpKind::IncreasedSpeed]);
    assert_eq!(power_ups.len(), 1);
    assert_eq!(power_ups[0].kind, PowerUpKind::ExtraLife);
}
