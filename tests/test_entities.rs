use asteroids_clone::collision::Collider;
use asteroids_clone::entities::{Asteroid, AsteroidSize, AsteroidVariant, Bullet, Player};
use asteroids_clone::spawner::{Population, Spawner};
use asteroids_clone::types::Vector2D;
use asteroids_clone::upgrades::PowerUpKind;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── splitting ────────────────────────────────────────────────────────────────

#[test]
fn extra_small_never_splits() {
    let mut rng = seeded_rng();
    let rock = Asteroid::new(Vector2D::new(50.0, 50.0), Vector2D::ZERO, AsteroidSize::ExtraSmall, AsteroidVariant::Fast);
    assert!(rock.split(&mut rng).is_empty());
}

#[test]
fn larger_sizes_split_into_two_smaller_children() {
    let mut rng = seeded_rng();
    let expected = [
        (AsteroidSize::Small, AsteroidSize::ExtraSmall),
        (AsteroidSize::Medium, AsteroidSize::Small),
        (AsteroidSize::Large, AsteroidSize::Medium),
    ];
    for (parent_size, child_size) in expected {
        let parent = Asteroid::new(Vector2D::new(321.5, 77.25), Vector2D::new(1.0, 1.0), parent_size, AsteroidVariant::zigzag());
        let children = parent.split(&mut rng);
        assert_eq!(children.len(), 2);
        for child in &children {
            assert_eq!(child.size, child_size);
            assert_eq!(child.position, parent.position);
            assert_eq!(child.variant, AsteroidVariant::Plain);
            assert!(child.velocity.length() <= 2.0 * 2f64.sqrt() + 1e-12);
            assert!(child.velocity.x.abs() <= 2.0 && child.velocity.y.abs() <= 2.0);
        }
    }
}

#[test]
fn collision_radius_is_half_the_size() {
    for size in AsteroidSize::ALL {
        let rock = Asteroid::new(Vector2D::ZERO, Vector2D::ZERO, size, AsteroidVariant::Plain);
        assert_eq!(rock.collision_radius(), size.pixels() as f64 / 2.0);
    }
    assert_eq!(Bullet::new(Vector2D::ZERO, Vector2D::ZERO).collision_radius(), 5.0);
    assert_eq!(Player::new(Vector2D::ZERO).collision_radius(), 25.0);
}

// ── boundary policies ────────────────────────────────────────────────────────

#[test]
fn asteroids_bounce_off_edges() {
    let mut rock = Asteroid::new(Vector2D::new(1.0, 799.0), Vector2D::new(-2.0, 1.5), AsteroidSize::Small, AsteroidVariant::Plain);
    rock.update();
    assert_eq!(rock.position, Vector2D::new(-1.0, 800.5));
    assert_eq!(rock.velocity, Vector2D::new(2.0, -1.5));
}

#[test]
fn player_wraps_to_opposite_edge() {
    let mut player = Player::new(Vector2D::new(1279.0, 1.0));
    player.velocity = Vector2D::new(2.0, -2.0);
    player.update();
    assert_eq!(player.position, Vector2D::new(0.0, 800.0));
    assert_eq!(player.velocity, Vector2D::new(2.0, -2.0));
}

#[test]
fn bullets_are_culled_not_wrapped() {
    let mut player = Player::new(Vector2D::new(640.0, 30.0));
    player.shoot();
    player.update();
    assert_eq!(player.bullets.len(), 1);
    player.update();
    player.cull_bullets();
    assert!(player.bullets.is_empty());
}

// ── ship controls ────────────────────────────────────────────────────────────

#[test]
fn thrust_follows_heading_and_slowdown_damps() {
    let mut player = Player::new(Vector2D::new(640.0, 400.0));
    player.apply_thrust();
    assert_eq!(player.velocity, Vector2D::new(0.0, -0.1));
    player.apply_slowdown();
    assert!((player.velocity.y + 0.098).abs() < 1e-12);

    let mut turned = Player::new(Vector2D::new(640.0, 400.0));
    for _ in 0..18 {
        turned.rotate(1.0);
    }
    assert_eq!(turned.angle(), 90.0);
    turned.apply_thrust();
    assert!((turned.velocity.x - 0.1).abs() < 1e-12);
    assert!(turned.velocity.y.abs() < 1e-12);
}

#[test]
fn shot_starts_at_the_nose() {
    let mut player = Player::new(Vector2D::new(640.0, 400.0));
    player.rotate(-1.0);
    player.shoot();
    let shot = &player.bullets[0];
    assert!((shot.position.distance_to(player.position) - 25.0).abs() < 1e-9);
    assert!((shot.velocity.length() - 10.0).abs() < 1e-9);
    assert!(shot.velocity.x < 0.0);
}

#[test]
fn invulnerability_lasts_two_seconds() {
    let mut player = Player::new(Vector2D::ZERO);
    player.last_hit_millis = 5000;
    assert!(player.is_invulnerable(5000));
    assert!(player.is_invulnerable(6999));
    assert!(!player.is_invulnerable(7000));
}

// ── spawner ──────────────────────────────────────────────────────────────────

#[test]
fn population_formulas() {
    assert_eq!(Population::for_level(1), Population { plain: 3, fast: 2, zigzag: 2 });
    assert_eq!(Population::for_level(2), Population { plain: 4, fast: 3, zigzag: 3 });
    assert_eq!(Population::for_level(5), Population { plain: 7, fast: 4, zigzag: 4 });
}

#[test]
fn created_asteroids_respect_level_rules() {
    let mut spawner = Spawner::new(7);
    for level in 1..=6 {
        let field = spawner.create_asteroids(level);
        let population = Population::for_level(level);
        assert_eq!(field.len() as u32, population.total());

        let limit = 2.0 * (1.0 + level as f64 * 0.1);
        for rock in &field {
            assert!((0.0..=1280.0).contains(&rock.position.x));
            assert!((0.0..=800.0).contains(&rock.position.y));
            let factor = if rock.variant == AsteroidVariant::Fast { 2.0 } else { 1.0 };
            assert!(rock.velocity.x.abs() <= limit * factor + 1e-9);
            assert!(rock.velocity.y.abs() <= limit * factor + 1e-9);
        }
        let fast = field.iter().filter(|r| r.variant == AsteroidVariant::Fast).count() as u32;
        assert_eq!(fast, population.fast);
    }
}

#[test]
fn same_seed_same_field() {
    let a = Spawner::new(99).create_asteroids(3);
    let b = Spawner::new(99).create_asteroids(3);
    let positions = |field: &[Asteroid]| field.iter().map(|r| (r.position, r.size)).collect::<Vec<_>>();
    assert_eq!(positions(&a), positions(&b));
}

#[test]
fn power_ups_land_on_the_map_and_stand_still() {
    let mut spawner = Spawner::new(3);
    let mut seen = Vec::new();
    for _ in 0..60 {
        let power_up = spawner.spawn_power_up();
        assert!((0.0..=1280.0).contains(&power_up.position.x));
        assert!((0.0..=800.0).contains(&power_up.position.y));
        assert_eq!(power_up.collision_radius(), 10.0);
        if !seen.contains(&power_up.kind) {
            seen.push(power_up.kind);
        }
    }
    for kind in PowerUpKind::ALL {
        assert!(seen.contains(&kind));
    }
}
