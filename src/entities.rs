use crate::collision::Collider;
use crate::constants::*;
use crate::mask::CollisionMask;
use crate::types::{Vector2D, in_bounds, wrap_coordinate};
use rand::Rng;
use rand::seq::SliceRandom;

// --- Asteroid ---
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AsteroidSize {
    ExtraSmall,
    Small,
    Medium,
    Large,
}

impl AsteroidSize {
    pub const ALL: [AsteroidSize; 4] = [
        AsteroidSize::ExtraSmall,
        AsteroidSize::Small,
        AsteroidSize::Medium,
        AsteroidSize::Large,
    ];

    /// Diameter in pixels.
    pub fn pixels(self) -> u32 {
        match self {
            AsteroidSize::ExtraSmall => ASTEROID_SIZE_XS,
            AsteroidSize::Small => ASTEROID_SIZE_SM,
            AsteroidSize::Medium => ASTEROID_SIZE_MD,
            AsteroidSize::Large => ASTEROID_SIZE_LG,
        }
    }

    /// Size class of the fragments left behind by a bullet hit.
    pub fn split(self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => Some(AsteroidSize::ExtraSmall),
            AsteroidSize::ExtraSmall => None,
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        *AsteroidSize::ALL.choose(rng).unwrap_or(&AsteroidSize::Large)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AsteroidVariant {
    Plain,
    Fast,
    /// `direction` is the sign of the lateral acceleration, +1.0 or -1.0.
    Zigzag { direction: f64 },
}

impl AsteroidVariant {
    pub fn zigzag() -> Self {
        AsteroidVariant::Zigzag { direction: 1.0 }
    }
}

#[derive(Clone, Debug)]
pub struct Asteroid {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub size: AsteroidSize,
    pub variant: AsteroidVariant,
    mask: CollisionMask,
}

impl Asteroid {
    pub fn new(position: Vector2D, velocity: Vector2D, size: AsteroidSize, variant: AsteroidVariant) -> Self {
        let velocity = match variant {
            AsteroidVariant::Fast => velocity.scale(FAST_ASTEROID_SPEED_FACTOR),
            _ => velocity,
        };
        Asteroid { position, velocity, size, variant, mask: CollisionMask::circle(size.pixels()) }
    }

    pub fn update(&mut self) {
        self.position = self.position.add(self.velocity);

        if let AsteroidVariant::Zigzag { direction } = &mut self.variant {
            self.velocity.x += *direction * ZIGZAG_ACCELERATION;
            if self.velocity.x.abs() > ZIGZAG_MAX_LATERAL_SPEED {
                *direction = -*direction;
            }
        }

        // Bounce off the play area edges
        if self.position.x < 0.0 || self.position.x > MAP_WIDTH {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > MAP_HEIGHT {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Fragments produced by a bullet hit: two plain asteroids one size class
    /// down, both at this asteroid's position. Extra-small asteroids vanish.
    pub fn split(&self, rng: &mut impl Rng) -> Vec<Asteroid> {
        let Some(child_size) = self.size.split() else {
            return Vec::new();
        };
        (0..2)
            .map(|_| Asteroid::new(self.position, random_velocity(&mut *rng), child_size, AsteroidVariant::Plain))
            .collect()
    }
}

impl Collider for Asteroid {
    fn position(&self) -> Vector2D {
        self.position
    }

    fn collision_radius(&self) -> f64 {
        self.size.pixels() as f64 / 2.0
    }

    fn collision_mask(&self) -> &CollisionMask {
        &self.mask
    }
}

/// Velocity with each component uniform in [-2, 2].
pub fn random_velocity(rng: &mut impl Rng) -> Vector2D {
    let max = ASTEROID_MAX_COMPONENT_SPEED;
    Vector2D::new(rng.gen_range(-max..=max), rng.gen_range(-max..=max))
}

// --- Bullet ---
#[derive(Clone, Debug)]
pub struct Bullet {
    pub position: Vector2D,
    pub velocity: Vector2D,
    mask: CollisionMask,
}

impl Bullet {
    pub fn new(position: Vector2D, velocity: Vector2D) -> Self {
        Bullet { position, velocity, mask: CollisionMask::circle((BULLET_RADIUS * 2.0) as u32) }
    }

    pub fn update(&mut self) {
        self.position = self.position.add(self.velocity);
    }

    pub fn is_on_screen(&self) -> bool {
        in_bounds(self.position, MAP_WIDTH, MAP_HEIGHT)
    }
}

impl Collider for Bullet {
    fn position(&self) -> Vector2D {
        self.position
    }

    fn collision_radius(&self) -> f64 {
        BULLET_RADIUS
    }

    fn collision_mask(&self) -> &CollisionMask {
        &self.mask
    }
}

// --- Player ship ---
#[derive(Clone, Debug)]
pub struct Player {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub size: f64,
    angle: f64, // Degrees, 0 = up
    pub lives: u32,
    pub thrust: f64,
    pub rotation_speed: f64,
    pub slowdown: f64,
    pub shield: bool,
    pub bullets: Vec<Bullet>,
    pub last_hit_millis: u64,
    pub invulnerability_millis: u64,
    mask: CollisionMask,
}

impl Player {
    pub fn new(position: Vector2D) -> Self {
        Player {
            position,
            velocity: Vector2D::ZERO,
            size: PLAYER_SIZE,
            angle: 0.0,
            lives: PLAYER_START_LIVES,
            thrust: PLAYER_THRUST,
            rotation_speed: PLAYER_ROTATION_SPEED,
            slowdown: PLAYER_SLOWDOWN,
            shield: false,
            bullets: Vec::new(),
            last_hit_millis: 0,
            invulnerability_millis: INVULNERABILITY_MILLIS,
            mask: CollisionMask::ship(PLAYER_SIZE, 0.0),
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn set_angle(&mut self, degrees: f64) {
        self.angle = degrees;
        self.mask = CollisionMask::ship(self.size, self.angle);
    }

    /// `direction` is -1.0 for counter-clockwise, 1.0 for clockwise.
    pub fn rotate(&mut self, direction: f64) {
        self.set_angle(self.angle + self.rotation_speed * direction);
    }

    pub fn heading(&self) -> Vector2D {
        Vector2D::from_heading(self.angle)
    }

    pub fn apply_thrust(&mut self) {
        self.velocity = self.velocity.add(self.heading().scale(self.thrust));
    }

    pub fn apply_slowdown(&mut self) {
        self.velocity = self.velocity.scale(self.slowdown);
    }

    /// Moves the ship and its bullets one tick. Bullets that leave the map
    /// are not removed here.
    pub fn update(&mut self) {
        self.position = self.position.add(self.velocity);

        // Screen wrapping
        self.position.x = wrap_coordinate(self.position.x, MAP_WIDTH);
        self.position.y = wrap_coordinate(self.position.y, MAP_HEIGHT);

        for bullet in &mut self.bullets {
            bullet.update();
        }
    }

    pub fn cull_bullets(&mut self) {
        self.bullets.retain(Bullet::is_on_screen);
    }

    pub fn shoot(&mut self) -> &Bullet {
        let heading = self.heading();
        let origin = self.position.add(heading.scale(self.size / 2.0));
        self.bullets.push(Bullet::new(origin, heading.scale(BULLET_SPEED)));
        &self.bullets[self.bullets.len() - 1]
    }

    pub fn is_invulnerable(&self, now_millis: u64) -> bool {
        now_millis.saturating_sub(self.last_hit_millis) < self.invulnerability_millis
    }

    pub fn respawn(&mut self) {
        self.position = Vector2D::new(MAP_CENTER_X, MAP_CENTER_Y);
        self.velocity = Vector2D::ZERO;
    }
}

impl Collider for Player {
    fn position(&self) -> Vector2D {
        self.position
    }

    fn collision_radius(&self) -> f64 {
        self.size / 2.0
    }

    fn collision_mask(&self) -> &CollisionMask {
        &self.mask
    }
}
