// --- Play Area ---
pub const MAP_WIDTH: f64 = 1280.0;
pub const MAP_HEIGHT: f64 = 800.0;
pub const MAP_CENTER_X: f64 = MAP_WIDTH / 2.0;
pub const MAP_CENTER_Y: f64 = MAP_HEIGHT / 2.0;

// --- Timing ---
pub const TARGET_FPS: u64 = 60;
pub const FRAME_MILLIS: u64 = 1000 / TARGET_FPS; // Sleep per loop iteration

// --- Asteroid ---
pub const ASTEROID_SIZE_XS: u32 = 20;
pub const ASTEROID_SIZE_SM: u32 = 40;
pub const ASTEROID_SIZE_MD: u32 = 60;
pub const ASTEROID_SIZE_LG: u32 = 80;
pub const ASTEROID_MAX_COMPONENT_SPEED: f64 = 2.0; // Velocity components drawn from [-2, 2]
pub const FAST_ASTEROID_SPEED_FACTOR: f64 = 2.0;
pub const ZIGZAG_ACCELERATION: f64 = 0.1;
pub const ZIGZAG_MAX_LATERAL_SPEED: f64 = 2.0;
pub const LEVEL_SPEED_STEP: f64 = 0.1; // Spawn velocity scaled by 1 + level * step

// --- Population per level ---
pub const BASE_PLAIN_ASTEROIDS: u32 = 3;
pub const BASE_FAST_ASTEROIDS: u32 = 2;
pub const BASE_ZIGZAG_ASTEROIDS: u32 = 2;

// --- Ship ---
pub const PLAYER_SIZE: f64 = 50.0;
pub const PLAYER_START_LIVES: u32 = 3;
pub const PLAYER_THRUST: f64 = 0.1;
pub const PLAYER_ROTATION_SPEED: f64 = 5.0; // Degrees per tick
pub const PLAYER_SLOWDOWN: f64 = 0.98;
pub const INVULNERABILITY_MILLIS: u64 = 2000;

// --- Bullet ---
pub const BULLET_RADIUS: f64 = 5.0;
pub const BULLET_SPEED: f64 = 10.0;

// --- Power-ups and shop ---
pub const POWER_UP_SIZE: f64 = 20.0;
pub const POWER_UP_SPEED_FACTOR: f64 = 1.5;
pub const SHOP_THRUST_INCREMENT: f64 = 0.05;
pub const POWER_UP_SPAWN_INTERVAL_FRAMES: u64 = 60 * 10; // Every 10 seconds

// --- Scoring ---
pub const SCORE_PER_ASTEROID: u32 = 10;
