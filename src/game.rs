use log::{debug, info, warn};

use crate::collision::CollisionEngine;
use crate::constants::*;
use crate::entities::{Asteroid, AsteroidSize, AsteroidVariant, Player};
use crate::error::GameResult;
use crate::shop::Shop;
use crate::spawner::Spawner;
use crate::types::Vector2D;
use crate::upgrades::{PowerUp, PowerUpKind, UpgradeKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotateDirection {
    Left,
    Right,
}

impl RotateDirection {
    fn sign(self) -> f64 {
        match self {
            RotateDirection::Left => -1.0,
            RotateDirection::Right => 1.0,
        }
    }
}

// --- Read-only views for the frontend ---
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerView {
    pub position: Vector2D,
    pub angle: f64,
    pub lives: u32,
    pub invulnerable: bool,
    pub shield: bool,
    pub bullets: Vec<Vector2D>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AsteroidView {
    pub position: Vector2D,
    pub size: AsteroidSize,
    pub variant: AsteroidVariant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUpView {
    pub position: Vector2D,
    pub kind: PowerUpKind,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub player: PlayerView,
    pub asteroids: Vec<AsteroidView>,
    pub power_ups: Vec<PowerUpView>,
    pub score: u32,
    pub level: u32,
    pub game_over: bool,
    pub shop_selection: Option<UpgradeKind>,
}

/// The whole simulation: one ship, the asteroid field, loose power-ups,
/// score and level. Advanced one frame at a time with [`Game::tick`].
pub struct Game {
    player: Player,
    asteroids: Vec<Asteroid>,
    power_ups: Vec<PowerUp>,
    score: u32,
    level: u32,
    state: GameState,
    frame: u64,
    shop: Option<Shop>,
    spawner: Spawner,
    collisions: CollisionEngine,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Game::with_spawner(Spawner::new(seed))
    }

    pub fn from_entropy() -> Self {
        Game::with_spawner(Spawner::from_entropy())
    }

    pub fn with_spawner(mut spawner: Spawner) -> Self {
        let level = 1;
        let asteroids = spawner.create_asteroids(level);
        info!("New game: level {} with {} asteroids", level, asteroids.len());
        Game {
            player: Player::new(Vector2D::new(MAP_CENTER_X, MAP_CENTER_Y)),
            asteroids,
            power_ups: Vec::new(),
            score: 0,
            level,
            state: GameState::Playing,
            frame: 0,
            shop: None,
            spawner,
            collisions: CollisionEngine::new(),
        }
    }

    // --- Accessors ---
    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn power_ups(&self) -> &[PowerUp] {
        &self.power_ups
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Simulated time since the game started.
    pub fn elapsed_millis(&self) -> u64 {
        self.frame * 1000 / TARGET_FPS
    }

    pub fn shop(&self) -> Option<&Shop> {
        self.shop.as_ref()
    }

    pub fn is_shop_open(&self) -> bool {
        self.shop.is_some()
    }

    pub fn snapshot(&self) -> Snapshot {
        let now = self.elapsed_millis();
        Snapshot {
            player: PlayerView {
                position: self.player.position,
                angle: self.player.angle(),
                lives: self.player.lives,
                invulnerable: self.player.is_invulnerable(now),
                shield: self.player.shield,
                bullets: self.player.bullets.iter().map(|bullet| bullet.position).collect(),
            },
            asteroids: self
                .asteroids
                .iter()
                .map(|asteroid| AsteroidView { position: asteroid.position, size: asteroid.size, variant: asteroid.variant })
                .collect(),
            power_ups: self
                .power_ups
                .iter()
                .map(|power_up| PowerUpView { position: power_up.position, kind: power_up.kind })
                .collect(),
            score: self.score,
            level: self.level,
            game_over: self.is_game_over(),
            shop_selection: self.shop.as_ref().map(Shop::selected),
        }
    }

    // --- Ship commands ---
    pub fn rotate(&mut self, direction: RotateDirection) {
        if self.is_game_over() {
            return;
        }
        self.player.rotate(direction.sign());
    }

    pub fn thrust(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.player.apply_thrust();
    }

    pub fn slowdown(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.player.apply_slowdown();
    }

    pub fn shoot(&mut self) {
        if self.is_game_over() {
            return;
        }
        let bullet = self.player.shoot();
        debug!("Bullet fired from ({:.1}, {:.1})", bullet.position.x, bullet.position.y);
    }

    // --- Upgrades and power-ups ---
    pub fn apply_upgrade(&mut self, kind: UpgradeKind) {
        if self.is_game_over() {
            warn!("Upgrade {} ignored after game over", kind);
            return;
        }
        match kind {
            UpgradeKind::ThrustBoost => self.player.thrust += SHOP_THRUST_INCREMENT,
            UpgradeKind::ExtraLife => self.player.lives += 1,
            UpgradeKind::Shield => self.player.shield = true,
        }
        info!("Upgrade applied: {} (thrust {:.3}, lives {})", kind, self.player.thrust, self.player.lives);
    }

    pub fn apply_upgrade_by_name(&mut self, name: &str) -> GameResult<()> {
        let kind = name.parse::<UpgradeKind>().map_err(|e| {
            warn!("Rejected upgrade: {}", e);
            e
        })?;
        self.apply_upgrade(kind);
        Ok(())
    }

    pub fn apply_power_up(&mut self, kind: PowerUpKind) {
        match kind {
            PowerUpKind::ExtraLife => self.player.lives += 1,
            PowerUpKind::IncreasedSpeed => self.player.thrust *= POWER_UP_SPEED_FACTOR,
            PowerUpKind::Shield => self.player.shield = true,
        }
        info!("Power-up collected: {}", kind);
    }

    pub fn spawn_power_up(&mut self) {
        let power_up = self.spawner.spawn_power_up();
        debug!("Power-up {} spawned at ({}, {})", power_up.kind, power_up.position.x, power_up.position.y);
        self.power_ups.push(power_up);
    }

    // --- Shop ---
    pub fn open_shop(&mut self) {
        if self.shop.is_none() && !self.is_game_over() {
            self.shop = Some(Shop::new());
        }
    }

    pub fn close_shop(&mut self) {
        self.shop = None;
    }

    pub fn shop_select_previous(&mut self) {
        if let Some(shop) = &mut self.shop {
            shop.select_previous();
        }
    }

    pub fn shop_select_next(&mut self) {
        if let Some(shop) = &mut self.shop {
            shop.select_next();
        }
    }

    /// Buys the highlighted upgrade and closes the shop.
    pub fn confirm_shop(&mut self) -> Option<UpgradeKind> {
        if self.is_game_over() {
            return None;
        }
        let kind = self.shop.take()?.selected();
        self.apply_upgrade(kind);
        Some(kind)
    }

    // --- Simulation ---
    pub fn reset_level_population(&mut self) {
        self.asteroids = self.spawner.create_asteroids(self.level);
    }

    /// Advances the simulation one frame. Does nothing once the game is over
    /// or while the shop is open.
    pub fn tick(&mut self) {
        if self.state == GameState::GameOver || self.shop.is_some() {
            return;
        }
        self.frame += 1;

        self.player.update();
        for asteroid in &mut self.asteroids {
            asteroid.update();
        }

        self.resolve_collisions();
        self.player.cull_bullets();

        if self.asteroids.is_empty() {
            self.next_level();
        }
    }

    fn resolve_collisions(&mut self) {
        let destroyed =
            self.collisions.resolve_bullet_hits(&mut self.player.bullets, &mut self.asteroids, self.spawner.rng());
        if destroyed > 0 {
            self.score += destroyed * SCORE_PER_ASTEROID;
            debug!("{} asteroid(s) destroyed. Score: {}", destroyed, self.score);
        }

        if self.collisions.first_player_hit(&self.player, &self.asteroids).is_some() {
            self.on_player_hit();
        }

        for kind in self.collisions.collect_power_ups(&self.player, &mut self.power_ups) {
            self.apply_power_up(kind);
        }
    }

    fn on_player_hit(&mut self) {
        let now = self.elapsed_millis();
        if !self.player.is_invulnerable(now) {
            self.player.lives = self.player.lives.saturating_sub(1);
            self.player.last_hit_millis = now;
            info!("Player hit at {} ms. Lives left: {}", now, self.player.lives);
            if self.player.lives == 0 {
                self.state = GameState::GameOver;
                info!("Game over. Final score: {}, level {}", self.score, self.level);
            }
        }
        self.reset_level_population();
        self.player.respawn();
    }

    fn next_level(&mut self) {
        self.level += 1;
        self.reset_level_population();
        info!("Level {} reached with {} asteroids", self.level, self.asteroids.len());
    }
}
