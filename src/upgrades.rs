use std::fmt;
use std::str::FromStr;

use crate::collision::Collider;
use crate::constants::POWER_UP_SIZE;
use crate::error::GameError;
use crate::mask::CollisionMask;
use crate::types::Vector2D;

/// Pickups lying on the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    ExtraLife,
    IncreasedSpeed,
    Shield,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [PowerUpKind::ExtraLife, PowerUpKind::IncreasedSpeed, PowerUpKind::Shield];

    pub fn name(self) -> &'static str {
        match self {
            PowerUpKind::ExtraLife => "extra_life",
            PowerUpKind::IncreasedSpeed => "increased_speed",
            PowerUpKind::Shield => "shield",
        }
    }
}

impl fmt::Display for PowerUpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Upgrades sold in the shop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpgradeKind {
    ThrustBoost,
    ExtraLife,
    Shield,
}

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 3] = [UpgradeKind::ThrustBoost, UpgradeKind::ExtraLife, UpgradeKind::Shield];

    pub fn name(self) -> &'static str {
        match self {
            UpgradeKind::ThrustBoost => "thrust_boost",
            UpgradeKind::ExtraLife => "extra_life",
            UpgradeKind::Shield => "shield",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UpgradeKind::ThrustBoost => "Increase Thrust",
            UpgradeKind::ExtraLife => "Extra Life",
            UpgradeKind::Shield => "Activate Shield",
        }
    }
}

impl fmt::Display for UpgradeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UpgradeKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UpgradeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| GameError::invalid_command(s))
    }
}

#[derive(Clone, Debug)]
pub struct PowerUp {
    pub position: Vector2D,
    pub kind: PowerUpKind,
    pub size: f64,
    mask: CollisionMask,
}

impl PowerUp {
    pub fn new(position: Vector2D, kind: PowerUpKind) -> Self {
        PowerUp { position, kind, size: POWER_UP_SIZE, mask: CollisionMask::circle(POWER_UP_SIZE as u32) }
    }
}

impl Collider for PowerUp {
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
