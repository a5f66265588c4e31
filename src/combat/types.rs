use crate::core::config::LabyrinthConfig;
use crate::core::constants::{
    BOSS_ATTACK_MULTIPLIER, BOSS_DEFENSE_MULTIPLIER, BOSS_HEALTH_MULTIPLIER, BOSS_SPEED_MS,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::{Builder, Uuid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(pub Uuid);

impl EnemyId {
    pub fn generate(rng: &mut impl Rng) -> Self {
        Self(Builder::from_random_bytes(rng.gen()).into_uuid())
    }
}

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyArchetype {
    Goblin,
    Skeleton,
    Shadow,
}

impl EnemyArchetype {
    pub const ALL: [EnemyArchetype; 3] = [
        EnemyArchetype::Goblin,
        EnemyArchetype::Skeleton,
        EnemyArchetype::Shadow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EnemyArchetype::Goblin => "Goblin",
            EnemyArchetype::Skeleton => "Skeleton",
            EnemyArchetype::Shadow => "Shadow",
        }
    }

    /// (health, attack, defense, speed in ms)
    pub fn stats(self) -> (u32, u32, u32, u64) {
        match self {
            EnemyArchetype::Goblin => (30, 8, 2, 1000),
            EnemyArchetype::Skeleton => (40, 10, 4, 1200),
            EnemyArchetype::Shadow => (25, 12, 1, 800),
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        *Self::ALL.choose(rng).unwrap_or(&EnemyArchetype::Goblin)
    }
}

pub const BOSS_NAME: &str = "Labyrinth Guardian";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    /// Movement tick interval in milliseconds
    pub speed_ms: u64,
    pub defeated: bool,
    pub is_boss: bool,
}

impl Enemy {
    pub fn from_archetype(archetype: EnemyArchetype, rng: &mut impl Rng) -> Self {
        let (health, attack, defense, speed_ms) = archetype.stats();
        Self {
            id: EnemyId::generate(rng),
            name: archetype.name().to_string(),
            health,
            max_health: health,
            attack,
            defense,
            speed_ms,
            defeated: false,
            is_boss: false,
        }
    }

    /// The boss scales off the player's own base stats.
    pub fn boss(config: &LabyrinthConfig, rng: &mut impl Rng) -> Self {
        let health = config.player_max_health.saturating_mul(BOSS_HEALTH_MULTIPLIER);
        Self {
            id: EnemyId::generate(rng),
            name: BOSS_NAME.to_string(),
            health,
            max_health: health,
            attack: config.base_attack.saturating_mul(BOSS_ATTACK_MULTIPLIER),
            defense: config.base_defense.saturating_mul(BOSS_DEFENSE_MULTIPLIER),
            speed_ms: BOSS_SPEED_MS,
            defeated: false,
            is_boss: true,
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.defeated && self.health > 0
    }

    /// Applies damage, returning true if this blow defeated the enemy.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 && !self.defeated {
            self.defeated = true;
            return true;
        }
        false
    }
}
