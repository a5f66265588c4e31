//! Melee resolution and the player damage pipeline.

use super::types::EnemyId;
use crate::core::labyrinth::Labyrinth;
use crate::core::result::Outcome;
use crate::items::Effect;
use rand::Rng;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    PlayerAttack { damage: u32 },
    EnemyAttack { damage: u32 },
    /// The blow was absorbed by an active ward
    DamageAbsorbed { amount: u32 },
    EnemyDefeated { is_boss: bool },
    PlayerDied,
}

impl<R: Rng> Labyrinth<R> {
    /// Base attack plus weapon and amulet bonuses.
    pub fn attack(&self) -> u32 {
        let equipment = &self.player.equipment;
        self.config
            .base_attack
            .saturating_add(self.equipped_bonus(equipment.weapon, Effect::AttackBoost))
            .saturating_add(self.equipped_bonus(equipment.amulet, Effect::AllBoost))
    }

    /// Base defense plus shield and amulet bonuses.
    pub fn defense(&self) -> u32 {
        let equipment = &self.player.equipment;
        self.config
            .base_defense
            .saturating_add(self.equipped_bonus(equipment.shield, Effect::DefenseBoost))
            .saturating_add(self.equipped_bonus(equipment.amulet, Effect::AllBoost))
    }

    /// The single path through which the player loses health.
    /// Returns the events produced; `PlayerDied` appears at most once per death.
    pub fn take_damage(&mut self, amount: u32, cause: &str) -> Vec<CombatEvent> {
        let mut events = Vec::new();
        if self.player.is_game_over {
            return events;
        }

        if self.player.is_invincible() {
            self.messages
                .push(format!("A shimmering ward absorbs {} damage.", amount));
            events.push(CombatEvent::DamageAbsorbed { amount });
            return events;
        }

        self.player.health = self.player.health.saturating_sub(amount);
        if self.player.health == 0 {
            self.player.deaths += 1;
            self.player.cause_of_death = Some(cause.to_string());
            self.messages
                .push(format!("You have been defeated by {}.", cause));
            self.finish(Outcome::Defeat);
            events.push(CombatEvent::PlayerDied);
        } else {
            self.messages.push(format!(
                "You take {} damage. Health: {}/{}",
                amount, self.player.health, self.player.max_health
            ));
        }
        events
    }

    /// Resolves one exchange between the player and `enemy_id`: the player strikes,
    /// and a surviving enemy strikes back.
    pub fn initiate_combat(&mut self, enemy_id: EnemyId) -> Vec<CombatEvent> {
        let mut events = Vec::new();
        if self.player.is_game_over {
            return events;
        }

        let attack = self.attack();
        let defense = self.defense();
        let Some(enemy) = self.enemies.get_mut(&enemy_id) else {
            return events;
        };
        if enemy.defeated {
            return events;
        }

        let player_damage = attack.saturating_sub(enemy.defense);
        let defeated = enemy.take_damage(player_damage);
        let name = enemy.name.clone();
        let is_boss = enemy.is_boss;
        let enemy_attack = enemy.attack;
        let remaining = enemy.health;

        self.messages
            .push(format!("You hit the {} for {} damage.", name, player_damage));
        events.push(CombatEvent::PlayerAttack {
            damage: player_damage,
        });
        debug!(enemy = %name, player_damage, remaining, "combat exchange");

        if defeated {
            self.placements.remove_enemy(enemy_id);
            self.messages.push(format!("You defeated the {}!", name));
            events.push(CombatEvent::EnemyDefeated { is_boss });
            if is_boss {
                self.player.boss_defeated = true;
                self.messages
                    .push("The Guardian falls. Something glints among the remains.");
                self.grant_key();
            }
            return events;
        }

        let enemy_damage = enemy_attack.saturating_sub(defense);
        self.messages
            .push(format!("The {} hits you for {} damage.", name, enemy_damage));
        events.push(CombatEvent::EnemyAttack {
            damage: enemy_damage,
        });
        let cause = format!("the {}", name);
        events.extend(self.take_damage(enemy_damage, &cause));
        events
    }
}
