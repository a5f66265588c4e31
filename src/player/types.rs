use crate::dungeon::Position;
use crate::items::{Equipment, Inventory};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Heals `magnitude` at the start of every player action
    Regeneration,
    /// All incoming damage is absorbed
    Invincibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub kind: EffectKind,
    pub magnitude: u32,
    pub remaining_turns: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Position,
    pub health: u32,
    pub max_health: u32,
    pub deaths: u32,
    pub inventory: Inventory,
    pub equipment: Equipment,
    pub search_radius: u32,
    pub effects: Vec<ActiveEffect>,
    pub is_game_over: bool,
    pub cause_of_death: Option<String>,
    pub boss_defeated: bool,
}

impl Player {
    pub fn new(position: Position, max_health: u32, search_radius: u32, deaths: u32) -> Self {
        Self {
            position,
            health: max_health,
            max_health,
            deaths,
            inventory: Inventory::new(),
            equipment: Equipment::default(),
            search_radius,
            effects: Vec::new(),
            is_game_over: false,
            cause_of_death: None,
            boss_defeated: false,
        }
    }

    /// Heals up to max health, returning the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(self.max_health);
        self.health - before
    }

    pub fn is_invincible(&self) -> bool {
        self.effects
            .iter()
            .any(|e| e.kind == EffectKind::Invincibility && e.remaining_turns > 0)
    }

    /// Adds an effect, refreshing the duration if one of the same kind is active.
    pub fn add_effect(&mut self, effect: ActiveEffect) {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == effect.kind) {
            existing.remaining_turns = existing.remaining_turns.max(effect.remaining_turns);
            existing.magnitude = existing.magnitude.max(effect.magnitude);
        } else {
            self.effects.push(effect);
        }
    }

    /// Applies one turn of active effects and drops expired ones.
    /// Returns the health restored by regeneration.
    pub fn tick_effects(&mut self) -> u32 {
        let regen: u32 = self
            .effects
            .iter()
            .filter(|e| e.kind == EffectKind::Regeneration && e.remaining_turns > 0)
            .map(|e| e.magnitude)
            .sum();
        for effect in &mut self.effects {
            effect.remaining_turns = effect.remaining_turns.saturating_sub(1);
        }
        self.effects.retain(|e| e.remaining_turns > 0);
        if regen > 0 && !self.is_game_over {
            self.heal(regen)
        } else {
            0
        }
    }
}
