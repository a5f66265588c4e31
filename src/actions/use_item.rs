use crate::core::constants::REGEN_DURATION_TURNS;
use crate::core::labyrinth::Labyrinth;
use crate::items::{Effect, EquipmentSlot, Item, ItemId, ItemType};
use crate::player::{ActiveEffect, EffectKind};
use rand::Rng;
use tracing::debug;

impl<R: Rng> Labyrinth<R> {
    /// Uses an inventory item: drinks consumables, equips gear, and unequips
    /// gear that is already equipped.
    pub fn use_item(&mut self, item_id: ItemId, player_name: &str, elapsed_secs: u64) {
        self.stamp(player_name, elapsed_secs);
        if !self.begin_action() {
            return;
        }

        let Some(entry) = self.player.inventory.get(item_id) else {
            self.messages.push("You don't have that item.");
            return;
        };
        let item = entry.item.clone();
        let equipped = entry.is_equipped;
        self.advance_effects();
        if equipped {
            self.unequip(&item);
            return;
        }

        match item.item_type {
            ItemType::Consumable => self.consume(&item),
            ItemType::Weapon | ItemType::Shield | ItemType::Accessory => self.equip(&item),
            ItemType::Key | ItemType::Objective | ItemType::Static => {
                self.messages
                    .push(format!("You can't use the {} here.", item.name));
            }
        }
    }

    fn consume(&mut self, item: &Item) {
        let value = item.value.unwrap_or(0);
        match item.effect {
            Some(Effect::Heal) => {
                let restored = self.player.heal(value);
                self.messages.push(format!(
                    "You use the {} and recover {} health. ({}/{})",
                    item.name, restored, self.player.health, self.player.max_health
                ));
            }
            Some(Effect::RegenHealth) => {
                self.player.add_effect(ActiveEffect {
                    kind: EffectKind::Regeneration,
                    magnitude: value,
                    remaining_turns: REGEN_DURATION_TURNS,
                });
                self.messages.push(format!(
                    "You use the {}. Warmth spreads through you.",
                    item.name
                ));
            }
            Some(Effect::Invincibility) => {
                self.player.add_effect(ActiveEffect {
                    kind: EffectKind::Invincibility,
                    magnitude: 0,
                    remaining_turns: value,
                });
                self.messages.push(format!(
                    "You use the {}. A shimmering ward surrounds you.",
                    item.name
                ));
            }
            _ => {
                self.messages
                    .push(format!("You use the {}, but nothing happens.", item.name));
            }
        }
        self.player.inventory.consume_one(item.id);
        debug!(item = %item.name, "consumed");
    }

    /// Equips `item`, displacing whatever occupied its slot.
    fn equip(&mut self, item: &Item) {
        let Some(slot) = EquipmentSlot::for_item(item) else {
            return;
        };

        if let Some(previous) = self.player.equipment.get(slot) {
            if let Some(entry) = self.player.inventory.get_mut(previous) {
                entry.is_equipped = false;
                let name = entry.item.name.clone();
                self.messages.push(format!("You unequip the {}.", name));
            }
        }

        self.player.equipment.set(slot, Some(item.id));
        if let Some(entry) = self.player.inventory.get_mut(item.id) {
            entry.is_equipped = true;
        }
        self.messages
            .push(format!("You equip the {} ({}).", item.name, slot.name()));
        if slot == EquipmentSlot::Compass {
            self.refresh_visited();
        }
    }

    fn unequip(&mut self, item: &Item) {
        if let Some(slot) = EquipmentSlot::for_item(item) {
            if self.player.equipment.get(slot) == Some(item.id) {
                self.player.equipment.set(slot, None);
            }
        }
        if let Some(entry) = self.player.inventory.get_mut(item.id) {
            entry.is_equipped = false;
        }
        self.messages.push(format!("You unequip the {}.", item.name));
    }
}
