use super::types::{AccessorySlot, Item, ItemId, ItemType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Shield,
    Amulet,
    Compass,
}

impl EquipmentSlot {
    /// Slot an item goes into, `None` for items that cannot be equipped.
    pub fn for_item(item: &Item) -> Option<Self> {
        match item.item_type {
            ItemType::Weapon => Some(EquipmentSlot::Weapon),
            ItemType::Shield => Some(EquipmentSlot::Shield),
            ItemType::Accessory => match item.accessory_slot {
                Some(AccessorySlot::Compass) => Some(EquipmentSlot::Compass),
                Some(AccessorySlot::Amulet) | None => Some(EquipmentSlot::Amulet),
            },
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "weapon",
            EquipmentSlot::Shield => "shield",
            EquipmentSlot::Amulet => "amulet",
            EquipmentSlot::Compass => "compass",
        }
    }
}

/// Equipped item ids. The items themselves stay in the inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<ItemId>,
    pub shield: Option<ItemId>,
    pub amulet: Option<ItemId>,
    pub compass: Option<ItemId>,
}

impl Equipment {
    pub fn get(&self, slot: EquipmentSlot) -> Option<ItemId> {
        match slot {
            EquipmentSlot::Weapon => self.weapon,
            EquipmentSlot::Shield => self.shield,
            EquipmentSlot::Amulet => self.amulet,
            EquipmentSlot::Compass => self.compass,
        }
    }

    pub fn set(&mut self, slot: EquipmentSlot, item: Option<ItemId>) {
        match slot {
            EquipmentSlot::Weapon => self.weapon = item,
            EquipmentSlot::Shield => self.shield = item,
            EquipmentSlot::Amulet => self.amulet = item,
            EquipmentSlot::Compass => self.compass = item,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub item: Item,
    pub quantity: u32,
    pub is_equipped: bool,
}

/// Outcome of adding an item to the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Stacked(u32),
    /// A non-stackable duplicate; the inventory is unchanged
    AlreadyHeld,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    entries: BTreeMap<ItemId, InventoryEntry>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a copy of `item`, stacking onto an existing entry when allowed.
    pub fn add(&mut self, item: &Item) -> AddOutcome {
        match self.entries.get_mut(&item.id) {
            Some(entry) if item.stackable => {
                entry.quantity += 1;
                AddOutcome::Stacked(entry.quantity)
            }
            Some(_) => AddOutcome::AlreadyHeld,
            None => {
                self.entries.insert(
                    item.id,
                    InventoryEntry {
                        item: item.clone(),
                        quantity: 1,
                        is_equipped: false,
                    },
                );
                AddOutcome::Added
            }
        }
    }

    /// Removes one unit of `id`, dropping the entry when none remain.
    /// Returns false if the item was not held.
    pub fn consume_one(&mut self, id: ItemId) -> bool {
        let Some(entry) = self.entries.get_mut(&id) else {
            return false;
        };
        if entry.quantity > 1 {
            entry.quantity -= 1;
        } else {
            self.entries.remove(&id);
        }
        true
    }

    pub fn get(&self, id: ItemId) -> Option<&InventoryEntry> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut InventoryEntry> {
        self.entries.get_mut(&id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&InventoryEntry> {
        self.entries.values().find(|e| e.item.name == name)
    }

    pub fn has_item_named(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    pub fn entries(&self) -> impl Iterator<Item = &InventoryEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
