//! Fixed item and fixture templates for one game.
//!
//! Ids are drawn from the game's RNG when the catalog is built, so two catalogs
//! built from the same seed agree on every id.

use super::types::{AccessorySlot, Effect, Item, ItemId, ItemType, StaticKind};
use crate::core::constants::{ANCIENT_GEAR, LABYRINTH_KEY};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

struct Template {
    name: &'static str,
    description: &'static str,
    item_type: ItemType,
    effect: Option<Effect>,
    value: Option<u32>,
    stackable: bool,
    accessory_slot: Option<AccessorySlot>,
}

const REGULAR_ITEMS: &[Template] = &[
    Template {
        name: "Vial of Lumina",
        description: "A glowing draught that mends wounds.",
        item_type: ItemType::Consumable,
        effect: Some(Effect::Heal),
        value: Some(20),
        stackable: true,
        accessory_slot: None,
    },
    Template {
        name: "Elixir of Renewal",
        description: "Slowly knits flesh back together.",
        item_type: ItemType::Consumable,
        effect: Some(Effect::RegenHealth),
        value: Some(5),
        stackable: true,
        accessory_slot: None,
    },
    Template {
        name: "Draught of Warding",
        description: "Nothing can touch you for a few moments.",
        item_type: ItemType::Consumable,
        effect: Some(Effect::Invincibility),
        value: Some(3),
        stackable: true,
        accessory_slot: None,
    },
    Template {
        name: "Rusty Sword",
        description: "Pitted, but still sharp.",
        item_type: ItemType::Weapon,
        effect: Some(Effect::AttackBoost),
        value: Some(5),
        stackable: false,
        accessory_slot: None,
    },
    Template {
        name: "Obsidian Blade",
        description: "A black edge that drinks the torchlight.",
        item_type: ItemType::Weapon,
        effect: Some(Effect::AttackBoost),
        value: Some(10),
        stackable: false,
        accessory_slot: None,
    },
    Template {
        name: "Wooden Shield",
        description: "Splintered planks bound with iron.",
        item_type: ItemType::Shield,
        effect: Some(Effect::DefenseBoost),
        value: Some(3),
        stackable: false,
        accessory_slot: None,
    },
    Template {
        name: "Tower Shield",
        description: "Heavy enough to hide behind.",
        item_type: ItemType::Shield,
        effect: Some(Effect::DefenseBoost),
        value: Some(6),
        stackable: false,
        accessory_slot: None,
    },
    Template {
        name: "Amulet of Vigor",
        description: "Hums with a faint warmth.",
        item_type: ItemType::Accessory,
        effect: Some(Effect::AllBoost),
        value: Some(2),
        stackable: false,
        accessory_slot: Some(AccessorySlot::Amulet),
    },
    Template {
        name: "Explorer's Compass",
        description: "The needle points at whatever you seek.",
        item_type: ItemType::Accessory,
        effect: Some(Effect::SightBoost),
        value: Some(1),
        stackable: false,
        accessory_slot: Some(AccessorySlot::Compass),
    },
];

const KEY_ITEM: Template = Template {
    name: LABYRINTH_KEY,
    description: "Opens the way out of the labyrinth.",
    item_type: ItemType::Key,
    effect: None,
    value: None,
    stackable: false,
    accessory_slot: None,
};

const GEAR_ITEM: Template = Template {
    name: ANCIENT_GEAR,
    description: "A bronze cog etched with runes.",
    item_type: ItemType::Objective,
    effect: None,
    value: None,
    stackable: false,
    accessory_slot: None,
};

const STATIC_ITEMS: &[(&str, &str, StaticKind)] = &[
    (
        "Ancient Mechanism",
        "A wall of gears with one conspicuous gap.",
        StaticKind::AncientMechanism,
    ),
    (
        "Whispering Well",
        "Voices rise from the still water.",
        StaticKind::WhisperingWell,
    ),
    (
        "Hidden Spring",
        "Clear water trickles from a crack.",
        StaticKind::HiddenSpring,
    ),
    (
        "Mysterious Box",
        "A sealed chest covered in dust.",
        StaticKind::MysteriousBox,
    ),
    (
        "Ancient Altar",
        "Old stains darken the stone.",
        StaticKind::AncientAltar,
    ),
    (
        "Mysterious Staircase",
        "Steps that lead into solid rock.",
        StaticKind::MysteriousStaircase,
    ),
    (
        "Grand Riddle of Eternity",
        "Letters carved deep into the wall.",
        StaticKind::GrandRiddle,
    ),
    (
        "Triggered Trap",
        "A pressure plate, slightly raised.",
        StaticKind::TriggeredTrap,
    ),
];

fn build(template: &Template, rng: &mut impl Rng) -> Item {
    Item {
        id: ItemId::generate(rng),
        name: template.name.to_string(),
        description: template.description.to_string(),
        item_type: template.item_type,
        effect: template.effect,
        value: template.value,
        stackable: template.stackable,
        is_static: false,
        accessory_slot: template.accessory_slot,
        static_kind: None,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Templates eligible for random placement
    pub items: Vec<Item>,
    pub static_items: Vec<Item>,
    pub labyrinth_key: Item,
    pub ancient_gear: Item,
}

impl Catalog {
    pub fn build(rng: &mut impl Rng) -> Self {
        let items = REGULAR_ITEMS.iter().map(|t| build(t, rng)).collect();
        let labyrinth_key = build(&KEY_ITEM, rng);
        let ancient_gear = build(&GEAR_ITEM, rng);
        let static_items = STATIC_ITEMS
            .iter()
            .map(|&(name, description, kind)| Item {
                id: ItemId::generate(rng),
                name: name.to_string(),
                description: description.to_string(),
                item_type: ItemType::Static,
                effect: None,
                value: None,
                stackable: false,
                is_static: true,
                accessory_slot: None,
                static_kind: Some(kind),
            })
            .collect();

        Self {
            items,
            static_items,
            labyrinth_key,
            ancient_gear,
        }
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.all().find(|item| item.id == id)
    }

    pub fn by_name(&self, name: &str) -> Option<&Item> {
        self.all().find(|item| item.name == name)
    }

    pub fn all(&self) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .chain(self.static_items.iter())
            .chain([&self.labyrinth_key, &self.ancient_gear])
    }

    pub fn random_item(&self, rng: &mut impl Rng) -> Option<&Item> {
        self.items.choose(rng)
    }

    pub fn random_static_item(&self, rng: &mut impl Rng) -> Option<&Item> {
        self.static_items.choose(rng)
    }
}
