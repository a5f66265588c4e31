use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::{Builder, Uuid};

/// Identifier of an item template. Copies in inventory keep their template's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    pub fn generate(rng: &mut impl Rng) -> Self {
        Self(Builder::from_random_bytes(rng.gen()).into_uuid())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemType {
    Consumable,
    Weapon,
    Shield,
    Accessory,
    Key,
    Objective,
    Static,
}

impl ItemType {
    /// Items of these types are picked up as soon as the player walks onto them.
    pub fn is_auto_pickup(self) -> bool {
        matches!(self, ItemType::Key | ItemType::Objective)
    }

    pub fn is_equippable(self) -> bool {
        matches!(
            self,
            ItemType::Weapon | ItemType::Shield | ItemType::Accessory
        )
    }
}

/// Which accessory sub-slot an accessory occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessorySlot {
    Amulet,
    Compass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Heal,
    RegenHealth,
    Invincibility,
    AttackBoost,
    DefenseBoost,
    AllBoost,
    SightBoost,
}

/// Behavior of an environment fixture when the player interacts with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaticKind {
    AncientMechanism,
    WhisperingWell,
    HiddenSpring,
    MysteriousBox,
    AncientAltar,
    MysteriousStaircase,
    GrandRiddle,
    TriggeredTrap,
    /// Fixtures with no handler
    Inert,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub item_type: ItemType,
    pub effect: Option<Effect>,
    pub value: Option<u32>,
    pub stackable: bool,
    pub is_static: bool,
    pub accessory_slot: Option<AccessorySlot>,
    pub static_kind: Option<StaticKind>,
}

impl Item {
    /// Bonus this item grants for `effect`, zero if it carries a different one.
    pub fn bonus_for(&self, effect: Effect) -> u32 {
        match self.effect {
            Some(e) if e == effect => self.value.unwrap_or(0),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sword() -> Item {
        Item {
            id: ItemId(Uuid::nil()),
            name: "Rusty Sword".to_string(),
            description: String::new(),
            item_type: ItemType::Weapon,
            effect: Some(Effect::AttackBoost),
            value: Some(5),
            stackable: false,
            is_static: false,
            accessory_slot: None,
            static_kind: None,
        }
    }

    #[test]
    fn test_item_ids_are_reproducible_per_seed() {
        let a = ItemId::generate(&mut ChaCha8Rng::seed_from_u64(7));
        let b = ItemId::generate(&mut ChaCha8Rng::seed_from_u64(7));
        let c = ItemId::generate(&mut ChaCha8Rng::seed_from_u64(8));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_bonus_for_matching_effect_only() {
        let item = sword();
        assert_eq!(item.bonus_for(Effect::AttackBoost), 5);
        assert_eq!(item.bonus_for(Effect::DefenseBoost), 0);
    }

    #[test]
    fn test_auto_pickup_types() {
        assert!(ItemType::Key.is_auto_pickup());
        assert!(ItemType::Objective.is_auto_pickup());
        assert!(!ItemType::Consumable.is_auto_pickup());
        assert!(!ItemType::Weapon.is_auto_pickup());
    }
}
