//! Room interaction: static fixtures, stairs, the exit and the boss doors.

use crate::core::constants::{ANCIENT_GEAR, LABYRINTH_KEY};
use crate::core::labyrinth::Labyrinth;
use crate::core::result::Outcome;
use crate::dungeon::Position;
use crate::items::{Item, StaticKind};
use rand::Rng;
use tracing::debug;

impl<R: Rng> Labyrinth<R> {
    /// Interacts with whatever the current room offers, highest priority first:
    /// a revealed static item, stairs down, stairs up, the exit, then the boss doors.
    pub fn interact(&mut self, player_name: &str, elapsed_secs: u64) {
        self.stamp(player_name, elapsed_secs);
        if !self.begin_action() {
            return;
        }

        let here = self.player.position;
        if self.placements.revealed.contains(&here) {
            let fixture = self
                .placements
                .static_items
                .get(&here)
                .and_then(|&id| self.catalog.get(id))
                .cloned();
            if let Some(fixture) = fixture {
                self.advance_effects();
                self.use_fixture(here, &fixture);
                return;
            }
        }

        let Some(room) = self.current_room() else {
            return;
        };
        let (down, up, exit, boss_entrance, boss_exit) = (
            room.has_stairs_down,
            room.has_stairs_up,
            room.has_exit,
            room.has_boss_entrance,
            room.has_boss_exit,
        );

        if down {
            self.descend();
        } else if up {
            self.ascend();
        } else if exit {
            self.try_escape();
        } else if boss_entrance {
            self.advance_effects();
            self.messages
                .push("Massive doors loom here, carved with warnings of the Guardian.");
        } else if boss_exit {
            self.advance_effects();
            self.messages
                .push("Beyond these doors, the Guardian's lair lies silent.");
        } else {
            self.messages.push("There is nothing to interact with here.");
        }
    }

    fn descend(&mut self) {
        let floor = self.current_floor;
        let Some(link) = self.stairs.iter().find(|l| l.upper == floor).copied() else {
            self.messages.push("Rubble blocks the way down.");
            return;
        };
        self.advance_effects();
        self.relocate_player(link.up);
        debug!(floor = link.up.floor, "descended");
        self.messages
            .push(format!("You descend to floor {}.", link.up.floor + 1));
    }

    fn ascend(&mut self) {
        let floor = self.current_floor;
        let link = floor
            .checked_sub(1)
            .and_then(|upper| self.stairs.iter().find(|l| l.upper == upper).copied());
        let Some(link) = link else {
            self.messages.push("Rubble blocks the way up.");
            return;
        };
        self.advance_effects();
        self.relocate_player(link.down);
        debug!(floor = link.down.floor, "ascended");
        self.messages
            .push(format!("You climb back up to floor {}.", link.down.floor + 1));
    }

    fn try_escape(&mut self) {
        if !self.player.inventory.has_item_named(LABYRINTH_KEY) {
            self.messages
                .push("The exit is locked. You need the Labyrinth Key.");
            return;
        }
        self.advance_effects();
        self.player.boss_defeated = true;
        self.messages
            .push("The Labyrinth Key turns. You escape the labyrinth!");
        self.finish(Outcome::Victory);
    }

    /// Static fixture handlers, one per `StaticKind`.
    fn use_fixture(&mut self, at: Position, fixture: &Item) {
        let Some(kind) = fixture.static_kind else {
            self.messages.push("Nothing happens.");
            return;
        };
        debug!(fixture = %fixture.name, at = %at, "interact");

        match kind {
            StaticKind::AncientMechanism => {
                let Some(gear) = self
                    .player
                    .inventory
                    .find_by_name(ANCIENT_GEAR)
                    .map(|entry| entry.item.id)
                else {
                    self.messages
                        .push("The mechanism is missing a gear. It will not budge.");
                    return;
                };
                let Some(direction) = self.open_hidden_passage() else {
                    self.messages
                        .push("The mechanism turns, but every wall here is already open.");
                    return;
                };
                self.player.inventory.consume_one(gear);
                self.remove_fixture(at);
                self.messages.push(format!(
                    "The Ancient Gear locks into place. A passage grinds open to the {}.",
                    direction.name()
                ));
            }
            StaticKind::WhisperingWell => {
                self.player.health = self.player.max_health;
                self.messages.push(format!(
                    "The well whispers and your wounds close. Health: {}/{}",
                    self.player.health, self.player.max_health
                ));
            }
            StaticKind::HiddenSpring => {
                if self.player.search_radius < self.config.max_search_radius {
                    self.player.search_radius += 1;
                    self.refresh_visited();
                    self.messages.push(format!(
                        "The spring sharpens your senses. Search radius: {}",
                        self.player.search_radius
                    ));
                } else {
                    self.messages
                        .push("The spring's water tastes sweet, but your senses are already keen.");
                }
            }
            StaticKind::MysteriousBox => {
                self.remove_fixture(at);
                self.messages.push("The box creaks open.");
                self.grant_key();
            }
            StaticKind::AncientAltar => {
                self.messages
                    .push("Faded offerings rest on the altar. You feel watched.");
            }
            StaticKind::MysteriousStaircase => {
                self.messages
                    .push("The staircase spirals up into solid stone and ends there.");
            }
            StaticKind::GrandRiddle => {
                self.messages.push(
                    "\"What walks the halls forever yet never leaves?\" The answer escapes you.",
                );
            }
            StaticKind::TriggeredTrap => {
                self.remove_fixture(at);
                self.messages.push("Click. A hidden trap springs!");
                let damage = self.config.trap_damage;
                self.take_damage(damage, "a hidden trap");
            }
            StaticKind::Inert => {
                self.messages.push("Nothing happens.");
            }
        }
    }

    fn remove_fixture(&mut self, at: Position) {
        self.placements.static_items.remove(&at);
        self.placements.revealed.remove(&at);
    }
}
