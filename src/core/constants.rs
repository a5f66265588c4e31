// Grid
pub const MAP_WIDTH: usize = 20;
pub const MAP_HEIGHT: usize = 20;
pub const NUM_FLOORS: usize = 3;

// Player
pub const PLAYER_MAX_HEALTH: u32 = 100;
pub const PLAYER_BASE_ATTACK: u32 = 10;
pub const PLAYER_BASE_DEFENSE: u32 = 5;
pub const INITIAL_SEARCH_RADIUS: u32 = 1;
pub const MAX_SEARCH_RADIUS: u32 = 3;

// Per-floor population
pub const ITEMS_PER_FLOOR: usize = 5;
pub const STATIC_ITEMS_PER_FLOOR: usize = 2;
pub const BASE_ENEMIES_PER_FLOOR: usize = 3;
pub const EXTRA_ENEMIES_PER_DEPTH: usize = 2;

// Generation chances
pub const TORCH_CHANCE: f64 = 0.10;
pub const LIT_TORCH_CHANCE: f64 = 0.30;
pub const HIDDEN_PASSAGE_CHANCE: f64 = 0.10;
pub const BOSS_AMBIENT_CHANCE: f64 = 0.05;

// Hazards
pub const TRAP_DAMAGE: u32 = 10;

// Enemies get this much further than the search radius before they notice the player
pub const PERCEPTION_BONUS: u32 = 2;

// Boss stat multipliers: (health x max health, attack x base attack, defense x base defense)
pub const BOSS_HEALTH_MULTIPLIER: u32 = 5;
pub const BOSS_ATTACK_MULTIPLIER: u32 = 2;
pub const BOSS_DEFENSE_MULTIPLIER: u32 = 2;
pub const BOSS_SPEED_MS: u64 = 600;

// Timed effects
pub const REGEN_DURATION_TURNS: u32 = 5;

// Enemy tick cadence (advisory, the external driver owns the timer)
pub const ENEMY_TICK_BASE_MS: u64 = 1000;
pub const ENEMY_TICK_STEP_MS: u64 = 200;
pub const ENEMY_TICK_MIN_MS: u64 = 400;

// Well-known item names
pub const LABYRINTH_KEY: &str = "Labyrinth Key";
pub const ANCIENT_GEAR: &str = "Ancient Gear";
