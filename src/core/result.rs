use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Victory,
    Defeat,
}

/// Record handed to the leaderboard once a game ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub outcome: Outcome,
    pub name: String,
    pub time_secs: u64,
    pub deaths: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause_of_death: Option<String>,
}

/// Caller-supplied identity of the current session. Carried through to the
/// result record, never used by game logic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStamp {
    pub player_name: String,
    pub elapsed_secs: u64,
}

impl SessionStamp {
    pub fn update(&mut self, player_name: &str, elapsed_secs: u64) {
        if self.player_name != player_name {
            self.player_name = player_name.to_string();
        }
        self.elapsed_secs = elapsed_secs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_victory_omits_cause_of_death() {
        let result = GameResult {
            outcome: Outcome::Victory,
            name: "ada".to_string(),
            time_secs: 321,
            deaths: 2,
            cause_of_death: None,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"Victory\""));
        assert!(!json.contains("cause_of_death"));
    }

    #[test]
    fn test_stamp_update() {
        let mut stamp = SessionStamp::default();
        stamp.update("ada", 10);
        stamp.update("ada", 12);
        assert_eq!(stamp.player_name, "ada");
        assert_eq!(stamp.elapsed_secs, 12);
    }
}
