use rps_game_core::{MoveSet, Result};

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Move names as given on the command line
    pub moves: Vec<String>,
    /// Prompt printed before each line of input
    pub prompt: String,
    /// Print each finished round as a JSON transcript line
    pub show_transcript: bool,
}

impl GameConfig {
    /// Validate the move names
    pub fn move_set(&self) -> Result<MoveSet> {
        MoveSet::new(self.moves.iter().cloned())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            moves: vec![
                "Rock".to_string(),
                "Paper".to_string(),
                "Scissors".to_string(),
            ],
            prompt: "> ".to_string(),
            show_transcript: false,
        }
    }
}
