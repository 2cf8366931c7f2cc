use engine::config::{Validate, load_yaml_config};
use engine::games::memory::{DEFAULT_PAIR_COUNT, MAX_PAIR_COUNT, MIN_PAIR_COUNT};
use engine::games::tictactoe::Difficulty;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub difficulty: Difficulty,
    pub memory_pairs: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            memory_pairs: DEFAULT_PAIR_COUNT,
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), String> {
        if self.memory_pairs < MIN_PAIR_COUNT {
            return Err(format!("memory_pairs must be at least {}", MIN_PAIR_COUNT));
        }
        if self.memory_pairs > MAX_PAIR_COUNT {
            return Err(format!("memory_pairs must not exceed {}", MAX_PAIR_COUNT));
        }
        Ok(())
    }
}

pub fn load_app_config(file_path: &str) -> Result<AppConfig, String> {
    load_yaml_config(file_path)
}
