use std::path::PathBuf;

use thiserror::Error;

use crate::quiz::FirstTurn;

const DEFAULT_QUESTIONS_PATH: &str = "questions.json";
const DEFAULT_DB_PATH: &str = "db.sqlite";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("QUIZ_FIRST_TURN must be `record` or `start`, got `{0}`")]
    FirstTurn(String),
}

/// Bot settings. `TELOXIDE_TOKEN` is read separately by `Bot::from_env`.
#[derive(Debug, Clone)]
pub struct Config {
    pub questions_path: PathBuf,
    pub db_path: String,
    pub first_turn: FirstTurn,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let first_turn = match lookup("QUIZ_FIRST_TURN") {
            Some(value) => value.parse().map_err(ConfigError::FirstTurn)?,
            None => FirstTurn::default(),
        };

        Ok(Self {
            questions_path: lookup("QUIZ_QUESTIONS_PATH")
                .unwrap_or_else(|| DEFAULT_QUESTIONS_PATH.to_string())
                .into(),
            db_path: lookup("QUIZ_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            first_turn,
        })
    }
}
