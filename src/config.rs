//! Board configuration, loadable from a JSON file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use shakmaty::Role;
use thiserror::Error;

/// Environment variable naming the JSON config file
pub const CONFIG_ENV_VAR: &str = "LICHESS_BOARD_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Piece a pawn becomes when dropped on the last rank
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PromotionPiece {
    #[default]
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionPiece {
    pub fn role(self) -> Role {
        match self {
            PromotionPiece::Queen => Role::Queen,
            PromotionPiece::Rook => Role::Rook,
            PromotionPiece::Bishop => Role::Bishop,
            PromotionPiece::Knight => Role::Knight,
        }
    }
}

/// Display and behaviour options for the board widget
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BoardConfig {
    /// Duration of move and undo animations, in milliseconds
    pub animation_ms: u64,
    /// Draw rank and file labels along the board edges
    pub show_coordinates: bool,
    /// Draw dots and rings on the legal targets of the selected piece
    pub show_legal_moves: bool,
    /// Tint the from/to squares of the last move
    pub show_last_move: bool,
    /// Promotion chosen for pawns dropped on the last rank
    pub promotion: PromotionPiece,
    /// Initial orientation (black at the bottom when true)
    pub flipped: bool,
    /// Space between the widget edge and the board, in pixels
    pub padding: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            animation_ms: 320,
            show_coordinates: true,
            show_legal_moves: true,
            show_last_move: true,
            promotion: PromotionPiece::Queen,
            flipped: false,
            padding: 20.0,
        }
    }
}

impl BoardConfig {
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    pub fn from_json(path: &str, text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;
        Self::from_json(&display, &text)
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], falling back to defaults.
    pub fn load() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::from_path(&path) {
            Ok(config) => {
                tracing::info!(%path, "loaded board config");
                config
            }
            Err(err) => {
                tracing::warn!(%err, "using default board config");
                Self::default()
            }
        }
    }

    /// JSON schema of the config file, for editor tooling
    pub fn schema() -> schemars::Schema {
        schemars::schema_for!(BoardConfig)
    }
}
