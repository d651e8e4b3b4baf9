// Error types: fatal startup failures and best-effort audio failures

use crate::types::SoundEffect;
use thiserror::Error;

/// Startup errors. Any of these ends the process.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Asset '{0}' not found")]
    AssetNotFound(String),
    #[error("Failed to load font '{name}': {reason}")]
    FontLoad { name: String, reason: String },
    #[error("Failed to load sound '{name}': {reason}")]
    SoundLoad { name: String, reason: String },
}

/// Audio playback errors. Logged and ignored.
#[derive(Error, Debug, PartialEq, Eq, Copy, Clone)]
pub enum AudioError {
    #[error("Sound effect {0:?} is not loaded")]
    NotLoaded(SoundEffect),
    #[error("Background music is not loaded")]
    MusicNotLoaded,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_std_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}

    #[test]
    fn test_startup_errors_are_std_errors() {
        let errors = [
            GameError::AssetNotFound("open_sans.ttf".to_string()),
            GameError::FontLoad {
                name: "open_sans.ttf".to_string(),
                reason: "bad header".to_string(),
            },
            GameError::SoundLoad {
                name: "piupiu.wav".to_string(),
                reason: "truncated".to_string(),
            },
        ];
        for err in &errors {
            assert_std_error(err);
        }
        assert_eq!(
            errors[1].to_string(),
            "Failed to load font 'open_sans.ttf': bad header"
        );
        assert_eq!(
            errors[2].to_string(),
            "Failed to load sound 'piupiu.wav': truncated"
        );
    }

    #[test]
    fn test_audio_error_messages() {
        assert_std_error(&AudioError::MusicNotLoaded);
        assert_eq!(
            AudioError::NotLoaded(SoundEffect::Hit).to_string(),
            "Sound effect Hit is not loaded"
        );
    }
}
