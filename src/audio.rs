use crate::assets::require_asset;
use crate::config::{HIT_SOUND_ASSET, MUSIC_ASSET, MUSIC_VOLUME};
use crate::error::{AudioError, GameError};
use crate::types::SoundEffect;
use log::info;
use macroquad::audio::{
    PlaySoundParams, Sound, load_sound_from_bytes, play_sound, play_sound_once, stop_sound,
};

/// Fire-and-forget sound output used by the game loop
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect) -> Result<(), AudioError>;
}

#[derive(Default)]
pub struct AudioManager {
    music: Option<Sound>,
    hit_sound: Option<Sound>,
}

async fn load_embedded_sound(name: &str) -> Result<Sound, GameError> {
    let bytes = require_asset(name)?;
    load_sound_from_bytes(&bytes)
        .await
        .map_err(|e| GameError::SoundLoad {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

impl AudioManager {
    pub fn new() -> Self {
        Default::default()
    }

    // Load the music and effects. A missing asset is fatal.
    pub async fn load_assets(&mut self) -> Result<(), GameError> {
        self.music = Some(load_embedded_sound(MUSIC_ASSET).await?);
        self.hit_sound = Some(load_embedded_sound(HIT_SOUND_ASSET).await?);
        info!("Audio assets loaded.");
        Ok(())
    }

    // Loop the background music until stopped
    pub fn start_music(&self) -> Result<(), AudioError> {
        let music = self.music.as_ref().ok_or(AudioError::MusicNotLoaded)?;
        play_sound(
            music,
            PlaySoundParams {
                looped: true,
                volume: MUSIC_VOLUME,
            },
        );
        Ok(())
    }

    pub fn stop_music(&self) {
        if let Some(ref music) = self.music {
            stop_sound(music);
        }
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, effect: SoundEffect) -> Result<(), AudioError> {
        let sound = match effect {
            SoundEffect::Hit => self.hit_sound.as_ref(),
        };
        let sound = sound.ok_or(AudioError::NotLoaded(effect))?;
        play_sound_once(sound);
        Ok(())
    }
}
