//! Configuration constants for the shooter.

use crate::movement::BoundaryPolicy;
use crate::spawner::RefillPolicy;

// Window
pub const WINDOW_TITLE: &str = "Rect Shooter";
pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;

// Player
pub const PLAYER_START_X: i32 = 100;
pub const PLAYER_START_Y: i32 = 100;
pub const PLAYER_WIDTH: i32 = 50;
pub const PLAYER_HEIGHT: i32 = 50;
pub const MOVE_STEP: i32 = 10; // Pixels per directional key press
pub const PLAYER_MAX_X: i32 = WINDOW_WIDTH / 2 - PLAYER_WIDTH; // Player is confined to the left half
pub const PLAYER_MAX_Y: i32 = WINDOW_HEIGHT - PLAYER_HEIGHT;
pub const BOUNDARY_POLICY: BoundaryPolicy = BoundaryPolicy::Wrap;

// Bullets
pub const BULLET_WIDTH: i32 = 25;
pub const BULLET_HEIGHT: i32 = 10;
pub const BULLET_SPEED: i32 = 2; // Pixels per frame, rightward
pub const MUZZLE_GAP: i32 = 2; // Gap between the player's right edge and a new bullet

// Enemies
pub const ENEMY_WIDTH: i32 = 50;
pub const ENEMY_HEIGHT: i32 = 50;
pub const MAX_ENEMIES: usize = 3;
pub const ENEMY_X: i32 = WINDOW_WIDTH - 100;
pub const SPAWN_Y_MIN: i32 = 100;
pub const SPAWN_Y_MAX: i32 = WINDOW_HEIGHT - 100;
pub const REFILL_POLICY: RefillPolicy = RefillPolicy::Shortfall;

// Score label
pub const SCORE_LABEL_X: f32 = 400.0;
pub const SCORE_LABEL_Y: f32 = 500.0;
pub const FONT_SIZE: u16 = 24;

// Keyboard auto-repeat while a movement key is held
pub const KEY_REPEAT_DELAY: f32 = 0.5; // Seconds before the first repeat
pub const KEY_REPEAT_INTERVAL: f32 = 1.0 / 30.0; // Seconds between repeats

// Assets
pub const FONT_ASSET: &str = "open_sans.ttf";
pub const MUSIC_ASSET: &str = "background_music.wav";
pub const HIT_SOUND_ASSET: &str = "piupiu.wav";
pub const MUSIC_VOLUME: f32 = 1.0;
