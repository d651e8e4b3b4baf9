pub mod assets;
pub mod audio;
pub mod collision;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod movement;
pub mod render;
pub mod score;
pub mod spawner;
pub mod types;
pub mod world;
