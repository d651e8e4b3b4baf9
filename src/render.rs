use crate::assets::require_asset;
use crate::config::{FONT_ASSET, FONT_SIZE, SCORE_LABEL_X, SCORE_LABEL_Y};
use crate::error::GameError;
use crate::score::ScoreLabel;
use crate::types::Rect;
use crate::world::World;
use log::info;
use macroquad::prelude::*;

const BACKGROUND_COLOR: Color = BLACK;
const PLAYER_COLOR: Color = RED;
const BULLET_COLOR: Color = BLUE;
const ENEMY_COLOR: Color = GREEN;
const LABEL_COLOR: Color = WHITE;

fn fill_rect(rect: &Rect, color: Color) {
    draw_rectangle(
        rect.x as f32,
        rect.y as f32,
        rect.w as f32,
        rect.h as f32,
        color,
    );
}

// Handles drawing the game state using macroquad
#[derive(Default)]
pub struct Renderer {
    ui_font: Option<Font>,
}

impl Renderer {
    pub fn new() -> Self {
        Default::default()
    }

    // Load the score font. The label cannot be drawn without it, so failure is fatal.
    pub fn load_font(&mut self) -> Result<(), GameError> {
        let bytes = require_asset(FONT_ASSET)?;
        let font = load_ttf_font_from_bytes(&bytes).map_err(|e| GameError::FontLoad {
            name: FONT_ASSET.to_string(),
            reason: e.to_string(),
        })?;
        self.ui_font = Some(font);
        info!("Font '{}' loaded.", FONT_ASSET);
        Ok(())
    }

    pub fn draw_frame(&self, world: &World, label: &ScoreLabel) {
        clear_background(BACKGROUND_COLOR);

        fill_rect(&world.player, PLAYER_COLOR);
        for bullet in &world.bullets {
            fill_rect(bullet, BULLET_COLOR);
        }
        for enemy in &world.enemies {
            fill_rect(enemy, ENEMY_COLOR);
        }

        self.draw_label(label.text(), SCORE_LABEL_X, SCORE_LABEL_Y);
    }

    // (x, y) is the top-left corner of the text box; macroquad draws from the baseline
    fn draw_label(&self, text: &str, x: f32, y: f32) {
        let params = TextParams {
            font: self.ui_font.as_ref(),
            font_size: FONT_SIZE,
            color: LABEL_COLOR,
            ..Default::default()
        };
        let dims = measure_text(text, self.ui_font.as_ref(), FONT_SIZE, 1.0);
        draw_text_ex(text, x, y + dims.offset_y, params);
    }
}
