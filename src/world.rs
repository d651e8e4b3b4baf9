use crate::collision::collides;
use crate::config::{
    BULLET_HEIGHT, BULLET_SPEED, BULLET_WIDTH, MUZZLE_GAP, PLAYER_HEIGHT, PLAYER_START_X,
    PLAYER_START_Y, PLAYER_WIDTH, WINDOW_WIDTH,
};
use crate::debug_collision;
use crate::movement::{BoundaryPolicy, step_player};
use crate::types::{Direction, Rect};

/// Entity store: the player, live bullets and live enemies, plus the score.
///
/// Bullets and enemies are removed with `Vec::remove`, so the survivors keep their
/// relative order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    pub player: Rect,
    pub bullets: Vec<Rect>,
    pub enemies: Vec<Rect>,
    pub score: u32,
}

impl World {
    pub fn new() -> Self {
        World {
            player: Rect::new(PLAYER_START_X, PLAYER_START_Y, PLAYER_WIDTH, PLAYER_HEIGHT),
            bullets: Vec::new(),
            enemies: Vec::new(),
            score: 0,
        }
    }

    pub fn move_player(&mut self, direction: Direction, policy: BoundaryPolicy) {
        step_player(&mut self.player, direction, policy);
    }

    /// Spawn a bullet just ahead of the player's right edge
    pub fn fire(&mut self) -> Rect {
        let bullet = Rect::new(
            self.player.right() + MUZZLE_GAP,
            self.player.y,
            BULLET_WIDTH,
            BULLET_HEIGHT,
        );
        self.bullets.push(bullet);
        bullet
    }

    pub fn remove_bullet(&mut self, index: usize) -> Rect {
        self.bullets.remove(index)
    }

    pub fn remove_enemy(&mut self, index: usize) -> Rect {
        self.enemies.remove(index)
    }

    /// Move every bullet right and drop the ones past the right edge.
    /// Returns the number of bullets removed.
    pub fn advance_bullets(&mut self) -> usize {
        let mut expired = 0;
        let mut i = 0;
        while i < self.bullets.len() {
            self.bullets[i].x += BULLET_SPEED;
            if self.bullets[i].x > WINDOW_WIDTH {
                self.remove_bullet(i);
                expired += 1;
            } else {
                i += 1;
            }
        }
        expired
    }

    /// Match enemies against bullets. Each hit removes the enemy and the bullet that
    /// struck it and scores one point; scanning of that enemy stops at the first hit.
    /// Returns the number of hits.
    pub fn resolve_collisions(&mut self) -> u32 {
        let mut hits = 0;
        let mut i = 0;
        while i < self.enemies.len() {
            let enemy = self.enemies[i];
            match self.bullets.iter().position(|bullet| collides(&enemy, bullet)) {
                Some(b) => {
                    let bullet = self.remove_bullet(b);
                    self.remove_enemy(i);
                    self.score += 1;
                    hits += 1;
                    debug_collision!(
                        "Bullet at ({}, {}) hit enemy at ({}, {}), score {}",
                        bullet.x,
                        bullet.y,
                        enemy.x,
                        enemy.y,
                        self.score
                    );
                }
                None => i += 1,
            }
        }
        hits
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
