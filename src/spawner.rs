use crate::config::{ENEMY_HEIGHT, ENEMY_WIDTH, ENEMY_X, MAX_ENEMIES, SPAWN_Y_MAX, SPAWN_Y_MIN};
use crate::debug_spawn;
use crate::types::Rect;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How the spawner tops up the enemy pool once it falls below the cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefillPolicy {
    /// Spawn a whole batch of `cap` enemies. Population can reach `2 * cap - 1`.
    FullBatch,
    /// Spawn exactly the missing enemies. Population never exceeds `cap`.
    Shortfall,
}

impl RefillPolicy {
    /// Largest population this policy can produce for a given cap
    pub fn max_population(self, cap: usize) -> usize {
        match self {
            RefillPolicy::FullBatch => (2 * cap).saturating_sub(1),
            RefillPolicy::Shortfall => cap,
        }
    }
}

/// Keeps the enemy population at the cap.
/// Owns the process-lifetime random generator, seeded once.
#[derive(Debug)]
pub struct Spawner {
    rng: StdRng,
    cap: usize,
    policy: RefillPolicy,
}

impl Spawner {
    pub fn new(policy: RefillPolicy) -> Self {
        Spawner {
            rng: StdRng::from_entropy(),
            cap: MAX_ENEMIES,
            policy,
        }
    }

    /// Deterministic spawner for replays and tests
    pub fn with_seed(seed: u64, policy: RefillPolicy) -> Self {
        Spawner {
            rng: StdRng::seed_from_u64(seed),
            cap: MAX_ENEMIES,
            policy,
        }
    }

    /// Refill `enemies` if it is strictly below the cap. Returns how many were spawned.
    pub fn refill(&mut self, enemies: &mut Vec<Rect>) -> usize {
        if enemies.len() >= self.cap {
            return 0;
        }

        let count = match self.policy {
            RefillPolicy::FullBatch => self.cap,
            RefillPolicy::Shortfall => self.cap - enemies.len(),
        };

        for _ in 0..count {
            let enemy = self.spawn_one();
            debug_spawn!("Enemy spawned at ({}, {})", enemy.x, enemy.y);
            enemies.push(enemy);
        }
        count
    }

    fn spawn_one(&mut self) -> Rect {
        let y = self.rng.gen_range(SPAWN_Y_MIN..=SPAWN_Y_MAX);
        Rect::new(ENEMY_X, y, ENEMY_WIDTH, ENEMY_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refill_from_empty() {
        for policy in [RefillPolicy::FullBatch, RefillPolicy::Shortfall] {
            let mut spawner = Spawner::with_seed(1, policy);
            let mut enemies = Vec::new();
            assert_eq!(spawner.refill(&mut enemies), MAX_ENEMIES);
            assert_eq!(enemies.len(), MAX_ENEMIES);
        }
    }

    #[test]
    fn test_spawned_enemies_are_within_range() {
        let mut spawner = Spawner::with_seed(99, RefillPolicy::Shortfall);
        for _ in 0..500 {
            let mut enemies = Vec::new();
            spawner.refill(&mut enemies);
            for enemy in &enemies {
                assert_eq!(enemy.x, ENEMY_X);
                assert!((SPAWN_Y_MIN..=SPAWN_Y_MAX).contains(&enemy.y), "{:?}", enemy);
                assert_eq!((enemy.w, enemy.h), (ENEMY_WIDTH, ENEMY_HEIGHT));
            }
        }
    }

    #[test]
    fn test_no_refill_at_cap() {
        let mut spawner = Spawner::with_seed(5, RefillPolicy::FullBatch);
        let mut enemies = vec![Rect::new(0, 0, 1, 1); MAX_ENEMIES];
        assert_eq!(spawner.refill(&mut enemies), 0);
        assert_eq!(enemies.len(), MAX_ENEMIES);
    }

    #[test]
    fn test_shortfall_tops_up_exactly() {
        let mut spawner = Spawner::with_seed(5, RefillPolicy::Shortfall);
        let existing = Rect::new(1, 2, 3, 4);
        let mut enemies = vec![existing];
        assert_eq!(spawner.refill(&mut enemies), MAX_ENEMIES - 1);
        assert_eq!(enemies.len(), MAX_ENEMIES);
        assert_eq!(enemies[0], existing, "existing enemies keep their order");
    }

    #[test]
    fn test_full_batch_overshoots() {
        let mut spawner = Spawner::with_seed(5, RefillPolicy::FullBatch);
        let mut enemies = vec![Rect::new(1, 2, 3, 4); MAX_ENEMIES - 1];
        assert_eq!(spawner.refill(&mut enemies), MAX_ENEMIES);
        assert_eq!(enemies.len(), 2 * MAX_ENEMIES - 1);
        assert_eq!(
            enemies.len(),
            RefillPolicy::FullBatch.max_population(MAX_ENEMIES)
        );
    }

    #[test]
    fn test_same_seed_same_positions() {
        let mut a = Spawner::with_seed(1234, RefillPolicy::Shortfall);
        let mut b = Spawner::with_seed(1234, RefillPolicy::Shortfall);
        let (mut ea, mut eb) = (Vec::new(), Vec::new());
        a.refill(&mut ea);
        b.refill(&mut eb);
        assert_eq!(ea, eb);
    }
}
