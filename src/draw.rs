use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const LOWEST_NUMBER: u8 = 1;
pub const HIGHEST_NUMBER: u8 = 59;
pub const MAX_PLAYER_NUMBERS: usize = 6;
// 6 + bonus
pub const MAX_DRAW_NUMBERS: usize = 7;

pub fn in_range(number: i64) -> bool {
    (LOWEST_NUMBER as i64..=HIGHEST_NUMBER as i64).contains(&number)
}

/// Draws lottery numbers by sampling without replacement from 1..=59.
pub struct DrawEngine {
    rng: StdRng,
}

impl DrawEngine {
    pub fn new() -> Self {
        DrawEngine {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        DrawEngine {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns 7 distinct numbers; the last one is the bonus ball.
    pub fn draw_numbers(&mut self) -> Vec<u8> {
        // the pool is rebuilt on every draw, nothing carries over between rounds
        let mut pool: Vec<u8> = (LOWEST_NUMBER..=HIGHEST_NUMBER).collect();
        let mut drawn = Vec::with_capacity(MAX_DRAW_NUMBERS);
        for _ in 0..MAX_DRAW_NUMBERS {
            let idx = self.rng.random_range(0..pool.len());
            drawn.push(pool.remove(idx));
        }
        debug!("Drew numbers {:?}", drawn);
        drawn
    }
}

impl Default for DrawEngine {
    fn default() -> Self {
        Self::new()
    }
}

pub fn count_matches(player: &[u8], winning: &[u8]) -> usize {
    player.iter().filter(|n| winning.contains(n)).count()
}
