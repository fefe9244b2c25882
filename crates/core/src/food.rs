//! Food module - single food cell with bounded rejection-sampled placement.

use rand::Rng;
use tracing::{debug, warn};

use crate::types::{GridVector, DEFAULT_FOOD_TEXTURE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Food {
    position: GridVector,
    /// Opaque render hint.
    texture_key: &'static str,
}

impl Food {
    pub fn new(position: GridVector) -> Self {
        Self::with_texture_key(position, DEFAULT_FOOD_TEXTURE)
    }

    pub fn with_texture_key(position: GridVector, texture_key: &'static str) -> Self {
        Self {
            position,
            texture_key,
        }
    }

    pub fn position(&self) -> GridVector {
        self.position
    }

    pub fn texture_key(&self) -> &'static str {
        self.texture_key
    }

    /// Move the food to a random cell of a `width` x `height` board that is not
    /// in `exclude`.
    ///
    /// At most `width * height` cells are sampled. If every sample hits an
    /// excluded cell, the last one is kept anyway. Returns `true` when the
    /// accepted cell is clear of `exclude`.
    ///
    /// A board with a zero dimension has no cells; the food is left in place.
    pub fn respawn<'a, R, I>(&mut self, rng: &mut R, width: u32, height: u32, exclude: I) -> bool
    where
        R: Rng,
        I: IntoIterator<Item = &'a GridVector> + Clone,
    {
        if width == 0 || height == 0 {
            return false;
        }

        let max_attempts = width as u64 * height as u64;
        let mut attempts = 0u64;
        loop {
            let candidate = GridVector::new(
                rng.gen_range(0..width) as i32,
                rng.gen_range(0..height) as i32,
            );
            attempts += 1;

            let blocked = exclude.clone().into_iter().any(|p| *p == candidate);
            if !blocked || attempts >= max_attempts {
                self.position = candidate;
                if blocked {
                    warn!(
                        x = candidate.x,
                        y = candidate.y,
                        attempts,
                        "food placement exhausted, accepting occupied cell"
                    );
                } else {
                    debug!(x = candidate.x, y = candidate.y, attempts, "food placed");
                }
                return !blocked;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const NOTHING: [GridVector; 0] = [];

    #[test]
    fn test_default_texture_key() {
        let food = Food::new(GridVector::new(15, 10));
        assert_eq!(food.position(), GridVector::new(15, 10));
        assert_eq!(food.texture_key(), "food");

        let food = Food::with_texture_key(GridVector::ZERO, "apple");
        assert_eq!(food.texture_key(), "apple");
    }

    #[test]
    fn test_respawn_stays_on_board() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut food = Food::new(GridVector::ZERO);
        for _ in 0..500 {
            assert!(food.respawn(&mut rng, 5, 3, &NOTHING));
            let p = food.position();
            assert!((0..5).contains(&p.x));
            assert!((0..3).contains(&p.y));
        }
    }

    #[test]
    fn test_respawn_avoids_excluded_cells() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut food = Food::new(GridVector::ZERO);
        // Leave exactly one cell of a 3x3 board free. Enough attempts usually
        // find it; the invariant only holds when the result reports clear.
        let exclude: Vec<GridVector> = (0..3)
            .flat_map(|y| (0..3).map(move |x| GridVector::new(x, y)))
            .filter(|p| *p != GridVector::new(2, 1))
            .collect();
        for _ in 0..100 {
            if food.respawn(&mut rng, 3, 3, &exclude) {
                assert_eq!(food.position(), GridVector::new(2, 1));
            } else {
                assert!(exclude.contains(&food.position()));
            }
        }
    }

    #[test]
    fn test_respawn_full_board_terminates() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut food = Food::new(GridVector::new(9, 9));
        let exclude = vec![
            GridVector::new(0, 0),
            GridVector::new(1, 0),
            GridVector::new(0, 1),
            GridVector::new(1, 1),
        ];
        assert!(!food.respawn(&mut rng, 2, 2, &exclude));
        assert!(exclude.contains(&food.position()));
    }

    #[test]
    fn test_respawn_on_empty_board_is_noop() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut food = Food::new(GridVector::new(4, 4));
        assert!(!food.respawn(&mut rng, 0, 10, &NOTHING));
        assert_eq!(food.position(), GridVector::new(4, 4));
    }

    #[test]
    fn test_respawn_is_deterministic_per_seed() {
        let mut a = Food::new(GridVector::ZERO);
        let mut b = Food::new(GridVector::ZERO);
        let mut rng_a = SmallRng::seed_from_u64(99);
        let mut rng_b = SmallRng::seed_from_u64(99);
        for _ in 0..20 {
            a.respawn(&mut rng_a, 20, 20, &NOTHING);
            b.respawn(&mut rng_b, 20, 20, &NOTHING);
            assert_eq!(a.position(), b.position());
        }
    }
}
