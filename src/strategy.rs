use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DRAW_RANGE: u8 = 10;
const MOVE_THRESHOLD: u8 = 5;

/// Decides, once per car per round, whether that car advances.
pub trait MovingStrategy {
    fn should_move(&mut self) -> bool;
}

impl<F> MovingStrategy for F
where
    F: FnMut() -> bool,
{
    fn should_move(&mut self) -> bool {
        self()
    }
}

/// Draws from `0..10` and moves on the upper half.
#[derive(Debug, Clone)]
pub struct RandomMovingStrategy<R = StdRng> {
    rng: R,
}

impl RandomMovingStrategy<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomMovingStrategy<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> RandomMovingStrategy<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MovingStrategy for RandomMovingStrategy<R> {
    fn should_move(&mut self) -> bool {
        self.rng.gen_range(0..DRAW_RANGE) >= MOVE_THRESHOLD
    }
}
