use serde::{Deserialize, Serialize};

use crate::car::CarPosition;

/// Where every car stood after one round.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundLog {
    pub round: u32,
    pub positions: Vec<CarPosition>,
}

impl RoundLog {
    pub const fn new(round: u32, positions: Vec<CarPosition>) -> Self {
        Self { round, positions }
    }

    pub fn leader_position(&self) -> u32 {
        self.positions
            .iter()
            .map(|car| car.position)
            .max()
            .unwrap_or_default()
    }
}

/// The exported form of a finished race.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceLog {
    pub rounds: Vec<RoundLog>,
    pub winners: Vec<String>,
}
