use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use color_eyre::eyre::WrapErr;
use serde::{Deserialize, Serialize};

use crate::car::CarPosition;
use crate::cars::Cars;
use crate::error::RaceError;
use crate::log::{RaceLog, RoundLog};
use crate::strategy::{MovingStrategy, RandomMovingStrategy};

/// Number of rounds a race lasts, always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundCount(u32);

impl RoundCount {
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for RoundCount {
    type Err = RaceError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.parse::<u32>() {
            Ok(rounds) if rounds > 0 => Ok(Self(rounds)),
            _ => Err(RaceError::InvalidRound {
                input: raw.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    Running,
    Finished,
}

#[derive(Debug)]
pub struct RacingCarController {
    cars: Cars,
    total_rounds: RoundCount,
    remaining: u32,
    logs: Vec<RoundLog>,
}

impl RacingCarController {
    /// Sets up a race driven by a [`RandomMovingStrategy`] seeded from the OS.
    ///
    /// # Errors
    ///
    /// Returns the first [`RaceError`] found in the names, then in the round count.
    pub fn new(raw_names: &str, raw_rounds: &str) -> Result<Self, RaceError> {
        Self::with_strategy(raw_names, raw_rounds, RandomMovingStrategy::from_entropy())
    }

    /// # Errors
    ///
    /// Same as [`RacingCarController::new`].
    pub fn with_strategy<S>(raw_names: &str, raw_rounds: &str, strategy: S) -> Result<Self, RaceError>
    where
        S: MovingStrategy + 'static,
    {
        let cars = Cars::generate(raw_names, strategy)?;
        let total_rounds: RoundCount = raw_rounds.parse()?;

        Ok(Self {
            cars,
            total_rounds,
            remaining: total_rounds.get(),
            logs: Vec::new(),
        })
    }

    pub const fn is_runnable(&self) -> bool {
        self.remaining > 0
    }

    pub const fn state(&self) -> State {
        if self.is_runnable() {
            State::Running
        } else {
            State::Finished
        }
    }

    /// Plays the next round and returns where everyone stands.
    ///
    /// Once the race is finished this is a no-op that returns the final standings.
    pub fn run(&mut self) -> Vec<CarPosition> {
        if !self.is_runnable() {
            return self.cars.positions();
        }

        self.remaining -= 1;
        self.cars.race();

        let positions = self.cars.positions();
        let round = self.total_rounds.get() - self.remaining;
        self.logs.push(RoundLog::new(round, positions.clone()));
        positions
    }

    pub fn end(&self) -> Vec<String> {
        self.cars.winners()
    }

    pub const fn total_rounds(&self) -> u32 {
        self.total_rounds.get()
    }

    pub const fn remaining_rounds(&self) -> u32 {
        self.remaining
    }

    pub fn cars(&self) -> &Cars {
        &self.cars
    }

    pub fn logs(&self) -> &[RoundLog] {
        &self.logs
    }

    pub fn race_log(&self) -> RaceLog {
        RaceLog {
            rounds: self.logs.clone(),
            winners: self.end(),
        }
    }

    /// Writes the race log as JSON to `dir/logs_<unix seconds>.json`.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be created or the file cannot be written.
    pub fn export_log(&self, dir: &Path) -> color_eyre::Result<PathBuf> {
        let json = serde_json::to_string(&self.race_log()).wrap_err("failed to serialize race log")?;

        let time_now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .wrap_err("system clock is before the unix epoch")?
            .as_secs();

        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create log directory {}", dir.display()))?;
        let path = dir.join(format!("logs_{time_now}.json"));

        File::create(&path)
            .and_then(|mut file| file.write_all(json.as_bytes()))
            .wrap_err_with(|| format!("failed to write race log to {}", path.display()))?;

        Ok(path)
    }
}
