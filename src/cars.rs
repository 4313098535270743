use std::collections::HashSet;
use std::fmt;

use crate::car::{validate_name, Car, CarPosition};
use crate::error::RaceError;
use crate::strategy::MovingStrategy;

pub const MIN_PARTICIPANTS: usize = 2;
const NAME_DELIMITER: char = ',';

/// The ordered field of cars taking part in one race.
pub struct Cars {
    cars: Vec<Car>,
    strategy: Box<dyn MovingStrategy>,
}

impl Cars {
    /// Builds the field from a comma-separated list of names.
    ///
    /// Segments are not trimmed, and a trailing comma produces an empty (and
    /// therefore invalid) name. Every name is checked before the participant
    /// count, and the count before duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`RaceError::InvalidName`], [`RaceError::InsufficientParticipants`]
    /// or [`RaceError::DuplicateName`], in that order of precedence.
    pub fn generate<S>(raw_names: &str, strategy: S) -> Result<Self, RaceError>
    where
        S: MovingStrategy + 'static,
    {
        let names: Vec<&str> = raw_names.split(NAME_DELIMITER).collect();

        for name in &names {
            validate_name(name)?;
        }

        if names.len() < MIN_PARTICIPANTS {
            return Err(RaceError::InsufficientParticipants { count: names.len() });
        }

        let mut seen = HashSet::with_capacity(names.len());
        if let Some(duplicate) = names.iter().find(|name| !seen.insert(**name)) {
            return Err(RaceError::DuplicateName {
                name: (*duplicate).to_owned(),
            });
        }

        Ok(Self {
            cars: names
                .into_iter()
                .map(|name| Car::from_validated(name.to_owned()))
                .collect(),
            strategy: Box::new(strategy),
        })
    }

    /// Plays one round: one decision per car, in field order.
    pub fn race(&mut self) {
        for car in &mut self.cars {
            car.move_forward(self.strategy.should_move());
        }
    }

    /// Names of every car sharing the lead, in field order.
    pub fn winners(&self) -> Vec<String> {
        let Some(max_position) = self.cars.iter().map(Car::position).max() else {
            return Vec::new();
        };

        self.cars
            .iter()
            .filter(|car| car.position() == max_position)
            .map(|car| car.name().to_owned())
            .collect()
    }

    pub fn positions(&self) -> Vec<CarPosition> {
        self.cars.iter().map(Car::snapshot).collect()
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}

impl fmt::Debug for Cars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cars").field("cars", &self.cars).finish_non_exhaustive()
    }
}
