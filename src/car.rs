use serde::{Deserialize, Serialize};

use crate::error::RaceError;

pub const MAX_NAME_LENGTH: usize = 5;

/// Checks a single car name: 1 to 5 ASCII letters.
///
/// # Errors
///
/// Returns [`RaceError::InvalidName`] carrying the rejected name and its
/// character count.
pub fn validate_name(name: &str) -> Result<(), RaceError> {
    let length = name.chars().count();
    if length == 0 || length > MAX_NAME_LENGTH || !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(RaceError::InvalidName {
            name: name.to_owned(),
            length,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Car {
    name: String,
    position: u32,
}

impl Car {
    /// # Errors
    ///
    /// Returns [`RaceError::InvalidName`] if `name` fails [`validate_name`].
    pub fn new(name: impl Into<String>) -> Result<Self, RaceError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self::from_validated(name))
    }

    pub(crate) const fn from_validated(name: String) -> Self {
        Self { name, position: 0 }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn position(&self) -> u32 {
        self.position
    }

    pub fn move_forward(&mut self, should_move: bool) {
        if should_move {
            self.position += 1;
        }
    }

    pub fn snapshot(&self) -> CarPosition {
        CarPosition {
            name: self.name.clone(),
            position: self.position,
        }
    }
}

/// Read-only copy of a car handed out for display and logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarPosition {
    pub name: String,
    pub position: u32,
}
