//! Console car race.
//!
//! Cars named by the player advance one step per round whenever their
//! [`MovingStrategy`] says so; after the last round every car sharing the
//! lead wins.

pub mod car;
pub mod cars;
pub mod error;
pub mod game;
pub mod log;
pub mod session;
pub mod strategy;
pub mod view;

pub use car::{validate_name, Car, CarPosition};
pub use cars::Cars;
pub use error::RaceError;
pub use game::{RacingCarController, RoundCount, State};
pub use log::{RaceLog, RoundLog};
pub use session::RacingCarGame;
pub use strategy::{MovingStrategy, RandomMovingStrategy};
pub use view::{ConsoleView, InputView, OutputView};
