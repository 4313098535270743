use color_eyre::eyre::WrapErr;

use crate::error::RaceError;
use crate::game::RacingCarController;
use crate::strategy::{MovingStrategy, RandomMovingStrategy};
use crate::view::{InputView, OutputView};

/// One interactive race: asks until the input is valid, then plays it out.
pub struct RacingCarGame<V, F> {
    view: V,
    strategies: F,
}

impl<V> RacingCarGame<V, fn() -> RandomMovingStrategy> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            strategies: RandomMovingStrategy::from_entropy,
        }
    }
}

impl<V, F, S> RacingCarGame<V, F>
where
    V: InputView + OutputView,
    F: FnMut() -> S,
    S: MovingStrategy + 'static,
{
    /// Uses `strategies` to build a fresh movement rule for every setup attempt.
    pub const fn with_strategies(view: V, strategies: F) -> Self {
        Self { view, strategies }
    }

    /// # Errors
    ///
    /// Fails only when the view cannot read or write; invalid answers are
    /// reported through the view and asked again.
    pub fn play(&mut self) -> color_eyre::Result<RacingCarController> {
        let mut controller = self.create_controller()?;

        self.view
            .print_process_prompt()
            .wrap_err("failed to print race header")?;
        while controller.is_runnable() {
            let positions = controller.run();
            log::debug!(
                "round {}/{} played",
                controller.total_rounds() - controller.remaining_rounds(),
                controller.total_rounds()
            );
            self.view
                .print_positions(&positions)
                .wrap_err("failed to print positions")?;
        }

        let winners = controller.end();
        log::info!("race finished, winners: {}", winners.join(", "));
        self.view
            .print_winners(&winners)
            .wrap_err("failed to print winners")?;

        Ok(controller)
    }

    fn create_controller(&mut self) -> color_eyre::Result<RacingCarController> {
        loop {
            match self.try_create_controller()? {
                Ok(controller) => return Ok(controller),
                Err(error) => {
                    log::warn!("rejected race setup: {error}");
                    self.view
                        .print_error(&error)
                        .wrap_err("failed to print input error")?;
                }
            }
        }
    }

    fn try_create_controller(
        &mut self,
    ) -> color_eyre::Result<Result<RacingCarController, RaceError>> {
        let names = self
            .view
            .read_car_names()
            .wrap_err("failed to read car names")?;
        let rounds = self
            .view
            .read_round_count()
            .wrap_err("failed to read round count")?;

        Ok(RacingCarController::with_strategy(
            &names,
            &rounds,
            (self.strategies)(),
        ))
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, ErrorKind};

    use super::*;
    use crate::view::ConsoleView;

    type TestView = ConsoleView<Cursor<Vec<u8>>, Vec<u8>>;

    fn console(input: &str) -> TestView {
        ConsoleView::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(game: RacingCarGame<TestView, impl FnMut() -> fn() -> bool>) -> String {
        String::from_utf8(game.into_view().into_writer()).unwrap()
    }

    fn always() -> bool {
        true
    }

    #[test]
    fn plays_a_full_race() {
        let mut game = RacingCarGame::with_strategies(console("pobi,crong\n2\n"), || {
            always as fn() -> bool
        });
        let controller = game.play().unwrap();

        assert!(!controller.is_runnable());
        assert_eq!(controller.end(), ["pobi", "crong"]);

        let printed = output(game);
        assert!(printed.contains("pobi : -\ncrong : -\n\n"));
        assert!(printed.contains("pobi : --\ncrong : --\n\n"));
        assert!(printed.ends_with("Final winners: pobi, crong\n"));
    }

    #[test]
    fn asks_again_after_invalid_input() {
        let input = "pobi,bro.wn\n3\npobi\n3\npobi,crong\nzero\npobi,crong\n1\n";
        let mut game = RacingCarGame::with_strategies(console(input), || always as fn() -> bool);
        let controller = game.play().unwrap();
        assert_eq!(controller.total_rounds(), 1);

        let printed = output(game);
        let errors: Vec<&str> = printed
            .lines()
            .filter(|line| line.starts_with("[ERROR]"))
            .collect();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("alphabetic"));
        assert!(errors[1].contains("at least 2 cars"));
        assert!(errors[2].contains("round count"));
    }

    #[test]
    fn each_attempt_gets_a_fresh_strategy() {
        let mut built = 0;
        let mut game = RacingCarGame::with_strategies(console("pobi\n1\npobi,crong\n1\n"), || {
            built += 1;
            || false
        });
        game.play().unwrap();
        drop(game);
        assert_eq!(built, 2);
    }

    #[test]
    fn stops_when_input_runs_out() {
        let mut game = RacingCarGame::with_strategies(console("pobi\n1\n"), || always as fn() -> bool);
        let report = game.play().unwrap_err();
        let io_error = report
            .root_cause()
            .downcast_ref::<std::io::Error>()
            .map(std::io::Error::kind);
        assert_eq!(io_error, Some(ErrorKind::UnexpectedEof));
    }
}
