use std::io::{self, BufRead, Write};

use crate::car::CarPosition;
use crate::error::RaceError;

pub const CAR_NAMES_PROMPT: &str =
    "Enter the names of the cars (comma-separated, up to 5 letters each).";
pub const ROUND_COUNT_PROMPT: &str = "How many rounds will be played?";
pub const PROCESS_HEADER: &str = "Race results";
const POSITION_MARK: &str = "-";
const WINNER_SEPARATOR: &str = ", ";

pub trait InputView {
    fn read_car_names(&mut self) -> io::Result<String>;
    fn read_round_count(&mut self) -> io::Result<String>;
}

pub trait OutputView {
    fn print_process_prompt(&mut self) -> io::Result<()>;
    fn print_positions(&mut self, positions: &[CarPosition]) -> io::Result<()>;
    fn print_winners(&mut self, winners: &[String]) -> io::Result<()>;
    fn print_error(&mut self, error: &RaceError) -> io::Result<()>;
}

pub fn render_position(car: &CarPosition) -> String {
    format!("{} : {}", car.name, POSITION_MARK.repeat(car.position as usize))
}

pub fn render_winners(winners: &[String]) -> String {
    format!("Final winners: {}", winners.join(WINNER_SEPARATOR))
}

pub fn render_error(error: &RaceError) -> String {
    format!("[ERROR] {error}")
}

/// Line-oriented console front end over any reader/writer pair.
#[derive(Debug)]
pub struct ConsoleView<R, W> {
    reader: R,
    writer: W,
    preset_names: Option<String>,
    preset_rounds: Option<String>,
}

impl<R: BufRead, W: Write> ConsoleView<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            preset_names: None,
            preset_rounds: None,
        }
    }

    /// Answers the first prompt of each kind from the given values.
    #[must_use]
    pub fn with_presets(mut self, names: Option<String>, rounds: Option<String>) -> Self {
        self.preset_names = names;
        self.preset_rounds = rounds;
        self
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn prompt(&mut self, question: &str, preset: Option<String>) -> io::Result<String> {
        writeln!(self.writer, "{question}")?;
        if let Some(answer) = preset {
            writeln!(self.writer, "{answer}")?;
            return Ok(answer);
        }
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            ));
        }
        Ok(strip_line_ending(line))
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

impl<R: BufRead, W: Write> InputView for ConsoleView<R, W> {
    fn read_car_names(&mut self) -> io::Result<String> {
        let preset = self.preset_names.take();
        self.prompt(CAR_NAMES_PROMPT, preset)
    }

    fn read_round_count(&mut self) -> io::Result<String> {
        let preset = self.preset_rounds.take();
        self.prompt(ROUND_COUNT_PROMPT, preset)
    }
}

impl<R: BufRead, W: Write> OutputView for ConsoleView<R, W> {
    fn print_process_prompt(&mut self) -> io::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{PROCESS_HEADER}")
    }

    fn print_positions(&mut self, positions: &[CarPosition]) -> io::Result<()> {
        for car in positions {
            writeln!(self.writer, "{}", render_position(car))?;
        }
        writeln!(self.writer)
    }

    fn print_winners(&mut self, winners: &[String]) -> io::Result<()> {
        writeln!(self.writer, "{}", render_winners(winners))?;
        self.writer.flush()
    }

    fn print_error(&mut self, error: &RaceError) -> io::Result<()> {
        writeln!(self.writer, "{}", render_error(error))
    }
}
