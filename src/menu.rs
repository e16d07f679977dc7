//! Interactive console menu.
//!
//! The menu reads from any [`BufRead`] and writes to any [`Write`], so the
//! same loop drives the terminal and the tests.

use crate::error::{Error, Result};
use crate::goldbach::{EvenTarget, RangeEntry};
use std::io::{BufRead, Write};

const OPTION_SINGLE: &str = "(1): Show prime pairs and their count for an even number > 2.";
const OPTION_RANGE: &str =
    "(2): Show counts of Goldbach combinations for even numbers up to a limit.";
const PROMPT_CHOICE: &str = "Enter your choice (1 or 2): ";
const PROMPT_NUMBER: &str = "Enter an even number > 2: ";
const PROMPT_MAX: &str = "Enter the maximum even number (>2): ";
const MSG_NOT_EVEN: &str = "Invalid input! Please enter an even number greater than 2.";
const MSG_NOT_NUMBER: &str = "Invalid input! Please enter a whole number.";
const MSG_BAD_CHOICE: &str = "Invalid choice. Please select 1 or 2.";

/// Which branch of the menu ran to completion
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Prime pairs were listed for this number
    SingleNumber(EvenTarget),
    /// Counts were listed for every even number up to this bound
    Range(EvenTarget),
    InvalidChoice,
}

#[derive(Debug)]
enum MenuState {
    AwaitChoice,
    SingleNumber,
    Range,
    Done(MenuOutcome),
}

/// Blocking menu over an input source and an output sink
pub struct Menu<R, W> {
    input: R,
    output: W,
    bar_char: char,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            bar_char: '*',
        }
    }

    /// Use `bar_char` instead of `*` for range bars
    pub fn with_bar_char(mut self, bar_char: char) -> Self {
        self.bar_char = bar_char;
        self
    }

    /// Run the menu once: one choice, one report.
    pub fn run(&mut self) -> Result<MenuOutcome> {
        let mut state = MenuState::AwaitChoice;

        loop {
            log::trace!("menu state: {:?}", state);
            state = match state {
                MenuState::AwaitChoice => {
                    writeln!(self.output, "{}", OPTION_SINGLE)?;
                    writeln!(self.output, "{}", OPTION_RANGE)?;
                    match self.read_choice()? {
                        Some(1) => MenuState::SingleNumber,
                        Some(2) => MenuState::Range,
                        _ => {
                            writeln!(self.output, "{}", MSG_BAD_CHOICE)?;
                            MenuState::Done(MenuOutcome::InvalidChoice)
                        }
                    }
                }
                MenuState::SingleNumber => {
                    let target = self.read_even_target(PROMPT_NUMBER)?;
                    self.show_pairs(target)?;
                    MenuState::Done(MenuOutcome::SingleNumber(target))
                }
                MenuState::Range => {
                    let max = self.read_even_target(PROMPT_MAX)?;
                    self.show_range(max)?;
                    MenuState::Done(MenuOutcome::Range(max))
                }
                MenuState::Done(outcome) => {
                    self.output.flush()?;
                    return Ok(outcome);
                }
            };
        }
    }

    /// Give back the input and output streams
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print `prompt` and read one line
    fn prompt_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::UnexpectedEof);
        }
        Ok(line.trim().to_string())
    }

    /// `None` when the choice is not a number at all
    fn read_choice(&mut self) -> Result<Option<i64>> {
        let line = self.prompt_line(PROMPT_CHOICE)?;
        let choice = line.parse::<i64>().ok();
        log::debug!("menu choice: {:?} (raw {:?})", choice, line);
        Ok(choice)
    }

    /// Re-prompt until the user enters an even number greater than 2
    fn read_even_target(&mut self, prompt: &str) -> Result<EvenTarget> {
        loop {
            let line = self.prompt_line(prompt)?;
            let n = match line.parse::<i64>() {
                Ok(n) => n,
                Err(_) => {
                    writeln!(self.output, "{}", MSG_NOT_NUMBER)?;
                    continue;
                }
            };
            match EvenTarget::new(n) {
                Ok(target) => return Ok(target),
                Err(e) => {
                    log::debug!("rejected input: {}", e);
                    writeln!(self.output, "{}", MSG_NOT_EVEN)?;
                }
            }
        }
    }

    fn show_pairs(&mut self, target: EvenTarget) -> Result<()> {
        writeln!(self.output, "Prime pairs that sum to {}:", target)?;
        let mut count = 0;
        for pair in target.pairs() {
            writeln!(self.output, "{}", pair)?;
            count += 1;
        }
        writeln!(self.output, "Total combinations: {}", count)?;
        Ok(())
    }

    fn show_range(&mut self, max: EvenTarget) -> Result<()> {
        for target in max.range_from_four() {
            let entry = RangeEntry {
                n: target.get(),
                count: target.combinations(),
            };
            writeln!(self.output, "Number of combinations for {}: {}", entry.n, entry.count)?;
            writeln!(self.output, "{}", entry.bar(self.bar_char))?;
        }
        Ok(())
    }
}
