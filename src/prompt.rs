//! Line-oriented prompts that re-ask until the answer is valid.

use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use tracing::{debug, warn};

use crate::error::{InputError, TicketError};
use crate::schema::{FareCategory, Zone};

/// Map a zone menu answer (1-based) to a zone.
pub fn parse_zone_choice(text: &str) -> Result<Zone, InputError> {
    let choice = match text.trim().parse::<i64>() {
        Ok(n) => n,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return Err(InputError::OutOfRange);
        }
        Err(_) => return Err(InputError::NotANumber),
    };
    usize::try_from(choice)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| Zone::ALL.get(idx).copied())
        .ok_or(InputError::OutOfRange)
}

pub fn parse_passenger_count(text: &str) -> Result<u32, InputError> {
    match text.trim().parse::<i64>() {
        Ok(n) if n < 0 => Err(InputError::Negative),
        Ok(n) => u32::try_from(n).map_err(|_| InputError::TooLarge),
        Err(e) => Err(match e.kind() {
            IntErrorKind::PosOverflow => InputError::TooLarge,
            IntErrorKind::NegOverflow => InputError::Negative,
            _ => InputError::NotAWholeNumber,
        }),
    }
}

/// The operator's console: where answers are read from and everything is
/// printed to. The binary wraps locked stdin/stdout; tests use buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line to the console.
    pub fn say(&mut self, text: impl std::fmt::Display) -> Result<(), TicketError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Show `hint` without a trailing newline and read one line of input.
    fn ask(&mut self, hint: &str) -> Result<String, TicketError> {
        write!(self.output, "{hint}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            warn!(hint, "input closed at prompt");
            return Err(TicketError::InputClosed);
        }
        Ok(line)
    }

    /// Show the zone menu until a listed option is chosen.
    pub fn select_zone(&mut self, prompt: &str) -> Result<Zone, TicketError> {
        loop {
            self.say(prompt)?;
            for (i, zone) in Zone::ALL.iter().enumerate() {
                writeln!(self.output, "{}. {}", i + 1, zone)?;
            }
            let answer = self.ask("Select option: ")?;
            match parse_zone_choice(&answer) {
                Ok(zone) => return Ok(zone),
                Err(err) => {
                    debug!(answer = answer.trim(), %err, "zone choice rejected");
                    self.say(err)?;
                }
            }
        }
    }

    pub fn passenger_count(&mut self, category: FareCategory) -> Result<u32, TicketError> {
        let hint = format!("Enter number of {category} travellers: ");
        loop {
            let answer = self.ask(&hint)?;
            match parse_passenger_count(&answer) {
                Ok(count) => return Ok(count),
                Err(err) => {
                    debug!(%category, answer = answer.trim(), %err, "passenger count rejected");
                    self.say(err)?;
                }
            }
        }
    }

    /// Yes only for a case-insensitive `Y`.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, TicketError> {
        let answer = self.ask(prompt)?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }
}
