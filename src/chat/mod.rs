//! The interactive query menu.
//!
//! A blocking read loop over any [`BufRead`]/[`Write`] pair. Each round
//! reads a menu choice, at most one lookup argument, and a yes/no answer:
//!
//! ```text
//! AwaitingChoice ──"1"──▶ AwaitingEmailInput ──────┐
//!       │  ──"2"──▶ AwaitingIdentifierInput ───────┤
//!       └──other (prints invalid choice)───────────┴─▶ AwaitingContinueDecision
//! AwaitingContinueDecision ──"yes" (any case)──▶ AwaitingChoice
//!                          ──anything else────▶ Terminated
//! ```
//!
//! End of input at any prompt moves straight to `Terminated`.

pub mod render;

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::error::Result;
use crate::port::OrderLookup;

/// Where the menu loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    AwaitingChoice,
    AwaitingEmailInput,
    AwaitingIdentifierInput,
    AwaitingContinueDecision,
    Terminated,
}

/// A parsed answer to the `>>` prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    OrderDetails,
    OrderStatus,
    Invalid,
}

impl MenuChoice {
    /// Only the exact strings `1` and `2` select a lookup.
    pub fn parse(input: &str) -> Self {
        match input {
            "1" => Self::OrderDetails,
            "2" => Self::OrderStatus,
            _ => Self::Invalid,
        }
    }
}

/// Whether an answer to the continue prompt asks for another round.
pub fn wants_another(answer: &str) -> bool {
    answer.to_lowercase() == "yes"
}

/// The menu loop bound to a lookup backend and an I/O pair.
pub struct Chatbot<L, R, W> {
    lookup: L,
    input: R,
    output: W,
    state: State,
}

impl<L, R, W> Chatbot<L, R, W>
where
    L: OrderLookup,
    R: BufRead,
    W: Write,
{
    pub fn new(lookup: L, input: R, output: W) -> Self {
        Self {
            lookup,
            input,
            output,
            state: State::AwaitingChoice,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Print the greeting, then run rounds until the user stops.
    ///
    /// # Errors
    /// Only I/O failures on the input or output end the loop early.
    /// Lookup failures are printed and the loop carries on.
    pub fn run(&mut self) -> Result<()> {
        render::greeting(&mut self.output)?;

        while self.state != State::Terminated {
            self.state = self.step()?;
            debug!(state = ?self.state, "menu transition");
        }

        writeln!(self.output, "{}", render::FAREWELL)?;
        self.output.flush()?;
        Ok(())
    }

    /// Hand back the lookup backend, input and output.
    pub fn into_parts(self) -> (L, R, W) {
        (self.lookup, self.input, self.output)
    }

    fn step(&mut self) -> Result<State> {
        let next = match self.state {
            State::AwaitingChoice => match self.prompt(render::CHOICE_PROMPT)? {
                None => State::Terminated,
                Some(choice) => match MenuChoice::parse(&choice) {
                    MenuChoice::OrderDetails => State::AwaitingEmailInput,
                    MenuChoice::OrderStatus => State::AwaitingIdentifierInput,
                    MenuChoice::Invalid => {
                        writeln!(self.output, "{}", render::INVALID_CHOICE)?;
                        State::AwaitingContinueDecision
                    }
                },
            },
            State::AwaitingEmailInput => match self.prompt(render::EMAIL_PROMPT)? {
                None => State::Terminated,
                Some(email) => {
                    self.show_order_details(&email)?;
                    State::AwaitingContinueDecision
                }
            },
            State::AwaitingIdentifierInput => match self.prompt(render::IDENTIFIER_PROMPT)? {
                None => State::Terminated,
                Some(identifier) => {
                    self.show_order_status(&identifier)?;
                    State::AwaitingContinueDecision
                }
            },
            State::AwaitingContinueDecision => match self.prompt(render::CONTINUE_PROMPT)? {
                Some(answer) if wants_another(&answer) => State::AwaitingChoice,
                _ => State::Terminated,
            },
            State::Terminated => State::Terminated,
        };
        Ok(next)
    }

    fn show_order_details(&mut self, email: &str) -> Result<()> {
        match self.lookup.order_details(email) {
            Ok(Some(details)) => render::order_details(&mut self.output, &details)?,
            Ok(None) => writeln!(self.output, "{}", render::USER_NOT_FOUND)?,
            Err(err) => {
                warn!(error = %err, "order details lookup failed");
                render::error(&mut self.output, &err)?;
            }
        }
        Ok(())
    }

    fn show_order_status(&mut self, identifier: &str) -> Result<()> {
        match self.lookup.order_status(identifier) {
            Ok(Some(report)) => render::order_status(&mut self.output, &report)?,
            Ok(None) => writeln!(self.output, "{}", render::USER_OR_ORDER_NOT_FOUND)?,
            Err(err) => {
                warn!(error = %err, "order status lookup failed");
                render::error(&mut self.output, &err)?;
            }
        }
        Ok(())
    }

    /// Write `text` without a newline and read one line back.
    ///
    /// Returns `None` at end of input. Only the line terminator is removed.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
