//! Interactive menu loop.
//!
//! [`Driver`] reads commands from any [`BufRead`] and writes prompts, tables and
//! metrics to any [`Write`], delegating every operation to a [`Session`].
//! End of input at the menu ends the loop cleanly.

use crate::algo::SortKey;
use crate::core::{CAPACITY, Component, Labeled, MAX_NAME_LEN, Priority, truncate_to};
use crate::display::{render_components, render_metrics};
use crate::error::{Error, Result};
use crate::input::{is_affirmative, parse_leading_int, read_line};
use crate::metrics::{Clock, MonotonicClock};
use crate::session::Session;
use std::io::{BufRead, Write};
use std::ops::ControlFlow;

/// A menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Quit,
    Register,
    Sort(SortKey),
    Search,
    Show,
}

impl MenuChoice {
    /// Maps a menu number to its entry.
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            0 => Some(MenuChoice::Quit),
            1 => Some(MenuChoice::Register),
            2 => Some(MenuChoice::Sort(SortKey::Name)),
            3 => Some(MenuChoice::Sort(SortKey::Kind)),
            4 => Some(MenuChoice::Sort(SortKey::Priority)),
            5 => Some(MenuChoice::Search),
            6 => Some(MenuChoice::Show),
            _ => None,
        }
    }
}

const MENU: &str = "\n========== ESCAPE TOWER ASSEMBLY ==========
1 - Register components
2 - Sort by NAME (Bubble Sort) and measure (recommended before searching)
3 - Sort by TYPE (Insertion Sort) and measure
4 - Sort by PRIORITY (Selection Sort) and measure
5 - Find key component by NAME (Binary Search) [requires sort by NAME]
6 - Show current components
0 - Quit
Choice: ";

/// Menu loop bound to an input source, an output sink and a [`Session`].
pub struct Driver<R, W, C: Clock = MonotonicClock> {
    input: R,
    output: W,
    session: Session<C>,
}

impl<R: BufRead, W: Write> Driver<R, W, MonotonicClock> {
    /// Creates a driver with a fresh session timed by a [`MonotonicClock`].
    pub fn new(input: R, output: W) -> Self {
        Self::with_session(input, output, Session::new())
    }
}

impl<R: BufRead, W: Write, C: Clock> Driver<R, W, C> {
    /// Creates a driver around an existing session.
    pub fn with_session(input: R, output: W, session: Session<C>) -> Self {
        Self {
            input,
            output,
            session,
        }
    }

    /// Returns the session the menu operates on.
    pub fn session(&self) -> &Session<C> {
        &self.session
    }

    /// Gives back the session and the output sink.
    pub fn into_parts(self) -> (Session<C>, W) {
        (self.session, self.output)
    }

    /// Runs the menu until the user quits or the input ends.
    ///
    /// # Errors
    ///
    /// Only I/O failures on the underlying reader or writer are returned.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.step() {
                Ok(ControlFlow::Continue(())) => {}
                Ok(ControlFlow::Break(())) => break,
                Err(Error::UnexpectedEof) => {
                    tracing::debug!("input exhausted, leaving menu");
                    writeln!(self.output)?;
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn step(&mut self) -> Result<ControlFlow<()>> {
        self.prompt(MENU)?;
        let line = read_line(&mut self.input)?;
        let Some(number) = parse_leading_int(&line) else {
            writeln!(self.output, "Invalid input.")?;
            return Ok(ControlFlow::Continue(()));
        };
        let Some(choice) = MenuChoice::from_number(number) else {
            writeln!(self.output, "Invalid option.")?;
            return Ok(ControlFlow::Continue(()));
        };
        tracing::debug!(?choice, "menu choice");

        match choice {
            MenuChoice::Quit => {
                writeln!(self.output, "Closing the assembly module. Good luck escaping!")?;
                return Ok(ControlFlow::Break(()));
            }
            MenuChoice::Register => {
                self.register()?;
            }
            MenuChoice::Sort(key) => {
                self.sort(key)?;
            }
            MenuChoice::Search => {
                self.search()?;
            }
            MenuChoice::Show => {
                self.show()?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        write!(self.output, "{}", render_components(self.session.components()))?;
        Ok(())
    }

    fn register(&mut self) -> Result<()> {
        // Registration always starts from an empty, unsorted collection.
        self.session.register(Vec::new())?;
        self.prompt(&format!(
            "\nHow many components do you want to register? (1-{CAPACITY}): "
        ))?;
        let line = read_line(&mut self.input)?;
        let quantity = match parse_leading_int(&line) {
            Some(n) if n >= 1 => n.min(CAPACITY as i64) as usize,
            _ => {
                writeln!(self.output, "Invalid input. Registration aborted.")?;
                return self.show();
            }
        };

        let mut components = Vec::with_capacity(quantity);
        for i in 0..quantity {
            writeln!(self.output, "\n--- Component {} ---", i + 1)?;
            self.prompt("Name: ")?;
            let name = read_line(&mut self.input)?;
            self.prompt("Type (e.g. control, support, propulsion): ")?;
            let kind = read_line(&mut self.input)?;
            let priority = self.read_priority()?;
            components.push(Component::with_priority(&name, &kind, priority));
        }

        self.session.register(components)?;
        writeln!(
            self.output,
            "\nRegistration complete: {} components.",
            self.session.components().len()
        )?;
        self.show()
    }

    fn read_priority(&mut self) -> Result<Priority> {
        loop {
            self.prompt("Priority (1-10): ")?;
            let line = read_line(&mut self.input)?;
            match parse_leading_int(&line).map(Priority::try_from) {
                Some(Ok(priority)) => return Ok(priority),
                _ => writeln!(self.output, "Invalid value. Try again.")?,
            }
        }
    }

    fn sort(&mut self, key: SortKey) -> Result<()> {
        match self.session.sort(key) {
            Ok(metrics) => {
                let label = format!("{} by {key} complete", key.algorithm());
                writeln!(self.output, "\n{}", render_metrics(&label, &metrics))?;
                self.show()
            }
            Err(Error::EmptyCollection) => {
                writeln!(self.output, "No components registered.")?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn search(&mut self) -> Result<()> {
        if self.session.components().is_empty() {
            writeln!(self.output, "No components registered.")?;
            return Ok(());
        }

        if !self.session.is_sorted_by_name() {
            writeln!(
                self.output,
                "Warning: binary search requires the components to be sorted by NAME."
            )?;
            self.prompt("Run Bubble Sort by NAME now? (y/n): ")?;
            let answer = read_line(&mut self.input)?;
            if !is_affirmative(&answer) {
                writeln!(
                    self.output,
                    "Search cancelled. Sort by NAME before using binary search."
                )?;
                return Ok(());
            }
            let metrics = self.session.sort(SortKey::Name)?;
            let label = format!("{} by {} complete", SortKey::Name.algorithm(), SortKey::Name);
            writeln!(self.output, "\n{}", render_metrics(&label, &metrics))?;
        }

        self.prompt("Enter the name of the key component to find: ")?;
        let line = read_line(&mut self.input)?;
        let key = truncate_to(&line, MAX_NAME_LEN);

        let found = self.session.search(key)?;
        match found.index.and_then(|i| self.session.get(i).map(|c| (i, c))) {
            Some((index, component)) => {
                writeln!(
                    self.output,
                    "\nComponent found at position {index} (ID {}):",
                    index + 1
                )?;
                writeln!(
                    self.output,
                    "Name: {} | Type: {} | Priority: {}",
                    component.name(),
                    component.kind(),
                    component.priority()
                )?;
            }
            None => {
                writeln!(self.output, "\nComponent '{key}' not found.")?;
            }
        }
        writeln!(self.output, "{}", render_metrics("Binary search", &found.metrics))?;
        Ok(())
    }
}
