//! Form state that recomputes its [`Difference`] on every change.
//!
//! [`Calculator`] holds the raw inputs the way a date-picker form would
//! (empty or half-typed values included) and keeps the last result in sync
//! with them. [`Session`] drives a calculator from line-oriented commands.

use std::io::{BufRead, Write};

use crate::date::Date;
use crate::difference::{Difference, compute};
use crate::error::Result;
use crate::fmt::{self, Style};

/// Inputs of a date difference calculation and their current result.
///
/// # Example
///
/// ```
/// use diferencilo::{Calculator, Date};
///
/// let today = Date::from_gregorian(2024, 10, 16).unwrap();
/// let mut calc = Calculator::new(today);
/// assert_eq!("2023-10-16", calc.start());
/// assert_eq!(366, calc.result().unwrap().total_days);
///
/// calc.set_start("");
/// assert_eq!(None, calc.result());
///
/// calc.set_start("2024-10-01");
/// calc.set_include_end_date(true);
/// assert_eq!(16, calc.result().unwrap().total_days);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    start: String,
    end: String,
    include_end_date: bool,
    result: Option<Difference>,
}

impl Calculator {
    /// Starts one year before `today` and ends on `today`, end day excluded.
    pub fn new(today: Date) -> Self {
        let start = today.add_years(-1).unwrap_or(today);
        Self::with_inputs(&start.iso_gregorian(), &today.iso_gregorian(), false)
    }
    pub fn with_inputs(start: &str, end: &str, include_end_date: bool) -> Self {
        let mut calc = Calculator {
            start: start.to_owned(),
            end: end.to_owned(),
            include_end_date,
            result: None,
        };
        calc.recompute();
        calc
    }

    pub fn start(&self) -> &str {
        &self.start
    }
    pub fn end(&self) -> &str {
        &self.end
    }
    pub fn include_end_date(&self) -> bool {
        self.include_end_date
    }
    /// Result for the current inputs, `None` while either date is empty or
    /// invalid.
    pub fn result(&self) -> Option<Difference> {
        self.result
    }

    pub fn set_start(&mut self, start: &str) {
        start.clone_into(&mut self.start);
        self.recompute();
    }
    pub fn set_end(&mut self, end: &str) {
        end.clone_into(&mut self.end);
        self.recompute();
    }
    pub fn set_include_end_date(&mut self, include_end_date: bool) {
        self.include_end_date = include_end_date;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.result = compute(&self.start, &self.end, self.include_end_date);
        tracing::debug!(
            start = %self.start,
            end = %self.end,
            include_end_date = self.include_end_date,
            result = ?self.result,
            "recomputed"
        );
    }
}

const HELP: &str = "\
commands:
  start [YYYY-MM-DD]   set the start date (clear it without a date)
  end [YYYY-MM-DD]     set the end date (clear it without a date)
  include on|off       count the end day as well
  show                 print the current result
  help                 print this message
  quit                 leave
";

const NO_RESULT: &str = "Enter both dates to see the difference.\n";

/// An interactive session around a [`Calculator`].
///
/// Each command that changes an input prints the new result right away.
///
/// # Example
///
/// ```
/// use diferencilo::{Calculator, Session};
/// use diferencilo::fmt::Style;
///
/// let calc = Calculator::with_inputs("", "2024-01-01", false);
/// let mut session = Session::new(calc, Style::default());
/// let mut out = Vec::new();
/// session.run("start 2023-12-25\nquit\n".as_bytes(), &mut out).unwrap();
///
/// let out = String::from_utf8(out).unwrap();
/// assert!(out.contains("Total Difference: 0 Years, 0 Months, 7 Days"));
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    calc: Calculator,
    style: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

impl Session {
    pub fn new(calc: Calculator, style: Style) -> Self {
        Session { calc, style }
    }
    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    /// Reads commands from `input` until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        self.show(&mut output)?;
        for line in input.lines() {
            if self.execute(line?.trim(), &mut output)? == Flow::Quit {
                break;
            }
        }
        output.flush()?;
        Ok(())
    }

    fn execute<W: Write>(&mut self, line: &str, output: &mut W) -> Result<Flow> {
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };
        match command {
            "" => return Ok(Flow::Continue),
            "start" => self.calc.set_start(arg),
            "end" => self.calc.set_end(arg),
            "include" => match arg {
                "on" => self.calc.set_include_end_date(true),
                "off" => self.calc.set_include_end_date(false),
                _ => {
                    writeln!(output, "expected `include on` or `include off`")?;
                    return Ok(Flow::Continue);
                }
            },
            "show" => {}
            "help" => {
                output.write_all(HELP.as_bytes())?;
                return Ok(Flow::Continue);
            }
            "quit" | "exit" => return Ok(Flow::Quit),
            _ => {
                tracing::warn!(command, "unknown command");
                writeln!(output, "unknown command `{command}`, try `help`")?;
                return Ok(Flow::Continue);
            }
        }
        self.show(output)?;
        Ok(Flow::Continue)
    }

    fn show<W: Write>(&self, output: &mut W) -> Result<()> {
        match self.calc.result() {
            Some(diff) => output.write_all(fmt::report(&diff, &self.style).as_bytes())?,
            None => output.write_all(NO_RESULT.as_bytes())?,
        }
        Ok(())
    }
}
