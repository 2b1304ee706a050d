//! The textual command stream that drives a `MaxHeap`.
//!
//! The first non-blank line holds the number of commands `n`. Each of the next `n`
//! lines is either `Insert <x>` or `ExtractMax`; operation names are matched without
//! regard to case. Every `ExtractMax` produces one output line holding the extracted
//! priority.

use crate::error::Error;
use crate::max_heap::MaxHeap;
use crate::Priority;
use core::fmt::{Display, Formatter};
use log::{debug, info};
use std::io::{BufRead, Write};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Insert(Priority),
    ExtractMax,
}

impl Command {
    /// Parses one command line. `line` is the 1-based line number, used for errors.
    pub fn parse(line: usize, text: &str) -> Result<Command, Error> {
        let mut words = text.split_whitespace();
        let op = words.next().unwrap_or("");
        let command = match op.to_ascii_lowercase().as_str() {
            "insert" => {
                let arg = words.next().ok_or(Error::MissingArgument { line })?;
                let priority = arg.parse::<Priority>().map_err(|_| Error::BadPriority {
                    line,
                    text: arg.to_string(),
                })?;
                Command::Insert(priority)
            }
            "extractmax" => Command::ExtractMax,
            _ => {
                return Err(Error::UnknownCommand {
                    line,
                    text: text.trim().to_string(),
                })
            }
        };
        if words.next().is_some() {
            return Err(Error::TrailingInput { line });
        }
        Ok(command)
    }
}

impl Display for Command {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Command::Insert(priority) => write!(fmt, "Insert {}", priority),
            Command::ExtractMax => write!(fmt, "ExtractMax"),
        }
    }
}

/// Reads the operation count, then yields exactly that many commands.
///
/// Blank lines are skipped and do not count as commands. Anything after the last
/// counted command is left unread.
pub struct CommandReader<R> {
    input: R,
    line: usize,
    expected: usize,
    produced: usize,
    done: bool,
    buf: String,
}

impl<R: BufRead> CommandReader<R> {
    pub fn new(input: R) -> Result<Self, Error> {
        let mut reader = Self {
            input,
            line: 0,
            expected: 0,
            produced: 0,
            done: false,
            buf: String::new(),
        };
        if !reader.next_line()? {
            return Err(Error::MissingCount);
        }
        let line = reader.line;
        let text = reader.buf.trim();
        let expected = text.parse::<usize>().map_err(|_| Error::BadCount {
            line,
            text: text.to_string(),
        })?;
        reader.expected = expected;
        debug!("command stream: expecting {} commands", reader.expected);
        Ok(reader)
    }

    /// The operation count announced on the first line.
    pub fn expected(&self) -> usize {
        self.expected
    }

    // Loads the next non-blank line into `buf`. Returns false at end of input.
    fn next_line(&mut self) -> Result<bool, Error> {
        loop {
            self.buf.clear();
            if self.input.read_line(&mut self.buf)? == 0 {
                return Ok(false);
            }
            self.line += 1;
            if !self.buf.trim().is_empty() {
                return Ok(true);
            }
        }
    }
}

impl<R: BufRead> Iterator for CommandReader<R> {
    type Item = Result<Command, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.produced == self.expected {
            return None;
        }
        match self.next_line() {
            Ok(true) => {}
            Ok(false) => {
                self.done = true;
                return Some(Err(Error::UnexpectedEof {
                    expected: self.expected,
                    found: self.produced,
                }));
            }
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        }
        self.produced += 1;
        Some(Command::parse(self.line, &self.buf))
    }
}

/// Applies one command to the heap. Returns the extracted priority for `ExtractMax`.
pub fn execute<T: Default>(
    heap: &mut MaxHeap<T>,
    command: Command,
) -> Result<Option<Priority>, Error> {
    match command {
        Command::Insert(priority) => {
            heap.insert(priority, T::default());
            Ok(None)
        }
        Command::ExtractMax => {
            let entry = heap.extract_max()?;
            Ok(Some(entry.priority()))
        }
    }
}

/// Runs a whole command stream, writing one line per extracted priority.
/// Returns the number of commands executed.
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<usize, Error> {
    let reader = CommandReader::new(input)?;
    // The count is untrusted; don't let it size the allocation on its own.
    let mut heap: MaxHeap<()> = MaxHeap::with_capacity(reader.expected().min(1 << 16));
    let mut executed = 0;
    for command in reader {
        if let Some(priority) = execute(&mut heap, command?)? {
            writeln!(output, "{}", priority)?;
        }
        executed += 1;
    }
    output.flush()?;
    info!(
        "executed {} commands, {} entries left in queue",
        executed,
        heap.len()
    );
    Ok(executed)
}
