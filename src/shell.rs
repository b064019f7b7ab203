//! A line-oriented menu for driving a [`Tree`] by hand. It shows a menu, reads a command, and for
//! inserts reads one more line holding the value.
//!
//! The loop is written against [`BufRead`]/[`Write`] so it can run on stdin/stdout or on in-memory
//! buffers.
//!
//! # Examples
//!
//! ```
//! use ordtree::shell::Shell;
//! use ordtree::tree::Tree;
//!
//! let input = b"1\n5\n1\n3\n2\n3\n";
//! let mut output = Vec::new();
//! let mut tree = Tree::new();
//!
//! Shell::new(&input[..], &mut output).run(&mut tree).unwrap();
//!
//! let output = String::from_utf8(output).unwrap();
//! assert!(output.contains("3 5\n"));
//! ```

use std::error;
use std::fmt;
use std::io::{self, BufRead, Write};

use crate::tree::Tree;

/// Shown before every command is read.
pub const MENU: &str = "1.Insert 2.Inorder 3.Exit\n";

/// Shown before the value of an insert is read.
pub const VALUE_PROMPT: &str = "Value: ";

/// One menu choice.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Read a value and insert it into the tree.
    Insert,
    /// Print the tree's values in ascending order.
    Inorder,
    /// Leave the loop.
    Exit,
}

impl Command {
    /// Parses a command line. Surrounding whitespace is ignored; anything other than `1`, `2` or
    /// `3` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::shell::Command;
    ///
    /// assert_eq!(Command::parse(" 2\n"), Some(Command::Inorder));
    /// assert_eq!(Command::parse("insert"), None);
    /// ```
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "1" => Some(Self::Insert),
            "2" => Some(Self::Inorder),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Errors that stop the loop. Bad user input never does; it's reported and the menu comes back.
#[derive(Debug)]
pub enum ShellError {
    /// Reading a line or writing a response failed.
    Io(io::Error),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Io(e) => write!(f, "i/o failure: {}", e),
        }
    }
}

impl error::Error for ShellError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ShellError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for ShellError {
    fn from(e: io::Error) -> Self {
        ShellError::Io(e)
    }
}

/// The prompt loop. Owns its input and output streams; the tree is borrowed per [`Shell::run`].
pub struct Shell<R, W> {
    input: R,
    output: W,
    /// Raw bytes of the last line read. Input isn't required to be UTF-8; bad bytes are decoded
    /// lossily and then fail to parse like any other junk.
    line: Vec<u8>,
}

impl<R, W> Shell<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a shell reading commands from `input` and writing prompts and results to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: Vec::new(),
        }
    }

    /// Runs until an exit command or end of input. Returns an error only when a stream fails.
    pub fn run(&mut self, tree: &mut Tree<i64>) -> Result<(), ShellError> {
        loop {
            self.prompt(MENU)?;
            if !self.read_line()? {
                log::debug!("end of input at menu");
                return Ok(());
            }

            let text = String::from_utf8_lossy(&self.line);
            let Some(command) = Command::parse(&text) else {
                log::debug!("ignoring unknown command {:?}", text.trim());
                continue;
            };
            log::debug!("command {:?}", command);

            match command {
                Command::Insert => {
                    if !self.insert(tree)? {
                        log::debug!("end of input at value prompt");
                        return Ok(());
                    }
                }
                Command::Inorder => self.print_inorder(tree)?,
                Command::Exit => return Ok(()),
            }
        }
    }

    /// Handles the value half of an insert. Returns `false` if the input ran out before a value
    /// line arrived.
    fn insert(&mut self, tree: &mut Tree<i64>) -> Result<bool, ShellError> {
        self.prompt(VALUE_PROMPT)?;
        if !self.read_line()? {
            return Ok(false);
        }

        let text = String::from_utf8_lossy(&self.line);
        let text = text.trim();
        match text.parse::<i64>() {
            Ok(value) => {
                tree.insert(value);
            }
            Err(e) => {
                log::warn!("rejecting value {:?}: {}", text, e);
                writeln!(self.output, "Invalid value: {}", text)?;
            }
        }
        Ok(true)
    }

    fn print_inorder(&mut self, tree: &Tree<i64>) -> Result<(), ShellError> {
        let mut values = tree.iter();
        if let Some(first) = values.next() {
            write!(self.output, "{}", first)?;
            for value in values {
                write!(self.output, " {}", value)?;
            }
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<(), ShellError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads the next line into `self.line`. Returns `false` at end of input.
    fn read_line(&mut self) -> Result<bool, ShellError> {
        self.line.clear();
        Ok(self.input.read_until(b'\n', &mut self.line)? > 0)
    }
}
