//! Describes the textual command format used by the generated fixture files
//!
//! The generator uses the `Command` APIs to serialize the commands it draws before writing them
//! to a fixture file. The checker (and the answer evaluator) use these APIs to parse a fixture
//! file's content back into commands.

use std::fmt;
use std::fmt::{Display, Formatter};
use std::error::Error;
use std::str::SplitWhitespace;

/// The error type used by the command module
#[derive(Debug)]
pub struct CommandError {
    description: String
}

impl CommandError {
    pub fn new(description: &str) -> Self {
        CommandError { description: description.to_owned() }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "command error: {}", self.description)
    }
}

impl Error for CommandError {
}

const KEY_LOOKUP: &str = "k";
const RANGE_QUERY: &str = "q";

// Command format
//  -- 1 tag token
//     'k'
//     -- 1 integer token
//     'q'
//     -- 2 integer tokens

/// A single command in a fixture file, see its enumerators for further information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    KeyLookup(i64),
    RangeQuery(i64, i64)
}

impl Command {
    /// Serialize a `Command` into its token text, without the separating space
    pub fn serialize(&self) -> String {
        match self {
            Command::KeyLookup(value) => format!("{} {}", KEY_LOOKUP, value),
            Command::RangeQuery(lo, hi) => format!("{} {} {}", RANGE_QUERY, lo, hi)
        }
    }
}

/// Serialize a sequence of commands into fixture-file text
///
/// Every command, the last one included, is followed by exactly one space; no newline is
/// appended.
pub fn serialize_sequence(commands: &[Command]) -> String {
    let mut ret = String::new();
    for command in commands {
        ret.push_str(&command.serialize());
        ret.push(' ');
    }
    ret
}

/// Parse fixture-file text into the commands it contains.
///
/// Fails if a tag token is unknown, or an argument token is missing or not a base-10 integer
pub fn parse_sequence(raw: &str) -> Result<Vec<Command>, CommandError> {
    let mut tokens = raw.split_whitespace();
    let mut ret = Vec::new();
    while let Some(tag) = tokens.next() {
        match tag {
            KEY_LOOKUP => {
                ret.push(Command::KeyLookup(next_int(&mut tokens)?));
            },
            RANGE_QUERY => {
                let lo = next_int(&mut tokens)?;
                let hi = next_int(&mut tokens)?;
                ret.push(Command::RangeQuery(lo, hi));
            },
            _ => {
                return Err(CommandError::new("unknown command tag"))
            }
        }
    }
    Ok(ret)
}

fn next_int(tokens: &mut SplitWhitespace) -> Result<i64, CommandError> {
    match tokens.next() {
        Some(token) => {
            token.parse().map_err(|_| CommandError::new("command argument is not an integer"))
        },
        None => Err(CommandError::new("command is missing an argument"))
    }
}
