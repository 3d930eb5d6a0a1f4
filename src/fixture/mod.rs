//! Reading generated fixture files back and checking them
//!
//! This is the consumer-side counterpart of the generator: it loads a fixture file from disk,
//! parses it into commands, and checks the properties the generator promises about its output.

use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

use crate::command;
use crate::command::Command;
use crate::generator::Variant;

/// The error type used by the fixture module
#[derive(Debug)]
pub struct FixtureError {
    description: String
}

impl FixtureError {
    pub fn new(description: &str) -> Self {
        FixtureError { description: description.to_owned() }
    }
}

impl Display for FixtureError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "fixture error: {}", self.description)
    }
}

impl Error for FixtureError {
}

/// Load a fixture file and parse its content into commands
///
/// Fails if the file cannot be read or its content does not follow the command grammar
pub fn load_fixture(path: &Path) -> Result<Vec<Command>, Box<dyn Error>> {
    let raw = fs::read_to_string(path)?;
    Ok(command::parse_sequence(&raw)?)
}

/// Load an expected-output file's text
pub fn load_answer(path: &Path) -> Result<String, Box<dyn Error>> {
    Ok(fs::read_to_string(path)?)
}

/// Check the structural promises of a generation profile: command count and, where the profile
/// forces one, the leading key lookup
pub fn verify_shape(commands: &[Command], variant: Variant) -> Result<(), FixtureError> {
    if commands.len() != variant.requests_per_file() {
        return Err(FixtureError::new(&format!("expected {} commands, found {}",
                                              variant.requests_per_file(), commands.len())));
    }
    if variant.forces_leading_lookup() {
        match commands.first() {
            Some(Command::KeyLookup(_)) => {},
            _ => return Err(FixtureError::new("first command is not a key lookup"))
        }
    }
    Ok(())
}

/// Check that every integer drawn by `commands` lies within `[lo, hi]`
pub fn verify_bounds(commands: &[Command], lo: i64, hi: i64) -> Result<(), FixtureError> {
    for command in commands {
        let in_bounds = match command {
            Command::KeyLookup(value) => *value >= lo && *value <= hi,
            Command::RangeQuery(a, b) => *a >= lo && *a <= hi && *b >= lo && *b <= hi
        };
        if !in_bounds {
            return Err(FixtureError::new(&format!("command '{}' draws outside [{}, {}]",
                                                  command.serialize(), lo, hi)));
        }
    }
    Ok(())
}
