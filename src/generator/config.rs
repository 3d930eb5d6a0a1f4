use std::fmt;
use std::fmt::{Display, Formatter};
use std::error::Error;
use std::io;
use std::io::Write;
use std::path::PathBuf;

use clap::ArgMatches;
use log::{info, warn};

/// The error type used for configuration intake and validation
#[derive(Debug)]
pub struct ConfigError {
    description: String
}

impl ConfigError {
    pub fn new(description: &str) -> Self {
        ConfigError { description: description.to_owned() }
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "config error: {}", self.description)
    }
}

impl Error for ConfigError {
}

/// A generation profile, deciding value bounds and the per-file command count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// values drawn from `[-max_value, max_value]`, 100 commands per file
    Signed,
    /// values drawn from `[1, max_value]`, 15 commands per file, files start with a key lookup
    Positive
}

impl Variant {
    pub fn requests_per_file(self) -> usize {
        match self {
            Variant::Signed => 100,
            Variant::Positive => 15
        }
    }

    /// Inclusive bounds every generated integer must lie within
    pub fn bounds(self, max_value: i64) -> (i64, i64) {
        match self {
            Variant::Signed => (-max_value, max_value),
            Variant::Positive => (1, max_value)
        }
    }

    /// Whether the first command of every file is forced to be a key lookup
    pub fn forces_leading_lookup(self) -> bool {
        match self {
            Variant::Signed => false,
            Variant::Positive => true
        }
    }

    /// The fixed start index of the variant, if it has one
    pub fn fixed_start_index(self) -> Option<i64> {
        match self {
            Variant::Signed => None,
            Variant::Positive => Some(8)
        }
    }
}

pub struct GeneratorConfig {
    pub variant: Variant,
    pub start_index: i64,
    pub file_count: u64,
    pub max_value: i64,
    pub requests_per_file: usize,
    pub output_dir: PathBuf,
    pub seed: Option<u64>,
    pub emit_answers: bool
}

impl GeneratorConfig {
    pub fn from_arg_matches(matches: ArgMatches) -> Result<Self, ConfigError> {
        let variant = match matches.value_of("mode") {
            Some("signed") => Variant::Signed,
            Some("positive") => Variant::Positive,
            Some(other) => {
                return Err(ConfigError::new(&format!("unknown generation mode '{}'", other)))
            },
            None => {
                info!("no mode provided from commandline, using default mode 'signed'");
                Variant::Signed
            }
        };

        let start_index = match variant.fixed_start_index() {
            Some(fixed) => {
                if matches.is_present("start") {
                    warn!("start index is fixed at {} in positive mode, ignoring --start", fixed);
                }
                fixed
            },
            None => arg_or_prompt(&matches, "start", "Enter start index: ")?
        };

        let file_count = arg_or_prompt(&matches, "count", "Enter tests number: ")?;
        if file_count < 0 {
            return Err(ConfigError::new("tests number must not be negative"));
        }

        let max_value = arg_or_prompt(&matches, "max", "Enter max number: ")?;

        let output_dir = matches.value_of("dir").unwrap_or_else(|| {
            info!("no output directory provided from commandline, using default directory 'tests'");
            "tests"
        });

        let seed = match matches.value_of("seed") {
            Some(raw) => {
                Some(raw.parse().map_err(|_| {
                    ConfigError::new("seed must be a base-10 unsigned integer")
                })?)
            },
            None => None
        };

        let config = GeneratorConfig {
            variant,
            start_index,
            file_count: file_count as u64,
            max_value,
            requests_per_file: variant.requests_per_file(),
            output_dir: PathBuf::from(output_dir),
            seed,
            emit_answers: matches.is_present("answers")
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration before any file I/O begins
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_value < 1 {
            return Err(ConfigError::new("max number must be a positive integer"));
        }
        if !self.output_dir.is_dir() {
            return Err(ConfigError::new(&format!("output directory '{}' does not exist",
                                                 self.output_dir.display())));
        }
        Ok(())
    }
}

fn arg_or_prompt(matches: &ArgMatches, name: &str, prompt: &str) -> Result<i64, ConfigError> {
    match matches.value_of(name) {
        Some(raw) => {
            raw.parse().map_err(|_| {
                ConfigError::new(&format!("{} must be a base-10 integer", name))
            })
        },
        None => prompt_int(prompt)
    }
}

fn prompt_int(prompt: &str) -> Result<i64, ConfigError> {
    print!("{}", prompt);
    let _ = io::stdout().flush();

    let mut line = String::new();
    io::stdin().read_line(&mut line).map_err(|e| {
        ConfigError::new(&format!("failed reading from stdin: {}", e))
    })?;
    line.trim().parse().map_err(|_| ConfigError::new("input must be a base-10 integer"))
}
