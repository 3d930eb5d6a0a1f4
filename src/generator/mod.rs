//! The fixture generation core
//!
//! Draws randomized command sequences and writes them out as fixture files, one file per test
//! index. The random source is passed in by the caller, so a seeded run reproduces its output
//! byte for byte.

pub mod config;
pub use config::{ConfigError, GeneratorConfig, Variant};

use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use log::info;
use rand::Rng;

use crate::answer;
use crate::command;
use crate::command::Command;

/// Name of the fixture file for the given test index
pub fn fixture_file_name(index: i64) -> String {
    format!("{}test.txt", index)
}

/// Name of the expected-output file for the given test index
pub fn answer_file_name(index: i64) -> String {
    format!("{}answer.txt", index)
}

/// Generate all fixture files described by `config`, returning the written paths in order
///
/// Validates the configuration before touching the filesystem. A filesystem error aborts the
/// remaining iterations and leaves already-written files intact; re-running with the same index
/// range truncates and regenerates those files from fresh draws.
pub fn generate<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    config.validate()?;

    let mut written = Vec::new();
    for index in config.start_index..config.start_index + config.file_count as i64 {
        let commands = gen_commands(config, rng);

        let path = config.output_dir.join(fixture_file_name(index));
        let mut file = fs::File::create(&path)?;
        file.write_all(command::serialize_sequence(&commands).as_bytes())?;
        written.push(path);

        if config.emit_answers {
            let answer_path = config.output_dir.join(answer_file_name(index));
            let mut answer_file = fs::File::create(&answer_path)?;
            answer_file.write_all(answer::expected_output(&commands).as_bytes())?;
            written.push(answer_path);
        }
    }

    info!("generated {} fixture file(s) under '{}'",
          config.file_count, config.output_dir.display());
    Ok(written)
}

/// Draw one file's worth of commands
pub fn gen_commands<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Vec<Command> {
    let mut ret = Vec::with_capacity(config.requests_per_file);
    for j in 0..config.requests_per_file {
        ret.push(gen_command(config, rng, j == 0));
    }
    ret
}

// The coin flip is drawn even when the leading command gets forced; forcing overrides the
// choice, it does not skip the draw.
fn gen_command<R: Rng>(config: &GeneratorConfig, rng: &mut R, first: bool) -> Command {
    let (lo, hi) = config.variant.bounds(config.max_value);
    let lookup = rng.gen::<bool>();
    if lookup || (first && config.variant.forces_leading_lookup()) {
        Command::KeyLookup(rng.gen_range(lo, hi + 1))
    } else {
        Command::RangeQuery(rng.gen_range(lo, hi + 1), rng.gen_range(lo, hi + 1))
    }
}
