use std::error::Error;
use std::fs;
use std::path::Path;
use std::process;

use clap::{App, Arg};
use log::{error, info, warn};

use rqgen::answer;
use rqgen::fixture;
use rqgen::fixture::FixtureError;
use rqgen::generator;
use rqgen::generator::Variant;

fn main() {
    env_logger::init();

    let matches = App::new("rqgen fixture checker")
        .version("0.1")
        .author("ICEY <icey@icey.tech>")
        .about("Validates generated fixture files and their expected-output files")
        .arg(Arg::with_name("dir")
            .short("d")
            .long("dir")
            .value_name("DIR")
            .help("Choose the directory the fixture files are read from")
            .takes_value(true))
        .arg(Arg::with_name("mode")
            .short("m")
            .long("mode")
            .value_name("MODE")
            .help("Choose the generation mode the fixtures should follow, 'signed' or 'positive'")
            .takes_value(true))
        .arg(Arg::with_name("max")
            .short("x")
            .long("max")
            .value_name("MAX")
            .help("Also check every value against this magnitude bound")
            .takes_value(true))
        .get_matches();

    let variant = match matches.value_of("mode").unwrap_or("signed") {
        "signed" => Variant::Signed,
        "positive" => Variant::Positive,
        other => {
            error!("unknown generation mode '{}'", other);
            process::exit(1)
        }
    };

    let max_value = match matches.value_of("max") {
        Some(raw) => match raw.parse::<i64>() {
            Ok(value) => Some(value),
            Err(_) => {
                error!("max must be a base-10 integer");
                process::exit(1)
            }
        },
        None => None
    };

    let dir = Path::new(matches.value_of("dir").unwrap_or("tests"));
    let indices = match collect_indices(dir) {
        Ok(indices) => indices,
        Err(e) => {
            error!("failed reading fixture directory '{}': {}", dir.display(), e);
            process::exit(1)
        }
    };

    if indices.is_empty() {
        warn!("no fixture files found under '{}'", dir.display());
    }

    let mut failed = 0usize;
    for &index in indices.iter() {
        match check_file(dir, index, variant, max_value) {
            Ok(_) => {
                info!("{}: ok", generator::fixture_file_name(index));
            },
            Err(e) => {
                error!("{}: {}", generator::fixture_file_name(index), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        error!("{} of {} fixture file(s) failed validation", failed, indices.len());
        process::exit(1);
    }
    info!("{} fixture file(s) validated", indices.len());
}

fn collect_indices(dir: &Path) -> Result<Vec<i64>, Box<dyn Error>> {
    let mut indices = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if let Some(stem) = name.strip_suffix("test.txt") {
            if let Ok(index) = stem.parse() {
                indices.push(index);
            }
        }
    }
    indices.sort();
    Ok(indices)
}

fn check_file(dir: &Path, index: i64, variant: Variant, max_value: Option<i64>) -> Result<(), Box<dyn Error>> {
    let commands = fixture::load_fixture(&dir.join(generator::fixture_file_name(index)))?;
    fixture::verify_shape(&commands, variant)?;
    if let Some(max_value) = max_value {
        let (lo, hi) = variant.bounds(max_value);
        fixture::verify_bounds(&commands, lo, hi)?;
    }

    let answer_path = dir.join(generator::answer_file_name(index));
    if answer_path.is_file() {
        let recorded = fixture::load_answer(&answer_path)?;
        let expected = answer::expected_output(&commands);
        // token-wise comparison, hand-written answer files may differ in whitespace
        if !recorded.split_whitespace().eq(expected.split_whitespace()) {
            return Err(Box::new(FixtureError::new("answer file does not match the recomputed expected output")));
        }
    }
    Ok(())
}
