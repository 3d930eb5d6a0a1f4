use std::process;

use clap::{App, Arg};
use log::error;
use rand::rngs::StdRng;
use rand::SeedableRng;

use rqgen::generator;
use rqgen::generator::GeneratorConfig;

fn main() {
    env_logger::init();

    let matches = App::new("rqgen fixture generator")
        .version("0.1")
        .author("ICEY <icey@icey.tech>")
        .about("Generates randomized key/range-query command fixtures for a program under test")
        .arg(Arg::with_name("mode")
            .short("m")
            .long("mode")
            .value_name("MODE")
            .help("Choose the generation mode, 'signed' or 'positive'")
            .takes_value(true))
        .arg(Arg::with_name("start")
            .short("s")
            .long("start")
            .value_name("INDEX")
            .help("Choose the first test index (prompted in signed mode if missing, fixed in positive mode)")
            .takes_value(true))
        .arg(Arg::with_name("count")
            .short("n")
            .long("count")
            .value_name("COUNT")
            .help("Choose how many fixture files to generate (prompted if missing)")
            .takes_value(true))
        .arg(Arg::with_name("max")
            .short("x")
            .long("max")
            .value_name("MAX")
            .help("Choose the magnitude bound for generated values (prompted if missing)")
            .takes_value(true))
        .arg(Arg::with_name("dir")
            .short("d")
            .long("dir")
            .value_name("DIR")
            .help("Choose the output directory the fixture files are written into")
            .takes_value(true))
        .arg(Arg::with_name("seed")
            .long("seed")
            .value_name("SEED")
            .help("Seed the random source for a reproducible run")
            .takes_value(true))
        .arg(Arg::with_name("answers")
            .long("answers")
            .help("Also write an expected-output file next to every fixture file"))
        .get_matches();

    let config = match GeneratorConfig::from_arg_matches(matches) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            process::exit(1)
        }
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy()
    };

    if let Err(e) = generator::generate(&config, &mut rng) {
        error!("fixture generation aborted: {}", e);
        process::exit(1);
    }
}
