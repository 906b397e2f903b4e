use anyhow::{anyhow, Context, Result};
use clap::{App, Arg, ArgMatches};
use log::LevelFilter;
use treap_collections::stress::StressConfig;

#[derive(Debug, PartialEq)]
pub struct Configuration {
    pub stress: StressConfig,
    pub log_level: LevelFilter,
}

pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("treap-stress")
        .about("Cross-checks the treap collections against std::collections::BTreeSet.")
        .arg(
            Arg::with_name("iterations")
                .short("n")
                .long("iterations")
                .value_name("N")
                .help("Number of random operations. Default is 20000.")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("max-value")
                .long("max-value")
                .value_name("MAX")
                .help("Keys are drawn from 0..=MAX. Default is 5000.")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("Seed for the operation stream and the treap priorities. Default is 1.")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Can be error/warn/info/debug/trace. Default is the info level.")
                .takes_value(true),
        )
}

impl Configuration {
    pub fn parse(matches: &ArgMatches) -> Result<Configuration> {
        let default = StressConfig::default();
        let iterations = match matches.value_of("iterations") {
            Some(iterations) => iterations
                .parse()
                .with_context(|| format!("invalid iterations: {}", iterations))?,
            None => default.iterations,
        };
        let max_value = match matches.value_of("max-value") {
            Some(max_value) => max_value
                .parse()
                .with_context(|| format!("invalid max-value: {}", max_value))?,
            None => default.max_value,
        };
        let seed = match matches.value_of("seed") {
            Some(seed) => seed
                .parse()
                .with_context(|| format!("invalid seed: {}", seed))?,
            None => default.seed,
        };
        let log_level = match matches.value_of("log-level") {
            Some(level) => level
                .parse()
                .map_err(|_| anyhow!("invalid log-level: {}", level))?,
            None => LevelFilter::Info,
        };

        Ok(Configuration {
            stress: StressConfig::new(iterations, max_value, seed),
            log_level,
        })
    }
}
