#[macro_use]
extern crate log;

extern crate arguments;
extern crate configuration;
extern crate csv;
extern crate simulator;
extern crate sql;
extern crate sqlite;
extern crate term;

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use arguments::Arguments;
use configuration::format::TOML;
use log::Level;
use simulator::schedule::Kind;

pub use simulator::{Error, Result, Setup};

const USAGE: &str = "
Usage: simulator [options]

Options:
    --config <path>          Configuration file.
    --scheduler <type>       Scheduling policy: 1 for PSJF and 2 for RR.
    --lambda <rate>          Average number of arrivals per unit of time.
    --service <time>         Average service time.
    --quantum <time>         Time slice of RR.
    --limit <count>          Number of processes to complete [default: 10000].
    --seed <number>          Seed for the random number generators.
    --curve                  Report the processes left in the PSJF ready queue.
    --output <path>          CSV file or SQLite database for the statistics.

    --verbose                Display progress information.
    --help                   Display this message.
";

macro_rules! raise(
    ($message:expr) => (return Err(::simulator::Error::new($message)));
    ($($arg:tt)*) => (return Err(::simulator::Error::new(format!($($arg)*))));
);

macro_rules! ok(
    ($result:expr) => (match $result {
        Ok(result) => result,
        Err(error) => raise!(error),
    });
);

mod logger;
mod output;

fn main() {
    start().unwrap_or_else(|error| fail(error));
}

fn start() -> Result<()> {
    let arguments = ok!(arguments::parse(std::env::args()));

    if arguments.get::<bool>("help").unwrap_or(false) {
        help();
    }

    if arguments.get::<bool>("verbose").unwrap_or(false) {
        logger::setup(Level::Info);
    } else {
        logger::setup(Level::Warn);
    }

    let setup = configure(&arguments)?;
    let mut system = setup.construct()?;
    let mut output = output::new(arguments.get::<String>("output"))?;

    let start = Instant::now();
    system.run()?;
    let elapsed = start.elapsed();

    if system.schedule().kind() == Kind::RoundRobin || setup.curve {
        let residue = system.residue();
        info!(target: "Simulator", "{} processes are left in the ready queue.", residue.len());
        output::residue(std::io::stdout(), &residue)?;
    }

    let statistics = system.statistics()?;
    println!("{}", statistics);
    output.next(&setup, &statistics)?;

    info!(target: "Simulator", "Well done in {:.2} seconds.", elapsed.as_secs_f64());

    Ok(())
}

fn configure(arguments: &Arguments) -> Result<Setup> {
    let mut setup = Setup::default();
    if let Some(path) = arguments.get::<String>("config") {
        info!(target: "Simulator", "Reading {:?}...", &path);
        setup.merge(&ok!(TOML::open(&path)))?;
    }
    if let Some(value) = integer(arguments, "scheduler") {
        setup.scheduler = value;
    }
    if let Some(value) = number(arguments, "lambda") {
        setup.lambda = value;
    }
    if let Some(value) = number(arguments, "service") {
        setup.service = value;
    }
    if let Some(value) = number(arguments, "quantum") {
        setup.quantum = value;
    }
    if let Some(value) = integer(arguments, "limit") {
        if value <= 0 {
            raise!("the number of processes to complete should be positive, got {}", value);
        }
        setup.limit = value as usize;
    }
    if let Some(value) = integer(arguments, "seed") {
        setup.seed = value as u64;
    }
    if let Some(value) = arguments.get::<bool>("curve") {
        setup.curve = value;
    }
    if setup.seed == 0 {
        let now = ok!(SystemTime::now().duration_since(UNIX_EPOCH));
        setup.seed = now.as_secs().max(1);
    }
    setup.validate()?;
    Ok(setup)
}

fn integer(arguments: &Arguments, name: &str) -> Option<i64> {
    arguments.get::<i64>(name)
}

fn number(arguments: &Arguments, name: &str) -> Option<f64> {
    arguments.get::<f64>(name).or_else(|| arguments.get::<i64>(name).map(|value| value as f64))
}

fn help() -> ! {
    println!("{}", USAGE.trim());
    std::process::exit(0);
}

#[allow(unused_must_use)]
fn fail(error: Error) -> ! {
    use std::io::Write;
    match term::stderr() {
        Some(mut output) => {
            output.fg(term::color::RED);
            writeln!(output, "Error: {}.", error);
            output.reset();
        },
        _ => eprintln!("Error: {}.", error),
    }
    std::process::exit(1);
}
