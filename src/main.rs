use clap::{builder::PossibleValue, Parser, ValueEnum};
use log::{debug, error};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;

use greeter::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct LevelFilterArg(LevelFilter);

static LEVELS: [LevelFilterArg; 6] = [
    LevelFilterArg(LevelFilter::Off),
    LevelFilterArg(LevelFilter::Error),
    LevelFilterArg(LevelFilter::Warn),
    LevelFilterArg(LevelFilter::Info),
    LevelFilterArg(LevelFilter::Debug),
    LevelFilterArg(LevelFilter::Trace),
];

impl ValueEnum for LevelFilterArg {
    fn value_variants<'a>() -> &'a [Self] {
        &LEVELS
    }

    // `OFF`, `ERROR`, ... `TRACE`
    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.0.as_str()))
    }
}

#[derive(Parser)]
#[command(version, max_term_width = 100, about = "Say hello to someone")]
struct Opt {
    /// A name to say hello to.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_NAME)]
    name: String,
    /// Set the file where to log (or stderr or stdout).
    #[arg(long, value_name = "LOG", default_value = "stderr")]
    log: PathBuf,
    /// Set the log level.
    #[arg(long, value_name = "LEVEL", default_value = "ERROR", value_enum)]
    log_level: LevelFilterArg,
}

fn init_terminal_logger(level: LevelFilter, mode: TerminalMode) {
    let _ = TermLogger::init(level, Config::default(), mode, ColorChoice::Auto);
}

fn init_logger(log: &Path, level: LevelFilter) {
    match log.to_str() {
        Some("stdout") => init_terminal_logger(level, TerminalMode::Stdout),
        Some("stderr") => init_terminal_logger(level, TerminalMode::Stderr),
        _ => match File::create(log) {
            Ok(file) => {
                let _ = WriteLogger::init(level, Config::default(), file);
            }
            Err(e) => {
                init_terminal_logger(level, TerminalMode::Stderr);
                error!(
                    "Unable to create log file: {} ({}). Switch to stderr",
                    log.display(),
                    e
                );
            }
        },
    }
}

fn main() {
    let opt = Opt::parse();

    init_logger(&opt.log, opt.log_level.0);

    debug!("Greeting {:?}", opt.name);

    if let Err(e) = say_hi(&opt.name) {
        error!("Unable to write greeting: {}", e);
        process::exit(1);
    }
}
