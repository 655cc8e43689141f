use std::env;
use std::process;
use std::str::FromStr;

use log::debug;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use qmkit::command::{help_cmd, CommandContext, SelectedArgs};

/// Environment variable selecting the log level
static LOG_VARIABLE: &str = "QMKIT_LOG";

fn init_logger() {
    let level = env::var(LOG_VARIABLE)
        .ok()
        .and_then(|l| LevelFilter::from_str(&l).ok())
        .unwrap_or(LevelFilter::Warn);
    if TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto).is_err() {
        eprintln!("Could not initialise the logger");
    }
}

fn main() {
    init_logger();

    let mut args = SelectedArgs::new();
    let mut context = CommandContext::default();

    if !args.has_next() {
        if let Err(e) = help_cmd(&mut context) {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
        return;
    }

    while args.has_next() {
        if let Err(e) = args.parse_next(&mut context) {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    }
    debug!("All commands completed");
}
