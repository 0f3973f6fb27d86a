//! # greeter
//!
//! Greets a single user from the command line.
//!
//! # Arguments:
//!
//! - **name** the name to greet
//!
//! Logging is controlled by `RUST_LOG`, default: warn

use std::env;
use std::io;
use std::process::ExitCode;

use anyhow::Result;
use env_logger::{Builder, Env};

const DEFAULT_LOG_FILTER: &str = "warn";

fn logger_init() {
    let env = Env::default().filter_or("RUST_LOG", DEFAULT_LOG_FILTER);
    Builder::from_env(env).init();
}

fn run() -> Result<()> {
    let arguments: Vec<String> = env::args_os()
        .map(|argument| argument.to_string_lossy().into_owned())
        .collect();
    let stdout = io::stdout();
    greeter::greet(arguments, &mut stdout.lock())?;
    Ok(())
}

fn main() -> ExitCode {
    logger_init();
    match run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err_msg) => {
            eprintln!("{err_msg}");
            ExitCode::FAILURE
        }
    }
}
