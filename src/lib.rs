//! # greeter
//!
//! Library behind the `greeter` command line tool.
//!
//! Reads a name, builds a single [`User`] with ID 1001 and a
//! [`GreetingKind::Hello`] greeting, and writes
//! `Hello, <name>! Your ID is 1001.` to the given output.

pub mod arguments;
pub mod error;
pub mod greeting;
pub mod user;

use std::io::Write;

use log::debug;

pub use error::{Error, Result};
pub use greeting::{greeting_word, GreetingKind};
pub use user::{greet_user, GreetFn, User, DEFAULT_USER_ID};

/// Runs the whole pipeline for one invocation.
pub fn greet(arguments: Vec<String>, output: &mut dyn Write) -> Result<()> {
    let name = arguments::parse_arguments(arguments)?;
    debug!("Arguments checked, name has {} bytes", name.len());

    let user = User::with_defaults(&name)?;
    debug!("User {} constructed", user.id());

    let greeter: GreetFn = greet_user;
    greeter(&user, output)?;
    debug!("User {} greeted", user.id());

    Ok(())
}
