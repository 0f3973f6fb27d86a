use crate::error::{Error, Result};

/// Name used in the usage message when the argument list is empty.
pub const PROGRAM_NAME: &str = "greeter";

/// Returns the first argument after the program name, further ones are ignored.
pub fn parse_arguments(arguments: Vec<String>) -> Result<String> {
    let mut arguments = arguments.into_iter();
    let program = arguments.next().unwrap_or_else(|| PROGRAM_NAME.to_string());

    arguments.next().ok_or(Error::Usage { program })
}
