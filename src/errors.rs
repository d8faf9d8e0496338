//! Errors and error-related utilities.

use std::{error, fmt, result};

/// The result type used throughout this library.
pub type Result<T> = result::Result<T, Box<dyn error::Error>>;

/// Nothing to do: neither a directory nor a list of files was given.
#[derive(Debug)]
pub struct UsageError(pub String);

/// A log identifier, a date, or a sensor name could not be parsed.
#[derive(Debug)]
pub struct ParseError(pub String);

/// A source file could not be opened or read.
#[derive(Debug)]
pub struct ReadError(pub String);

/// A source file does not have the expected column layout.
#[derive(Debug)]
pub struct SchemaError(pub String);

/// A reading could not be assigned a status.
#[derive(Debug)]
pub struct ClassificationError(pub String);

/// Invalid input.
#[derive(Debug)]
pub struct InvalidInput(pub String);

/// Invalid command line argument.
#[derive(Debug)]
pub struct InvalidArgument(pub String);

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "parse error: {}", self.0)
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "read error: {}", self.0)
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "schema error: {}", self.0)
    }
}

impl fmt::Display for ClassificationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unclassified reading: {}", self.0)
    }
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid input: {}", self.0)
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid argument: {}", self.0)
    }
}

impl error::Error for UsageError {}

impl error::Error for ParseError {}

impl error::Error for ReadError {}

impl error::Error for SchemaError {}

impl error::Error for ClassificationError {}

impl error::Error for InvalidInput {}

impl error::Error for InvalidArgument {}

/// A helper for constructing [UsageError].
pub fn usage_error_ref(s: &str) -> Box<dyn error::Error> {
    UsageError(s.to_owned()).into()
}

/// A helper for constructing [ParseError].
pub fn parse_error(s: String) -> Box<dyn error::Error> {
    ParseError(s).into()
}

/// A helper for constructing [ReadError].
pub fn read_error(s: String) -> Box<dyn error::Error> {
    ReadError(s).into()
}

/// A helper for constructing [SchemaError].
pub fn schema_error(s: String) -> Box<dyn error::Error> {
    SchemaError(s).into()
}

/// A helper for constructing [ClassificationError].
pub fn classification_error(s: String) -> Box<dyn error::Error> {
    ClassificationError(s).into()
}

/// A helper for constructing [InvalidInput].
pub fn invalid_input_ref(s: &str) -> Box<dyn error::Error> {
    InvalidInput(s.to_owned()).into()
}

/// A helper for constructing [InvalidArgument].
pub fn invalid_argument(s: String) -> Box<dyn error::Error> {
    InvalidArgument(s).into()
}
