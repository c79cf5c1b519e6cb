//! Errors raised at the program boundary. Hashing itself cannot fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// No message was given on the command line.
    #[error("missing input argument")]
    MissingInput,

    /// A string could not be parsed as a digest.
    #[error("invalid hex digest: {reason}")]
    InvalidHex { reason: String },

    /// Writing the output failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
