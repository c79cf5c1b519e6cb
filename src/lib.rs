//! SHA-256 (FIPS 180-4) implemented from scratch, with lowercase hex
//! rendering and the small command line front end that prints both.

pub mod cli;
pub mod error;
pub mod render;
pub mod sha256;

pub use error::Error;
pub use render::Digest;
pub use sha256::{digest, Sha256};
