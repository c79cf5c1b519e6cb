use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::io::Write;

use clap::Parser;
use tracing::debug;

use crate::{sha256, Error};

#[derive(Parser, Debug)]
#[command(name = "sha256-visualizer")]
#[command(version, about = "Print a message next to its SHA-256 digest", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Message to hash, taken verbatim even when it starts with `-`
    #[arg(value_name = "INPUT", allow_hyphen_values = true)]
    pub input: Option<OsString>,
}

/// Hashes the input argument and writes the `Input:` and `Hash:` lines to `out`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), Error> {
    let input = args.input.as_deref().ok_or(Error::MissingInput)?;
    let message = message_bytes(input);

    let digest = sha256::digest(&message);
    debug!(%digest, "computed digest");

    out.write_all(b"Input: ")?;
    out.write_all(&message)?;
    writeln!(out)?;
    writeln!(out, "Hash: {}", digest)?;
    out.flush()?;
    Ok(())
}

/// The bytes of an argument as the platform hands them over.
#[cfg(unix)]
fn message_bytes(input: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(input.as_bytes())
}

#[cfg(not(unix))]
fn message_bytes(input: &OsStr) -> Cow<'_, [u8]> {
    match input.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    fn run_with(args: &[&str]) -> (Result<(), Error>, String) {
        let args = Args::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let res = run(&args, &mut out);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn abc() {
        let (res, out) = run_with(&["sha256-visualizer", "abc"]);
        res.unwrap();
        assert_eq!(
            out,
            "Input: abc\nHash: ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad\n"
        );
    }

    #[test]
    fn empty_argument() {
        let (res, out) = run_with(&["sha256-visualizer", ""]);
        res.unwrap();
        assert_eq!(
            out,
            "Input: \nHash: e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855\n"
        );
    }

    #[test]
    fn utf8_argument() {
        let (res, out) = run_with(&["sha256-visualizer", "héllo wörld"]);
        res.unwrap();
        let expected = sha256::digest("héllo wörld".as_bytes());
        assert_eq!(out, format!("Input: héllo wörld\nHash: {}\n", expected));
    }

    #[test]
    fn missing_input() {
        let (res, out) = run_with(&["sha256-visualizer"]);
        assert!(matches!(res, Err(Error::MissingInput)));
        assert!(out.is_empty());
    }

    #[test]
    fn hyphen_inputs_are_messages() {
        for input in ["-abc", "--help", "-V", "-"] {
            let (res, out) = run_with(&["sha256-visualizer", input]);
            res.unwrap();
            let expected = sha256::digest(input.as_bytes());
            assert_eq!(out, format!("Input: {}\nHash: {}\n", input, expected));
        }
    }

    #[test]
    fn double_dash_ends_options() {
        let (res, out) = run_with(&["sha256-visualizer", "--", "--"]);
        res.unwrap();
        assert_eq!(out, format!("Input: --\nHash: {}\n", sha256::digest(b"--")));

        let (res, _) = run_with(&["sha256-visualizer", "--"]);
        assert!(matches!(res, Err(Error::MissingInput)));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_io_error() {
        let args = Args::try_parse_from(["sha256-visualizer", "abc"]).unwrap();
        let res = run(&args, &mut BrokenPipe);
        assert!(matches!(res, Err(Error::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn extra_arguments_rejected() {
        assert!(Args::try_parse_from(["sha256-visualizer", "a", "b"]).is_err());
    }
}
