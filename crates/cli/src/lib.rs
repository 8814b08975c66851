#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the `remote-url` command-line front-end. It exposes the
//! codec from the [`remote`] crate through two subcommands:
//!
//! - `parse URL` decodes a connection string and prints its fields, either as
//!   `key: value` lines or as JSON (`--json`). SMB passwords are masked unless
//!   `--show-password` is given.
//! - `format --type TYPE [--host ..] [--port ..] [--path ..] [--username ..]
//!   [--password ..] [--domain ..]` encodes fields into a connection string.
//!   Missing fields are written as `undefined` unless `--strict` is given.
//!
//! # Design
//!
//! [`run`] accepts an iterator of arguments together with handles for
//! standard output and error, so tests can drive the whole front-end in
//! process. Argument parsing uses the [`clap`] builder API. Diagnostics from
//! the codec are routed through `tracing`; `-v` raises and `--quiet` lowers
//! the level via the `logging` crate.
//!
//! # Exit codes
//!
//! - `0` on success, including `--help` and `--version`.
//! - [`EXIT_USAGE`] when arguments cannot be parsed.
//! - [`EXIT_UNSUPPORTED`] when a connection string names an unknown scheme.
//! - [`EXIT_MISSING_FIELD`] when `--strict` rejects an incomplete record.
//! - [`EXIT_IO`] when output cannot be written.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = cli::run(
//!     ["remote-url", "parse", "nfs://filer:2049:/export"],
//!     &mut stdout,
//!     &mut stderr,
//! );
//!
//! assert_eq!(exit_code, 0);
//! assert!(String::from_utf8(stdout).unwrap().contains("port: 2049"));
//! ```

mod command;
mod render;

use std::ffi::OsString;
use std::io::{self, Read, Write};

use clap::ArgMatches;
use logging::VerbosityLevel;
use remote::{FormatOptions, RemoteDescriptor, RemoteFields, format_fields};

use crate::command::{PROGRAM_NAME, clap_command};
use crate::render::{
    escape_connection_string, render_json, render_text, unescape_connection_string,
};

/// Exit code for argument parsing failures.
pub const EXIT_USAGE: i32 = 1;

/// Exit code for connection strings with an unrecognised scheme.
pub const EXIT_UNSUPPORTED: i32 = 2;

/// Exit code for records rejected by `--strict`.
pub const EXIT_MISSING_FIELD: i32 = 3;

/// Exit code for output failures.
pub const EXIT_IO: i32 = 4;

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Failure of a subcommand, carrying its exit code and message.
#[derive(Debug)]
struct Failure {
    code: i32,
    message: String,
}

impl Failure {
    fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<io::Error> for Failure {
    fn from(error: io::Error) -> Self {
        Self::new(EXIT_IO, format!("failed to write output: {error}"))
    }
}

/// Runs the front-end with the given arguments and output handles.
///
/// The first argument is the program name. Returns the process exit code.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    let matches = match clap_command().try_get_matches_from(arguments) {
        Ok(matches) => matches,
        Err(error) => {
            let rendered = error.render().to_string();
            return if error.use_stderr() {
                let _ = stderr.write_all(rendered.as_bytes());
                EXIT_USAGE
            } else {
                match stdout.write_all(rendered.as_bytes()) {
                    Ok(()) => 0,
                    Err(_) => EXIT_IO,
                }
            };
        }
    };

    let Some((name, sub_matches)) = matches.subcommand() else {
        let _ = writeln!(stderr, "{PROGRAM_NAME}: a subcommand is required");
        return EXIT_USAGE;
    };

    install_tracing(sub_matches);

    let outcome = match name {
        "parse" => execute_parse(sub_matches, stdout),
        "format" => execute_format(sub_matches, stdout),
        other => Err(Failure::new(
            EXIT_USAGE,
            format!("unknown subcommand '{other}'"),
        )),
    };

    match outcome {
        Ok(()) => 0,
        Err(failure) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {}", failure.message);
            failure.code
        }
    }
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(u8::try_from(clamped).unwrap_or(u8::MAX))
}

fn install_tracing(matches: &ArgMatches) {
    let level = VerbosityLevel::from_flags(matches.get_count("verbose"), matches.get_flag("quiet"));

    // A subscriber may already be installed when the front-end runs more than
    // once in a process (tests); the first one stays in effect.
    if let Err(error) = logging::init_tracing(level) {
        tracing::trace!(%error, "tracing subscriber already installed");
    }
}

fn execute_parse<Out: Write>(matches: &ArgMatches, stdout: &mut Out) -> Result<(), Failure> {
    let argument = matches
        .get_one::<String>("url")
        .map(String::as_str)
        .unwrap_or_default();

    let mut text = if argument == "-" {
        read_stdin()?
    } else {
        argument.to_owned()
    };
    if matches.get_flag("escaped") {
        text = unescape_connection_string(&text);
    }

    let descriptor: RemoteDescriptor = text
        .parse()
        .map_err(|error| Failure::new(EXIT_UNSUPPORTED, format!("{error}")))?;

    if descriptor.is_invalid_url() {
        tracing::info!("connection string does not follow host[:port]:path; re-enter the remote");
    }

    let show_password = matches.get_flag("show-password");
    let rendered = if matches.get_flag("json") {
        let mut json = render_json(&descriptor, show_password)
            .map_err(|error| Failure::new(EXIT_IO, format!("failed to render JSON: {error}")))?;
        json.push('\n');
        json
    } else {
        render_text(&descriptor, show_password)
    };

    stdout.write_all(rendered.as_bytes())?;
    Ok(())
}

fn execute_format<Out: Write>(matches: &ArgMatches, stdout: &mut Out) -> Result<(), Failure> {
    let value = |name: &str| matches.get_one::<String>(name).cloned();

    let fields = RemoteFields {
        kind: value("type"),
        host: value("host"),
        path: value("path"),
        port: value("port"),
        username: value("username"),
        password: value("password"),
        domain: value("domain"),
    };
    let options = if matches.get_flag("strict") {
        FormatOptions::strict()
    } else {
        FormatOptions::default()
    };

    let encoded = format_fields(&fields, &options)
        .map_err(|error| Failure::new(EXIT_MISSING_FIELD, error.to_string()))?;

    if matches.get_flag("escape") {
        writeln!(stdout, "{}", escape_connection_string(&encoded))?;
    } else {
        stdout.write_all(encoded.as_bytes())?;
        stdout.write_all(b"\n")?;
    }
    Ok(())
}

fn read_stdin() -> Result<String, Failure> {
    let mut text = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut text)
        .map_err(|error| Failure::new(EXIT_IO, format!("failed to read standard input: {error}")))?;

    let trimmed_len = text.trim_end_matches(['\n', '\r']).len();
    text.truncate(trimmed_len);
    Ok(text)
}

#[cfg(test)]
mod tests;
