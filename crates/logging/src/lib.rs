#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` maps the `-v`/`--quiet` command-line flags onto tracing filter
//! directives and installs a `tracing-subscriber` formatter that writes to
//! standard error.
//!
//! # Design
//!
//! - [`VerbosityLevel`] is derived from the number of `-v` flags and yields
//!   the default [`EnvFilter`](tracing_subscriber::EnvFilter) directive.
//! - [`init_tracing`] builds the subscriber. The [`LOG_ENV_VAR`] environment
//!   variable, when set, replaces the derived directive entirely.
//!
//! # Examples
//!
//! ```
//! use logging::VerbosityLevel;
//!
//! let level = VerbosityLevel::from_verbose_level(2);
//! assert_eq!(level, VerbosityLevel::Debug);
//! assert_eq!(level.directive(), "warn,remote=debug,cli=debug");
//! ```

mod subscriber;
mod verbosity;

pub use subscriber::{LOG_ENV_VAR, init_tracing, init_tracing_with_writer};
pub use verbosity::VerbosityLevel;
