//! `clap` command definition.

use clap::{Arg, ArgAction, Command};

/// Program name shown in usage and diagnostics.
pub(crate) const PROGRAM_NAME: &str = "remote-url";

/// Builds the `clap` command used for parsing.
pub(crate) fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Encode and decode backup remote connection strings.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic output (repeatable).")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only report errors.")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(parse_command())
        .subcommand(format_command())
}

fn parse_command() -> Command {
    Command::new("parse")
        .about("Decode a connection string and print its fields.")
        .arg(
            Arg::new("url")
                .value_name("URL")
                .help("Connection string to decode, or '-' to read it from standard input.")
                .required(true)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new("escaped")
                .long("escaped")
                .short('e')
                .help("Interpret '\\0' and '\\\\' escapes in URL.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the descriptor as JSON.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("show-password")
                .long("show-password")
                .help("Print SMB passwords instead of masking them.")
                .action(ArgAction::SetTrue),
        )
}

fn format_command() -> Command {
    let field = |name: &'static str, value_name: &'static str, help: &'static str| {
        Arg::new(name)
            .long(name)
            .value_name(value_name)
            .help(help)
            .num_args(1)
            .action(ArgAction::Set)
    };

    Command::new("format")
        .about("Encode descriptor fields into a connection string.")
        .arg(
            field("type", "TYPE", "Remote type: file, local, nfs or smb.")
                .short('t')
                .required(true),
        )
        .arg(field("host", "HOST", "Server host (nfs, smb)."))
        .arg(field("port", "PORT", "Server port (nfs).").allow_hyphen_values(true))
        .arg(field("path", "PATH", "Path on the remote."))
        .arg(field("username", "USER", "User name (smb)."))
        .arg(field("password", "PASSWORD", "Password (smb).").allow_hyphen_values(true))
        .arg(field("domain", "DOMAIN", "Authentication domain (smb)."))
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail instead of writing 'undefined' for missing fields.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("escape")
                .long("escape")
                .short('e')
                .help("Write NUL as '\\0' and backslashes as '\\\\'.")
                .action(ArgAction::SetTrue),
        )
}
