use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

/// Runs the command-line front-end and maps its status to an [`ExitCode`].
///
/// Keeping `main` a thin shim lets the tests below drive the binary's exact
/// execution path with in-memory output handles.
#[must_use]
pub fn run_with<I, Out, Err>(args: I, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    let status = cli::run(args, stdout, stderr);
    let _ = stdout.flush();
    let _ = stderr.flush();
    cli::exit_code_from(status)
}
