use super::*;

fn run_with_args<const N: usize>(args: [&str; N]) -> (i32, String, String) {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = run(args, &mut stdout, &mut stderr);
    (
        code,
        String::from_utf8(stdout).expect("stdout is UTF-8"),
        String::from_utf8(stderr).expect("stderr is UTF-8"),
    )
}

#[test]
fn help_goes_to_stdout() {
    let (code, stdout, stderr) = run_with_args(["remote-url", "--help"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("parse"));
    assert!(stdout.contains("format"));
    assert!(stderr.is_empty());
}

#[test]
fn version_reports_package_version() {
    let (code, stdout, _) = run_with_args(["remote-url", "--version"]);

    assert_eq!(code, 0);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let (code, stdout, stderr) = run_with_args(["remote-url"]);

    assert_eq!(code, EXIT_USAGE);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Usage:"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let (code, _, stderr) = run_with_args(["remote-url", "parse", "--bogus", "file:///x"]);

    assert_eq!(code, EXIT_USAGE);
    assert!(!stderr.is_empty());
}

#[test]
fn parse_prints_file_fields() {
    let (code, stdout, stderr) = run_with_args(["remote-url", "parse", "file://srv/backups"]);

    assert_eq!(code, 0, "stderr: {stderr}");
    assert_eq!(stdout, "type: file\npath: /srv/backups\n");
}

#[test]
fn parse_flags_lenient_nfs() {
    let (code, stdout, _) = run_with_args(["remote-url", "parse", "nfs://my:host:/export"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("host: my\n"));
    assert!(stdout.contains("path: /host:/export\n"));
    assert!(stdout.contains("invalid-url: true\n"));
}

#[test]
fn parse_escaped_smb_string() {
    let (code, stdout, _) = run_with_args([
        "remote-url",
        "parse",
        "--escaped",
        "smb://user:p@ss@DOMAIN\\\\\\\\server\\0share\\\\vm",
    ]);

    assert_eq!(code, 0);
    assert!(stdout.contains("username: user\n"));
    assert!(stdout.contains("password: ********\n"));
    assert!(stdout.contains("domain: DOMAIN\n"));
    assert!(stdout.contains("host: server\n"));
    assert!(stdout.contains("path: share\\\\vm\n"));
}

#[test]
fn parse_json_output() {
    let (code, stdout, _) = run_with_args([
        "remote-url",
        "parse",
        "--json",
        "nfs://filer:2049:/export",
    ]);

    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["type"], "nfs");
    assert_eq!(json["host"], "filer");
    assert_eq!(json["port"], "2049");
    assert_eq!(json["path"], "/export");
}

#[test]
fn parse_unknown_scheme_fails() {
    let (code, stdout, stderr) = run_with_args(["remote-url", "parse", "s3://bucket"]);

    assert_eq!(code, EXIT_UNSUPPORTED);
    assert!(stdout.is_empty());
    assert!(stderr.contains("unrecognized remote scheme 's3'"));
}

#[test]
fn format_nfs_with_port() {
    let (code, stdout, _) = run_with_args([
        "remote-url",
        "format",
        "--type",
        "nfs",
        "--host",
        "filer",
        "--port",
        "2049",
        "--path",
        "export/data/",
    ]);

    assert_eq!(code, 0);
    assert_eq!(stdout, "nfs://filer:2049:/export/data\n");
}

#[test]
fn format_local_is_written_as_file() {
    let (code, stdout, _) = run_with_args(["remote-url", "format", "-t", "local", "--path", "x"]);

    assert_eq!(code, 0);
    assert_eq!(stdout, "file:///x\n");
}

#[test]
fn format_smb_escaped() {
    let (code, stdout, _) = run_with_args([
        "remote-url",
        "format",
        "--type",
        "smb",
        "--host",
        "nas",
        "--domain",
        "WG",
        "--username",
        "u",
        "--password",
        "p",
        "--path",
        "/share/vm",
        "--escape",
    ]);

    assert_eq!(code, 0);
    assert_eq!(stdout, "smb://u:p@WG\\\\\\\\nas\\0share\\\\vm\n");
}

#[test]
fn format_placeholders_missing_fields_by_default() {
    let (code, stdout, _) = run_with_args(["remote-url", "format", "--type", "nfs"]);

    assert_eq!(code, 0);
    assert_eq!(stdout, "nfs://undefined:/\n");
}

#[test]
fn format_strict_rejects_missing_fields() {
    let (code, stdout, stderr) =
        run_with_args(["remote-url", "format", "--type", "nfs", "--strict"]);

    assert_eq!(code, EXIT_MISSING_FIELD);
    assert!(stdout.is_empty());
    assert!(stderr.contains("missing required field 'host'"));
}

#[test]
fn exit_codes_are_clamped() {
    assert_eq!(exit_code_from(0), std::process::ExitCode::SUCCESS);
    assert_eq!(exit_code_from(-5), std::process::ExitCode::from(0));
    assert_eq!(exit_code_from(1000), std::process::ExitCode::from(255));
}
