use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_cli(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_apikey-header"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_prints_key_and_exits_zero() {
    let output = run_cli(&[], "Host: a\r\nAuthorization: ApiKey test-api-key\r\n\r\n");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "test-api-key\n");
}

#[test]
fn test_extraction_error_exits_one() {
    for input in ["Host: a\r\n\r\n", "Authorization: Bearer test-api-key\r\n\r\n", "Authorization: ApiKey\r\n\r\n"] {
        let output = run_cli(&[], input);

        assert_eq!(output.status.code(), Some(1), "{input:?}");
        assert!(output.stdout.is_empty());
    }
}

#[test]
fn test_parse_error_exits_two() {
    let output = run_cli(&[], "Authorization ApiKey test-api-key\r\n\r\n");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing ':' separator on line 1"));
}

#[test]
fn test_config_flag_changes_scheme() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "scheme = \"Token\"").unwrap();
    let path = file.path().to_str().unwrap();

    let output = run_cli(&["--config", path], "Authorization: Token t-1\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "t-1\n");
}
