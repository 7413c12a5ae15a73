// End-to-end tests for the mdbook-katex-quiet wrapper binary
//
// Each test installs a fake mdbook-katex script and checks what reaches the
// caller's stdout, stderr and exit status.

#![cfg(unix)]

mod utils;

use predicates::prelude::*;
use serial_test::serial;
use utils::{FakeKatex, VERSION_WARNING};

#[test]
#[serial]
fn test_benign_warning_hidden_on_success() {
    let fake = FakeKatex::new(&format!("echo '{}' >&2\nexit 0", VERSION_WARNING));
    fake.cmd().assert().success().stderr("");
}

#[test]
#[serial]
fn test_real_error_kept_and_status_preserved() {
    let fake = FakeKatex::new(
        "printf 'This mdbook-katex was built against mdbook v0.4.40...\\nFatal: missing input file\\n' >&2\nexit 1",
    );
    fake.cmd()
        .assert()
        .code(1)
        .stderr("Fatal: missing input file\n");
}

#[test]
#[serial]
fn test_benign_warning_hidden_on_failure() {
    let fake = FakeKatex::new(&format!("echo '{}' >&2\nexit 2", VERSION_WARNING));
    fake.cmd().assert().code(2).stderr("");
}

#[test]
#[serial]
fn test_silent_command_stays_silent() {
    let fake = FakeKatex::new("exit 0");
    fake.cmd().assert().success().stdout("").stderr("");
}

#[test]
#[serial]
fn test_other_lines_keep_order() {
    let fake = FakeKatex::new(&format!(
        "echo first >&2\necho '{}' >&2\necho second >&2\necho third >&2",
        VERSION_WARNING
    ));
    fake.cmd()
        .assert()
        .success()
        .stderr("first\nsecond\nthird\n");
}

#[test]
#[serial]
fn test_stdout_passes_through_unchanged() {
    let fake = FakeKatex::new(&format!(
        "echo '{}' >&2\nprintf 'line one\\nThis mdbook-katex was built against mdbook v1\\nno newline'",
        VERSION_WARNING
    ));
    // stdout is never filtered, even if it contains the warning text
    fake.cmd()
        .assert()
        .success()
        .stdout("line one\nThis mdbook-katex was built against mdbook v1\nno newline")
        .stderr("");
}

#[test]
#[serial]
fn test_stdin_is_forwarded() {
    // mdbook hands preprocessors the book as JSON on stdin
    let fake = FakeKatex::new("cat");
    fake.cmd()
        .write_stdin("[{\"root\":\".\"},{\"sections\":[]}]")
        .assert()
        .success()
        .stdout("[{\"root\":\".\"},{\"sections\":[]}]");
}

#[test]
#[serial]
fn test_arguments_forwarded_verbatim() {
    let fake = FakeKatex::new("for arg in \"$@\"; do echo \"<$arg>\"; done");
    fake.cmd()
        .args(["supports", "html", "with space", "--flag", ""])
        .assert()
        .success()
        .stdout("<supports>\n<html>\n<with space>\n<--flag>\n<>\n");
}

#[test]
#[serial]
fn test_supports_probe_exit_code() {
    // `mdbook-katex supports <renderer>` answers via its exit status
    let fake = FakeKatex::new("[ \"$1\" = supports ] && [ \"$2\" = html ] && exit 0\nexit 1");
    fake.cmd().args(["supports", "html"]).assert().success();
    fake.cmd().args(["supports", "pdf"]).assert().code(1);
}

#[test]
#[serial]
fn test_missing_binary_exits_127() {
    let fake = FakeKatex::missing();
    fake.cmd()
        .env("PATH", fake.dir())
        .assert()
        .code(127)
        .stderr(predicate::str::contains("mdbook-katex"));
}

#[test]
#[serial]
fn test_signal_death_maps_to_shell_code() {
    let fake = FakeKatex::new("kill -TERM $$");
    fake.cmd().assert().code(128 + 15);
}
