//! Drop-in replacement for `mdbook-katex` that hides its version-mismatch
//! warning. Every argument is forwarded; the exit code is the wrapped one.

use booktools::filter::StderrFilter;
use booktools::wrapper::{self, KATEX_PROGRAM};
use std::io::Write;
use tracing_subscriber::EnvFilter;

/// Logging is opt-in through RUST_LOG so stderr stays clean by default
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() {
    init_tracing();

    let args = std::env::args_os().skip(1);
    let filter = StderrFilter::katex();
    let mut stderr = std::io::stderr().lock();

    let code = match wrapper::run_filtered(KATEX_PROGRAM, args, &filter, &mut stderr) {
        Ok(code) => code,
        Err(e) => {
            let _ = writeln!(stderr, "mdbook-katex-quiet: {}", e);
            e.exit_code()
        }
    };

    std::process::exit(code);
}
