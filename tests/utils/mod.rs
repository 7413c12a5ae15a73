// Integration test utilities
//
// Installs a fake `mdbook-katex` shell script in a temp directory and builds a
// command for the wrapper binary with that directory first on PATH.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The exact warning line current mdbook-katex builds print
pub const VERSION_WARNING: &str =
    "Warning: This mdbook-katex was built against mdbook v0.4.40, but mdbook v0.4.52 is being used.";

/// Temp directory holding a fake `mdbook-katex`
pub struct FakeKatex {
    dir: TempDir,
}

impl FakeKatex {
    /// Install a fake whose body is the given POSIX shell script
    pub fn new(body: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        write_script(&dir.path().join("mdbook-katex"), body);
        Self { dir }
    }

    /// Directory with no `mdbook-katex` in it at all
    pub fn missing() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Wrapper command whose PATH resolves `mdbook-katex` to the fake
    pub fn cmd(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("mdbook-katex-quiet");
        cmd.env("PATH", path_with(self.dir.path()))
            .env_remove("RUST_LOG");
        cmd
    }
}

fn write_script(path: &Path, body: &str) {
    fs::write(path, format!("#!/bin/sh\n{}\n", body)).expect("write fake script");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).expect("chmod fake script");
}

fn path_with(dir: &Path) -> std::ffi::OsString {
    let mut paths: Vec<PathBuf> = vec![dir.to_path_buf()];
    if let Some(existing) = std::env::var_os("PATH") {
        paths.extend(std::env::split_paths(&existing));
    }
    std::env::join_paths(paths).expect("valid PATH")
}
