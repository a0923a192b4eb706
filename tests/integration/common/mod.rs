//! Shared helpers for integration tests.
//!
//! Tests never need a real pdftk: [`Workspace`] installs small shell scripts
//! that accept the same `<files...> cat output <target>` arguments and record
//! what they were called with.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Concatenates its inputs into the target, like `pdftk ... cat output`.
const CONCAT_SCRIPT: &str = r#"#!/bin/sh
log="$(dirname "$0")/args.log"
: > "$log"
for arg in "$@"; do
    printf '%s\n' "$arg" >> "$log"
done
eval "target=\${$#}"
: > "$target"
while [ "$1" != "cat" ]; do
    cat "$1" >> "$target" || exit 2
    shift
done
"#;

/// Records its arguments, then fails like pdftk does on a missing input.
const FAILING_SCRIPT: &str = r#"#!/bin/sh
log="$(dirname "$0")/args.log"
: > "$log"
for arg in "$@"; do
    printf '%s\n' "$arg" >> "$log"
done
echo "Error: Unable to find file." >&2
exit 3
"#;

/// Succeeds but removes whatever target it was given.
const VANISHING_SCRIPT: &str = r#"#!/bin/sh
eval "target=\${$#}"
rm -f "$target"
"#;

/// Scratch directory holding inputs and a fake toolkit.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create an empty workspace.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Root of the workspace.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write an input file with the given contents.
    pub fn input(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create input dir");
        }
        fs::write(&path, contents).expect("Failed to write input");
        path
    }

    /// Install a toolkit that concatenates its inputs.
    pub fn concat_tool(&self) -> String {
        self.script("pdftk", CONCAT_SCRIPT)
    }

    /// Install a toolkit that always fails with exit status 3.
    pub fn failing_tool(&self) -> String {
        self.script("pdftk-failing", FAILING_SCRIPT)
    }

    /// Install a toolkit that deletes its output target.
    pub fn vanishing_tool(&self) -> String {
        self.script("pdftk-vanishing", VANISHING_SCRIPT)
    }

    fn script(&self, name: &str, body: &str) -> String {
        let path = self.dir.path().join(name);
        fs::write(&path, body).expect("Failed to write fake toolkit");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake toolkit executable");
        path.to_string_lossy().into_owned()
    }

    /// Arguments the last toolkit run received, one per entry.
    pub fn recorded_args(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("args.log"))
            .expect("Fake toolkit did not record its arguments")
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Output target the last toolkit run received.
    pub fn recorded_target(&self) -> PathBuf {
        let args = self.recorded_args();
        PathBuf::from(args.last().expect("No arguments recorded"))
    }
}

/// Convert a path to the string form the library accepts.
pub fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
