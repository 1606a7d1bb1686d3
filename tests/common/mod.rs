//! Integration tests for pf2tw
//!
//! These tests build small front-end projects in temporary directories and
//! convert them through the command-line interface.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a project with templates, scripts, styles and a
/// vendored dependency.
#[allow(unused)]
pub fn create_test_project() -> TempDir {
    let temp = TempDir::new().unwrap();

    write(
        temp.path(),
        "src/App.vue",
        r#"<template>
  <div class="flex align-items-center">
    <span class="md:col-6 mt-3">Hello</span>
  </div>
</template>
"#,
    );
    write(
        temp.path(),
        "src/main.ts",
        "const layout = 'flex flex-column';\n",
    );
    write(
        temp.path(),
        "src/index.html",
        "<body class=\"p-3\"></body>\n",
    );
    write(
        temp.path(),
        "src/theme.scss",
        ".card { @apply flex; }\n$name: \"flex\";\n",
    );
    write(
        temp.path(),
        "node_modules/lib/index.js",
        "export const c = \"flex align-items-center\";\n",
    );

    temp
}

/// Helper to create a PrimeFlex 2.x project.
#[allow(unused)]
pub fn create_legacy_project() -> TempDir {
    let temp = TempDir::new().unwrap();

    write(
        temp.path(),
        "src/App.vue",
        "<div class=\"p-d-flex p-jc-center\"></div>\n",
    );

    temp
}

#[allow(unused)]
pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[allow(unused)]
pub fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

/// Runs `pf2tw <args>` in `root`, answering the directory prompt with `input`.
#[allow(unused)]
pub fn run_pf2tw(root: &Path, args: &[&str], input: &str) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("pf2tw");
    cmd.args(args)
        .current_dir(root)
        .env_remove("RUST_LOG")
        .write_stdin(input)
        .assert()
}
