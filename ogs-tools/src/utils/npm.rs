// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Run `npm` as a subprocess.
//!
//! Every command inherits stdio so the user sees npm's own output, and blocks until npm exits.

use std::{
    ffi::OsStr,
    path::Path,
    process::{Command, Stdio},
};

use crate::{
    core::project::{ProjectName, ViteVersion},
    error::{CommandError, CommandFailure},
};

/// Program used to run npm when none is configured.
#[cfg(not(windows))]
pub const DEFAULT_NPM: &str = "npm";
#[cfg(windows)]
pub const DEFAULT_NPM: &str = "npm.cmd";

/// Template passed through to `create-vite`.
pub const VITE_TEMPLATE: &str = "react-ts";

static RUNTIME_DEPENDENCIES: &[&str] = &[
    "react-redux",
    "@reduxjs/toolkit",
    "react-router-dom",
    "antd",
    "@ant-design/icons",
    "clsx",
];

static DEV_DEPENDENCIES: &[&str] = &[
    "tailwindcss",
    "@tailwindcss/postcss",
    "postcss",
    "autoprefixer",
    "eslint",
    "prettier",
    "eslint-config-prettier",
    "eslint-plugin-react",
    "eslint-plugin-react-hooks",
    "eslint-plugin-react-refresh",
    "@eslint/js",
    "typescript-eslint",
    "globals",
    "lefthook",
    "commitlint",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    Runtime,
    Dev,
}

impl DependencyKind {
    /// Packages installed for this kind of dependency.
    pub fn packages(self) -> &'static [&'static str] {
        match self {
            DependencyKind::Runtime => RUNTIME_DEPENDENCIES,
            DependencyKind::Dev => DEV_DEPENDENCIES,
        }
    }

    fn flag(self) -> Option<&'static str> {
        match self {
            DependencyKind::Runtime => None,
            DependencyKind::Dev => Some("-D"),
        }
    }
}

/// Call `npm create vite@<version> <name> -- --template react-ts` inside `dir`.
pub fn create_vite(
    npm: impl AsRef<OsStr>,
    dir: impl AsRef<Path>,
    version: &ViteVersion,
    name: &ProjectName,
) -> Result<(), CommandError> {
    let cmd = create_vite_command(npm, dir, version, name);
    run(cmd, "npm create")
}

/// Call `npm install [-D] <packages>` inside `dir`.
pub fn install(
    npm: impl AsRef<OsStr>,
    dir: impl AsRef<Path>,
    kind: DependencyKind,
) -> Result<(), CommandError> {
    let cmd = install_command(npm, dir, kind);
    run(cmd, "npm install")
}

fn create_vite_command(
    npm: impl AsRef<OsStr>,
    dir: impl AsRef<Path>,
    version: &ViteVersion,
    name: &ProjectName,
) -> Command {
    let mut cmd = Command::new(npm);
    cmd.arg("create")
        .arg(version.specifier())
        .arg(name.as_str())
        .args(["--", "--template", VITE_TEMPLATE]);
    with_dir(&mut cmd, dir.as_ref());
    cmd
}

fn install_command(npm: impl AsRef<OsStr>, dir: impl AsRef<Path>, kind: DependencyKind) -> Command {
    let mut cmd = Command::new(npm);
    cmd.arg("install").args(kind.flag()).args(kind.packages());
    with_dir(&mut cmd, dir.as_ref());
    cmd
}

/// An empty path means the current directory, which `Command` would otherwise reject.
fn with_dir(cmd: &mut Command, dir: &Path) {
    if !dir.as_os_str().is_empty() {
        cmd.current_dir(dir);
    }
}

fn run(mut cmd: Command, process_name: &str) -> Result<(), CommandError> {
    debug!(@grey, "running {:?}", cmd);
    let status = cmd
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;
    CommandFailure::check(process_name, status)?;
    Ok(())
}
