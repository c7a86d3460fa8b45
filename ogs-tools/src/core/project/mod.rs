// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;

pub use new::new_project;

pub mod layout;

mod new;

use crate::Error;

/// Name of the project to create, which is also its directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Fails with [`Error::MissingName`] for an empty name.
    pub fn new(name: impl Into<String>) -> Result<Self, Error> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::MissingName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Version of `create-vite` to scaffold with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViteVersion(String);

impl ViteVersion {
    pub const LATEST: &'static str = "latest";

    /// Resolve a requested version, where a missing or empty request means [`Self::LATEST`].
    pub fn new(version: Option<&str>) -> Self {
        match version {
            Some(version) if !version.is_empty() => Self(version.to_string()),
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Package specifier passed to `npm create`, e.g. `vite@latest`.
    pub fn specifier(&self) -> String {
        format!("vite@{}", self.0)
    }
}

impl Default for ViteVersion {
    fn default() -> Self {
        Self(Self::LATEST.to_string())
    }
}

impl fmt::Display for ViteVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}
