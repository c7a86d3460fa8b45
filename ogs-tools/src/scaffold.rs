// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

use typed_builder::TypedBuilder;

use crate::{
    core::project::{ProjectName, ViteVersion},
    utils::npm::DEFAULT_NPM,
};

/// Defines the configuration for creating a React project.
/// After setting the parameters, call [`ops::new`](crate::ops::new) to create it.
#[derive(Debug, TypedBuilder)]
#[builder(field_defaults(default, setter(into)))]
pub struct Scaffold {
    #[builder(!default)]
    name: ProjectName,

    vite: ViteVersion,

    /// Program used to run npm.
    #[builder(default = OsString::from(DEFAULT_NPM))]
    npm: OsString,

    /// Directory the project is created in. Empty means the current directory.
    parent: PathBuf,
}

impl Scaffold {
    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn vite(&self) -> &ViteVersion {
        &self.vite
    }

    pub fn npm(&self) -> &OsStr {
        &self.npm
    }

    pub fn parent(&self) -> &Path {
        &self.parent
    }

    /// Root of the project once it has been created.
    pub fn root(&self) -> PathBuf {
        self.parent.join(self.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let scaffold = Scaffold::builder()
            .name(ProjectName::new("demo").unwrap())
            .build();
        assert_eq!(scaffold.vite().as_str(), ViteVersion::LATEST);
        assert_eq!(scaffold.npm(), DEFAULT_NPM);
        assert_eq!(scaffold.root(), Path::new("demo"));
    }

    #[test]
    fn root_is_under_parent() {
        let scaffold = Scaffold::builder()
            .name(ProjectName::new("demo").unwrap())
            .vite(ViteVersion::new(Some("5.2.0")))
            .parent("/work")
            .build();
        assert_eq!(scaffold.root(), Path::new("/work/demo"));
        assert_eq!(scaffold.vite().specifier(), "vite@5.2.0");
    }
}
