// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use super::layout::{self, STAGES};
use crate::{
    utils::{
        npm::{self, DependencyKind},
        sys,
    },
    Error, Scaffold,
};

/// Create a new React project.
///
/// Runs `npm create vite`, installs runtime and dev dependencies, then lays out the project
/// files. The first failure aborts; nothing already created is rolled back.
pub fn new_project(scaffold: &Scaffold) -> Result<(), Error> {
    let npm = scaffold.npm();
    if !sys::command_exists(npm) {
        return Err(Error::NpmNotFound(npm.to_string_lossy().into_owned()));
    }

    // Scaffold from the parent directory, everything else runs inside the new project
    npm::create_vite(npm, scaffold.parent(), scaffold.vite(), scaffold.name())?;
    mintln!("✅ Vite project created.");

    let root = scaffold.root();
    npm::install(npm, &root, DependencyKind::Runtime)?;
    npm::install(npm, &root, DependencyKind::Dev)?;
    mintln!("✅ Dependencies installed.");

    layout::emit(&root, STAGES)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::project::ProjectName;

    #[test]
    fn missing_npm_fails_before_anything_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let scaffold = Scaffold::builder()
            .name(ProjectName::new("demo").unwrap())
            .npm("react-ogs-definitely-not-npm")
            .parent(dir.path())
            .build();

        let err = new_project(&scaffold).unwrap_err();
        assert!(matches!(err, Error::NpmNotFound(ref npm) if npm == "react-ogs-definitely-not-npm"));
        assert!(!scaffold.root().exists());
    }
}
