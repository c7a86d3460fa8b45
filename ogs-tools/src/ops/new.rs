// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{core::project::new_project, Scaffold};

/// Create a new React + Vite project.
pub fn new(scaffold: &Scaffold) -> eyre::Result<()> {
    let name = scaffold.name();
    greyln!(
        "🚀 Creating React Vite project: {} (Vite {})",
        name,
        scaffold.vite()
    );
    log::debug!("project root: {}", scaffold.root().display());

    new_project(scaffold)?;

    mintln!("✅ Project {} created successfully!", name);
    greyln!(
        "All ready: Tailwind, Redux, Router, Ant Design + @ant-design/icons, ESLint/Prettier (ESM), \
        Lefthook + commitlint, folder structure (types/), TS Project References + alias paths."
    );
    Ok(())
}
