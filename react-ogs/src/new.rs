// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::ffi::OsString;

use ogs_tools::{
    core::project::{ProjectName, ViteVersion},
    ops,
    utils::npm::DEFAULT_NPM,
    Scaffold,
};

use crate::error::{ReactOgsError, ReactOgsResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Project name, also used as its directory name
    name: Option<String>,
    /// Version of create-vite to scaffold with
    #[arg(long, value_name = "VERSION", default_value = ViteVersion::LATEST)]
    vite: String,
    /// Program used to run npm
    #[arg(long, value_name = "PROGRAM", env = "REACT_OGS_NPM", default_value = DEFAULT_NPM)]
    npm: OsString,
}

pub fn exec(args: Args) -> ReactOgsResult {
    // Checked here rather than by clap so a missing name exits with code 1
    let name = ProjectName::new(args.name.unwrap_or_default()).map_err(ReactOgsError::usage)?;

    let scaffold = Scaffold::builder()
        .name(name)
        .vite(ViteVersion::new(Some(args.vite.as_str())))
        .npm(args.npm)
        .build();
    ops::new(&scaffold)?;
    Ok(())
}
