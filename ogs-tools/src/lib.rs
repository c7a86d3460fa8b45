// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for scaffolding React + Vite projects.
//!
//! The heavy lifting is delegated to `npm`: [`ops::new`] runs `npm create vite`, installs a fixed
//! set of dependencies, and then writes the project layout described by
//! [`core::project::layout::STAGES`](crate::core::project::layout::STAGES) on top of the generated project.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod ops;
pub mod utils;

mod scaffold;

pub use error::{CommandError, CommandFailure, Error, Result};
pub use scaffold::*;
