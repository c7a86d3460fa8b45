// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use style::{BOLD, ERROR, HINT};

use crate::error::ReactOgsError;

mod style;

pub fn print_error(err: &ReactOgsError) {
    eprintln!("{ERROR}error{ERROR:#}{BOLD}:{BOLD:#} {err}");
    if let Some(hint) = err.hint() {
        eprintln!("\n{HINT}{hint}{HINT:#}");
    }
}
