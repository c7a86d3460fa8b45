// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// Embed a file from a template directory as a [`File`](crate::core::project::layout::Entry::File)
/// entry, keyed by its path relative to the project root.
macro_rules! template_file {
    ($tmpl:literal -> $path:literal) => {
        crate::core::project::layout::Entry::File {
            path: $path,
            contents: include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/", $tmpl, "/", $path)),
        }
    };
}

macro_rules! debug {
    (@$color:ident, $($msg:expr),*) => {{
        use crate::utils::color::Color;
        let msg = format!($($msg),*);
        log::debug!("{}", msg.$color())
    }};
}

macro_rules! greyln {
    ($($msg:expr),*) => {{
        use crate::utils::color::Color;
        let msg = format!($($msg),*);
        println!("{}", msg.grey())
    }};
}

macro_rules! mintln {
    ($($msg:expr),*) => {{
        use crate::utils::color::Color;
        let msg = format!($($msg),*);
        println!("{}", msg.mint())
    }};
}
