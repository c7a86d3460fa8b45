// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Files and directories written on top of a freshly created Vite project.
//!
//! The layout is a fixed table of [`Stage`]s. Each stage is applied in order and reports a
//! progress message once all of its entries have been written. File contents are embedded from
//! `src/templates/react` at compile time and written byte-for-byte.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::utils::{create_dir_if_dne, remove_file_if_exists};

macro_rules! react {
    ($path:literal) => {
        template_file!("src/templates/react" -> $path)
    };
}

/// Config generated by older Tailwind setups, superseded by `tailwind.config.ts`.
pub const LEGACY_TAILWIND_CONFIG: &str = "tailwind.config.js";

pub static STAGES: &[Stage] = &[
    Stage {
        entries: &[
            react!("tailwind.config.ts"),
            Entry::Remove(LEGACY_TAILWIND_CONFIG),
            react!("postcss.config.js"),
            react!("src/index.css"),
        ],
        done: "Tailwind CSS configured.",
    },
    Stage {
        entries: &[react!("src/main.tsx")],
        done: "main.tsx created.",
    },
    Stage {
        entries: &[
            Entry::Dir("src/assets"),
            Entry::Dir("src/components"),
            Entry::Dir("src/constants"),
            Entry::Dir("src/hooks"),
            Entry::Dir("src/layouts"),
            Entry::Dir("src/pages"),
            Entry::Dir("src/routes"),
            Entry::Dir("src/services"),
            Entry::Dir("src/store"),
            Entry::Dir("src/utils"),
            Entry::Dir("src/types"),
            Entry::Dir("public"),
        ],
        done: "Folder structure created.",
    },
    Stage {
        entries: &[react!("src/routes/route.tsx")],
        done: "routes created.",
    },
    Stage {
        entries: &[react!("src/store/index.ts")],
        done: "Redux store configured.",
    },
    Stage {
        entries: &[react!("src/App.tsx")],
        done: "App.tsx created.",
    },
    Stage {
        entries: &[react!("vite.config.ts")],
        done: "Vite config with path aliases created.",
    },
    Stage {
        entries: &[react!("tsconfig.app.json")],
        done: "tsconfig.app.json created.",
    },
    Stage {
        entries: &[react!("eslint.config.js")],
        done: "ESLint config created.",
    },
    Stage {
        entries: &[react!(".prettierrc")],
        done: "Prettier config created.",
    },
    Stage {
        entries: &[
            react!("lefthook.yml"),
            react!(".lefthook/commit-msg/commitlint.sh"),
        ],
        done: "Lefthook and commitlint configured.",
    },
];

/// A group of entries followed by a progress message.
#[derive(Debug)]
pub struct Stage {
    pub entries: &'static [Entry],
    pub done: &'static str,
}

/// A single change to the project tree. Paths are relative to the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// Create a directory and its parents.
    Dir(&'static str),
    /// Write a file, creating its parent directory and overwriting any existing file.
    File {
        path: &'static str,
        contents: &'static str,
    },
    /// Remove a file if it exists.
    Remove(&'static str),
}

impl Entry {
    pub fn path(&self) -> &'static str {
        match *self {
            Entry::Dir(path) | Entry::File { path, .. } | Entry::Remove(path) => path,
        }
    }

    /// Apply this entry to the project rooted at `root`.
    pub fn apply(&self, root: impl AsRef<Path>) -> Result<(), EmitError> {
        let path = root.as_ref().join(self.path());
        match *self {
            Entry::Dir(_) => {
                create_dir_if_dne(&path).map_err(|err| EmitError::CreateDir(path.clone(), err))?;
                debug!(@grey, "created {}", path.display());
            }
            Entry::File { contents, .. } => {
                if let Some(parent) = path.parent() {
                    create_dir_if_dne(parent)
                        .map_err(|err| EmitError::CreateDir(parent.to_path_buf(), err))?;
                }
                fs::write(&path, contents).map_err(|err| EmitError::Write(path.clone(), err))?;
                debug!(@grey, "wrote {}", path.display());
            }
            Entry::Remove(_) => {
                if remove_file_if_exists(&path).map_err(|err| EmitError::Remove(path.clone(), err))? {
                    debug!(@grey, "removed {}", path.display());
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("failed to create directory {}: {}", .0.display(), .1)]
    CreateDir(PathBuf, #[source] io::Error),
    #[error("failed to write {}: {}", .0.display(), .1)]
    Write(PathBuf, #[source] io::Error),
    #[error("failed to remove {}: {}", .0.display(), .1)]
    Remove(PathBuf, #[source] io::Error),
}

/// Apply every stage to the project rooted at `root`, printing each stage's progress message.
///
/// Stops at the first failure; entries already applied are left in place.
pub fn emit(root: impl AsRef<Path>, stages: &[Stage]) -> Result<(), EmitError> {
    let root = root.as_ref();
    for stage in stages {
        for entry in stage.entries {
            entry.apply(root)?;
        }
        mintln!("✅ {}", stage.done);
    }
    Ok(())
}
