// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// Usage line printed when no project name is given.
pub const USAGE: &str = "usage: react-ogs <project-name> [--vite=<version>]";
