// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! CLI for `react-ogs`.

use std::process::ExitCode;

use clap::Parser;

mod constants;
mod error;
mod new;
mod utils;

#[derive(Debug, Parser)]
#[command(name = "react-ogs")]
#[command(author = "Offchain Labs, Inc.")]
#[command(
    about = "Create a React + Vite project with Tailwind, Redux, Router, Ant Design and linting set up",
    long_about = None
)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    new: new::Args,

    /// Whether to print debug info.
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    simple_logger::init_with_level(log_level).expect("setting up logger");

    // Report any error and return proper exit code
    match new::exec(args.new) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            utils::print_error(&err);
            err.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn name_is_optional_at_parse_time() {
        let cli = Cli::try_parse_from(["react-ogs"]).unwrap();
        assert!(!cli.verbose);

        let cli = Cli::try_parse_from(["react-ogs", "demo", "--vite=5.2.0", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }
}
