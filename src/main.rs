// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use envstamp::{cli::Args, config::StampConfig, logging};
use envstamp_shared_kernel::StampError;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let outcome = StampConfig::try_from(args)
        .map_err(anyhow::Error::from)
        .and_then(|config| envstamp::run(&config));
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<StampError>() {
                Some(stamp) => eprintln!("error: {} failed: {stamp}", stamp.stage()),
                None => eprintln!("error: {err}"),
            }
            ExitCode::FAILURE
        }
    }
}
