//! Drawflow CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info};

use drawflow_cli::{
    Args,
    error_adapter::{render, to_reportables},
};

fn main() -> ExitCode {
    miette::set_panic_hook();

    let args = Args::parse();
    let log_level = drawflow_cli::log_level(&args.log_level);
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Drawflow");
    debug!(args:?; "Parsed arguments");

    match drawflow_cli::run(&args) {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(err) => {
            for reportable in to_reportables(&err) {
                error!("{}", render(&reportable));
            }
            ExitCode::FAILURE
        }
    }
}
