// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::convert::TryFrom;
use std::env;
use std::io::IsTerminal;

use anyhow::Result;
use tracing::{error, info};

use eaas::app::cli_parser::parse_args;
use eaas::app::console::Console;
use eaas::app::logging::Logging;
use eaas::app::{enumerate, AppConfig, ExitStatus};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let console = Console::new();

    let args = match parse_args(env::args_os()) {
        Ok(args) => args,
        Err(_) => {
            console.usage();
            std::process::exit(ExitStatus::CliParsingFailed as i32);
        }
    };

    let color = std::io::stderr().is_terminal();
    if let Err(err) = Logging::new(env::var_os("RUST_LOG"), color).start() {
        eprintln!("Failed to initialize logging: {:#}", err);
        std::process::exit(ExitStatus::UnrecoverableError as i32);
    }
    info!("Parsed args and set up logging.");

    let exit_status = match run(&args, &console).await {
        Ok(exit_status) => exit_status,
        Err(err) => {
            error!("Enumeration failed: {:#}", err);
            console.error(format!("{:#}", err));
            ExitStatus::UnrecoverableError
        }
    };
    info!("Exiting with status {:?}.", exit_status);

    std::process::exit(exit_status as i32);
}

async fn run(args: &clap::ArgMatches, console: &Console) -> Result<ExitStatus> {
    let app_config = AppConfig::try_from(args)?;
    enumerate::run(&app_config, console).await
}
