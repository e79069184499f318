// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

pub mod cli_parser;
pub mod config;
pub mod console;
pub mod enumerate;
pub mod logging;

pub use config::AppConfig;

/// `ExitStatus` represents the exit states that will be return to the OS after termination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// All fine. This includes lookups that failed or returned an error response code.
    Ok = 0,
    /// CLI argument parsing failed.
    CliParsingFailed = 1,
    /// An unrecoverable error occurred. This is worst case and should not happen.
    UnrecoverableError = 3,
}

/** Return type for App steps that may end the run early
 *
 * A step might finish without errors but still couldn't obtain the necessary information for the next step to
 * proceed. For this use case, `Partial` works similar to an Either type for the `Result::Ok` side of the execution.
 *
 * Think of it as a means for early returns.
 */
pub enum Partial<T> {
    Next(T),
    ExitStatus(ExitStatus),
}
