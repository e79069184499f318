// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{Arg, ArgMatches, Command};

pub static USAGE: &str = "EaaS - Enumeration as a Service.\nUsage : ./eaas [domain]";

/// Parses the command line, program name included.
///
/// Exactly one argument must follow the program name. It is always taken as the domain name, even if it starts
/// with a hyphen; `--` counts as an argument like any other.
pub fn parse_args<I, T>(args: I) -> Result<ArgMatches, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let mut parser = create_parser();
    if args.len() != 2 {
        return Err(parser.error(
            ErrorKind::WrongNumberOfValues,
            format!("expected exactly one domain name, got {}", args.len().saturating_sub(1)),
        ));
    }
    // Ends option parsing so the single argument binds to the domain name
    args.insert(1, OsString::from("--"));

    parser.try_get_matches_from(args)
}

/// Help and version flags are disabled; `parse_args` feeds this parser.
pub fn create_parser() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("domain name")
                .index(1)
                .required(true)
                .num_args(1)
                .value_name("DOMAIN")
                .help("domain name to enumerate")
                .long_help("* DOMAIN may be any valid DNS name, e.g., example.com"),
        )
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use super::*;

    fn domain_name(args: &ArgMatches) -> Option<&str> {
        args.get_one::<String>("domain name").map(String::as_str)
    }

    #[test]
    fn one_domain() {
        let args = parse_args(["eaas", "example.com"]);

        assert_that(&args.is_ok()).is_true();
        assert_that(&domain_name(&args.unwrap())).is_equal_to(Some("example.com"));
    }

    #[test]
    fn no_domain() {
        let args = parse_args(["eaas"]);

        assert_that(&args.is_err()).is_true();
    }

    #[test]
    fn two_domains() {
        let args = parse_args(["eaas", "example.com", "example.org"]);

        assert_that(&args.is_err()).is_true();
    }

    #[test]
    fn double_dash_counts_as_argument() {
        let args = parse_args(["eaas", "--", "example.com"]);

        assert_that(&args.is_err()).is_true();
    }

    #[test]
    fn leading_hyphen_is_a_domain() {
        let args = parse_args(["eaas", "-foo.example"]);

        assert_that(&args.is_ok()).is_true();
        assert_that(&domain_name(&args.unwrap())).is_equal_to(Some("-foo.example"));
    }

    #[test]
    fn flag_is_a_domain() {
        let args = parse_args(["eaas", "--help"]);

        assert_that(&args.is_ok()).is_true();
        assert_that(&domain_name(&args.unwrap())).is_equal_to(Some("--help"));
    }

    #[test]
    fn parser_is_consistent() {
        create_parser().debug_assert();
    }
}
