// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::convert::TryFrom;

use anyhow::Context;
use clap::ArgMatches;

use crate::nameserver::{predefined, NameServerConfig};
use crate::resolver::ResolverOpts;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub domain_name: String,
    pub nameserver: NameServerConfig,
    pub resolver_opts: ResolverOpts,
}

impl TryFrom<&ArgMatches> for AppConfig {
    type Error = anyhow::Error;

    fn try_from(args: &ArgMatches) -> std::result::Result<Self, Self::Error> {
        let domain_name = args
            .get_one::<String>("domain name")
            .context("No domain name to enumerate specified")?
            .to_string();

        Ok(AppConfig {
            domain_name,
            nameserver: predefined::google::udp(),
            resolver_opts: Default::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use spectral::prelude::*;

    use super::*;
    use crate::app::cli_parser::parse_args;
    use crate::nameserver::Protocol;

    #[test]
    fn from_args() {
        let args = parse_args(["eaas", "example.com"]).unwrap();

        let config = AppConfig::try_from(&args);

        assert_that(&config).is_ok();
        let config = config.unwrap();
        assert_that(&config.domain_name.as_str()).is_equal_to("example.com");
        assert_that(&config.nameserver.protocol()).is_equal_to(Protocol::Udp);
        assert_that(&config.nameserver.socket_addr().to_string().as_str()).is_equal_to("8.8.8.8:53");
        assert_that(&config.resolver_opts.timeout).is_equal_to(Duration::from_secs(2));
        assert_that(&config.resolver_opts.tcp_fallback).is_true();
    }
}
