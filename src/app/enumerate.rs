// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::io;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::app::console::Console;
use crate::app::{AppConfig, ExitStatus, Partial};
use crate::report::{MatchResult, Matcher, Reporter};
use crate::resolver::{Resolver, Response};

pub async fn run(app_config: &AppConfig, console: &Console) -> Result<ExitStatus> {
    info!("eaas enumeration module selected.");
    let lookup = Enumerate::init(app_config, console);
    let matching = match lookup.lookup().await? {
        Partial::Next(matching) => matching,
        Partial::ExitStatus(exit_status) => return Ok(exit_status),
    };

    matching.match_signatures().output()
}

pub struct Enumerate {}

impl Enumerate {
    pub fn init<'a>(app_config: &'a AppConfig, console: &'a Console) -> TxtLookup<'a> {
        let resolver = Resolver::new(app_config.nameserver.clone(), app_config.resolver_opts.clone());
        info!("Created resolver for {}.", resolver.name());

        TxtLookup {
            app_config,
            console,
            resolver,
        }
    }
}

pub struct TxtLookup<'a> {
    app_config: &'a AppConfig,
    console: &'a Console,
    resolver: Resolver,
}

impl<'a> TxtLookup<'a> {
    /// A failed exchange ends the run without results; a failure response code is reported and its answers are
    /// matched nevertheless.
    pub async fn lookup(self) -> Result<Partial<Matching<'a>>> {
        info!("Running TXT lookup for {}.", &self.app_config.domain_name);
        let response = match self.resolver.lookup_txt(&self.app_config.domain_name).await {
            Ok(response) => response,
            Err(err) => {
                warn!("TXT lookup for {} failed: {}", &self.app_config.domain_name, err);
                self.console.error(&err);
                return Ok(Partial::ExitStatus(ExitStatus::Ok));
            }
        };
        info!("Finished TXT lookup with {} answers.", response.answers().len());

        if let Err(err) = response.ensure_success() {
            warn!("TXT lookup for {} returned {}.", &self.app_config.domain_name, err);
            self.console
                .invalid_answer(&self.app_config.domain_name, response.response_code());
        }

        Ok(Partial::Next(Matching {
            app_config: self.app_config,
            response,
        }))
    }
}

pub struct Matching<'a> {
    app_config: &'a AppConfig,
    response: Response,
}

impl<'a> Matching<'a> {
    pub fn match_signatures(self) -> Output {
        let matcher = Matcher::default();
        let matches = matcher.matches(&self.app_config.domain_name, self.response.answers());
        info!("Found {} matching signatures.", matches.len());

        Output { matches }
    }
}

pub struct Output {
    matches: Vec<MatchResult>,
}

impl Output {
    pub fn matches(&self) -> &[MatchResult] {
        &self.matches
    }

    pub fn output(self) -> Result<ExitStatus> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        Reporter::default()
            .report(&mut handle, &self.matches)
            .context("Failed to print matches to stdout")?;

        Ok(ExitStatus::Ok)
    }
}
