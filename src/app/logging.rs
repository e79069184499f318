// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::ffi::OsString;

use anyhow::Result;
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

/// Log output goes to stderr so stdout only carries results and diagnostics.
pub struct Logging {
    rust_log: Option<OsString>,
    color: bool,
}

impl Logging {
    pub fn new(rust_log: Option<OsString>, color: bool) -> Logging {
        Logging { rust_log, color }
    }

    fn default_filter() -> String {
        format!("{}={}", env!("CARGO_CRATE_NAME"), LevelFilter::WARN)
    }

    pub fn start(self) -> Result<()> {
        // Subscribe to all log crate log messages and transform them to a tracing events
        LogTracer::init()?;

        let filter = if self.rust_log.is_some() {
            // This is controlled by the env variable RUST_LOG
            EnvFilter::from_default_env()
        } else {
            EnvFilter::from(Logging::default_filter())
        };

        let fmt = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(self.color)
            .with_target(false);

        let registry = tracing_subscriber::registry().with(filter).with(fmt);
        set_global_default(registry)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use super::*;

    #[test]
    fn default_filter_is_crate_warn() {
        assert_that(&Logging::default_filter().as_str()).is_equal_to("eaas=warn");
    }
}
