// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! EaaS - Enumeration as a Service
//!
//! Queries the TXT records of a domain and fingerprints the third-party services the domain uses by matching the
//! records against known SPF includes and domain verification tokens.
//!
//! # Example
//! ```no_run
//! # use eaas::resolver::Resolver;
//! # use eaas::report::{Matcher, Reporter};
//! # use eaas::signatures::SignatureTables;
//! # async fn run() -> eaas::Result<()> {
//! let resolver = Resolver::google();
//! let response = resolver.lookup_txt("example.com").await?;
//!
//! let matcher = Matcher::new(SignatureTables::builtin());
//! let matches = matcher.matches("example.com", response.answers());
//!
//! let mut stdout = std::io::stdout();
//! Reporter::default().report(&mut stdout, &matches)?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "app-cli")]
pub mod app;
pub mod error;
pub mod nameserver;
pub mod report;
pub mod resolver;
pub mod resources;
pub mod signatures;
#[cfg(test)]
pub(crate) mod utils;

pub use error::Error;
pub use hickory_proto::op::ResponseCode;
pub use hickory_proto::rr::{IntoName, Name};
pub use resources::RecordType;

pub type Result<T> = std::result::Result<T, Error>;
