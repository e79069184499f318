// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

pub use error::Error;
pub use query::UniQuery;
pub use response::Response;

use crate::nameserver::{predefined, NameServerConfig, Protocol};

pub mod error;
pub mod query;
pub mod response;
pub(crate) mod transport;

pub type ResolverResult<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone)]
pub struct ResolverOpts {
    pub timeout: Duration,
    /// Re-sends a query over TCP if the UDP response has been truncated
    pub tcp_fallback: bool,
}

impl Default for ResolverOpts {
    fn default() -> Self {
        ResolverOpts {
            timeout: Duration::from_secs(2),
            tcp_fallback: true,
        }
    }
}

/// Sends exactly one query per lookup to exactly one nameserver; there are no retries and no caching.
#[derive(Debug, Clone)]
pub struct Resolver {
    pub(crate) name_server: Arc<NameServerConfig>,
    pub(crate) opts: Arc<ResolverOpts>,
}

impl Resolver {
    pub fn new(name_server: NameServerConfig, opts: ResolverOpts) -> Self {
        Resolver {
            name_server: Arc::new(name_server),
            opts: Arc::new(opts),
        }
    }

    /// Creates a resolver using Google's public nameserver 8.8.8.8 on port 53 via UDP.
    pub fn google() -> Self {
        Resolver::new(predefined::google::udp(), Default::default())
    }

    pub async fn lookup_txt(&self, domain_name: &str) -> ResolverResult<Response> {
        let query = UniQuery::txt(domain_name)?;
        self.lookup(query).await
    }

    pub async fn lookup(&self, query: UniQuery) -> ResolverResult<Response> {
        let id: u16 = rand::random();
        let request = query.to_message(id);
        debug!(
            "Prepared {} query for {} with id {}.",
            query.record_type(),
            query.name(),
            id
        );

        let mut response = transport::exchange(&self.name_server, &request, self.opts.timeout).await?;
        if response.truncated() && self.opts.tcp_fallback && self.name_server.protocol() == Protocol::Udp {
            info!("Response from {} has been truncated; resending query via TCP.", self.name_server);
            let tcp = NameServerConfig::tcp(self.name_server.socket_addr());
            response = transport::exchange(&tcp, &request, self.opts.timeout).await?;
        }

        Ok(Response::from_message(query, &response))
    }

    pub fn name(&self) -> String {
        self.name_server.to_string()
    }

    pub fn opts(&self) -> &ResolverOpts {
        &self.opts
    }
}
